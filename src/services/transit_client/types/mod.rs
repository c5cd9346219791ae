pub mod mbta_get_stops_response;

pub mod mapbox_geocoding_response;

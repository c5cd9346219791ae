pub mod geocoding_client;
pub mod lookup_error;
pub mod stop_finder;
pub mod transit_client;

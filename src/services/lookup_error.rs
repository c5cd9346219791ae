use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Could not find location for '{0}'")]
    LocationNotFound(String),

    #[error("No transit stop found near latitude {latitude} and longitude {longitude}")]
    StopNotFound { latitude: f64, longitude: f64 },
}

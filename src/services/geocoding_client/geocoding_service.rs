use tracing::{debug, warn};
use urlencoding::encode;

use super::types::mapbox_geocoding_response::MapboxGeocodingResponse;
use crate::{
    services::lookup_error::LookupError,
    types::stop_location::Coordinates,
    utils::json_fetcher::JsonFetcher,
};

pub const DEFAULT_GEOCODING_HOST: &str = "https://api.mapbox.com";

#[derive(Clone)]
pub struct GeocodingServiceConfig {
    pub access_token: String,
    pub host: String,
}

#[derive(Clone)]
pub struct GeocodingService {
    config: GeocodingServiceConfig,
    fetcher: JsonFetcher,
}

impl GeocodingService {
    pub fn new(config: GeocodingServiceConfig) -> Self {
        Self {
            config,
            fetcher: JsonFetcher::new(),
        }
    }

    pub async fn geocode(&self, place_name: &str) -> Result<Coordinates, LookupError> {
        if place_name.trim().is_empty() {
            return Err(LookupError::LocationNotFound(place_name.to_string()));
        }

        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}",
            self.config.host,
            encode(place_name),
            encode(&self.config.access_token)
        );

        debug!("Geocoding '{}'", place_name);

        let feature = self
            .fetcher
            .fetch(&url, None)
            .await
            .into_typed::<MapboxGeocodingResponse>()
            .and_then(|body| body.into_first_feature())
            .ok_or_else(|| {
                warn!("Could not find location for '{}'", place_name);
                LookupError::LocationNotFound(place_name.to_string())
            })?;

        Ok(Coordinates::from_lon_lat(feature.geometry.coordinates))
    }
}

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, warn};

use super::types::mbta_get_stops_response::MbtaGetStopsResponse;
use crate::{
    services::lookup_error::LookupError,
    types::stop_location::StopResult,
    utils::json_fetcher::JsonFetcher,
};

pub const DEFAULT_TRANSIT_HOST: &str = "https://api-v3.mbta.com";

/// `wheelchair_boarding` value the provider uses for accessible stops.
pub const WHEELCHAIR_ACCESSIBLE: i64 = 1;

#[derive(Clone)]
pub struct TransitServiceConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Clone)]
pub struct TransitService {
    config: TransitServiceConfig,
    fetcher: JsonFetcher,
}

impl TransitService {
    pub fn new(config: TransitServiceConfig) -> Self {
        Self {
            config,
            fetcher: JsonFetcher::new(),
        }
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        match HeaderValue::from_str(&format!("Bearer {}", self.config.api_key)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Transit API key is not a valid header value, sending request without it"),
        }

        headers
    }

    /// Finds the stop closest to the given point.
    pub async fn nearest_stop(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<StopResult, LookupError> {
        let url = format!(
            "{}/stops?filter[latitude]={}&filter[longitude]={}&sort=distance",
            self.config.host, latitude, longitude
        );

        debug!("Looking up nearest stop to {}, {}", latitude, longitude);

        // Sorted by distance, so the first record is the closest stop.
        let stop = self
            .fetcher
            .fetch(&url, Some(self.auth_headers()))
            .await
            .into_typed::<MbtaGetStopsResponse>()
            .and_then(|body| body.into_first_stop())
            .ok_or_else(|| {
                warn!(
                    "No transit stop found near latitude {} and longitude {}",
                    latitude, longitude
                );
                LookupError::StopNotFound {
                    latitude,
                    longitude,
                }
            })?;

        Ok(StopResult {
            name: stop.attributes.name,
            wheelchair_accessible: stop.attributes.wheelchair_boarding
                == Some(WHEELCHAIR_ACCESSIBLE),
        })
    }
}

use std::env;

use tracing::warn;

use crate::services::{
    geocoding_client::geocoding_service::{GeocodingServiceConfig, DEFAULT_GEOCODING_HOST},
    transit_client::transit_service::{TransitServiceConfig, DEFAULT_TRANSIT_HOST},
};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub geocoding: GeocodingServiceConfig,
    pub transit: TransitServiceConfig,
    /// Public token handed to the browser for map display.
    pub map_display_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Missing provider credentials are logged rather than fatal; requests
    /// made without them fail at the provider.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credential = |key: &str| {
            value(key).unwrap_or_else(|| {
                warn!("{} is not set, requests to its provider will fail", key);
                String::new()
            })
        };

        AppConfig {
            bind_address: value("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            geocoding: GeocodingServiceConfig {
                access_token: credential("MAPBOX_API_KEY"),
                host: value("MAPBOX_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEOCODING_HOST.to_string()),
            },
            transit: TransitServiceConfig {
                api_key: credential("MBTA_API_KEY"),
                host: value("MBTA_BASE_URL").unwrap_or_else(|| DEFAULT_TRANSIT_HOST.to_string()),
            },
            map_display_key: value("MAPBOX_PUBLIC_KEY").or_else(|| value("MAPBOX_API_KEY")),
        }
    }
}

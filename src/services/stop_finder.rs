use super::{
    geocoding_client::geocoding_service::{GeocodingService, GeocodingServiceConfig},
    lookup_error::LookupError,
    transit_client::transit_service::{TransitService, TransitServiceConfig},
};
use crate::types::stop_location::{Coordinates, StopLocation, StopResult};

/// Geocodes a place and then looks up the transit stop closest to it.
#[derive(Clone)]
pub struct StopFinder {
    geocoding_service: GeocodingService,
    transit_service: TransitService,
}

impl StopFinder {
    pub fn new(geocoding: GeocodingServiceConfig, transit: TransitServiceConfig) -> Self {
        Self {
            geocoding_service: GeocodingService::new(geocoding),
            transit_service: TransitService::new(transit),
        }
    }

    pub async fn geocode(&self, place_name: &str) -> Result<Coordinates, LookupError> {
        self.geocoding_service.geocode(place_name).await
    }

    pub async fn locate(&self, place_name: &str) -> Result<StopLocation, LookupError> {
        let coordinates = self.geocoding_service.geocode(place_name).await?;
        let stop = self
            .transit_service
            .nearest_stop(coordinates.latitude, coordinates.longitude)
            .await?;

        Ok(StopLocation { coordinates, stop })
    }

    pub async fn find_nearest_stop_for(&self, place_name: &str) -> Result<StopResult, LookupError> {
        self.locate(place_name).await.map(|location| location.stop)
    }
}

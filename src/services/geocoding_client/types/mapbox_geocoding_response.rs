use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Deserialize, Serialize)]
pub struct MapboxGeometry {
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

#[derive(Deserialize, Serialize)]
pub struct MapboxFeature {
    pub geometry: MapboxGeometry,
}

#[derive(Deserialize, Serialize)]
pub struct MapboxGeocodingResponse {
    pub features: Vec<Value>,
}

impl MapboxGeocodingResponse {
    // Later features are never read, so their shape doesn't matter.
    pub fn into_first_feature(self) -> Option<MapboxFeature> {
        let first = self.features.into_iter().next()?;

        serde_json::from_value(first)
            .map_err(|e| warn!("First geocoding feature is malformed: {}", e))
            .ok()
    }
}

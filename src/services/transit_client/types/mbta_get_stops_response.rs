use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Deserialize, Serialize)]
pub struct MbtaStopAttributes {
    pub name: String,
    #[serde(default)]
    pub wheelchair_boarding: Option<i64>,
}

#[derive(Deserialize, Serialize)]
pub struct MbtaStop {
    pub attributes: MbtaStopAttributes,
}

#[derive(Deserialize, Serialize)]
pub struct MbtaGetStopsResponse {
    pub data: Vec<Value>,
}

impl MbtaGetStopsResponse {
    // Records are sorted by distance; only the closest one is read.
    pub fn into_first_stop(self) -> Option<MbtaStop> {
        let first = self.data.into_iter().next()?;

        serde_json::from_value(first)
            .map_err(|e| warn!("First stop record is malformed: {}", e))
            .ok()
    }
}

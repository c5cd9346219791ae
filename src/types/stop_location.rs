/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds coordinates from a GeoJSON-style `[longitude, latitude]` pair.
    pub fn from_lon_lat([longitude, latitude]: [f64; 2]) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StopResult {
    pub name: String,
    pub wheelchair_accessible: bool,
}

/// A resolved place together with the stop closest to it.
#[derive(Clone, Debug, PartialEq)]
pub struct StopLocation {
    pub coordinates: Coordinates,
    pub stop: StopResult,
}

use serde::Deserialize;
use std::fmt;

/// A latitude/longitude pair in floating-point degrees.
///
/// Deserializes directly from the `{"lat": .., "lng": ..}` objects the Google
/// Maps APIs return.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The `"lat,lng"` form the upstream APIs expect for `location` and
    /// `center` query parameters.
    pub fn as_query_value(&self) -> String {
        format!("{:?},{:?}", self.latitude, self.longitude)
    }
}

// Shortest-roundtrip float formatting, so a whole-degree latitude still reads
// "45.0" rather than "45".
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}, {:?}", self.latitude, self.longitude)
    }
}

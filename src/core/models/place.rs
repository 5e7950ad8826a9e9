use std::fmt;

use crate::core::models::Coordinate;
use crate::global_constants;

/// One candidate from a place text search, in upstream relevance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub coordinate: Coordinate,
    pub zoom: u8,
}

impl Place {
    pub fn new(name: String, coordinate: Coordinate) -> Self {
        Self {
            name,
            coordinate,
            zoom: global_constants::PLACE_LIST_ZOOM,
        }
    }
}

// Selector label: "name (lat, lon)".
impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.coordinate)
    }
}

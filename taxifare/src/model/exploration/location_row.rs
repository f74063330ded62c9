use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Pickup,
    Dropoff,
}

impl LocationKind {
    /// map marker color
    pub fn color(&self) -> &'static str {
        match self {
            LocationKind::Pickup => "#1f77b4",
            LocationKind::Dropoff => "#ff7f0e",
        }
    }
}

/// one point of the trip location map
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub latitude: f64,
    pub longitude: f64,
    pub kind: LocationKind,
    pub color: String,
}

impl LocationRow {
    pub fn new(latitude: f64, longitude: f64, kind: LocationKind) -> LocationRow {
        LocationRow {
            latitude,
            longitude,
            kind,
            color: kind.color().to_string(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WGS84 decimal-degree pair. Range checks happen at the configuration
/// boundary; values arriving from the backend are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Occupancy is a nullable boolean on the wire; `null` means the sensor
/// state is unknown, which is NOT the same as free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyState {
    Occupied,
    Free,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub parking_spot_id: i64,
    pub name: String,
    pub occupied: Option<bool>,
    pub updated_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

impl ParkingSpot {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    pub fn occupancy(&self) -> OccupancyState {
        match self.occupied {
            Some(true) => OccupancyState::Occupied,
            Some(false) => OccupancyState::Free,
            None => OccupancyState::Unknown,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupancy() == OccupancyState::Free
    }
}

/// One wholesale fetch of the spot collection. Snapshots replace each other
/// entirely; there is no client-side merge or cache.
#[derive(Debug, Clone)]
pub struct SpotSnapshot {
    pub updated_at: DateTime<Utc>,
    pub spots: Vec<ParkingSpot>,
}

/// A selected spot together with its great-circle distance from the
/// reference point, for "meters away" display.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub spot: ParkingSpot,
    pub distance_m: f64,
}

/// Outcome of the nearest-free-spot computation. `NotFound` is a normal
/// business outcome, not an error; exactly one variant holds.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionResult {
    Found(Resolution),
    NotFound,
}

impl ResolutionResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(&self) -> Option<&Resolution> {
        match self {
            Self::Found(resolution) => Some(resolution),
            Self::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub weight: u64,
}

/// One row of a spot's occupancy history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotStatusChange {
    pub occupied: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotDetail {
    pub history: Vec<SpotStatusChange>,
    pub is_favourite: bool,
    pub is_notification_enabled: bool,
}

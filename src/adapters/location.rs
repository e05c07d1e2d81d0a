use crate::domain::model::Coordinate;
use crate::domain::ports::LocationProvider;
use crate::utils::error::{ParkingError, Result};
use async_trait::async_trait;

/// Location provider backed by an already-known coordinate (CLI flags, a
/// stored fix). The CLI has no GPS; the position is assembled up front.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    position: Coordinate,
}

impl FixedLocation {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinate> {
        Ok(self.position)
    }
}

/// Stand-in for a platform location service that refused access. Lets
/// callers exercise the permission-denied path without a device.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn current_position(&self) -> Result<Coordinate> {
        Err(ParkingError::LocationPermissionDenied)
    }
}

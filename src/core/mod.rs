pub mod finder;
pub mod resolver;

pub use crate::domain::model::{Coordinate, ParkingSpot, Resolution, ResolutionResult};
pub use crate::domain::ports::{ConfigProvider, LocationProvider, SpotDataSource};
pub use crate::utils::error::Result;

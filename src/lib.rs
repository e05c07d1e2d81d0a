pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::api_client::ParkingApiClient;
pub use adapters::location::{DeniedLocation, FixedLocation};
pub use core::finder::{FinderEngine, ResolutionMode};
pub use core::resolver::{haversine_distance_m, resolve_nearest_free_spot};
pub use domain::model::{Coordinate, ParkingSpot, Resolution, ResolutionResult};
pub use utils::error::{ParkingError, Result};

use crate::core::resolver::{haversine_distance_m, resolve_nearest_free_spot};
use crate::domain::model::{Coordinate, Resolution, ResolutionResult};
use crate::domain::ports::{LocationProvider, SpotDataSource};
use crate::utils::error::{ParkingError, Result};
use crate::utils::monitor::SystemMonitor;

/// Where the nearest-free-spot computation runs. `Remote` delegates to the
/// backend's `find-closest-free-spot` endpoint and keeps the client a thin
/// caller; both modes honour the same contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionMode {
    #[default]
    Local,
    Remote,
}

/// Composes a location provider and the spot data source around the pure
/// resolver. Upstream failures (permission denied, fetch failed) surface as
/// errors before the resolver ever runs; `NotFound` travels in the success
/// channel.
pub struct FinderEngine<L: LocationProvider, D: SpotDataSource> {
    location: L,
    spots: D,
    monitor: SystemMonitor,
}

impl<L: LocationProvider, D: SpotDataSource> FinderEngine<L, D> {
    pub fn new(location: L, spots: D) -> Self {
        Self {
            location,
            spots,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(location: L, spots: D, monitor_enabled: bool) -> Self {
        Self {
            location,
            spots,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// "Find closest spot" action: reference point is the current position.
    pub async fn find_closest_spot(&self, mode: ResolutionMode) -> Result<ResolutionResult> {
        tracing::debug!("Requesting current position");
        let reference = self.location.current_position().await?;
        self.monitor.log_stats("Locate");

        tracing::info!(
            "📍 Reference point: ({:.4}, {:.4})",
            reference.latitude,
            reference.longitude
        );
        self.resolve_from(reference, mode).await
    }

    /// "Find closest to my favourite" action: reference point comes from the
    /// stored favourite spot. A missing favourite is its own named outcome.
    pub async fn find_closest_to_favourite(
        &self,
        user_id: i64,
        mode: ResolutionMode,
    ) -> Result<ResolutionResult> {
        tracing::debug!("Looking up favourite spot for user {}", user_id);
        let favourite = self
            .spots
            .fetch_favourite_spot(user_id)
            .await?
            .ok_or(ParkingError::NoFavouriteSpot { user_id })?;

        tracing::info!(
            "⭐ Favourite spot '{}' ({}, {})",
            favourite.name,
            favourite.latitude,
            favourite.longitude
        );
        self.resolve_from(favourite.coordinate(), mode).await
    }

    async fn resolve_from(
        &self,
        reference: Coordinate,
        mode: ResolutionMode,
    ) -> Result<ResolutionResult> {
        let result = match mode {
            ResolutionMode::Local => {
                tracing::debug!("Fetching spot snapshot for local resolution");
                let snapshot = self.spots.fetch_all_spots().await?;
                self.monitor.log_stats("Fetch");
                tracing::info!(
                    "📡 Fetched {} spots (backend updated at {})",
                    snapshot.spots.len(),
                    snapshot.updated_at
                );

                resolve_nearest_free_spot(reference, &snapshot.spots)
            }
            ResolutionMode::Remote => {
                tracing::debug!("Delegating resolution to the backend");
                let spot = self.spots.find_closest_free_spot(reference).await?;
                self.monitor.log_stats("Fetch");

                match spot {
                    // 回應不含距離，用同一個公式在本地補算
                    Some(spot) => {
                        let distance_m = haversine_distance_m(reference, spot.coordinate());
                        ResolutionResult::Found(Resolution { spot, distance_m })
                    }
                    None => ResolutionResult::NotFound,
                }
            }
        };

        match &result {
            ResolutionResult::Found(resolution) => tracing::info!(
                "✅ Closest free spot: '{}' ({:.0} m away)",
                resolution.spot.name,
                resolution.distance_m
            ),
            ResolutionResult::NotFound => tracing::info!("🅿️ No free parking spot available"),
        }
        self.monitor.log_final_stats();

        Ok(result)
    }
}

use crate::domain::model::{
    Coordinate, HeatmapPoint, ParkingSpot, ParkingSpotDetail, SpotSnapshot,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the reference point for a resolution. Fails with
/// `LocationPermissionDenied` when no position can be obtained.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate>;
}

/// The parking backend as seen by this crate. One wholesale fetch per call;
/// snapshots are never cached or merged client-side.
#[async_trait]
pub trait SpotDataSource: Send + Sync {
    async fn fetch_all_spots(&self) -> Result<SpotSnapshot>;

    async fn fetch_favourite_spot(&self, user_id: i64) -> Result<Option<ParkingSpot>>;

    async fn fetch_spot_coordinates(&self, spot_id: i64) -> Result<Coordinate>;

    async fn fetch_spot_detail(&self, user_id: i64, spot_id: i64) -> Result<ParkingSpotDetail>;

    async fn fetch_heatmap(&self) -> Result<Vec<HeatmapPoint>>;

    /// Server-hosted resolution (`POST /find-closest-free-spot`). `None`
    /// means the backend found no free spot.
    async fn find_closest_free_spot(&self, reference: Coordinate) -> Result<Option<ParkingSpot>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
    fn user_id(&self) -> Option<i64>;
}

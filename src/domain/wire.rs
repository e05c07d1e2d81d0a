//! JSON shapes of the parking backend. Field names follow the backend's
//! camelCase convention exactly; conversions into domain types live here so
//! the rest of the crate never touches raw payloads.

use crate::domain::model::{
    Coordinate, HeatmapPoint, ParkingSpot, ParkingSpotDetail, Resolution, ResolutionResult,
    SpotSnapshot,
};
use crate::utils::error::{ParkingError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `GET /all-spots`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllSpotsResponse {
    pub updated_at: DateTime<Utc>,
    pub data: Vec<ParkingSpot>,
}

impl From<AllSpotsResponse> for SpotSnapshot {
    fn from(response: AllSpotsResponse) -> Self {
        SpotSnapshot {
            updated_at: response.updated_at,
            spots: response.data,
        }
    }
}

/// `POST /find-closest-free-spot` request body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClosestSpotRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for ClosestSpotRequest {
    fn from(reference: Coordinate) -> Self {
        Self {
            latitude: reference.latitude,
            longitude: reference.longitude,
        }
    }
}

/// `POST /find-closest-free-spot` response. `success:false` carries the
/// single `error` string; a successful run without a spot means the filtered
/// candidate set was empty, which is a valid outcome and not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosestSpotResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_free_spot: Option<ParkingSpot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClosestSpotResponse {
    pub fn from_result(result: &ResolutionResult) -> Self {
        match result {
            ResolutionResult::Found(resolution) => Self {
                success: true,
                closest_free_spot: Some(resolution.spot.clone()),
                error: None,
            },
            ResolutionResult::NotFound => Self {
                success: true,
                closest_free_spot: None,
                error: None,
            },
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            closest_free_spot: None,
            error: Some(message.into()),
        }
    }

    /// 解開後端回應：失敗走錯誤通道，成功但沒有車位是正常結果
    pub fn into_spot(self) -> Result<Option<ParkingSpot>> {
        if !self.success {
            return Err(ParkingError::BackendError {
                message: self
                    .error
                    .unwrap_or_else(|| "backend returned success=false without detail".to_string()),
            });
        }
        Ok(self.closest_free_spot)
    }
}

/// `GET /favourite-spot/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteSpotResponse {
    pub favourite_spot: Option<ParkingSpot>,
}

/// One value of the `GET /heatmap` object (keyed by spot id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub latitude: f64,
    pub longitude: f64,
    pub times_occupied: u64,
}

impl From<HeatmapCell> for HeatmapPoint {
    fn from(cell: HeatmapCell) -> Self {
        HeatmapPoint {
            latitude: cell.latitude,
            longitude: cell.longitude,
            weight: cell.times_occupied,
        }
    }
}

pub fn heatmap_points(cells: HashMap<String, HeatmapCell>) -> Vec<HeatmapPoint> {
    cells.into_values().map(HeatmapPoint::from).collect()
}

/// `POST /spot-detail-by-id` request body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDetailRequest {
    pub user_id: i64,
    pub spot_id: i64,
}

/// `POST /spot-detail-by-id` response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotDetailResponse {
    pub data: ParkingSpotDetail,
}

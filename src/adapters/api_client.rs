use crate::domain::model::{
    Coordinate, HeatmapPoint, ParkingSpot, ParkingSpotDetail, SpotSnapshot,
};
use crate::domain::ports::{ConfigProvider, SpotDataSource};
use crate::domain::wire::{
    heatmap_points, AllSpotsResponse, ClosestSpotRequest, ClosestSpotResponse, FavouriteSpotResponse,
    HeatmapCell, SpotDetailRequest, SpotDetailResponse,
};
use crate::utils::error::{ParkingError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Reqwest-backed client of the parking backend (`{base}/...` REST surface,
/// camelCase JSON).
#[derive(Debug, Clone)]
pub struct ParkingApiClient {
    base_url: String,
    client: Client,
}

impl ParkingApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.api_base_url(),
            Duration::from_secs(config.request_timeout_seconds()),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let endpoint = self.endpoint(path);
        tracing::debug!("📡 GET {}", endpoint);

        let response = self.client.get(&endpoint).send().await?;
        tracing::debug!("📡 {} answered {}", endpoint, response.status());

        if !response.status().is_success() {
            return Err(ParkingError::ApiStatusError {
                endpoint,
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let endpoint = self.endpoint(path);
        tracing::debug!("📡 POST {}", endpoint);

        let response = self.client.post(&endpoint).json(body).send().await?;
        tracing::debug!("📡 {} answered {}", endpoint, response.status());

        if !response.status().is_success() {
            return Err(ParkingError::ApiStatusError {
                endpoint,
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SpotDataSource for ParkingApiClient {
    async fn fetch_all_spots(&self) -> Result<SpotSnapshot> {
        let response: AllSpotsResponse = self.get_json("all-spots").await?;
        Ok(response.into())
    }

    async fn fetch_favourite_spot(&self, user_id: i64) -> Result<Option<ParkingSpot>> {
        let response: FavouriteSpotResponse =
            self.get_json(&format!("favourite-spot/{}", user_id)).await?;
        Ok(response.favourite_spot)
    }

    async fn fetch_spot_coordinates(&self, spot_id: i64) -> Result<Coordinate> {
        self.get_json(&format!("spot-coordinates/{}", spot_id)).await
    }

    async fn fetch_spot_detail(&self, user_id: i64, spot_id: i64) -> Result<ParkingSpotDetail> {
        let response: SpotDetailResponse = self
            .post_json("spot-detail-by-id", &SpotDetailRequest { user_id, spot_id })
            .await?;
        Ok(response.data)
    }

    async fn fetch_heatmap(&self) -> Result<Vec<HeatmapPoint>> {
        // 回應是以車位 id 為 key 的物件，順序不保證
        let cells: HashMap<String, HeatmapCell> = self.get_json("heatmap").await?;
        Ok(heatmap_points(cells))
    }

    async fn find_closest_free_spot(&self, reference: Coordinate) -> Result<Option<ParkingSpot>> {
        let response: ClosestSpotResponse = self
            .post_json("find-closest-free-spot", &ClosestSpotRequest::from(reference))
            .await?;
        response.into_spot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> ParkingApiClient {
        ParkingApiClient::new(server.url("/parking"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_all_spots() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/parking/all-spots");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "updatedAt": "2024-04-21T10:00:00Z",
                    "data": [
                        {"parkingSpotId": 1, "name": "A1", "occupied": false,
                         "updatedAt": "2024-04-21T09:59:00Z",
                         "latitude": 49.2043, "longitude": 18.7561}
                    ]
                }));
        });

        let snapshot = client(&server).fetch_all_spots().await.unwrap();

        api_mock.assert();
        assert_eq!(snapshot.spots.len(), 1);
        assert_eq!(snapshot.spots[0].name, "A1");
        assert!(snapshot.spots[0].is_free());
    }

    #[tokio::test]
    async fn test_fetch_all_spots_server_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/parking/all-spots");
            then.status(503);
        });

        let result = client(&server).fetch_all_spots().await;

        api_mock.assert();
        match result {
            Err(ParkingError::ApiStatusError { status: 503, endpoint }) => {
                assert!(endpoint.ends_with("/all-spots"))
            }
            other => panic!("expected ApiStatusError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_favourite_spot_present_and_absent() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/parking/favourite-spot/42");
            then.status(200).json_body(serde_json::json!({
                "favouriteSpot": {
                    "parkingSpotId": 9, "name": "B2", "occupied": true,
                    "updatedAt": "2024-04-21T09:00:00Z",
                    "latitude": 49.21, "longitude": 18.76
                }
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/parking/favourite-spot/43");
            then.status(200)
                .json_body(serde_json::json!({ "favouriteSpot": null }));
        });

        let api = client(&server);
        let favourite = api.fetch_favourite_spot(42).await.unwrap();
        assert_eq!(favourite.unwrap().parking_spot_id, 9);

        let none = api.fetch_favourite_spot(43).await.unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_fetch_spot_coordinates() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/parking/spot-coordinates/7");
            then.status(200)
                .json_body(serde_json::json!({"latitude": 49.2042, "longitude": 18.7560}));
        });

        let coordinate = client(&server).fetch_spot_coordinates(7).await.unwrap();

        api_mock.assert();
        assert_eq!(coordinate.latitude, 49.2042);
        assert_eq!(coordinate.longitude, 18.7560);
    }

    #[tokio::test]
    async fn test_fetch_spot_detail() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/parking/spot-detail-by-id")
                .json_body(serde_json::json!({"userId": 42, "spotId": 7}));
            then.status(200).json_body(serde_json::json!({
                "data": {
                    "history": [
                        {"occupied": true, "updatedAt": "2024-04-21T08:00:00Z"},
                        {"occupied": false, "updatedAt": "2024-04-21T09:00:00Z"}
                    ],
                    "isFavourite": true,
                    "isNotificationEnabled": false
                }
            }));
        });

        let detail = client(&server).fetch_spot_detail(42, 7).await.unwrap();

        api_mock.assert();
        assert_eq!(detail.history.len(), 2);
        assert!(detail.is_favourite);
        assert!(!detail.is_notification_enabled);
    }

    #[tokio::test]
    async fn test_fetch_heatmap() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/parking/heatmap");
            then.status(200).json_body(serde_json::json!({
                "12": {"latitude": 49.2, "longitude": 18.75, "timesOccupied": 41},
                "13": {"latitude": 49.3, "longitude": 18.76, "timesOccupied": 7}
            }));
        });

        let mut points = client(&server).fetch_heatmap().await.unwrap();
        points.sort_by_key(|p| p.weight);

        api_mock.assert();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].weight, 41);
    }

    #[tokio::test]
    async fn test_find_closest_free_spot_remote() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/parking/find-closest-free-spot")
                .json_body(serde_json::json!({"latitude": 49.2042, "longitude": 18.7560}));
            then.status(200).json_body(serde_json::json!({
                "success": true,
                "closestFreeSpot": {
                    "parkingSpotId": 1, "name": "A1", "occupied": false,
                    "updatedAt": "2024-04-21T09:59:00Z",
                    "latitude": 49.2043, "longitude": 18.7561
                }
            }));
        });

        let spot = client(&server)
            .find_closest_free_spot(Coordinate::new(49.2042, 18.7560))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(spot.unwrap().parking_spot_id, 1);
    }

    #[tokio::test]
    async fn test_find_closest_free_spot_backend_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/parking/find-closest-free-spot");
            then.status(200)
                .json_body(serde_json::json!({"success": false, "error": "sensor feed down"}));
        });

        let result = client(&server)
            .find_closest_free_spot(Coordinate::new(49.2042, 18.7560))
            .await;

        match result {
            Err(ParkingError::BackendError { message }) => assert_eq!(message, "sensor feed down"),
            other => panic!("expected BackendError, got {:?}", other),
        }
    }
}

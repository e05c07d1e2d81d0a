//! The backend re-exposes the resolver as `POST /find-closest-free-spot`
//! with a `{success, closestFreeSpot | error}` shape. These tests pin the
//! wire parity of the remote mode against a mock of that endpoint.

use httpmock::prelude::*;
use parking_scout::adapters::location::FixedLocation;
use parking_scout::domain::wire::ClosestSpotResponse;
use parking_scout::{
    haversine_distance_m, Coordinate, FinderEngine, ParkingApiClient, ParkingError,
    ResolutionMode, ResolutionResult,
};
use std::time::Duration;

fn client(server: &MockServer) -> ParkingApiClient {
    ParkingApiClient::new(server.url("/parking"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_remote_mode_sends_exact_request_shape() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/parking/find-closest-free-spot")
            .header("Content-Type", "application/json")
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

    let reference = Coordinate::new(49.2042, 18.7560);
    let engine = FinderEngine::new(FixedLocation::new(reference), client(&server));

    let result = engine
        .find_closest_spot(ResolutionMode::Remote)
        .await
        .unwrap();

    api_mock.assert();
    let resolution = result.found().unwrap();
    assert_eq!(resolution.spot.parking_spot_id, 1);

    // 回應不含距離，客戶端用同一個公式補算
    let expected = haversine_distance_m(reference, resolution.spot.coordinate());
    assert_eq!(resolution.distance_m, expected);
}

#[tokio::test]
async fn test_remote_mode_no_spot_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/parking/find-closest-free-spot");
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let engine = FinderEngine::new(
        FixedLocation::new(Coordinate::new(49.2042, 18.7560)),
        client(&server),
    );

    let result = engine
        .find_closest_spot(ResolutionMode::Remote)
        .await
        .unwrap();
    assert_eq!(result, ResolutionResult::NotFound);
}

#[tokio::test]
async fn test_remote_mode_backend_error_is_not_conflated_with_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/parking/find-closest-free-spot");
        then.status(200)
            .json_body(serde_json::json!({"success": false, "error": "sensor feed down"}));
    });

    let engine = FinderEngine::new(
        FixedLocation::new(Coordinate::new(49.2042, 18.7560)),
        client(&server),
    );

    match engine.find_closest_spot(ResolutionMode::Remote).await {
        Err(ParkingError::BackendError { message }) => assert_eq!(message, "sensor feed down"),
        other => panic!("expected BackendError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_local_result_serializes_to_backend_response_shape() {
    // 本地解析的結果必須能原樣充當後端回應
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/parking/all-spots");
        then.status(200).json_body(serde_json::json!({
            "updatedAt": "2024-04-21T10:00:00Z",
            "data": [
                {"parkingSpotId": 1, "name": "A1", "occupied": false,
                 "updatedAt": "2024-04-21T09:59:00Z", "latitude": 49.2043, "longitude": 18.7561}
            ]
        }));
    });

    let engine = FinderEngine::new(
        FixedLocation::new(Coordinate::new(49.2042, 18.7560)),
        client(&server),
    );
    let result = engine
        .find_closest_spot(ResolutionMode::Local)
        .await
        .unwrap();

    let json = serde_json::to_value(ClosestSpotResponse::from_result(&result)).unwrap();
    assert_eq!(json.get("success").unwrap(), true);

    let spot = json.get("closestFreeSpot").unwrap();
    assert_eq!(spot.get("parkingSpotId").unwrap(), 1);
    assert_eq!(spot.get("latitude").unwrap(), 49.2043);
    assert_eq!(spot.get("longitude").unwrap(), 18.7561);
}

#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use parking_scout::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use parking_scout::core::resolver::resolve_nearest_free_spot;
#[cfg(feature = "lambda")]
use parking_scout::domain::ports::SpotDataSource;
#[cfg(feature = "lambda")]
use parking_scout::domain::wire::ClosestSpotResponse;
#[cfg(feature = "lambda")]
use parking_scout::utils::validation::Validate;
#[cfg(feature = "lambda")]
use parking_scout::{Coordinate, ParkingApiClient, ParkingError};
#[cfg(feature = "lambda")]
use serde::Deserialize;

/// `POST /parking/find-closest-free-spot` request shape, plus an optional
/// backend override for ad-hoc invocations.
#[cfg(feature = "lambda")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub latitude: f64,
    pub longitude: f64,
    pub api_endpoint: Option<String>,
}

#[cfg(feature = "lambda")]
async fn resolve(event: &Request) -> Result<ClosestSpotResponse, ParkingError> {
    // 設置環境變量 (如果事件中有的話)
    if let Some(endpoint) = &event.api_endpoint {
        std::env::set_var("PARKING_API_URL", endpoint);
    }

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let reference = Coordinate::new(event.latitude, event.longitude);
    let api = ParkingApiClient::from_config(&config)?;

    let snapshot = api.fetch_all_spots().await?;
    tracing::info!(
        "📡 Fetched {} spots, resolving against ({:.4}, {:.4})",
        snapshot.spots.len(),
        reference.latitude,
        reference.longitude
    );

    let result = resolve_nearest_free_spot(reference, &snapshot.spots);
    Ok(ClosestSpotResponse::from_result(&result))
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<ClosestSpotResponse, Error> {
    tracing::info!("Starting find-closest-free-spot handler");

    // 失敗也要維持 {success:false, error} 的回應形狀
    let response = match resolve(&event.payload).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("❌ Resolution failed: {}", e);
            ClosestSpotResponse::failure(e.user_friendly_message())
        }
    };

    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    parking_scout::utils::logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}

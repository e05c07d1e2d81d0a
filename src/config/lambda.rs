#[cfg(feature = "lambda")]
use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
#[cfg(feature = "lambda")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "lambda")]
use crate::utils::error::Result;
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base_url: env::var("PARKING_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECONDS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        })
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }

    fn user_id(&self) -> Option<i64> {
        None
    }
}

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("api_base_url", &self.api_base_url)?;
        validate_positive_number(
            "request_timeout_seconds",
            self.request_timeout_seconds,
            1,
        )?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

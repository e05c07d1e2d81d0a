pub mod toml_config;

#[cfg(feature = "lambda")]
pub mod lambda;

use crate::domain::model::Coordinate;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    self, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/parking";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "parking-scout"),
    command(about = "Find the closest free parking spot")
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Base URL of the parking backend
    #[cfg_attr(feature = "cli", arg(long))]
    pub api_base_url: Option<String>,

    /// Reference latitude in decimal degrees
    #[cfg_attr(feature = "cli", arg(long))]
    pub latitude: Option<f64>,

    /// Reference longitude in decimal degrees
    #[cfg_attr(feature = "cli", arg(long))]
    pub longitude: Option<f64>,

    /// Backend user id (needed for the favourite flow)
    #[cfg_attr(feature = "cli", arg(long))]
    pub user_id: Option<i64>,

    /// Resolve relative to the stored favourite spot instead of a coordinate
    #[cfg_attr(feature = "cli", arg(long))]
    pub favourite: bool,

    /// Delegate the resolution to the backend endpoint
    #[cfg_attr(feature = "cli", arg(long))]
    pub remote: bool,

    /// HTTP timeout in seconds
    #[cfg_attr(feature = "cli", arg(long))]
    pub timeout_seconds: Option<u64>,

    /// Optional TOML configuration file; CLI flags win over file values
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    /// Log system stats per phase
    #[cfg_attr(feature = "cli", arg(long))]
    pub monitor: bool,
}

impl CliConfig {
    /// 只補齊 CLI 沒給的欄位，旗標優先於檔案
    pub fn merge_toml(&mut self, file: &toml_config::TomlConfig) {
        if self.api_base_url.is_none() {
            self.api_base_url = Some(file.backend.base_url.clone());
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = file.backend.timeout_seconds;
        }
        if let Some(reference) = &file.reference {
            if self.latitude.is_none() {
                self.latitude = Some(reference.latitude);
            }
            if self.longitude.is_none() {
                self.longitude = Some(reference.longitude);
            }
        }
        if let Some(user) = &file.user {
            if self.user_id.is_none() {
                self.user_id = Some(user.id);
            }
        }
        if let Some(monitoring) = &file.monitoring {
            self.monitor = self.monitor || monitoring.enabled;
        }
    }

    pub fn reference(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_id(&self) -> Option<i64> {
        self.user_id
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", self.api_base_url())?;
        validation::validate_positive_number(
            "timeout_seconds",
            self.request_timeout_seconds(),
            1,
        )?;

        if let Some(latitude) = self.latitude {
            validation::validate_latitude("latitude", latitude)?;
        }
        if let Some(longitude) = self.longitude {
            validation::validate_longitude("longitude", longitude)?;
        }

        if self.favourite {
            validation::validate_required_field("user_id", &self.user_id)?;
        } else {
            // 沒有最愛流程時需要明確的參考座標
            validation::validate_required_field("latitude", &self.latitude)?;
            validation::validate_required_field("longitude", &self.longitude)?;
        }

        Ok(())
    }
}

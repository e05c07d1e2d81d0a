use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("Location permission denied")]
    LocationPermissionDenied,

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API request to {endpoint} returned status {status}")]
    ApiStatusError { endpoint: String, status: u16 },

    #[error("Backend reported failure: {message}")]
    BackendError { message: String },

    #[error("No favourite spot set for user {user_id}")]
    NoFavouriteSpot { user_id: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Location,
    Network,
    Backend,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ParkingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LocationPermissionDenied => ErrorCategory::Location,
            Self::ApiError(_) | Self::ApiStatusError { .. } => ErrorCategory::Network,
            Self::BackendError { .. } | Self::NoFavouriteSpot { .. } => ErrorCategory::Backend,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoFavouriteSpot { .. } => ErrorSeverity::Low,
            Self::LocationPermissionDenied
            | Self::ApiError(_)
            | Self::ApiStatusError { .. }
            | Self::BackendError { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 每種錯誤的修正動作不同：重新授權、重試、或修改配置
    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Location => {
                "Grant location access (or pass --latitude/--longitude) and try again"
            }
            ErrorCategory::Network => {
                "Check the network connection and the API base URL, then retry the fetch"
            }
            ErrorCategory::Backend => match self {
                Self::NoFavouriteSpot { .. } => {
                    "Mark a parking spot as favourite first, or use the plain closest-spot search"
                }
                _ => "The parking backend rejected the request; retry later or inspect the backend logs",
            },
            ErrorCategory::Configuration => {
                "Fix the configuration value and re-run (see --help for accepted flags)"
            }
            ErrorCategory::System => {
                "Inspect file permissions and payload contents; retrying will not help"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::LocationPermissionDenied => {
                "Could not determine your position: location permission was denied".to_string()
            }
            Self::ApiError(e) => format!("Could not reach the parking backend: {}", e),
            Self::ApiStatusError { endpoint, status } => {
                format!("The parking backend answered {} on {}", status, endpoint)
            }
            Self::BackendError { message } => format!("The parking backend failed: {}", message),
            Self::NoFavouriteSpot { user_id } => {
                format!("User {} has no favourite parking spot set", user_id)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_kinds_stay_distinct() {
        // 權限、網路失敗分屬不同 category，不可合併
        let denied = ParkingError::LocationPermissionDenied;
        let fetch_failed = ParkingError::ApiStatusError {
            endpoint: "/all-spots".to_string(),
            status: 502,
        };
        assert_eq!(denied.category(), ErrorCategory::Location);
        assert_eq!(fetch_failed.category(), ErrorCategory::Network);
        assert_ne!(denied.category(), fetch_failed.category());
    }

    #[test]
    fn test_severity_ordering() {
        let missing = ParkingError::MissingConfigError {
            field: "latitude".to_string(),
        };
        let no_fav = ParkingError::NoFavouriteSpot { user_id: 7 };
        assert!(no_fav.severity() < missing.severity());
        assert_eq!(no_fav.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_recovery_suggestions_differ_per_category() {
        let denied = ParkingError::LocationPermissionDenied;
        let fetch_failed = ParkingError::ApiStatusError {
            endpoint: "/all-spots".to_string(),
            status: 500,
        };
        assert_ne!(
            denied.recovery_suggestion(),
            fetch_failed.recovery_suggestion()
        );
    }
}

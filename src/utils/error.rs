use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlobeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to load directory from {source_name}: {message}")]
    LoadError {
        source_name: String,
        message: String,
    },

    #[error("Founder {id} has invalid coordinates ({lng}, {lat})")]
    InvalidCoordinate { id: u32, lng: f64, lat: f64 },

    #[error("Map token error: {message}")]
    MapTokenError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GlobeError {
    pub fn load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        GlobeError::LoadError {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GlobeError::ApiError(_) => ErrorCategory::Network,
            GlobeError::IoError(_) => ErrorCategory::System,
            GlobeError::SerializationError(_)
            | GlobeError::LoadError { .. }
            | GlobeError::InvalidCoordinate { .. } => ErrorCategory::Data,
            GlobeError::TomlError(_)
            | GlobeError::ConfigError { .. }
            | GlobeError::InvalidConfigValueError { .. }
            | GlobeError::MissingConfigError { .. }
            | GlobeError::MapTokenError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 座標錯誤只是診斷訊息，該筆資料會被略過
            GlobeError::InvalidCoordinate { .. } => ErrorSeverity::Low,
            GlobeError::ApiError(_) => ErrorSeverity::Medium,
            GlobeError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GlobeError::ApiError(_) => "Check the directory URL and your network connection, then retry",
            GlobeError::IoError(_) => "Check that the file exists and is readable",
            GlobeError::SerializationError(_) => "Make sure the directory is a JSON array of founder records",
            GlobeError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            GlobeError::ConfigError { .. }
            | GlobeError::InvalidConfigValueError { .. }
            | GlobeError::MissingConfigError { .. } => "Review the configuration file and command line flags",
            GlobeError::LoadError { .. } => {
                "Use --source builtin, or a .json/.toml file, or a .csv with the header id,name,country,city,longitude,latitude,website,social_handle,share_url"
            }
            GlobeError::InvalidCoordinate { .. } => {
                "Longitude must be within [-180, 180] and latitude within [-90, 90]"
            }
            GlobeError::MapTokenError { .. } => {
                "Set MAPBOX_TOKEN (or map.token in the config file) to a valid access token"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GlobeError::MapTokenError { .. } => {
                format!("Mapbox token required: {}", self)
            }
            GlobeError::LoadError { source_name, .. } => {
                format!("Could not load the founder directory from {}", source_name)
            }
            GlobeError::ApiError(_) => "Could not reach the directory service".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlobeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_is_blocking_configuration() {
        let err = GlobeError::MapTokenError {
            message: "missing".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Mapbox token required"));
    }

    #[test]
    fn test_invalid_coordinate_is_low_severity() {
        let err = GlobeError::InvalidCoordinate {
            id: 7,
            lng: 200.0,
            lat: 0.0,
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.to_string(), "Founder 7 has invalid coordinates (200, 0)");
    }
}

use crate::adapters::BUILTIN_LOCATION;
use crate::core::ticker::{default_messages, DEFAULT_INTERVAL_MS};
use crate::core::viewport::ViewportSettings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GlobeError, Result};
use crate::utils::validation::{
    is_valid_lng_lat, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const TOKEN_PLACEHOLDER: &str = "YOUR_MAPBOX_ACCESS_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub map: MapConfig,
    pub source: SourceConfig,
    pub viewport: ViewportSettings,
    pub ticker: TickerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub token: Option<String>,
    pub style: String,
    pub projection: String,
    pub center: [f64; 2],
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            token: None,
            style: "mapbox://styles/mapbox/dark-v11".to_string(),
            projection: "globe".to_string(),
            center: [0.0, 20.0],
            zoom: 1.5,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub location: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: BUILTIN_LOCATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub interval_ms: u64,
    pub messages: Vec<String>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            messages: default_messages(),
        }
    }
}

impl GlobeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${MAPBOX_TOKEN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GlobeError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 地圖需要有效的 token；缺少或仍是範例值時回報錯誤
    pub fn validate_map_token(&self) -> Result<&str> {
        let token = self
            .map
            .token
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();

        if token.is_empty() || token.starts_with("${") {
            return Err(GlobeError::MapTokenError {
                message: "no access token configured".to_string(),
            });
        }
        if token == TOKEN_PLACEHOLDER {
            return Err(GlobeError::MapTokenError {
                message: format!("token is still the placeholder {}", TOKEN_PLACEHOLDER),
            });
        }

        Ok(token)
    }
}

impl Validate for GlobeConfig {
    fn validate(&self) -> Result<()> {
        let [lng, lat] = self.map.center;
        if !is_valid_lng_lat(lng, lat) {
            return Err(GlobeError::InvalidConfigValueError {
                field: "map.center".to_string(),
                value: format!("[{}, {}]", lng, lat),
                reason: "Center must be a valid [longitude, latitude]".to_string(),
            });
        }
        validate_non_empty_string("map.style", &self.map.style)?;
        validate_range("map.zoom", self.map.zoom, 0.0, 22.0)?;
        validate_range("map.pitch", self.map.pitch, 0.0, 85.0)?;
        validate_range("map.bearing", self.map.bearing, -360.0, 360.0)?;

        validate_range("viewport.point_zoom", self.viewport.point_zoom, 0.0, 22.0)?;
        validate_range("viewport.max_zoom", self.viewport.max_zoom, 0.0, 22.0)?;
        validate_range("viewport.padding_px", self.viewport.padding_px, 0, 2000)?;

        // source.location 由 adapters::source_from_location 檢查

        validate_range("ticker.interval_ms", self.ticker.interval_ms, 1, u64::MAX)?;
        if self.ticker.messages.is_empty() {
            return Err(GlobeError::MissingConfigError {
                field: "ticker.messages".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for GlobeConfig {
    fn source_location(&self) -> &str {
        &self.source.location
    }

    fn map_token(&self) -> Option<&str> {
        self.validate_map_token().ok()
    }

    fn viewport_settings(&self) -> ViewportSettings {
        self.viewport
    }

    fn ticker_messages(&self) -> Vec<String> {
        self.ticker.messages.clone()
    }

    fn ticker_interval_ms(&self) -> u64 {
        self.ticker.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GlobeConfig::from_toml_str("").unwrap();

        assert_eq!(config.map.center, [0.0, 20.0]);
        assert_eq!(config.map.zoom, 1.5);
        assert_eq!(config.map.projection, "globe");
        assert_eq!(config.source_location(), "builtin");
        assert_eq!(config.viewport_settings(), ViewportSettings::default());
        assert_eq!(config.ticker_messages().len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[map]
token = "pk.test"
zoom = 2.0

[source]
location = "data/founders.csv"

[viewport]
point_zoom = 5.0
max_zoom = 9.0

[ticker]
interval_ms = 1000
messages = ["hello"]
"#;
        let config = GlobeConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.map_token(), Some("pk.test"));
        assert_eq!(config.source_location(), "data/founders.csv");
        assert_eq!(config.viewport.point_zoom, 5.0);
        assert_eq!(config.viewport.padding_px, 100);
        assert_eq!(config.ticker_interval_ms(), 1000);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GLOBE_TEST_TOKEN", "pk.from-env");

        let config = GlobeConfig::from_toml_str("[map]\ntoken = \"${GLOBE_TEST_TOKEN}\"\n").unwrap();
        assert_eq!(config.validate_map_token().unwrap(), "pk.from-env");

        std::env::remove_var("GLOBE_TEST_TOKEN");
    }

    #[test]
    fn test_token_missing_or_placeholder() {
        let missing = GlobeConfig::default();
        assert!(matches!(
            missing.validate_map_token(),
            Err(GlobeError::MapTokenError { .. })
        ));

        let unset = GlobeConfig::from_toml_str("[map]\ntoken = \"${GLOBE_TEST_UNSET_VAR}\"\n").unwrap();
        assert!(unset.validate_map_token().is_err());

        let placeholder =
            GlobeConfig::from_toml_str("[map]\ntoken = \"YOUR_MAPBOX_ACCESS_TOKEN\"\n").unwrap();
        assert!(placeholder.validate_map_token().is_err());
        assert_eq!(placeholder.map_token(), None);
    }

    #[test]
    fn test_config_validation() {
        let config = GlobeConfig::from_toml_str("[map]\ncenter = [200.0, 20.0]\n").unwrap();
        assert!(config.validate().is_err());

        let config = GlobeConfig::from_toml_str("[viewport]\nmax_zoom = 30.0\n").unwrap();
        assert!(config.validate().is_err());

        let config = GlobeConfig::from_toml_str("[ticker]\nmessages = []\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nlocation = \"https://example.com/founders.json\"\n")
            .unwrap();

        let config = GlobeConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source_location(), "https://example.com/founders.json");
    }
}

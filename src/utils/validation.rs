use crate::utils::error::{GlobeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// 經緯度是否在合法範圍內（NaN 一律視為不合法）
pub fn is_valid_lng_lat(lng: f64, lat: f64) -> bool {
    LONGITUDE_RANGE.contains(&lng) && LATITUDE_RANGE.contains(&lat)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GlobeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension.to_ascii_lowercase().as_str()) => {
            Ok(())
        }
        Some(extension) => Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // 反向判斷，NaN 也會被拒絕
    if !(value >= min && value <= max) {
        return Err(GlobeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.location", "https://example.com/founders.json").is_ok());
        assert!(validate_url("source.location", "http://example.com").is_ok());
        assert!(validate_url("source.location", "").is_err());
        assert!(validate_url("source.location", "invalid-url").is_err());
        assert!(validate_url("source.location", "ftp://example.com").is_err());
    }

    #[test]
    fn test_is_valid_lng_lat() {
        assert!(is_valid_lng_lat(0.0, 0.0));
        assert!(is_valid_lng_lat(-180.0, 90.0));
        assert!(is_valid_lng_lat(-79.3832, 43.6532));
        assert!(!is_valid_lng_lat(200.0, 0.0));
        assert!(!is_valid_lng_lat(0.0, -95.0));
        assert!(!is_valid_lng_lat(f64::NAN, 0.0));
    }

    #[test]
    fn test_validate_range_rejects_nan() {
        assert!(validate_range("map.zoom", 1.5, 0.0, 22.0).is_ok());
        assert!(validate_range("map.zoom", 23.0, 0.0, 22.0).is_err());
        assert!(validate_range("map.zoom", f64::NAN, 0.0, 22.0).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("source.location", "data/founders.json", &["json", "csv"]).is_ok());
        assert!(validate_file_extension("source.location", "data/FOUNDERS.CSV", &["json", "csv"]).is_ok());
        assert!(validate_file_extension("source.location", "data/founders.txt", &["json", "csv"]).is_err());
        assert!(validate_file_extension("source.location", "founders", &["json", "csv"]).is_err());
    }
}

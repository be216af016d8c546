use crate::domain::model::{FounderRecord, LngLat};
use crate::domain::ports::DirectorySource;
use crate::utils::error::{GlobeError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "csv", "toml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(FileFormat::Json),
            "csv" => Some(FileFormat::Csv),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// CSV 沒有巢狀欄位，經緯度拆成兩欄
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    country: String,
    city: String,
    longitude: f64,
    latitude: f64,
    #[serde(default)]
    website: String,
    #[serde(default)]
    social_handle: String,
    #[serde(default)]
    share_url: String,
}

impl From<CsvRow> for FounderRecord {
    fn from(row: CsvRow) -> Self {
        FounderRecord {
            id: row.id,
            name: row.name,
            country: row.country,
            city: row.city,
            coordinates: LngLat(row.longitude, row.latitude),
            website: row.website,
            social_handle: row.social_handle,
            share_url: row.share_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlDirectory {
    #[serde(default)]
    founders: Vec<FounderRecord>,
}

/// Reads a directory file. The format is picked from the extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(&self, format: FileFormat, content: &str) -> Result<Vec<FounderRecord>> {
        let records = match format {
            FileFormat::Json => serde_json::from_str::<Vec<FounderRecord>>(content)
                .map_err(|e| self.malformed(format!("invalid JSON: {}", e)))?,
            FileFormat::Toml => toml::from_str::<TomlDirectory>(content)
                .map_err(|e| self.malformed(format!("invalid TOML: {}", e)))?
                .founders,
            FileFormat::Csv => {
                let mut reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_reader(content.as_bytes());
                let mut records = Vec::new();
                for (line, row) in reader.deserialize::<CsvRow>().enumerate() {
                    // 第 1 行是標題
                    let row = row.map_err(|e| {
                        self.malformed(format!("invalid CSV row {}: {}", line + 2, e))
                    })?;
                    records.push(row.into());
                }
                records
            }
        };

        Ok(records)
    }

    fn malformed(&self, message: String) -> GlobeError {
        GlobeError::load(self.name(), message)
    }
}

#[async_trait]
impl DirectorySource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<FounderRecord>> {
        let format = FileFormat::from_path(&self.path).ok_or_else(|| {
            self.malformed(format!(
                "unsupported file type, expected one of: {}",
                SUPPORTED_EXTENSIONS.join(", ")
            ))
        })?;

        tracing::debug!("Reading {:?} directory from {}", format, self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.malformed(format!("cannot read file: {}", e)))?;

        self.parse(format, &content)
    }
}

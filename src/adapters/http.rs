use crate::domain::model::FounderRecord;
use crate::domain::ports::DirectorySource;
use crate::utils::error::{GlobeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<FounderRecord>),
    Wrapped { founders: Vec<FounderRecord> },
}

/// Fetches the directory as JSON, either a bare array or `{"founders": [...]}`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    client: Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DirectorySource for HttpSource {
    fn name(&self) -> String {
        self.endpoint.clone()
    }

    async fn load(&self) -> Result<Vec<FounderRecord>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let response = response.error_for_status()?;
        let body = response.text().await?;

        let payload: Payload = serde_json::from_str(&body).map_err(|e| {
            GlobeError::load(self.name(), format!("expected a list of founders: {}", e))
        })?;

        Ok(match payload {
            Payload::List(records) | Payload::Wrapped { founders: records } => records,
        })
    }
}

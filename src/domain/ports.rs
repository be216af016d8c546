use crate::core::viewport::ViewportSettings;
use crate::domain::model::{FounderRecord, PopupCard, ViewportCommand};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies founder records in source order.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    fn name(&self) -> String;
    async fn load(&self) -> Result<Vec<FounderRecord>>;
}

/// The rendering side. Implementations own their map handle; this crate never inspects it.
pub trait MapSurface {
    fn place_marker(&mut self, founder: &FounderRecord);
    fn show_popup(&mut self, card: &PopupCard);
    fn apply(&mut self, command: &ViewportCommand);
}

pub trait ConfigProvider {
    fn source_location(&self) -> &str;
    fn map_token(&self) -> Option<&str>;
    fn viewport_settings(&self) -> ViewportSettings;
    fn ticker_messages(&self) -> Vec<String>;
    fn ticker_interval_ms(&self) -> u64;
}

pub mod directory;
pub mod popup;
pub mod session;
pub mod sidebar;
pub mod ticker;
pub mod viewport;

pub use crate::domain::model::{FounderRecord, LngLat, LngLatBounds, PopupCard, ViewportCommand};
pub use crate::domain::ports::{ConfigProvider, DirectorySource, MapSurface};
pub use crate::utils::error::Result;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{source_from_location, surface::RecordingSurface};
pub use config::GlobeConfig;
pub use core::{
    directory::{group_by_country, load_directory, validate_coordinates, CountryGroups, FounderDirectory},
    session::GlobeSession,
    viewport::{ViewportController, ViewportSettings},
};
pub use domain::model::{FounderRecord, LngLat, ViewportCommand};
pub use utils::error::{GlobeError, Result};

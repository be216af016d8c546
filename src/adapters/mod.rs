// Adapters layer: concrete directory sources and map surfaces.

pub mod builtin;
pub mod file;
pub mod http;
pub mod surface;

use crate::domain::ports::DirectorySource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, validate_url};

pub const BUILTIN_LOCATION: &str = "builtin";

/// `builtin`, an `http(s)://` URL, or a path to a .json/.csv/.toml file.
pub fn source_from_location(location: &str) -> Result<Box<dyn DirectorySource>> {
    let location = location.trim();

    if location.is_empty() || location == BUILTIN_LOCATION {
        return Ok(Box::new(builtin::BuiltinSource));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        validate_url("source.location", location)?;
        return Ok(Box::new(http::HttpSource::new(location)));
    }

    validate_path("source.location", location)?;
    validate_file_extension("source.location", location, file::SUPPORTED_EXTENSIONS)?;
    Ok(Box::new(file::FileSource::new(location)))
}

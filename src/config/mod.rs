//! Configuration module - tuning values and data file loading.

mod error;
mod game_config;

pub use error::DataLoadError;
pub use game_config::*;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and deserialize a RON data file.
pub fn read_ron_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DataLoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    if !path.exists() {
        return Err(DataLoadError::FileNotFound(display));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: display,
        details: e.to_string(),
    })
}

//! JSON configuration for the command-line tools.
//!
//! - [`magnify`] – `magnify_frames`: input sequence, run parameters,
//!   resolution overrides and output locations.
//! - [`pyramid`] – `pyramid_levels`: single image and level count.

pub mod magnify;
pub mod pyramid;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

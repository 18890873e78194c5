use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct PyramidToolConfig {
    pub input: PathBuf,
    #[serde(default = "default_levels")]
    pub levels: usize,
    pub output: PyramidOutputConfig,
}

fn default_levels() -> usize {
    5
}

#[derive(Debug, Deserialize)]
pub struct PyramidOutputConfig {
    /// Directory receiving `level_N.png` and `reconstruction.png`.
    pub dir: PathBuf,
    #[serde(default)]
    pub stats_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PyramidToolConfig, String> {
    super::read_json(path)
}

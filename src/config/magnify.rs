use crate::magnifier::MagnifyParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct MagnifyToolConfig {
    /// Directory of input frames.
    pub input: PathBuf,
    #[serde(default)]
    pub params: MagnifyParams,
    #[serde(default)]
    pub resolution: ResolutionConfig,
    pub output: MagnifyOutputConfig,
    /// Stop after this many frames; all frames when absent.
    #[serde(default)]
    pub max_frames: Option<u64>,
}

impl MagnifyToolConfig {
    /// Whether `frames_done` frames already exhaust `max_frames`.
    pub fn frame_limit_reached(&self, frames_done: u64) -> bool {
        self.max_frames.is_some_and(|max| frames_done >= max)
    }
}

/// Resolution overrides. Absent or zero entries keep the natural size.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    pub input_width: Option<usize>,
    pub input_height: Option<usize>,
    pub output_width: Option<usize>,
    pub output_height: Option<usize>,
}

impl ResolutionConfig {
    /// Size every input frame is resampled to before processing.
    pub fn input_size(&self) -> Option<(usize, usize)> {
        pair(self.input_width, self.input_height)
    }

    /// Size every output frame is resampled to before writing.
    pub fn output_size(&self) -> Option<(usize, usize)> {
        pair(self.output_width, self.output_height)
    }
}

fn pair(w: Option<usize>, h: Option<usize>) -> Option<(usize, usize)> {
    match (w, h) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub struct MagnifyOutputConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<MagnifyToolConfig, String> {
    let config: MagnifyToolConfig = super::read_json(path)?;
    config
        .params
        .validate()
        .map_err(|e| format!("Invalid parameters in {}: {e}", path.display()))?;
    Ok(config)
}

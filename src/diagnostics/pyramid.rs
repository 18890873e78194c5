use crate::image::{ImageView, Pixel3};
use crate::pyramid::LaplacianPyramid;
use serde::{Deserialize, Serialize};

/// Statistics for a single level of a Laplacian pyramid.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidLevelReport {
    pub level_index: usize,
    pub width: usize,
    pub height: usize,
    pub is_base: bool,
    /// Per-channel mean absolute value (`[L, a, b]`).
    pub mean_abs: Pixel3,
}

/// Pyramid construction details captured by the tools.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidStage {
    pub elapsed_ms: f64,
    pub levels: Vec<PyramidLevelReport>,
}

impl PyramidStage {
    pub fn from_pyramid(pyramid: &LaplacianPyramid, elapsed_ms: f64) -> Self {
        let base = pyramid.base_index();
        let levels = pyramid
            .levels
            .iter()
            .enumerate()
            .map(|(level, lvl)| PyramidLevelReport {
                level_index: level,
                width: lvl.width(),
                height: lvl.height(),
                is_base: Some(level) == base,
                mean_abs: lvl.mean_abs(),
            })
            .collect();
        Self { elapsed_ms, levels }
    }
}

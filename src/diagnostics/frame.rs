use super::timing::TimingBreakdown;
use crate::image::Pixel3;
use serde::{Deserialize, Serialize};

/// Which branch of the magnifier handled a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FramePhase {
    /// First frame: filter state seeded, output equals input.
    Bootstrap,
    /// Every later frame: filtered, amplified and recombined.
    Steady,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub pyramid_levels: usize,
}

/// Gain and residual energy of one pyramid level in a steady frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelReport {
    pub level_index: usize,
    pub width: usize,
    pub height: usize,
    pub wavelength: f32,
    pub gain: f32,
    pub excluded: bool,
    /// Per-channel mean absolute value of the amplified residual.
    pub mean_abs_residual: Pixel3,
}

/// Per-frame trace returned alongside the magnified output.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: u64,
    pub phase: FramePhase,
    pub input: InputDescriptor,
    pub delta: f32,
    /// Empty for the bootstrap frame.
    pub levels: Vec<LevelReport>,
    /// Per-channel mean absolute value of the motion frame added to the input.
    pub motion_mean_abs: Pixel3,
    pub timings: TimingBreakdown,
}

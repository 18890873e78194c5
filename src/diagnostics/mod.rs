//! Diagnostics data model exposed by the magnifier and the tools.
//!
//! `FrameReport` is returned for every processed frame by
//! [`MotionMagnifier::process_with_diagnostics`](crate::MotionMagnifier);
//! `RunSummary` describes a whole streaming run. Everything serializes to
//! camelCase JSON.

pub mod frame;
pub mod pyramid;
pub mod run;
pub mod timing;

pub use frame::{FramePhase, FrameReport, InputDescriptor, LevelReport};
pub use pyramid::{PyramidLevelReport, PyramidStage};
pub use run::{RunSummary, StopReason};
pub use timing::{StageTiming, TimingBreakdown};

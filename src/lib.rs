#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod magnifier;

// Building blocks – public for tools and experiments.
pub mod amplify;
pub mod chroma;
pub mod color;
pub mod pyramid;
pub mod temporal;

// Tool-side collaborators (file I/O, JSON configuration).
pub mod config;
pub mod sequence;

// --- High-level re-exports -------------------------------------------------

// Main entry points: magnifier + parameters.
pub use crate::error::Error;
pub use crate::image::FrameF32;
pub use crate::magnifier::{
    FrameSink, FrameSource, IterSource, MagnifiedFrame, MagnifyParams, MotionMagnifier,
};

// Diagnostics returned by the magnifier.
pub use crate::diagnostics::{FrameReport, RunSummary, StopReason};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use eulerian_magnifier::prelude::*;
///
/// # fn main() -> Result<(), eulerian_magnifier::Error> {
/// let mut magnifier = MotionMagnifier::new(MagnifyParams::default())?;
/// let frame = FrameF32::filled(320, 240, [50.0, 0.0, 0.0]);
/// let out = magnifier.process_with_diagnostics(&frame)?;
/// println!("phase={:?} total_ms={:.3}", out.report.phase, out.report.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::color::LabConverter;
    pub use crate::image::{FrameF32, ImageRgb8};
    pub use crate::{
        Error, FrameSink, FrameSource, IterSource, MagnifiedFrame, MagnifyParams,
        MotionMagnifier,
    };
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::amplify::Amplifier;
    pub use crate::chroma::ChromaAttenuator;
    pub use crate::pyramid::{GaussianResampler, LaplacianPyramid, Resampler};
    pub use crate::temporal::{BandState, TemporalFilter};

    pub use crate::diagnostics::{
        FramePhase, InputDescriptor, LevelReport, PyramidLevelReport, PyramidStage, StageTiming,
        TimingBreakdown,
    };
}

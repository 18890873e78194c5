//! Frame orchestrator driving the magnification end-to-end.
//!
//! The [`MotionMagnifier`] owns everything that survives between frames: the
//! parameters, the resampler, and once the first frame has been seen, the
//! stream resolution together with the per-level temporal filter state.
//!
//! Typical usage:
//! ```no_run
//! use eulerian_magnifier::{FrameF32, MagnifyParams, MotionMagnifier};
//!
//! # fn example(frames: Vec<FrameF32>) -> Result<(), eulerian_magnifier::Error> {
//! let mut magnifier = MotionMagnifier::new(MagnifyParams::default())?;
//! for frame in &frames {
//!     let magnified = magnifier.process_with_diagnostics(frame)?;
//!     println!("frame {} took {:.2} ms", magnified.report.frame_index, magnified.report.timings.total_ms);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::MagnifyParams;
use crate::amplify::Amplifier;
use crate::chroma::ChromaAttenuator;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{FramePhase, FrameReport, InputDescriptor, LevelReport, TimingBreakdown};
use crate::error::Error;
use crate::image::{FrameF32, ImageView, CHANNELS};
use crate::pyramid::{GaussianResampler, LaplacianPyramid, Resampler};
use crate::temporal::TemporalFilter;
use log::debug;
use std::time::Instant;

/// Output of one processed frame plus its trace.
#[derive(Clone, Debug)]
pub struct MagnifiedFrame {
    pub output: FrameF32,
    pub report: FrameReport,
}

/// State established by the bootstrap frame.
struct StreamState {
    width: usize,
    height: usize,
    filter: TemporalFilter,
}

/// Eulerian motion magnifier over a stream of Lab frames.
///
/// The first frame seeds the temporal filter and passes through unchanged.
/// Every later frame must have the same size; its band-passed, amplified
/// and chroma-attenuated motion is added back onto it.
pub struct MotionMagnifier {
    params: MagnifyParams,
    resampler: Box<dyn Resampler>,
    amplifier: Amplifier,
    attenuator: ChromaAttenuator,
    state: Option<StreamState>,
    frames_processed: u64,
}

impl MotionMagnifier {
    /// Validate `params` and build a magnifier with the default Gaussian resampler.
    pub fn new(params: MagnifyParams) -> Result<Self, Error> {
        Self::with_resampler(params, Box::new(GaussianResampler::default()))
    }

    pub fn with_resampler(
        params: MagnifyParams,
        resampler: Box<dyn Resampler>,
    ) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self {
            amplifier: Amplifier::from_params(&params),
            attenuator: ChromaAttenuator::new(params.chrom_attenuation),
            params,
            resampler,
            state: None,
            frames_processed: 0,
        })
    }

    pub fn params(&self) -> &MagnifyParams {
        &self.params
    }

    pub fn amplifier(&self) -> &Amplifier {
        &self.amplifier
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Phase the next call to [`process`](Self::process) will run in.
    pub fn phase(&self) -> FramePhase {
        match self.state {
            None => FramePhase::Bootstrap,
            Some(_) => FramePhase::Steady,
        }
    }

    /// Resolution fixed by the bootstrap frame, if any.
    pub fn stream_dims(&self) -> Option<(usize, usize)> {
        self.state.as_ref().map(|s| (s.width, s.height))
    }

    /// Forget the stream; the next frame bootstraps again.
    pub fn reset(&mut self) {
        self.state = None;
        self.frames_processed = 0;
    }

    /// Magnify one frame, returning only the output.
    pub fn process(&mut self, frame: &FrameF32) -> Result<FrameF32, Error> {
        self.process_with_diagnostics(frame).map(|m| m.output)
    }

    /// Magnify one frame and return the output with a detailed report.
    ///
    /// A failed frame leaves the filter state untouched.
    pub fn process_with_diagnostics(&mut self, frame: &FrameF32) -> Result<MagnifiedFrame, Error> {
        if frame.is_empty() {
            return Err(Error::EmptyFrame);
        }
        let total_start = Instant::now();
        let Some(state) = self.state.as_mut() else {
            return self.bootstrap(frame, total_start);
        };

        let (width, height) = (state.width, state.height);
        if frame.dims() != (width, height) {
            return Err(Error::frame_mismatch((width, height), frame.dims()));
        }
        let levels = self.params.levels;
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let mut pyramid = LaplacianPyramid::decompose(frame, levels, self.resampler.as_ref())?;
        timings.push_since("decompose", stage);

        let stage = Instant::now();
        let amplifier = self.amplifier;
        state.filter.filter_levels(&mut pyramid, |level, residual| {
            amplifier.amplify_in_place(level, residual, width, height)
        })?;
        timings.push_since("filterAmplify", stage);

        let level_reports: Vec<LevelReport> = pyramid
            .levels
            .iter()
            .enumerate()
            .map(|(level, residual)| LevelReport {
                level_index: level,
                width: residual.w,
                height: residual.h,
                wavelength: amplifier.wavelength(level, width, height),
                gain: amplifier.gain(level, width, height),
                excluded: amplifier.is_excluded(level),
                mean_abs_residual: residual.mean_abs(),
            })
            .collect();

        let stage = Instant::now();
        let motion = pyramid.reconstruct(levels, self.resampler.as_ref())?;
        timings.push_since("reconstruct", stage);

        let stage = Instant::now();
        let motion = self.attenuator.attenuate(motion);
        let mut output = frame.clone();
        output.add_assign(&motion);
        timings.push_since("attenuateCombine", stage);

        timings.total_ms = elapsed_ms(total_start);
        let report = self.report(
            FramePhase::Steady,
            (width, height),
            level_reports,
            motion.mean_abs(),
            timings,
        );
        debug!(
            "MotionMagnifier frame={} steady w={} h={} motion=[{:.4}, {:.4}, {:.4}] total={:.3}ms",
            report.frame_index,
            width,
            height,
            report.motion_mean_abs[0],
            report.motion_mean_abs[1],
            report.motion_mean_abs[2],
            report.timings.total_ms
        );
        self.frames_processed += 1;
        Ok(MagnifiedFrame { output, report })
    }

    fn bootstrap(&mut self, frame: &FrameF32, total_start: Instant) -> Result<MagnifiedFrame, Error> {
        let (width, height) = frame.dims();
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let pyramid = LaplacianPyramid::decompose(frame, self.params.levels, self.resampler.as_ref())?;
        timings.push_since("decompose", stage);

        let filter = TemporalFilter::new(
            &pyramid,
            self.params.cutoff_freq_low,
            self.params.cutoff_freq_high,
        );
        self.state = Some(StreamState {
            width,
            height,
            filter,
        });

        timings.total_ms = elapsed_ms(total_start);
        let report = self.report(
            FramePhase::Bootstrap,
            (width, height),
            Vec::new(),
            [0.0; CHANNELS],
            timings,
        );
        debug!(
            "MotionMagnifier bootstrap w={} h={} levels={} total={:.3}ms",
            width, height, self.params.levels, report.timings.total_ms
        );
        self.frames_processed += 1;
        Ok(MagnifiedFrame {
            output: frame.clone(),
            report,
        })
    }

    fn report(
        &self,
        phase: FramePhase,
        (width, height): (usize, usize),
        levels: Vec<LevelReport>,
        motion_mean_abs: [f32; CHANNELS],
        timings: TimingBreakdown,
    ) -> FrameReport {
        FrameReport {
            frame_index: self.frames_processed,
            phase,
            input: InputDescriptor {
                width,
                height,
                pyramid_levels: self.params.levels,
            },
            delta: self.amplifier.delta(),
            levels,
            motion_mean_abs,
            timings,
        }
    }
}

//! Pull-based driver connecting a frame source, the magnifier and a sink.
//!
//! The magnifier itself performs no I/O. A [`FrameSource`] yields Lab
//! frames until it returns `Ok(None)`; a [`FrameSink`] accepts every output.
//! Either side failing ends the run like end-of-stream, and the reason is
//! recorded in the [`RunSummary`]. Errors raised by the magnifier are fatal
//! and returned to the caller.
use super::pipeline::MotionMagnifier;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{FrameReport, RunSummary, StopReason};
use crate::error::Error;
use crate::image::FrameF32;
use log::{debug, warn};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

pub trait FrameSource {
    type Error: Display;

    /// Next frame, or `Ok(None)` once the stream is exhausted.
    fn next_frame(&mut self) -> Result<Option<FrameF32>, Self::Error>;
}

pub trait FrameSink {
    type Error: Display;

    fn emit(&mut self, frame: FrameF32) -> Result<(), Self::Error>;
}

/// Frame source over any iterator of frames.
pub struct IterSource<I> {
    inner: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = FrameF32>,
{
    pub fn new(inner: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: inner.into_iter(),
        }
    }
}

impl<I> FrameSource for IterSource<I>
where
    I: Iterator<Item = FrameF32>,
{
    type Error = std::convert::Infallible;

    fn next_frame(&mut self) -> Result<Option<FrameF32>, Self::Error> {
        Ok(self.inner.next())
    }
}

impl FrameSink for Vec<FrameF32> {
    type Error = std::convert::Infallible;

    fn emit(&mut self, frame: FrameF32) -> Result<(), Self::Error> {
        self.push(frame);
        Ok(())
    }
}

impl MotionMagnifier {
    /// Process every frame of `source` into `sink`.
    pub fn run<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<RunSummary, Error>
    where
        S: FrameSource,
        K: FrameSink,
    {
        let never = AtomicBool::new(false);
        self.run_until(source, sink, &never, |_| {})
    }

    /// Like [`run`](Self::run), but checks `stop` before pulling each frame
    /// and hands every frame report to `observer`.
    pub fn run_until<S, K, F>(
        &mut self,
        source: &mut S,
        sink: &mut K,
        stop: &AtomicBool,
        mut observer: F,
    ) -> Result<RunSummary, Error>
    where
        S: FrameSource,
        K: FrameSink,
        F: FnMut(&FrameReport),
    {
        let start = Instant::now();
        let mut frames = 0u64;
        let reason = loop {
            if stop.load(Ordering::Relaxed) {
                debug!("MotionMagnifier::run stop requested after {frames} frames");
                break StopReason::StopRequested;
            }
            let frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    debug!("MotionMagnifier::run end of stream after {frames} frames");
                    break StopReason::EndOfStream;
                }
                Err(err) => {
                    warn!("frame source failed after {frames} frames: {err}");
                    break StopReason::SourceFailed(err.to_string());
                }
            };

            let magnified = self.process_with_diagnostics(&frame)?;
            frames += 1;
            observer(&magnified.report);
            if let Err(err) = sink.emit(magnified.output) {
                warn!("frame sink failed at frame {}: {err}", magnified.report.frame_index);
                break StopReason::SinkFailed(err.to_string());
            }
        };
        Ok(RunSummary::new(frames, reason, elapsed_ms(start)))
    }
}

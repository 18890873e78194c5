//! Eulerian motion magnification over a stream of Lab frames.
//!
//! Overview
//! - Every frame is decomposed into a Laplacian pyramid of `levels` detail
//!   bands plus a base band.
//! - Each band runs through a two-EMA temporal band-pass whose state is
//!   seeded by the first frame and persists for the whole stream.
//! - The band-passed residual is scaled by a gain that depends on the band's
//!   spatial wavelength; the finest and coarsest bands are dropped.
//! - The amplified bands are collapsed into a motion frame, its chroma is
//!   attenuated, and the result is added onto the input frame.
//!
//! Modules
//! - [`params`] – run parameters and their validation.
//! - `pipeline` – the [`MotionMagnifier`] state machine.
//! - `stream` – source/sink traits and the pull loop.

pub mod params;
mod pipeline;
mod stream;

pub use params::MagnifyParams;
pub use pipeline::{MagnifiedFrame, MotionMagnifier};
pub use stream::{FrameSink, FrameSource, IterSource};

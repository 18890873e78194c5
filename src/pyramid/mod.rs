//! Laplacian pyramid over 3-channel frames with separable smoothing.
//!
//! Purpose
//! - Split a frame into spatial frequency bands so each band can be filtered
//!   and amplified on its own, then collapse the bands back into a frame.
//!
//! Design
//! - The down/up pair is a [`Resampler`]; the default [`GaussianResampler`]
//!   applies the 5-tap binomial kernel (≈ `[1,4,6,4,1]/16`) before
//!   decimation and after zero-insertion.
//! - Each detail band is `fine - up(down(fine))`; the last entry is the
//!   coarse base frame. Collapsing re-applies the same `up`, so decompose
//!   followed by reconstruct is an identity up to float rounding.
//! - Boundary handling clamps (replicate border).
//!
//! Complexity
//! - Per level O(W·H·taps) with separable passes.
//! - Memory O(sum of levels), about 4/3 of the base frame.

pub mod filters;
mod laplacian;
mod resample;

pub use filters::{SeparableFilter, StaticSeparableFilter, BINOMIAL_3TAP, GAUSSIAN_5TAP};
pub use laplacian::LaplacianPyramid;
pub use resample::{down_dims, GaussianResampler, Resampler};

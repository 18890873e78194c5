//! Frequency-adaptive gain applied to each band-passed pyramid level.
//!
//! ```text
//! delta       = lambda_c / 8 / (1 + alpha)
//! lambda(l)   = sqrt(w² + h²) / 3 / 2^l
//! gain(l)     = min(alpha, exaggeration * (lambda(l) / delta / 8 - 1))
//! ```
//!
//! Level 0 (finest detail) and level `levels` (base band) are excluded and
//! always come out as exact zeros. `lambda` is derived from the level index
//! on every call.
use crate::image::{FrameF32, CHANNELS};
use crate::magnifier::MagnifyParams;

/// Empirical divisor turning the frame diagonal into the top-level wavelength.
const WAVELENGTH_DIVISOR: f32 = 3.0;

#[derive(Clone, Copy, Debug)]
pub struct Amplifier {
    alpha: f32,
    lambda_c: f32,
    exaggeration_factor: f32,
    levels: usize,
}

impl Amplifier {
    pub fn new(alpha: f32, lambda_c: f32, exaggeration_factor: f32, levels: usize) -> Self {
        Self {
            alpha,
            lambda_c,
            exaggeration_factor,
            levels,
        }
    }

    pub fn from_params(params: &MagnifyParams) -> Self {
        Self::new(
            params.alpha,
            params.lambda_c,
            params.exaggeration_factor,
            params.levels,
        )
    }

    /// Amplitude threshold derived from `lambda_c` and `alpha`.
    pub fn delta(&self) -> f32 {
        self.lambda_c / 8.0 / (1.0 + self.alpha)
    }

    /// Representative spatial wavelength of `level` for a `width × height` frame.
    pub fn wavelength(&self, level: usize, width: usize, height: usize) -> f32 {
        let (w, h) = (width as f32, height as f32);
        // Past i32::MAX the scale underflows to zero anyway.
        let scale = i32::try_from(level).map_or(0.0, |l| 0.5f32.powi(l));
        (w * w + h * h).sqrt() / WAVELENGTH_DIVISOR * scale
    }

    /// Gain before the `alpha` clamp and before band exclusion.
    pub fn unclamped_gain(&self, level: usize, width: usize, height: usize) -> f32 {
        let lambda = self.wavelength(level, width, height);
        self.exaggeration_factor * (lambda / self.delta() / 8.0 - 1.0)
    }

    pub fn is_excluded(&self, level: usize) -> bool {
        level == 0 || level == self.levels
    }

    /// Final gain for `level`; zero for the excluded bands.
    pub fn gain(&self, level: usize, width: usize, height: usize) -> f32 {
        if self.is_excluded(level) {
            return 0.0;
        }
        self.alpha.min(self.unclamped_gain(level, width, height))
    }

    /// Scale `residual` in place by the gain of `level`.
    pub fn amplify_in_place(&self, level: usize, residual: &mut FrameF32, width: usize, height: usize) {
        if self.is_excluded(level) {
            residual.fill([0.0; CHANNELS]);
            return;
        }
        residual.scale(self.gain(level, width, height));
    }

    pub fn amplify(&self, level: usize, residual: &FrameF32, width: usize, height: usize) -> FrameF32 {
        let mut out = residual.clone();
        self.amplify_in_place(level, &mut out, width, height);
        out
    }
}

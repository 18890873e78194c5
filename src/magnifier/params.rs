//! Parameters of a magnification run.
//!
//! All values are fixed for the lifetime of a [`MotionMagnifier`](super::MotionMagnifier).
//! The two cutoffs are EMA gains in (0,1), not frequencies in Hz.

use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnifyParams {
    /// Number of detail bands (>= 1); the pyramid holds `levels + 1` entries.
    pub levels: usize,
    /// Gain of the slow EMA.
    pub cutoff_freq_low: f32,
    /// Gain of the fast EMA; must exceed `cutoff_freq_low`.
    pub cutoff_freq_high: f32,
    /// Characteristic spatial wavelength in pixels.
    pub lambda_c: f32,
    /// Upper bound on the per-level gain.
    pub alpha: f32,
    /// Factor applied to both chroma channels of the motion signal, in [0,1].
    pub chrom_attenuation: f32,
    /// Multiplier on the unclamped gain for visualization.
    pub exaggeration_factor: f32,
}

impl Default for MagnifyParams {
    fn default() -> Self {
        Self {
            levels: 5,
            cutoff_freq_low: 0.05,
            cutoff_freq_high: 0.4,
            lambda_c: 16.0,
            alpha: 20.0,
            chrom_attenuation: 0.1,
            exaggeration_factor: 2.0,
        }
    }
}

impl MagnifyParams {
    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |msg: String| Err(Error::InvalidConfiguration(msg));

        if self.levels < 1 {
            return invalid(format!("levels must be >= 1, got {}", self.levels));
        }
        for (name, value) in [
            ("cutoff_freq_low", self.cutoff_freq_low),
            ("cutoff_freq_high", self.cutoff_freq_high),
            ("lambda_c", self.lambda_c),
            ("alpha", self.alpha),
            ("chrom_attenuation", self.chrom_attenuation),
            ("exaggeration_factor", self.exaggeration_factor),
        ] {
            if !value.is_finite() {
                return invalid(format!("{name} must be finite, got {value}"));
            }
        }
        for (name, value) in [
            ("cutoff_freq_low", self.cutoff_freq_low),
            ("cutoff_freq_high", self.cutoff_freq_high),
        ] {
            if value <= 0.0 || value >= 1.0 {
                return invalid(format!("{name} must lie in (0, 1), got {value}"));
            }
        }
        if self.cutoff_freq_low >= self.cutoff_freq_high {
            return invalid(format!(
                "cutoff_freq_low ({}) must be below cutoff_freq_high ({})",
                self.cutoff_freq_low, self.cutoff_freq_high
            ));
        }
        if !(0.0..=1.0).contains(&self.chrom_attenuation) {
            return invalid(format!(
                "chrom_attenuation must lie in [0, 1], got {}",
                self.chrom_attenuation
            ));
        }
        if self.alpha <= -1.0 {
            return invalid(format!("alpha must be > -1, got {}", self.alpha));
        }
        Ok(())
    }

    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_cutoffs(mut self, low: f32, high: f32) -> Self {
        self.cutoff_freq_low = low;
        self.cutoff_freq_high = high;
        self
    }
}

//! Per-level temporal band-pass built from two exponential moving averages.
//!
//! Each pyramid level owns a [`BandState`] with a fast and a slow EMA, both
//! seeded from the first frame's pyramid. Per frame:
//!
//! ```text
//! fast = (1 - high) * fast + high * x
//! slow = (1 - low)  * slow + low  * x
//! residual = fast - slow
//! ```
//!
//! `high > low`, so `fast` follows changes up to roughly `high` and `slow`
//! up to roughly `low`; the difference keeps the band in between. Levels
//! do not interact, so they may be updated in any order or in parallel.
use crate::error::Error;
use crate::image::{FrameF32, ImageView, CHANNELS};
use crate::pyramid::LaplacianPyramid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// EMA accumulators for one pyramid level.
#[derive(Clone, Debug)]
pub struct BandState {
    fast: FrameF32,
    slow: FrameF32,
}

impl BandState {
    pub fn new(initial: &FrameF32) -> Self {
        Self {
            fast: initial.clone(),
            slow: initial.clone(),
        }
    }

    pub fn fast(&self) -> &FrameF32 {
        &self.fast
    }

    pub fn slow(&self) -> &FrameF32 {
        &self.slow
    }

    /// Advance both averages with `value` and overwrite it with the residual.
    pub fn update_in_place(&mut self, value: &mut FrameF32, low: f32, high: f32) -> Result<(), Error> {
        if !value.same_dims(&self.fast) {
            return Err(Error::frame_mismatch(self.fast.dims(), value.dims()));
        }
        let (keep_fast, keep_slow) = (1.0 - high, 1.0 - low);
        for ((f, s), v) in self
            .fast
            .data
            .iter_mut()
            .zip(self.slow.data.iter_mut())
            .zip(value.data.iter_mut())
        {
            for c in 0..CHANNELS {
                f[c] = keep_fast * f[c] + high * v[c];
                s[c] = keep_slow * s[c] + low * v[c];
                v[c] = f[c] - s[c];
            }
        }
        Ok(())
    }
}

/// Band-pass state for every level of the pyramid.
#[derive(Clone, Debug)]
pub struct TemporalFilter {
    cutoff_low: f32,
    cutoff_high: f32,
    bands: Vec<BandState>,
}

impl TemporalFilter {
    /// Seed both averages of every level from `initial`.
    pub fn new(initial: &LaplacianPyramid, cutoff_low: f32, cutoff_high: f32) -> Self {
        Self {
            cutoff_low,
            cutoff_high,
            bands: initial.levels.iter().map(BandState::new).collect(),
        }
    }

    pub fn num_levels(&self) -> usize {
        self.bands.len()
    }

    pub fn band(&self, level: usize) -> Option<&BandState> {
        self.bands.get(level)
    }

    /// Feed one level's new value and return its band-passed residual.
    pub fn update(&mut self, level: usize, value: &FrameF32) -> Result<FrameF32, Error> {
        let (low, high) = (self.cutoff_low, self.cutoff_high);
        let levels = self.bands.len();
        let band = self
            .bands
            .get_mut(level)
            .ok_or(Error::LevelOutOfRange { level, levels })?;
        let mut residual = value.clone();
        band.update_in_place(&mut residual, low, high)?;
        Ok(residual)
    }

    /// Replace every level of `pyramid` by its residual, then hand each
    /// residual to `post` together with its level index.
    ///
    /// With the `parallel` feature the levels run on the rayon pool; all of
    /// them have completed when this returns.
    pub fn filter_levels<F>(&mut self, pyramid: &mut LaplacianPyramid, post: F) -> Result<(), Error>
    where
        F: Fn(usize, &mut FrameF32) + Sync + Send,
    {
        if pyramid.levels.len() != self.bands.len() {
            return Err(Error::level_mismatch(self.bands.len(), pyramid.levels.len()));
        }
        let (low, high) = (self.cutoff_low, self.cutoff_high);
        let step = |(level, (band, value)): (usize, (&mut BandState, &mut FrameF32))| -> Result<(), Error> {
            band.update_in_place(value, low, high)?;
            post(level, value);
            Ok(())
        };

        #[cfg(feature = "parallel")]
        {
            self.bands
                .par_iter_mut()
                .zip(pyramid.levels.par_iter_mut())
                .enumerate()
                .try_for_each(step)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.bands
                .iter_mut()
                .zip(pyramid.levels.iter_mut())
                .enumerate()
                .try_for_each(step)
        }
    }
}

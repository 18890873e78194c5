use super::resample::{down_dims, Resampler};
use crate::error::Error;
use crate::image::{FrameF32, ImageView};

/// Band-pass decomposition of one frame.
///
/// `levels[0..L]` hold the detail bands `fine - up(down(fine))` from full
/// resolution downwards; `levels[L]` is the coarse base frame. Every
/// pyramid built for a configured `L` has exactly `L + 1` entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaplacianPyramid {
    pub levels: Vec<FrameF32>,
}

impl LaplacianPyramid {
    /// Decompose `frame` into `levels` detail bands plus the base band.
    pub fn decompose(
        frame: &FrameF32,
        levels: usize,
        resampler: &dyn Resampler,
    ) -> Result<Self, Error> {
        if levels < 1 {
            return Err(Error::InvalidConfiguration(
                "pyramid requires at least one level".to_string(),
            ));
        }
        if frame.is_empty() {
            return Err(Error::EmptyFrame);
        }

        let mut out = Vec::with_capacity(levels + 1);
        let mut current = frame.clone();
        for _ in 0..levels {
            let down = resampler.down(&current);
            check_dims(down_dims(current.w, current.h), &down)?;
            let up = resampler.up(&down, current.w, current.h);
            check_dims(current.dims(), &up)?;
            out.push(current.sub(&up));
            current = down;
        }
        out.push(current);
        Ok(Self { levels: out })
    }

    /// Collapse the pyramid from the base band up to full resolution.
    ///
    /// `levels` is the configured band count; the pyramid must hold
    /// `levels + 1` entries whose sizes follow the `down` size chain.
    pub fn reconstruct(&self, levels: usize, resampler: &dyn Resampler) -> Result<FrameF32, Error> {
        if self.levels.len() != levels + 1 {
            return Err(Error::level_mismatch(levels + 1, self.levels.len()));
        }
        for pair in self.levels.windows(2) {
            let expected = down_dims(pair[0].w, pair[0].h);
            if pair[1].dims() != expected {
                return Err(Error::frame_mismatch(expected, pair[1].dims()));
            }
        }

        let mut current = self.levels[levels].clone();
        for band in self.levels[..levels].iter().rev() {
            let mut up = resampler.up(&current, band.w, band.h);
            check_dims(band.dims(), &up)?;
            up.add_assign(band);
            current = up;
        }
        Ok(current)
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Index of the base band.
    pub fn base_index(&self) -> Option<usize> {
        self.levels.len().checked_sub(1)
    }

    pub fn dims(&self) -> Vec<(usize, usize)> {
        self.levels.iter().map(|l| l.dims()).collect()
    }
}

/// A resampler output must be exactly `expected` in size and storage.
fn check_dims(expected: (usize, usize), frame: &FrameF32) -> Result<(), Error> {
    if frame.dims() != expected || frame.data.len() != expected.0 * expected.1 {
        return Err(Error::frame_mismatch(expected, frame.dims()));
    }
    Ok(())
}

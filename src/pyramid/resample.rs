//! Paired 2× down/up resampling primitives on 3-channel frames.
//!
//! - `down`: separable blur then decimation by picking every other sample.
//!   Output size is `(ceil(w/2), ceil(h/2))`.
//! - `up`: zero-insertion 2× upsample followed by the same separable blur,
//!   evaluated polyphase: each output sample only visits the taps that land on
//!   an existing source sample. Weights are renormalised per phase so that a
//!   constant frame stays constant for any symmetric kernel.
//! - Borders clamp to the frame extents in both directions.
use super::filters::{SeparableFilter, StaticSeparableFilter};
use crate::image::{FrameF32, ImageView, ImageViewMut, Pixel3, CHANNELS};

/// Smoothing 2× resampler pair used to build and collapse pyramids.
///
/// `up(down(f), f.w, f.h)` approximates `f`; the Laplacian pyramid stores the
/// residual of exactly that round trip, so any pair works as long as `up`
/// honours the requested size.
pub trait Resampler: Send + Sync {
    /// Smooth and halve. Must return `(ceil(w/2), ceil(h/2))`.
    fn down(&self, src: &FrameF32) -> FrameF32;
    /// Double and smooth to exactly `width × height`.
    fn up(&self, src: &FrameF32, width: usize, height: usize) -> FrameF32;
}

/// Size produced by one `down` step.
pub fn down_dims(width: usize, height: usize) -> (usize, usize) {
    (width.div_ceil(2), height.div_ceil(2))
}

/// Resampler using a separable binomial kernel (5-tap by default).
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussianResampler {
    filter: StaticSeparableFilter,
}

impl GaussianResampler {
    pub fn new(filter: StaticSeparableFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> StaticSeparableFilter {
        self.filter
    }
}

impl Resampler for GaussianResampler {
    fn down(&self, src: &FrameF32) -> FrameF32 {
        let (nw, nh) = down_dims(src.w, src.h);
        let mut dst = FrameF32::new(nw, nh);
        downsample_with_filter(src, &mut dst, self.filter);
        dst
    }

    fn up(&self, src: &FrameF32, width: usize, height: usize) -> FrameF32 {
        let mut dst = FrameF32::new(width, height);
        upsample_with_filter(src, &mut dst, self.filter);
        dst
    }
}

fn downsample_with_filter(src: &FrameF32, dst: &mut FrameF32, filter: StaticSeparableFilter) {
    if src.is_empty() || dst.is_empty() {
        return;
    }
    let taps = filter.taps();
    let radius = filter.radius();
    let taps_len = taps.len();
    let cache_width = dst.w;

    // Horizontally filtered+decimated source rows, one slot per vertical tap.
    let mut horiz_cache = vec![[0.0f32; CHANNELS]; cache_width * taps_len];
    let mut cached_rows = vec![-1isize; taps_len];

    for y in 0..dst.h {
        let center_sy = (y * 2) as isize;
        for ky in 0..taps_len {
            let offset = ky as isize - radius as isize;
            let sy = clamp_index(center_sy + offset, src.h) as isize;
            if cached_rows[ky] != sy {
                let src_row = src.row(sy as usize);
                let cache_row = &mut horiz_cache[ky * cache_width..(ky + 1) * cache_width];
                filter_row_downsample(src_row, cache_row, taps, radius);
                cached_rows[ky] = sy;
            }
        }
        let dst_row = dst.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = [0.0f32; CHANNELS];
            for (ky, &tap) in taps.iter().enumerate() {
                accumulate(&mut acc, &horiz_cache[ky * cache_width + x], tap);
            }
            *dst_px = acc;
        }
    }
}

fn filter_row_downsample(row: &[Pixel3], out: &mut [Pixel3], taps: &[f32], radius: usize) {
    if row.is_empty() || out.is_empty() {
        return;
    }
    let max_x = row.len();
    let mut sx = 0isize;
    for dst_px in out {
        let mut acc = [0.0f32; CHANNELS];
        for (k, &tap) in taps.iter().enumerate() {
            let offset = k as isize - radius as isize;
            let idx = clamp_index(sx + offset, max_x);
            accumulate(&mut acc, &row[idx], tap);
        }
        *dst_px = acc;
        sx = sx.saturating_add(2);
    }
}

fn upsample_with_filter(src: &FrameF32, dst: &mut FrameF32, filter: StaticSeparableFilter) {
    if src.is_empty() || dst.is_empty() {
        return;
    }
    let taps = filter.taps();
    let radius = filter.radius();

    // Horizontal pass: src.h rows at destination width.
    let mut tmp = FrameF32::new(dst.w, src.h);
    for y in 0..src.h {
        filter_row_upsample(src.row(y), tmp.row_mut(y), taps, radius);
    }

    // Vertical pass.
    for y in 0..dst.h {
        let dst_row = dst.row_mut(y);
        dst_row.fill([0.0; CHANNELS]);
        let mut weight = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let Some(sy) = phase_source(y, k, radius, src.h) else {
                continue;
            };
            for (dst_px, tmp_px) in dst_row.iter_mut().zip(tmp.row(sy)) {
                accumulate(dst_px, tmp_px, tap);
            }
            weight += tap;
        }
        if weight > 0.0 {
            let inv = 1.0 / weight;
            for px in dst_row.iter_mut() {
                for v in px.iter_mut() {
                    *v *= inv;
                }
            }
        }
    }
}

fn filter_row_upsample(row: &[Pixel3], out: &mut [Pixel3], taps: &[f32], radius: usize) {
    if row.is_empty() {
        return;
    }
    for (x, dst_px) in out.iter_mut().enumerate() {
        let mut acc = [0.0f32; CHANNELS];
        let mut weight = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            if let Some(sx) = phase_source(x, k, radius, row.len()) {
                accumulate(&mut acc, &row[sx], tap);
                weight += tap;
            }
        }
        if weight > 0.0 {
            for v in acc.iter_mut() {
                *v /= weight;
            }
        }
        *dst_px = acc;
    }
}

/// Source index feeding output position `pos` through tap `k`, if that tap
/// lands on an even (non-inserted) sample of the zero-stuffed signal.
#[inline]
fn phase_source(pos: usize, k: usize, radius: usize, src_len: usize) -> Option<usize> {
    let j = pos as isize + k as isize - radius as isize;
    (j.rem_euclid(2) == 0).then(|| clamp_index(j.div_euclid(2), src_len))
}

#[inline]
fn accumulate(acc: &mut Pixel3, px: &Pixel3, weight: f32) {
    for c in 0..CHANNELS {
        acc[c] += weight * px[c];
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

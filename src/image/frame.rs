//! Owned 3-channel f32 frame in row-major layout (stride == width).
//!
//! Pixels are `[f32; 3]` triples. Inside the pipeline channel 0 carries
//! lightness and channels 1–2 carry chroma; the container itself does not
//! care which color space it holds. Arithmetic helpers operate element-wise
//! and expect both operands to share the same dimensions.
use super::traits::{ImageView, ImageViewMut};
use crate::error::Error;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// One pixel: `[lightness, chroma_a, chroma_b]` inside the pipeline.
pub type Pixel3 = [f32; CHANNELS];

#[derive(Clone, Debug, PartialEq)]
pub struct FrameF32 {
    /// Frame width in pixels
    pub w: usize,
    /// Frame height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Pixel3>,
}

impl FrameF32 {
    /// Construct a zero-initialized frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, [0.0; CHANNELS])
    }

    pub fn filled(w: usize, h: usize, px: Pixel3) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![px; w * h],
        }
    }

    pub fn from_vec(w: usize, h: usize, data: Vec<Pixel3>) -> Result<Self, Error> {
        // A flat buffer of the wrong length is reported as a single row.
        if Some(data.len()) != w.checked_mul(h) {
            return Err(Error::frame_mismatch((w, h), (data.len(), 1)));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel3 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Pixel3) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn same_dims(&self, other: &FrameF32) -> bool {
        self.w == other.w && self.h == other.h
    }

    pub fn fill(&mut self, px: Pixel3) {
        self.data.fill(px);
    }

    /// `self += other`, pixel by pixel.
    pub fn add_assign(&mut self, other: &FrameF32) {
        debug_assert!(self.same_dims(other));
        for (dst, src) in self.data.iter_mut().zip(other.data.iter()) {
            for c in 0..CHANNELS {
                dst[c] += src[c];
            }
        }
    }

    /// `self - other` as a new frame.
    pub fn sub(&self, other: &FrameF32) -> FrameF32 {
        debug_assert!(self.same_dims(other));
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| [a[0] - b[0], a[1] - b[1], a[2] - b[2]])
            .collect();
        FrameF32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data,
        }
    }

    pub fn scale(&mut self, factor: f32) {
        for px in &mut self.data {
            for v in px.iter_mut() {
                *v *= factor;
            }
        }
    }

    /// Per-channel mean of absolute values. Empty frames report zeros.
    pub fn mean_abs(&self) -> Pixel3 {
        let mut acc = [0.0f64; CHANNELS];
        for px in &self.data {
            for c in 0..CHANNELS {
                acc[c] += px[c].abs() as f64;
            }
        }
        let denom = self.data.len().max(1) as f64;
        [
            (acc[0] / denom) as f32,
            (acc[1] / denom) as f32,
            (acc[2] / denom) as f32,
        ]
    }

    /// Mean absolute difference over all channels of all pixels.
    pub fn mean_abs_diff(&self, other: &FrameF32) -> f32 {
        debug_assert!(self.same_dims(other));
        let sum: f64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| {
                (0..CHANNELS)
                    .map(|c| (a[c] - b[c]).abs() as f64)
                    .sum::<f64>()
            })
            .sum();
        let denom = (self.data.len() * CHANNELS).max(1) as f64;
        (sum / denom) as f32
    }

    /// Largest absolute per-channel difference.
    pub fn max_abs_diff(&self, other: &FrameF32) -> f32 {
        debug_assert!(self.same_dims(other));
        self.data
            .iter()
            .zip(other.data.iter())
            .flat_map(|(a, b)| (0..CHANNELS).map(move |c| (a[c] - b[c]).abs()))
            .fold(0.0f32, f32::max)
    }
}

impl ImageView for FrameF32 {
    type Pixel = Pixel3;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Pixel3] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for FrameF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Pixel3] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

//! sRGB ↔ CIE L*a*b* conversion for the frame boundary.
//!
//! Purpose
//! - The magnifier works on a lightness/chroma representation so that chroma
//!   can be attenuated independently of lightness. Frames enter as 8-bit
//!   sRGB and leave the same way; everything in between is `FrameF32` Lab.
//!
//! Design
//! - sRGB bytes are scaled to [0,1], gamma-decoded, mapped to XYZ under D65
//!   with a 3×3 matrix and normalized by the reference white.
//! - L* lies in [0,100]; a*/b* are unbounded but stay within about ±128 for
//!   in-gamut colors.
//! - The inverse clamps to [0,1] before gamma encoding and rounds to bytes.
use crate::image::{FrameF32, ImageRgb8, ImageView, Pixel3};
use nalgebra::{Matrix3, Vector3};

const WHITE_X: f32 = 0.950_456;
const WHITE_Z: f32 = 1.088_754;
const EPSILON: f32 = 0.008_856;
const KAPPA: f32 = 903.3;
const F_SLOPE: f32 = 7.787;
const F_OFFSET: f32 = 16.0 / 116.0;

/// Converter holding the RGB↔XYZ matrices for D65.
#[derive(Clone, Debug)]
pub struct LabConverter {
    rgb_to_xyz: Matrix3<f32>,
    xyz_to_rgb: Matrix3<f32>,
}

impl Default for LabConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl LabConverter {
    pub fn new() -> Self {
        Self {
            rgb_to_xyz: Matrix3::new(
                0.412_453, 0.357_580, 0.180_423, //
                0.212_671, 0.715_160, 0.072_169, //
                0.019_334, 0.119_193, 0.950_227,
            ),
            xyz_to_rgb: Matrix3::new(
                3.240_479, -1.537_150, -0.498_535, //
                -0.969_256, 1.875_991, 0.041_556, //
                0.055_648, -0.204_043, 1.057_311,
            ),
        }
    }

    /// Gamma-encoded sRGB in [0,1] to `[L, a, b]`.
    pub fn srgb_to_lab(&self, rgb: [f32; 3]) -> Pixel3 {
        let linear = Vector3::new(
            srgb_to_linear(rgb[0]),
            srgb_to_linear(rgb[1]),
            srgb_to_linear(rgb[2]),
        );
        let xyz = self.rgb_to_xyz * linear;
        let (x, y, z) = (xyz[0] / WHITE_X, xyz[1], xyz[2] / WHITE_Z);

        let fy = lab_f(y);
        let l = if y > EPSILON {
            116.0 * y.cbrt() - 16.0
        } else {
            KAPPA * y
        };
        let a = 500.0 * (lab_f(x) - fy);
        let b = 200.0 * (fy - lab_f(z));
        [l, a, b]
    }

    /// `[L, a, b]` to gamma-encoded sRGB, clamped to [0,1].
    pub fn lab_to_srgb(&self, lab: Pixel3) -> [f32; 3] {
        let [l, a, b] = lab;
        let (y, fy) = if l > KAPPA * EPSILON {
            let fy = (l + 16.0) / 116.0;
            (fy * fy * fy, fy)
        } else {
            let y = l / KAPPA;
            (y, F_SLOPE * y + F_OFFSET)
        };
        let x = lab_f_inv(fy + a / 500.0) * WHITE_X;
        let z = lab_f_inv(fy - b / 200.0) * WHITE_Z;

        let linear = self.xyz_to_rgb * Vector3::new(x, y, z);
        [
            linear_to_srgb(linear[0].clamp(0.0, 1.0)),
            linear_to_srgb(linear[1].clamp(0.0, 1.0)),
            linear_to_srgb(linear[2].clamp(0.0, 1.0)),
        ]
    }

    /// Convert an 8-bit RGB view into a Lab frame.
    pub fn rgb8_to_lab(&self, rgb: &ImageRgb8<'_>) -> FrameF32 {
        let mut out = FrameF32::new(rgb.w, rgb.h);
        for y in 0..rgb.h {
            let src = rgb.row(y);
            let dst = &mut out.data[y * rgb.w..(y + 1) * rgb.w];
            for (px, bytes) in dst.iter_mut().zip(src.chunks_exact(3)) {
                *px = self.srgb_to_lab([
                    bytes[0] as f32 / 255.0,
                    bytes[1] as f32 / 255.0,
                    bytes[2] as f32 / 255.0,
                ]);
            }
        }
        out
    }

    /// Convert a Lab frame into packed 8-bit RGB bytes (`w * h * 3`).
    pub fn lab_to_rgb8(&self, frame: &FrameF32) -> Vec<u8> {
        let mut out = Vec::with_capacity(frame.w * frame.h * 3);
        for row in frame.rows() {
            for &px in row {
                for v in self.lab_to_srgb(px) {
                    out.push((v * 255.0).round().clamp(0.0, 255.0) as u8);
                }
            }
        }
        out
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        F_SLOPE * t + F_OFFSET
    }
}

#[inline]
fn lab_f_inv(f: f32) -> f32 {
    let cube = f * f * f;
    if cube > EPSILON {
        cube
    } else {
        (f - F_OFFSET) / F_SLOPE
    }
}

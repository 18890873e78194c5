mod common;

use common::init_logger;
use common::synthetic_frames::{blob_frame, constant_frame, smooth_frame};
use eulerian_magnifier::pyramid::{down_dims, GaussianResampler, LaplacianPyramid, Resampler};
use eulerian_magnifier::{Error, FrameF32, MagnifyParams, MotionMagnifier};

/// Crude resampler: decimate by sampling, upsample by pixel replication.
struct NearestResampler;

impl Resampler for NearestResampler {
    fn down(&self, src: &FrameF32) -> FrameF32 {
        let (w, h) = down_dims(src.w, src.h);
        let mut out = FrameF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                out.set(x, y, src.get(2 * x, 2 * y));
            }
        }
        out
    }

    fn up(&self, src: &FrameF32, width: usize, height: usize) -> FrameF32 {
        let mut out = FrameF32::new(width, height);
        for y in 0..height {
            for x in 0..width {
                out.set(x, y, src.get((x / 2).min(src.w - 1), (y / 2).min(src.h - 1)));
            }
        }
        out
    }
}

#[test]
fn level_count_is_levels_plus_one() {
    init_logger();
    let resampler = GaussianResampler::default();
    let frame = smooth_frame(37, 23);
    for levels in 1..=6 {
        let pyramid = LaplacianPyramid::decompose(&frame, levels, &resampler).expect("pyramid");
        assert_eq!(pyramid.num_levels(), levels + 1);
        let dims = pyramid.dims();
        assert_eq!(dims[0], (37, 23));
        for pair in dims.windows(2) {
            assert_eq!(pair[1], down_dims(pair[0].0, pair[0].1));
        }
    }
}

#[test]
fn zero_levels_fail_with_invalid_configuration() {
    init_logger();
    let err = LaplacianPyramid::decompose(&smooth_frame(8, 8), 0, &GaussianResampler::default())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn reconstruction_is_near_identity() {
    init_logger();
    let resampler = GaussianResampler::default();
    for (w, h, levels) in [(64, 48, 5), (33, 17, 3), (5, 3, 4), (1, 1, 2)] {
        let frame = smooth_frame(w, h);
        let pyramid = LaplacianPyramid::decompose(&frame, levels, &resampler).expect("pyramid");
        let back = pyramid.reconstruct(levels, &resampler).expect("reconstruct");
        let err = back.mean_abs_diff(&frame);
        assert!(err < 1e-3, "{w}x{h} L={levels}: mean abs error {err}");
    }
}

#[test]
fn any_resampler_pair_reconstructs() {
    init_logger();
    let frame = blob_frame(20, 14, 3.0, 1.0);
    let pyramid = LaplacianPyramid::decompose(&frame, 3, &NearestResampler).expect("pyramid");
    let back = pyramid.reconstruct(3, &NearestResampler).expect("reconstruct");
    assert!(back.max_abs_diff(&frame) < 1e-3);
}

#[test]
fn constant_frame_has_flat_detail_bands() {
    init_logger();
    let px = [71.0, -3.0, 22.0];
    let pyramid = LaplacianPyramid::decompose(
        &constant_frame(24, 18, px),
        3,
        &GaussianResampler::default(),
    )
    .expect("pyramid");
    for band in &pyramid.levels[..3] {
        assert!(band.mean_abs().iter().all(|&v| v < 1e-4));
    }
    let base = &pyramid.levels[3];
    assert!(base.max_abs_diff(&constant_frame(base.w, base.h, px)) < 1e-3);
}

#[test]
fn magnifier_accepts_custom_resampler() {
    init_logger();
    let mut magnifier = MotionMagnifier::with_resampler(
        MagnifyParams {
            levels: 2,
            ..Default::default()
        },
        Box::new(NearestResampler),
    )
    .expect("valid params");
    let frame = smooth_frame(12, 10);
    assert_eq!(magnifier.process(&frame).expect("bootstrap"), frame);
    let steady = magnifier.process(&frame).expect("steady");
    assert!(steady.max_abs_diff(&frame) < 1e-3);
}

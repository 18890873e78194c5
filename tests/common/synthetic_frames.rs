use eulerian_magnifier::FrameF32;

/// Frame with the same Lab value everywhere.
pub fn constant_frame(width: usize, height: usize, lab: [f32; 3]) -> FrameF32 {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    FrameF32::filled(width, height, lab)
}

/// Smooth low-frequency pattern with structure in all three channels.
pub fn smooth_frame(width: usize, height: usize) -> FrameF32 {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    let mut frame = FrameF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let fx = x as f32 / width as f32;
            let fy = y as f32 / height as f32;
            let l = 55.0 + 25.0 * (fx * 4.0).sin() * (fy * 3.0).cos();
            let a = 12.0 * (fx * 2.5 + fy).cos();
            let b = -8.0 + 10.0 * fy;
            frame.set(x, y, [l, a, b]);
        }
    }
    frame
}

/// Gaussian blob whose lightness and chroma swell with `amplitude`.
pub fn blob_frame(width: usize, height: usize, sigma: f32, amplitude: f32) -> FrameF32 {
    let mut frame = FrameF32::new(width, height);
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let g = (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp();
            frame.set(x, y, [40.0 + 30.0 * g * amplitude, 15.0 * g * amplitude, -5.0 * g]);
        }
    }
    frame
}

/// `count` blob frames with a small periodic swelling, period `period` frames.
pub fn pulsing_sequence(
    width: usize,
    height: usize,
    count: usize,
    period: f32,
    depth: f32,
) -> Vec<FrameF32> {
    (0..count)
        .map(|i| {
            let phase = i as f32 / period * std::f32::consts::TAU;
            blob_frame(width, height, width as f32 / 6.0, 1.0 + depth * phase.sin())
        })
        .collect()
}

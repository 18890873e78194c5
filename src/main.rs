use eulerian_magnifier::{FrameF32, MagnifyParams, MotionMagnifier};

fn main() {
    // Demo stub: a small Lab frame whose lightness pulses slightly, run
    // through the magnifier for a few frames.
    let (w, h) = (64usize, 48usize);
    let mut magnifier = match MotionMagnifier::new(MagnifyParams {
        levels: 3,
        ..Default::default()
    }) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    for i in 0..8 {
        let pulse = 0.5 * (i as f32 * 0.8).sin();
        let mut frame = FrameF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let dx = x as f32 - w as f32 / 2.0;
                let dy = y as f32 - h as f32 / 2.0;
                let blob = (-(dx * dx + dy * dy) / 80.0).exp();
                frame.set(x, y, [40.0 + 20.0 * blob * (1.0 + pulse), 5.0 * blob, 0.0]);
            }
        }
        match magnifier.process_with_diagnostics(&frame) {
            Ok(out) => println!(
                "frame={} phase={:?} motion_l={:.4} latency_ms={:.3}",
                out.report.frame_index,
                out.report.phase,
                out.report.motion_mean_abs[0],
                out.report.timings.total_ms
            ),
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
    }
}

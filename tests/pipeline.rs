mod common;

use common::init_logger;
use common::synthetic_frames::{constant_frame, pulsing_sequence, smooth_frame};
use eulerian_magnifier::error::Extent;
use eulerian_magnifier::stages::{Amplifier, FramePhase};
use eulerian_magnifier::{
    Error, FrameF32, FrameSource, IterSource, MagnifyParams, MotionMagnifier, StopReason,
};
use std::sync::atomic::{AtomicBool, Ordering};

fn params(levels: usize) -> MagnifyParams {
    MagnifyParams {
        levels,
        ..Default::default()
    }
}

#[test]
fn constant_scene_gains_no_motion() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(MagnifyParams {
        levels: 2,
        cutoff_freq_low: 0.05,
        cutoff_freq_high: 0.4,
        alpha: 20.0,
        chrom_attenuation: 0.1,
        ..Default::default()
    })
    .expect("valid params");
    let frame = constant_frame(4, 4, [62.0, 14.0, -9.0]);

    for i in 0..10 {
        let out = magnifier.process(&frame).expect("process");
        let diff = out.max_abs_diff(&frame);
        assert!(diff < 1e-3, "frame {i}: output drifted by {diff}");
    }
    assert_eq!(magnifier.frames_processed(), 10);
}

#[test]
fn bootstrap_frame_is_returned_unchanged() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(4)).expect("valid params");
    let frame = smooth_frame(40, 30);
    let out = magnifier.process_with_diagnostics(&frame).expect("process");
    assert_eq!(out.output, frame);
    assert_eq!(out.report.phase, FramePhase::Bootstrap);
    assert_eq!(out.report.frame_index, 0);
    assert_eq!(out.report.motion_mean_abs, [0.0; 3]);
}

#[test]
fn boundary_bands_carry_no_residual() {
    init_logger();
    let levels = 3;
    let mut magnifier = MotionMagnifier::new(params(levels)).expect("valid params");
    for frame in pulsing_sequence(32, 32, 12, 6.0, 0.2) {
        let out = magnifier.process_with_diagnostics(&frame).expect("process");
        if out.report.phase == FramePhase::Bootstrap {
            continue;
        }
        let finest = &out.report.levels[0];
        let base = &out.report.levels[levels];
        assert!(finest.excluded && base.excluded);
        assert_eq!(finest.gain, 0.0);
        assert_eq!(base.gain, 0.0);
        assert_eq!(finest.mean_abs_residual, [0.0; 3]);
        assert_eq!(base.mean_abs_residual, [0.0; 3]);
    }
}

#[test]
fn single_band_pipeline_is_exact_identity() {
    init_logger();
    // With one level both bands are excluded, so the motion frame is zero.
    let mut magnifier = MotionMagnifier::new(params(1)).expect("valid params");
    for frame in pulsing_sequence(16, 16, 6, 4.0, 0.3) {
        let out = magnifier.process(&frame).expect("process");
        assert_eq!(out, frame);
    }
}

#[test]
fn pulsing_blob_is_amplified() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(3)).expect("valid params");
    let mut peak_motion = 0.0f32;
    let mut peak_diff = 0.0f32;
    for frame in pulsing_sequence(32, 32, 24, 8.0, 0.1) {
        let out = magnifier.process_with_diagnostics(&frame).expect("process");
        peak_motion = peak_motion.max(out.report.motion_mean_abs[0]);
        peak_diff = peak_diff.max(out.output.max_abs_diff(&frame));
        for level in &out.report.levels {
            if !level.excluded {
                assert!(level.gain > 0.0, "level {} gain {}", level.level_index, level.gain);
                assert!(level.gain <= 20.0);
            }
        }
    }
    assert!(peak_motion > 1e-3, "no motion extracted: {peak_motion}");
    assert!(peak_diff > 0.1, "output barely changed: {peak_diff}");
}

#[test]
fn zero_chroma_attenuation_keeps_input_chroma() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(MagnifyParams {
        levels: 3,
        chrom_attenuation: 0.0,
        ..Default::default()
    })
    .expect("valid params");
    for frame in pulsing_sequence(32, 32, 10, 5.0, 0.2) {
        let out = magnifier.process(&frame).expect("process");
        for (o, i) in out.data.iter().zip(frame.data.iter()) {
            assert_eq!(o[1], i[1]);
            assert_eq!(o[2], i[2]);
        }
    }
}

#[test]
fn reported_gains_match_amplifier() {
    init_logger();
    let p = params(4);
    let amplifier = Amplifier::from_params(&p);
    let mut magnifier = MotionMagnifier::new(p).expect("valid params");
    let frames = pulsing_sequence(48, 36, 3, 4.0, 0.1);
    let mut last = None;
    for frame in &frames {
        last = Some(magnifier.process_with_diagnostics(frame).expect("process"));
    }
    let report = last.expect("frames").report;
    assert_eq!(report.delta, amplifier.delta());
    for level in &report.levels {
        assert_eq!(level.gain, amplifier.gain(level.level_index, 48, 36));
        assert_eq!(level.wavelength, amplifier.wavelength(level.level_index, 48, 36));
    }
}

#[test]
fn frame_size_change_is_rejected() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(2)).expect("valid params");
    magnifier.process(&smooth_frame(16, 12)).expect("bootstrap");
    let err = magnifier.process(&smooth_frame(12, 16)).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            expected: Extent::Frame {
                width: 16,
                height: 12
            },
            actual: Extent::Frame {
                width: 12,
                height: 16
            },
        }
    );
}

#[test]
fn invalid_parameters_are_rejected_at_construction() {
    init_logger();
    let cases = [
        params(0),
        MagnifyParams {
            cutoff_freq_low: 0.4,
            cutoff_freq_high: 0.05,
            ..Default::default()
        },
        MagnifyParams {
            chrom_attenuation: 1.01,
            ..Default::default()
        },
    ];
    for p in cases {
        match MotionMagnifier::new(p.clone()) {
            Err(Error::InvalidConfiguration(msg)) => assert!(!msg.is_empty()),
            Err(other) => panic!("unexpected error for {p:?}: {other}"),
            Ok(_) => panic!("parameters should be rejected: {p:?}"),
        }
    }
}

#[test]
fn run_drains_source_until_end_of_stream() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(2)).expect("valid params");
    let frames = pulsing_sequence(16, 16, 7, 4.0, 0.1);
    let mut out: Vec<FrameF32> = Vec::new();
    let summary = magnifier
        .run(&mut IterSource::new(frames.clone()), &mut out)
        .expect("run");
    assert_eq!(summary.frames_processed, 7);
    assert_eq!(summary.stop_reason, StopReason::EndOfStream);
    assert_eq!(out.len(), 7);
    assert_eq!(out[0], frames[0]);
}

#[test]
fn stop_flag_ends_run_before_next_pull() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(2)).expect("valid params");
    let stop = AtomicBool::new(false);
    let mut out: Vec<FrameF32> = Vec::new();
    let summary = magnifier
        .run_until(
            &mut IterSource::new(pulsing_sequence(16, 16, 10, 4.0, 0.1)),
            &mut out,
            &stop,
            |report| {
                if report.frame_index == 2 {
                    stop.store(true, Ordering::Relaxed);
                }
            },
        )
        .expect("run");
    assert_eq!(summary.frames_processed, 3);
    assert_eq!(summary.stop_reason, StopReason::StopRequested);
    assert_eq!(out.len(), 3);
}

#[test]
fn preset_stop_flag_processes_nothing() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(2)).expect("valid params");
    let stop = AtomicBool::new(true);
    let mut out: Vec<FrameF32> = Vec::new();
    let summary = magnifier
        .run_until(
            &mut IterSource::new(pulsing_sequence(16, 16, 4, 4.0, 0.1)),
            &mut out,
            &stop,
            |_| {},
        )
        .expect("run");
    assert_eq!(summary.frames_processed, 0);
    assert_eq!(summary.stop_reason, StopReason::StopRequested);
    assert!(out.is_empty());
}

struct FlakySource {
    frames: Vec<FrameF32>,
    fail_at: usize,
    served: usize,
}

impl FrameSource for FlakySource {
    type Error = String;

    fn next_frame(&mut self) -> Result<Option<FrameF32>, String> {
        if self.served == self.fail_at {
            return Err("decoder error".to_string());
        }
        let frame = self.frames.get(self.served).cloned();
        self.served += 1;
        Ok(frame)
    }
}

#[test]
fn source_failure_is_a_graceful_stop() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(2)).expect("valid params");
    let mut source = FlakySource {
        frames: pulsing_sequence(16, 16, 5, 4.0, 0.1),
        fail_at: 2,
        served: 0,
    };
    let mut out: Vec<FrameF32> = Vec::new();
    let summary = magnifier.run(&mut source, &mut out).expect("run");
    assert_eq!(summary.frames_processed, 2);
    assert_eq!(
        summary.stop_reason,
        StopReason::SourceFailed("decoder error".to_string())
    );
}

#[test]
fn resolution_change_mid_stream_aborts_run() {
    init_logger();
    let mut magnifier = MotionMagnifier::new(params(2)).expect("valid params");
    let frames = vec![smooth_frame(16, 16), smooth_frame(16, 16), smooth_frame(8, 8)];
    let mut out: Vec<FrameF32> = Vec::new();
    let err = magnifier
        .run(&mut IterSource::new(frames), &mut out)
        .unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
    assert_eq!(out.len(), 2);
}

use eulerian_magnifier::config::magnify::load_config;
use eulerian_magnifier::diagnostics::{FrameReport, RunSummary};
use eulerian_magnifier::image::io::write_json_file;
use eulerian_magnifier::sequence::{ImageSequenceSink, ImageSequenceSource};
use eulerian_magnifier::{MagnifyParams, MotionMagnifier};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut source = ImageSequenceSource::open_dir(&config.input, config.resolution.input_size())?;
    if source.is_empty() {
        return Err(format!("No image frames found in {}", config.input.display()));
    }
    let mut sink = ImageSequenceSink::create(&config.output.dir, config.resolution.output_size())?;
    let mut magnifier = MotionMagnifier::new(config.params.clone()).map_err(|e| e.to_string())?;

    println!(
        "Magnifying {} frames from {} (levels={}, alpha={}, band=[{}, {}])",
        source.len(),
        config.input.display(),
        config.params.levels,
        config.params.alpha,
        config.params.cutoff_freq_low,
        config.params.cutoff_freq_high
    );

    // A zero frame limit stops before the first pull.
    let stop = AtomicBool::new(config.frame_limit_reached(0));
    let mut frames: Vec<FrameReport> = Vec::new();
    let summary = magnifier
        .run_until(&mut source, &mut sink, &stop, |report| {
            println!(
                "frame {:>5} {:?} {:.2} ms",
                report.frame_index, report.phase, report.timings.total_ms
            );
            if config.frame_limit_reached(report.frame_index + 1) {
                stop.store(true, Ordering::Relaxed);
            }
            frames.push(report.clone());
        })
        .map_err(|e| e.to_string())?;

    println!(
        "Processed {} frames in {:.1} ms ({:.2} ms/frame), stop: {:?}",
        summary.frames_processed, summary.total_ms, summary.mean_frame_ms, summary.stop_reason
    );
    println!(
        "Wrote {} frames to {}",
        sink.written().len(),
        config.output.dir.display()
    );

    if let Some(report_path) = &config.output.report_json {
        let report = RunReport {
            params: config.params,
            summary,
            frames,
        };
        write_json_file(report_path, &report)?;
        println!("Saved run report to {}", report_path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: magnify_frames <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    params: MagnifyParams,
    summary: RunSummary,
    frames: Vec<FrameReport>,
}

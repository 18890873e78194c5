use eulerian_magnifier::color::LabConverter;
use eulerian_magnifier::config::pyramid::load_config;
use eulerian_magnifier::diagnostics::PyramidStage;
use eulerian_magnifier::image::io::{load_rgb_image, save_rgb_u8, write_json_file, RgbImageU8};
use eulerian_magnifier::image::FrameF32;
use eulerian_magnifier::pyramid::{GaussianResampler, LaplacianPyramid};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

/// Lightness offset that maps a zero-mean detail band to mid-gray.
const BAND_OFFSET_L: f32 = 50.0;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let rgb = load_rgb_image(&config.input)?;
    let converter = LabConverter::new();
    let lab = converter.rgb8_to_lab(&rgb.as_view());
    let resampler = GaussianResampler::default();

    let start = Instant::now();
    let pyramid =
        LaplacianPyramid::decompose(&lab, config.levels, &resampler).map_err(|e| e.to_string())?;
    let decompose_ms = start.elapsed().as_secs_f64() * 1000.0;
    let reconstruction = pyramid
        .reconstruct(config.levels, &resampler)
        .map_err(|e| e.to_string())?;

    let dir = &config.output.dir;
    let base = pyramid.levels.len() - 1;
    for (index, level) in pyramid.levels.iter().enumerate() {
        let visual = if index == base {
            level.clone()
        } else {
            offset_band(level)
        };
        let path = dir.join(format!("level_{index}.png"));
        save_lab(&converter, &visual, &path)?;
        println!(
            "Saved level {index} ({}x{}) to {}",
            level.w,
            level.h,
            path.display()
        );
    }
    let recon_path = dir.join("reconstruction.png");
    save_lab(&converter, &reconstruction, &recon_path)?;

    let stats = PyramidStats {
        width: lab.w,
        height: lab.h,
        reconstruction_mean_abs_error: reconstruction.mean_abs_diff(&lab),
        reconstruction_max_abs_error: reconstruction.max_abs_diff(&lab),
        pyramid: PyramidStage::from_pyramid(&pyramid, decompose_ms),
    };
    println!(
        "Reconstruction error: mean {:.2e}, max {:.2e}",
        stats.reconstruction_mean_abs_error, stats.reconstruction_max_abs_error
    );
    if let Some(stats_path) = &config.output.stats_json {
        write_json_file(stats_path, &stats)?;
        println!("Saved pyramid stats to {}", stats_path.display());
    }
    Ok(())
}

/// Detail bands are zero-mean; shift lightness so they are visible.
fn offset_band(band: &FrameF32) -> FrameF32 {
    let mut out = band.clone();
    for px in &mut out.data {
        px[0] += BAND_OFFSET_L;
    }
    out
}

fn save_lab(converter: &LabConverter, frame: &FrameF32, path: &Path) -> Result<(), String> {
    let rgb = RgbImageU8::new(frame.w, frame.h, converter.lab_to_rgb8(frame))?;
    save_rgb_u8(&rgb, path)
}

fn usage() -> String {
    "Usage: pyramid_levels <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PyramidStats {
    width: usize,
    height: usize,
    reconstruction_mean_abs_error: f32,
    reconstruction_max_abs_error: f32,
    pyramid: PyramidStage,
}

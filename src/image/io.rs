//! I/O helpers for RGB frames and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned 8-bit RGB buffer.
//! - `save_rgb_u8`: write an owned 8-bit RGB buffer to disk (format by extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgb8;
use image::imageops::{self, FilterType};
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned packed 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageU8 {
    /// Construct an owned buffer from `width * height * 3` packed bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, String> {
        if data.len() != width * height * 3 {
            return Err(format!(
                "RGB buffer of {} bytes does not match {width}x{height}",
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width * 3,
            data: &self.data,
        }
    }

    /// Resample to `width × height` with a triangle filter. Same-size requests
    /// return a copy.
    pub fn resized(&self, width: usize, height: usize) -> Result<Self, String> {
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        let src = self.to_rgb_image()?;
        let out = imageops::resize(&src, width as u32, height as u32, FilterType::Triangle);
        Self::new(width, height, out.into_raw())
    }

    fn to_rgb_image(&self) -> Result<RgbImage, String> {
        RgbImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())
    }
}

/// Load an image from disk and convert to packed 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbImageU8::new(width, height, img.into_raw())
}

/// Save an 8-bit RGB buffer; the format follows the file extension.
pub fn save_rgb_u8(buffer: &RgbImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    buffer
        .to_rgb_image()?
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

//! Frame source and sink backed by a directory of still images.
//!
//! - [`ImageSequenceSource`] decodes every `png/jpg/jpeg/bmp/tif/tiff` file
//!   of a directory in file-name order, optionally resizes it, and converts
//!   it to Lab.
//! - [`ImageSequenceSink`] converts Lab frames back to 8-bit RGB, optionally
//!   resizes them, and writes `frame_00000.png`, `frame_00001.png`, ...
use crate::color::LabConverter;
use crate::image::io::{load_rgb_image, save_rgb_u8, RgbImageU8};
use crate::image::FrameF32;
use crate::magnifier::{FrameSink, FrameSource};
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Sorted list of decodable image files in `dir`.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read directory {}: {e}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read entry in {}: {e}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub struct ImageSequenceSource {
    files: Vec<PathBuf>,
    next: usize,
    resize_to: Option<(usize, usize)>,
    converter: LabConverter,
}

impl ImageSequenceSource {
    /// Enumerate the frames of `dir`. `resize_to` overrides the source resolution.
    pub fn open_dir(dir: &Path, resize_to: Option<(usize, usize)>) -> Result<Self, String> {
        Ok(Self::from_files(list_image_files(dir)?, resize_to))
    }

    pub fn from_files(files: Vec<PathBuf>, resize_to: Option<(usize, usize)>) -> Self {
        Self {
            files,
            next: 0,
            resize_to,
            converter: LabConverter::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Path of the frame the next call to `next_frame` will decode.
    pub fn peek_path(&self) -> Option<&Path> {
        self.files.get(self.next).map(PathBuf::as_path)
    }
}

impl FrameSource for ImageSequenceSource {
    type Error = String;

    fn next_frame(&mut self) -> Result<Option<FrameF32>, String> {
        let Some(path) = self.files.get(self.next) else {
            return Ok(None);
        };
        let mut rgb = load_rgb_image(path)?;
        if let Some((w, h)) = self.resize_to {
            rgb = rgb.resized(w, h)?;
        }
        self.next += 1;
        Ok(Some(self.converter.rgb8_to_lab(&rgb.as_view())))
    }
}

pub struct ImageSequenceSink {
    dir: PathBuf,
    resize_to: Option<(usize, usize)>,
    converter: LabConverter,
    written: Vec<PathBuf>,
}

impl ImageSequenceSink {
    /// Create `dir` if needed. `resize_to` overrides the output resolution.
    pub fn create(dir: &Path, resize_to: Option<(usize, usize)>) -> Result<Self, String> {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            resize_to,
            converter: LabConverter::new(),
            written: Vec::new(),
        })
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index:05}.png"))
    }
}

impl FrameSink for ImageSequenceSink {
    type Error = String;

    fn emit(&mut self, frame: FrameF32) -> Result<(), String> {
        let bytes = self.converter.lab_to_rgb8(&frame);
        let mut rgb = RgbImageU8::new(frame.w, frame.h, bytes)?;
        if let Some((w, h)) = self.resize_to {
            rgb = rgb.resized(w, h)?;
        }
        let path = self.frame_path(self.written.len());
        save_rgb_u8(&rgb, &path)?;
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("eulerian_seq_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn filters_and_sorts_image_files() {
        let dir = scratch_dir("list");
        fs::create_dir_all(&dir).expect("mkdir");
        for name in ["b.png", "a.JPG", "notes.txt", "c.tiff"] {
            fs::write(dir.join(name), b"").expect("touch");
        }
        let files = list_image_files(&dir).expect("list");
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(str::to_owned))
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.tiff"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn sink_output_reads_back_as_source() {
        let dir = scratch_dir("roundtrip");
        let converter = LabConverter::new();
        let rgb: Vec<u8> = (0..6 * 4)
            .flat_map(|i| [(i * 10) as u8, 128, (255 - i * 5) as u8])
            .collect();
        let view = crate::image::ImageRgb8::packed(6, 4, &rgb).expect("view");
        let lab = converter.rgb8_to_lab(&view);

        let mut sink = ImageSequenceSink::create(&dir, None).expect("sink");
        sink.emit(lab.clone()).expect("emit");
        sink.emit(lab.clone()).expect("emit");
        assert_eq!(sink.written().len(), 2);
        assert!(sink.written()[1].ends_with("frame_00001.png"));

        let mut source = ImageSequenceSource::open_dir(&dir, Some((3, 2))).expect("source");
        assert_eq!(source.len(), 2);
        let first = source.next_frame().expect("decode").expect("frame");
        assert_eq!((first.w, first.h), (3, 2));
        assert!(source.next_frame().expect("decode").is_some());
        assert!(source.next_frame().expect("decode").is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_reported() {
        let err = ImageSequenceSource::open_dir(Path::new("/nonexistent/frames"), None)
            .err()
            .expect("missing dir");
        assert!(err.contains("/nonexistent/frames"));
    }
}

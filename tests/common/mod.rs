//! Shared fixtures for integration tests.
//!
//! Builds blog roots on disk with real PNG/JPEG files so conversions run
//! through the actual codecs.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A temporary blog root holding post folders.
pub struct Blog {
    dir: TempDir,
}

impl Blog {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create (or reuse) a post folder and return its path.
    pub fn post(&self, slug: &str) -> PathBuf {
        let path = self.root().join(slug);
        fs::create_dir_all(&path).expect("failed to create post dir");
        path
    }

    /// Every file under the root, keyed by relative path.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        WalkDir::new(self.root())
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e
                    .path()
                    .strip_prefix(self.root())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect()
    }
}

/// Sorted file names directly inside `folder`.
pub fn file_names(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(folder)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Write a PNG with a transparent pixel.
pub fn write_png(path: &Path) {
    let mut img = RgbaImage::from_pixel(6, 4, Rgba([40, 80, 120, 255]));
    img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    img.save_with_format(path, ImageFormat::Png)
        .expect("failed to write png");
}

pub fn write_jpeg(path: &Path) {
    RgbImage::from_pixel(8, 8, Rgb([200, 100, 50]))
        .save_with_format(path, ImageFormat::Jpeg)
        .expect("failed to write jpeg");
}

pub fn write_index(post: &Path, contents: &str) {
    fs::write(post.join("index.qmd"), contents).expect("failed to write index.qmd");
}

pub fn read_index(post: &Path) -> String {
    fs::read_to_string(post.join("index.qmd")).expect("failed to read index.qmd")
}

//! Legacy raster to WebP conversion.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, RgbImage};
use tracing::{debug, warn};

use super::{list_files, ImageFormatTag};
use crate::error::{Result, SyncError};

/// Lossy WebP quality (0-100) used for every conversion.
pub const WEBP_QUALITY: f32 = 90.0;

/// A legacy image converted (or planned for conversion under dry-run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Original file name.
    pub source: String,
    /// File name of the WebP output.
    pub target: String,
}

/// A legacy image that could not be converted and was left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedConversion {
    pub source: String,
    pub reason: String,
}

/// What normalizing one folder did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalization {
    pub converted: Vec<Conversion>,
    pub failed: Vec<FailedConversion>,
}

impl Normalization {
    /// Whether any image was (or would be) converted.
    pub fn converted_any(&self) -> bool {
        !self.converted.is_empty()
    }
}

/// Convert every PNG/JPEG directly inside `folder` to WebP and delete the original.
///
/// A file that fails to decode or encode is logged, recorded in
/// [`Normalization::failed`], and left untouched; the remaining files are
/// still converted. Under `dry_run` every file is decoded and encoded in
/// memory only, so failures match a real run while nothing is written or
/// deleted.
pub fn normalize(folder: &Path, dry_run: bool) -> Result<Normalization> {
    let mut outcome = Normalization::default();

    for path in list_files(folder)? {
        let Some(format) = ImageFormatTag::from_path(&path).filter(|f| f.is_legacy()) else {
            continue;
        };

        let target = path.with_extension(ImageFormatTag::TARGET.extension());
        let source_name = file_name(&path);
        let target_name = file_name(&target);

        if let Err(e) = convert_file(&path, format, &target, dry_run) {
            warn!("Failed to convert {:?}: {}", path, e);
            outcome.failed.push(FailedConversion {
                source: source_name,
                reason: e.to_string(),
            });
            continue;
        }
        debug!("Converted {} -> {}", source_name, target_name);

        outcome.converted.push(Conversion {
            source: source_name,
            target: target_name,
        });
    }

    Ok(outcome)
}

fn convert_file(source: &Path, format: ImageFormatTag, target: &Path, dry_run: bool) -> Result<()> {
    let file = File::open(source).map_err(|e| SyncError::read(source, e))?;
    let img = image::load(BufReader::new(file), format.codec())
        .map_err(|e| SyncError::image(source, e))?;

    let encoded = encode_webp(&flatten(img), target)?;
    if dry_run {
        return Ok(());
    }

    fs::write(target, encoded).map_err(|e| SyncError::write(target, e))?;
    fs::remove_file(source).map_err(|e| SyncError::remove(source, e))?;
    Ok(())
}

/// Lossy WebP at [`WEBP_QUALITY`].
fn encode_webp(rgb: &RgbImage, target: &Path) -> Result<Vec<u8>> {
    let encoder = webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height());
    let memory = encoder
        .encode_simple(false, WEBP_QUALITY)
        .map_err(|e| SyncError::encode(target, format!("{:?}", e)))?;
    Ok(memory.to_vec())
}

/// Reduce any color mode to plain 8-bit RGB.
///
/// Alpha is dropped, not composited against a background; palette images
/// arrive already expanded by the decoder.
fn flatten(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            if other.color().has_alpha() {
                debug!("Discarding alpha channel ({:?})", other.color());
            }
            other.to_rgb8()
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, Rgba, RgbaImage};

    fn write_rgba_png(path: &Path) {
        let mut img = RgbaImage::new(4, 4);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([10, 20, 30, 0]);
        }
        img.save_with_format(path, ImageFormat::Png).unwrap();
    }

    fn write_jpeg(path: &Path) {
        let img = RgbImage::from_pixel(8, 8, Rgb([200, 100, 50]));
        img.save_with_format(path, ImageFormat::Jpeg).unwrap();
    }

    #[test]
    fn test_converts_and_removes_originals() {
        let dir = tempfile::tempdir().unwrap();
        write_rgba_png(&dir.path().join("diagram.png"));
        write_jpeg(&dir.path().join("photo.JPG"));
        write_jpeg(&dir.path().join("cover.jpeg"));

        let outcome = normalize(dir.path(), false).unwrap();

        assert!(outcome.converted_any());
        assert!(outcome.failed.is_empty());
        assert_eq!(outcome.converted.len(), 3);
        for stem in ["diagram", "photo", "cover"] {
            assert!(dir.path().join(format!("{stem}.webp")).exists());
        }
        assert!(!dir.path().join("diagram.png").exists());
        assert!(!dir.path().join("photo.JPG").exists());
        assert!(!dir.path().join("cover.jpeg").exists());
    }

    #[test]
    fn test_alpha_is_discarded_not_composited() {
        let dir = tempfile::tempdir().unwrap();
        write_rgba_png(&dir.path().join("clear.png"));

        normalize(dir.path(), false).unwrap();

        let webp = image::open(dir.path().join("clear.webp")).unwrap();
        assert!(!webp.color().has_alpha());
        let Rgb([r, g, b]) = *webp.to_rgb8().get_pixel(0, 0);
        for (got, want) in [(r, 10u8), (g, 20), (b, 30)] {
            assert!(got.abs_diff(want) <= 8, "{got} vs {want}");
        }
    }

    #[test]
    fn test_output_is_lossy_webp() {
        let dir = tempfile::tempdir().unwrap();
        write_jpeg(&dir.path().join("photo.jpg"));

        normalize(dir.path(), false).unwrap();

        let bytes = fs::read(dir.path().join("photo.webp")).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
        // `VP8 ` is the lossy bitstream chunk; lossless would be `VP8L`.
        assert_eq!(&bytes[12..16], b"VP8 ");
    }

    #[test]
    fn test_flatten_keeps_rgb() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        assert_eq!(flatten(DynamicImage::ImageRgb8(img.clone())), img);

        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(2, 2, image::Luma([7])));
        assert_eq!(flatten(gray).get_pixel(1, 1), &Rgb([7, 7, 7]));
    }

    #[test]
    fn test_second_run_converts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_jpeg(&dir.path().join("photo.jpg"));

        assert!(normalize(dir.path(), false).unwrap().converted_any());
        assert_eq!(normalize(dir.path(), false).unwrap(), Normalization::default());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_jpeg(&dir.path().join("photo.jpg"));

        let outcome = normalize(dir.path(), true).unwrap();

        assert_eq!(
            outcome.converted,
            vec![Conversion {
                source: "photo.jpg".to_string(),
                target: "photo.webp".to_string(),
            }]
        );
        assert!(dir.path().join("photo.jpg").exists());
        assert!(!dir.path().join("photo.webp").exists());
    }

    #[test]
    fn test_dry_run_reports_broken_file_as_failed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.png"), b"not an image").unwrap();
        write_jpeg(&dir.path().join("photo.jpg"));

        let outcome = normalize(dir.path(), true).unwrap();

        assert_eq!(outcome.converted.len(), 1);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].source, "broken.png");
        assert!(!dir.path().join("photo.webp").exists());
    }

    #[test]
    fn test_broken_file_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.png"), b"not an image").unwrap();
        write_jpeg(&dir.path().join("photo.jpg"));

        let outcome = normalize(dir.path(), false).unwrap();

        assert_eq!(outcome.converted.len(), 1);
        assert_eq!(outcome.converted[0].source, "photo.jpg");
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].source, "broken.png");
        assert!(dir.path().join("broken.png").exists());
        assert!(!dir.path().join("broken.webp").exists());
    }

    #[test]
    fn test_ignores_non_legacy_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.qmd"), "---\n---\n").unwrap();
        fs::write(dir.path().join("og-post.webp"), b"x").unwrap();
        fs::write(dir.path().join("anim.gif"), b"x").unwrap();

        assert_eq!(normalize(dir.path(), false).unwrap(), Normalization::default());
    }
}

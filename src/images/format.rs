//! Closed set of image formats the normalizer recognizes.
//!
//! Formats are identified by tag rather than raw suffix comparisons, so a
//! `photo.JPEG` and a `photo.jpg` resolve to the same [`ImageFormatTag::Jpeg`].

use std::path::Path;

const PNG_EXTENSIONS: &[&str] = &["png"];
const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
const WEBP_EXTENSIONS: &[&str] = &["webp"];

/// A recognized image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormatTag {
    /// Legacy raster input.
    Png,
    /// Legacy raster input.
    Jpeg,
    /// Target format every legacy image is converted to.
    Webp,
}

impl ImageFormatTag {
    /// The format legacy images are converted to.
    pub const TARGET: ImageFormatTag = ImageFormatTag::Webp;

    /// All recognized formats.
    pub fn all() -> &'static [ImageFormatTag] {
        &[Self::Png, Self::Jpeg, Self::Webp]
    }

    /// Lowercase extensions mapped to this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Png => PNG_EXTENSIONS,
            Self::Jpeg => JPEG_EXTENSIONS,
            Self::Webp => WEBP_EXTENSIONS,
        }
    }

    /// Extension written for files of this format.
    pub fn extension(&self) -> &'static str {
        self.extensions()[0]
    }

    /// Whether files of this format get converted.
    pub fn is_legacy(&self) -> bool {
        *self != Self::TARGET
    }

    /// Resolve an extension, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugsync::images::ImageFormatTag;
    ///
    /// assert_eq!(ImageFormatTag::from_extension("JPEG"), Some(ImageFormatTag::Jpeg));
    /// assert_eq!(ImageFormatTag::from_extension("gif"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Resolve the format of a path from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The codec used to decode or encode this format.
    pub(crate) fn codec(&self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Webp => image::ImageFormat::WebP,
        }
    }
}

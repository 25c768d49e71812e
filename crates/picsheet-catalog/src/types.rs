//! Shared types for the picsheet image catalog.

use serde::{Deserialize, Serialize};

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a new pair of dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either side is zero.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Formats a spreadsheet can embed, as inferred from a file name suffix.
///
/// WebP and other formats the `image` crate could decode are deliberately
/// absent: the xlsx writer cannot embed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics (`.png`).
    Png,
    /// JPEG (`.jpg`, `.jpeg`).
    Jpeg,
    /// Graphics Interchange Format (`.gif`).
    Gif,
    /// Windows bitmap (`.bmp`).
    Bmp,
}

impl ImageFormat {
    /// All supported formats.
    pub const ALL: [Self; 4] = [Self::Png, Self::Jpeg, Self::Gif, Self::Bmp];

    /// Infer the format from the trailing suffix of a file name.
    ///
    /// Matching is case-insensitive. Returns `None` when the name has no
    /// suffix or the suffix is not an embeddable format.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Map a bare extension (without the dot) to a format.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// Canonical lowercase extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
        }
    }

    /// MIME type used when building browser Blobs for previews.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
        }
    }

    /// The matching `image` crate format, compared against the format
    /// sniffed from a file's bytes.
    #[must_use]
    pub const fn to_image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Gif => image::ImageFormat::Gif,
            Self::Bmp => image::ImageFormat::Bmp,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A revocable, display-only reference derived from an entry's bytes.
///
/// Handles are move-only: [`release`](Self::release) consumes the handle,
/// so a preview that has been released can no longer be rendered.
pub trait PreviewHandle {
    /// Invalidate the preview and free any resources behind it.
    fn release(self);
}

/// Preview handle for front ends that never render previews (the CLI,
/// tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoPreview;

impl PreviewHandle for NoPreview {
    fn release(self) {}
}

/// A file that has been read and probed but not yet given a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedImage {
    /// Original file name.
    pub name: String,
    /// Raw file bytes, exactly as selected.
    pub bytes: Vec<u8>,
    /// Natural pixel dimensions decoded from the image header.
    pub dimensions: Dimensions,
    /// Embedding format inferred from the name suffix.
    pub format: ImageFormat,
}

/// One user-selected image held in session memory.
///
/// The entry exclusively owns its bytes and its preview handle. The only
/// way to drop an entry out of a [`Session`](crate::Session) is through
/// removal, which releases the preview first.
#[derive(Debug)]
pub struct ImageEntry<P> {
    name: String,
    bytes: Vec<u8>,
    dimensions: Dimensions,
    format: ImageFormat,
    preview: P,
}

impl<P: PreviewHandle> ImageEntry<P> {
    /// Attach a preview handle to a probed image.
    #[must_use]
    pub fn new(probed: ProbedImage, preview: P) -> Self {
        Self {
            name: probed.name,
            bytes: probed.bytes,
            dimensions: probed.dimensions,
            format: probed.format,
            preview,
        }
    }

    /// Original file name, used as the display label and export row value.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Natural pixel dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Embedding format inferred from the file name.
    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// The live preview handle.
    #[must_use]
    pub const fn preview(&self) -> &P {
        &self.preview
    }

    /// Release the preview and drop the entry.
    pub(crate) fn release(self) {
        self.preview.release();
    }
}

/// Errors that can occur while ingesting a batch of files.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file contained no bytes.
    #[error("{name}: file is empty")]
    EmptyInput {
        /// File name.
        name: String,
    },

    /// The file name has no suffix, or one that cannot be embedded.
    #[error("{name}: unsupported image type (expected png, jpg, jpeg, gif or bmp)")]
    UnsupportedFormat {
        /// File name.
        name: String,
    },

    /// The bytes are a different format than the file name claims.
    #[error("{name}: contents are {found:?}, but the name says {expected}")]
    FormatMismatch {
        /// File name.
        name: String,
        /// Format inferred from the file name suffix.
        expected: ImageFormat,
        /// Format detected from the bytes.
        found: image::ImageFormat,
    },

    /// The image header could not be decoded.
    #[error("{name}: failed to decode image: {source}")]
    ImageDecode {
        /// File name.
        name: String,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// The image decoded to a zero width or height.
    #[error("{name}: image has zero width or height")]
    ZeroDimensions {
        /// File name.
        name: String,
    },

    /// Reading the file bytes failed.
    #[error("{name}: failed to read file: {reason}")]
    Read {
        /// File name.
        name: String,
        /// Error reported by the platform.
        reason: String,
    },

    /// Creating the preview reference failed.
    #[error("{name}: failed to create preview: {reason}")]
    Preview {
        /// File name.
        name: String,
        /// Error reported by the platform.
        reason: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn format_from_file_name_is_case_insensitive() {
        assert_eq!(ImageFormat::from_file_name("a.png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_file_name("B.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(
            ImageFormat::from_file_name("photo.final.Jpeg"),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_file_name("anim.gif"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::from_file_name("old.bmp"), Some(ImageFormat::Bmp));
    }

    #[test]
    fn format_rejects_unsupported_and_missing_suffix() {
        assert_eq!(ImageFormat::from_file_name("modern.webp"), None);
        assert_eq!(ImageFormat::from_file_name("README"), None);
        assert_eq!(ImageFormat::from_file_name("trailing."), None);
    }

    #[test]
    fn extension_round_trips_through_from_extension() {
        for format in ImageFormat::ALL {
            assert_eq!(ImageFormat::from_extension(format.extension()), Some(format));
        }
    }

    #[test]
    fn mime_types_are_image_types() {
        for format in ImageFormat::ALL {
            assert!(format.mime_type().starts_with("image/"));
        }
    }

    #[test]
    fn degenerate_dimensions() {
        assert!(Dimensions::new(0, 10).is_degenerate());
        assert!(Dimensions::new(10, 0).is_degenerate());
        assert!(!Dimensions::new(1, 1).is_degenerate());
    }

    #[test]
    fn format_serializes_lowercase() {
        let json = serde_json::to_string(&ImageFormat::Jpeg).unwrap();
        assert_eq!(json, "\"jpeg\"");
    }

    #[test]
    fn error_display_names_the_file() {
        let err = IngestError::UnsupportedFormat {
            name: "x.webp".to_owned(),
        };
        assert!(err.to_string().starts_with("x.webp: unsupported image type"));
    }

    #[test]
    fn mismatch_display_names_both_formats() {
        let err = IngestError::FormatMismatch {
            name: "c.png".to_owned(),
            expected: ImageFormat::Png,
            found: image::ImageFormat::Jpeg,
        };
        assert_eq!(err.to_string(), "c.png: contents are Jpeg, but the name says png");
    }

    #[test]
    fn image_formats_map_one_to_one() {
        let mapped = ImageFormat::ALL.map(ImageFormat::to_image_format);
        for (i, a) in mapped.iter().enumerate() {
            assert!(mapped[i + 1..].iter().all(|b| a != b));
        }
    }
}

//! Image header probing.
//!
//! Accepts a file name and its raw bytes and produces a [`ProbedImage`]
//! carrying the natural pixel dimensions and the embedding format. Only
//! the header is decoded; pixel data is never expanded.

use std::io::Cursor;

use image::ImageReader;

use crate::types::{Dimensions, ImageFormat, IngestError, ProbedImage};

/// Probe one selected file.
///
/// The embedding format comes from the file name suffix, and the bytes
/// must actually be that format. The dimensions come from the image
/// header.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedFormat`] if the suffix is missing or
/// not embeddable.
/// Returns [`IngestError::EmptyInput`] if `bytes` is empty.
/// Returns [`IngestError::FormatMismatch`] if the bytes are a recognised
/// format other than the one the suffix names.
/// Returns [`IngestError::ImageDecode`] if the header cannot be decoded.
/// Returns [`IngestError::ZeroDimensions`] if either side is zero.
pub fn probe(name: String, bytes: Vec<u8>) -> Result<ProbedImage, IngestError> {
    let Some(format) = ImageFormat::from_file_name(&name) else {
        return Err(IngestError::UnsupportedFormat { name });
    };
    if bytes.is_empty() {
        return Err(IngestError::EmptyInput { name });
    }

    let dimensions = match decode_dimensions(&bytes, format) {
        Ok(Header::Decoded(dimensions)) => dimensions,
        Ok(Header::Mismatch(found)) => {
            return Err(IngestError::FormatMismatch {
                name,
                expected: format,
                found,
            });
        }
        Err(source) => return Err(IngestError::ImageDecode { name, source }),
    };
    if dimensions.is_degenerate() {
        return Err(IngestError::ZeroDimensions { name });
    }

    tracing::debug!(
        name = %name,
        format = %format,
        width = dimensions.width,
        height = dimensions.height,
        "probed image"
    );

    Ok(ProbedImage {
        name,
        bytes,
        dimensions,
        format,
    })
}

/// Outcome of reading an image header.
enum Header {
    Decoded(Dimensions),
    /// The bytes sniffed as this format instead of the expected one.
    Mismatch(image::ImageFormat),
}

/// Decode only the header of an in-memory image expected to be `format`.
///
/// Bytes with no recognisable signature fall through to the decoder,
/// which reports them as unsupported.
fn decode_dimensions(bytes: &[u8], format: ImageFormat) -> Result<Header, image::ImageError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    if let Some(found) = reader.format()
        && found != format.to_image_format()
    {
        return Ok(Header::Mismatch(found));
    }
    let (width, height) = reader.into_dimensions()?;
    Ok(Header::Decoded(Dimensions::new(width, height)))
}

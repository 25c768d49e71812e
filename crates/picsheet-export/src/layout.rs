//! Row layout for the image workbook.
//!
//! Computes, before anything is written, where each entry lands: its
//! sheet row, sequence number, thumbnail size and row height. Layout is
//! pure arithmetic over entry dimensions and the [`ExportConfig`].

use picsheet_catalog::{Dimensions, ImageEntry, ImageFormat, PreviewHandle};

use crate::{ExportConfig, ExportError};

/// Largest number of rows a worksheet holds, header included.
pub const MAX_SHEET_ROWS: usize = 1_048_576;

/// A thumbnail size in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    /// Width in display pixels.
    pub width: f64,
    /// Height in display pixels.
    pub height: f64,
}

/// Uniform scale factor that fits `dimensions` inside the given bounds.
///
/// Images smaller than the bounds are scaled up.
#[must_use]
pub fn fit_scale(dimensions: Dimensions, max_width: f64, max_height: f64) -> f64 {
    let scale_x = max_width / f64::from(dimensions.width);
    let scale_y = max_height / f64::from(dimensions.height);
    scale_x.min(scale_y)
}

/// Scale `dimensions` to fit the bounds, preserving aspect ratio.
///
/// The result never exceeds either bound, even after floating-point
/// rounding of the scaled side that meets its bound.
#[must_use]
pub fn fit_within(dimensions: Dimensions, max_width: f64, max_height: f64) -> DisplaySize {
    let scale = fit_scale(dimensions, max_width, max_height);
    DisplaySize {
        width: (f64::from(dimensions.width) * scale).min(max_width),
        height: (f64::from(dimensions.height) * scale).min(max_height),
    }
}

/// Check that `count` data rows fit on one worksheet below the header.
///
/// # Errors
///
/// Returns [`ExportError::TooManyRows`] if they do not.
pub const fn check_row_count(count: usize) -> Result<(), ExportError> {
    if count >= MAX_SHEET_ROWS {
        return Err(ExportError::TooManyRows(count));
    }
    Ok(())
}

/// Everything needed to write one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPlan<'a> {
    /// Zero-based sheet row (the header occupies row 0).
    pub row: u32,
    /// One-based sequence number written in the first column.
    pub sequence: u32,
    /// File name written in the second column.
    pub name: &'a str,
    /// Raw image bytes to embed.
    pub bytes: &'a [u8],
    /// Embedding format inferred from the file name.
    pub format: ImageFormat,
    /// Scale applied to the natural dimensions.
    pub scale: f64,
    /// Thumbnail size in display pixels.
    pub display: DisplaySize,
    /// Row height in points.
    pub row_height: f64,
}

/// Lay out one row per entry, in session order.
///
/// # Errors
///
/// Returns [`ExportError::TooManyRows`] if the entries do not fit on one
/// worksheet below the header.
pub fn plan_rows<'a, P: PreviewHandle>(
    entries: &'a [ImageEntry<P>],
    config: &ExportConfig,
) -> Result<Vec<RowPlan<'a>>, ExportError> {
    check_row_count(entries.len())?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let sequence =
                u32::try_from(index + 1).map_err(|_| ExportError::TooManyRows(entries.len()))?;
            let dimensions = entry.dimensions();
            let display = fit_within(dimensions, config.max_cell_width, config.max_cell_height);
            Ok(RowPlan {
                row: sequence,
                sequence,
                name: entry.name(),
                bytes: entry.bytes(),
                format: entry.format(),
                scale: fit_scale(dimensions, config.max_cell_width, config.max_cell_height),
                display,
                row_height: display.height / config.px_per_point,
            })
        })
        .collect()
}

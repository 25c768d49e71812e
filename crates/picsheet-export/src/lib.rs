//! picsheet-export: Image workbook serialization (sans-IO).
//!
//! Lays out one row per session entry and drives a [`SheetBackend`] to
//! produce the workbook bytes. The xlsx binary format itself is produced
//! by `rust_xlsxwriter` through [`XlsxBackend`]; this crate only decides
//! what goes where.
//!
//! This is a pure function of the entries and the [`ExportConfig`] --
//! downloading or writing the bytes is the caller's job.

pub mod config;
pub mod layout;
pub mod sheet;
pub mod xlsx;

use picsheet_catalog::{ImageEntry, PreviewHandle};

pub use config::{ColumnSpec, ExportConfig};
pub use layout::{DisplaySize, MAX_SHEET_ROWS, RowPlan, check_row_count, fit_scale, fit_within, plan_rows};
pub use sheet::{Column, DataRow, EmbeddedImage, HeaderStyle, IMAGE_COLUMN, SheetBackend};
pub use xlsx::{XLSX_MIME_TYPE, XlsxBackend};

/// Errors that can occur while building a workbook.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// There is nothing to export.
    #[error("no images to export")]
    NoImages,

    /// The export configuration is invalid.
    #[error("invalid export configuration: {0}")]
    InvalidConfig(String),

    /// More entries than a worksheet can hold.
    #[error("{0} images do not fit on one worksheet")]
    TooManyRows(usize),

    /// The xlsx writer rejected an operation.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// A non-xlsx backend failed.
    #[error("spreadsheet backend error: {0}")]
    Backend(String),
}

/// Build the workbook for `entries` with the given backend.
///
/// Writes the header once, then each entry's row and thumbnail strictly
/// in order, then serializes. Any failure aborts the whole export and no
/// bytes are returned.
///
/// # Errors
///
/// Returns [`ExportError::NoImages`] if `entries` is empty.
/// Returns [`ExportError::InvalidConfig`] if `config` fails validation.
/// Returns the first error reported by the backend.
pub fn write_workbook<P, B>(
    entries: &[ImageEntry<P>],
    config: &ExportConfig,
    mut backend: B,
) -> Result<Vec<u8>, ExportError>
where
    P: PreviewHandle,
    B: SheetBackend,
{
    if entries.is_empty() {
        return Err(ExportError::NoImages);
    }
    config.validate()?;
    let plan = plan_rows(entries, config)?;

    let columns = config.columns().map(|c| Column {
        title: &c.title,
        width: c.width,
    });
    backend.begin_sheet(&config.sheet_name, &columns)?;
    backend.write_header(
        &columns,
        &HeaderStyle {
            font_size: config.header_font_size,
            font_color: config.header_font_color,
            fill_color: config.header_fill_color,
            height: config.header_height,
        },
    )?;

    for row in &plan {
        backend.write_row(&DataRow {
            row: row.row,
            sequence: row.sequence,
            name: row.name,
            font_size: config.body_font_size,
            height: row.row_height,
        })?;
        backend.embed_image(&EmbeddedImage {
            row: row.row,
            column: IMAGE_COLUMN,
            bytes: row.bytes,
            format: row.format,
            alt_text: row.name,
            width: row.display.width,
            height: row.display.height,
            offset_x: config.image_offset_x,
            offset_y: config.image_offset_y,
        })?;
    }

    let bytes = backend.finish()?;
    tracing::info!(rows = plan.len(), bytes = bytes.len(), "built workbook");
    Ok(bytes)
}

/// Build the xlsx workbook for `entries`.
///
/// # Errors
///
/// See [`write_workbook`].
pub fn to_xlsx<P: PreviewHandle>(
    entries: &[ImageEntry<P>],
    config: &ExportConfig,
) -> Result<Vec<u8>, ExportError> {
    write_workbook(entries, config, XlsxBackend::new())
}

//! The spreadsheet collaborator interface.
//!
//! The export pipeline never touches the xlsx format directly. It drives
//! a [`SheetBackend`] through a fixed sequence of calls: one
//! [`begin_sheet`](SheetBackend::begin_sheet), one
//! [`write_header`](SheetBackend::write_header), then for every entry a
//! [`write_row`](SheetBackend::write_row) followed by an
//! [`embed_image`](SheetBackend::embed_image), and finally
//! [`finish`](SheetBackend::finish).

use picsheet_catalog::ImageFormat;

use crate::ExportError;

/// Zero-based index of the thumbnail column.
pub const IMAGE_COLUMN: u16 = 2;

/// One column of the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    /// Header title.
    pub title: &'a str,
    /// Width in Excel character units.
    pub width: f64,
}

/// Cosmetic settings for the header row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    /// Font size in points; the header is always bold.
    pub font_size: f64,
    /// Text color, `0xRRGGBB`.
    pub font_color: u32,
    /// Solid fill color, `0xRRGGBB`.
    pub fill_color: u32,
    /// Row height in points.
    pub height: f64,
}

/// A data row: sequence number and file name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRow<'a> {
    /// Zero-based sheet row.
    pub row: u32,
    /// One-based sequence number, centered.
    pub sequence: u32,
    /// File name, word-wrapped.
    pub name: &'a str,
    /// Font size of both cells in points.
    pub font_size: f64,
    /// Row height in points.
    pub height: f64,
}

/// An image anchored inside a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedImage<'a> {
    /// Zero-based sheet row of the anchor cell.
    pub row: u32,
    /// Zero-based column of the anchor cell.
    pub column: u16,
    /// Raw encoded image bytes.
    pub bytes: &'a [u8],
    /// Format tag inferred from the file name.
    pub format: ImageFormat,
    /// Alternative text (the file name).
    pub alt_text: &'a str,
    /// Rendered width in display pixels.
    pub width: f64,
    /// Rendered height in display pixels.
    pub height: f64,
    /// Horizontal offset from the cell's top-left corner, in pixels.
    pub offset_x: u32,
    /// Vertical offset from the cell's top-left corner, in pixels.
    pub offset_y: u32,
}

/// Row, column, style, and image-embedding operations over one worksheet.
///
/// Implementations are driven sequentially and never concurrently.
pub trait SheetBackend {
    /// Name the worksheet and set its column widths.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the name or a width.
    fn begin_sheet(&mut self, name: &str, columns: &[Column<'_>]) -> Result<(), ExportError>;

    /// Write the styled header row (row 0).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects a cell or the row height.
    fn write_header(&mut self, columns: &[Column<'_>], style: &HeaderStyle)
    -> Result<(), ExportError>;

    /// Write one data row.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects a cell or the row height.
    fn write_row(&mut self, row: &DataRow<'_>) -> Result<(), ExportError>;

    /// Embed one image.
    ///
    /// # Errors
    ///
    /// Returns an error if the image data cannot be embedded.
    fn embed_image(&mut self, image: &EmbeddedImage<'_>) -> Result<(), ExportError>;

    /// Serialize the document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn finish(self) -> Result<Vec<u8>, ExportError>;
}

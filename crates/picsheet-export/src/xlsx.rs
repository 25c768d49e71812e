//! [`SheetBackend`] over `rust_xlsxwriter`.

use std::fmt;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern, Image, Workbook, Worksheet};

use crate::ExportError;
use crate::sheet::{Column, DataRow, EmbeddedImage, HeaderStyle, SheetBackend};

/// MIME type of the generated workbook.
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds a single-worksheet xlsx workbook in memory.
pub struct XlsxBackend {
    worksheet: Worksheet,
}

// `Worksheet` has no `Debug` impl.
impl fmt::Debug for XlsxBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XlsxBackend").finish_non_exhaustive()
    }
}

impl XlsxBackend {
    /// Start an empty worksheet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            worksheet: Worksheet::new(),
        }
    }
}

impl Default for XlsxBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetBackend for XlsxBackend {
    fn begin_sheet(&mut self, name: &str, columns: &[Column<'_>]) -> Result<(), ExportError> {
        self.worksheet.set_name(name)?;
        for (col, column) in (0u16..).zip(columns) {
            self.worksheet.set_column_width(col, column.width)?;
        }
        Ok(())
    }

    fn write_header(
        &mut self,
        columns: &[Column<'_>],
        style: &HeaderStyle,
    ) -> Result<(), ExportError> {
        let format = Format::new()
            .set_bold()
            .set_font_size(style.font_size)
            .set_font_color(Color::RGB(style.font_color))
            .set_background_color(Color::RGB(style.fill_color))
            .set_pattern(FormatPattern::Solid)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        for (col, column) in (0u16..).zip(columns) {
            self.worksheet
                .write_string_with_format(0, col, column.title, &format)?;
        }
        self.worksheet.set_row_height(0, style.height)?;
        Ok(())
    }

    fn write_row(&mut self, row: &DataRow<'_>) -> Result<(), ExportError> {
        let sequence_format = Format::new()
            .set_font_size(row.font_size)
            .set_align(FormatAlign::Center);
        let name_format = Format::new().set_font_size(row.font_size).set_text_wrap();

        self.worksheet
            .write_number_with_format(row.row, 0, row.sequence, &sequence_format)?;
        self.worksheet
            .write_string_with_format(row.row, 1, row.name, &name_format)?;
        self.worksheet.set_row_height(row.row, row.height)?;
        Ok(())
    }

    fn embed_image(&mut self, image: &EmbeddedImage<'_>) -> Result<(), ExportError> {
        tracing::debug!(
            row = image.row,
            format = %image.format,
            width = image.width,
            height = image.height,
            "embedding image"
        );
        let picture = Image::new_from_buffer(image.bytes)?
            .set_scale_to_size(image.width, image.height, true)
            .set_alt_text(image.alt_text);
        self.worksheet.insert_image_with_offset(
            image.row,
            image.column,
            &picture,
            image.offset_x,
            image.offset_y,
        )?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        workbook.push_worksheet(self.worksheet);
        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn debug_names_the_backend_without_the_worksheet() {
        let backend = XlsxBackend::new();
        assert_eq!(format!("{backend:?}"), "XlsxBackend { .. }");
    }

    #[test]
    fn empty_backend_still_serializes() {
        let bytes = XlsxBackend::default().finish().unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }
}

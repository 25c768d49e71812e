//! Export configuration.
//!
//! Every constant that shapes the generated workbook lives here so the
//! web app, the CLI, and tests all agree on one set of defaults.

use serde::{Deserialize, Serialize};

use crate::ExportError;

/// Characters Excel refuses in worksheet names.
const ILLEGAL_SHEET_NAME_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Longest worksheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// A column's header title and width in character units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header title.
    pub title: String,
    /// Column width in Excel character units.
    pub width: f64,
}

impl ColumnSpec {
    fn new(title: &str, width: f64) -> Self {
        Self {
            title: title.to_owned(),
            width,
        }
    }
}

/// Configuration for building the image workbook.
///
/// Colors are `0xRRGGBB` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Name of the downloaded or written file.
    pub file_name: String,

    /// Worksheet name.
    pub sheet_name: String,

    /// Largest thumbnail width, in display pixels.
    pub max_cell_width: f64,

    /// Largest thumbnail height, in display pixels.
    pub max_cell_height: f64,

    /// Display pixels per point, used to convert a thumbnail height into
    /// a row height.
    pub px_per_point: f64,

    /// Horizontal offset of each thumbnail inside its cell, in pixels.
    pub image_offset_x: u32,

    /// Vertical offset of each thumbnail inside its cell, in pixels.
    pub image_offset_y: u32,

    /// Header row height in points.
    pub header_height: f64,

    /// Header font size in points.
    pub header_font_size: f64,

    /// Header text color.
    pub header_font_color: u32,

    /// Header solid fill color.
    pub header_fill_color: u32,

    /// Font size of data cells in points.
    pub body_font_size: f64,

    /// Sequence number column.
    pub sequence_column: ColumnSpec,

    /// File name column (word-wrapped).
    pub name_column: ColumnSpec,

    /// Thumbnail column.
    pub preview_column: ColumnSpec,
}

impl ExportConfig {
    /// Default output file name.
    pub const DEFAULT_FILE_NAME: &'static str = "image_list.xlsx";
    /// Default worksheet name.
    pub const DEFAULT_SHEET_NAME: &'static str = "Images";
    /// Default maximum thumbnail width.
    pub const DEFAULT_MAX_CELL_WIDTH: f64 = 180.0;
    /// Default maximum thumbnail height.
    pub const DEFAULT_MAX_CELL_HEIGHT: f64 = 150.0;
    /// Default pixel-to-point conversion factor.
    pub const DEFAULT_PX_PER_POINT: f64 = 1.33;
    /// Default thumbnail offset on both axes.
    pub const DEFAULT_IMAGE_OFFSET: u32 = 5;
    /// Default header row height.
    pub const DEFAULT_HEADER_HEIGHT: f64 = 25.0;
    /// Default header font size.
    pub const DEFAULT_HEADER_FONT_SIZE: f64 = 14.0;
    /// Default header text color (white).
    pub const DEFAULT_HEADER_FONT_COLOR: u32 = 0xFF_FF_FF;
    /// Default header fill color (material green).
    pub const DEFAULT_HEADER_FILL_COLOR: u32 = 0x4C_AF_50;
    /// Default data cell font size.
    pub const DEFAULT_BODY_FONT_SIZE: f64 = 12.0;

    /// Check that every field describes a workbook Excel will open.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidConfig`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ExportError> {
        let positive = [
            ("max_cell_width", self.max_cell_width),
            ("max_cell_height", self.max_cell_height),
            ("px_per_point", self.px_per_point),
            ("header_height", self.header_height),
            ("header_font_size", self.header_font_size),
            ("body_font_size", self.body_font_size),
            ("sequence_column.width", self.sequence_column.width),
            ("name_column.width", self.name_column.width),
            ("preview_column.width", self.preview_column.width),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ExportError::InvalidConfig(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }

        for (field, color) in [
            ("header_font_color", self.header_font_color),
            ("header_fill_color", self.header_fill_color),
        ] {
            if color > 0xFF_FF_FF {
                return Err(ExportError::InvalidConfig(format!(
                    "{field} must be a 0xRRGGBB value, got {color:#x}"
                )));
            }
        }

        if self.file_name.trim().is_empty() {
            return Err(ExportError::InvalidConfig("file_name is empty".into()));
        }

        let name = &self.sheet_name;
        if name.is_empty() || name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(ExportError::InvalidConfig(format!(
                "sheet_name must be 1 to {MAX_SHEET_NAME_LEN} characters, got {name:?}"
            )));
        }
        if let Some(c) = name.chars().find(|c| ILLEGAL_SHEET_NAME_CHARS.contains(c)) {
            return Err(ExportError::InvalidConfig(format!(
                "sheet_name contains illegal character {c:?}"
            )));
        }

        Ok(())
    }

    /// The three columns in sheet order.
    #[must_use]
    pub fn columns(&self) -> [&ColumnSpec; 3] {
        [&self.sequence_column, &self.name_column, &self.preview_column]
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: Self::DEFAULT_FILE_NAME.to_owned(),
            sheet_name: Self::DEFAULT_SHEET_NAME.to_owned(),
            max_cell_width: Self::DEFAULT_MAX_CELL_WIDTH,
            max_cell_height: Self::DEFAULT_MAX_CELL_HEIGHT,
            px_per_point: Self::DEFAULT_PX_PER_POINT,
            image_offset_x: Self::DEFAULT_IMAGE_OFFSET,
            image_offset_y: Self::DEFAULT_IMAGE_OFFSET,
            header_height: Self::DEFAULT_HEADER_HEIGHT,
            header_font_size: Self::DEFAULT_HEADER_FONT_SIZE,
            header_font_color: Self::DEFAULT_HEADER_FONT_COLOR,
            header_fill_color: Self::DEFAULT_HEADER_FILL_COLOR,
            body_font_size: Self::DEFAULT_BODY_FONT_SIZE,
            sequence_column: ColumnSpec::new("S.No", 8.0),
            name_column: ColumnSpec::new("Image Name", 40.0),
            preview_column: ColumnSpec::new("Preview", 30.0),
        }
    }
}

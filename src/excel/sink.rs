//! Cell styles and the sheet-writing capability used by the renderer

use std::collections::HashMap;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Worksheet};
use tracing::warn;

use crate::error::{JoblistError, JoblistResult};

pub const HEADER_BACKGROUND: u32 = 0xD7E4BC;
pub const GREY_BACKGROUND: u32 = 0xF0F0F0;
pub const WHITE_BACKGROUND: u32 = 0xFFFFFF;

/// Longest text Excel accepts in one cell, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

//==============================================================================
// Cell Styles
//==============================================================================

/// Border weight applied to all four sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderWeight {
    /// Weight 1
    Thin,
    /// Weight 2
    Medium,
}

/// Row banding for data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Grey,
    White,
}

impl Band {
    /// Band for a physical sheet row: even rows grey, odd rows white
    pub fn for_row(row: u32) -> Band {
        if row % 2 == 0 {
            Band::Grey
        } else {
            Band::White
        }
    }

    pub fn background(self) -> u32 {
        match self {
            Band::Grey => GREY_BACKGROUND,
            Band::White => WHITE_BACKGROUND,
        }
    }
}

/// Writer-independent cell style. Every cell is top-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub bold: bool,
    pub text_wrap: bool,
    /// RGB background color
    pub background: u32,
    pub border: BorderWeight,
}

impl CellStyle {
    /// Header row style
    pub fn header() -> Self {
        Self {
            bold: true,
            text_wrap: false,
            background: HEADER_BACKGROUND,
            border: BorderWeight::Medium,
        }
    }

    /// Data row style for the given band
    pub fn band(band: Band) -> Self {
        Self {
            bold: false,
            text_wrap: false,
            background: band.background(),
            border: BorderWeight::Thin,
        }
    }

    pub fn to_format(&self) -> Format {
        let mut format = Format::new()
            .set_align(FormatAlign::Top)
            .set_background_color(Color::RGB(self.background))
            .set_border(match self.border {
                BorderWeight::Thin => FormatBorder::Thin,
                BorderWeight::Medium => FormatBorder::Medium,
            });
        if self.bold {
            format = format.set_bold();
        }
        if self.text_wrap {
            format = format.set_text_wrap();
        }
        format
    }
}

//==============================================================================
// Sheet Sink
//==============================================================================

/// Operations the renderer needs from a spreadsheet writer
pub trait SheetSink {
    /// Set the width of one column, in character units
    fn set_column_width(&mut self, col: u16, width: f64) -> JoblistResult<()>;

    /// Write a header cell (row 0)
    fn write_header_cell(&mut self, col: u16, text: &str, style: &CellStyle) -> JoblistResult<()>;

    /// Write a data cell as text
    fn write_data_cell(
        &mut self,
        row: u32,
        col: u16,
        text: &str,
        style: &CellStyle,
    ) -> JoblistResult<()>;
}

/// [`SheetSink`] over a `rust_xlsxwriter` worksheet
pub struct XlsxSink<'a> {
    worksheet: &'a mut Worksheet,
    formats: HashMap<CellStyle, Format>,
}

impl<'a> XlsxSink<'a> {
    pub fn new(worksheet: &'a mut Worksheet) -> Self {
        Self {
            worksheet,
            formats: HashMap::new(),
        }
    }

    fn write_text(&mut self, row: u32, col: u16, text: &str, style: &CellStyle) -> JoblistResult<()> {
        let fitted = truncate_cell_text(text);
        if fitted.len() < text.len() {
            warn!(
                row,
                col,
                chars = text.chars().count(),
                "cell text exceeds {} characters, truncating",
                MAX_CELL_CHARS
            );
        }

        let format = self
            .formats
            .entry(*style)
            .or_insert_with(|| style.to_format());
        self.worksheet
            .write_string_with_format(row, col, fitted, format)
            .map_err(|e| {
                JoblistError::Export(format!("Failed to write cell ({}, {}): {}", row, col, e))
            })?;
        Ok(())
    }
}

impl SheetSink for XlsxSink<'_> {
    fn set_column_width(&mut self, col: u16, width: f64) -> JoblistResult<()> {
        self.worksheet
            .set_column_width(col, width)
            .map_err(|e| JoblistError::Export(format!("Failed to set column width: {}", e)))?;
        Ok(())
    }

    fn write_header_cell(&mut self, col: u16, text: &str, style: &CellStyle) -> JoblistResult<()> {
        self.write_text(0, col, text, style)
    }

    fn write_data_cell(
        &mut self,
        row: u32,
        col: u16,
        text: &str,
        style: &CellStyle,
    ) -> JoblistResult<()> {
        self.write_text(row, col, text, style)
    }
}

/// Longest prefix of `text` that fits in one cell, cut on a char boundary
pub fn truncate_cell_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

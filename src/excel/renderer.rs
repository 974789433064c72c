//! Spreadsheet renderer: job table → styled single-sheet workbook

use std::io::Cursor;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use super::sink::{Band, CellStyle, SheetSink, XlsxSink};
use crate::error::{JoblistError, JoblistResult};
use crate::types::ExtractedTable;

/// Name of the only worksheet
pub const SHEET_NAME: &str = "Sheet1";
/// Suggested download name for the rendered workbook
pub const DOWNLOAD_FILE_NAME: &str = "processed_data.xlsx";
/// Media type of the rendered workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Padding added to the header length to get a column width
const COLUMN_WIDTH_PADDING: usize = 2;

/// Width of a column, derived from its header text only
pub fn column_width(header: &str) -> f64 {
    (header.chars().count() + COLUMN_WIDTH_PADDING) as f64
}

/// Renders an [`ExtractedTable`] into an `.xlsx` workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetRenderer;

impl SpreadsheetRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the table into an in-memory workbook
    pub fn render(&self, table: &ExtractedTable) -> JoblistResult<RenderedWorkbook> {
        let mut workbook = Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(SHEET_NAME)
                .map_err(|e| JoblistError::Export(format!("Failed to set worksheet name: {}", e)))?;
            self.render_into(table, &mut XlsxSink::new(worksheet))?;
        }

        let bytes = workbook
            .save_to_buffer()
            .map_err(|e| JoblistError::Export(format!("Failed to serialize workbook: {}", e)))?;
        debug!(rows = table.len(), bytes = bytes.len(), "rendered workbook");

        Ok(RenderedWorkbook::new(bytes))
    }

    /// Write widths, header and banded data rows into any sink
    pub fn render_into<S: SheetSink + ?Sized>(
        &self,
        table: &ExtractedTable,
        sink: &mut S,
    ) -> JoblistResult<()> {
        let header_style = CellStyle::header();

        for (col_idx, header) in table.columns().iter().enumerate() {
            sink.set_column_width(col_idx as u16, column_width(header))?;
        }
        for (col_idx, header) in table.columns().iter().enumerate() {
            sink.write_header_cell(col_idx as u16, header, &header_style)?;
        }

        // Data starts right under the header; banding follows the sheet row
        for (row_idx, row) in table.rows().iter().enumerate() {
            let sheet_row = (row_idx + 1) as u32;
            let style = CellStyle::band(Band::for_row(sheet_row));
            for (col_idx, value) in row.values().iter().enumerate() {
                sink.write_data_cell(sheet_row, col_idx as u16, value, &style)?;
            }
        }

        Ok(())
    }
}

/// Render with a default renderer
pub fn render(table: &ExtractedTable) -> JoblistResult<RenderedWorkbook> {
    SpreadsheetRenderer::new().render(table)
}

//==============================================================================
// Rendered Workbook
//==============================================================================

/// Finished `.xlsx` bytes, handed over to whoever delivers the download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWorkbook {
    bytes: Vec<u8>,
}

impl RenderedWorkbook {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn file_name(&self) -> &'static str {
        DOWNLOAD_FILE_NAME
    }

    pub fn content_type(&self) -> &'static str {
        XLSX_CONTENT_TYPE
    }

    /// Seekable reader positioned at the start of the workbook
    pub fn into_cursor(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes)
    }

    /// Write the workbook to disk
    pub fn save(&self, path: &Path) -> JoblistResult<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

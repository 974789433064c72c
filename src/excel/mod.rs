//! Excel rendering for processed job tables
//!
//! - `sink`     : cell styles and the [`SheetSink`] writing capability
//! - `renderer` : table → single-sheet `.xlsx` workbook

mod renderer;
mod sink;

pub use renderer::{
    column_width, render, RenderedWorkbook, SpreadsheetRenderer, DOWNLOAD_FILE_NAME, SHEET_NAME,
    XLSX_CONTENT_TYPE,
};
pub use sink::{
    truncate_cell_text, Band, BorderWeight, CellStyle, SheetSink, XlsxSink, GREY_BACKGROUND,
    HEADER_BACKGROUND, MAX_CELL_CHARS, WHITE_BACKGROUND,
};

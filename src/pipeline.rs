//! Upload processing: one raw export in, one rendered workbook out
//!
//! This is the only entry point the CLI and HTTP shells use. Nothing is kept
//! between calls.

use tracing::info;

use crate::error::JoblistResult;
use crate::excel::{RenderedWorkbook, SpreadsheetRenderer};
use crate::extract::{ExtractOptions, Extraction, TableExtractor};
use crate::types::{ExtractReport, ExtractedTable, JobRow};

/// Rows shown in a preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Result of processing one upload
#[derive(Debug, Clone)]
pub struct ProcessedUpload {
    pub table: ExtractedTable,
    pub report: ExtractReport,
    pub workbook: RenderedWorkbook,
}

impl ProcessedUpload {
    /// First `n` rows of the processed table
    pub fn preview(&self, n: usize) -> &[JobRow] {
        self.table.head(n)
    }
}

/// Extract and render with the default options
pub fn process_upload(raw: &[u8]) -> JoblistResult<ProcessedUpload> {
    process_upload_with_options(raw, ExtractOptions::default())
}

/// Extract and render. Extraction errors stop the pipeline before rendering.
pub fn process_upload_with_options(
    raw: &[u8],
    options: ExtractOptions,
) -> JoblistResult<ProcessedUpload> {
    let Extraction { table, report } = TableExtractor::new(options).extract_with_report(raw)?;
    let workbook = SpreadsheetRenderer::new().render(&table)?;
    info!(
        rows = table.len(),
        bytes = workbook.len(),
        "processed job listing upload"
    );

    Ok(ProcessedUpload {
        table,
        report,
        workbook,
    })
}

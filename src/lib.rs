//! joblist-export - collision-repair job listing processor
//!
//! Takes the `job_list` CSV export of the body-shop management system, keeps
//! the genuine job rows, reduces them to the 13 columns the workshop needs,
//! sorts them by key tag and due-on-site time, and renders the result as a
//! styled single-sheet Excel workbook.
//!
//! # Example
//!
//! ```no_run
//! use joblist_export::pipeline::process_upload;
//!
//! let raw = std::fs::read("job_list.csv")?;
//! let processed = process_upload(&raw)?;
//!
//! println!("Jobs: {}", processed.table.len());
//! processed.workbook.save(std::path::Path::new("processed_data.xlsx"))?;
//! # Ok::<(), joblist_export::error::JoblistError>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod excel;
pub mod extract;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use error::{JoblistError, JoblistResult, MalformedInputError};
pub use excel::{RenderedWorkbook, SpreadsheetRenderer};
pub use extract::{ExtractOptions, TableExtractor};
pub use pipeline::{process_upload, ProcessedUpload};
pub use types::{ExtractReport, ExtractedTable, JobRow, OUTPUT_COLUMNS};

//! Job listing extraction: raw CSV export → filtered, sorted job table
//!
//! The export starts with a short preamble (report title and date range),
//! followed by a header row and the job rows. Summary and stray rows are mixed
//! in with the real jobs; a genuine job row always has a Job Number, a Key Tag
//! and a first column starting with a letter followed by a digit.

mod options;

pub use options::{ExtractOptions, DEFAULT_MISSING_MARKERS};

use std::collections::HashMap;
use std::sync::OnceLock;

use csv::StringRecord;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{JoblistResult, MalformedInputError};
use crate::types::{
    ExtractReport, ExtractedTable, JobRow, JOB_NUMBER, KEY_TAG, MISSING_SENTINEL,
    OUTPUT_COLUMNS, OUTPUT_COLUMN_COUNT,
};

/// Table plus the counters collected while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub table: ExtractedTable,
    pub report: ExtractReport,
}

/// Extracts the job table from a raw job listing export
#[derive(Debug, Clone, Default)]
pub struct TableExtractor {
    options: ExtractOptions,
}

impl TableExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the job table, discarding the report
    pub fn extract(&self, raw: &[u8]) -> JoblistResult<ExtractedTable> {
        self.extract_with_report(raw).map(|extraction| extraction.table)
    }

    /// Extract the job table together with per-filter counters
    pub fn extract_with_report(&self, raw: &[u8]) -> JoblistResult<Extraction> {
        let opts = &self.options;
        let body = skip_lines(raw, opts.preamble_lines);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(opts.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(body);
        let mut records = reader.records();

        // Header: first non-blank record after the preamble
        let header = loop {
            match records.next() {
                Some(record) => {
                    let record = record?;
                    if !is_blank(&record) {
                        break record;
                    }
                }
                None => {
                    return Err(MalformedInputError::EmptyInput {
                        preamble_lines: opts.preamble_lines,
                    }
                    .into())
                }
            }
        };

        let layout = HeaderLayout::resolve(&header, opts.column_limit)?;
        debug!(
            columns = header.len(),
            column_limit = opts.column_limit,
            "resolved job listing header"
        );

        let mut report = ExtractReport::default();
        let mut rows = Vec::new();

        for record in records {
            if report.rows_read >= opts.row_limit {
                break;
            }
            let record = record?;
            if is_blank(&record) {
                continue;
            }
            report.rows_read += 1;

            let cell = |idx: usize| -> Option<&str> {
                record
                    .get(idx)
                    .filter(|value| !opts.is_missing(value))
            };

            if cell(layout.job_number).is_none() {
                report.dropped_missing_job_number += 1;
                continue;
            }
            if !cell(0).is_some_and(is_job_row_marker) {
                report.dropped_not_job_row += 1;
                continue;
            }
            if cell(layout.key_tag).is_none() {
                report.dropped_missing_key_tag += 1;
                continue;
            }

            let values: [String; OUTPUT_COLUMN_COUNT] = std::array::from_fn(|i| {
                cell(layout.output[i])
                    .unwrap_or(MISSING_SENTINEL)
                    .to_string()
            });
            rows.push(JobRow::new(values));
        }

        // Vec::sort_by is stable: rows with equal keys keep file order
        rows.sort_by(|a, b| {
            a.key_tag()
                .cmp(b.key_tag())
                .then_with(|| a.due_on_site().cmp(b.due_on_site()))
        });

        report.rows_kept = rows.len();
        info!("{}", report);
        if rows.is_empty() {
            warn!(
                rows_read = report.rows_read,
                "every row was filtered out; rendering a header-only sheet"
            );
        }

        Ok(Extraction {
            table: ExtractedTable::from_rows(rows),
            report,
        })
    }
}

/// Extract with the default options
pub fn extract(raw: &[u8]) -> JoblistResult<ExtractedTable> {
    TableExtractor::default().extract(raw)
}

//==============================================================================
// Header Resolution
//==============================================================================

/// Positions of the named columns inside the capped header
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderLayout {
    job_number: usize,
    key_tag: usize,
    output: [usize; OUTPUT_COLUMN_COUNT],
}

impl HeaderLayout {
    fn resolve(header: &StringRecord, column_limit: usize) -> Result<Self, MalformedInputError> {
        if header.len() < column_limit {
            return Err(MalformedInputError::TooFewColumns {
                found: header.len(),
                required: column_limit,
            });
        }

        // First occurrence wins on duplicated names
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (idx, name) in header.iter().take(column_limit).enumerate() {
            positions.entry(name).or_insert(idx);
        }

        let missing: Vec<String> = OUTPUT_COLUMNS
            .iter()
            .filter(|name| !positions.contains_key(*name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(MalformedInputError::MissingColumns(missing));
        }

        let output = OUTPUT_COLUMNS.map(|name| positions[name]);
        Ok(Self {
            job_number: positions[JOB_NUMBER],
            key_tag: positions[KEY_TAG],
            output,
        })
    }
}

//==============================================================================
// Helpers
//==============================================================================

/// Slice of `raw` after the first `n` physical lines
fn skip_lines(raw: &[u8], n: usize) -> &[u8] {
    let mut rest = raw;
    for _ in 0..n {
        match rest.iter().position(|b| *b == b'\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return &[],
        }
    }
    rest
}

/// Empty or whitespace-only line. A line of empty fields (`,,,`) is a row.
fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.get(0).map_or(true, |field| field.trim().is_empty())
}

/// A job row's first column starts with a letter then a digit, e.g. "A1234"
pub fn is_job_row_marker(value: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z][0-9]").expect("valid job row pattern"))
        .is_match(value)
}

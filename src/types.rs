use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

//==============================================================================
// Column Layout
//==============================================================================

pub const JOB_NUMBER: &str = "Job Number";
pub const KEY_TAG: &str = "Key Tag";
pub const DUE_ON_SITE: &str = "Due On Site Date/Time";

/// Number of columns kept in the processed table
pub const OUTPUT_COLUMN_COUNT: usize = 13;

/// Output columns, in the order they appear in the processed table and workbook
pub const OUTPUT_COLUMNS: [&str; OUTPUT_COLUMN_COUNT] = [
    JOB_NUMBER,
    "Location",
    DUE_ON_SITE,
    "Customer Name",
    "Vehicle Registration",
    KEY_TAG,
    "Driveable",
    "Insurer",
    "Insured's Post Code",
    "Vehicle Manufacturer",
    "Vehicle Model",
    "Entered Date/Time",
    "Last Customer Contact Date/Time",
];

/// Text written in place of a missing cell
pub const MISSING_SENTINEL: &str = "N/A";

const JOB_NUMBER_IDX: usize = 0;
const DUE_ON_SITE_IDX: usize = 2;
const KEY_TAG_IDX: usize = 5;

/// Position of `name` among [`OUTPUT_COLUMNS`]
pub fn output_column_index(name: &str) -> Option<usize> {
    OUTPUT_COLUMNS.iter().position(|col| *col == name)
}

//==============================================================================
// Job Rows
//==============================================================================

/// One retained job record, projected onto [`OUTPUT_COLUMNS`].
///
/// Values are stored in column order. Missing cells already hold
/// [`MISSING_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    values: [String; OUTPUT_COLUMN_COUNT],
}

impl JobRow {
    pub fn new(values: [String; OUTPUT_COLUMN_COUNT]) -> Self {
        Self { values }
    }

    /// Look up a value by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        output_column_index(column).map(|idx| self.values[idx].as_str())
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn job_number(&self) -> &str {
        &self.values[JOB_NUMBER_IDX]
    }

    pub fn key_tag(&self) -> &str {
        &self.values[KEY_TAG_IDX]
    }

    pub fn due_on_site(&self) -> &str {
        &self.values[DUE_ON_SITE_IDX]
    }

    /// `(column, value)` pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        OUTPUT_COLUMNS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}

impl Serialize for JobRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(OUTPUT_COLUMN_COUNT))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

//==============================================================================
// Extracted Table
//==============================================================================

/// Filtered, projected and sorted job table.
///
/// Built once per upload and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTable {
    rows: Vec<JobRow>,
}

impl ExtractedTable {
    /// Wrap rows that are already in final order
    pub fn from_rows(rows: Vec<JobRow>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &OUTPUT_COLUMNS
    }

    pub fn rows(&self) -> &[JobRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[JobRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// All values of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = output_column_index(name)?;
        Some(self.rows.iter().map(|row| row.values[idx].as_str()).collect())
    }
}

//==============================================================================
// Extraction Report
//==============================================================================

/// Counters collected during one extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ExtractReport {
    /// Data rows read after the header (blank lines excluded)
    pub rows_read: usize,
    /// Rows dropped for a missing Job Number
    pub dropped_missing_job_number: usize,
    /// Rows dropped because the first column is not letter+digit
    pub dropped_not_job_row: usize,
    /// Rows dropped for a missing Key Tag
    pub dropped_missing_key_tag: usize,
    /// Rows in the final table
    pub rows_kept: usize,
}

impl ExtractReport {
    pub fn rows_dropped(&self) -> usize {
        self.dropped_missing_job_number + self.dropped_not_job_row + self.dropped_missing_key_tag
    }

    /// Human-readable one-line summary
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} read={} kept={} dropped={} (no_job_number={} not_job_row={} no_key_tag={})",
            self.rows_read,
            self.rows_kept,
            self.rows_dropped(),
            self.dropped_missing_job_number,
            self.dropped_not_job_row,
            self.dropped_missing_key_tag
        )
    }
}

impl fmt::Display for ExtractReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[EXTRACT]"))
    }
}

//! Extraction settings

/// Cell texts read as "no value" by default. Same list as the pandas CSV
/// reader, so exports that were cleaned up by hand keep behaving the same.
pub const DEFAULT_MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Shape limits and parsing settings for a job listing export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Lines before the header row that are skipped
    pub preamble_lines: usize,
    /// Only the first `column_limit` header columns are considered; the header
    /// must have at least this many
    pub column_limit: usize,
    /// Maximum number of data rows read after the header
    pub row_limit: usize,
    /// Field delimiter
    pub delimiter: u8,
    /// Cell texts treated as missing
    pub missing_markers: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            preamble_lines: 2,
            column_limit: 69,
            row_limit: 6000,
            delimiter: b',',
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl ExtractOptions {
    /// Set the number of preamble lines
    #[must_use]
    pub fn with_preamble_lines(mut self, preamble_lines: usize) -> Self {
        self.preamble_lines = preamble_lines;
        self
    }

    /// Set the data row limit
    #[must_use]
    pub fn with_row_limit(mut self, row_limit: usize) -> Self {
        self.row_limit = row_limit;
        self
    }

    /// Set the minimum/considered column count
    #[must_use]
    pub fn with_column_limit(mut self, column_limit: usize) -> Self {
        self.column_limit = column_limit;
        self
    }

    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat only empty cells as missing
    #[must_use]
    pub fn empty_only(mut self) -> Self {
        self.missing_markers = vec![String::new()];
        self
    }

    pub fn is_missing(&self, value: &str) -> bool {
        value.is_empty() || self.missing_markers.iter().any(|m| m == value)
    }
}

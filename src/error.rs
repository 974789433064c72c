use thiserror::Error;

pub type JoblistResult<T> = Result<T, JoblistError>;

/// Input that cannot be turned into a job table. Never partially processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("no header row found after {preamble_lines} preamble lines")]
    EmptyInput { preamble_lines: usize },

    #[error("header has {found} columns, at least {required} are required")]
    TooFewColumns { found: usize, required: usize },

    #[error("required columns missing from header: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

#[derive(Error, Debug)]
pub enum JoblistError {
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInputError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Upload error: {0}")]
    Upload(String),
}

impl JoblistError {
    /// True for errors caused by the content of the uploaded file.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, JoblistError::MalformedInput(_) | JoblistError::Csv(_))
    }
}

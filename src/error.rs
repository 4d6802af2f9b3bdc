use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("invalid regex '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("invalid src '{0}', not an existing regular file")]
    InvalidSource(PathBuf),

    #[error("destination '{0}' is neither a file, a directory, nor creatable")]
    InvalidDestination(PathBuf),

    #[error("regex does not match '{line}' ({path})")]
    Match { path: PathBuf, line: String },

    #[error("insufficient header length, expected {expected}, got {got}")]
    HeaderMismatch { expected: usize, got: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RunError {
    /// Kind name used in the single-line `"<Kind> - <message>"` report.
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::InvalidPattern { .. } => "InvalidPatternError",
            RunError::InvalidSource(_) => "InvalidSourceError",
            RunError::InvalidDestination(_) => "InvalidDestinationError",
            RunError::Match { .. } => "MatchError",
            RunError::HeaderMismatch { .. } => "HeaderMismatchError",
            RunError::Io(_) => "IoError",
            RunError::Csv(_) => "CsvError",
            RunError::Json(_) => "JsonError",
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a run without producing a report.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Source directory not found: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("Failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown report format '{0}' (expected text or json)")]
    UnknownFormat(String),

    #[error("Unknown language '{0}' (expected c or cpp)")]
    UnknownLanguage(String),
}

impl AnalyzeError {
    /// Process exit status used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzeError::MissingInputDir(_) => 2,
            _ => 1,
        }
    }
}

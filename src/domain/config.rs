// Run configuration for cdeps.

use crate::common::error::AnalyzeError;
use crate::domain::language::Language;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "./cspice/cspice/src/cspice";
pub const DEFAULT_OUTPUT: &str = "./analysis/function_dependencies.txt";
pub const DEFAULT_TITLE: &str = "CSPICE Function Dependency Analysis";
pub const DEFAULT_TOP: usize = 20;

/// Report serialization chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Result<ReportFormat, AnalyzeError> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(AnalyzeError::UnknownFormat(s.to_string())),
        }
    }
}

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input_dir: PathBuf,
    pub language: Language,
    /// Rows in the "most called" section.
    pub top_n: usize,
    pub title: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            language: Language::default(),
            top_n: DEFAULT_TOP,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }
}

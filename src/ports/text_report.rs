//! Plain-text Report Exporter
//!
//! Writes the header, the most-called ranking and the per-file listing.

use crate::common::error::AnalyzeError;
use crate::domain::analysis::DependencyAnalysis;
use crate::domain::config::{DEFAULT_TITLE, DEFAULT_TOP};
use crate::ports::OutputExporter;

pub struct TextReportExporter {
    pub title: String,
    pub top_n: usize,
}

impl Default for TextReportExporter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_TOP)
    }
}

impl TextReportExporter {
    pub fn new(title: impl Into<String>, top_n: usize) -> Self {
        Self {
            title: title.into(),
            top_n,
        }
    }

    /// Convert an analysis to the report text.
    pub fn to_text(&self, analysis: &DependencyAnalysis) -> String {
        let mut out = String::new();

        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push_str("\n\n");

        out.push_str("Most Called Functions (likely core utilities):\n");
        for ranked in analysis.frequencies.top(self.top_n) {
            out.push_str(&format!("  {}: called by {} files\n", ranked.name, ranked.count));
        }

        out.push_str("\n\nDetailed Dependencies:\n");
        for (filename, calls) in analysis.dependencies.non_empty() {
            out.push_str(&format!("\n{}:\n", filename));
            for call in calls.iter() {
                out.push_str(&format!("  -> {}\n", call));
            }
        }

        out
    }
}

impl OutputExporter for TextReportExporter {
    fn render(&self, analysis: &DependencyAnalysis) -> Result<String, AnalyzeError> {
        Ok(self.to_text(analysis))
    }
}

//! JSON Report Exporter

use crate::api::dto::ReportDto;
use crate::common::error::AnalyzeError;
use crate::domain::analysis::DependencyAnalysis;
use crate::domain::config::{DEFAULT_TITLE, DEFAULT_TOP};
use crate::ports::OutputExporter;

pub struct JsonReportExporter {
    pub title: String,
    pub top_n: usize,
}

impl Default for JsonReportExporter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_TOP)
    }
}

impl JsonReportExporter {
    pub fn new(title: impl Into<String>, top_n: usize) -> Self {
        Self {
            title: title.into(),
            top_n,
        }
    }
}

impl OutputExporter for JsonReportExporter {
    fn render(&self, analysis: &DependencyAnalysis) -> Result<String, AnalyzeError> {
        let dto = ReportDto::from_analysis(analysis, &self.title, self.top_n);
        let mut json = serde_json::to_string_pretty(&dto)?;
        json.push('\n');
        Ok(json)
    }
}

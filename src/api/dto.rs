use serde::{Serialize, Deserialize};
use crate::domain::analysis::DependencyAnalysis;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportDto {
    pub title: String,
    pub total_files: usize,
    pub top_called: Vec<CallCountDto>,
    pub dependencies: Vec<FileCallsDto>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallCountDto {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileCallsDto {
    pub file: String,
    pub calls: Vec<String>,
}

impl ReportDto {
    /// Same ordering and omissions as the text report.
    pub fn from_analysis(analysis: &DependencyAnalysis, title: &str, top_n: usize) -> Self {
        let top_called = analysis
            .frequencies
            .top(top_n)
            .into_iter()
            .map(|r| CallCountDto { name: r.name, count: r.count })
            .collect();

        let dependencies = analysis
            .dependencies
            .non_empty()
            .map(|(file, calls)| FileCallsDto {
                file: file.to_string(),
                calls: calls.iter().map(str::to_string).collect(),
            })
            .collect();

        ReportDto {
            title: title.to_string(),
            total_files: analysis.files_scanned(),
            top_called,
            dependencies,
        }
    }
}

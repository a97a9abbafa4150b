use crate::common::error::AnalyzeError;
use crate::domain::analysis::DependencyAnalysis;
use crate::domain::dependency::CallSet;
use std::fs;
use std::path::Path;

pub mod json_report;
pub mod text_report;

/// Produces the candidate call names of one source file.
/// Must never fail the run: unreadable input yields an empty set.
pub trait CallExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> CallSet;
}

/// Renders an analysis and writes it to disk.
pub trait OutputExporter {
    fn render(&self, analysis: &DependencyAnalysis) -> Result<String, AnalyzeError>;

    /// Create or overwrite `path`, creating missing parent directories.
    fn export(&self, analysis: &DependencyAnalysis, path: &Path) -> Result<(), AnalyzeError> {
        let content = self.render(analysis)?;
        let write_err = |source| AnalyzeError::WriteReport {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }
}

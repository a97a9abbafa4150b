use crate::common::error::AnalyzeError;
use crate::domain::analysis::DependencyAnalysis;
use crate::domain::config::AnalysisConfig;
use crate::domain::dependency::{CallSet, DependencyMap};
use crate::infrastructure::source_scanner::{SourceFile, SourceScanner};
use crate::ports::{CallExtractor, OutputExporter};
use log::{info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Files between progress lines.
pub const PROGRESS_INTERVAL: usize = 100;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub files_scanned: usize,
    pub files_with_calls: usize,
    pub distinct_calls: usize,
    pub output: PathBuf,
}

pub struct AnalyzeUsecase<'a> {
    pub extractor: &'a dyn CallExtractor,
    pub exporter: &'a dyn OutputExporter,
    /// Pool to extract on; the global rayon pool when `None`.
    pub pool: Option<&'a rayon::ThreadPool>,
}

impl<'a> AnalyzeUsecase<'a> {
    /// Scan, extract and aggregate without writing anything.
    pub fn analyze(&self, config: &AnalysisConfig) -> Result<DependencyAnalysis, AnalyzeError> {
        let files = SourceScanner::scan(&config.input_dir, config.language)?;
        info!(
            "Analyzing {} {} files for dependencies...",
            files.len(),
            config.language
        );

        let extractor = self.extractor;
        let job = || extract_all(extractor, &files);
        let extracted = match self.pool {
            Some(pool) => pool.install(job),
            None => job(),
        };

        let mut dependencies = DependencyMap::new();
        for (filename, calls) in extracted {
            if dependencies.insert(filename.clone(), calls).is_some() {
                warn!("Duplicate file name {} after lossy decoding; keeping the later entry", filename);
            }
        }

        // Every file the table counts is a file the map reports.
        Ok(DependencyAnalysis::from_dependencies(dependencies))
    }

    /// Full pipeline: analyze, then write the report to `output`.
    /// Nothing is written when the analysis fails.
    pub fn run(&self, config: &AnalysisConfig, output: &Path) -> Result<AnalysisSummary, AnalyzeError> {
        let analysis = self.analyze(config)?;
        self.exporter.export(&analysis, output)?;

        Ok(AnalysisSummary {
            files_scanned: analysis.files_scanned(),
            files_with_calls: analysis.files_with_calls(),
            distinct_calls: analysis.frequencies.len(),
            output: output.to_path_buf(),
        })
    }
}

fn extract_all(extractor: &dyn CallExtractor, files: &[SourceFile]) -> Vec<(String, CallSet)> {
    let total = files.len();
    let processed = AtomicUsize::new(0);

    files
        .par_iter()
        .map(|file| {
            let seen = processed.fetch_add(1, Ordering::Relaxed);
            if seen % PROGRESS_INTERVAL == 0 {
                info!("  Progress: {}/{}", seen, total);
            }
            (file.filename.clone(), extractor.extract(&file.path))
        })
        .collect()
}

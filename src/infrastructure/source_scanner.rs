use crate::common::error::AnalyzeError;
use crate::domain::language::Language;
use std::fs;
use std::path::{Path, PathBuf};

/// A file selected for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: String,
    pub path: PathBuf,
}

pub struct SourceScanner;

impl SourceScanner {
    /// List the entries directly inside `dir` whose name carries one of the
    /// language's suffixes, sorted by filename. Does not descend into subdirectories.
    pub fn scan(dir: &Path, language: Language) -> Result<Vec<SourceFile>, AnalyzeError> {
        if !dir.exists() {
            return Err(AnalyzeError::MissingInputDir(dir.to_path_buf()));
        }

        let read_dir_err = |source| AnalyzeError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let filename = entry.file_name().to_string_lossy().into_owned();
            if language.matches_name(&filename) {
                files.push(SourceFile {
                    filename,
                    path: entry.path(),
                });
            }
        }

        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }
}

/// Heuristic call extraction for C sources.
///
/// Not a parser: comments and string literals are erased with independent
/// regex substitutions, then every identifier directly followed by `(` is
/// taken as a candidate call. Nested block comments, escaped quotes and
/// preprocessor conditionals are not understood.

use crate::domain::dependency::CallSet;
use crate::ports::CallExtractor;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//[^\n]*").unwrap());
static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"".*?""#).unwrap());
static CALL_SITE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").unwrap());

/// Control-flow keywords that look like calls.
pub const EXCLUDED_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "sizeof", "return", "typedef"];

/// Names this short are dropped.
pub const MAX_DROPPED_LEN: usize = 2;

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexCallExtractor;

impl RegexCallExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Erase comments, then blank string literal contents.
    pub fn strip_noise(src: &str) -> String {
        let without_blocks = BLOCK_COMMENT.replace_all(src, "");
        let without_lines = LINE_COMMENT.replace_all(&without_blocks, "");
        STRING_LITERAL.replace_all(&without_lines, "\"\"").into_owned()
    }

    /// Candidate call names in already-loaded source text.
    pub fn extract_from_source(&self, src: &str) -> CallSet {
        let cleaned = Self::strip_noise(src);
        CALL_SITE
            .captures_iter(&cleaned)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| name.len() > MAX_DROPPED_LEN && !EXCLUDED_KEYWORDS.contains(name))
            .collect()
    }
}

impl CallExtractor for RegexCallExtractor {
    fn extract(&self, path: &Path) -> CallSet {
        match fs::read(path) {
            Ok(bytes) => self.extract_from_source(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                CallSet::new()
            }
        }
    }
}

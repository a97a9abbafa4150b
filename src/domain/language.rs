//! Language Domain Module
//!
//! Defines which source dialects cdeps scans and how their files are recognized.

/// Source dialects accepted by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    /// Parse language from string (CLI input).
    pub fn from_str(s: &str) -> Option<Language> {
        match s.to_lowercase().as_str() {
            "c" => Some(Language::C),
            "cpp" | "c++" | "cxx" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Get the display name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
        }
    }

    /// Get the file extensions for this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::C => &["c"],
            Language::Cpp => &["cpp", "cc", "cxx"],
        }
    }

    /// Whether a directory entry name carries one of this language's suffixes.
    /// Matching is case-sensitive on the name, as `.C` is not a C file.
    pub fn matches_name(&self, file_name: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| file_name.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::C
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

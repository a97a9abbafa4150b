// Infrastructure implementations for cdeps.

pub mod call_extractor;
pub mod concurrency;
pub mod source_scanner;

pub use call_extractor::RegexCallExtractor;
pub use source_scanner::{SourceFile, SourceScanner};

//! snipprint - fingerprint code samples embedded in documentation pages
//!
//! This library locates labelled code blocks in HTML, recovers their text with
//! layout line breaks restored, canonicalizes it with an external formatter and
//! hashes the result, so changes to published samples can be detected.

pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod format;

/// Re-export commonly used types
pub use config::{ExtractConfig, LabelPolicy};
pub use crawl::SiteCrawler;
pub use extract::{content_hash, PageExtractor, PageResult, SiteResult, SnippetEntry, SnippetLabel};
pub use format::{CodeFormatter, FormatOutcome, FormatterAdapter, PassthroughFormatter, PrettierFormatter};

/// Library error and result types
pub use error::{Error, FormatError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "snipprint";

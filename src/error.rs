//! Error types for snippet extraction and crawling

use std::path::PathBuf;
use thiserror::Error;

/// Library result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while extracting, formatting or crawling
#[derive(Debug, Error)]
pub enum Error {
    /// A located code block has no usable label attribute
    #[error("code block #{index} has no `{attribute}` label")]
    MissingLabel { index: usize, attribute: String },

    /// The formatter could not produce canonical text
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A page could not be retrieved
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The sitemap could not be retrieved or parsed
    #[error("failed to read sitemap {url}: {reason}")]
    Sitemap { url: String, reason: String },

    /// A local document could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is invalid
    #[error("invalid configuration {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// The block tag could not be turned into a CSS selector
    #[error("invalid block selector `{0}`")]
    Selector(String),
}

/// Failure of the external canonical formatter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The formatter process could not be started or talked to
    #[error("could not run formatter `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// The formatter ran but refused the input
    #[error("formatter rejected snippet: {stderr}")]
    Rejected { stderr: String },

    /// The formatter produced output that is not UTF-8
    #[error("formatter produced non UTF-8 output")]
    InvalidOutput,
}

impl FormatError {
    /// Whether the formatter itself could not be run, as opposed to
    /// rejecting one snippet
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FormatError::Spawn { .. })
    }
}

impl Error {
    /// Whether the error must stop the whole run, even under the lenient policy
    pub fn aborts_run(&self) -> bool {
        matches!(self, Error::Format(_) | Error::Sitemap { .. })
    }
}

//! Canonical formatting of recovered snippet text
//!
//! This module handles:
//! - The formatter seam (`CodeFormatter`), so any external formatter can be used
//! - Falling back to unformatted text when a snippet cannot be formatted

mod prettier;

pub use prettier::PrettierFormatter;

use crate::error::FormatError;
use std::sync::Arc;

/// Trait for canonical code formatters
#[async_trait::async_trait]
pub trait CodeFormatter: Send + Sync {
    /// Format source text into its canonical form
    async fn format(&self, source: &str) -> Result<String, FormatError>;

    /// Short name used in diagnostics
    fn name(&self) -> &str;
}

/// Formatter that returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

#[async_trait::async_trait]
impl CodeFormatter for PassthroughFormatter {
    async fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

/// Outcome of formatting one snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The formatter accepted the snippet
    Formatted(String),
    /// The formatter failed; the raw text is kept instead
    Fallback { text: String, reason: FormatError },
}

impl FormatOutcome {
    /// The text to fingerprint, formatted or not
    pub fn text(&self) -> &str {
        match self {
            FormatOutcome::Formatted(text) => text,
            FormatOutcome::Fallback { text, .. } => text,
        }
    }

    /// Consume the outcome, keeping only its text
    pub fn into_text(self) -> String {
        match self {
            FormatOutcome::Formatted(text) => text,
            FormatOutcome::Fallback { text, .. } => text,
        }
    }

    /// Whether the formatter accepted the snippet
    pub fn is_formatted(&self) -> bool {
        matches!(self, FormatOutcome::Formatted(_))
    }
}

/// Runs a formatter and never lets one bad snippet fail the page
#[derive(Clone)]
pub struct FormatterAdapter {
    formatter: Arc<dyn CodeFormatter>,
}

impl FormatterAdapter {
    /// Wrap a formatter
    pub fn new(formatter: Arc<dyn CodeFormatter>) -> Self {
        Self { formatter }
    }

    /// Adapter that leaves text untouched
    pub fn passthrough() -> Self {
        Self::new(Arc::new(PassthroughFormatter))
    }

    /// Canonicalize raw snippet text
    ///
    /// A snippet the formatter rejects is logged and its raw text is returned
    /// as a [`FormatOutcome::Fallback`]. A formatter that cannot be run at all
    /// is an error, since every fingerprint it touched would be degraded.
    pub async fn format(&self, raw: String) -> Result<FormatOutcome, FormatError> {
        match self.formatter.format(&raw).await {
            Ok(text) => Ok(FormatOutcome::Formatted(text)),
            Err(reason) if reason.is_unavailable() => Err(reason),
            Err(reason) => {
                tracing::warn!(
                    formatter = self.formatter.name(),
                    "Keeping unformatted snippet: {}",
                    reason
                );
                Ok(FormatOutcome::Fallback { text: raw, reason })
            }
        }
    }
}

impl std::fmt::Debug for FormatterAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterAdapter")
            .field("formatter", &self.formatter.name())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{MissingFormatter, ShoutFormatter};
    use super::*;

    #[tokio::test]
    async fn test_formatted_outcome() {
        let adapter = FormatterAdapter::new(Arc::new(ShoutFormatter));
        let outcome = adapter.format("let a = 1;".to_string()).await.unwrap();

        assert!(outcome.is_formatted());
        assert_eq!(outcome.text(), "LET A = 1;");
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_raw_text() {
        let adapter = FormatterAdapter::new(Arc::new(ShoutFormatter));
        let outcome = adapter.format("reject this {".to_string()).await.unwrap();

        assert!(!outcome.is_formatted());
        assert_eq!(outcome.text(), "reject this {");
        match outcome {
            FormatOutcome::Fallback { reason, .. } => {
                assert!(matches!(reason, FormatError::Rejected { .. }));
            }
            FormatOutcome::Formatted(_) => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn test_passthrough() {
        let adapter = FormatterAdapter::passthrough();
        let outcome = adapter.format("  a   b\n".to_string()).await.unwrap();
        assert_eq!(outcome, FormatOutcome::Formatted("  a   b\n".to_string()));
    }

    #[tokio::test]
    async fn test_unavailable_formatter_is_an_error() {
        let adapter = FormatterAdapter::new(Arc::new(MissingFormatter));
        let err = adapter.format("const a = 1".to_string()).await.unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
    }
}

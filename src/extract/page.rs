//! Per-page extraction
//!
//! Extraction runs in two phases. The synchronous phase walks the parsed
//! document and turns every relevant code block into a [`RawSnippet`]; the
//! DOM is not needed after it. The asynchronous phase formats and
//! fingerprints each snippet and folds the results into a [`PageResult`].

use super::label::SnippetLabel;
use super::locate::{CodeBlock, CodeBlockLocator};
use super::text::block_text;
use super::content_hash;
use crate::config::{ExtractConfig, LabelPolicy};
use crate::error::{Error, Result};
use crate::format::FormatterAdapter;
use scraper::Html;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snippet identifier to canonical text and fingerprint, for one page
pub type PageResult = BTreeMap<String, SnippetEntry>;

/// Page key (path or URL) to that page's snippets
pub type SiteResult = BTreeMap<String, PageResult>;

/// Canonical text and fingerprint of one snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetEntry {
    /// Canonical (or, on formatter failure, raw) text
    pub code: String,
    /// Fingerprint of `code`
    pub hash: String,
    /// False when the formatter failed and `code` is the raw text
    #[serde(skip)]
    pub formatted: bool,
}

/// A labelled code block's text, before formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSnippet {
    pub label: SnippetLabel,
    pub text: String,
}

/// Extracts fingerprinted snippets from documentation pages
#[derive(Debug, Clone)]
pub struct PageExtractor {
    locator: CodeBlockLocator,
    label_attribute: String,
    target_extensions: Vec<String>,
    policy: LabelPolicy,
    formatter: FormatterAdapter,
}

impl PageExtractor {
    /// Create an extractor from configuration
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        Ok(Self {
            locator: CodeBlockLocator::for_tag(&config.block_tag)?,
            label_attribute: config.label_attribute.clone(),
            target_extensions: config.target_extensions.clone(),
            policy: config.label_policy,
            formatter: config.formatter_adapter(),
        })
    }

    /// Replace the formatter
    pub fn with_formatter(mut self, formatter: FormatterAdapter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the missing label policy
    pub fn with_policy(mut self, policy: LabelPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Missing label policy in effect
    pub fn policy(&self) -> LabelPolicy {
        self.policy
    }

    /// Parse an HTML page and extract its snippets
    pub async fn extract_html(&self, html: &str) -> Result<PageResult> {
        let snippets = {
            let document = Html::parse_document(html);
            self.collect(&document)?
        };
        self.canonicalize(snippets).await
    }

    /// Recover the text of every target-language block in document order
    ///
    /// Under [`LabelPolicy::Strict`] the first unlabelled block aborts the page.
    pub fn collect(&self, document: &Html) -> Result<Vec<RawSnippet>> {
        let mut snippets = Vec::new();

        for block in self.locator.locate(document) {
            let Some(label) = self.label(&block)? else {
                continue;
            };

            if !label.is_target(&self.target_extensions) {
                tracing::info!("Skipping {} ...", label.filename);
                continue;
            }

            tracing::debug!(snippet = %label, block = block.index, "Collected snippet");
            snippets.push(RawSnippet {
                text: block_text(block.element),
                label,
            });
        }

        Ok(snippets)
    }

    /// Format and fingerprint collected snippets
    ///
    /// A later snippet with the same filename replaces an earlier one. Fails
    /// only when the formatter cannot be run at all.
    pub async fn canonicalize(&self, snippets: Vec<RawSnippet>) -> Result<PageResult> {
        let mut entries = Vec::with_capacity(snippets.len());

        for snippet in snippets {
            let outcome = self.formatter.format(snippet.text).await?;
            let formatted = outcome.is_formatted();
            let code = outcome.into_text();
            let hash = content_hash(&code);

            entries.push((
                snippet.label.filename,
                SnippetEntry {
                    code,
                    hash,
                    formatted,
                },
            ));
        }

        let page = entries
            .into_iter()
            .fold(PageResult::new(), |mut page, (name, entry)| {
                if page.insert(name.clone(), entry).is_some() {
                    tracing::debug!(snippet = %name, "Duplicate snippet replaced earlier block");
                }
                page
            });

        Ok(page)
    }

    /// Read and parse a block's label, applying the missing label policy
    fn label(&self, block: &CodeBlock<'_>) -> Result<Option<SnippetLabel>> {
        if let Some(label) = block.attr(&self.label_attribute).and_then(SnippetLabel::parse) {
            return Ok(Some(label));
        }

        match self.policy {
            LabelPolicy::Strict => Err(Error::MissingLabel {
                index: block.index,
                attribute: self.label_attribute.clone(),
            }),
            LabelPolicy::Lenient => {
                tracing::warn!(
                    "Skipping code block #{} without `{}` label",
                    block.index,
                    self.label_attribute
                );
                Ok(None)
            }
        }
    }
}

//! Code sample extraction from documentation pages
//!
//! This module handles:
//! - Locating code blocks in parsed HTML
//! - Recovering their text with layout line breaks restored
//! - Filtering by the language encoded in each block's label
//! - Fingerprinting the canonical text

pub mod label;
pub mod locate;
pub mod page;
pub mod text;

pub use label::SnippetLabel;
pub use locate::{CodeBlock, CodeBlockLocator};
pub use page::{PageExtractor, PageResult, RawSnippet, SiteResult, SnippetEntry};
pub use text::block_text;

use sha2::{Digest, Sha256};

/// Compute a stable hash for content
///
/// SHA-256 over the UTF-8 bytes, rendered as lowercase hex.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_is_stable() {
        let a = content_hash("const a = 1;\n");
        let b = content_hash("const a = 1;\n");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_content_hash_known_value() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_single_character_changes_hash() {
        assert_ne!(content_hash("const a = 1;\n"), content_hash("const a = 2;\n"));
    }
}

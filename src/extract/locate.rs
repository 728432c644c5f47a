//! Locating code blocks in a parsed document

use crate::error::{Error, Result};
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// A code-bearing element found in a document
#[derive(Debug, Clone, Copy)]
pub struct CodeBlock<'a> {
    /// Position among all located blocks, in document order
    pub index: usize,
    /// The block element itself
    pub element: ElementRef<'a>,
}

impl<'a> CodeBlock<'a> {
    /// Read an attribute of the block element
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

/// Finds every preformatted block in a document
#[derive(Debug, Clone)]
pub struct CodeBlockLocator {
    selector: Selector,
}

impl CodeBlockLocator {
    /// Create a locator for `<pre>` blocks
    pub fn new() -> Result<Self> {
        Self::for_tag("pre")
    }

    /// Create a locator for a different block tag
    pub fn for_tag(tag: &str) -> Result<Self> {
        let selector = Selector::parse(tag).map_err(|_| Error::Selector(tag.to_string()))?;
        Ok(Self { selector })
    }

    /// Lazily iterate over every block in document order
    ///
    /// No filtering happens here; each call starts a fresh scan.
    pub fn locate<'a, 'b>(&'b self, document: &'a Html) -> Blocks<'a, 'b> {
        Blocks {
            inner: document.select(&self.selector),
            index: 0,
        }
    }
}

/// Iterator returned by [`CodeBlockLocator::locate`]
pub struct Blocks<'a, 'b> {
    inner: Select<'a, 'b>,
    index: usize,
}

impl<'a> Iterator for Blocks<'a, '_> {
    type Item = CodeBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.next()?;
        let block = CodeBlock {
            index: self.index,
            element,
        };
        self.index += 1;
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
  <pre aria-label="first.ts">one</pre>
  <section>
    <pre aria-label="second.py">two</pre>
    <div><pre>three</pre></div>
  </section>
</body></html>
"#;

    #[test]
    fn test_locates_all_blocks_in_order() {
        let doc = Html::parse_document(PAGE);
        let locator = CodeBlockLocator::new().unwrap();

        let blocks: Vec<_> = locator.locate(&doc).collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].attr("aria-label"), Some("first.ts"));
        assert_eq!(blocks[1].attr("aria-label"), Some("second.py"));
        assert_eq!(blocks[2].attr("aria-label"), None);
        assert_eq!(
            blocks.iter().map(|b| b.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_scan_is_restartable() {
        let doc = Html::parse_document(PAGE);
        let locator = CodeBlockLocator::new().unwrap();

        assert_eq!(locator.locate(&doc).count(), 3);
        assert_eq!(locator.locate(&doc).count(), 3);
    }

    #[test]
    fn test_no_blocks() {
        let doc = Html::parse_document("<p>nothing here</p>");
        let locator = CodeBlockLocator::new().unwrap();
        assert_eq!(locator.locate(&doc).count(), 0);
    }

    #[test]
    fn test_invalid_tag() {
        assert!(matches!(
            CodeBlockLocator::for_tag("pre[").unwrap_err(),
            Error::Selector(_)
        ));
    }
}

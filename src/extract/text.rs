//! Plain-text recovery for code block subtrees
//!
//! Highlighters commonly render each source line as its own `<div>`, so the
//! newline a reader sees is implied by layout rather than present in the DOM.
//! Text is recovered by walking the subtree and restoring those line breaks.
//!
//! Only `<div>` is treated as a line container. Any other block-level tag
//! contributes its text inline.

use scraper::{ElementRef, Node};

/// Element names that end a line when they close
const BLOCK_TAGS: &[&str] = &["div"];

/// Recover the text of an element in document order
///
/// Text nodes are copied verbatim, whitespace included. Child elements are
/// recovered recursively. A line container ends with exactly one `\n` unless
/// its own text already does.
pub fn block_text(element: ElementRef<'_>) -> String {
    let mut result = String::new();

    for child in element.children() {
        match child.value() {
            Node::Text(text) => result.push_str(text),
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    result.push_str(&block_text(el));
                }
            }
            _ => {}
        }
    }

    if is_block(element) && !result.ends_with('\n') {
        result.push('\n');
    }

    result
}

fn is_block(element: ElementRef<'_>) -> bool {
    BLOCK_TAGS.contains(&element.value().name())
}

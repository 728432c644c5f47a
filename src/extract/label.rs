//! Snippet naming convention
//!
//! Code blocks carry a label whose first word is a filename and whose
//! remaining words describe the sample, e.g. `"utils.ts Helper functions"`.
//! The filename's extension decides whether the sample is in a target language.

/// A parsed code block label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLabel {
    /// First whitespace-delimited token; used as the snippet identifier
    pub filename: String,
    /// Remaining free-text description
    pub description: String,
}

impl SnippetLabel {
    /// Parse a label attribute value
    ///
    /// Returns `None` for an empty or whitespace-only label.
    pub fn parse(label: &str) -> Option<Self> {
        let mut words = label.split_whitespace();
        let filename = words.next()?.to_string();
        let description = words.collect::<Vec<_>>().join(" ");

        Some(Self {
            filename,
            description,
        })
    }

    /// Extension after the last `.`, if the filename has one
    pub fn extension(&self) -> Option<&str> {
        let (_, ext) = self.filename.rsplit_once('.')?;
        Some(ext)
    }

    /// Whether the extension is one of the target extensions
    pub fn is_target<S: AsRef<str>>(&self, extensions: &[S]) -> bool {
        match self.extension() {
            Some(ext) => extensions.iter().any(|e| e.as_ref() == ext),
            None => false,
        }
    }
}

impl std::fmt::Display for SnippetLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &[&str] = &["ts", "tsx"];

    #[test]
    fn test_parse_label_with_description() {
        let label = SnippetLabel::parse("utils.ts some description words").unwrap();
        assert_eq!(label.filename, "utils.ts");
        assert_eq!(label.description, "some description words");
        assert_eq!(label.extension(), Some("ts"));
        assert!(label.is_target(TS));
    }

    #[test]
    fn test_non_target_extension() {
        let label = SnippetLabel::parse("readme.md extra").unwrap();
        assert_eq!(label.extension(), Some("md"));
        assert!(!label.is_target(TS));
    }

    #[test]
    fn test_last_segment_is_extension() {
        let label = SnippetLabel::parse("app.config.tsx").unwrap();
        assert_eq!(label.extension(), Some("tsx"));
        assert!(label.is_target(TS));

        let label = SnippetLabel::parse("types.d.py").unwrap();
        assert!(!label.is_target(TS));
    }

    #[test]
    fn test_no_extension() {
        let label = SnippetLabel::parse("Dockerfile build image").unwrap();
        assert_eq!(label.extension(), None);
        assert!(!label.is_target(TS));
    }

    #[test]
    fn test_empty_label() {
        assert!(SnippetLabel::parse("").is_none());
        assert!(SnippetLabel::parse("   \t").is_none());
    }

    #[test]
    fn test_extensions_are_case_sensitive() {
        let label = SnippetLabel::parse("Main.TS").unwrap();
        assert!(!label.is_target(TS));
    }
}

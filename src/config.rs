//! Extraction configuration

use crate::error::{Error, Result};
use crate::format::{CodeFormatter, FormatterAdapter, PrettierFormatter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// How a code block without a label is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Abort extraction of the whole page
    #[default]
    Strict,
    /// Skip the block (or a failed page) with a diagnostic and carry on
    Lenient,
}

impl std::fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelPolicy::Strict => write!(f, "strict"),
            LabelPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Configuration for snippet extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// File extensions that mark a snippet as in scope
    #[serde(default = "default_target_extensions")]
    pub target_extensions: Vec<String>,

    /// Attribute holding the snippet label
    #[serde(default = "default_label_attribute")]
    pub label_attribute: String,

    /// Tag of code-bearing elements
    #[serde(default = "default_block_tag")]
    pub block_tag: String,

    /// Missing label handling
    #[serde(default)]
    pub label_policy: LabelPolicy,

    /// External formatter settings
    #[serde(default)]
    pub formatter: FormatterConfig,

    /// Crawl mode settings
    #[serde(default)]
    pub crawl: CrawlConfig,
}

/// Formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Run the formatter at all; when off, recovered text is hashed as is
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Formatter executable
    #[serde(default = "default_formatter_command")]
    pub command: String,

    /// Arguments placed before `--parser`, e.g. `["prettier"]` with `command = "npx"`
    #[serde(default)]
    pub args: Vec<String>,

    /// Grammar the formatter parses snippets with
    #[serde(default = "default_formatter_parser")]
    pub parser: String,
}

/// Crawl configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CrawlConfig {
    /// Sitemap listing the pages to crawl
    pub sitemap_url: Option<String>,

    /// Only pages whose URL path contains this substring are crawled
    pub path_filter: Option<String>,
}

fn default_target_extensions() -> Vec<String> {
    vec!["ts".to_string(), "tsx".to_string()]
}

fn default_label_attribute() -> String {
    "aria-label".to_string()
}

fn default_block_tag() -> String {
    "pre".to_string()
}

fn default_true() -> bool {
    true
}

fn default_formatter_command() -> String {
    "prettier".to_string()
}

fn default_formatter_parser() -> String {
    "typescript".to_string()
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_formatter_command(),
            args: Vec::new(),
            parser: default_formatter_parser(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            target_extensions: default_target_extensions(),
            label_attribute: default_label_attribute(),
            block_tag: default_block_tag(),
            label_policy: LabelPolicy::default(),
            formatter: FormatterConfig::default(),
            crawl: CrawlConfig::default(),
        }
    }
}

impl ExtractConfig {
    /// Load configuration from a TOML file, or return defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let config: ExtractConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        if config.target_extensions.is_empty() {
            return Err("target_extensions must not be empty".to_string());
        }
        Ok(config)
    }

    /// Build the formatter adapter described by this configuration
    pub fn formatter_adapter(&self) -> FormatterAdapter {
        if !self.formatter.enabled {
            return FormatterAdapter::passthrough();
        }

        let formatter: Arc<dyn CodeFormatter> = Arc::new(
            PrettierFormatter::new(&self.formatter.command, &self.formatter.parser)
                .with_args(self.formatter.args.iter().cloned()),
        );
        FormatterAdapter::new(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractConfig::default();
        assert_eq!(config.target_extensions, vec!["ts", "tsx"]);
        assert_eq!(config.label_attribute, "aria-label");
        assert_eq!(config.block_tag, "pre");
        assert_eq!(config.label_policy, LabelPolicy::Strict);
        assert!(config.formatter.enabled);
        assert_eq!(config.formatter.parser, "typescript");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractConfig::from_toml(
            r#"
label_policy = "lenient"

[crawl]
sitemap_url = "https://example.com/sitemap.xml"
path_filter = "/docs/"
"#,
        )
        .unwrap();

        assert_eq!(config.label_policy, LabelPolicy::Lenient);
        assert_eq!(config.target_extensions, vec!["ts", "tsx"]);
        assert_eq!(config.crawl.path_filter.as_deref(), Some("/docs/"));
        assert_eq!(config.formatter.command, "prettier");
        assert!(config.formatter.args.is_empty());
    }

    #[test]
    fn test_formatter_args() {
        let config = ExtractConfig::from_toml(
            r#"
[formatter]
command = "npx"
args = ["prettier"]
"#,
        )
        .unwrap();

        assert_eq!(config.formatter.command, "npx");
        assert_eq!(config.formatter.args, vec!["prettier"]);
        assert_eq!(config.formatter.parser, "typescript");
        assert!(format!("{:?}", config.formatter_adapter()).contains("npx"));
    }

    #[test]
    fn test_empty_extension_list_rejected() {
        assert!(ExtractConfig::from_toml("target_extensions = []").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExtractConfig::load_or_default(&dir.path().join("snipprint.toml")).unwrap();
        assert_eq!(config.label_policy, LabelPolicy::Strict);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snipprint.toml");
        std::fs::write(&path, "label_policy = \"sometimes\"").unwrap();

        let err = ExtractConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}

//! Command implementations

use super::Cli;
use crate::config::{ExtractConfig, LabelPolicy};
use crate::crawl::SiteCrawler;
use crate::error::Error;
use crate::extract::{PageExtractor, SiteResult};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load the configuration file and apply command line overrides
pub fn resolve_config(cli: &Cli) -> Result<ExtractConfig> {
    let mut config = ExtractConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    apply_overrides(&mut config, cli.lenient, cli.no_format, &cli.extensions);
    Ok(config)
}

fn apply_overrides(config: &mut ExtractConfig, lenient: bool, no_format: bool, extensions: &[String]) {
    if lenient {
        config.label_policy = LabelPolicy::Lenient;
    }
    if no_format {
        config.formatter.enabled = false;
    }
    if !extensions.is_empty() {
        config.target_extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
    }
}

/// Extract snippets from local HTML files, keyed by path
pub async fn extract_files(config: &ExtractConfig, paths: &[PathBuf]) -> Result<SiteResult> {
    let extractor = PageExtractor::new(config)?;
    let mut site = SiteResult::new();

    for path in paths {
        tracing::info!("Reading {}", path.display());

        match extract_file(&extractor, path).await {
            Ok(page) => {
                site.insert(path.display().to_string(), page);
            }
            Err(e) if config.label_policy == LabelPolicy::Lenient && !e.aborts_run() => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to extract {}", path.display()));
            }
        }
    }

    Ok(site)
}

async fn extract_file(extractor: &PageExtractor, path: &Path) -> crate::Result<crate::extract::PageResult> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let html = String::from_utf8_lossy(&bytes);

    extractor.extract_html(&html).await
}

/// Crawl the pages listed in a sitemap
pub async fn crawl(
    config: &ExtractConfig,
    sitemap: Option<&str>,
    filter: Option<&str>,
) -> Result<SiteResult> {
    let sitemap = sitemap
        .or(config.crawl.sitemap_url.as_deref())
        .context("No sitemap given. Pass --sitemap or set crawl.sitemap_url in the config.")?;
    let filter = filter.or(config.crawl.path_filter.as_deref());

    let crawler = SiteCrawler::new(PageExtractor::new(config)?);
    let site = crawler.crawl_sitemap(sitemap, filter).await?;
    Ok(site)
}

/// Crawl an explicit list of page URLs
pub async fn crawl_urls(config: &ExtractConfig, urls: &[String]) -> Result<SiteResult> {
    let crawler = SiteCrawler::new(PageExtractor::new(config)?);
    let site = crawler.crawl(urls).await?;
    Ok(site)
}

/// Print the site result as pretty JSON
pub fn print_site_json(site: &SiteResult) -> Result<()> {
    let json = serde_json::to_string_pretty(site)?;
    println!("{}", json);
    Ok(())
}

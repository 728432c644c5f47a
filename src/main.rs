//! snipprint - fingerprint code samples in documentation pages
//!
//! Extracts labelled code blocks from HTML pages, canonicalizes them and
//! prints a JSON map of page to snippet to `{code, hash}`.

use anyhow::Result;
use snipprint::cli::{crawl, crawl_urls, extract_files, print_site_json, resolve_config, Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging; stdout is reserved for the JSON result
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = resolve_config(&cli)?;
    tracing::debug!(
        policy = %config.label_policy,
        formatter = config.formatter.enabled,
        extensions = ?config.target_extensions,
        "Resolved configuration"
    );

    // Execute command
    let site = match cli.command {
        Commands::File(args) => extract_files(&config, &args.paths).await?,
        Commands::Crawl(args) => {
            crawl(&config, args.sitemap.as_deref(), args.filter.as_deref()).await?
        }
        Commands::Urls(args) => crawl_urls(&config, &args.urls).await?,
    };

    print_site_json(&site)?;

    Ok(())
}

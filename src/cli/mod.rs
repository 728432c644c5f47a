//! CLI interface using clap
//!
//! Provides the command-line interface for snipprint

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// snipprint - fingerprint code samples in documentation pages
#[derive(Parser, Debug)]
#[command(name = "snipprint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "SNIPPRINT_CONFIG",
        default_value = "snipprint.toml"
    )]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip unlabelled blocks and failed pages instead of aborting
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Hash recovered text without running the formatter
    #[arg(long, global = true)]
    pub no_format: bool,

    /// Target file extension (repeatable; replaces the configured set)
    #[arg(short, long = "ext", global = true)]
    pub extensions: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract snippets from local HTML files
    File(FileArgs),

    /// Discover pages from a sitemap and extract their snippets
    Crawl(CrawlArgs),

    /// Extract snippets from a list of page URLs
    Urls(UrlsArgs),
}

/// Arguments for file command
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// HTML documents to read
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for crawl command
#[derive(Parser, Debug)]
pub struct CrawlArgs {
    /// Sitemap URL (defaults to `crawl.sitemap_url` from the config)
    #[arg(short, long)]
    pub sitemap: Option<String>,

    /// Only crawl pages whose path contains this substring
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for urls command
#[derive(Parser, Debug)]
pub struct UrlsArgs {
    /// Page URLs to crawl, in order
    #[arg(required = true)]
    pub urls: Vec<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

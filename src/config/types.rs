//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ARCHIVE_DIR, DEFAULT_PROBE_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How `<loc>` entries of a sitemap are told apart into pages and nested sitemaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EntryFilter {
    /// Any location containing `.xml` is a nested sitemap reference.
    #[default]
    Substring,
    /// Use the document root (`<sitemapindex>` vs `<urlset>`), falling back to
    /// the substring test when the root is neither.
    DocumentType,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use sitemap_finder::Config;
///
/// let config = Config {
///     collect_pages: true,
///     expand_nested_indexes: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Number of standard-path probes allowed in flight at once (minimum 1)
    pub probe_concurrency: usize,

    /// Fetch every discovered sitemap and collect its pages
    pub collect_pages: bool,

    /// Follow nested sitemap references one level deep
    pub expand_nested_indexes: bool,

    /// Page vs. nested-sitemap classification policy
    pub entry_filter: EntryFilter,

    /// Drop repeated page URLs across sitemaps, keeping the first occurrence
    pub dedupe_pages: bool,

    /// Directory to archive sanitized page HTML into (archival disabled if `None`)
    pub archive_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            probe_concurrency: DEFAULT_PROBE_CONCURRENCY,
            collect_pages: false,
            expand_nested_indexes: false,
            entry_filter: EntryFilter::Substring,
            dedupe_pages: false,
            archive_dir: None,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Single target, scheme optional
/// sitemap_finder example.com
///
/// # List pages too, following nested sitemap indexes
/// sitemap_finder https://example.com --pages --expand-nested-indexes
///
/// # Batch mode from the second column of a CSV export, archiving every page
/// sitemap_finder --input websites.csv --has-header --archive
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "sitemap_finder",
    version,
    about = "Finds a website's sitemaps via robots.txt and standard locations."
)]
pub struct Opt {
    /// Website to search (e.g. example.com or https://example.com).
    /// Prompted for interactively when neither this nor --input is given.
    #[arg(value_parser)]
    pub target: Option<String>,

    /// Read targets from a file instead: one per line, or a CSV column for `.csv` files.
    /// Use `-` for stdin.
    #[arg(long, value_parser, conflicts_with = "target")]
    pub input: Option<PathBuf>,

    /// CSV column (0-based) holding the target URLs
    #[arg(long, default_value_t = 1)]
    pub column: usize,

    /// Skip the first row of a CSV input
    #[arg(long)]
    pub has_header: bool,

    /// Fetch each discovered sitemap and list its pages
    #[arg(long)]
    pub pages: bool,

    /// Follow nested sitemap references one level deep (implies --pages)
    #[arg(long)]
    pub expand_nested_indexes: bool,

    /// Page vs. nested-sitemap classification: substring|document-type
    #[arg(long, value_enum, default_value_t = EntryFilter::Substring)]
    pub entry_filter: EntryFilter,

    /// Drop repeated page URLs across sitemaps
    #[arg(long)]
    pub dedupe_pages: bool,

    /// Archive each page's sanitized HTML into `results/` (implies --pages)
    #[arg(long)]
    pub archive: bool,

    /// Archive into this directory instead (implies --archive)
    #[arg(long, value_parser)]
    pub archive_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum standard-path probes in flight at once
    #[arg(long, default_value_t = DEFAULT_PROBE_CONCURRENCY)]
    pub probe_concurrency: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        let archive_dir = match (&opt.archive_dir, opt.archive) {
            (Some(dir), _) => Some(dir.clone()),
            (None, true) => Some(PathBuf::from(DEFAULT_ARCHIVE_DIR)),
            (None, false) => None,
        };
        let archiving = archive_dir.is_some();
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
            probe_concurrency: opt.probe_concurrency.max(1),
            collect_pages: opt.pages || opt.expand_nested_indexes || archiving,
            expand_nested_indexes: opt.expand_nested_indexes,
            entry_filter: opt.entry_filter,
            dedupe_pages: opt.dedupe_pages,
            archive_dir,
        }
    }
}

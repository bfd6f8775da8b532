//! sitemap_finder library: locate a website's XML sitemaps and the pages they list
//!
//! Discovery combines two independent strategies: `Sitemap:` directives in
//! `robots.txt`, and probing a fixed list of conventional sitemap locations.
//! Optionally each discovered sitemap is expanded into page URLs, and pages can
//! be archived to disk as sanitized HTML.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_finder::{discover, Config, DiscoveryContext};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     collect_pages: true,
//!     ..Default::default()
//! };
//! let ctx = DiscoveryContext::from_config(config)?;
//!
//! let result = discover("example.com", &ctx).await?;
//! for sitemap in &result.sitemaps {
//!     println!("{sitemap}");
//! }
//! println!("{} page(s)", result.pages.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod archive;
mod base_url;
pub mod config;
mod discovery;
mod error_handling;
mod fetch;
pub mod initialization;
mod probe;
mod report;
mod robots;
mod run;
mod sitemap;
mod targets;

// Re-export public API
pub use archive::{archive_file_name, archive_page, archive_pages, sanitize_html};
pub use base_url::{normalize, BaseUrl};
pub use config::{Config, EntryFilter, LogFormat, LogLevel, Opt};
pub use discovery::{discover, union_sitemaps, DiscoveryResult};
pub use error_handling::{
    ArchiveError, DiscoveryError, ErrorType, FetchError, InfoType, InitializationError,
    ProcessingStats, SitemapParseError, TargetSourceError,
};
pub use fetch::{fetch_bytes, fetch_text, DiscoveryContext};
pub use probe::probe_standard_paths;
pub use report::write_report;
pub use robots::{fetch_robots_sitemaps, parse_sitemaps_from_robots};
pub use run::{process_target, run_batch, BatchSummary, TargetOutcome};
pub use sitemap::{expand_sitemap, parse_sitemap, ParsedSitemap, SitemapEntry, SitemapKind};
pub use targets::{
    open_target_source, CsvColumnSource, IterTargetSource, LineTargetSource, TargetSource,
};

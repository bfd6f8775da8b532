//! Configuration constants.
//!
//! This module defines the constants used throughout discovery, including
//! timeouts, size limits, and the fixed list of conventional sitemap locations.

use std::time::Duration;

/// Per-request timeout in seconds
/// Applies to every robots.txt fetch, probe, sitemap fetch and page fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum number of redirect hops to follow
/// A probe is only "found" if the final status after redirects is 200.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default number of standard-path probes in flight at once.
/// Equal to the candidate count, so all probes run together.
pub const DEFAULT_PROBE_CONCURRENCY: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; sitemap_finder/",
    env!("CARGO_PKG_VERSION"),
    "; +https://www.sitemaps.org/)"
);

/// Path of robots.txt relative to the site root.
pub const ROBOTS_TXT_PATH: &str = "robots.txt";

/// Conventional sitemap locations, probed in this exact order.
///
/// The order is part of the output contract: found candidates are always
/// reported in the order they appear here, regardless of probe completion order.
pub const STANDARD_SITEMAP_PATHS: [&str; 10] = [
    "sitemap.xml",
    "sitemap_index.xml",
    "sitemap1.xml",
    "sitemap2.xml",
    "sitemap.xml.gz",
    "sitemap_index.xml.gz",
    "sitemap",
    "sitemap_index",
    "sitemap1",
    "sitemap2",
];

/// Substring marking a `<loc>` entry as a nested sitemap reference rather than a page.
pub const INDEX_REFERENCE_MARKER: &str = ".xml";

/// Maximum response body size in bytes (50MB, the sitemaps.org uncompressed limit)
/// Larger bodies are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 50 * 1024 * 1024;

/// Default directory for archived pages (mirrors the `results/` folder of batch runs)
pub const DEFAULT_ARCHIVE_DIR: &str = "results";

/// Separator line printed before each target in batch mode
pub const BATCH_SEPARATOR: &str = "----------------------------------------------------";

/// Connect timeout as a `Duration`
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS);

/// Process exit code when the target is not a usable URL or the batch input cannot be opened.
pub const EXIT_INVALID_INPUT: i32 = 1;

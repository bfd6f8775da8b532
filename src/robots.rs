//! robots.txt retrieval and `Sitemap:` directive extraction.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;

use crate::base_url::BaseUrl;
use crate::config::ROBOTS_TXT_PATH;
use crate::error_handling::InfoType;
use crate::fetch::{fetch_text, record_fetch_failure, DiscoveryContext};

// Anchored at line start: `# Sitemap: ...` in a comment never matches.
const SITEMAP_DIRECTIVE_PATTERN: &str = r"(?i)^\s*Sitemap:\s*(\S+)";

static SITEMAP_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SITEMAP_DIRECTIVE_PATTERN)
        .expect("Failed to compile sitemap directive regex - this is a bug")
});

/// Fetches `{base}robots.txt`.
///
/// Returns `None` when the file cannot be retrieved (non-200 status or any
/// transport failure). That is a normal outcome, counted and logged, never an error.
pub async fn fetch_robots_txt(ctx: &DiscoveryContext, base: &BaseUrl) -> Option<String> {
    let robots_url = base.join(ROBOTS_TXT_PATH);
    match fetch_text(&ctx.client, &robots_url).await {
        Ok(body) => Some(body),
        Err(e) => {
            record_fetch_failure(&ctx.stats, "robots.txt fetch", &e);
            ctx.stats.increment_info(InfoType::RobotsTxtUnavailable);
            info!("robots.txt not available at {}", robots_url);
            None
        }
    }
}

/// Extracts every `Sitemap:` directive from a robots.txt body.
///
/// Matching is case-insensitive and anchored at the start of the line (leading
/// whitespace allowed). The first whitespace-delimited token after the colon is
/// the sitemap URL. File order is preserved and duplicates are kept.
///
/// # Examples
///
/// ```
/// use sitemap_finder::parse_sitemaps_from_robots;
///
/// let robots = "User-agent: *\nsitemap: https://example.com/sitemap.xml\n";
/// assert_eq!(
///     parse_sitemaps_from_robots(robots),
///     vec!["https://example.com/sitemap.xml".to_string()]
/// );
/// ```
pub fn parse_sitemaps_from_robots(robots_txt: &str) -> Vec<String> {
    robots_txt
        .trim_start_matches('\u{feff}')
        .lines()
        .filter_map(|line| SITEMAP_DIRECTIVE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Fetches robots.txt and returns its declared sitemaps.
///
/// `None` means robots.txt itself could not be retrieved; `Some(vec![])` means
/// it was retrieved but declares no sitemaps.
pub async fn fetch_robots_sitemaps(
    ctx: &DiscoveryContext,
    base: &BaseUrl,
) -> Option<Vec<String>> {
    let robots_txt = fetch_robots_txt(ctx, base).await?;
    let sitemaps = parse_sitemaps_from_robots(&robots_txt);
    debug!(
        "robots.txt for {} declares {} sitemap(s)",
        base,
        sitemaps.len()
    );
    Some(sitemaps)
}

//! Discovery orchestration: normalize, locate sitemaps, expand pages.

use std::collections::{BTreeSet, HashSet};

use log::info;

use crate::base_url::{normalize, BaseUrl};
use crate::error_handling::DiscoveryError;
use crate::fetch::DiscoveryContext;
use crate::probe::probe_standard_paths;
use crate::robots::fetch_robots_sitemaps;
use crate::sitemap::expand_sitemap;

/// Everything discovered for one target site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryResult {
    /// Canonical root the search ran against
    pub base: BaseUrl,
    /// Sitemaps declared in robots.txt, in file order.
    /// `None` if robots.txt could not be retrieved.
    pub robots_sitemaps: Option<Vec<String>>,
    /// Standard locations that answered 200, in candidate order
    pub standard_sitemaps: Vec<String>,
    /// Deduplicated union of both strategies, lexicographically ordered
    pub sitemaps: BTreeSet<String>,
    /// Pages from every sitemap, in sitemap-processing order
    /// (empty unless page collection is enabled)
    pub pages: Vec<String>,
}

/// Unions the two strategies' results. Equality is plain string equality.
pub fn union_sitemaps(robots: &[String], standard: &[String]) -> BTreeSet<String> {
    robots.iter().chain(standard).cloned().collect()
}

/// Removes repeated pages, keeping the first occurrence.
fn dedupe_in_order(pages: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    pages
        .into_iter()
        .filter(|page| seen.insert(page.clone()))
        .collect()
}

/// Runs discovery for one raw target string.
///
/// The robots.txt strategy and the standard-path probes run concurrently and
/// independently. When page collection is enabled, each sitemap in the union
/// is then expanded in lexicographic order.
///
/// # Errors
///
/// Returns `DiscoveryError::InvalidUrl` if the target cannot be normalized.
/// Nothing else is an error: unreachable sites simply yield empty results.
pub async fn discover(
    target: &str,
    ctx: &DiscoveryContext,
) -> Result<DiscoveryResult, DiscoveryError> {
    let base = normalize(target)?;
    info!("Searching for sitemaps on {}", base);

    let (robots_sitemaps, standard_sitemaps) = tokio::join!(
        fetch_robots_sitemaps(ctx, &base),
        probe_standard_paths(ctx, &base)
    );

    let sitemaps = union_sitemaps(
        robots_sitemaps.as_deref().unwrap_or_default(),
        &standard_sitemaps,
    );
    info!("Found {} distinct sitemap(s) on {}", sitemaps.len(), base);

    let mut pages = Vec::new();
    if ctx.config.collect_pages {
        for sitemap in &sitemaps {
            pages.extend(expand_sitemap(ctx, sitemap).await);
        }
        if ctx.config.dedupe_pages {
            pages = dedupe_in_order(pages);
        }
        info!("Collected {} page(s) from {}", pages.len(), base);
    }

    Ok(DiscoveryResult {
        base,
        robots_sitemaps,
        standard_sitemaps,
        sitemaps,
        pages,
    })
}

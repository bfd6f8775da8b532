//! Sitemap expansion into page URLs.
//!
//! A sitemap is fetched, decoded (gzip-aware), parsed, and each `<loc>` is
//! classified as a page or a nested sitemap reference. Nested references are
//! dropped unless `expand_nested_indexes` is set, in which case they are
//! followed exactly one level deep.

mod parse;

pub use parse::{
    classify, decode_body, is_gzip, parse_sitemap, ParsedSitemap, SitemapEntry, SitemapKind,
};

use log::{debug, warn};

use crate::error_handling::{ErrorType, InfoType};
use crate::fetch::{fetch_bytes, record_fetch_failure, DiscoveryContext};

/// Fetches one sitemap and returns its classified entries.
///
/// Fails soft: any fetch or decode failure is counted, logged, and yields no entries.
async fn fetch_entries(ctx: &DiscoveryContext, url: &str) -> Vec<SitemapEntry> {
    let body = match fetch_bytes(&ctx.client, url).await {
        Ok(body) => body,
        Err(e) => {
            record_fetch_failure(&ctx.stats, "sitemap fetch", &e);
            return Vec::new();
        }
    };

    if is_gzip(&body) {
        ctx.stats.increment_info(InfoType::GzipSitemapDecoded);
    }
    let text = match decode_body(&body) {
        Ok(text) => text,
        Err(e) => {
            ctx.stats.increment_error(ErrorType::SitemapDecodeError);
            warn!("Skipping sitemap {}: {}", url, e);
            return Vec::new();
        }
    };

    let parsed = parse_sitemap(&text);
    debug!(
        "Sitemap {} ({:?}) has {} location(s)",
        url,
        parsed.kind,
        parsed.locations.len()
    );
    classify(parsed, ctx.config.entry_filter)
}

/// Fetches a sitemap and returns its page URLs in document order.
///
/// Nested sitemap references are excluded. With `expand_nested_indexes`,
/// each reference is fetched once and its pages are spliced in where the
/// reference appeared; references found at that second level are dropped.
pub async fn expand_sitemap(ctx: &DiscoveryContext, url: &str) -> Vec<String> {
    let mut pages = Vec::new();

    for entry in fetch_entries(ctx, url).await {
        match entry {
            SitemapEntry::Page(page) => pages.push(page),
            SitemapEntry::IndexReference(child) if ctx.config.expand_nested_indexes && child != url => {
                ctx.stats.increment_info(InfoType::NestedIndexExpanded);
                debug!("Expanding nested sitemap {} from {}", child, url);
                for nested in fetch_entries(ctx, &child).await {
                    match nested {
                        SitemapEntry::Page(page) => pages.push(page),
                        SitemapEntry::IndexReference(deeper) => {
                            ctx.stats.increment_info(InfoType::IndexReferenceSkipped);
                            debug!("Not following {} (nested more than one level)", deeper);
                        }
                    }
                }
            }
            SitemapEntry::IndexReference(child) => {
                ctx.stats.increment_info(InfoType::IndexReferenceSkipped);
                debug!("Skipping nested sitemap reference {}", child);
            }
        }
    }

    pages
}

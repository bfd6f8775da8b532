//! Human-readable discovery report.
//!
//! Pure presentation: everything here writes a finished `DiscoveryResult` to
//! any `Write` sink, so the exact stdout format is testable.

use std::io::{self, Write};

use crate::base_url::BaseUrl;
use crate::discovery::DiscoveryResult;

/// Writes the banner announcing the search.
pub fn write_banner<W: Write>(out: &mut W, base: &BaseUrl) -> io::Result<()> {
    writeln!(out, "\nSearching for sitemaps on {base}...\n")
}

fn write_url_list<W: Write>(out: &mut W, urls: &[String]) -> io::Result<()> {
    for url in urls {
        writeln!(out, " - {url}")?;
    }
    Ok(())
}

/// Writes the per-strategy sections and the final sorted union.
pub fn write_sitemap_sections<W: Write>(out: &mut W, result: &DiscoveryResult) -> io::Result<()> {
    match &result.robots_sitemaps {
        Some(sitemaps) if !sitemaps.is_empty() => {
            writeln!(out, "Found {} sitemap(s) in robots.txt:", sitemaps.len())?;
            write_url_list(out, sitemaps)?;
        }
        Some(_) => writeln!(out, "No Sitemap directives found in robots.txt.")?,
        None => writeln!(out, "robots.txt could not be retrieved.")?,
    }

    writeln!(out)?;

    if result.standard_sitemaps.is_empty() {
        writeln!(out, "No sitemaps found at standard locations.")?;
    } else {
        writeln!(
            out,
            "Found {} sitemap(s) at standard locations:",
            result.standard_sitemaps.len()
        )?;
        write_url_list(out, &result.standard_sitemaps)?;
    }

    if result.sitemaps.is_empty() {
        writeln!(out, "\nNo sitemaps found.")?;
    } else {
        writeln!(out, "\nAll found sitemaps:")?;
        for sitemap in &result.sitemaps {
            writeln!(out, "{sitemap}")?;
        }
    }
    Ok(())
}

/// Writes the collected pages.
pub fn write_pages<W: Write>(out: &mut W, pages: &[String]) -> io::Result<()> {
    if pages.is_empty() {
        writeln!(out, "\nNo pages found.")
    } else {
        writeln!(out, "\nFound {} page(s):", pages.len())?;
        write_url_list(out, pages)
    }
}

/// Writes the full report for one target.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &DiscoveryResult,
    show_pages: bool,
) -> io::Result<()> {
    write_banner(out, &result.base)?;
    write_sitemap_sections(out, result)?;
    if show_pages {
        write_pages(out, &result.pages)?;
    }
    Ok(())
}

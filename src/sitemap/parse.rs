//! Sitemap body decoding and `<loc>` extraction.
//!
//! Parsing goes through the tolerant HTML parser rather than a strict XML
//! reader: malformed documents still yield whatever `<loc>` elements survive.

use std::borrow::Cow;
use std::io::Read;
use std::sync::LazyLock;

use flate2::read::GzDecoder;
use scraper::{Html, Selector};

use crate::config::{EntryFilter, INDEX_REFERENCE_MARKER, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::SitemapParseError;

const LOC_SELECTOR_STR: &str = "loc";
const SITEMAP_INDEX_SELECTOR_STR: &str = "sitemapindex";
const URLSET_SELECTOR_STR: &str = "urlset";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

static LOC_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(LOC_SELECTOR_STR).expect("Failed to parse loc selector - this is a bug")
});

static SITEMAP_INDEX_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SITEMAP_INDEX_SELECTOR_STR)
        .expect("Failed to parse sitemapindex selector - this is a bug")
});

static URLSET_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(URLSET_SELECTOR_STR).expect("Failed to parse urlset selector - this is a bug")
});

/// Root element type of a sitemap document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    /// `<urlset>`: entries are pages.
    UrlSet,
    /// `<sitemapindex>`: entries are other sitemaps.
    Index,
    /// Neither root element was found.
    Unknown,
}

/// One `<loc>` entry, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapEntry {
    /// A leaf page.
    Page(String),
    /// A reference to another sitemap document.
    IndexReference(String),
}

/// A parsed sitemap document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSitemap {
    /// Root element type
    pub kind: SitemapKind,
    /// Trimmed, non-empty `<loc>` texts in document order.
    pub locations: Vec<String>,
}

/// Returns true if the body starts with the gzip magic number.
pub fn is_gzip(body: &[u8]) -> bool {
    body.starts_with(&GZIP_MAGIC)
}

/// Turns a fetched sitemap body into text, inflating it first if it is gzip.
///
/// # Errors
///
/// Returns `SitemapParseError::Gzip` if the body has the gzip magic number
/// but is corrupt, or inflates past `MAX_RESPONSE_BODY_SIZE`.
pub fn decode_body(body: &[u8]) -> Result<String, SitemapParseError> {
    if !is_gzip(body) {
        return Ok(String::from_utf8_lossy(body).into_owned());
    }

    let mut inflated = Vec::new();
    GzDecoder::new(body)
        .take(MAX_RESPONSE_BODY_SIZE as u64 + 1)
        .read_to_end(&mut inflated)?;
    if inflated.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(SitemapParseError::Gzip(std::io::Error::other(format!(
            "inflated sitemap exceeds {MAX_RESPONSE_BODY_SIZE} bytes"
        ))));
    }
    Ok(String::from_utf8_lossy(&inflated).into_owned())
}

/// The HTML tokenizer turns CDATA sections into comments, which would hide
/// `<loc><![CDATA[...]]></loc>` contents, so the markers are dropped up front.
fn strip_cdata(body: &str) -> Cow<'_, str> {
    if body.contains("<![CDATA[") {
        Cow::Owned(body.replace("<![CDATA[", "").replace("]]>", ""))
    } else {
        Cow::Borrowed(body)
    }
}

/// Parses a sitemap body and extracts every `<loc>` text in document order.
pub fn parse_sitemap(body: &str) -> ParsedSitemap {
    let document = Html::parse_document(&strip_cdata(body));

    let kind = if document.select(&SITEMAP_INDEX_SELECTOR).next().is_some() {
        SitemapKind::Index
    } else if document.select(&URLSET_SELECTOR).next().is_some() {
        SitemapKind::UrlSet
    } else {
        SitemapKind::Unknown
    };

    let locations = document
        .select(&LOC_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|loc| !loc.is_empty())
        .collect();

    ParsedSitemap { kind, locations }
}

/// The substring heuristic: any location containing `.xml` is treated as a
/// nested sitemap. Legitimate pages whose URL contains `.xml` are misclassified.
pub fn looks_like_index_reference(location: &str) -> bool {
    location.contains(INDEX_REFERENCE_MARKER)
}

/// Classifies the entries of a parsed sitemap according to `filter`.
pub fn classify(parsed: ParsedSitemap, filter: EntryFilter) -> Vec<SitemapEntry> {
    let by_substring = |loc: String| {
        if looks_like_index_reference(&loc) {
            SitemapEntry::IndexReference(loc)
        } else {
            SitemapEntry::Page(loc)
        }
    };

    match (filter, parsed.kind) {
        (EntryFilter::DocumentType, SitemapKind::Index) => parsed
            .locations
            .into_iter()
            .map(SitemapEntry::IndexReference)
            .collect(),
        (EntryFilter::DocumentType, SitemapKind::UrlSet) => {
            parsed.locations.into_iter().map(SitemapEntry::Page).collect()
        }
        _ => parsed.locations.into_iter().map(by_substring).collect(),
    }
}

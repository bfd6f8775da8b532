//! Page archival: fetch a page, strip metadata and scripts, save it to disk.

mod sanitize;

pub use sanitize::sanitize_html;

use std::path::{Path, PathBuf};

use log::debug;

use crate::error_handling::{ArchiveError, ErrorType, InfoType};
use crate::fetch::{fetch_text, DiscoveryContext};

const FALLBACK_FILE_STEM: &str = "index";

/// File name for an archived page: the URL's last non-empty path segment
/// (`index` for the site root) with unsafe characters replaced, plus `.html`.
pub fn archive_file_name(page_url: &str) -> String {
    let path = url::Url::parse(page_url)
        .map(|parsed| parsed.path().to_string())
        .unwrap_or_else(|_| page_url.to_string());

    let segment = path
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_FILE_STEM);

    let stem: String = segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // Never produce a hidden file or a path component like `..`.
    let stem = stem.trim_start_matches('.');
    if stem.is_empty() {
        format!("{FALLBACK_FILE_STEM}.html")
    } else {
        format!("{stem}.html")
    }
}

/// Fetches `page_url`, sanitizes it, and writes it into `out_dir`.
///
/// The directory is created if needed. An existing file of the same name is
/// overwritten. Returns the path written.
///
/// # Errors
///
/// Returns `ArchiveError::Fetch` if the page is not retrievable and
/// `ArchiveError::Io` if the directory or file cannot be written.
pub async fn archive_page(
    ctx: &DiscoveryContext,
    page_url: &str,
    out_dir: &Path,
) -> Result<PathBuf, ArchiveError> {
    let html = fetch_text(&ctx.client, page_url).await?;
    let sanitized = sanitize_html(&html);

    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| ArchiveError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;

    let path = out_dir.join(archive_file_name(page_url));
    tokio::fs::write(&path, sanitized)
        .await
        .map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;

    debug!("Archived {} to {:?}", page_url, path);
    Ok(path)
}

/// Archives every page, one at a time. Failures are counted, logged, and skipped.
///
/// Returns the URLs of the pages written, in input order.
pub async fn archive_pages(
    ctx: &DiscoveryContext,
    pages: &[String],
    out_dir: &Path,
) -> Vec<String> {
    let mut saved = Vec::new();
    for page in pages {
        match archive_page(ctx, page, out_dir).await {
            Ok(_) => {
                ctx.stats.increment_info(InfoType::PageArchived);
                saved.push(page.clone());
            }
            Err(e) => {
                ctx.stats.increment_error(ErrorType::PageArchiveError);
                log::warn!("Failed to archive {}: {}", page, e);
            }
        }
    }
    saved
}

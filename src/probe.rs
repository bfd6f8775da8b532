//! Standard-path sitemap probing.
//!
//! Checks each conventional sitemap location with a HEAD request. Probes may
//! run concurrently; results are always reported in candidate-list order.

use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::StatusCode;

use crate::base_url::BaseUrl;
use crate::config::STANDARD_SITEMAP_PATHS;
use crate::error_handling::{FetchError, InfoType};
use crate::fetch::{record_fetch_failure, DiscoveryContext};

/// Statuses that mean "this server does not do HEAD", not "this path is missing".
fn head_unsupported(status: StatusCode) -> bool {
    status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED
}

/// Returns true iff `url` answers 200 OK after redirects.
///
/// Uses HEAD, retrying once with GET when the server rejects HEAD itself.
/// The GET body is never read.
async fn probe_candidate(ctx: &DiscoveryContext, url: &str) -> bool {
    let status = match ctx.client.head(url).send().await {
        Ok(response) => response.status(),
        Err(source) => {
            let error = FetchError::Transport {
                url: url.to_string(),
                source,
            };
            record_fetch_failure(&ctx.stats, "sitemap probe", &error);
            return false;
        }
    };

    let status = if head_unsupported(status) {
        debug!("HEAD {} answered {}, retrying with GET", url, status);
        ctx.stats.increment_info(InfoType::HeadFallbackToGet);
        match ctx.client.get(url).send().await {
            Ok(response) => response.status(),
            Err(source) => {
                let error = FetchError::Transport {
                    url: url.to_string(),
                    source,
                };
                record_fetch_failure(&ctx.stats, "sitemap probe", &error);
                return false;
            }
        }
    } else {
        status
    };

    // Misses are the common case and not worth counting as failures.
    debug!("Probe {} -> {}", url, status);
    status == StatusCode::OK
}

/// Probes every standard sitemap location under `base`.
///
/// Returns the candidate URLs (as `{base}{candidate}`, not the post-redirect
/// URL) whose final status was exactly 200, in the fixed candidate order.
/// Failures of any kind simply exclude the candidate.
pub async fn probe_standard_paths(ctx: &DiscoveryContext, base: &BaseUrl) -> Vec<String> {
    let concurrency = ctx.config.probe_concurrency.max(1);

    // `buffered` yields in input order regardless of completion order.
    let results: Vec<(String, bool)> = stream::iter(STANDARD_SITEMAP_PATHS)
        .map(|path| {
            let url = base.join(path);
            async move {
                let found = probe_candidate(ctx, &url).await;
                (url, found)
            }
        })
        .buffered(concurrency)
        .collect()
        .await;

    results
        .into_iter()
        .filter_map(|(url, found)| found.then_some(url))
        .collect()
}

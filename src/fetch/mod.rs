//! HTTP fetching primitives shared by every discovery stage.
//!
//! Each function issues exactly one request (redirects aside) and reports any
//! outcome other than `200 OK` with a body as a [`FetchError`]. Callers decide
//! whether that is fatal; within discovery it never is.

mod context;

pub use context::DiscoveryContext;

use log::debug;
use reqwest::{Client, StatusCode};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{categorize_fetch_error, FetchError, ProcessingStats};

/// GETs `url` and returns the raw body of a `200 OK` response.
///
/// # Errors
///
/// - `FetchError::Transport` if the request itself fails (timeout, DNS, connect, redirects)
/// - `FetchError::Status` if the final status is anything other than 200
/// - `FetchError::Body` / `FetchError::BodyTooLarge` if the body cannot be read in full
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let too_large = || FetchError::BodyTooLarge {
        url: url.to_string(),
        limit: MAX_RESPONSE_BODY_SIZE,
    };
    if response
        .content_length()
        .is_some_and(|len| len > MAX_RESPONSE_BODY_SIZE as u64)
    {
        return Err(too_large());
    }

    let body = response.bytes().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(too_large());
    }

    debug!("Fetched {} ({} bytes)", url, body.len());
    Ok(body.to_vec())
}

/// GETs `url` and returns the body of a `200 OK` response as text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let body = fetch_bytes(client, url).await?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Counts a failed fetch and logs it with the operation it belonged to.
///
/// `Status` failures are routine during discovery (most probes 404), so they
/// are logged at debug; transport failures at warn.
pub fn record_fetch_failure(stats: &ProcessingStats, operation: &str, error: &FetchError) {
    stats.increment_error(categorize_fetch_error(error));
    match error {
        FetchError::Status { .. } => debug!("{operation}: {error}"),
        _ => log::warn!("{operation}: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[tokio::test]
    async fn test_fetch_text_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/robots.txt"))
                .respond_with(status_code(200).body("User-agent: *\n")),
        );

        let client = Client::new();
        let body = fetch_text(&client, &server.url_str("/robots.txt"))
            .await
            .unwrap();
        assert_eq!(body, "User-agent: *\n");
    }

    #[tokio::test]
    async fn test_fetch_bytes_non_200_is_status_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/robots.txt"))
                .respond_with(status_code(404)),
        );

        let client = Client::new();
        let err = fetch_bytes(&client, &server.url_str("/robots.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_bytes_204_is_not_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/empty"))
                .respond_with(status_code(204)),
        );

        let client = Client::new();
        let err = fetch_bytes(&client, &server.url_str("/empty"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_fetch_bytes_connection_refused_is_transport_error() {
        let client = Client::new();
        let err = fetch_bytes(&client, "http://127.0.0.1:1/robots.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn test_record_fetch_failure_counts_category() {
        let stats = ProcessingStats::new();
        let err = FetchError::Status {
            url: "https://example.com/sitemap.xml".to_string(),
            status: 503,
        };
        record_fetch_failure(&stats, "sitemap fetch", &err);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestServerError), 1);
    }
}

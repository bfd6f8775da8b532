//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Fatal error for a single discovery target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The target cannot be normalized into an http(s) scheme plus host.
    #[error("Invalid URL: {input} ({reason})")]
    InvalidUrl {
        /// The raw target string as supplied
        input: String,
        /// Why normalization rejected it
        reason: String,
    },
}

impl DiscoveryError {
    pub(crate) fn invalid_url(input: &str, reason: impl Into<String>) -> Self {
        DiscoveryError::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A failed HTTP fetch. Always recoverable at the point of occurrence.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Timeout, DNS failure, refused connection, redirect loop, etc.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// URL that was requested
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered, but not with 200 OK.
    #[error("{url} returned status {status}")]
    Status {
        /// URL that was requested
        url: String,
        /// HTTP status code received
        status: u16,
    },

    /// The response body could not be read.
    #[error("failed to read body of {url}: {source}")]
    Body {
        /// URL that was requested
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The response body exceeded the configured size limit.
    #[error("body of {url} exceeds {limit} bytes")]
    BodyTooLarge {
        /// URL that was requested
        url: String,
        /// Size limit in bytes
        limit: usize,
    },
}

/// A sitemap body that could not be decoded.
#[derive(Error, Debug)]
pub enum SitemapParseError {
    /// Body carried the gzip magic number but did not inflate.
    #[error("gzip decode failed: {0}")]
    Gzip(#[from] std::io::Error),
}

/// Errors from archiving a single page.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The archive directory or file could not be written.
    #[error("failed to write {path:?}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors opening or reading a batch target source.
#[derive(Error, Debug)]
pub enum TargetSourceError {
    /// The input file could not be opened.
    #[error("failed to open target list {path:?}: {source}")]
    Open {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Types of errors that can occur during discovery.
///
/// These are counted, never propagated: each one causes a single strategy,
/// probe, sitemap, or page to yield nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestBodyTooLarge,
    // Non-200 status codes
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestNotFound,          // 404 Not Found
    HttpRequestTooManyRequests,   // 429 Too Many Requests
    HttpRequestServerError,       // any 5xx
    HttpRequestStatusError,       // any other non-200
    // Parsing errors
    SitemapDecodeError,
    // Target errors
    InvalidTargetUrl,
    // Archival errors
    PageArchiveError,
}

/// Types of informational metrics that can occur during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    RobotsTxtUnavailable,  // robots.txt missing or unreachable
    HeadFallbackToGet,     // server rejected HEAD, probe retried with GET
    GzipSitemapDecoded,    // sitemap body was gzip-compressed
    IndexReferenceSkipped, // nested sitemap reference excluded from pages
    NestedIndexExpanded,   // nested sitemap reference followed one level
    PageArchived,          // page HTML written to disk
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestBodyTooLarge => "Response body too large",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::HttpRequestStatusError => "Unexpected HTTP status",
            ErrorType::SitemapDecodeError => "Sitemap decode error",
            ErrorType::InvalidTargetUrl => "Invalid target URL",
            ErrorType::PageArchiveError => "Page archive error",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::RobotsTxtUnavailable => "robots.txt unavailable",
            InfoType::HeadFallbackToGet => "HEAD rejected, retried with GET",
            InfoType::GzipSitemapDecoded => "Gzip sitemap decoded",
            InfoType::IndexReferenceSkipped => "Nested sitemap reference skipped",
            InfoType::NestedIndexExpanded => "Nested sitemap reference expanded",
            InfoType::PageArchived => "Page archived",
        }
    }
}

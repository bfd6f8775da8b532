//! Shared resources for one discovery run.
//!
//! This module defines the `DiscoveryContext` struct that groups the HTTP
//! client, configuration and statistics every discovery stage needs.

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::initialization::init_client;

/// Context containing all shared resources needed for discovery.
///
/// Cloning is cheap: the client shares its connection pool and the stats
/// tracker is reference-counted, so one context serves a whole batch.
#[derive(Clone)]
pub struct DiscoveryContext {
    /// HTTP client (redirects followed, per-request timeout applied)
    pub client: reqwest::Client,
    /// Discovery options
    pub config: Arc<Config>,
    /// Error statistics tracker
    pub stats: Arc<ProcessingStats>,
}

impl DiscoveryContext {
    /// Creates a new `DiscoveryContext` from an existing client.
    pub fn new(client: reqwest::Client, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Builds the HTTP client from `config` and wraps it in a context.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: Config) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self::new(client, config))
    }
}

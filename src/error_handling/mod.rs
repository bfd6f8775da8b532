//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each failure domain
//! - Processing statistics tracking (errors and info metrics)
//! - Error categorization for failed HTTP operations
//!
//! Only `DiscoveryError::InvalidUrl` is fatal (for one target). Every other failure
//! is categorized, counted in `ProcessingStats`, logged, and swallowed.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_fetch_error;
pub use stats::ProcessingStats;
pub use types::{
    ArchiveError, DiscoveryError, ErrorType, FetchError, InfoType, InitializationError,
    SitemapParseError, TargetSourceError,
};

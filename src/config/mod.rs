//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, candidate sitemap paths)
//! - CLI option types and parsing
//! - The library-level `Config` used by discovery

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, EntryFilter, LogFormat, LogLevel, Opt};

//! Configuration management for medsync.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! medsync uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`MEDSYNC_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medsync::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("medsync.toml")?;
//!
//! println!("Remote store: {}", config.remote.base_url);
//! println!("Empty-retry delay: {}ms", config.sync.empty_retry_delay_ms);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`RemoteStoreConfig`] - Remote store connection and credentials
//! - [`SyncConfig`] - Synchronization behavior
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [remote]
//! base_url = "https://store.example.com/rest/v1"
//! api_key = "${MEDSYNC_REMOTE_API_KEY}"
//! timeout_seconds = 30
//!
//! [sync]
//! empty_retry_delay_ms = 1200
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, LoggingConfig, MedSyncConfig, RemoteStoreConfig, SyncConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};

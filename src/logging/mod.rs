//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output for development
//! - JSON-formatted local file logs with rotation
//! - Configurable log levels
//!
//! Diagnostic branches in the sync core attach their classification as a
//! structured field (e.g. the consistency verifier's `anomaly` field)
//! rather than prose, so log consumers can aggregate on it.
//!
//! # Example
//!
//! ```no_run
//! use medsync::logging::init_logging;
//! use medsync::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::warn!(anomaly = "none_for_patient", "Committing verified empty result");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

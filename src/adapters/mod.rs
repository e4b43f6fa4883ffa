//! External system integrations for medsync.
//!
//! This module provides adapters for the systems the sync core collaborates
//! with:
//!
//! - [`store`] - Remote relational store reached over REST (trait-based)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with mock implementations. The remote store is
//! consumed exclusively through the [`store::RemoteStore`] trait, so the
//! sync coordinator, consistency verifier, and status transition manager
//! never see HTTP types.
//!
//! ```no_run
//! use medsync::adapters::store::{RemoteStore, RestStore};
//! use medsync::config::RemoteStoreConfig;
//! use std::sync::Arc;
//!
//! # fn example() -> medsync::domain::Result<()> {
//! let config = RemoteStoreConfig::default();
//! let remote: Arc<dyn RemoteStore> = Arc::new(RestStore::new(&config)?);
//! // Hand the trait object to the sync core
//! # Ok(())
//! # }
//! ```

pub mod store;

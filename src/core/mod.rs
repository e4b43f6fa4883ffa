//! Core business logic for medsync.
//!
//! This module contains the synchronization core that keeps the local
//! appointment collection consistent with the remote store.
//!
//! # Modules
//!
//! - [`store`] - Local appointment store: ordered, observable, in-memory
//! - [`session`] - Current-user session collaborator
//! - [`sync`] - Sync coordinator and consistency verifier (the refresh path)
//! - [`status`] - Status transition manager (cancel/complete)
//! - [`service`] - Facade exposed to presentation code
//!
//! # Shared-Resource Policy
//!
//! The local appointment store is the only shared mutable resource. It is
//! mutated exclusively by the components above; presentation code may only
//! read (`upcoming()`, snapshots) or subscribe to change notifications.
//!
//! # Example
//!
//! ```no_run
//! use medsync::config::load_config;
//! use medsync::core::service::AppointmentService;
//! use medsync::domain::UserId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("medsync.toml")?;
//! let service = AppointmentService::from_config(&config)?;
//!
//! service.session().sign_in(UserId::new("user-1")?);
//! service.refresh().await;
//!
//! println!("{} upcoming appointments", service.upcoming().len());
//! # Ok(())
//! # }
//! ```

pub mod service;
pub mod session;
pub mod status;
pub mod store;
pub mod sync;

pub use service::AppointmentService;

// MedSync - Appointment Synchronization Core
// Copyright (c) 2026 MedSync Contributors
// Licensed under the MIT License

//! # medsync - Appointment Synchronization Core
//!
//! medsync keeps a local, observable collection of appointment records
//! consistent with a remote relational store reached over plain HTTP/REST,
//! across concurrent refresh requests, partial failures, and status
//! transitions that must be reflected both locally and remotely.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** a patient's appointments through an equality-filtered
//!   REST lookup, with identity resolution from the signed-in user
//! - **Holding** the authoritative client-side collection in an ordered,
//!   observable in-memory store
//! - **Transitioning** appointment status (cancel/complete) optimistically,
//!   with attempt-once remote write-through
//! - **Verifying** suspect empty fetches so a transient backend
//!   inconsistency never erases a non-empty local view
//!
//! ## Architecture
//!
//! medsync follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Sync logic (store, session, sync, status, service)
//! - [`adapters`] - External integrations (remote store gateway)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medsync::config::load_config;
//! use medsync::core::service::AppointmentService;
//! use medsync::domain::UserId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("medsync.toml")?;
//!
//!     // Wire the sync core
//!     let service = AppointmentService::from_config(&config)?;
//!
//!     // Sign in and sync
//!     service.session().sign_in(UserId::new("user-1")?);
//!     service.refresh().await;
//!
//!     for appointment in service.upcoming() {
//!         println!("{} on {}", appointment.id, appointment.date);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency Model
//!
//! The local store is the single source of truth for presentation code,
//! which only reads it or subscribes to change notifications. Refresh is a
//! best-effort background operation: failures are contained inside the core
//! and never surface as error values, only as "the list didn't change".
//! A refresh that would shrink a non-empty view to empty is retried once
//! before the empty result is believed:
//!
//! ```rust,no_run
//! use medsync::core::store::StoreChange;
//! # async fn example(service: medsync::core::service::AppointmentService) {
//! let mut changes = service.subscribe();
//! service.refresh().await;
//! while let Ok(change) = changes.recv().await {
//!     if let StoreChange::Replaced { count } = change {
//!         println!("view now holds {count} records");
//!     }
//! }
//! # }
//! ```
//!
//! ## Status Transitions
//!
//! Transitions are monotone (`upcoming → {cancelled, completed}`) and
//! optimistic: the local store reflects the user's action before the remote
//! write completes, and a failed remote write is logged rather than rolled
//! back; a later refresh reconciles any divergence.
//!
//! ## Error Handling
//!
//! medsync uses the [`domain::MedSyncError`] type for all errors:
//!
//! ```rust,no_run
//! use medsync::domain::MedSyncError;
//!
//! fn example() -> Result<(), MedSyncError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = medsync::config::load_config("medsync.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! medsync uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting refresh");
//! warn!(anomaly = "filter_mismatch", "Remote store anomaly");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

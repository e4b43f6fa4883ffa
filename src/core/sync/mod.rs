//! Appointment synchronization
//!
//! This module owns the refresh path: the [`SyncCoordinator`] resolves the
//! signed-in user to a patient identity, fetches that patient's
//! appointments through the remote store gateway, and commits the result to
//! the local store through the [`ConsistencyVerifier`], which guards
//! against a spurious empty fetch erasing a non-empty view.
//!
//! # Refresh Workflow
//!
//! 1. **Single-flight**: a cycle already in flight drops the new request
//! 2. **Identity**: session user → patient row (`patients.user_id`)
//! 3. **Fetch**: filtered read of `appointments.patient_id`
//! 4. **Verify**: suspect empty results are retried once, then classified
//! 5. **Commit**: `replace_all` swaps the store atomically
//!
//! Failures at any step are logged and swallowed; the store keeps its
//! previous contents.

pub mod coordinator;
pub mod verifier;

pub use coordinator::SyncCoordinator;
pub use verifier::{ConsistencyVerifier, EmptyFetchAnomaly};

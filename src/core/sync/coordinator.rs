//! Sync coordinator
//!
//! Fetches authoritative appointment data for the signed-in user and
//! reconciles it into the local appointment store, with at most one fetch
//! cycle in flight at a time. Refresh is a best-effort background
//! operation: every failure is logged and swallowed here, and the store is
//! left untouched, since stale-but-present data beats an empty view.

use super::verifier::ConsistencyVerifier;
use crate::adapters::store::{collections, models, RemoteStore};
use crate::core::session::Session;
use crate::core::store::LocalAppointmentStore;
use crate::domain::{MedSyncError, PatientId, Result, UserId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Releases the single-flight flag when a cycle ends, however it ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Orchestrates one refresh cycle: identity resolution, fetch, verified
/// commit
///
/// # Example
///
/// ```no_run
/// use medsync::adapters::store::{RemoteStore, RestStore};
/// use medsync::config::RemoteStoreConfig;
/// use medsync::core::session::Session;
/// use medsync::core::store::LocalAppointmentStore;
/// use medsync::core::sync::SyncCoordinator;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # fn example() -> medsync::domain::Result<()> {
/// let remote: Arc<dyn RemoteStore> = Arc::new(RestStore::new(&RemoteStoreConfig::default())?);
/// let store = Arc::new(LocalAppointmentStore::new());
/// let session = Arc::new(Session::new());
/// let coordinator = SyncCoordinator::new(remote, store, session, Duration::from_millis(1200));
/// # Ok(())
/// # }
/// ```
pub struct SyncCoordinator {
    remote: Arc<dyn RemoteStore>,
    store: Arc<LocalAppointmentStore>,
    session: Arc<Session>,
    verifier: ConsistencyVerifier,

    /// Single-flight guard: a refresh requested while one is in flight is
    /// dropped, never queued
    in_flight: AtomicBool,
}

impl SyncCoordinator {
    /// Creates a coordinator over the given collaborators
    ///
    /// `empty_retry_delay` is the fixed backoff the consistency verifier
    /// waits before its single retry of a suspect empty fetch.
    pub fn new(
        remote: Arc<dyn RemoteStore>,
        store: Arc<LocalAppointmentStore>,
        session: Arc<Session>,
        empty_retry_delay: Duration,
    ) -> Self {
        let verifier = ConsistencyVerifier::new(remote.clone(), empty_retry_delay);
        Self {
            remote,
            store,
            session,
            verifier,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Runs one refresh cycle
    ///
    /// Returns immediately when no user is signed in or when another cycle
    /// is already in flight. Never surfaces an error: failures are logged
    /// and the local store keeps its previous contents.
    pub async fn refresh(&self) {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Refresh already in flight; dropping request");
            return;
        }
        let _guard = InFlightGuard(&self.in_flight);

        let Some(user) = self.session.current_user() else {
            tracing::trace!("No signed-in user; nothing to sync");
            return;
        };

        let cycle = Uuid::new_v4();
        tracing::debug!(cycle = %cycle, user_id = %user, "Starting refresh cycle");

        if let Err(e) = self.run_cycle(cycle, &user).await {
            tracing::warn!(
                cycle = %cycle,
                user_id = %user,
                error = %e,
                "Refresh failed; keeping existing appointments"
            );
        }
    }

    async fn run_cycle(&self, cycle: Uuid, user: &UserId) -> Result<()> {
        let Some(patient) = self.resolve_patient(user).await? else {
            tracing::info!(
                cycle = %cycle,
                user_id = %user,
                "No patient record for user yet; nothing to sync"
            );
            return Ok(());
        };

        let rows = self
            .remote
            .select_eq(collections::APPOINTMENTS, "patient_id", patient.as_str())
            .await?;
        let records = models::decode_rows(&rows);

        tracing::debug!(
            cycle = %cycle,
            patient_id = %patient,
            fetched = records.len(),
            "Fetched appointments"
        );

        self.verifier
            .reconcile(cycle, &patient, records, &self.store)
            .await
    }

    /// Resolve the signed-in user to a patient identity
    ///
    /// `Ok(None)` means the user has no patient row yet: a legitimate
    /// pre-registration state, not an error.
    async fn resolve_patient(&self, user: &UserId) -> Result<Option<PatientId>> {
        let rows = self
            .remote
            .select_eq(collections::PATIENTS, "user_id", user.as_str())
            .await?;

        let Some(row) = rows.first() else {
            return Ok(None);
        };

        let id = row.get("id").and_then(|v| v.as_str()).ok_or_else(|| {
            MedSyncError::Serialization("Patient row is missing an id".to_string())
        })?;

        PatientId::new(id)
            .map(Some)
            .map_err(MedSyncError::Serialization)
    }
}

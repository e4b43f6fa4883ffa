//! Status transition manager
//!
//! Applies cancel/complete transitions: optimistic local write first, then
//! an attempt-once remote field update, then a best-effort refresh to pull
//! server-side side effects (e.g. slot release) back into the local store.
//! The optimistic state is never rolled back on remote failure; a later
//! refresh reconciles any divergence.

use crate::adapters::store::{collections, RemoteStore};
use crate::core::store::LocalAppointmentStore;
use crate::core::sync::SyncCoordinator;
use crate::domain::{AppointmentId, AppointmentStatus, MedSyncError, Result};
use serde_json::json;
use std::sync::Arc;

/// Applies the monotone status state machine locally and remotely
pub struct StatusTransitionManager {
    remote: Arc<dyn RemoteStore>,
    store: Arc<LocalAppointmentStore>,
    coordinator: Arc<SyncCoordinator>,
}

impl StatusTransitionManager {
    /// Creates a manager over the given collaborators
    pub fn new(
        remote: Arc<dyn RemoteStore>,
        store: Arc<LocalAppointmentStore>,
        coordinator: Arc<SyncCoordinator>,
    ) -> Self {
        Self {
            remote,
            store,
            coordinator,
        }
    }

    /// Cancels an upcoming appointment
    ///
    /// No-op if the record is already cancelled or completed. The local
    /// store reflects the cancellation before any network response arrives.
    pub async fn cancel(&self, id: &AppointmentId) {
        self.apply(id, AppointmentStatus::Cancelled).await;
    }

    /// Marks an upcoming appointment as completed
    ///
    /// No-op if the record is already cancelled or completed. The local
    /// store reflects the completion before any network response arrives.
    pub async fn complete(&self, id: &AppointmentId) {
        self.apply(id, AppointmentStatus::Completed).await;
    }

    async fn apply(&self, id: &AppointmentId, target: AppointmentStatus) {
        match self.try_apply(id, target).await {
            Ok(()) => {}
            Err(MedSyncError::NotFound(msg)) => {
                tracing::warn!(
                    appointment_id = %id,
                    target = %target,
                    "Transition aborted: {msg}"
                );
            }
            Err(e) => {
                tracing::warn!(
                    appointment_id = %id,
                    target = %target,
                    error = %e,
                    "Remote status update failed; keeping optimistic local state"
                );
            }
        }
    }

    /// Run one transition
    ///
    /// # Errors
    ///
    /// `NotFound` if the record is not held locally (no remote call is made
    /// for a record the client does not know about); a remote-store error
    /// if the write-through fails. By the time either error is returned the
    /// local optimistic state, if any, is already committed.
    async fn try_apply(&self, id: &AppointmentId, target: AppointmentStatus) -> Result<()> {
        let record = self.store.get(id).ok_or_else(|| {
            MedSyncError::NotFound(format!("appointment {id} is not in the local store"))
        })?;

        if !record.status.can_transition_to(target) {
            tracing::debug!(
                appointment_id = %id,
                status = %record.status,
                target = %target,
                "Transition is a no-op from the current status"
            );
            return Ok(());
        }

        // Optimistic update: the UI sees the new status without waiting on
        // the network
        self.store.upsert(record.with_status(target));

        self.remote
            .update_fields(
                collections::APPOINTMENTS,
                id.as_str(),
                json!({ "status": target.as_str() }),
            )
            .await?;

        tracing::info!(appointment_id = %id, status = %target, "Remote status updated");

        // Best-effort: may be dropped by the single-flight guard
        self.coordinator.refresh().await;
        Ok(())
    }
}

//! Consistency verifier
//!
//! Prevents a spurious empty fetch from erasing a non-empty local view. A
//! shrink from N>0 records to 0 is treated as suspect, not authoritative:
//! the same query is retried once after a fixed delay, and only a
//! twice-confirmed empty result is committed. This is the only retry policy
//! in the system; every other remote call is attempt-once.

use crate::adapters::store::{collections, models, RemoteStore};
use crate::core::store::LocalAppointmentStore;
use crate::domain::{AppointmentRecord, MedSyncError, PatientId, Result};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Classification of a twice-confirmed empty fetch
///
/// Produced by the diagnostic step and attached to the commit log event.
/// Informational only: no classification changes what is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyFetchAnomaly {
    /// The appointments collection holds no rows at all
    CollectionEmpty,
    /// Rows exist, but none reference this patient; genuinely empty
    NoneForPatient,
    /// Rows for this patient exist unfiltered, yet the filtered query
    /// missed them
    FilterMismatch,
    /// The diagnostic read itself failed; nothing to classify
    DiagnosticUnavailable,
}

impl fmt::Display for EmptyFetchAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CollectionEmpty => "collection_empty",
            Self::NoneForPatient => "none_for_patient",
            Self::FilterMismatch => "filter_mismatch",
            Self::DiagnosticUnavailable => "diagnostic_unavailable",
        };
        write!(f, "{s}")
    }
}

/// Gate between a fetched result and the local store
///
/// Every refresh commits through [`reconcile`](Self::reconcile); the
/// coordinator never calls `replace_all` directly.
pub struct ConsistencyVerifier {
    remote: Arc<dyn RemoteStore>,

    /// Fixed backoff before the single retry
    retry_delay: Duration,
}

impl ConsistencyVerifier {
    /// Creates a verifier over the given gateway
    pub fn new(remote: Arc<dyn RemoteStore>, retry_delay: Duration) -> Self {
        Self {
            remote,
            retry_delay,
        }
    }

    /// Re-issue the filtered appointments query for the patient
    async fn refetch(&self, patient: &PatientId) -> Result<Vec<AppointmentRecord>> {
        let rows = self
            .remote
            .select_eq(collections::APPOINTMENTS, "patient_id", patient.as_str())
            .await?;
        Ok(models::decode_rows(&rows))
    }

    /// Verify a fetched result and commit it to the store
    ///
    /// - A non-empty result commits immediately via `replace_all`.
    /// - An empty result against an already-empty store commits immediately
    ///   (nothing to lose; the retry guards loss, not emptiness).
    /// - An empty result against a non-empty store is retried once after
    ///   the fixed delay; a non-empty retry commits its records, a still
    ///   empty retry is classified diagnostically and then committed.
    ///
    /// # Errors
    ///
    /// Returns an error if the retry fetch itself fails; in that case the
    /// store is left untouched. A failed diagnostic never blocks the
    /// commit.
    pub async fn reconcile(
        &self,
        cycle: Uuid,
        patient: &PatientId,
        fetched: Vec<AppointmentRecord>,
        store: &LocalAppointmentStore,
    ) -> Result<()> {
        if !fetched.is_empty() {
            let count = fetched.len();
            store.replace_all(fetched);
            tracing::debug!(cycle = %cycle, count = count, "Committed fetched appointments");
            return Ok(());
        }

        let held = store.len();
        if held == 0 {
            store.replace_all(Vec::new());
            tracing::debug!(cycle = %cycle, "Patient has no appointments");
            return Ok(());
        }

        tracing::warn!(
            cycle = %cycle,
            patient_id = %patient,
            held = held,
            retry_delay_ms = self.retry_delay.as_millis() as u64,
            "Empty fetch against a non-empty store; retrying once before committing"
        );
        tokio::time::sleep(self.retry_delay).await;

        let retried = self.refetch(patient).await?;
        if !retried.is_empty() {
            let count = retried.len();
            store.replace_all(retried);
            tracing::info!(
                cycle = %cycle,
                patient_id = %patient,
                recovered = count,
                "Retry recovered appointments; first empty result was transient"
            );
            return Ok(());
        }

        let anomaly = self.classify(patient).await;
        if anomaly == EmptyFetchAnomaly::FilterMismatch {
            let err = MedSyncError::Inconsistent(format!(
                "Unfiltered scan holds rows for patient {patient} that the filtered query missed"
            ));
            tracing::error!(cycle = %cycle, anomaly = %anomaly, error = %err, "Remote store anomaly");
        }

        tracing::warn!(
            cycle = %cycle,
            patient_id = %patient,
            anomaly = %anomaly,
            dropped = held,
            "Empty result confirmed by retry; committing empty store"
        );
        store.replace_all(Vec::new());
        Ok(())
    }

    /// Classify a twice-confirmed empty result
    ///
    /// Runs one unfiltered read of the appointments collection. Purely
    /// informational; never mutates the store.
    async fn classify(&self, patient: &PatientId) -> EmptyFetchAnomaly {
        let rows = match self.remote.select_all(collections::APPOINTMENTS).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::debug!(error = %e, "Diagnostic scan failed");
                return EmptyFetchAnomaly::DiagnosticUnavailable;
            }
        };

        if rows.is_empty() {
            return EmptyFetchAnomaly::CollectionEmpty;
        }

        let ours = rows
            .iter()
            .filter(|row| {
                row.get("patient_id").and_then(|v| v.as_str()) == Some(patient.as_str())
            })
            .count();

        if ours > 0 {
            EmptyFetchAnomaly::FilterMismatch
        } else {
            EmptyFetchAnomaly::NoneForPatient
        }
    }
}

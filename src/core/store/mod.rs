//! Local appointment store
//!
//! The in-memory, insertion-ordered, observable collection of appointment
//! records. It is the single source of truth for presentation code, which
//! only ever reads snapshots or subscribes to change notifications; all
//! mutation happens through the sync coordinator, the consistency verifier,
//! and the status transition manager.
//!
//! Every operation is a synchronous in-memory mutation. The store never
//! blocks and never suspends; notification delivery rides on a broadcast
//! channel so UI-thread affinity is a property of the subscriber, not of
//! this store.

use crate::domain::{AppointmentId, AppointmentRecord, AppointmentStatus};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

/// Capacity of the change-notification channel; slow subscribers observing
/// a lagged receiver re-read the store rather than replaying events
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// A change observed on the local appointment store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// A single record was inserted or replaced
    Upserted(AppointmentId),
    /// The whole collection was atomically swapped
    Replaced { count: usize },
    /// A single record was removed
    Removed(AppointmentId),
    /// The collection was emptied (e.g. on sign-out)
    Cleared,
}

/// In-memory observable collection of appointment records
///
/// Records keep insertion order. Each `id` appears at most once; inserting
/// a record whose id is already present is a merge, never a duplicate.
/// Records leave the store only through [`remove`](Self::remove) and
/// [`clear`](Self::clear); a refresh can only swap the collection through
/// [`replace_all`](Self::replace_all), which the consistency verifier
/// gates.
///
/// # Examples
///
/// ```
/// use medsync::core::store::LocalAppointmentStore;
///
/// let store = LocalAppointmentStore::new();
/// let mut changes = store.subscribe();
/// assert!(store.is_empty());
/// ```
pub struct LocalAppointmentStore {
    records: RwLock<Vec<AppointmentRecord>>,
    changes: broadcast::Sender<StoreChange>,
}

impl LocalAppointmentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            records: RwLock::new(Vec::new()),
            changes,
        }
    }

    // Lock poisoning only matters if a writer panicked mid-mutation; every
    // mutation here is a single Vec operation, so the inner state is intact
    // and the guard can be recovered.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<AppointmentRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<AppointmentRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }

    fn notify(&self, change: StoreChange) {
        // No subscribers is fine; presentation may not have attached yet
        let _ = self.changes.send(change);
    }

    /// Inserts a record if its id is not present; otherwise a no-op
    ///
    /// Returns `true` if the record was inserted.
    pub fn add(&self, record: AppointmentRecord) -> bool {
        let inserted = {
            let mut records = self.write_guard();
            if records.iter().any(|r| r.id == record.id) {
                false
            } else {
                records.push(record.clone());
                true
            }
        };
        if inserted {
            self.notify(StoreChange::Upserted(record.id));
        }
        inserted
    }

    /// Replaces the record with the same id, or inserts it
    ///
    /// A replaced record keeps its position in store order.
    pub fn upsert(&self, record: AppointmentRecord) {
        let id = record.id.clone();
        {
            let mut records = self.write_guard();
            match records.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => records.push(record),
            }
        }
        self.notify(StoreChange::Upserted(id));
    }

    /// Atomically swaps the entire collection
    ///
    /// Used to commit a verified fetch. Duplicate ids in the input collapse
    /// to their first occurrence, matching [`add`](Self::add)'s
    /// no-op-on-duplicate semantics. Observers see either the old or the
    /// new collection, never an intermediate state.
    pub fn replace_all(&self, records: Vec<AppointmentRecord>) {
        let mut deduped: Vec<AppointmentRecord> = Vec::with_capacity(records.len());
        for record in records {
            if !deduped.iter().any(|r| r.id == record.id) {
                deduped.push(record);
            }
        }
        let count = deduped.len();
        *self.write_guard() = deduped;
        self.notify(StoreChange::Replaced { count });
    }

    /// Removes one record by id
    ///
    /// Returns `true` if a record was removed.
    pub fn remove(&self, id: &AppointmentId) -> bool {
        let removed = {
            let mut records = self.write_guard();
            let before = records.len();
            records.retain(|r| r.id != *id);
            records.len() != before
        };
        if removed {
            self.notify(StoreChange::Removed(id.clone()));
        }
        removed
    }

    /// Removes all records (e.g. on sign-out)
    pub fn clear(&self) {
        self.write_guard().clear();
        self.notify(StoreChange::Cleared);
    }

    /// Returns a copy of the record with the given id
    pub fn get(&self, id: &AppointmentId) -> Option<AppointmentRecord> {
        self.read_guard().iter().find(|r| r.id == *id).cloned()
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Copy of the full collection in store order
    pub fn snapshot(&self) -> Vec<AppointmentRecord> {
        self.read_guard().clone()
    }

    /// All records with status `upcoming`, in store order
    pub fn upcoming(&self) -> Vec<AppointmentRecord> {
        self.read_guard()
            .iter()
            .filter(|r| r.status == AppointmentStatus::Upcoming)
            .cloned()
            .collect()
    }

    /// Subscribes to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }
}

impl Default for LocalAppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

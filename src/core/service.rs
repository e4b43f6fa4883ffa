//! Presentation facade
//!
//! [`AppointmentService`] is the only surface presentation code touches:
//! trigger a refresh, apply a transition, read the upcoming list, subscribe
//! to change notifications, clear on sign-out. It never returns raw error
//! objects: every failure is contained inside the core and surfaces only
//! as "the view didn't update".

use crate::adapters::store::{RemoteStore, RestStore};
use crate::config::MedSyncConfig;
use crate::core::session::Session;
use crate::core::status::StatusTransitionManager;
use crate::core::store::{LocalAppointmentStore, StoreChange};
use crate::core::sync::SyncCoordinator;
use crate::domain::{AppointmentId, AppointmentRecord, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Facade wiring the local store, session, sync coordinator, and status
/// transition manager
///
/// Constructed explicitly and handed to presentation code via composition;
/// there is no global accessor.
///
/// # Example
///
/// ```no_run
/// use medsync::config::load_config;
/// use medsync::core::service::AppointmentService;
/// use medsync::domain::UserId;
///
/// # async fn example() -> medsync::domain::Result<()> {
/// let config = load_config("medsync.toml")?;
/// let service = AppointmentService::from_config(&config)?;
///
/// service.session().sign_in(UserId::new("user-1").unwrap());
/// service.refresh().await;
/// for appointment in service.upcoming() {
///     println!("{} on {}", appointment.id, appointment.date);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AppointmentService {
    store: Arc<LocalAppointmentStore>,
    session: Arc<Session>,
    coordinator: Arc<SyncCoordinator>,
    transitions: StatusTransitionManager,
}

impl AppointmentService {
    /// Wires the core around an injected remote store gateway
    pub fn new(
        remote: Arc<dyn RemoteStore>,
        session: Arc<Session>,
        empty_retry_delay: Duration,
    ) -> Self {
        let store = Arc::new(LocalAppointmentStore::new());
        let coordinator = Arc::new(SyncCoordinator::new(
            remote.clone(),
            store.clone(),
            session.clone(),
            empty_retry_delay,
        ));
        let transitions =
            StatusTransitionManager::new(remote, store.clone(), coordinator.clone());

        Self {
            store,
            session,
            coordinator,
            transitions,
        }
    }

    /// Builds the production wiring from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the REST gateway cannot be built.
    pub fn from_config(config: &MedSyncConfig) -> Result<Self> {
        let remote: Arc<dyn RemoteStore> = Arc::new(RestStore::new(&config.remote)?);
        Ok(Self::new(
            remote,
            Arc::new(Session::new()),
            Duration::from_millis(config.sync.empty_retry_delay_ms),
        ))
    }

    /// Triggers one best-effort refresh cycle
    pub async fn refresh(&self) {
        self.coordinator.refresh().await;
    }

    /// Cancels an upcoming appointment
    pub async fn cancel(&self, id: &AppointmentId) {
        self.transitions.cancel(id).await;
    }

    /// Marks an upcoming appointment as completed
    pub async fn complete(&self, id: &AppointmentId) {
        self.transitions.complete(id).await;
    }

    /// All upcoming appointments, in store order
    pub fn upcoming(&self) -> Vec<AppointmentRecord> {
        self.store.upcoming()
    }

    /// Subscribes to store change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.store.subscribe()
    }

    /// Empties the local store (e.g. on sign-out)
    pub fn clear(&self) {
        self.store.clear();
    }

    /// The underlying local store
    pub fn store(&self) -> &Arc<LocalAppointmentStore> {
        &self.store
    }

    /// The session collaborator
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }
}

//! Integration tests for the presentation facade: the surface a UI layer
//! actually touches.

mod common;

use common::{appointment_row, MockRemoteStore, Scripted};
use medsync::adapters::store::RemoteStore;
use medsync::core::service::AppointmentService;
use medsync::core::session::Session;
use medsync::core::store::StoreChange;
use medsync::domain::{AppointmentId, AppointmentStatus, UserId};
use std::sync::Arc;
use std::time::Duration;

fn service(mock: &Arc<MockRemoteStore>) -> AppointmentService {
    let remote: Arc<dyn RemoteStore> = mock.clone();
    AppointmentService::new(remote, Arc::new(Session::new()), Duration::from_millis(20))
}

#[tokio::test]
async fn test_sign_in_refresh_and_read() {
    let mock = Arc::new(MockRemoteStore::new());
    mock.add_patient("user-1", "pat-1");
    mock.push_appointments(Scripted::Rows(vec![appointment_row("B2", "pat-1", "upcoming")]));

    let service = service(&mock);
    service.session().sign_in(UserId::new("user-1").unwrap());

    let mut changes = service.subscribe();
    service.refresh().await;

    let upcoming = service.upcoming();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id.as_str(), "B2");
    assert_eq!(changes.try_recv().unwrap(), StoreChange::Replaced { count: 1 });
}

#[tokio::test]
async fn test_cancel_through_facade_is_observable() {
    let mock = Arc::new(MockRemoteStore::new());
    mock.add_patient("user-1", "pat-1");
    mock.push_appointments(Scripted::Rows(vec![appointment_row("B2", "pat-1", "upcoming")]));
    // Post-transition refetch returns the server-side view
    mock.push_appointments(Scripted::Rows(vec![appointment_row("B2", "pat-1", "cancelled")]));

    let service = service(&mock);
    service.session().sign_in(UserId::new("user-1").unwrap());
    service.refresh().await;

    service.cancel(&AppointmentId::new("B2").unwrap()).await;

    assert!(service.upcoming().is_empty());
    let record = service.store().get(&AppointmentId::new("B2").unwrap()).unwrap();
    assert_eq!(record.status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn test_clear_on_sign_out() {
    let mock = Arc::new(MockRemoteStore::new());
    mock.add_patient("user-1", "pat-1");
    mock.push_appointments(Scripted::Rows(vec![appointment_row("B2", "pat-1", "upcoming")]));

    let service = service(&mock);
    service.session().sign_in(UserId::new("user-1").unwrap());
    service.refresh().await;
    assert_eq!(service.upcoming().len(), 1);

    service.session().sign_out();
    service.clear();

    assert!(service.upcoming().is_empty());

    // Signed out: a refresh is a no-op and leaves the store empty
    service.refresh().await;
    assert!(service.store().is_empty());
}

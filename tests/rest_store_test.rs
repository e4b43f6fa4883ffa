//! HTTP-level tests for the REST gateway, against a mock server.

use medsync::adapters::store::{RemoteStore, RestStore};
use medsync::config::{secret_string, RemoteStoreConfig};
use medsync::domain::{MedSyncError, RemoteStoreError};
use mockito::Matcher;
use serde_json::json;

fn config_for(server: &mockito::ServerGuard) -> RemoteStoreConfig {
    RemoteStoreConfig {
        base_url: server.url(),
        api_key: Some(secret_string("service-key".to_string())),
        timeout_seconds: 5,
        tls_verify: true,
    }
}

#[tokio::test]
async fn test_select_eq_builds_filter_and_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/appointments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "*".into()),
            Matcher::UrlEncoded("patient_id".into(), "eq.pat-1".into()),
        ]))
        .match_header("apikey", "service-key")
        .match_header("authorization", "Bearer service-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": "apt-1",
                "patient_id": "pat-1",
                "status": "upcoming"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    let rows = store
        .select_eq("appointments", "patient_id", "pat-1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("id").unwrap(), "apt-1");
}

#[tokio::test]
async fn test_select_all_has_no_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/appointments")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    let rows = store.select_all("appointments").await.unwrap();

    mock.assert_async().await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_select_maps_rejection_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/appointments")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    let err = store.select_all("appointments").await.unwrap_err();

    match err {
        MedSyncError::Remote(RemoteStoreError::Rejected { status, .. }) => {
            assert_eq!(status, 503);
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_select_maps_invalid_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/appointments")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    let err = store.select_all("appointments").await.unwrap_err();

    assert!(matches!(
        err,
        MedSyncError::Remote(RemoteStoreError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_update_patches_by_id_and_accepts_204() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/appointments")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.apt-1".into()))
        .match_header("prefer", "return=minimal")
        .match_body(Matcher::Json(json!({ "status": "cancelled" })))
        .with_status(204)
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    store
        .update_fields("appointments", "apt-1", json!({ "status": "cancelled" }))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_accepts_200() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/appointments")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    assert!(store
        .update_fields("appointments", "apt-1", json!({ "status": "completed" }))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_update_rejects_other_statuses() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/appointments")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("no such row")
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    let err = store
        .update_fields("appointments", "missing", json!({ "status": "cancelled" }))
        .await
        .unwrap_err();

    match err {
        MedSyncError::Remote(RemoteStoreError::Rejected { status, .. }) => {
            assert_eq!(status, 404);
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_maps_to_connection_failed() {
    // Point at a port nothing listens on
    let config = RemoteStoreConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: None,
        timeout_seconds: 2,
        tls_verify: true,
    };

    let store = RestStore::new(&config).unwrap();
    let err = store.select_all("appointments").await.unwrap_err();

    match err {
        MedSyncError::Remote(e) => assert!(e.is_transport()),
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_health_check() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/appointments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "id".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let store = RestStore::new(&config_for(&server)).unwrap();
    assert!(store.health_check("appointments").await.is_ok());
}

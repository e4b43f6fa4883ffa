//! Shared test doubles for the sync core integration tests
//!
//! `MockRemoteStore` is a scripted implementation of the remote store
//! gateway: tests queue responses per operation and inspect the calls the
//! core actually made.

#![allow(dead_code)]

use async_trait::async_trait;
use medsync::adapters::store::{RemoteStore, Row};
use medsync::domain::{RemoteStoreError, Result};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// One remote call observed by the mock
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    SelectEq {
        collection: String,
        field: String,
        value: String,
    },
    SelectAll {
        collection: String,
    },
    Update {
        collection: String,
        id: String,
        fields: serde_json::Value,
    },
}

/// A scripted response
pub enum Scripted {
    Rows(Vec<Row>),
    TransportFailure,
    Rejected(u16),
    Ok,
}

impl Scripted {
    fn into_rows(self) -> Result<Vec<Row>> {
        match self {
            Scripted::Rows(rows) => Ok(rows),
            Scripted::TransportFailure => {
                Err(RemoteStoreError::ConnectionFailed("scripted failure".to_string()).into())
            }
            Scripted::Rejected(status) => Err(RemoteStoreError::Rejected {
                status,
                message: "scripted rejection".to_string(),
            }
            .into()),
            Scripted::Ok => Ok(Vec::new()),
        }
    }

    fn into_unit(self) -> Result<()> {
        match self {
            Scripted::Ok | Scripted::Rows(_) => Ok(()),
            Scripted::TransportFailure => {
                Err(RemoteStoreError::ConnectionFailed("scripted failure".to_string()).into())
            }
            Scripted::Rejected(status) => Err(RemoteStoreError::Rejected {
                status,
                message: "scripted rejection".to_string(),
            }
            .into()),
        }
    }
}

/// Scripted in-memory stand-in for the REST gateway
#[derive(Default)]
pub struct MockRemoteStore {
    calls: Mutex<Vec<RemoteCall>>,
    patients: Mutex<Vec<Row>>,
    appointment_responses: Mutex<VecDeque<Scripted>>,
    all_rows: Mutex<Vec<Row>>,
    update_responses: Mutex<VecDeque<Scripted>>,
    select_delay: Mutex<Option<Duration>>,
    update_delay: Mutex<Option<Duration>>,
}

impl MockRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a patient row resolvable by `user_id`
    pub fn add_patient(&self, user_id: &str, patient_id: &str) {
        self.patients
            .lock()
            .unwrap()
            .push(patient_row(user_id, patient_id));
    }

    /// Queues the response for the next filtered appointments select
    pub fn push_appointments(&self, response: Scripted) {
        self.appointment_responses.lock().unwrap().push_back(response);
    }

    /// Sets the rows returned by the unfiltered diagnostic select
    pub fn set_all_rows(&self, rows: Vec<Row>) {
        *self.all_rows.lock().unwrap() = rows;
    }

    /// Queues the response for the next field update
    pub fn push_update(&self, response: Scripted) {
        self.update_responses.lock().unwrap().push_back(response);
    }

    /// Adds artificial latency to filtered appointment selects
    pub fn set_select_delay(&self, delay: Duration) {
        *self.select_delay.lock().unwrap() = Some(delay);
    }

    /// Adds artificial latency to field updates
    pub fn set_update_delay(&self, delay: Duration) {
        *self.update_delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn select_eq_count(&self, collection: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::SelectEq { collection: col, .. } if col == collection))
            .count()
    }

    pub fn select_all_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::SelectAll { .. }))
            .count()
    }

    pub fn update_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::Update { .. }))
            .count()
    }
}

#[async_trait]
impl RemoteStore for MockRemoteStore {
    async fn select_eq(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Row>> {
        self.calls.lock().unwrap().push(RemoteCall::SelectEq {
            collection: collection.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        });

        if collection == "patients" {
            let rows = self
                .patients
                .lock()
                .unwrap()
                .iter()
                .filter(|row| row.get(field).and_then(|v| v.as_str()) == Some(value))
                .cloned()
                .collect();
            return Ok(rows);
        }

        let delay = *self.select_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.appointment_responses.lock().unwrap().pop_front() {
            Some(scripted) => scripted.into_rows(),
            None => Ok(Vec::new()),
        }
    }

    async fn select_all(&self, collection: &str) -> Result<Vec<Row>> {
        self.calls.lock().unwrap().push(RemoteCall::SelectAll {
            collection: collection.to_string(),
        });
        Ok(self.all_rows.lock().unwrap().clone())
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(RemoteCall::Update {
            collection: collection.to_string(),
            id: id.to_string(),
            fields,
        });

        let delay = *self.update_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.update_responses.lock().unwrap().pop_front() {
            Some(scripted) => scripted.into_unit(),
            None => Ok(()),
        }
    }
}

/// Builds a patient row as the remote store would return it
pub fn patient_row(user_id: &str, patient_id: &str) -> Row {
    json!({ "id": patient_id, "user_id": user_id })
        .as_object()
        .unwrap()
        .clone()
}

/// Builds an appointment row as the remote store would return it
pub fn appointment_row(id: &str, patient_id: &str, status: &str) -> Row {
    json!({
        "id": id,
        "patient_id": patient_id,
        "doctor_id": "doc-1",
        "hospital_id": "hos-1",
        "date": "2026-08-07",
        "start_time": "09:00",
        "end_time": "09:30",
        "status": status
    })
    .as_object()
    .unwrap()
    .clone()
}

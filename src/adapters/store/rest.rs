//! REST implementation of the remote store gateway
//!
//! This module talks to the remote relational store through its PostgREST
//! style HTTP surface: equality filters are `?field=eq.value` query
//! parameters, partial updates are PATCH requests keyed by `id=eq.<id>`.

use super::traits::{RemoteStore, Row};
use crate::config::RemoteStoreConfig;
use crate::domain::{MedSyncError, RemoteStoreError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// REST remote store gateway
///
/// Wraps a `reqwest` client configured from [`RemoteStoreConfig`]. Each
/// request carries the configured API key, observes the configured timeout,
/// and maps transport failures and non-success responses into
/// [`RemoteStoreError`]. No request is ever retried here.
///
/// # Example
///
/// ```no_run
/// use medsync::adapters::store::RestStore;
/// use medsync::config::RemoteStoreConfig;
///
/// # fn example() -> medsync::domain::Result<()> {
/// let config = RemoteStoreConfig::default();
/// let store = RestStore::new(&config)?;
/// # Ok(())
/// # }
/// ```
pub struct RestStore {
    /// Base URL of the store's REST surface
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Configuration, kept for the API key
    config: RemoteStoreConfig,
}

impl RestStore {
    /// Create a new REST gateway from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &RemoteStoreConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            MedSyncError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            config: config.clone(),
        })
    }

    /// URL of a collection endpoint
    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    /// Attach API-key headers when a key is configured
    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref key) = self.config.api_key {
            let key = key.expose_secret();
            request
                .header("apikey", key.as_ref())
                .header("Authorization", format!("Bearer {key}"))
        } else {
            request
        }
    }

    /// Map a transport error into the domain taxonomy
    fn transport_error(e: reqwest::Error) -> MedSyncError {
        if e.is_timeout() {
            RemoteStoreError::Timeout(e.to_string()).into()
        } else {
            RemoteStoreError::ConnectionFailed(e.to_string()).into()
        }
    }

    /// Decode a successful select response, rejecting non-success statuses
    async fn read_rows(response: Response) -> Result<Vec<Row>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteStoreError::Rejected {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        response
            .json::<Vec<Row>>()
            .await
            .map_err(|e| RemoteStoreError::InvalidResponse(e.to_string()).into())
    }

    /// Verify the store is reachable and answering queries
    ///
    /// Issues one cheap single-row read against the given collection. Used
    /// by the CLI before running an operation, never by the sync core
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is not reachable or not responding.
    pub async fn health_check(&self, collection: &str) -> Result<()> {
        let request = self
            .client
            .get(self.collection_url(collection))
            .query(&[("select", "id"), ("limit", "1")]);

        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        match Self::read_rows(response).await {
            Ok(_) => {
                tracing::info!(base_url = %self.base_url, "Remote store health check passed");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    base_url = %self.base_url,
                    error = %e,
                    "Remote store health check failed"
                );
                Err(e)
            }
        }
    }

    /// Get the base URL of the remote store
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn select_eq(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Row>> {
        tracing::debug!(
            collection = collection,
            field = field,
            "Executing equality-filtered select"
        );

        let filter = format!("eq.{value}");
        let request = self
            .client
            .get(self.collection_url(collection))
            .query(&[("select", "*"), (field, filter.as_str())]);

        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::read_rows(response).await
    }

    async fn select_all(&self, collection: &str) -> Result<Vec<Row>> {
        tracing::debug!(collection = collection, "Executing unfiltered select");

        let request = self
            .client
            .get(self.collection_url(collection))
            .query(&[("select", "*")]);

        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::read_rows(response).await
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<()> {
        tracing::debug!(collection = collection, id = id, "Executing field update");

        let filter = format!("eq.{id}");
        let request = self
            .client
            .patch(self.collection_url(collection))
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(&fields);

        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(RemoteStoreError::Rejected {
                    status: status.as_u16(),
                    message: body,
                }
                .into())
            }
        }
    }
}

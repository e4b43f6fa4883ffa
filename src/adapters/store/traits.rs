//! Remote store abstraction traits
//!
//! This module defines the trait the sync core uses to reach the remote
//! relational store. The store is treated as a lookup service addressed by
//! collection name and equality filter; everything HTTP-specific lives in
//! the REST implementation.

use crate::domain::Result;
use async_trait::async_trait;

/// One row of a remote collection, as returned by the store's REST surface
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Remote store gateway trait
///
/// This trait defines the interface that remote store implementations must
/// provide for the sync coordinator, consistency verifier, and status
/// transition manager. It is deliberately narrow: equality-filtered reads,
/// an unfiltered read for diagnostics, and a partial field update by
/// primary key.
///
/// Every call is attempt-once. The consistency verifier owns the only retry
/// policy in the system; implementations must not retry internally.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Equality-filtered read of a collection
    ///
    /// # Arguments
    ///
    /// * `collection` - Collection name (e.g. `appointments`)
    /// * `field` - Column to filter on
    /// * `value` - Value the column must equal
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable, rejects the query, or
    /// answers with a body that cannot be decoded.
    async fn select_eq(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Row>>;

    /// Unfiltered read of a collection
    ///
    /// Used only by the consistency verifier's diagnostic step; never on the
    /// hot path of a refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or rejects the query.
    async fn select_all(&self, collection: &str) -> Result<Vec<Row>>;

    /// Partial field update by primary key
    ///
    /// Success is defined as HTTP 200 or 204 from the store.
    ///
    /// # Arguments
    ///
    /// * `collection` - Collection name
    /// * `id` - Primary-key value of the row to update
    /// * `fields` - JSON object of columns to overwrite
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or answers with any
    /// other status code.
    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<()>;
}

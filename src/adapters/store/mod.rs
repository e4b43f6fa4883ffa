//! Remote store gateway
//!
//! The remote relational store is reached through the [`RemoteStore`] trait:
//! equality-filtered selects, an unfiltered diagnostic select, and partial
//! field updates by primary key. [`RestStore`] is the production
//! implementation over the store's REST surface; tests substitute their own
//! implementations of the trait.

pub mod models;
pub mod rest;
pub mod traits;

pub use rest::RestStore;
pub use traits::{RemoteStore, Row};

/// Names of the remote collections this core reads and writes
pub mod collections {
    /// Patient identity rows, filtered by `user_id`
    pub const PATIENTS: &str = "patients";

    /// Appointment rows, filtered by `patient_id`, updated by `id`
    pub const APPOINTMENTS: &str = "appointments";
}

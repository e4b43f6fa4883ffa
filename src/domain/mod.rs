//! Domain models and types for medsync.
//!
//! This module contains the core domain models, types, and business rules of
//! the appointment synchronization core.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`AppointmentId`], [`PatientId`],
//!   [`DoctorId`], [`HospitalId`], [`UserId`])
//! - **The appointment model** ([`AppointmentRecord`], [`AppointmentStatus`])
//! - **Error types** ([`MedSyncError`], [`RemoteStoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! medsync uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```
//! use medsync::domain::{AppointmentId, PatientId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let appointment_id = AppointmentId::new("apt-123")?;
//! let patient_id = PatientId::new("pat-456")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: PatientId = appointment_id;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # The Status State Machine
//!
//! Status transitions are monotone. An upcoming appointment may be cancelled
//! or completed; cancelled and completed are terminal:
//!
//! ```
//! use medsync::domain::AppointmentStatus;
//!
//! assert!(AppointmentStatus::Upcoming.can_transition_to(AppointmentStatus::Cancelled));
//! assert!(!AppointmentStatus::Completed.can_transition_to(AppointmentStatus::Cancelled));
//! ```

pub mod appointment;
pub mod errors;
pub mod ids;
pub mod result;

pub use appointment::{parse_wall_clock, AppointmentRecord, AppointmentStatus};
pub use errors::{MedSyncError, RemoteStoreError};
pub use ids::{AppointmentId, DoctorId, HospitalId, PatientId, UserId};
pub use result::Result;

//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the opaque identifiers issued by
//! the remote store. Each type ensures identifiers of different entities
//! cannot be mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! opaque_id {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a string
            ///
            /// # Errors
            ///
            /// Returns an error if the identifier is empty or whitespace-only.
            pub fn new(id: impl Into<String>) -> Result<Self, String> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(concat!($label, " cannot be empty").to_string());
                }
                Ok(Self(id))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Appointment identifier newtype wrapper
    ///
    /// Issued by the remote store when an appointment is booked and immutable
    /// after creation. Unique within the local appointment store.
    ///
    /// # Examples
    ///
    /// ```
    /// use medsync::domain::ids::AppointmentId;
    /// use std::str::FromStr;
    ///
    /// let id = AppointmentId::from_str("apt-7d44b88c").unwrap();
    /// assert_eq!(id.as_str(), "apt-7d44b88c");
    /// ```
    AppointmentId,
    "Appointment ID"
);

opaque_id!(
    /// Patient identifier newtype wrapper
    ///
    /// Identifies the patient row an appointment belongs to. Resolved from a
    /// [`UserId`] during a refresh cycle.
    PatientId,
    "Patient ID"
);

opaque_id!(
    /// Doctor identifier newtype wrapper
    DoctorId,
    "Doctor ID"
);

opaque_id!(
    /// Hospital identifier newtype wrapper
    HospitalId,
    "Hospital ID"
);

opaque_id!(
    /// Signed-in user identifier newtype wrapper
    ///
    /// Read from session state. A user may exist without a patient row
    /// (pre-registration), so resolution to a [`PatientId`] can legitimately
    /// yield nothing.
    UserId,
    "User ID"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_id_valid() {
        let id = AppointmentId::new("apt-123").unwrap();
        assert_eq!(id.as_str(), "apt-123");
        assert_eq!(id.to_string(), "apt-123");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(AppointmentId::new("").is_err());
        assert!(PatientId::new("   ").is_err());
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn test_from_str() {
        let id = PatientId::from_str("pat-9").unwrap();
        assert_eq!(id.as_str(), "pat-9");
    }

    #[test]
    fn test_into_inner() {
        let id = DoctorId::new("doc-1").unwrap();
        assert_eq!(id.into_inner(), "doc-1".to_string());
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property: an AppointmentId is not assignable to a
        // PatientId. Equality within a type still works as expected.
        let a = HospitalId::new("h-1").unwrap();
        let b = HospitalId::new("h-1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = AppointmentId::new("apt-5").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"apt-5\"");

        let back: AppointmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

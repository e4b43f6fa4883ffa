//! Appointment record domain model
//!
//! This module defines the appointment record moved between the remote store
//! gateway, the local appointment store, and the status transition manager,
//! together with its status state machine.

use super::ids::{AppointmentId, DoctorId, HospitalId, PatientId};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Appointment lifecycle status
///
/// Transitions are monotone: `Upcoming` may move to `Cancelled` or
/// `Completed`; both of those are terminal. No record ever transitions out
/// of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and not yet resolved
    Upcoming,
    /// Cancelled by the patient or the hospital
    Cancelled,
    /// The encounter took place
    Completed,
}

impl AppointmentStatus {
    /// Returns `true` for states no record may leave
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Returns `true` if the state machine permits moving to `target`
    pub fn can_transition_to(&self, target: AppointmentStatus) -> bool {
        *self == Self::Upcoming && target.is_terminal()
    }

    /// Returns the wire name of the status as stored remotely
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Parses a wire status name
    ///
    /// # Errors
    ///
    /// Returns an error for any string outside the three known states.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(format!("Unknown appointment status: {other}")),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scheduled patient/doctor encounter
///
/// Created server-side by the booking flow and first observed locally via a
/// fetch. Mutated locally only through the status transition manager or a
/// subsequent fetch merge.
///
/// # Examples
///
/// ```
/// use medsync::domain::appointment::{AppointmentRecord, AppointmentStatus};
/// use medsync::domain::ids::{AppointmentId, DoctorId, HospitalId, PatientId};
/// use chrono::NaiveDate;
///
/// let record = AppointmentRecord::new(
///     AppointmentId::new("apt-1").unwrap(),
///     PatientId::new("pat-1").unwrap(),
///     DoctorId::new("doc-1").unwrap(),
///     HospitalId::new("hos-1").unwrap(),
///     NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
/// );
/// assert_eq!(record.status, AppointmentStatus::Upcoming);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    /// Unique identifier issued by the remote store
    pub id: AppointmentId,

    /// Patient the appointment belongs to
    pub patient_id: PatientId,

    /// Attending doctor
    pub doctor_id: DoctorId,

    /// Hospital the appointment takes place at
    pub hospital_id: HospitalId,

    /// Calendar date of the appointment
    pub date: NaiveDate,

    /// Wall-clock start time, if the slot carries one
    pub start_time: Option<NaiveTime>,

    /// Wall-clock end time; derived from `start_time` when absent
    pub end_time: Option<NaiveTime>,

    /// Current lifecycle status
    pub status: AppointmentStatus,
}

impl AppointmentRecord {
    /// Creates a new upcoming appointment without slot times
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        hospital_id: HospitalId,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            hospital_id,
            date,
            start_time: None,
            end_time: None,
            status: AppointmentStatus::Upcoming,
        }
    }

    /// Sets the slot times
    pub fn with_times(mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Effective end of the slot
    ///
    /// Returns the explicit end time when present, otherwise one hour after
    /// the start time. `NaiveTime` addition wraps at midnight, so a slot
    /// starting at 23:30 ends at 00:30. Returns `None` when the record
    /// carries no times at all.
    pub fn effective_end_time(&self) -> Option<NaiveTime> {
        self.end_time
            .or_else(|| self.start_time.map(|start| start + Duration::hours(1)))
    }
}

/// Parses a wall-clock string in `HH:MM` or `HH:MM:SS` form
///
/// # Errors
///
/// Returns an error if the string matches neither format.
pub fn parse_wall_clock(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| format!("Invalid wall-clock time: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn record() -> AppointmentRecord {
        AppointmentRecord::new(
            AppointmentId::new("apt-1").unwrap(),
            PatientId::new("pat-1").unwrap(),
            DoctorId::new("doc-1").unwrap(),
            HospitalId::new("hos-1").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        )
    }

    #[test_case(AppointmentStatus::Upcoming, AppointmentStatus::Cancelled, true)]
    #[test_case(AppointmentStatus::Upcoming, AppointmentStatus::Completed, true)]
    #[test_case(AppointmentStatus::Cancelled, AppointmentStatus::Completed, false)]
    #[test_case(AppointmentStatus::Cancelled, AppointmentStatus::Upcoming, false)]
    #[test_case(AppointmentStatus::Completed, AppointmentStatus::Cancelled, false)]
    #[test_case(AppointmentStatus::Upcoming, AppointmentStatus::Upcoming, false)]
    fn test_transition_table(from: AppointmentStatus, to: AppointmentStatus, allowed: bool) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!AppointmentStatus::Upcoming.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
    }

    #[test]
    fn test_status_wire_names_round_trip() {
        for status in [
            AppointmentStatus::Upcoming,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Completed,
        ] {
            assert_eq!(AppointmentStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(AppointmentStatus::parse("rescheduled").is_err());
    }

    #[test]
    fn test_parse_wall_clock_formats() {
        assert_eq!(
            parse_wall_clock("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_wall_clock("09:30:15").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 15).unwrap()
        );
        assert!(parse_wall_clock("9.30").is_err());
        assert!(parse_wall_clock("25:00").is_err());
    }

    #[test]
    fn test_effective_end_time_explicit() {
        let r = record().with_times(
            NaiveTime::from_hms_opt(9, 0, 0),
            NaiveTime::from_hms_opt(9, 45, 0),
        );
        assert_eq!(
            r.effective_end_time(),
            NaiveTime::from_hms_opt(9, 45, 0)
        );
    }

    #[test]
    fn test_effective_end_time_derived() {
        let r = record().with_times(NaiveTime::from_hms_opt(14, 15, 0), None);
        assert_eq!(
            r.effective_end_time(),
            NaiveTime::from_hms_opt(15, 15, 0)
        );
    }

    #[test]
    fn test_effective_end_time_wraps_at_midnight() {
        let r = record().with_times(NaiveTime::from_hms_opt(23, 30, 0), None);
        assert_eq!(
            r.effective_end_time(),
            NaiveTime::from_hms_opt(0, 30, 0)
        );
    }

    #[test]
    fn test_effective_end_time_absent() {
        assert_eq!(record().effective_end_time(), None);
    }
}

//! Wire-row decoding for appointment records
//!
//! The remote store returns collections as JSON row-maps. This module maps
//! those rows into [`AppointmentRecord`] values, skipping rows the client
//! cannot make sense of instead of failing a whole fetch.

use super::traits::Row;
use crate::domain::appointment::parse_wall_clock;
use crate::domain::{
    AppointmentId, AppointmentRecord, AppointmentStatus, DoctorId, HospitalId, MedSyncError,
    PatientId, Result,
};
use chrono::{NaiveDate, NaiveTime};

/// Extract a required string column
fn str_field<'a>(row: &'a Row, field: &str) -> Result<&'a str> {
    row.get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| MedSyncError::Serialization(format!("Missing or non-string field: {field}")))
}

/// Extract an optional wall-clock column ("HH:MM" or "HH:MM:SS")
fn time_field(row: &Row, field: &str) -> Result<Option<NaiveTime>> {
    match row.get(field) {
        None => Ok(None),
        Some(v) if v.is_null() => Ok(None),
        Some(v) => {
            let s = v.as_str().ok_or_else(|| {
                MedSyncError::Serialization(format!("Non-string time field: {field}"))
            })?;
            parse_wall_clock(s)
                .map(Some)
                .map_err(MedSyncError::Serialization)
        }
    }
}

/// Decode one remote row into an appointment record
///
/// # Errors
///
/// Returns a serialization error if a required column is missing, the date
/// or times don't parse, or the status is outside the known state set.
pub fn record_from_row(row: &Row) -> Result<AppointmentRecord> {
    let id = AppointmentId::new(str_field(row, "id")?).map_err(MedSyncError::Serialization)?;
    let patient_id =
        PatientId::new(str_field(row, "patient_id")?).map_err(MedSyncError::Serialization)?;
    let doctor_id =
        DoctorId::new(str_field(row, "doctor_id")?).map_err(MedSyncError::Serialization)?;
    let hospital_id =
        HospitalId::new(str_field(row, "hospital_id")?).map_err(MedSyncError::Serialization)?;

    let date = NaiveDate::parse_from_str(str_field(row, "date")?, "%Y-%m-%d")
        .map_err(|e| MedSyncError::Serialization(format!("Invalid appointment date: {e}")))?;

    let status = AppointmentStatus::parse(str_field(row, "status")?)
        .map_err(MedSyncError::Serialization)?;

    Ok(
        AppointmentRecord::new(id, patient_id, doctor_id, hospital_id, date)
            .with_times(time_field(row, "start_time")?, time_field(row, "end_time")?)
            .with_status(status),
    )
}

/// Decode a fetched batch, skipping malformed rows
///
/// A row the client cannot decode is logged and dropped; one bad row must
/// not abort a refresh that carries the rest of the patient's schedule.
pub fn decode_rows(rows: &[Row]) -> Vec<AppointmentRecord> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        match record_from_row(row) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(
                    row_id = row.get("id").and_then(|v| v.as_str()).unwrap_or("<missing>"),
                    error = %e,
                    "Skipping undecodable appointment row"
                );
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        value.as_object().unwrap().clone()
    }

    fn full_row() -> Row {
        row(json!({
            "id": "apt-1",
            "patient_id": "pat-1",
            "doctor_id": "doc-1",
            "hospital_id": "hos-1",
            "date": "2026-08-07",
            "start_time": "09:30",
            "end_time": "10:00:00",
            "status": "upcoming"
        }))
    }

    #[test]
    fn test_decode_full_row() {
        let record = record_from_row(&full_row()).unwrap();
        assert_eq!(record.id.as_str(), "apt-1");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        assert_eq!(record.start_time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(record.end_time, NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(record.status, AppointmentStatus::Upcoming);
    }

    #[test]
    fn test_decode_null_times() {
        let mut r = full_row();
        r.insert("start_time".into(), serde_json::Value::Null);
        r.remove("end_time");

        let record = record_from_row(&r).unwrap();
        assert_eq!(record.start_time, None);
        assert_eq!(record.end_time, None);
        assert_eq!(record.effective_end_time(), None);
    }

    #[test]
    fn test_decode_rejects_unknown_status() {
        let mut r = full_row();
        r.insert("status".into(), json!("rescheduled"));
        assert!(record_from_row(&r).is_err());
    }

    #[test]
    fn test_decode_rejects_missing_id() {
        let mut r = full_row();
        r.remove("id");
        assert!(record_from_row(&r).is_err());
    }

    #[test]
    fn test_decode_rows_skips_malformed() {
        let mut bad = full_row();
        bad.insert("date".into(), json!("not-a-date"));

        let records = decode_rows(&[full_row(), bad, full_row()]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.id.as_str() == "apt-1"));
    }
}

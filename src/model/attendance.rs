use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::error::AttendanceError;
use crate::model::month::parse_iso_date;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Status of one employee on one day as shown in a roster.
///
/// `NotMarked` means no record exists; it is never the same thing as `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
pub enum RosterStatus {
    Present,
    Absent,
    #[serde(rename = "Not Marked")]
    #[strum(serialize = "Not Marked")]
    NotMarked,
}

impl From<Option<AttendanceStatus>> for RosterStatus {
    fn from(status: Option<AttendanceStatus>) -> Self {
        match status {
            Some(AttendanceStatus::Present) => RosterStatus::Present,
            Some(AttendanceStatus::Absent) => RosterStatus::Absent,
            None => RosterStatus::NotMarked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-001",
        "date": "2024-03-01",
        "status": "Present"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(employee_id: impl Into<String>, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            status,
        }
    }
}

/// An attendance row exactly as the storage service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRow {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = AttendanceError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let date = parse_iso_date(&row.date)?;
        let status = row
            .status
            .parse::<AttendanceStatus>()
            .map_err(|_| AttendanceError::UnknownStatus {
                employee_id: row.employee_id.clone(),
                date: row.date.clone(),
                status: row.status.clone(),
            })?;

        Ok(AttendanceRecord {
            employee_id: row.employee_id,
            date,
            status,
        })
    }
}

/// Converts a whole batch, failing on the first row that does not fit the model.
pub fn records_from_rows(rows: Vec<AttendanceRow>) -> Result<Vec<AttendanceRecord>, AttendanceError> {
    rows.into_iter().map(AttendanceRecord::try_from).collect()
}

/// Request body for marking attendance. Fields stay raw so validation can name the bad one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "2024-03-01", format = "date")]
    pub date: String,
    #[schema(example = "Present")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, date: &str) -> AttendanceRow {
        AttendanceRow {
            employee_id: "E1".into(),
            date: date.into(),
            status: status.into(),
        }
    }

    #[test]
    fn converts_known_rows() {
        let record = AttendanceRecord::try_from(row("Absent", "2024-03-02")).unwrap();
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn unknown_status_is_an_integrity_error() {
        let err = AttendanceRecord::try_from(row("Late", "2024-03-02")).unwrap_err();
        assert_eq!(
            err,
            AttendanceError::UnknownStatus {
                employee_id: "E1".into(),
                date: "2024-03-02".into(),
                status: "Late".into(),
            }
        );
        // status matching is exact
        assert!(AttendanceRecord::try_from(row("present", "2024-03-02")).is_err());
    }

    #[test]
    fn batch_conversion_stops_at_first_bad_row() {
        let rows = vec![row("Present", "2024-03-01"), row("Present", "03/02/2024")];
        assert!(matches!(
            records_from_rows(rows),
            Err(AttendanceError::InvalidDate(_))
        ));
    }

    #[test]
    fn roster_status_wire_names() {
        assert_eq!(RosterStatus::NotMarked.to_string(), "Not Marked");
        assert_eq!(
            serde_json::to_string(&RosterStatus::NotMarked).unwrap(),
            "\"Not Marked\""
        );
        assert_eq!(RosterStatus::from(None), RosterStatus::NotMarked);
        assert_eq!(
            RosterStatus::from(Some(AttendanceStatus::Absent)),
            RosterStatus::Absent
        );
    }

    #[test]
    fn record_serializes_iso_date() {
        let record = AttendanceRecord::new(
            "E1",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            AttendanceStatus::Present,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["status"], "Present");
    }
}

use serde::Serialize;
use utoipa::ToSchema;

use crate::engine::index::RecordIndex;
use crate::engine::month_filter::{employee_records_in_month, records_in_month};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::month::MonthKey;

/// Present/absent counts over a window. Always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[schema(example = json!({
    "total_days": 3,
    "present_days": 2,
    "absent_days": 1,
    "percentage": 67
}))]
pub struct AttendanceStats {
    pub total_days: u32,
    pub present_days: u32,
    pub absent_days: u32,
    /// Present share rounded to the nearest whole percent; 0 when there are no days.
    pub percentage: u32,
}

impl AttendanceStats {
    pub fn from_counts(present_days: u32, absent_days: u32) -> Self {
        let total_days = present_days + absent_days;
        Self {
            total_days,
            present_days,
            absent_days,
            percentage: rounded_percentage(present_days, total_days),
        }
    }

    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AttendanceStatus>,
    {
        let (present, absent) = statuses
            .into_iter()
            .fold((0u32, 0u32), |(p, a), status| match status {
                AttendanceStatus::Present => (p + 1, a),
                AttendanceStatus::Absent => (p, a + 1),
            });
        Self::from_counts(present, absent)
    }

    /// Aggregates an already-scoped collection. Duplicate (employee, date)
    /// pairs count once, with the later record deciding the status.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        Self::from_statuses(RecordIndex::build(records).statuses())
    }

    pub fn for_month(records: &[AttendanceRecord], month: MonthKey) -> Self {
        Self::from_records(records_in_month(records, month))
    }

    pub fn for_employee_month(records: &[AttendanceRecord], employee_id: &str, month: MonthKey) -> Self {
        Self::from_records(employee_records_in_month(records, employee_id, month))
    }

    pub fn for_employee(records: &[AttendanceRecord], employee_id: &str) -> Self {
        Self::from_records(records.iter().filter(|r| r.employee_id == employee_id))
    }
}

/// Round-half-up integer percentage, matching `round(present / total * 100)`.
fn rounded_percentage(present: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (present, total) = (u64::from(present), u64::from(total));
    ((present * 200 + total) / (total * 2)) as u32
}

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

/// Lookup from (employee, date) to status.
///
/// Built in one pass; when the input holds more than one record for the same
/// pair, the one that comes later wins.
#[derive(Debug, Default, Clone)]
pub struct RecordIndex {
    by_employee: HashMap<String, HashMap<NaiveDate, AttendanceStatus>>,
}

impl RecordIndex {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut by_employee: HashMap<String, HashMap<NaiveDate, AttendanceStatus>> = HashMap::new();
        let mut overwritten = 0usize;

        for record in records {
            let days = by_employee.entry(record.employee_id.clone()).or_default();
            if days.insert(record.date, record.status).is_some() {
                overwritten += 1;
            }
        }

        if overwritten > 0 {
            tracing::debug!(overwritten, "duplicate attendance records resolved last-write-wins");
        }

        Self { by_employee }
    }

    pub fn status(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceStatus> {
        self.by_employee
            .get(employee_id)
            .and_then(|days| days.get(&date))
            .copied()
    }

    /// Every (date, status) held for one employee, in no particular order.
    pub fn employee_days<'a>(
        &'a self,
        employee_id: &str,
    ) -> impl Iterator<Item = (NaiveDate, AttendanceStatus)> + 'a {
        self.by_employee
            .get(employee_id)
            .into_iter()
            .flat_map(|days| days.iter().map(|(date, status)| (*date, *status)))
    }

    pub fn statuses(&self) -> impl Iterator<Item = AttendanceStatus> + '_ {
        self.by_employee.values().flat_map(|days| days.values().copied())
    }

    /// Number of distinct (employee, date) pairs.
    pub fn len(&self) -> usize {
        self.by_employee.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

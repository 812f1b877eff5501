use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::index::RecordIndex;
use crate::engine::selection::EmployeeKeyed;
use crate::model::attendance::RosterStatus;
use crate::model::employee::Employee;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub employee: Employee,
    pub status: RosterStatus,
}

impl EmployeeKeyed for RosterEntry {
    fn employee_id(&self) -> &str {
        &self.employee.employee_id
    }
}

/// Status of every employee on `date`, in employee order.
///
/// Iterates employees rather than records, so records for ids missing from
/// `employees` never show up.
pub fn project_roster(employees: &[Employee], index: &RecordIndex, date: NaiveDate) -> Vec<RosterEntry> {
    employees
        .iter()
        .map(|employee| RosterEntry {
            status: index.status(&employee.employee_id, date).into(),
            employee: employee.clone(),
        })
        .collect()
}

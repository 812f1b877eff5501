//! Views composed from the engine primitives, one pure pass per request.

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::calendar::MonthGrid;
use crate::engine::index::RecordIndex;
use crate::engine::month_filter::{employee_records_in_month, records_in_month};
use crate::engine::roster::{RosterEntry, project_roster};
use crate::engine::selection::{EmployeeKeyed, Selection};
use crate::engine::stats::AttendanceStats;
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::month::MonthKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeSummary {
    #[serde(flatten)]
    pub employee: Employee,
    pub stats: AttendanceStats,
}

impl EmployeeKeyed for EmployeeSummary {
    fn employee_id(&self) -> &str {
        &self.employee.employee_id
    }
}

/// Month statistics for each employee, in employee order.
pub fn monthly_summaries(
    employees: &[Employee],
    records: &[AttendanceRecord],
    month: MonthKey,
) -> Vec<EmployeeSummary> {
    let index = RecordIndex::build(records_in_month(records, month));
    employees
        .iter()
        .map(|employee| EmployeeSummary {
            stats: AttendanceStats::from_statuses(
                index.employee_days(&employee.employee_id).map(|(_, status)| status),
            ),
            employee: employee.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub employee_count: usize,
    pub stats: AttendanceStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub month: MonthKey,
    pub date: NaiveDate,
    pub overview: Overview,
    pub employees: Vec<EmployeeSummary>,
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone)]
pub struct DashboardQuery {
    pub month: MonthKey,
    pub date: NaiveDate,
    pub selection: Selection,
}

/// Month summaries, overview and the day roster under a single selection.
///
/// Records whose employee is not in the (selected) roster are left out of the
/// overview as well, so every figure describes the same set of people.
pub fn build_dashboard(
    employees: Vec<Employee>,
    records: &[AttendanceRecord],
    query: &DashboardQuery,
) -> Dashboard {
    let roster_members = query.selection.apply(employees);

    let summaries = monthly_summaries(&roster_members, records, query.month);
    let (present, absent) = summaries.iter().fold((0, 0), |(p, a), s| {
        (p + s.stats.present_days, a + s.stats.absent_days)
    });

    let roster = project_roster(&roster_members, &RecordIndex::build(records), query.date);

    tracing::debug!(
        month = %query.month,
        date = %query.date,
        employees = roster_members.len(),
        records = records.len(),
        "built dashboard"
    );

    Dashboard {
        month: query.month,
        date: query.date,
        overview: Overview {
            employee_count: roster_members.len(),
            stats: AttendanceStats::from_counts(present, absent),
        },
        employees: summaries,
        roster,
    }
}

/// Roster for one day, narrowed by `selection`.
pub fn roster_for_date(
    employees: &[Employee],
    records: &[AttendanceRecord],
    date: NaiveDate,
    selection: &Selection,
) -> Vec<RosterEntry> {
    let index = RecordIndex::build(records.iter().filter(|r| r.date == date));
    selection.apply(project_roster(employees, &index, date))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub month: MonthKey,
    pub stats: AttendanceStats,
    pub calendar: MonthGrid,
}

/// Calendar and month statistics for one employee.
pub fn build_employee_detail(
    employee: Employee,
    records: &[AttendanceRecord],
    month: MonthKey,
    today: NaiveDate,
) -> EmployeeDetail {
    let scoped = employee_records_in_month(records, &employee.employee_id, month);
    let index = RecordIndex::build(scoped.iter().copied());
    let stats = AttendanceStats::from_records(scoped);
    let calendar = MonthGrid::build(month, Some(today)).with_attendance(&employee.employee_id, &index);

    EmployeeDetail {
        employee,
        month,
        stats,
        calendar,
    }
}

use crate::api::attendance::{AttendanceQuery, StatsQuery};
use crate::api::dashboard::{CalendarParams, DashboardParams, RosterParams};
use crate::api::employee::EmployeeQuery;
use crate::engine::AttendanceStats;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, Employee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Register API",
        version = "0.1.0",
        description = r#"
## Employee Register with Daily Attendance

Serves attendance views computed from the employee and attendance collections
held by the storage service.

### Key Features
- **Employees**
  - List, search, register, view and delete employees
- **Attendance**
  - Mark a day as Present or Absent (re-marking replaces the status)
  - Per-employee statistics, all time or for one month
- **Dashboard**
  - Month statistics per employee and across the selection
  - Daily roster with "Present", "Absent" or "Not Marked"
  - Month calendar for a single employee

### Conventions
- Months are `YYYY-MM`, dates are `YYYY-MM-DD`
- `ids` takes a comma separated list of employee ids; leaving it empty means everyone
- Errors are JSON objects with a `message` field
"#,
    ),
    paths(
        crate::api::health,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::attendance_stats,

        crate::api::dashboard::dashboard,
        crate::api::dashboard::roster,
        crate::api::dashboard::employee_calendar
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeQuery,
            AttendanceRecord,
            AttendanceStatus,
            MarkAttendance,
            AttendanceQuery,
            StatsQuery,
            AttendanceStats,
            DashboardParams,
            RosterParams,
            CalendarParams
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Employee", description = "Employee register APIs"),
        (name = "Attendance", description = "Attendance marking and statistics APIs"),
        (name = "Dashboard", description = "Aggregated attendance views"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/api/health",
            "/api/employees",
            "/api/employees/{employee_id}",
            "/api/employees/{employee_id}/calendar",
            "/api/attendance",
            "/api/attendance/stats/{employee_id}",
            "/api/dashboard",
            "/api/roster",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}

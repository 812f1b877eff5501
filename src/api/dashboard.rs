use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::error::ApiError;
use crate::api::{date_or_today, month_or_current, selection_from, snapshot};
use crate::clock::Clock;
use crate::engine::views::{DashboardQuery, build_dashboard, build_employee_detail, roster_for_date};
use crate::store::{AttendanceFilter, AttendanceStore};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DashboardParams {
    /// Statistics window (YYYY-MM); defaults to the current month
    #[schema(example = "2024-03")]
    pub month: Option<String>,
    /// Roster day (YYYY-MM-DD); defaults to today
    #[schema(example = "2024-03-01")]
    pub date: Option<String>,
    /// Comma separated employee ids; empty means all
    #[schema(example = "EMP-001,EMP-002")]
    pub ids: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RosterParams {
    /// Roster day (YYYY-MM-DD); defaults to today
    #[schema(example = "2024-03-01")]
    pub date: Option<String>,
    /// Comma separated employee ids; empty means all
    #[schema(example = "EMP-001,EMP-002")]
    pub ids: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CalendarParams {
    /// Month to lay out (YYYY-MM); defaults to the current month
    #[schema(example = "2024-02")]
    pub month: Option<String>,
}

/// Attendance dashboard
///
/// Per-employee month statistics, an overview across the selected employees,
/// and everyone's status on the chosen day.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(DashboardParams),
    responses(
        (status = 200, description = "Dashboard view", body = Object, example = json!({
            "month": "2024-03",
            "date": "2024-03-01",
            "overview": {
                "employee_count": 2,
                "stats": { "total_days": 4, "present_days": 2, "absent_days": 2, "percentage": 50 }
            },
            "employees": [{
                "employee_id": "EMP-001",
                "full_name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering",
                "stats": { "total_days": 3, "present_days": 2, "absent_days": 1, "percentage": 67 }
            }],
            "roster": [{
                "employee_id": "EMP-001",
                "full_name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering",
                "status": "Present"
            }]
        })),
        (status = 400, description = "Malformed month or date")
    ),
    tag = "Dashboard"
)]
#[instrument(name = "dashboard", skip(store, clock))]
pub async fn dashboard(
    store: web::Data<dyn AttendanceStore>,
    clock: web::Data<Clock>,
    params: web::Query<DashboardParams>,
) -> Result<HttpResponse, ApiError> {
    let today = clock.today();
    let query = DashboardQuery {
        month: month_or_current(params.month.as_deref(), today)?,
        date: date_or_today(params.date.as_deref(), today)?,
        selection: selection_from(params.ids.as_deref()),
    };

    let (employees, records) = snapshot(store.get_ref(), &AttendanceFilter::default()).await?;
    let view = build_dashboard(employees, &records, &query);

    Ok(HttpResponse::Ok().json(view))
}

/// Daily roster
///
/// Every (selected) employee with "Present", "Absent" or "Not Marked" for one day.
#[utoipa::path(
    get,
    path = "/api/roster",
    params(RosterParams),
    responses(
        (status = 200, description = "Roster in employee order", body = Object, example = json!([
            { "employee_id": "EMP-001", "full_name": "John Doe", "email": "john.doe@company.com",
              "department": "Engineering", "status": "Present" },
            { "employee_id": "EMP-002", "full_name": "Jane Roe", "email": "jane.roe@company.com",
              "department": "Finance", "status": "Not Marked" }
        ])),
        (status = 400, description = "Malformed date")
    ),
    tag = "Dashboard"
)]
#[instrument(name = "roster", skip(store, clock))]
pub async fn roster(
    store: web::Data<dyn AttendanceStore>,
    clock: web::Data<Clock>,
    params: web::Query<RosterParams>,
) -> Result<HttpResponse, ApiError> {
    let date = date_or_today(params.date.as_deref(), clock.today())?;
    let selection = selection_from(params.ids.as_deref());

    let filter = AttendanceFilter {
        employee_id: None,
        date: Some(date),
    };
    let (employees, records) = snapshot(store.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(roster_for_date(&employees, &records, date, &selection)))
}

/// Employee attendance calendar
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/calendar",
    params(
        ("employee_id" = String, Path, description = "Employee identifier"),
        CalendarParams
    ),
    responses(
        (status = 200, description = "Employee, month statistics and month grid", body = Object, example = json!({
            "employee": { "employee_id": "EMP-001", "full_name": "John Doe",
                          "email": "john.doe@company.com", "department": "Engineering" },
            "month": "2024-02",
            "stats": { "total_days": 1, "present_days": 1, "absent_days": 0, "percentage": 100 },
            "calendar": {
                "month": "2024-02",
                "month_name": "February",
                "leading_blanks": 4,
                "days_in_month": 29,
                "days": [
                    { "kind": "blank" },
                    { "kind": "day", "date": "2024-02-01", "status": "Present", "is_today": false }
                ]
            }
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Dashboard"
)]
#[instrument(name = "employee_calendar", skip(store, clock))]
pub async fn employee_calendar(
    store: web::Data<dyn AttendanceStore>,
    clock: web::Data<Clock>,
    path: web::Path<String>,
    params: web::Query<CalendarParams>,
) -> Result<HttpResponse, ApiError> {
    let today = clock.today();
    let month = month_or_current(params.month.as_deref(), today)?;

    let employee = store.get_employee(&path.into_inner()).await?;
    let filter = AttendanceFilter {
        employee_id: Some(employee.employee_id.clone()),
        date: None,
    };
    let records = store.list_attendance(&filter).await?;

    Ok(HttpResponse::Ok().json(build_employee_detail(employee, &records, month, today)))
}

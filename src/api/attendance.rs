use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::ApiError;
use crate::api::{non_blank, optional_date, optional_month};
use crate::clock::Clock;
use crate::engine::{AttendanceStats, records_in_month};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, MarkAttendance};
use crate::model::month::parse_iso_date;
use crate::store::{AttendanceFilter, AttendanceStore};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Only records for this employee
    #[schema(example = "EMP-001")]
    pub employee_id: Option<String>,
    /// Only records on this day (YYYY-MM-DD)
    #[schema(example = "2024-03-01")]
    pub date: Option<String>,
    /// Only records in this month (YYYY-MM)
    #[schema(example = "2024-03")]
    pub month: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct StatsQuery {
    /// Restrict to one month (YYYY-MM); all time when omitted or blank
    #[schema(example = "2024-03")]
    pub month: Option<String>,
}

/// List attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Records in storage order", body = [AttendanceRecord]),
        (status = 400, description = "Malformed date or month", body = Object, example = json!({
            "message": "Invalid month '2024-13', expected YYYY-MM"
        })),
        (status = 502, description = "Storage service unavailable or returned bad data")
    ),
    tag = "Attendance"
)]
#[instrument(name = "list_attendance", skip(store))]
pub async fn list_attendance(
    store: web::Data<dyn AttendanceStore>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let month = optional_month(query.month.as_deref())?;
    let filter = AttendanceFilter {
        employee_id: non_blank(query.employee_id.as_deref()).map(str::to_string),
        date: optional_date(query.date.as_deref())?,
    };

    let records = store.list_attendance(&filter).await?;
    let records: Vec<&AttendanceRecord> = match month {
        Some(month) => records_in_month(&records, month),
        None => records.iter().collect(),
    };

    Ok(HttpResponse::Ok().json(records))
}

/// Mark attendance for one employee on one day
///
/// Marking the same employee and day again replaces the earlier status.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecord),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "message": "Status must be either 'Present' or 'Absent'"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
#[instrument(
    name = "mark_attendance",
    skip(store, clock, payload),
    fields(employee_id = %payload.employee_id, date = %payload.date)
)]
pub async fn mark_attendance(
    store: web::Data<dyn AttendanceStore>,
    clock: web::Data<Clock>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let record = validate_mark(&payload, clock.today())?;
    let saved = store.mark_attendance(&record).await?;
    info!(status = %saved.status, "Attendance marked");

    Ok(HttpResponse::Created().json(saved))
}

fn validate_mark(payload: &MarkAttendance, today: chrono::NaiveDate) -> Result<AttendanceRecord, ApiError> {
    let employee_id = payload.employee_id.trim();
    if employee_id.is_empty() {
        return Err(ApiError::BadRequest("employee_id is required".into()));
    }

    let date = parse_iso_date(payload.date.trim())?;
    if date > today {
        return Err(ApiError::BadRequest(
            "Attendance cannot be marked for a future date".into(),
        ));
    }

    let status = payload
        .status
        .parse::<AttendanceStatus>()
        .map_err(|_| ApiError::BadRequest("Status must be either 'Present' or 'Absent'".into()))?;

    Ok(AttendanceRecord::new(employee_id, date, status))
}

/// Attendance statistics for one employee
#[utoipa::path(
    get,
    path = "/api/attendance/stats/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee identifier"),
        StatsQuery
    ),
    responses(
        (status = 200, description = "Statistics", body = AttendanceStats),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
#[instrument(name = "attendance_stats", skip(store))]
pub async fn attendance_stats(
    store: web::Data<dyn AttendanceStore>,
    path: web::Path<String>,
    query: web::Query<StatsQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let month = optional_month(query.month.as_deref())?;

    let employee = store.get_employee(&employee_id).await?;
    let filter = AttendanceFilter {
        employee_id: Some(employee.employee_id.clone()),
        date: None,
    };
    let records = store.list_attendance(&filter).await?;

    let stats = match month {
        Some(month) => AttendanceStats::for_employee_month(&records, &employee.employee_id, month),
        None => AttendanceStats::for_employee(&records, &employee.employee_id),
    };

    Ok(HttpResponse::Ok().json(stats))
}

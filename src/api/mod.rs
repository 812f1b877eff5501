pub mod attendance;
pub mod dashboard;
pub mod employee;
pub mod error;

use actix_web::{HttpResponse, Responder};
use chrono::NaiveDate;
use serde_json::json;

use crate::engine::Selection;
use crate::error::AttendanceError;
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::month::{MonthKey, parse_iso_date};
use crate::store::{AttendanceFilter, AttendanceStore, StoreError};

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "status": "healthy"
        }))
    ),
    tag = "Health"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

/// A query value with blank treated as absent.
pub(crate) fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub(crate) fn optional_month(raw: Option<&str>) -> Result<Option<MonthKey>, AttendanceError> {
    non_blank(raw).map(str::parse).transpose()
}

pub(crate) fn optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, AttendanceError> {
    non_blank(raw).map(parse_iso_date).transpose()
}

/// Query month, or the month containing `today` when absent or blank.
pub(crate) fn month_or_current(raw: Option<&str>, today: NaiveDate) -> Result<MonthKey, AttendanceError> {
    Ok(optional_month(raw)?.unwrap_or_else(|| MonthKey::of(today)))
}

/// Query date, or `today` when absent or blank.
pub(crate) fn date_or_today(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, AttendanceError> {
    Ok(optional_date(raw)?.unwrap_or(today))
}

pub(crate) fn selection_from(raw: Option<&str>) -> Selection {
    raw.map(Selection::parse).unwrap_or_default()
}

/// Fetches employees and attendance concurrently. The two reads are separate
/// snapshots and may disagree (e.g. right after a delete).
pub(crate) async fn snapshot(
    store: &dyn AttendanceStore,
    filter: &AttendanceFilter,
) -> Result<(Vec<Employee>, Vec<AttendanceRecord>), StoreError> {
    futures::try_join!(store.list_employees(), store.list_attendance(filter))
}

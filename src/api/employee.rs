use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::ApiError;
use crate::api::selection_from;
use crate::model::employee::{CreateEmployee, Employee, search_employees};
use crate::store::AttendanceStore;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Case-insensitive match on id, name, department or email
    #[schema(example = "eng")]
    pub search: Option<String>,
    /// Comma separated employee ids; empty means all
    #[schema(example = "EMP-001,EMP-002")]
    pub ids: Option<String>,
}

/// List employees
#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Employees in storage order", body = [Employee]),
        (status = 502, description = "Storage service unavailable")
    ),
    tag = "Employee"
)]
#[instrument(name = "list_employees", skip(store))]
pub async fn list_employees(
    store: web::Data<dyn AttendanceStore>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, ApiError> {
    let employees = store.list_employees().await?;
    let employees = selection_from(query.ids.as_deref()).apply(employees);
    let employees = search_employees(employees, query.search.as_deref().unwrap_or(""));

    Ok(HttpResponse::Ok().json(employees))
}

/// Get a single employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(("employee_id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
#[instrument(name = "get_employee", skip(store))]
pub async fn get_employee(
    store: web::Data<dyn AttendanceStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee = store.get_employee(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Register an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "message": "Invalid email format"
        })),
        (status = 409, description = "Employee id or email already registered")
    ),
    tag = "Employee"
)]
#[instrument(name = "create_employee", skip(store, payload), fields(employee_id = %payload.employee_id))]
pub async fn create_employee(
    store: web::Data<dyn AttendanceStore>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let mut payload = payload.into_inner();
    payload.validate().map_err(ApiError::BadRequest)?;

    payload.employee_id = payload.employee_id.trim().to_string();
    payload.email = payload.email.trim().to_string();

    let employee = store.create_employee(&payload).await?;
    info!("Employee registered");

    Ok(HttpResponse::Created().json(employee))
}

/// Delete an employee and, on the storage side, their attendance
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(("employee_id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted", body = Object, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
#[instrument(name = "delete_employee", skip(store))]
pub async fn delete_employee(
    store: web::Data<dyn AttendanceStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    store.delete_employee(&path.into_inner()).await?;
    info!("Employee deleted");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully"
    })))
}

//! Client side of the employee/attendance storage service.
//!
//! The service owns both collections. Every read here is a fresh snapshot and
//! two reads are never assumed to be consistent with each other.

pub mod rest;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::error::AttendanceError;
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::{CreateEmployee, Employee};

#[derive(Debug, Default, Clone, Serialize)]
pub struct AttendanceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    /// The service answered with a non-success status other than 404.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Storage service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Storage service returned inconsistent data: {0}")]
    Integrity(#[from] AttendanceError),
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    async fn get_employee(&self, employee_id: &str) -> Result<Employee, StoreError>;

    async fn create_employee(&self, employee: &CreateEmployee) -> Result<Employee, StoreError>;

    /// Also removes the employee's attendance records on the service side.
    async fn delete_employee(&self, employee_id: &str) -> Result<(), StoreError>;

    async fn list_attendance(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, StoreError>;

    /// Creates or replaces the record for (employee, date).
    async fn mark_attendance(&self, record: &AttendanceRecord) -> Result<AttendanceRecord, StoreError>;
}

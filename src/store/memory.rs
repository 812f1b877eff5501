use std::sync::Mutex;

use async_trait::async_trait;

use super::{AttendanceFilter, AttendanceStore, StoreError};
use crate::model::attendance::{AttendanceRecord, AttendanceRow, records_from_rows};
use crate::model::employee::{CreateEmployee, Employee};

/// Stand-in for the storage service in handler tests. Keeps rows in their raw
/// wire shape so reads go through the same conversion as the REST client.
#[derive(Default)]
pub struct MemoryStore {
    employees: Mutex<Vec<Employee>>,
    rows: Mutex<Vec<AttendanceRow>>,
}

impl MemoryStore {
    pub fn new(employees: Vec<Employee>, records: Vec<AttendanceRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|r| AttendanceRow {
                employee_id: r.employee_id,
                date: r.date.to_string(),
                status: r.status.to_string(),
            })
            .collect();
        Self {
            employees: Mutex::new(employees),
            rows: Mutex::new(rows),
        }
    }

    pub fn push_raw_row(&self, row: AttendanceRow) {
        self.rows.lock().unwrap().push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get_employee(&self, employee_id: &str) -> Result<Employee, StoreError> {
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("Employee not found".into()))
    }

    async fn create_employee(&self, employee: &CreateEmployee) -> Result<Employee, StoreError> {
        let mut employees = self.employees.lock().unwrap();
        if employees.iter().any(|e| e.employee_id == employee.employee_id) {
            return Err(StoreError::Rejected {
                status: 409,
                message: format!("Employee ID '{}' is already registered", employee.employee_id),
            });
        }
        let created = Employee {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
        };
        employees.push(created.clone());
        Ok(created)
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), StoreError> {
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.employee_id != employee_id);
        if employees.len() == before {
            return Err(StoreError::NotFound("Employee not found".into()));
        }
        self.rows.lock().unwrap().retain(|r| r.employee_id != employee_id);
        Ok(())
    }

    async fn list_attendance(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, StoreError> {
        let date = filter.date.map(|d| d.to_string());
        let rows: Vec<AttendanceRow> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.employee_id.as_ref().is_none_or(|id| &r.employee_id == id))
            .filter(|r| date.as_ref().is_none_or(|d| &r.date == d))
            .cloned()
            .collect();
        Ok(records_from_rows(rows)?)
    }

    async fn mark_attendance(&self, record: &AttendanceRecord) -> Result<AttendanceRecord, StoreError> {
        self.get_employee(&record.employee_id).await?;

        let row = AttendanceRow {
            employee_id: record.employee_id.clone(),
            date: record.date.to_string(),
            status: record.status.to_string(),
        };
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.employee_id == row.employee_id && r.date == row.date)
        {
            Some(existing) => *existing = row,
            None => rows.push(row),
        }
        Ok(record.clone())
    }
}

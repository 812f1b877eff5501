use std::time::Duration;

use anyhow::{Context, bail};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::{AttendanceFilter, AttendanceStore, StoreError};
use crate::model::attendance::{AttendanceRecord, AttendanceRow, records_from_rows};
use crate::model::employee::{CreateEmployee, Employee};

/// Talks to the storage service over its JSON REST API.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base: Url,
}

/// Error payload shape used by the storage service.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl RestStore {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("invalid store url '{}'", base_url))?;
        if base.cannot_be_a_base() {
            bail!("store url '{}' cannot be used as a base", base_url);
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { client, base })
    }

    /// Appends path segments to the base url, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                detail: serde_json::Value::String(detail),
            }) => detail,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };
        warn!(status = status.as_u16(), %message, "storage service rejected request");

        if status == StatusCode::NOT_FOUND {
            Err(StoreError::NotFound(message))
        } else {
            Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        Ok(self.send(request).await?.json::<T>().await?)
    }
}

#[async_trait]
impl AttendanceStore for RestStore {
    #[instrument(skip(self))]
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let employees: Vec<Employee> = self
            .fetch(self.client.get(self.endpoint(&["employees", ""])))
            .await?;
        debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }

    #[instrument(skip(self))]
    async fn get_employee(&self, employee_id: &str) -> Result<Employee, StoreError> {
        self.fetch(self.client.get(self.endpoint(&["employees", employee_id])))
            .await
    }

    #[instrument(skip(self, employee), fields(employee_id = %employee.employee_id))]
    async fn create_employee(&self, employee: &CreateEmployee) -> Result<Employee, StoreError> {
        self.fetch(
            self.client
                .post(self.endpoint(&["employees", ""]))
                .json(employee),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_employee(&self, employee_id: &str) -> Result<(), StoreError> {
        self.send(self.client.delete(self.endpoint(&["employees", employee_id])))
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_attendance(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, StoreError> {
        let rows: Vec<AttendanceRow> = self
            .fetch(
                self.client
                    .get(self.endpoint(&["attendance", ""]))
                    .query(filter),
            )
            .await?;
        debug!(count = rows.len(), "fetched attendance rows");
        Ok(records_from_rows(rows)?)
    }

    #[instrument(skip(self, record), fields(employee_id = %record.employee_id, date = %record.date))]
    async fn mark_attendance(&self, record: &AttendanceRecord) -> Result<AttendanceRecord, StoreError> {
        let row: AttendanceRow = self
            .fetch(
                self.client
                    .post(self.endpoint(&["attendance", ""]))
                    .json(record),
            )
            .await?;
        Ok(AttendanceRecord::try_from(row)?)
    }
}

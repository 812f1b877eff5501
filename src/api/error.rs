use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::error::AttendanceError;
use crate::store::StoreError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),

    #[display(fmt = "{}", _0)]
    NotFound(String),

    /// A 4xx answer from the storage service, passed through.
    #[display(fmt = "{}", message)]
    Rejected { status: StatusCode, message: String },

    #[display(fmt = "{}", _0)]
    BadGateway(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

impl From<AttendanceError> for ApiError {
    fn from(e: AttendanceError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(message) => ApiError::NotFound(message),
            StoreError::Rejected { status, message } => match StatusCode::from_u16(status) {
                Ok(status) if status.is_client_error() => ApiError::Rejected { status, message },
                _ => {
                    tracing::error!(status, %message, "storage service failed");
                    ApiError::BadGateway("Storage service error".to_string())
                }
            },
            StoreError::Transport(e) => {
                tracing::error!(error = %e, "storage service unreachable");
                ApiError::BadGateway("Storage service unavailable".to_string())
            }
            StoreError::Integrity(e) => {
                tracing::error!(error = %e, "storage service returned bad attendance data");
                ApiError::BadGateway(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_store_errors_to_statuses() {
        let not_found: ApiError = StoreError::NotFound("Employee not found".into()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict: ApiError = StoreError::Rejected {
            status: 409,
            message: "taken".into(),
        }
        .into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(conflict.to_string(), "taken");

        let upstream_crash: ApiError = StoreError::Rejected {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(upstream_crash.status_code(), StatusCode::BAD_GATEWAY);

        let integrity: ApiError = StoreError::Integrity(AttendanceError::InvalidDate("x".into())).into();
        assert_eq!(integrity.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err: ApiError = AttendanceError::InvalidMonthKey("2024-13".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid month '2024-13', expected YYYY-MM");
    }
}

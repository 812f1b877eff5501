use thiserror::Error;

/// Failures raised by the attendance engine on malformed input.
///
/// These are never swallowed inside the engine; callers decide how to surface them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonthKey(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown attendance status '{status}' for employee {employee_id} on {date}")]
    UnknownStatus {
        employee_id: String,
        date: String,
        status: String,
    },
}

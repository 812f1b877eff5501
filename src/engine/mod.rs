//! Attendance aggregation and calendar projection.
//!
//! Every function here is a pure transform over request-scoped snapshots.
//! Nothing is cached and nothing reads the clock; "today" is always passed in.

pub mod calendar;
pub mod index;
pub mod month_filter;
pub mod roster;
pub mod selection;
pub mod stats;
pub mod views;

pub use calendar::{CalendarDay, DayCell, MonthGrid};
pub use index::RecordIndex;
pub use month_filter::records_in_month;
pub use roster::{RosterEntry, project_roster};
pub use selection::{EmployeeKeyed, Selection};
pub use stats::AttendanceStats;

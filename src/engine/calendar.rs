use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::engine::index::RecordIndex;
use crate::model::attendance::AttendanceStatus;
use crate::model::month::MonthKey;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One slot of a Sunday-first month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarDay {
    /// Padding before the 1st; carries no date.
    Blank,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: Option<AttendanceStatus>,
    pub is_today: bool,
}

impl CalendarDay {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarDay::Blank => None,
            CalendarDay::Day(cell) => Some(cell.date),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarDay::Blank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: MonthKey,
    pub month_name: &'static str,
    /// Header row, in the same Sunday-first order as `days`.
    pub weekdays: [&'static str; 7],
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Lays out `month` with leading blanks up to the weekday of the 1st
    /// (0 = Sunday). `today` only drives the `is_today` flag.
    pub fn build(month: MonthKey, today: Option<NaiveDate>) -> Self {
        let leading_blanks = month.first_day().weekday().num_days_from_sunday();
        let days_in_month = month.days_in_month();

        let mut days = Vec::with_capacity((leading_blanks + days_in_month) as usize);
        days.extend((0..leading_blanks).map(|_| CalendarDay::Blank));
        days.extend(
            month
                .first_day()
                .iter_days()
                .take(days_in_month as usize)
                .map(|date| {
                    CalendarDay::Day(DayCell {
                        date,
                        status: None,
                        is_today: Some(date) == today,
                    })
                }),
        );

        tracing::debug!(%month, leading_blanks, days_in_month, "built month grid");

        Self {
            month,
            month_name: month.name(),
            weekdays: WEEKDAY_LABELS,
            leading_blanks,
            days_in_month,
            days,
        }
    }

    /// Fills each day cell with the employee's indexed status, if any.
    pub fn with_attendance(mut self, employee_id: &str, index: &RecordIndex) -> Self {
        for slot in &mut self.days {
            if let CalendarDay::Day(cell) = slot {
                cell.status = index.status(employee_id, cell.date);
            }
        }
        self
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter_map(|slot| match slot {
            CalendarDay::Day(cell) => Some(cell),
            CalendarDay::Blank => None,
        })
    }
}

impl DayCell {
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceRecord;
    use crate::model::attendance::AttendanceStatus::{Absent, Present};

    fn month(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn leap_february_2024() {
        let grid = MonthGrid::build(month("2024-02"), None);
        // 1 Feb 2024 is a Thursday
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days_in_month, 29);
        assert_eq!(grid.days.len(), 33);
        assert!(grid.days[..4].iter().all(CalendarDay::is_blank));
        assert_eq!(grid.day_cells().count(), 29);

        let last = grid.day_cells().last().unwrap();
        assert_eq!(last.iso_date(), "2024-02-29");
    }

    #[test]
    fn no_padding_when_month_starts_on_sunday() {
        // 1 Sep 2024 is a Sunday
        let grid = MonthGrid::build(month("2024-09"), None);
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.days.len(), 30);
        assert_eq!(grid.days[0].date(), NaiveDate::from_ymd_opt(2024, 9, 1));
    }

    #[test]
    fn blanks_never_carry_dates_and_days_are_padded() {
        let grid = MonthGrid::build(month("2023-01"), None);
        for slot in &grid.days {
            assert_eq!(slot.is_blank(), slot.date().is_none());
        }
        let first = grid.day_cells().next().unwrap();
        assert_eq!(first.iso_date(), "2023-01-01");
    }

    #[test]
    fn same_month_same_grid() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10);
        assert_eq!(
            MonthGrid::build(month("2024-02"), today),
            MonthGrid::build(month("2024-02"), today)
        );
    }

    #[test]
    fn flags_today_only_inside_the_month() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10);
        let grid = MonthGrid::build(month("2024-02"), today);
        let flagged: Vec<_> = grid.day_cells().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(Some(flagged[0].date), today);

        let other = MonthGrid::build(month("2024-03"), today);
        assert!(other.day_cells().all(|c| !c.is_today));
    }

    #[test]
    fn joins_employee_records() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        let records = vec![
            AttendanceRecord::new("E1", d(1), Present),
            AttendanceRecord::new("E1", d(2), Absent),
            AttendanceRecord::new("E2", d(3), Present),
        ];
        let index = RecordIndex::build(&records);
        let grid = MonthGrid::build(month("2024-03"), None).with_attendance("E1", &index);

        let statuses: Vec<_> = grid.day_cells().take(3).map(|c| c.status).collect();
        assert_eq!(statuses, vec![Some(Present), Some(Absent), None]);
    }

    #[test]
    fn serializes_blank_and_day_slots() {
        let grid = MonthGrid::build(month("2024-02"), None);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["month"], "2024-02");
        assert_eq!(
            json["weekdays"],
            serde_json::json!(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"])
        );
        assert_eq!(json["days"][0], serde_json::json!({"kind": "blank"}));
        assert_eq!(json["days"][4]["kind"], "day");
        assert_eq!(json["days"][4]["date"], "2024-02-01");
        assert_eq!(json["days"][4]["status"], serde_json::Value::Null);
    }
}

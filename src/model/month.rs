use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::AttendanceError;

/// A calendar month, written `YYYY-MM` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, AttendanceError> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return Err(AttendanceError::InvalidMonthKey(format!(
                "{:04}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a date belongs to.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // year and month are range-checked on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = AttendanceError;

    /// Accepts exactly `YYYY-MM`; nothing is clamped or guessed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AttendanceError::InvalidMonthKey(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        let (year, month) = (&s[..4], &s[5..]);
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Strict `YYYY-MM-DD` parsing; chrono alone accepts unpadded fields.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, AttendanceError> {
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    let invalid = || AttendanceError::InvalidDate(s.to_string());
    if !well_formed {
        return Err(invalid());
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
    // same year range as MonthKey
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_month() {
        let key: MonthKey = "2024-02".parse().unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 2);
        assert_eq!(key.to_string(), "2024-02");
        assert_eq!(key.name(), "February");
    }

    #[test]
    fn rejects_malformed_months() {
        for raw in ["2024-13", "2024-00", "2024-2", "24-02", "2024/02", "0000-01", "2024-02-01", ""] {
            assert!(
                matches!(raw.parse::<MonthKey>(), Err(AttendanceError::InvalidMonthKey(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn days_in_month_follows_leap_rule() {
        let days = |s: &str| s.parse::<MonthKey>().unwrap().days_in_month();
        assert_eq!(days("2024-02"), 29);
        assert_eq!(days("2023-02"), 28);
        assert_eq!(days("1900-02"), 28);
        assert_eq!(days("2000-02"), 29);
        assert_eq!(days("2024-04"), 30);
        assert_eq!(days("2024-12"), 31);
    }

    #[test]
    fn contains_checks_year_and_month() {
        let key: MonthKey = "2024-03".parse().unwrap();
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    }

    #[test]
    fn serde_uses_wire_format() {
        let key: MonthKey = serde_json::from_str("\"2024-03\"").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-03\"");
        assert!(serde_json::from_str::<MonthKey>("\"2024-3\"").is_err());
    }

    #[test]
    fn iso_dates_must_be_zero_padded() {
        assert_eq!(
            parse_iso_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_iso_date("2024-3-1").is_err());
        assert!(parse_iso_date("2024-02-30").is_err());
        assert!(parse_iso_date("2024-03-01T00:00").is_err());
    }

    #[test]
    fn iso_dates_share_the_month_year_range() {
        assert!(parse_iso_date("0000-03-01").is_err());
        let first = parse_iso_date("0001-01-01").unwrap();
        assert_eq!(MonthKey::of(first).to_string(), "0001-01");
        assert!(parse_iso_date("9999-12-31").is_ok());
    }
}

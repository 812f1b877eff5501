use chrono::{NaiveDate, Utc};

/// Source of "today" for request handlers. The engine only ever sees the
/// date a handler read from here.
///
/// `System` reads the UTC calendar date, independent of the host timezone.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Utc::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

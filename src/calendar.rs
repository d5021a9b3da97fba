use chrono::{Datelike, NaiveDate, Weekday};

/// Business-calendar collaborator used for annualization.
///
/// The core only needs day counting; holiday tables live with the host
/// application, which can supply its own implementation.
pub trait BusinessCalendarTrait: Send + Sync {
    /// Number of business days from `start` (inclusive) to `end` (exclusive).
    fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64;
}

/// Weekday-only calendar: Saturdays and Sundays are skipped, every other
/// day counts as a business day.
#[derive(Debug, Default, Clone)]
pub struct WeekdayCalendar;

impl BusinessCalendarTrait for WeekdayCalendar {
    fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut days = 0;
        let mut current = start;
        while current < end {
            if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
                days += 1;
            }
            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        days
    }
}

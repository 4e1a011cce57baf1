//! Console reports built on top of [`GalaxyApi`](crate::core::galaxy::GalaxyApi).
//!
//! Every report fetches what it needs, aggregates client-side and writes plain
//! text to the writer it is handed. Nothing is ever written back to Galaxy.

pub mod job_runtimes;
pub mod stats;
pub mod usage;
pub mod user_emails;

use anyhow::{Result, anyhow};
use chrono::{Days, NaiveDate};

/// Calendar-day subtraction: `days_before(2024-03-01, 1)` is 2024-02-29.
pub fn days_before(today: NaiveDate, days: u64) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| anyhow!("{} days before {} is out of range", days, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_before_crosses_month_and_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            days_before(today, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            days_before(today, 365).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 2).unwrap()
        );
    }

    #[test]
    fn zero_days_is_today() {
        let today = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
        assert_eq!(days_before(today, 0).unwrap(), today);
    }

    #[test]
    fn absurd_windows_are_errors() {
        let today = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
        assert!(days_before(today, u64::MAX).is_err());
    }
}

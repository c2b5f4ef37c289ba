// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic helpers.

use crate::error::DomainError;
use time::{Date, Duration, OffsetDateTime};

/// Moves a date forward one calendar year.
///
/// February 29 lands on March 1 of the following year, which keeps the
/// result a real date without shortening the term.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the resulting year
/// is out of range.
pub fn add_one_year(date: Date) -> Result<Date, DomainError> {
    let year: i32 = date
        .year()
        .checked_add(1)
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("add one year"),
        })?;
    Date::from_calendar_date(year, date.month(), date.day())
        .or_else(|_| Date::from_calendar_date(year, time::Month::March, 1))
        .map_err(|_| DomainError::DateArithmeticOverflow {
            operation: String::from("add one year"),
        })
}

/// Whether `date` falls within the last `days` days before `today`.
///
/// The window is exclusive at the far end: with `days` of 30, a date
/// exactly 30 days old is outside the window.
#[must_use]
pub fn within_last_days(date: Date, today: Date, days: i64) -> bool {
    today
        .checked_sub(Duration::days(days))
        .is_none_or(|cutoff| date > cutoff)
}

/// Whether `timestamp` falls within the last `days` days before `now`.
#[must_use]
pub fn within_last_days_at(timestamp: OffsetDateTime, now: OffsetDateTime, days: i64) -> bool {
    now.checked_sub(Duration::days(days))
        .is_none_or(|cutoff| timestamp > cutoff)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_plain_date_keeps_month_and_day() {
        let next: Date = add_one_year(date!(2024 - 07 - 01)).unwrap();
        assert_eq!(next, date!(2025 - 07 - 01));
    }

    #[test]
    fn test_leap_day_rolls_to_march_first() {
        let next: Date = add_one_year(date!(2024 - 02 - 29)).unwrap();
        assert_eq!(next, date!(2025 - 03 - 01));
    }

    #[test]
    fn test_consecutive_hops_accumulate() {
        let first: Date = add_one_year(date!(2024 - 07 - 01)).unwrap();
        let second: Date = add_one_year(first).unwrap();
        assert_eq!(second, date!(2026 - 07 - 01));
    }

    #[test]
    fn test_window_is_exclusive_at_far_end() {
        let today: Date = date!(2024 - 07 - 31);
        assert!(within_last_days(date!(2024 - 07 - 02), today, 30));
        assert!(!within_last_days(date!(2024 - 07 - 01), today, 30));
    }

    #[test]
    fn test_timestamp_window() {
        let now: OffsetDateTime = datetime!(2024-07-31 12:00 UTC);
        assert!(within_last_days_at(datetime!(2024-07-25 12:00 UTC), now, 7));
        assert!(!within_last_days_at(datetime!(2024-07-20 12:00 UTC), now, 7));
    }
}

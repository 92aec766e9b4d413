//! Expiry-date checking with month-end semantics.
//!
//! Card expiry dates conventionally denote a month of validity, not a single
//! day: a card stamped 04/2026 works through 30 April 2026. The stored date's
//! day component is therefore ignored; the check normalizes to the last
//! calendar day of the month before comparing against the current instant.
//! The clock is always passed in explicitly so expiry tests stay
//! deterministic.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Returns the last calendar day of the given date's month.
///
/// Computed as the day before the first of the following month, so leap
/// February comes out right. Returns `None` only when the following month's
/// first day is outside chrono's representable range.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// Returns true if the expiry month lies wholly before `now`.
///
/// The card stays valid through the entire last day of its expiry month;
/// it is expired once the current date is strictly past that day. Dates
/// whose month-end cannot be computed are treated as not expired.
pub fn is_expired(expiry: NaiveDate, now: DateTime<Utc>) -> bool {
    match last_day_of_month(expiry) {
        Some(last_day) => last_day < now.date_naive(),
        None => false,
    }
}

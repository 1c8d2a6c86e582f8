//! `Date` type and the [`DateLike`] abstraction.
//!
//! [`Date`] is a date-only value.  All calendar math (month lengths, leap
//! years, day-of-week) is delegated to [`chrono::NaiveDate`]; this type only
//! narrows the API to what the business-day engine needs and reports
//! out-of-range arithmetic through [`bd_core::Error`].
//!
//! The engine accepts anything implementing [`DateLike`], so callers holding
//! a `NaiveDateTime` keep their time-of-day through stepping operations while
//! weekend and holiday checks only look at the date component.

use bd_core::errors::{Error, Result};
use bd_core::Settings;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::weekday::Weekday;

/// A calendar date without a time-of-day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Date(NaiveDate);

impl Date {
    /// The earliest representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// The latest representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                Error::Date(format!(
                    "{year}-{month:02}-{day:02} is not a valid calendar date"
                ))
            })
    }

    /// Today's date: the [`Settings`] evaluation date if one is set,
    /// otherwise the local system date.
    pub fn today() -> Self {
        Date(Settings::instance().evaluation_date())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` calendar days (negative moves backwards).
    ///
    /// Returns an error if the result is outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn add_days(self, n: i64) -> Result<Self> {
        let moved = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        moved
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} {n:+} days is out of range")))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Result<Self> {
        self.0
            .with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.pred_opt())
            .map(Date)
            .ok_or_else(|| Error::Date(format!("end of month after {self} is out of range")))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        rhs.days_between(self)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

/// Truncates to the date, discarding the time-of-day.
impl From<NaiveDateTime> for Date {
    fn from(dt: NaiveDateTime) -> Self {
        Date(dt.date())
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self {
        d.0
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── DateLike ──────────────────────────────────────────────────────────────────

/// A point in time the business-day engine can reason about.
///
/// Weekend and holiday tests only ever look at [`DateLike::date`]; stepping
/// goes through [`DateLike::shift_days`], which keeps any time-of-day intact.
/// Ordering is the type's own, so a `NaiveDateTime` compares at full
/// precision.
pub trait DateLike: Copy + Ord + std::fmt::Debug + std::fmt::Display {
    /// The date-only component.
    fn date(&self) -> Date;

    /// Move by `n` whole calendar days.
    fn shift_days(self, n: i64) -> Result<Self>;

    /// Seconds elapsed since midnight; `0` for date-only types.
    fn seconds_into_day(&self) -> u32 {
        0
    }
}

impl DateLike for Date {
    fn date(&self) -> Date {
        *self
    }

    fn shift_days(self, n: i64) -> Result<Self> {
        self.add_days(n)
    }
}

impl DateLike for NaiveDate {
    fn date(&self) -> Date {
        Date(*self)
    }

    fn shift_days(self, n: i64) -> Result<Self> {
        Date(self).add_days(n).map(NaiveDate::from)
    }
}

impl DateLike for NaiveDateTime {
    fn date(&self) -> Date {
        Date(NaiveDateTime::date(self))
    }

    fn shift_days(self, n: i64) -> Result<Self> {
        TimeDelta::try_days(n)
            .and_then(|delta| self.checked_add_signed(delta))
            .ok_or_else(|| Error::Date(format!("{self} {n:+} days is out of range")))
    }

    fn seconds_into_day(&self) -> u32 {
        self.num_seconds_from_midnight()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_dates() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn weekday() {
        // 2023-12-24 is a Sunday
        let d = Date::from_ymd(2023, 12, 24).unwrap();
        assert_eq!(d.weekday(), Weekday::Sunday);
        // 2024-01-01 is a Monday
        let d2 = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d2.weekday(), Weekday::Monday);
    }

    #[test]
    fn add_days_crosses_year() {
        let d = Date::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1).unwrap(), Date::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-365).unwrap(), Date::from_ymd(2022, 12, 31).unwrap());
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap() - d, 1);
    }

    #[test]
    fn add_days_out_of_range() {
        assert!(matches!(Date::MAX.add_days(1), Err(Error::Date(_))));
        assert!(matches!(Date::MIN.add_days(-1), Err(Error::Date(_))));
    }

    #[test]
    fn end_of_month_handles_leap_years() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().unwrap().day_of_month(), 29);
        let d = Date::from_ymd(2023, 12, 5).unwrap();
        assert_eq!(d.end_of_month().unwrap(), Date::from_ymd(2023, 12, 31).unwrap());
    }

    #[test]
    fn datetime_truncates_and_keeps_time_when_shifted() {
        let dt = NaiveDate::from_ymd_opt(2023, 12, 24)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(DateLike::date(&dt), Date::from_ymd(2023, 12, 24).unwrap());
        let next = dt.shift_days(1).unwrap();
        assert_eq!(next.time(), dt.time());
        assert_eq!(DateLike::date(&next), Date::from_ymd(2023, 12, 25).unwrap());
        assert_eq!(dt.seconds_into_day(), 10 * 3600 + 30 * 60);
        assert_eq!(Date::from_ymd(2023, 12, 24).unwrap().seconds_into_day(), 0);
    }

    #[test]
    fn display_is_iso() {
        let d = Date::from_ymd(2023, 1, 5).unwrap();
        assert_eq!(d.to_string(), "2023-01-05");
        assert_eq!(format!("{d:?}"), "Date(2023-01-05)");
    }
}

//! # bd-time
//!
//! Date, weekend policy, holiday set, and business-calendar types.
//!
//! The entry point is the [`Calendar`] trait, implemented by
//! [`BusinessCalendar`] (a locale's weekend plus optional holidays) and by a
//! bare [`WeekendDays`] set.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rolling conventions for non-business days.
pub mod business_day_convention;

/// Daily opening windows.
pub mod business_hours;

/// `Calendar` trait and `BusinessCalendar`.
pub mod calendar;

/// `CalendarConfig` builder.
pub mod config;

/// `Date` type and the `DateLike` abstraction.
pub mod date;

/// `HolidaySet` — caller-supplied holiday dates.
pub mod holidays;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WeekendDays` — the non-working days of the week.
pub mod weekend;

/// Locale → weekend lookup table.
pub mod weekend_policy;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use business_hours::BusinessHours;
pub use calendar::{BusinessCalendar, Calendar, DEFAULT_STEP_LIMIT};
pub use config::CalendarConfig;
pub use date::{Date, DateLike};
pub use holidays::HolidaySet;
pub use weekday::Weekday;
pub use weekend::WeekendDays;
pub use weekend_policy::{resolve_weekend_days, DEFAULT_LOCALE};

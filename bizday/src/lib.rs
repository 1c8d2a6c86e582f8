//! # bizday
//!
//! Business-day arithmetic over locale weekends and caller-supplied
//! holidays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than on the individual `bd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bizday = "0.1"
//! ```
//!
//! ```rust
//! use bizday::prelude::*;
//!
//! let holidays: HolidaySet = [Date::from_ymd(2023, 12, 25)?].into_iter().collect();
//! let cal = BusinessCalendar::for_locale("en-US").with_holidays(&holidays);
//!
//! let start = Date::from_ymd(2023, 12, 24)?;
//! assert_eq!(cal.next_business_day(start)?, Date::from_ymd(2023, 12, 26)?);
//! assert_eq!(cal.working_days_between(start, Date::from_ymd(2023, 12, 31)?), 4);
//! # Ok::<(), bizday::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the process-wide evaluation date.
pub use bd_core as core;

/// Dates, weekend policies, holidays, and calendars.
pub use bd_time as time;

/// The types most callers need, in one import.
pub mod prelude {
    pub use bd_core::{Error, Result, ScopedEvaluationDate, Settings};
    pub use bd_time::{
        BusinessCalendar, BusinessDayConvention, BusinessHours, Calendar, CalendarConfig, Date,
        DateLike, HolidaySet, Weekday, WeekendDays,
    };
}

//! `BusinessHours` — an opening window within the day.

use bd_core::ensure;
use bd_core::errors::Result;
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::calendar::Calendar;

/// A daily window `[open, close]` of working time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BusinessHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl BusinessHours {
    /// Create a window from `open` to `close`, both inclusive.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if `open` is after `close`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self> {
        ensure!(open <= close, "opening time {open} is after closing time {close}");
        Ok(Self { open, close })
    }

    /// Opening time.
    pub fn open(&self) -> NaiveTime {
        self.open
    }

    /// Closing time.
    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Return `true` if the time-of-day of `at` lies inside the window.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let t = at.time();
        t >= self.open && t <= self.close
    }

    /// Count hourly samples `start, start + 1h, …` strictly before `end`
    /// that fall inside the window, on any day.
    ///
    /// # Example
    /// ```
    /// use bd_time::BusinessHours;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let hours = BusinessHours::new(
    ///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    /// )?;
    /// let day = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
    /// let start = day.and_hms_opt(8, 0, 0).unwrap();
    /// let end = day.and_hms_opt(17, 0, 0).unwrap();
    /// assert_eq!(hours.hours_between(start, end), 9);
    /// # Ok::<(), bd_core::Error>(())
    /// ```
    pub fn hours_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> u32 {
        self.count_samples(start, end, |_| true)
    }

    /// Like [`hours_between`](Self::hours_between), but only samples on
    /// business days of `cal` count.
    pub fn business_hours_between<C: Calendar>(
        &self,
        cal: &C,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> u32 {
        self.count_samples(start, end, |at| cal.is_business_day(at))
    }

    fn count_samples<F>(&self, start: NaiveDateTime, end: NaiveDateTime, on_day: F) -> u32
    where
        F: Fn(NaiveDateTime) -> bool,
    {
        let mut count = 0;
        let mut current = start;
        while current < end {
            if self.contains(current) && on_day(current) {
                count += 1;
            }
            match current.checked_add_signed(TimeDelta::hours(1)) {
                Some(next) => current = next,
                None => break,
            }
        }
        count
    }
}

/// Goes through [`BusinessHours::new`], so an inverted window is rejected.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BusinessHours {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Window {
            open: NaiveTime,
            close: NaiveTime,
        }

        let Window { open, close } = Window::deserialize(deserializer)?;
        BusinessHours::new(open, close).map_err(serde::de::Error::custom)
    }
}

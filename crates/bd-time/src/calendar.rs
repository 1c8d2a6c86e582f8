//! `Calendar` trait and the locale-driven [`BusinessCalendar`].
//!
//! A calendar knows which days of the week are weekends and, optionally,
//! which dates are holidays.  Everything else (stepping by business days,
//! rolling onto business days, counting over ranges) is provided by the
//! trait in terms of those two facts.
//!
//! Every operation is generic over [`DateLike`]: pass a [`Date`], a
//! `NaiveDate`, or a `NaiveDateTime`.  Weekend and holiday checks use the
//! date component only; stepping keeps the time-of-day.

use bd_core::errors::{Error, Result};
use bd_core::ensure;
use tracing::{trace, warn};

use crate::business_day_convention::BusinessDayConvention;
use crate::date::{Date, DateLike};
use crate::holidays::HolidaySet;
use crate::weekend::WeekendDays;
use crate::weekend_policy::{resolve_weekend_days, DEFAULT_LOCALE};

/// Default cap on consecutive non-business days a search may skip: ten years.
pub const DEFAULT_STEP_LIMIT: u32 = 3660;

/// A business-day calendar.
///
/// Implementors supply the weekend set and holidays; the provided methods
/// do the date arithmetic.
pub trait Calendar {
    /// The days of the week that are never business days.
    fn weekend(&self) -> WeekendDays;

    /// Holidays on top of the weekend, if any.
    fn holidays(&self) -> Option<&HolidaySet> {
        None
    }

    /// How many consecutive non-business days a directional search may skip
    /// before giving up with [`Error::ImpossibleSchedule`].
    fn step_limit(&self) -> u32 {
        DEFAULT_STEP_LIMIT
    }

    /// Return `true` if `date` falls on a weekend day.
    fn is_weekend<D: DateLike>(&self, date: D) -> bool {
        self.weekend().contains(date.date().weekday())
    }

    /// Return `true` if the date of `date` is a listed holiday.
    fn is_holiday<D: DateLike>(&self, date: D) -> bool {
        self.holidays().is_some_and(|h| h.contains(date))
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_business_day<D: DateLike>(&self, date: D) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return `true` if `date` is a weekend day or a holiday.
    fn is_weekend_or_holiday<D: DateLike>(&self, date: D) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }

    /// Move `date` by `n` business days (negative moves backwards).
    ///
    /// `n == 0` returns `date` unchanged, even when it is not a business day.
    /// Otherwise the result is always a business day.
    fn add_business_days<D: DateLike>(&self, date: D, n: i32) -> Result<D> {
        let step = if n < 0 { -1 } else { 1 };
        let mut current = date;
        for _ in 0..n.unsigned_abs() {
            current = seek_business_day(self, current, step)?;
        }
        trace!(%date, n, result = %current, "added business days");
        Ok(current)
    }

    /// The first business day strictly after `date`.
    fn next_business_day<D: DateLike>(&self, date: D) -> Result<D> {
        seek_business_day(self, date, 1)
    }

    /// The last business day strictly before `date`.
    fn previous_business_day<D: DateLike>(&self, date: D) -> Result<D> {
        seek_business_day(self, date, -1)
    }

    /// The first business day after today (see [`Date::today`]).
    fn next_business_day_from_today(&self) -> Result<Date> {
        self.next_business_day(Date::today())
    }

    /// Roll `date` onto a business day according to `convention`.
    fn adjust<D: DateLike>(&self, date: D, convention: BusinessDayConvention) -> Result<D> {
        use BusinessDayConvention as C;

        if convention == C::EndOfMonth {
            let day = date.date();
            let last = date.shift_days(day.days_between(day.end_of_month()?))?;
            return self.adjust(last, C::Preceding);
        }
        if convention == C::Unadjusted || self.is_business_day(date) {
            return Ok(date);
        }
        let month = date.date().month();
        match convention {
            C::Following => self.next_business_day(date),
            C::Preceding => self.previous_business_day(date),
            C::ModifiedFollowing => {
                let fwd = self.next_business_day(date)?;
                if fwd.date().month() == month {
                    Ok(fwd)
                } else {
                    self.previous_business_day(date)
                }
            }
            C::ModifiedPreceding => {
                let bwd = self.previous_business_day(date)?;
                if bwd.date().month() == month {
                    Ok(bwd)
                } else {
                    self.next_business_day(date)
                }
            }
            C::Nearest => {
                let fwd = self.next_business_day(date)?;
                let bwd = self.previous_business_day(date)?;
                let day = date.date();
                if day.days_between(fwd.date()) <= bwd.date().days_between(day) {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
            C::Unadjusted | C::EndOfMonth => Ok(date),
        }
    }

    /// Count the days in `[start, end]` (date-only, both ends included) that
    /// are not weekend days.  Holidays are not consulted.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start > end`, compared at the
    /// full precision of `D`.
    fn business_days_until<D: DateLike>(&self, start: D, end: D) -> Result<u64> {
        if start > end {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        let (first, len) = span(start.date(), end.date());
        Ok(len - self.weekend().count_in_run(first.weekday(), len))
    }

    /// Count the business days in `[start, end]` (date-only, both ends
    /// included), excluding both weekend days and holidays.
    ///
    /// A reversed range is empty and yields `0`.
    fn working_days_between<D: DateLike>(&self, start: D, end: D) -> u64 {
        let (from, to) = (start.date(), end.date());
        if from > to {
            return 0;
        }
        let (first, len) = span(from, to);
        let weekend = self.weekend();
        let weekend_days = weekend.count_in_run(first.weekday(), len);
        let weekday_holidays = self.holidays().map_or(0, |h| {
            h.in_range(from, to)
                .into_iter()
                .filter(|d| !weekend.contains(d.weekday()))
                .count() as u64
        });
        len - weekend_days - weekday_holidays
    }

    /// Count the weekend days in `[start, end]` (date-only, both ends
    /// included).  A reversed range yields `0`.
    fn weekend_days_between<D: DateLike>(&self, start: D, end: D) -> u64 {
        let (from, to) = (start.date(), end.date());
        if from > to {
            return 0;
        }
        let (first, len) = span(from, to);
        self.weekend().count_in_run(first.weekday(), len)
    }
}

/// First day and length of the inclusive range `[from, to]`, `from <= to`.
fn span(from: Date, to: Date) -> (Date, u64) {
    (from, from.days_between(to).unsigned_abs() + 1)
}

/// Step from `date` one calendar day at a time in direction `step` until a
/// business day is reached.  The start date itself is never returned.
fn seek_business_day<C, D>(cal: &C, date: D, step: i64) -> Result<D>
where
    C: Calendar + ?Sized,
    D: DateLike,
{
    let limit = cal.step_limit();
    let mut current = date;
    let mut skipped = 0u32;
    loop {
        current = current.shift_days(step)?;
        if cal.is_business_day(current) {
            return Ok(current);
        }
        skipped += 1;
        if skipped >= limit {
            warn!(%date, step, skipped, "no business day within step limit");
            return Err(Error::ImpossibleSchedule { steps: skipped });
        }
    }
}

/// A weekend set on its own is a calendar without holidays.
impl Calendar for WeekendDays {
    fn weekend(&self) -> WeekendDays {
        *self
    }
}

// ── BusinessCalendar ──────────────────────────────────────────────────────────

/// A weekend set resolved from a locale plus an optional borrowed holiday
/// set.
///
/// Cheap to build and `Copy`; construct one per query or keep one around.
/// The holidays are borrowed, never modified.
///
/// # Example
/// ```
/// use bd_time::{BusinessCalendar, Calendar, Date, HolidaySet};
///
/// let christmas = Date::from_ymd(2023, 12, 25)?;
/// let holidays: HolidaySet = [christmas].into_iter().collect();
/// let cal = BusinessCalendar::for_locale("en-US").with_holidays(&holidays);
///
/// let start = Date::from_ymd(2023, 12, 24)?;
/// assert_eq!(cal.add_business_days(start, 5)?, Date::from_ymd(2024, 1, 1)?);
/// # Ok::<(), bd_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BusinessCalendar<'h> {
    weekend: WeekendDays,
    holidays: Option<&'h HolidaySet>,
    step_limit: u32,
}

impl<'h> BusinessCalendar<'h> {
    /// A calendar with the given weekend and no holidays.
    pub fn new(weekend: WeekendDays) -> Self {
        Self {
            weekend,
            holidays: None,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// A calendar with the weekend of `locale` and no holidays.
    pub fn for_locale(locale: &str) -> Self {
        Self::new(resolve_weekend_days(locale))
    }

    /// Attach a holiday set.
    pub fn with_holidays(mut self, holidays: &'h HolidaySet) -> Self {
        self.holidays = Some(holidays);
        self
    }

    /// Set the cap on consecutive non-business days a search may skip.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if `limit` is zero.
    pub fn with_step_limit(mut self, limit: u32) -> Result<Self> {
        ensure!(limit > 0, "step limit must be at least 1, got {limit}");
        self.step_limit = limit;
        Ok(self)
    }
}

/// The `en-US` weekend, no holidays.
impl Default for BusinessCalendar<'_> {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}

impl Calendar for BusinessCalendar<'_> {
    fn weekend(&self) -> WeekendDays {
        self.weekend
    }

    fn holidays(&self) -> Option<&HolidaySet> {
        self.holidays
    }

    fn step_limit(&self) -> u32 {
        self.step_limit
    }
}

//! `HolidaySet` — caller-supplied non-working dates.
//!
//! Holidays are stored date-only: a `NaiveDateTime` inserted at 15:00 marks
//! the whole day.  The set is kept sorted so that next/previous/nearest and
//! range queries are `O(log n)` instead of scans.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::date::{Date, DateLike};

/// A set of holiday dates layered on top of a weekend policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct HolidaySet {
    dates: BTreeSet<Date>,
}

impl HolidaySet {
    /// Create an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday.  Returns `false` if the date was already present.
    pub fn insert<D: DateLike>(&mut self, date: D) -> bool {
        self.dates.insert(date.date())
    }

    /// Remove a previously added holiday.  Returns `true` if it was present.
    pub fn remove<D: DateLike>(&mut self, date: D) -> bool {
        self.dates.remove(&date.date())
    }

    /// Return `true` if the date component of `date` is a holiday.
    pub fn contains<D: DateLike>(&self, date: D) -> bool {
        self.dates.contains(&date.date())
    }

    /// Return the number of holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate over the holidays in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// The first holiday strictly after the date of `date`.
    pub fn next_after<D: DateLike>(&self, date: D) -> Option<Date> {
        self.dates
            .range((Bound::Excluded(date.date()), Bound::Unbounded))
            .next()
            .copied()
    }

    /// The last holiday strictly before the date of `date`.
    pub fn previous_before<D: DateLike>(&self, date: D) -> Option<Date> {
        self.dates.range(..date.date()).next_back().copied()
    }

    /// The holidays falling in `[start, end]`, compared date-only, ascending.
    ///
    /// Empty if `start` lies after `end`.
    pub fn in_range<D: DateLike>(&self, start: D, end: D) -> Vec<Date> {
        let (from, to) = (start.date(), end.date());
        if from > to {
            return Vec::new();
        }
        self.dates.range(from..=to).copied().collect()
    }

    /// The holiday closest to `date`.
    ///
    /// A holiday on the same date wins outright.  Otherwise distances are
    /// measured at the precision of `D` from midnight of each holiday, so a
    /// `NaiveDateTime` at noon is nearer the following day's holiday than
    /// the previous day's.  On an exact tie the earlier holiday is returned.
    /// `None` only if the set is empty.
    pub fn nearest<D: DateLike>(&self, date: D) -> Option<Date> {
        const SECONDS_PER_DAY: i64 = 86_400;

        let day = date.date();
        if self.dates.contains(&day) {
            return Some(day);
        }
        let into_day = i64::from(date.seconds_into_day());
        match (self.previous_before(day), self.next_after(day)) {
            (Some(prev), Some(next)) => {
                let behind = prev.days_between(day) * SECONDS_PER_DAY + into_day;
                let ahead = day.days_between(next) * SECONDS_PER_DAY - into_day;
                if ahead < behind {
                    Some(next)
                } else {
                    Some(prev)
                }
            }
            (prev, next) => prev.or(next),
        }
    }
}

impl<D: DateLike> FromIterator<D> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().map(|d| d.date()).collect(),
        }
    }
}

impl<D: DateLike> Extend<D> for HolidaySet {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        self.dates.extend(iter.into_iter().map(|d| d.date()));
    }
}

//! `WeekendDays` — the set of non-working days of the week.

use bd_core::ensure;
use bd_core::errors::Result;

use crate::weekday::Weekday;

/// An ordered set of weekdays treated as non-working.
///
/// Stored as a 7-bit mask; iteration yields days Monday first.  A set
/// covering the whole week is rejected by [`WeekendDays::from_days`], since no
/// directional search could ever terminate on such a calendar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekendDays(u8);

const FULL_WEEK: u8 = 0b111_1111;

const fn bit(day: Weekday) -> u8 {
    1 << (day as u8 - 1)
}

impl WeekendDays {
    /// No weekend at all: every day of the week is a working day.
    pub const NONE: WeekendDays = WeekendDays(0);

    /// Saturday and Sunday, the default for unknown locales.
    pub const SATURDAY_SUNDAY: WeekendDays =
        WeekendDays(bit(Weekday::Saturday) | bit(Weekday::Sunday));

    /// Friday and Saturday.
    pub const FRIDAY_SATURDAY: WeekendDays =
        WeekendDays(bit(Weekday::Friday) | bit(Weekday::Saturday));

    /// Thursday and Friday.
    pub const THURSDAY_FRIDAY: WeekendDays =
        WeekendDays(bit(Weekday::Thursday) | bit(Weekday::Friday));

    /// Build a weekend set from individual days.  Duplicates are ignored.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if the days cover the whole week.
    pub fn from_days<I>(days: I) -> Result<Self>
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mask = days.into_iter().fold(0, |mask, day| mask | bit(day));
        ensure!(
            mask != FULL_WEEK,
            "a weekend covering all seven days leaves no business days"
        );
        Ok(WeekendDays(mask))
    }

    /// Return `true` if `day` is a weekend day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of weekend days per week.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if there is no weekend.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the weekend days, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|&d| self.contains(d))
    }

    /// Count the weekend days in a run of `len` consecutive calendar days
    /// starting on `first`.
    ///
    /// Closed form: whole weeks contribute `len()` each, and the leftover
    /// partial week is checked day by day.
    pub fn count_in_run(&self, first: Weekday, len: u64) -> u64 {
        let full_weeks = len / 7;
        let mut count = full_weeks * self.len() as u64;
        let mut day = first;
        for _ in 0..len % 7 {
            if self.contains(day) {
                count += 1;
            }
            day = day.succ();
        }
        count
    }
}

impl std::fmt::Debug for WeekendDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WeekendDays {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WeekendDays {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        WeekendDays::from_days(days).map_err(serde::de::Error::custom)
    }
}

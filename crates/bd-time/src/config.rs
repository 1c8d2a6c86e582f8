//! Configuration for building a [`BusinessCalendar`].

use bd_core::ensure;
use bd_core::errors::Result;

use crate::calendar::{BusinessCalendar, DEFAULT_STEP_LIMIT};
use crate::holidays::HolidaySet;
use crate::weekend::WeekendDays;
use crate::weekend_policy::{resolve_weekend_days, DEFAULT_LOCALE};

/// Settings that select a weekend and bound directional searches.
///
/// Use the builder methods to customise parameters, then
/// [`build`](CalendarConfig::build) a calendar over a holiday set.
///
/// # Example
///
/// ```
/// use bd_time::{CalendarConfig, Calendar, Date, WeekendDays};
///
/// let config = CalendarConfig::new().with_locale("fa-IR");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.weekend_days(), WeekendDays::THURSDAY_FRIDAY);
///
/// let cal = config.build(None)?;
/// // 2024-01-04 is a Thursday
/// assert!(cal.is_weekend(Date::from_ymd(2024, 1, 4)?));
/// # Ok::<(), bd_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Locale whose weekend applies unless `weekend` overrides it.
    locale: String,
    /// Explicit weekend, taking precedence over the locale lookup.
    weekend: Option<WeekendDays>,
    /// Cap on consecutive non-business days a search may skip.
    step_limit: u32,
}

impl CalendarConfig {
    /// Creates a configuration for the default locale.
    ///
    /// Defaults: `locale = "en-US"`, no weekend override,
    /// `step_limit = 3660`.
    pub fn new() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            weekend: None,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Sets the locale used for the weekend lookup.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Overrides the locale's weekend with an explicit set.
    pub fn with_weekend(mut self, weekend: WeekendDays) -> Self {
        self.weekend = Some(weekend);
        self
    }

    /// Sets the search step limit.
    pub fn with_step_limit(mut self, step_limit: u32) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Returns the locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the search step limit.
    pub fn step_limit(&self) -> u32 {
        self.step_limit
    }

    /// Returns the effective weekend: the override if set, otherwise the
    /// locale's.
    pub fn weekend_days(&self) -> WeekendDays {
        self.weekend
            .unwrap_or_else(|| resolve_weekend_days(&self.locale))
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the step limit is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.step_limit > 0,
            "step limit must be at least 1, got {}",
            self.step_limit
        );
        Ok(())
    }

    /// Build a calendar over `holidays`.
    pub fn build<'h>(&self, holidays: Option<&'h HolidaySet>) -> Result<BusinessCalendar<'h>> {
        self.validate()?;
        let cal = BusinessCalendar::new(self.weekend_days()).with_step_limit(self.step_limit)?;
        Ok(match holidays {
            Some(h) => cal.with_holidays(h),
            None => cal,
        })
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new()
    }
}

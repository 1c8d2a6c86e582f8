//! Process-wide library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date that "today"-relative
//! queries treat as the current day.  When no override is set the local
//! system date is used.
//!
//! The override is stored behind a `Mutex` so that it can be changed from any
//! thread.  Tests that change it should go through [`ScopedEvaluationDate`],
//! which restores the previous value on drop.

use chrono::NaiveDate;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Process-wide settings used by bizday.
pub struct Settings {
    evaluation_date: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    // A poisoned lock still holds a plain `Option<NaiveDate>`, which cannot
    // be left half-written.
    fn slot(&self) -> MutexGuard<'_, Option<NaiveDate>> {
        self.evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the evaluation-date override, if one has been set.
    pub fn evaluation_date_override(&self) -> Option<NaiveDate> {
        *self.slot()
    }

    /// Return the evaluation date: the override if set, otherwise the local
    /// system date.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.evaluation_date_override()
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Set the evaluation date.
    pub fn set_evaluation_date(&self, date: NaiveDate) {
        *self.slot() = Some(date);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// Guard that sets the evaluation date and restores the previous value when
/// dropped.
///
/// # Example
/// ```
/// use bd_core::{ScopedEvaluationDate, Settings};
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
/// {
///     let _guard = ScopedEvaluationDate::new(christmas);
///     assert_eq!(Settings::instance().evaluation_date(), christmas);
/// }
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<NaiveDate>,
}

impl ScopedEvaluationDate {
    /// Override the evaluation date until the returned guard is dropped.
    pub fn new(date: NaiveDate) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_override();
        settings.set_evaluation_date(date);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(date) => settings.set_evaluation_date(date),
            None => settings.reset_evaluation_date(),
        }
    }
}

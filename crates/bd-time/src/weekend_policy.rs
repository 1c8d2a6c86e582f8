//! Weekend policy: which days of the week are non-working in a locale.
//!
//! The table is keyed by the full locale tag (`"ar-SA"`, `"en-US"`, …) and
//! matched exactly and case-sensitively; there is no fallback from a
//! region tag to its bare language.  Unknown locales get
//! [`WeekendDays::SATURDAY_SUNDAY`].

use std::collections::HashMap;

use bd_core::define_singleton;
use tracing::debug;

use crate::weekend::WeekendDays;

/// Locale used when the caller does not name one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Weekend assigned to any locale missing from the table.
pub const DEFAULT_WEEKEND: WeekendDays = WeekendDays::SATURDAY_SUNDAY;

const SAT_SUN: WeekendDays = WeekendDays::SATURDAY_SUNDAY;
const FRI_SAT: WeekendDays = WeekendDays::FRIDAY_SATURDAY;
const THU_FRI: WeekendDays = WeekendDays::THURSDAY_FRIDAY;

const LOCALE_WEEKENDS: &[(&str, WeekendDays)] = &[
    // Asia
    ("zh-CN", SAT_SUN),
    ("ja-JP", SAT_SUN),
    ("ko-KR", SAT_SUN),
    ("hi-IN", SAT_SUN),
    ("ar-SA", FRI_SAT),
    ("ar-PS", FRI_SAT),
    ("th-TH", SAT_SUN),
    ("vi-VN", SAT_SUN),
    ("id-ID", FRI_SAT),
    ("fa-IR", THU_FRI),
    // Americas
    ("en-US", SAT_SUN),
    ("en-CA", SAT_SUN),
    ("es-MX", SAT_SUN),
    ("pt-BR", SAT_SUN),
    ("es-AR", SAT_SUN),
    ("es-CL", SAT_SUN),
    // Europe
    ("en-GB", SAT_SUN),
    ("fr-FR", SAT_SUN),
    ("de-DE", SAT_SUN),
    ("it-IT", SAT_SUN),
    ("es-ES", SAT_SUN),
    ("pt-PT", SAT_SUN),
    ("nl-NL", SAT_SUN),
    ("pl-PL", SAT_SUN),
    ("ru-RU", SAT_SUN),
    ("tr-TR", SAT_SUN),
    ("el-GR", SAT_SUN),
    // Africa
    ("en-ZA", SAT_SUN),
    ("fr-DZ", SAT_SUN),
    ("sw-KE", SAT_SUN),
    ("ar-EG", FRI_SAT),
    ("pt-AO", SAT_SUN),
    ("am-ET", SAT_SUN),
    ("fr-CI", SAT_SUN),
    // Oceania
    ("en-AU", SAT_SUN),
    ("en-NZ", SAT_SUN),
    ("fr-PF", SAT_SUN),
    // Language-region pairs
    ("af-ZA", SAT_SUN),
    ("sq-AL", SAT_SUN),
    ("hy-AM", SAT_SUN),
    ("az-AZ", SAT_SUN),
    ("eu-ES", SAT_SUN),
    ("be-BY", SAT_SUN),
    ("bs-BA", SAT_SUN),
    ("bg-BG", SAT_SUN),
    ("ca-ES", SAT_SUN),
    ("hr-HR", SAT_SUN),
    ("cs-CZ", SAT_SUN),
    ("da-DK", SAT_SUN),
    ("nl-BE", SAT_SUN),
    ("et-EE", SAT_SUN),
    ("fi-FI", SAT_SUN),
    ("ka-GE", SAT_SUN),
    ("gl-ES", SAT_SUN),
    ("hu-HU", SAT_SUN),
    ("is-IS", SAT_SUN),
    ("ga-IE", SAT_SUN),
    ("lv-LV", SAT_SUN),
    ("lt-LT", SAT_SUN),
    ("mk-MK", SAT_SUN),
    ("ms-MY", SAT_SUN),
    ("mt-MT", SAT_SUN),
    ("mn-MN", SAT_SUN),
    ("ne-NP", SAT_SUN),
    ("no-NO", SAT_SUN),
    ("ps-AF", FRI_SAT),
    ("ro-RO", SAT_SUN),
    ("sr-RS", SAT_SUN),
    ("sk-SK", SAT_SUN),
    ("sl-SI", SAT_SUN),
    ("so-SO", FRI_SAT),
    ("sv-SE", SAT_SUN),
    ("tl-PH", SAT_SUN),
    ("tg-TJ", FRI_SAT),
    ("uk-UA", SAT_SUN),
    ("ur-PK", SAT_SUN),
    ("uz-UZ", SAT_SUN),
    ("cy-GB", SAT_SUN),
];

define_singleton!(
    WEEKEND_TABLE,
    HashMap<&'static str, WeekendDays>,
    LOCALE_WEEKENDS.iter().copied().collect()
);

/// Return the weekend days for `locale`.
///
/// Never fails: a locale missing from the table resolves to
/// `{Saturday, Sunday}`.
///
/// # Example
/// ```
/// use bd_time::weekend_policy::resolve_weekend_days;
/// use bd_time::WeekendDays;
///
/// assert_eq!(resolve_weekend_days("ar-SA"), WeekendDays::FRIDAY_SATURDAY);
/// assert_eq!(resolve_weekend_days("xx-ZZ"), WeekendDays::SATURDAY_SUNDAY);
/// ```
pub fn resolve_weekend_days(locale: &str) -> WeekendDays {
    match WEEKEND_TABLE.get(locale) {
        Some(&weekend) => weekend,
        None => {
            debug!(locale, weekend = ?DEFAULT_WEEKEND, "unknown locale: using default weekend");
            DEFAULT_WEEKEND
        }
    }
}

/// Return `true` if `locale` has an explicit entry in the weekend table.
pub fn is_known_locale(locale: &str) -> bool {
    WEEKEND_TABLE.contains_key(locale)
}

/// Every locale with an explicit entry, in sorted order.
pub fn known_locales() -> impl Iterator<Item = &'static str> {
    let mut locales: Vec<_> = WEEKEND_TABLE.keys().copied().collect();
    locales.sort_unstable();
    locales.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn table_has_no_duplicate_keys() {
        assert_eq!(WEEKEND_TABLE.len(), LOCALE_WEEKENDS.len());
    }

    #[test]
    fn every_entry_is_one_or_two_days() {
        for (locale, weekend) in LOCALE_WEEKENDS {
            assert!(
                (1..=2).contains(&weekend.len()),
                "{locale} has {} weekend days",
                weekend.len()
            );
        }
    }

    #[test]
    fn special_cases() {
        assert_eq!(resolve_weekend_days("ar-EG"), WeekendDays::FRIDAY_SATURDAY);
        assert_eq!(resolve_weekend_days("fa-IR"), WeekendDays::THURSDAY_FRIDAY);
        assert_eq!(resolve_weekend_days("de-DE"), WeekendDays::SATURDAY_SUNDAY);
    }

    #[test]
    fn matching_is_exact() {
        assert!(is_known_locale("ar-SA"));
        assert!(!is_known_locale("ar"));
        assert!(!is_known_locale("AR-sa"));
        // no language-only fallback: bare "ar" is unknown, so Sat/Sun
        assert!(resolve_weekend_days("ar").contains(Weekday::Sunday));
        assert_eq!(resolve_weekend_days("ar-sa"), WeekendDays::SATURDAY_SUNDAY);
    }

    #[test]
    fn known_locales_sorted() {
        let locales: Vec<_> = known_locales().collect();
        assert_eq!(locales.len(), LOCALE_WEEKENDS.len());
        assert!(locales.windows(2).all(|w| w[0] < w[1]));
        assert!(locales.contains(&DEFAULT_LOCALE));
    }
}

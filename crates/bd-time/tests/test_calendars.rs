//! Business-day scenarios around the 2023 Christmas week.
//!
//! Sunday 2023-12-24 through Monday 2024-01-01 covers a weekend on each
//! end, a public holiday on a Monday, and a year boundary.

use bd_core::Error;
use bd_time::weekend_policy::{is_known_locale, known_locales};
use bd_time::{
    resolve_weekend_days, BusinessCalendar, Calendar, Date, HolidaySet, Weekday, WeekendDays,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn christmas() -> HolidaySet {
    [date(2023, 12, 25)].into_iter().collect()
}

// ─── Weekend policy ───────────────────────────────────────────────────────────

#[test]
fn weekend_policy_lookups() {
    assert_eq!(resolve_weekend_days("ar-SA"), WeekendDays::FRIDAY_SATURDAY);
    assert_eq!(resolve_weekend_days("xx-ZZ"), WeekendDays::SATURDAY_SUNDAY);
    assert_eq!(resolve_weekend_days("en-US"), WeekendDays::SATURDAY_SUNDAY);
    assert_eq!(resolve_weekend_days("fa-IR"), WeekendDays::THURSDAY_FRIDAY);
    assert!(!is_known_locale("xx-ZZ"));
}

#[test]
fn known_locale_weekends_have_one_or_two_days() {
    for locale in known_locales() {
        let weekend = resolve_weekend_days(locale);
        assert!(!weekend.is_empty(), "{locale} has no weekend");
        assert!(weekend.len() <= 2, "{locale} has {} weekend days", weekend.len());
    }
}

// ─── Stepping ─────────────────────────────────────────────────────────────────

#[test]
fn add_business_days_over_christmas_week() {
    let cal = BusinessCalendar::for_locale("en-US");
    assert_eq!(cal.add_business_days(date(2023, 12, 24), 5).unwrap(), date(2023, 12, 29));
}

#[test]
fn add_business_days_considering_holidays() {
    let holidays = christmas();
    let cal = BusinessCalendar::for_locale("en-US").with_holidays(&holidays);
    // Dec 25 is a holiday, Dec 30–31 the weekend
    assert_eq!(cal.add_business_days(date(2023, 12, 24), 5).unwrap(), date(2024, 1, 1));
}

#[test]
fn add_business_days_with_friday_saturday_weekend() {
    let cal = BusinessCalendar::for_locale("ar-SA");
    // Thursday 2023-12-28 + 1 → Sunday 2023-12-31
    assert_eq!(cal.add_business_days(date(2023, 12, 28), 1).unwrap(), date(2023, 12, 31));
    assert_eq!(cal.add_business_days(date(2023, 12, 31), -1).unwrap(), date(2023, 12, 28));
}

#[test]
fn next_business_day_from_sunday() {
    let cal = BusinessCalendar::for_locale("en-US");
    assert_eq!(cal.next_business_day(date(2023, 12, 24)).unwrap(), date(2023, 12, 25));
}

#[test]
fn next_business_day_never_returns_start() {
    let cal = BusinessCalendar::default();
    // Tuesday is a business day, but the search starts strictly after it
    assert_eq!(cal.next_business_day(date(2023, 12, 26)).unwrap(), date(2023, 12, 27));
    assert_eq!(cal.previous_business_day(date(2023, 12, 26)).unwrap(), date(2023, 12, 25));
}

#[test]
fn next_working_day_skips_holiday() {
    let holidays = christmas();
    let cal = BusinessCalendar::for_locale("en-US").with_holidays(&holidays);
    assert_eq!(cal.next_business_day(date(2023, 12, 24)).unwrap(), date(2023, 12, 26));
    assert_eq!(cal.previous_business_day(date(2023, 12, 26)).unwrap(), date(2023, 12, 22));
}

#[test]
fn stepping_keeps_time_of_day() {
    let cal = BusinessCalendar::default();
    let start = NaiveDate::from_ymd_opt(2023, 12, 22)
        .unwrap()
        .and_hms_opt(16, 45, 0)
        .unwrap();
    let next = cal.next_business_day(start).unwrap();
    assert_eq!(next.date(), NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
    assert_eq!(next.time(), start.time());
}

#[test]
fn holiday_with_time_of_day_blocks_whole_date() {
    let evening = NaiveDate::from_ymd_opt(2023, 12, 25)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    let holidays: HolidaySet = [evening].into_iter().collect();
    let cal = BusinessCalendar::default().with_holidays(&holidays);
    assert!(cal.is_holiday(date(2023, 12, 25)));
    assert!(!cal.is_business_day(date(2023, 12, 25)));
}

#[test]
fn full_week_weekend_is_rejected_up_front() {
    assert!(matches!(
        WeekendDays::from_days(Weekday::ALL),
        Err(Error::Precondition(_))
    ));
}

#[test]
fn holiday_run_beyond_step_limit_fails() {
    // every day of 2024 is a holiday
    let mut holidays = HolidaySet::new();
    let mut d = date(2024, 1, 1);
    while d.year() == 2024 {
        holidays.insert(d);
        d = d.add_days(1).unwrap();
    }
    let cal = BusinessCalendar::default()
        .with_holidays(&holidays)
        .with_step_limit(200)
        .unwrap();
    assert_eq!(
        cal.add_business_days(date(2023, 12, 29), 1),
        Err(Error::ImpossibleSchedule { steps: 200 })
    );
    let cal = cal.with_step_limit(400).unwrap();
    assert_eq!(cal.add_business_days(date(2023, 12, 29), 1).unwrap(), date(2025, 1, 1));
}

// ─── Range counts ─────────────────────────────────────────────────────────────

#[test]
fn business_days_until_counts_weekdays() {
    let cal = BusinessCalendar::for_locale("en-US");
    assert_eq!(cal.business_days_until(date(2023, 12, 24), date(2023, 12, 31)).unwrap(), 5);
}

#[test]
fn business_days_until_ignores_holidays() {
    let holidays = christmas();
    let cal = BusinessCalendar::for_locale("en-US").with_holidays(&holidays);
    assert_eq!(cal.business_days_until(date(2023, 12, 24), date(2023, 12, 31)).unwrap(), 5);
}

#[test]
fn business_days_until_single_day() {
    let cal = BusinessCalendar::default();
    assert_eq!(cal.business_days_until(date(2023, 12, 27), date(2023, 12, 27)).unwrap(), 1);
    assert_eq!(cal.business_days_until(date(2023, 12, 24), date(2023, 12, 24)).unwrap(), 0);
}

#[test]
fn business_days_until_rejects_reversed_range() {
    let cal = BusinessCalendar::default();
    assert_eq!(
        cal.business_days_until(date(2023, 12, 31), date(2023, 12, 24)),
        Err(Error::InvalidRange {
            start: "2023-12-31".into(),
            end: "2023-12-24".into(),
        })
    );
}

#[test]
fn business_days_until_compares_full_precision() {
    let cal = BusinessCalendar::default();
    let day = NaiveDate::from_ymd_opt(2023, 12, 27).unwrap();
    let morning = day.and_hms_opt(9, 0, 0).unwrap();
    let evening = day.and_hms_opt(18, 0, 0).unwrap();
    assert_eq!(cal.business_days_until(morning, evening).unwrap(), 1);
    assert!(matches!(
        cal.business_days_until(evening, morning),
        Err(Error::InvalidRange { .. })
    ));
}

#[test]
fn working_days_considering_holidays() {
    let holidays = christmas();
    let cal = BusinessCalendar::for_locale("en-US").with_holidays(&holidays);
    assert_eq!(cal.working_days_between(date(2023, 12, 24), date(2023, 12, 31)), 4);
}

#[test]
fn working_days_reversed_range_is_zero() {
    let holidays = christmas();
    let cal = BusinessCalendar::for_locale("en-US").with_holidays(&holidays);
    assert_eq!(cal.working_days_between(date(2023, 12, 31), date(2023, 12, 24)), 0);
}

#[test]
fn weekend_holidays_are_not_double_counted() {
    // Saturday 2023-12-30 listed as a holiday too
    let holidays: HolidaySet = [date(2023, 12, 25), date(2023, 12, 30)].into_iter().collect();
    let cal = BusinessCalendar::default().with_holidays(&holidays);
    assert_eq!(cal.working_days_between(date(2023, 12, 24), date(2023, 12, 31)), 4);
}

#[test]
fn range_counts_with_thursday_friday_weekend() {
    let cal = BusinessCalendar::for_locale("fa-IR");
    // Sun 2023-12-24 .. Sun 2023-12-31: Thu 28 and Fri 29 are the weekend
    assert_eq!(cal.business_days_until(date(2023, 12, 24), date(2023, 12, 31)).unwrap(), 6);
    assert_eq!(cal.weekend_days_between(date(2023, 12, 24), date(2023, 12, 31)), 2);
}

// ─── Weekend / holiday predicates ─────────────────────────────────────────────

#[test]
fn is_weekend_or_holiday() {
    let holidays = christmas();
    let cal = BusinessCalendar::default().with_holidays(&holidays);
    assert!(cal.is_weekend_or_holiday(date(2023, 12, 25)));
    assert!(!cal.is_weekend_or_holiday(date(2023, 12, 28)));
    assert!(cal.is_weekend_or_holiday(date(2023, 12, 30)));
}

#[test]
fn business_day_is_neither_weekend_nor_holiday() {
    let holidays = christmas();
    let cal = BusinessCalendar::default().with_holidays(&holidays);
    let mut d = date(2023, 12, 1);
    while d <= date(2024, 1, 31) {
        assert_eq!(
            cal.is_business_day(d),
            !cal.is_weekend(d) && !cal.is_holiday(d),
            "{d}"
        );
        d = d.add_days(1).unwrap();
    }
}

// ─── Holiday queries ──────────────────────────────────────────────────────────

#[test]
fn public_holiday_queries() {
    let holidays = christmas();
    assert_eq!(holidays.next_after(date(2023, 12, 24)), Some(date(2023, 12, 25)));
    assert_eq!(holidays.nearest(date(2023, 12, 24)), Some(date(2023, 12, 25)));
    assert_eq!(
        holidays.in_range(date(2023, 12, 24), date(2024, 1, 1)),
        vec![date(2023, 12, 25)]
    );

    let earlier: HolidaySet = [date(2023, 12, 23)].into_iter().collect();
    assert_eq!(earlier.previous_before(date(2023, 12, 24)), Some(date(2023, 12, 23)));
}

//! Reporting window integration tests.

mod common;

use common::date;
use sales_reporting::{DateRange, RangePreset};

#[test]
fn presets_resolve_to_windows_ending_today() {
    let today = date(2026, 8, 4);

    assert_eq!(
        RangePreset::OneDay.resolve(today),
        DateRange::new(date(2026, 8, 4), today)
    );
    assert_eq!(
        RangePreset::OneWeek.resolve(today),
        DateRange::new(date(2026, 7, 28), today)
    );
    assert_eq!(
        RangePreset::OneMonth.resolve(today),
        DateRange::new(date(2026, 7, 4), today)
    );
    assert_eq!(
        RangePreset::ThreeMonths.resolve(today),
        DateRange::new(date(2026, 5, 4), today)
    );
    assert_eq!(
        RangePreset::SixMonths.resolve(today),
        DateRange::new(date(2026, 2, 4), today)
    );
    assert_eq!(
        RangePreset::OneYear.resolve(today),
        DateRange::new(date(2025, 8, 4), today)
    );
}

#[test]
fn month_subtraction_clamps_to_short_months() {
    // One month back from Mar 31 lands on the last day of February.
    let range = RangePreset::OneMonth.resolve(date(2026, 3, 31));
    assert_eq!(range.from, date(2026, 2, 28));

    let leap = RangePreset::OneMonth.resolve(date(2024, 3, 31));
    assert_eq!(leap.from, date(2024, 2, 29));

    let range = RangePreset::SixMonths.resolve(date(2026, 8, 31));
    assert_eq!(range.from, date(2026, 2, 28));
}

#[test]
fn year_window_crosses_a_leap_day() {
    let range = RangePreset::OneYear.resolve(date(2025, 2, 28));
    assert_eq!(range.from, date(2024, 2, 28));

    let from_leap_day = RangePreset::OneYear.resolve(date(2024, 2, 29));
    assert_eq!(from_leap_day.from, date(2023, 2, 28));
}

#[test]
fn preset_codes_round_trip() {
    for preset in [
        RangePreset::OneDay,
        RangePreset::OneWeek,
        RangePreset::OneMonth,
        RangePreset::ThreeMonths,
        RangePreset::SixMonths,
        RangePreset::OneYear,
    ] {
        assert_eq!(RangePreset::from_string(preset.as_str()), preset);
    }
    assert_eq!(RangePreset::from_string("1M"), RangePreset::OneMonth);
    assert_eq!(RangePreset::from_string("1Y"), RangePreset::OneYear);
}

#[test]
fn unknown_preset_code_falls_back_to_one_month() {
    assert_eq!(RangePreset::from_string("yoy"), RangePreset::OneMonth);
    assert_eq!(RangePreset::from_string(""), RangePreset::OneMonth);
}

#[test]
fn containment_is_inclusive() {
    let range = DateRange::new(date(2026, 8, 1), date(2026, 8, 31));

    assert!(range.contains(date(2026, 8, 1)));
    assert!(range.contains(date(2026, 8, 15)));
    assert!(range.contains(date(2026, 8, 31)));
    assert!(!range.contains(date(2026, 7, 31)));
    assert!(!range.contains(date(2026, 9, 1)));
}

#[test]
fn single_day_range_contains_only_that_day() {
    let today = date(2026, 8, 4);
    let range = RangePreset::OneDay.resolve(today);

    assert!(range.contains(today));
    assert!(!range.contains(date(2026, 8, 3)));
    assert!(!range.contains(date(2026, 8, 5)));
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use zonediff::{
    day_difference, month_difference, sub_day_difference, years_from_days, CalculatorConfig,
    DifferenceBreakdown, DifferenceCalculator, Instant, Region, RemainderPolicy, SubDayDifference,
    ZoneId, ZonedSelection,
};

fn wall(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Instant {
    Instant::from_utc(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
}

#[test]
fn same_absolute_instant_across_berlin_and_toronto() {
    let left = ZonedSelection::in_region(Region::Berlin, wall(2023, 6, 15, 10, 0)).unwrap();
    let right = ZonedSelection::in_region(Region::Toronto, wall(2023, 6, 15, 4, 0)).unwrap();

    assert_eq!(day_difference(left.instant, right.instant), Ok(0));
    assert_eq!(
        sub_day_difference(left.instant, right.instant),
        Ok(SubDayDifference::ZERO)
    );

    let breakdown = DifferenceCalculator::default()
        .breakdown(&left, &right)
        .unwrap();
    assert_eq!(breakdown, DifferenceBreakdown::default());
}

#[test]
fn two_months_between_toronto_january_and_berlin_march() {
    let right = ZonedSelection::in_region(Region::Toronto, wall(2024, 1, 10, 12, 0)).unwrap();
    let left = ZonedSelection::in_region(Region::Berlin, wall(2024, 3, 10, 12, 0)).unwrap();

    assert_eq!(
        month_difference(left.instant, &left.zone, right.instant, &right.zone),
        Ok(2)
    );
    assert_eq!(
        month_difference(right.instant, &right.zone, left.instant, &left.zone),
        Ok(-2)
    );
}

#[test]
fn month_difference_shifts_with_zone_at_day_boundary() {
    let right = utc(2024, 1, 1, 12, 0);
    let toronto = Region::Toronto.zone();
    let berlin = Region::Berlin.zone();
    // 23:30Z on Jan 31 is still Jan 31 in Toronto but already Feb 1 in Berlin.
    let left = utc(2024, 1, 31, 23, 30);

    let as_toronto = month_difference(left, &toronto, right, &toronto).unwrap();
    let as_berlin = month_difference(left, &berlin, right, &toronto).unwrap();
    assert_eq!(as_toronto, 0);
    assert_eq!(as_berlin, 1);

    // The day count never looks at zones.
    assert_eq!(day_difference(left, right), Ok(30));
}

#[test]
fn january_31_to_march_1_is_one_whole_month() {
    let zone = Region::Berlin.zone();
    let right = ZonedSelection::in_region(Region::Berlin, wall(2023, 1, 31, 9, 0)).unwrap();
    let left = ZonedSelection::in_region(Region::Berlin, wall(2023, 3, 1, 9, 0)).unwrap();
    assert_eq!(month_difference(left.instant, &zone, right.instant, &zone), Ok(1));
}

#[test]
fn berlin_spring_forward_keeps_calendar_months() {
    // 2024-03-01 00:30 CET (+1) and 2024-04-01 00:30 CEST (+2). A fixed +1
    // offset would read the second one as 2024-03-31 23:30.
    let right = ZonedSelection::in_region(Region::Berlin, wall(2024, 3, 1, 0, 30)).unwrap();
    let left = ZonedSelection::in_region(Region::Berlin, wall(2024, 4, 1, 0, 30)).unwrap();

    let breakdown = DifferenceCalculator::default()
        .breakdown(&left, &right)
        .unwrap();
    assert_eq!(breakdown.months, 1);
    // One hour was skipped: 31 days minus an hour.
    assert_eq!(breakdown.days, 30);
    assert_eq!(breakdown.hours, 23);
}

#[test]
fn toronto_spring_forward_keeps_calendar_months() {
    // 2024-03-10 00:30 EST (-5) and 2024-04-10 00:30 EDT (-4).
    let right = ZonedSelection::in_region(Region::Toronto, wall(2024, 3, 10, 0, 30)).unwrap();
    let left = ZonedSelection::in_region(Region::Toronto, wall(2024, 4, 10, 0, 30)).unwrap();

    assert_eq!(
        month_difference(left.instant, &left.zone, right.instant, &right.zone),
        Ok(1)
    );
    assert_eq!(day_difference(left.instant, right.instant), Ok(30));
}

#[test]
fn across_the_day_the_berlin_clock_changes() {
    // Noon to noon across 2024-03-31 is only 23 hours.
    let right = ZonedSelection::in_region(Region::Berlin, wall(2024, 3, 30, 12, 0)).unwrap();
    let left = ZonedSelection::in_region(Region::Berlin, wall(2024, 3, 31, 12, 0)).unwrap();
    let breakdown = DifferenceCalculator::default()
        .breakdown(&left, &right)
        .unwrap();
    assert_eq!((breakdown.days, breakdown.hours), (0, 23));
    assert_eq!(breakdown.months, 0);
}

#[test]
fn identity_holds_for_every_region() {
    let t = utc(2025, 10, 26, 1, 15);
    for region in Region::ALL {
        let zone = region.zone();
        assert_eq!(day_difference(t, t), Ok(0));
        assert_eq!(sub_day_difference(t, t), Ok(SubDayDifference::ZERO));
        assert_eq!(month_difference(t, &zone, t, &zone), Ok(0));
    }
}

#[test]
fn years_from_days_boundaries() {
    assert_eq!(years_from_days(360), 1);
    assert_eq!(years_from_days(0), 0);
    assert_eq!(years_from_days(-360), -1);
}

#[test]
fn canada_later_than_germany_under_both_policies() {
    let left = ZonedSelection::in_region(Region::Berlin, wall(2024, 5, 1, 8, 0)).unwrap();
    // 2024-05-03 14:45 PDT = 2024-05-03 21:45Z; Berlin 08:00 CEST = 06:00Z.
    let right = ZonedSelection::in_region(Region::Vancouver, wall(2024, 5, 3, 14, 45)).unwrap();

    let magnitude = DifferenceCalculator::default()
        .breakdown(&left, &right)
        .unwrap();
    assert_eq!(magnitude.days, -2);
    assert_eq!(magnitude.months, 0);
    assert_eq!(
        (magnitude.hours, magnitude.minutes, magnitude.seconds),
        (15, 45, 0)
    );

    let truncated = DifferenceCalculator::new(
        CalculatorConfig::new().with_remainder(RemainderPolicy::Truncated),
    )
    .breakdown(&left, &right)
    .unwrap();
    assert_eq!(truncated.days, -2);
    assert_eq!((truncated.hours, truncated.minutes), (-15, -45));
}

#[test]
fn invalid_zone_is_never_defaulted() {
    assert!(ZoneId::parse("Canada/Nowhere").is_err());
    assert!("Mars/Base".parse::<Region>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_breakdown_uses_field_names() {
    let breakdown = DifferenceBreakdown {
        years: 0,
        months: 2,
        days: 59,
        hours: 18,
        minutes: 0,
        seconds: 0,
    };
    let json = serde_json::to_string(&breakdown).unwrap();
    assert!(json.contains("\"months\":2"));
    assert!(json.contains("\"days\":59"));
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar projection and whole-unit counting.
//!
//! An instant only has a calendar date once it is read off a zone's wall
//! clock.  [`calendar_date`] does that projection with the zone's full IANA
//! rules; [`whole_months_between`] then counts completed calendar months
//! between two such dates.

use crate::error::Result;
use crate::instant::Instant;
use crate::zone::ZoneId;
use chrono::{Datelike, NaiveDate};

const MONTHS_PER_YEAR: i64 = 12;

/// The calendar date `instant` falls on in `zone`.
pub fn calendar_date(instant: Instant, zone: &ZoneId) -> Result<NaiveDate> {
    Ok(instant.in_zone(zone)?.date_naive())
}

/// Months since year 0, January.
#[inline]
fn proleptic_month(date: NaiveDate) -> i64 {
    i64::from(date.year()) * MONTHS_PER_YEAR + i64::from(date.month0())
}

/// Whole calendar months from `start` to `end`.
///
/// A month only counts once `end`'s day-of-month reaches `start`'s, so
/// 2023-01-31 → 2023-03-01 is one month and 2023-01-31 → 2023-02-28 is none.
/// Negative when `end` precedes `start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = proleptic_month(end) - proleptic_month(start);
    let day_delta = i64::from(end.day()) - i64::from(start.day());
    if months > 0 && day_delta < 0 {
        months -= 1;
    } else if months < 0 && day_delta > 0 {
        months += 1;
    }
    months
}

/// Whole calendar years from `start` to `end`, under the same day-threshold
/// rule as [`whole_months_between`].
#[inline]
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i64 {
    whole_months_between(start, end) / MONTHS_PER_YEAR
}

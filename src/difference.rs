// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The difference calculator.
//!
//! This module provides:
//! - the zone-agnostic operations [`day_difference`], [`sub_day_difference`]
//!   and [`elapsed_days`], which only look at absolute instants;
//! - the zone-sensitive [`month_difference`], which projects each instant
//!   onto its own zone's calendar first;
//! - [`years_from_days`], the 360-day year approximation;
//! - [`DifferenceCalculator`], which combines all of the above into a
//!   [`DifferenceBreakdown`] under a [`CalculatorConfig`].
//!
//! Every operation takes `left` (the Germany side) and `right` (the Canada
//! side) and measures `left − right`: results are positive when the left
//! selection is later.

use crate::calendar::{calendar_date, whole_months_between, whole_years_between};
use crate::error::Result;
use crate::instant::Instant;
use crate::selection::ZonedSelection;
use crate::zone::ZoneId;
use qtty::{Day, Days, Seconds};
use std::fmt;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Length of the approximate year used by [`years_from_days`].
pub const DAYS_PER_APPROX_YEAR: i64 = 360;

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// How the hour/minute/second remainders are reported when `right` is later
/// than `left`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemainderPolicy {
    /// Remainders of `|left − right|`: always in `0..24` / `0..60`.
    /// The direction is carried by `days` and `months`.
    ///
    /// This is not floored modulo: `-(1 h 1 s)` reports `01:00:01`, not
    /// `23:00:59`, so the fields stay consistent with the truncated `days`.
    #[default]
    Magnitude,
    /// Truncated remainders of the signed delta: `-1 h` reports `hours = -1`.
    Truncated,
}

/// How [`DifferenceBreakdown::years`] is derived.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YearPolicy {
    /// `days / 360`, truncated.
    #[default]
    Approximate360,
    /// Whole calendar years between the two projected dates.
    Calendar,
}

/// Knobs for [`DifferenceCalculator`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    pub remainder: RemainderPolicy,
    pub years: YearPolicy,
}

impl CalculatorConfig {
    #[inline]
    pub const fn new() -> Self {
        Self {
            remainder: RemainderPolicy::Magnitude,
            years: YearPolicy::Approximate360,
        }
    }

    #[inline]
    pub const fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    #[inline]
    pub const fn with_years(mut self, years: YearPolicy) -> Self {
        self.years = years;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Result types
// ═══════════════════════════════════════════════════════════════════════════

/// Hours, minutes and seconds left over after whole days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubDayDifference {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl SubDayDifference {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split an elapsed millisecond count into its sub-day remainders.
    pub const fn from_elapsed_millis(elapsed: i64, policy: RemainderPolicy) -> Self {
        match policy {
            RemainderPolicy::Magnitude => {
                // unsigned_abs keeps i64::MIN representable
                let abs = elapsed.unsigned_abs();
                Self {
                    hours: (abs / MILLIS_PER_HOUR as u64 % 24) as i64,
                    minutes: (abs / MILLIS_PER_MINUTE as u64 % 60) as i64,
                    seconds: (abs / MILLIS_PER_SECOND as u64 % 60) as i64,
                }
            }
            RemainderPolicy::Truncated => Self {
                hours: elapsed / MILLIS_PER_HOUR % 24,
                minutes: elapsed / MILLIS_PER_MINUTE % 60,
                seconds: elapsed / MILLIS_PER_SECOND % 60,
            },
        }
    }
}

impl fmt::Display for SubDayDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// The six-component summary shown to the user.
///
/// `years` and `months` are derived independently of each other and of
/// `days`: thirteen months is reported as `months = 13`, not as one year
/// and one month.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DifferenceBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DifferenceBreakdown {
    #[inline]
    pub const fn sub_day(&self) -> SubDayDifference {
        SubDayDifference {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }
}

impl fmt::Display for DifferenceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days, {}",
            self.years,
            self.months,
            self.days,
            self.sub_day()
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Operations
// ═══════════════════════════════════════════════════════════════════════════

/// Whole days from `right` to `left`, truncated toward zero.
///
/// Zones play no part: both instants are already absolute.
pub fn day_difference(left: Instant, right: Instant) -> Result<i64> {
    Ok(left.elapsed_since(right)? / MILLIS_PER_DAY)
}

/// Hour/minute/second remainders of `left − right` under the default
/// [`RemainderPolicy::Magnitude`].
pub fn sub_day_difference(left: Instant, right: Instant) -> Result<SubDayDifference> {
    sub_day_difference_with(left, right, RemainderPolicy::default())
}

/// [`sub_day_difference`] with an explicit remainder policy.
pub fn sub_day_difference_with(
    left: Instant,
    right: Instant,
    policy: RemainderPolicy,
) -> Result<SubDayDifference> {
    let elapsed = left.elapsed_since(right)?;
    Ok(SubDayDifference::from_elapsed_millis(elapsed, policy))
}

/// Whole calendar months from `right`'s date in `right_zone` to `left`'s
/// date in `left_zone`.
///
/// Changing either zone can move a projected date across midnight and so
/// change the result by one.
pub fn month_difference(
    left: Instant,
    left_zone: &ZoneId,
    right: Instant,
    right_zone: &ZoneId,
) -> Result<i64> {
    let left_date = calendar_date(left, left_zone)?;
    let right_date = calendar_date(right, right_zone)?;
    Ok(whole_months_between(right_date, left_date))
}

/// Approximate years: `days / 360`, truncated toward zero.
///
/// This is not a calendar-accurate count; see [`YearPolicy::Calendar`].
#[inline]
pub const fn years_from_days(days: i64) -> i64 {
    days / DAYS_PER_APPROX_YEAR
}

/// Exact elapsed time from `right` to `left` as fractional days.
pub fn elapsed_days(left: Instant, right: Instant) -> Result<Days> {
    let elapsed = left.elapsed_since(right)?;
    Ok(Seconds::new(elapsed as f64 / MILLIS_PER_SECOND as f64).to::<Day>())
}

// ═══════════════════════════════════════════════════════════════════════════
// DifferenceCalculator
// ═══════════════════════════════════════════════════════════════════════════

/// Stateless calculator bound to a [`CalculatorConfig`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DifferenceCalculator {
    config: CalculatorConfig,
}

impl DifferenceCalculator {
    #[inline]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> CalculatorConfig {
        self.config
    }

    #[inline]
    pub fn day_difference(&self, left: Instant, right: Instant) -> Result<i64> {
        day_difference(left, right)
    }

    #[inline]
    pub fn sub_day_difference(&self, left: Instant, right: Instant) -> Result<SubDayDifference> {
        sub_day_difference_with(left, right, self.config.remainder)
    }

    #[inline]
    pub fn month_difference(
        &self,
        left: Instant,
        left_zone: &ZoneId,
        right: Instant,
        right_zone: &ZoneId,
    ) -> Result<i64> {
        month_difference(left, left_zone, right, right_zone)
    }

    /// Compute every component for the pair `(left, right)`.
    pub fn breakdown(
        &self,
        left: &ZonedSelection,
        right: &ZonedSelection,
    ) -> Result<DifferenceBreakdown> {
        let elapsed = left.instant.elapsed_since(right.instant)?;
        let left_date = calendar_date(left.instant, &left.zone)?;
        let right_date = calendar_date(right.instant, &right.zone)?;

        let days = elapsed / MILLIS_PER_DAY;
        let months = whole_months_between(right_date, left_date);
        let years = match self.config.years {
            YearPolicy::Approximate360 => years_from_days(days),
            YearPolicy::Calendar => whole_years_between(right_date, left_date),
        };
        let sub_day = SubDayDifference::from_elapsed_millis(elapsed, self.config.remainder);

        let breakdown = DifferenceBreakdown {
            years,
            months,
            days,
            hours: sub_day.hours,
            minutes: sub_day.minutes,
            seconds: sub_day.seconds,
        };
        debug!(
            left = %left,
            right = %right,
            elapsed_ms = elapsed,
            %breakdown,
            "computed difference"
        );
        Ok(breakdown)
    }
}

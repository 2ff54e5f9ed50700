// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the difference calculator.

use crate::error::ZdStatus;
use crate::selection::zone_from_ptr;
use std::ffi::c_char;
use zonediff::{
    CalculatorConfig, DifferenceBreakdown, DifferenceCalculator, Instant, RemainderPolicy,
    SubDayDifference, YearPolicy, ZonedSelection,
};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Hour/minute/second remainders for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZdSubDay {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl From<SubDayDifference> for ZdSubDay {
    fn from(d: SubDayDifference) -> Self {
        Self {
            hours: d.hours,
            minutes: d.minutes,
            seconds: d.seconds,
        }
    }
}

/// Six-component difference summary for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZdBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl From<DifferenceBreakdown> for ZdBreakdown {
    fn from(b: DifferenceBreakdown) -> Self {
        Self {
            years: b.years,
            months: b.months,
            days: b.days,
            hours: b.hours,
            minutes: b.minutes,
            seconds: b.seconds,
        }
    }
}

/// Calculator options. All-false is the default configuration.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ZdConfig {
    /// Report signed, truncated remainders instead of magnitudes.
    pub truncated_remainders: bool,
    /// Derive years from calendar dates instead of `days / 360`.
    pub calendar_years: bool,
}

impl From<ZdConfig> for CalculatorConfig {
    fn from(c: ZdConfig) -> Self {
        let remainder = if c.truncated_remainders {
            RemainderPolicy::Truncated
        } else {
            RemainderPolicy::Magnitude
        };
        let years = if c.calendar_years {
            YearPolicy::Calendar
        } else {
            YearPolicy::Approximate360
        };
        CalculatorConfig::new()
            .with_remainder(remainder)
            .with_years(years)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Calculator functions
// ═══════════════════════════════════════════════════════════════════════════

/// Whole days from `right_ms` to `left_ms`, truncated toward zero.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn zonediff_day_difference(
    left_ms: i64,
    right_ms: i64,
    out: *mut i64,
) -> ZdStatus {
    catch_panic!(ZdStatus::Panic, {
        if out.is_null() {
            return ZdStatus::NullPointer;
        }
        let (left, right) = (Instant::from_millis(left_ms), Instant::from_millis(right_ms));
        match zonediff::day_difference(left, right) {
            Ok(days) => {
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe { *out = days };
                ZdStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// Hour/minute/second remainders of `left_ms - right_ms` under `config`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `ZdSubDay`.
#[no_mangle]
pub unsafe extern "C" fn zonediff_sub_day_difference(
    left_ms: i64,
    right_ms: i64,
    config: ZdConfig,
    out: *mut ZdSubDay,
) -> ZdStatus {
    catch_panic!(ZdStatus::Panic, {
        if out.is_null() {
            return ZdStatus::NullPointer;
        }
        let calculator = DifferenceCalculator::new(config.into());
        let (left, right) = (Instant::from_millis(left_ms), Instant::from_millis(right_ms));
        match calculator.sub_day_difference(left, right) {
            Ok(sub_day) => {
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe { *out = sub_day.into() };
                ZdStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// Whole calendar months between the two instants, each read in its own zone.
///
/// # Safety
/// `left_zone` and `right_zone` must point to NUL-terminated strings and
/// `out` must be a valid, writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn zonediff_month_difference(
    left_ms: i64,
    left_zone: *const c_char,
    right_ms: i64,
    right_zone: *const c_char,
    out: *mut i64,
) -> ZdStatus {
    catch_panic!(ZdStatus::Panic, {
        if out.is_null() {
            return ZdStatus::NullPointer;
        }
        let (left_zone, right_zone) =
            match unsafe { (zone_from_ptr(left_zone), zone_from_ptr(right_zone)) } {
                (Ok(l), Ok(r)) => (l, r),
                (Err(status), _) | (_, Err(status)) => return status,
            };
        match zonediff::month_difference(
            Instant::from_millis(left_ms),
            &left_zone,
            Instant::from_millis(right_ms),
            &right_zone,
        ) {
            Ok(months) => {
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe { *out = months };
                ZdStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// Approximate years, `days / 360` truncated toward zero.
#[no_mangle]
pub extern "C" fn zonediff_years_from_days(days: i64) -> i64 {
    zonediff::years_from_days(days)
}

/// Full six-component summary for the two selections.
///
/// # Safety
/// `left_zone` and `right_zone` must point to NUL-terminated strings and
/// `out` must be a valid, writable pointer to `ZdBreakdown`.
#[no_mangle]
pub unsafe extern "C" fn zonediff_breakdown(
    left_ms: i64,
    left_zone: *const c_char,
    right_ms: i64,
    right_zone: *const c_char,
    config: ZdConfig,
    out: *mut ZdBreakdown,
) -> ZdStatus {
    catch_panic!(ZdStatus::Panic, {
        if out.is_null() {
            return ZdStatus::NullPointer;
        }
        let (left_zone, right_zone) =
            match unsafe { (zone_from_ptr(left_zone), zone_from_ptr(right_zone)) } {
                (Ok(l), Ok(r)) => (l, r),
                (Err(status), _) | (_, Err(status)) => return status,
            };
        let left = ZonedSelection::new(Instant::from_millis(left_ms), left_zone);
        let right = ZonedSelection::new(Instant::from_millis(right_ms), right_zone);
        match DifferenceCalculator::new(config.into()).breakdown(&left, &right) {
            Ok(breakdown) => {
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe { *out = breakdown.into() };
                ZdStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI boundary tests — exercises every exported C function through Rust.

use std::ffi::CString;
use std::mem::MaybeUninit;
use zonediff_ffi::*;

const BERLIN: &str = "Europe/Berlin";
const TORONTO: &str = "America/Toronto";

fn zone(name: &str) -> CString {
    CString::new(name).unwrap()
}

fn local(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> ZdLocalDateTime {
    ZdLocalDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second: 0,
    }
}

fn instant(zone_name: &str, at: ZdLocalDateTime) -> i64 {
    let z = zone(zone_name);
    let mut out = 0_i64;
    let status = unsafe { zonediff_local_to_instant(z.as_ptr(), at, &mut out) };
    assert_eq!(status, ZdStatus::Ok);
    out
}

// ─── Null-pointer guards ──────────────────────────────────────────────────

#[test]
fn day_difference_null_pointer() {
    let status = unsafe { zonediff_day_difference(0, 0, std::ptr::null_mut()) };
    assert_eq!(status, ZdStatus::NullPointer);
}

#[test]
fn sub_day_difference_null_pointer() {
    let status =
        unsafe { zonediff_sub_day_difference(0, 0, ZdConfig::default(), std::ptr::null_mut()) };
    assert_eq!(status, ZdStatus::NullPointer);
}

#[test]
fn month_difference_null_zone() {
    let z = zone(BERLIN);
    let mut out = 0_i64;
    let status =
        unsafe { zonediff_month_difference(0, std::ptr::null(), 0, z.as_ptr(), &mut out) };
    assert_eq!(status, ZdStatus::NullPointer);
}

#[test]
fn breakdown_null_out() {
    let z = zone(BERLIN);
    let status = unsafe {
        zonediff_breakdown(
            0,
            z.as_ptr(),
            0,
            z.as_ptr(),
            ZdConfig::default(),
            std::ptr::null_mut(),
        )
    };
    assert_eq!(status, ZdStatus::NullPointer);
}

#[test]
fn local_to_instant_null_pointers() {
    let z = zone(BERLIN);
    let at = local(2024, 1, 1, 0, 0);
    let mut out = 0_i64;
    assert_eq!(
        unsafe { zonediff_local_to_instant(z.as_ptr(), at, std::ptr::null_mut()) },
        ZdStatus::NullPointer
    );
    assert_eq!(
        unsafe { zonediff_local_to_instant(std::ptr::null(), at, &mut out) },
        ZdStatus::NullPointer
    );
    assert_eq!(
        unsafe { zonediff_zone_is_valid(std::ptr::null()) },
        ZdStatus::NullPointer
    );
}

// ─── Invalid input ────────────────────────────────────────────────────────

#[test]
fn unknown_zone_is_rejected() {
    let bad = zone("Canada/Atlantis");
    let good = zone(TORONTO);
    let mut out = 0_i64;
    let status = unsafe { zonediff_month_difference(0, bad.as_ptr(), 0, good.as_ptr(), &mut out) };
    assert_eq!(status, ZdStatus::InvalidZone);
    assert_eq!(unsafe { zonediff_zone_is_valid(bad.as_ptr()) }, ZdStatus::InvalidZone);
    assert_eq!(unsafe { zonediff_zone_is_valid(good.as_ptr()) }, ZdStatus::Ok);
}

#[test]
fn non_utf8_zone_is_rejected() {
    let bytes = CString::new(vec![0xff_u8, 0xfe]).unwrap();
    assert_eq!(
        unsafe { zonediff_zone_is_valid(bytes.as_ptr()) },
        ZdStatus::InvalidUtf8
    );
}

#[test]
fn overflowing_delta_is_rejected() {
    let mut out = 0_i64;
    let status = unsafe { zonediff_day_difference(i64::MAX, -1, &mut out) };
    assert_eq!(status, ZdStatus::Overflow);
}

#[test]
fn out_of_range_instant_is_rejected() {
    let z = zone(BERLIN);
    let mut out = 0_i64;
    let status =
        unsafe { zonediff_month_difference(i64::MAX, z.as_ptr(), 0, z.as_ptr(), &mut out) };
    assert_eq!(status, ZdStatus::OutOfRange);
}

#[test]
fn invalid_and_nonexistent_local_times() {
    let z = zone(BERLIN);
    let mut out = 0_i64;
    let bad_month = local(2024, 13, 1, 0, 0);
    let status = unsafe { zonediff_local_to_instant(z.as_ptr(), bad_month, &mut out) };
    assert_eq!(status, ZdStatus::InvalidLocalTime);

    let in_gap = local(2024, 3, 31, 2, 30);
    let status = unsafe { zonediff_local_to_instant(z.as_ptr(), in_gap, &mut out) };
    assert_eq!(status, ZdStatus::NonexistentLocalTime);
}

// ─── Happy paths ──────────────────────────────────────────────────────────

#[test]
fn same_moment_in_berlin_and_toronto() {
    let left = instant(BERLIN, local(2023, 6, 15, 10, 0));
    let right = instant(TORONTO, local(2023, 6, 15, 4, 0));
    assert_eq!(left, right);

    let mut days = -1_i64;
    assert_eq!(
        unsafe { zonediff_day_difference(left, right, &mut days) },
        ZdStatus::Ok
    );
    assert_eq!(days, 0);

    let mut sub_day = MaybeUninit::<ZdSubDay>::uninit();
    let config = ZdConfig::default();
    let status = unsafe { zonediff_sub_day_difference(left, right, config, sub_day.as_mut_ptr()) };
    assert_eq!(status, ZdStatus::Ok);
    assert_eq!(unsafe { sub_day.assume_init() }, ZdSubDay::default());
}

#[test]
fn month_difference_across_zones() {
    let right = instant(TORONTO, local(2024, 1, 10, 12, 0));
    let left = instant(BERLIN, local(2024, 3, 10, 12, 0));
    let (lz, rz) = (zone(BERLIN), zone(TORONTO));
    let mut months = 0_i64;
    let status =
        unsafe { zonediff_month_difference(left, lz.as_ptr(), right, rz.as_ptr(), &mut months) };
    assert_eq!(status, ZdStatus::Ok);
    assert_eq!(months, 2);
}

#[test]
fn breakdown_with_default_and_custom_config() {
    let left = instant(BERLIN, local(2024, 5, 1, 8, 0));
    let right = instant("America/Vancouver", local(2024, 5, 3, 14, 45));
    let (lz, rz) = (zone(BERLIN), zone("America/Vancouver"));

    let config = ZdConfig::default();
    let mut out = MaybeUninit::<ZdBreakdown>::uninit();
    let status = unsafe {
        zonediff_breakdown(left, lz.as_ptr(), right, rz.as_ptr(), config, out.as_mut_ptr())
    };
    assert_eq!(status, ZdStatus::Ok);
    let b = unsafe { out.assume_init() };
    assert_eq!((b.years, b.months, b.days), (0, 0, -2));
    assert_eq!((b.hours, b.minutes, b.seconds), (15, 45, 0));

    let config = ZdConfig {
        truncated_remainders: true,
        calendar_years: true,
    };
    let mut out = MaybeUninit::<ZdBreakdown>::uninit();
    let status = unsafe {
        zonediff_breakdown(left, lz.as_ptr(), right, rz.as_ptr(), config, out.as_mut_ptr())
    };
    assert_eq!(status, ZdStatus::Ok);
    let b = unsafe { out.assume_init() };
    assert_eq!((b.hours, b.minutes), (-15, -45));
}

#[test]
fn years_from_days_matches_library() {
    assert_eq!(zonediff_years_from_days(360), 1);
    assert_eq!(zonediff_years_from_days(0), 0);
    assert_eq!(zonediff_years_from_days(-360), -1);
}

#[test]
fn version_is_encoded() {
    assert_eq!(zonediff_ffi_version(), 100);
}

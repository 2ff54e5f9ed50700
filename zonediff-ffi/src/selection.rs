// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for zones and wall-clock selections.

use crate::error::ZdStatus;
use std::ffi::{c_char, CStr};
use zonediff::{ZoneId, ZonedSelection};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// A wall-clock reading as picked by the user, without a zone.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ZdLocalDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ZdLocalDateTime {
    pub(crate) fn to_selection(self, zone: ZoneId) -> zonediff::Result<ZonedSelection> {
        ZonedSelection::from_components(
            zone,
            self.year,
            self.month.into(),
            self.day.into(),
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Read a zone identifier from a C string.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn zone_from_ptr(ptr: *const c_char) -> Result<ZoneId, ZdStatus> {
    if ptr.is_null() {
        return Err(ZdStatus::NullPointer);
    }
    // SAFETY: checked for null; the caller guarantees NUL termination.
    let name = unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| ZdStatus::InvalidUtf8)?;
    ZoneId::parse(name).map_err(ZdStatus::from)
}

// ═══════════════════════════════════════════════════════════════════════════
// Selection functions
// ═══════════════════════════════════════════════════════════════════════════

/// Returns Ok if `zone` is a known IANA identifier, InvalidZone otherwise.
///
/// # Safety
/// `zone` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn zonediff_zone_is_valid(zone: *const c_char) -> ZdStatus {
    catch_panic!(ZdStatus::Panic, {
        match unsafe { zone_from_ptr(zone) } {
            Ok(_) => ZdStatus::Ok,
            Err(status) => status,
        }
    })
}

/// Interpret a wall-clock reading in `zone` and write the absolute instant
/// (milliseconds since the Unix epoch) to `out`.
///
/// Readings skipped by a DST gap return NonexistentLocalTime; readings that
/// occur twice resolve to the earlier instant.
///
/// # Safety
/// `zone` must point to a NUL-terminated string and `out` must be a valid,
/// writable pointer to `i64`.
#[no_mangle]
pub unsafe extern "C" fn zonediff_local_to_instant(
    zone: *const c_char,
    local: ZdLocalDateTime,
    out: *mut i64,
) -> ZdStatus {
    catch_panic!(ZdStatus::Panic, {
        if out.is_null() {
            return ZdStatus::NullPointer;
        }
        let zone = match unsafe { zone_from_ptr(zone) } {
            Ok(zone) => zone,
            Err(status) => return status,
        };
        match local.to_selection(zone) {
            Ok(selection) => {
                // SAFETY: `out` was checked for null and the caller guarantees it is writable.
                unsafe { *out = selection.instant.millis() };
                ZdStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use zonediff::ZoneDiffError;

/// Status codes returned by zonediff-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZdStatus {
    /// Success.
    Ok = 0,
    /// A required input or output pointer was null.
    NullPointer = 1,
    /// A zone string was not valid UTF-8.
    InvalidUtf8 = 2,
    /// A zone string is not a known IANA identifier.
    InvalidZone = 3,
    /// The two instants are too far apart for a millisecond delta.
    Overflow = 4,
    /// An instant cannot be projected onto a calendar date.
    OutOfRange = 5,
    /// The wall-clock time falls in a DST gap.
    NonexistentLocalTime = 6,
    /// A date or time component is out of range.
    InvalidLocalTime = 7,
    /// A Rust panic was caught at the boundary.
    Panic = 99,
}

impl From<&ZoneDiffError> for ZdStatus {
    fn from(err: &ZoneDiffError) -> Self {
        match err {
            ZoneDiffError::InvalidZoneIdentifier(_) | ZoneDiffError::UnsupportedRegion(_) => {
                ZdStatus::InvalidZone
            }
            ZoneDiffError::Overflow { .. } => ZdStatus::Overflow,
            ZoneDiffError::OutOfRange(_) => ZdStatus::OutOfRange,
            ZoneDiffError::NonexistentLocalTime { .. } => ZdStatus::NonexistentLocalTime,
            ZoneDiffError::InvalidLocalTime(_) => ZdStatus::InvalidLocalTime,
        }
    }
}

impl From<ZoneDiffError> for ZdStatus {
    fn from(err: ZoneDiffError) -> Self {
        tracing::debug!(error = %err, "zonediff call failed");
        ZdStatus::from(&err)
    }
}

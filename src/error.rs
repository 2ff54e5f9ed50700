// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation in the crate.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures reported by zone parsing, selection building and the calculator.
///
/// None of these are transient: the calculator is pure, so retrying a call
/// with the same inputs fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneDiffError {
    /// The identifier does not resolve in the IANA time-zone database.
    #[error("unknown IANA time zone identifier '{0}'")]
    InvalidZoneIdentifier(String),

    /// The input names a zone or region outside the selectable set.
    #[error("'{0}' is not one of the selectable regions")]
    UnsupportedRegion(String),

    /// `left - right` does not fit in a signed 64-bit millisecond count.
    #[error("elapsed milliseconds between {left} and {right} overflow i64")]
    Overflow { left: i64, right: i64 },

    /// The instant cannot be projected onto a calendar date.
    #[error("instant {0} ms is outside the representable calendar range")]
    OutOfRange(i64),

    /// The wall-clock time was skipped by a DST transition in this zone.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime { zone: String, local: NaiveDateTime },

    /// A date or time component is out of range (month 13, hour 25, ...).
    #[error("invalid local date/time: {0}")]
    InvalidLocalTime(String),
}

pub type Result<T> = std::result::Result<T, ZoneDiffError>;

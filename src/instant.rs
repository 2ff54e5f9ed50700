// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Absolute, zone-free instants.
//!
//! [`Instant`] stores a single `i64` count of milliseconds since
//! 1970-01-01T00:00:00Z.  It carries no zone: the same value is "10:00 in
//! Berlin" and "04:00 in Toronto" at once.  Zones only enter when an instant
//! is projected onto a wall clock with [`Instant::in_zone`].
//!
//! Arithmetic between instants is checked.  A delta that does not fit in
//! `i64` is reported as [`ZoneDiffError::Overflow`] instead of wrapping.

use crate::error::{Result, ZoneDiffError};
use crate::zone::ZoneId;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time, in milliseconds since the Unix epoch.
///
/// The struct is `Copy` and layout-identical to an `i64`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw millisecond count.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    ///
    /// Sub-millisecond precision is truncated.
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_millis(datetime.timestamp_millis())
    }

    /// The current wall-clock instant.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.millis)
    }

    /// Project onto the wall clock of `zone`, applying its full IANA rules.
    pub fn in_zone(&self, zone: &ZoneId) -> Result<DateTime<Tz>> {
        self.to_utc()
            .map(|utc| utc.with_timezone(&zone.tz()))
            .ok_or(ZoneDiffError::OutOfRange(self.millis))
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Negative when `self` precedes `earlier`.
    pub fn elapsed_since(self, earlier: Self) -> Result<i64> {
        self.millis
            .checked_sub(earlier.millis)
            .ok_or(ZoneDiffError::Overflow {
                left: self.millis,
                right: earlier.millis,
            })
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(utc) => write!(f, "{}", utc.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{} ms", self.millis),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.millis)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(Self::from_millis(v))
    }
}

// ── From/Into ─────────────────────────────────────────────────────────────

impl From<DateTime<Utc>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

impl From<i64> for Instant {
    #[inline]
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<Instant> for i64 {
    #[inline]
    fn from(instant: Instant) -> Self {
        instant.millis
    }
}

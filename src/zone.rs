// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-zone identifiers and the fixed set of selectable regions.
//!
//! [`ZoneId`] is any identifier the IANA database knows.  [`Region`] is the
//! closed list a user may actually pick from:
//!
//! | Region | Zone | Country | Locale |
//! |--------|------|---------|--------|
//! | [`Region::Toronto`] | `America/Toronto` | Canada | en-CA |
//! | [`Region::Vancouver`] | `America/Vancouver` | Canada | en-CA |
//! | [`Region::Berlin`] | `Europe/Berlin` | Germany | de-DE |

use crate::error::{Result, ZoneDiffError};
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ZoneId
// ---------------------------------------------------------------------------

/// A validated IANA time-zone identifier.
///
/// Only used to project an [`Instant`](crate::Instant) onto a calendar
/// date; it holds no state of its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoneId {
    tz: Tz,
}

impl ZoneId {
    /// Resolve an identifier such as `"Europe/Berlin"`.
    ///
    /// Unknown names are rejected; there is no fallback to UTC or to the
    /// system zone.
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::from_tz)
            .map_err(|_| ZoneDiffError::InvalidZoneIdentifier(name.to_owned()))
    }

    #[inline]
    pub const fn from_tz(tz: Tz) -> Self {
        Self { tz }
    }

    /// The underlying `chrono-tz` zone.
    #[inline]
    pub const fn tz(&self) -> Tz {
        self.tz
    }

    /// The IANA name, e.g. `"America/Toronto"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }
}

impl FromStr for ZoneId {
    type Err = ZoneDiffError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Tz> for ZoneId {
    #[inline]
    fn from(tz: Tz) -> Self {
        Self::from_tz(tz)
    }
}

impl From<Region> for ZoneId {
    #[inline]
    fn from(region: Region) -> Self {
        region.zone()
    }
}

// ---------------------------------------------------------------------------
// Country / Locale
// ---------------------------------------------------------------------------

/// Which side of the comparison a region belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Country {
    Canada,
    Germany,
}

/// Display conventions for dates and times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Locale {
    /// `2023 Jun 15`, `04:00:00 AM`.
    EnCa,
    /// `15.06.2023`, `10:00:00`.
    DeDe,
}

impl Locale {
    const fn date_pattern(self) -> &'static str {
        match self {
            Locale::EnCa => "%Y %b %d",
            Locale::DeDe => "%d.%m.%Y",
        }
    }

    const fn time_pattern(self) -> &'static str {
        match self {
            Locale::EnCa => "%I:%M:%S %p",
            Locale::DeDe => "%H:%M:%S",
        }
    }

    /// Format the calendar date part of `datetime`.
    pub fn format_date<Z: TimeZone>(self, datetime: &DateTime<Z>) -> String
    where
        Z::Offset: fmt::Display,
    {
        datetime.format(self.date_pattern()).to_string()
    }

    /// Format the wall-clock part of `datetime`.
    pub fn format_time<Z: TimeZone>(self, datetime: &DateTime<Z>) -> String
    where
        Z::Offset: fmt::Display,
    {
        datetime.format(self.time_pattern()).to_string()
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A selectable region.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    Toronto,
    Vancouver,
    Berlin,
}

impl Region {
    /// Every selectable region.
    pub const ALL: [Region; 3] = [Region::Toronto, Region::Vancouver, Region::Berlin];

    /// The Canadian choices, in dropdown order.
    pub const CANADA: [Region; 2] = [Region::Toronto, Region::Vancouver];

    /// The German choices.
    pub const GERMANY: [Region; 1] = [Region::Berlin];

    pub const fn tz(self) -> Tz {
        match self {
            Region::Toronto => chrono_tz::America::Toronto,
            Region::Vancouver => chrono_tz::America::Vancouver,
            Region::Berlin => chrono_tz::Europe::Berlin,
        }
    }

    #[inline]
    pub const fn zone(self) -> ZoneId {
        ZoneId::from_tz(self.tz())
    }

    pub const fn country(self) -> Country {
        match self {
            Region::Toronto | Region::Vancouver => Country::Canada,
            Region::Berlin => Country::Germany,
        }
    }

    pub const fn locale(self) -> Locale {
        match self.country() {
            Country::Canada => Locale::EnCa,
            Country::Germany => Locale::DeDe,
        }
    }

    /// Short lowercase name, as accepted by [`Region::from_str`].
    pub const fn short_name(self) -> &'static str {
        match self {
            Region::Toronto => "toronto",
            Region::Vancouver => "vancouver",
            Region::Berlin => "berlin",
        }
    }

    /// The region whose zone is `zone`, if it is one of the selectable ones.
    pub fn from_zone(zone: ZoneId) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.tz() == zone.tz())
    }
}

impl FromStr for Region {
    type Err = ZoneDiffError;

    /// Accepts a short name (`"toronto"`), a canonical zone
    /// (`"America/Toronto"`) or a legacy alias (`"Canada/Eastern"`).
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        if let Some(region) = Self::ALL
            .into_iter()
            .find(|r| r.short_name().eq_ignore_ascii_case(key))
        {
            return Ok(region);
        }
        match key {
            "Canada/Eastern" => return Ok(Region::Toronto),
            "Canada/Pacific" => return Ok(Region::Vancouver),
            _ => {}
        }
        // A real zone that is simply not offered is reported as such.
        let zone = ZoneId::parse(key)?;
        Self::from_zone(zone).ok_or_else(|| ZoneDiffError::UnsupportedRegion(key.to_owned()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.zone().name())
    }
}

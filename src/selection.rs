// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A user's pick, interpreted in a specific zone.

use crate::error::{Result, ZoneDiffError};
use crate::instant::Instant;
use crate::zone::{Locale, Region, ZoneId};
use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use tracing::warn;

/// An absolute instant paired with the zone it was picked in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZonedSelection {
    pub instant: Instant,
    pub zone: ZoneId,
}

impl ZonedSelection {
    #[inline]
    pub const fn new(instant: Instant, zone: ZoneId) -> Self {
        Self { instant, zone }
    }

    /// The current instant, tagged with `zone`.
    pub fn now(zone: ZoneId) -> Self {
        Self::new(Instant::from_utc(Utc::now()), zone)
    }

    /// Interpret a wall-clock reading in `zone`.
    ///
    /// A reading skipped by a spring-forward transition is rejected.  A
    /// reading that occurs twice (fall-back) resolves to the earlier instant.
    pub fn from_local(zone: ZoneId, local: NaiveDateTime) -> Result<Self> {
        let resolved = match zone.tz().from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, latest) => {
                warn!(
                    zone = %zone,
                    %local,
                    earliest = %earliest.with_timezone(&Utc),
                    latest = %latest.with_timezone(&Utc),
                    "ambiguous local time, using the earlier instant"
                );
                earliest
            }
            LocalResult::None => {
                return Err(ZoneDiffError::NonexistentLocalTime {
                    zone: zone.name().to_owned(),
                    local,
                })
            }
        };
        Ok(Self::new(Instant::from_utc(resolved.with_timezone(&Utc)), zone))
    }

    /// Combine separately picked date and time, then [`from_local`](Self::from_local).
    pub fn from_date_and_time(zone: ZoneId, date: NaiveDate, time: NaiveTime) -> Result<Self> {
        Self::from_local(zone, date.and_time(time))
    }

    /// Build a selection from raw calendar and clock fields.
    ///
    /// Out-of-range fields (month 13, hour 24, February 30, ...) fail with
    /// [`ZoneDiffError::InvalidLocalTime`] before any zone rules apply.
    pub fn from_components(
        zone: ZoneId,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let local = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or_else(|| {
                ZoneDiffError::InvalidLocalTime(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })?;
        Self::from_local(zone, local)
    }

    /// Convenience for the fixed regions.
    pub fn in_region(region: Region, local: NaiveDateTime) -> Result<Self> {
        Self::from_local(region.zone(), local)
    }

    /// The wall-clock reading in this selection's zone.
    pub fn local(&self) -> Result<DateTime<Tz>> {
        self.instant.in_zone(&self.zone)
    }

    /// Date and time formatted for `locale`, e.g. `("15.06.2023", "10:00:00")`.
    pub fn format(&self, locale: Locale) -> Result<(String, String)> {
        let local = self.local()?;
        Ok((locale.format_date(&local), locale.format_time(&local)))
    }
}

impl fmt::Display for ZonedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.local() {
            Ok(local) => write!(f, "{} [{}]", local.format("%Y-%m-%dT%H:%M:%S%:z"), self.zone),
            Err(_) => write!(f, "{} [{}]", self.instant, self.zone),
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone Difference
//!
//! Calendar-aware differences between two wall-clock selections made in
//! different IANA time zones, e.g. "this moment as experienced in Toronto"
//! against "that moment as experienced in Berlin".
//!
//! # Core types
//!
//! - [`Instant`] — absolute milliseconds since the Unix epoch, no zone.
//! - [`ZoneId`] — validated IANA identifier, used only for calendar projection.
//! - [`Region`] — the fixed set of selectable regions.
//! - [`ZonedSelection`] — an instant paired with the zone it was picked in.
//! - [`DifferenceBreakdown`] — years, months, days, hours, minutes, seconds.
//! - [`DifferenceCalculator`] — combines the operations under a [`CalculatorConfig`].
//!
//! # Operations
//!
//! | Function | Zones | Result |
//! |----------|-------|--------|
//! | [`day_difference`] | ignored | whole days, truncated |
//! | [`sub_day_difference`] | ignored | hour/minute/second remainders |
//! | [`month_difference`] | one per side | whole calendar months |
//! | [`years_from_days`] | — | `days / 360` |
//! | [`elapsed_days`] | ignored | fractional [`qtty::Days`] |
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zonediff::{DifferenceCalculator, Region, ZonedSelection};
//!
//! let noon = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let germany = ZonedSelection::in_region(Region::Berlin, noon(2024, 3, 10)).unwrap();
//! let canada = ZonedSelection::in_region(Region::Toronto, noon(2024, 1, 10)).unwrap();
//!
//! let breakdown = DifferenceCalculator::default().breakdown(&germany, &canada).unwrap();
//! assert_eq!(breakdown.months, 2);
//! ```

mod calendar;
mod difference;
mod error;
pub(crate) mod instant;
mod selection;
pub(crate) mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{calendar_date, whole_months_between, whole_years_between};
pub use difference::{
    day_difference, elapsed_days, month_difference, sub_day_difference, sub_day_difference_with,
    years_from_days, CalculatorConfig, DifferenceBreakdown, DifferenceCalculator, RemainderPolicy,
    SubDayDifference, YearPolicy, DAYS_PER_APPROX_YEAR,
};
pub use error::{Result, ZoneDiffError};
pub use instant::Instant;
pub use selection::ZonedSelection;
pub use zone::{Country, Locale, Region, ZoneId};

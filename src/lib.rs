// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar arithmetic
//!
//! This crate provides civil-calendar helpers layered on top of an absolute
//! timeline: Julian Day Numbers, time-of-day fractions, component-wise
//! composition of instants, and calendar-unit intervals.
//!
//! # Core types
//!
//! - [`Instant`] — an absolute point on the timeline, zone-free.
//! - [`CalendarProvider`] — trait that maps instants to civil fields in one
//!   calendar and zone (decompose, compose, difference, add).
//! - [`ChronoCalendar<Z>`] — the Gregorian provider for any chrono zone.
//! - [`CivilComponents`], [`CivilDate`], [`TimeOfDay`] — civil fields.
//! - [`DayFraction`] — elapsed share of a civil day in `[0, 1]`.
//! - [`Interval`] — non-negative year…second breakdown between instants.
//! - [`Calendar<P, C>`] — a provider and a [`Clock`] bundled together.
//!
//! # Operations
//!
//! | Area | Functions |
//! |------|-----------|
//! | Julian day | [`julian_day_number`], [`CivilDate::julian_day_number`], [`CivilDate::modified_julian_day`] |
//! | Day fraction | [`from_fraction`], [`to_fraction`], [`minute_of_day`] |
//! | Composition | [`compose()`], [`at_time`], [`compose_from_scratch`], [`replace_day`], [`first_hour_of_day`], [`last_hour_of_day`] |
//! | Intervals | [`difference`], [`single_unit_difference`], [`minutes_between`], [`days_between`] |
//! | Text | [`format_zulu`], [`format_zulu_millis`], [`parse_zulu`] |
//!
//! # Zones and "now"
//!
//! Nothing reads a global zone or the system time implicitly.  The zone is
//! carried by the provider and the current instant by a [`Clock`]; tests pin
//! it with [`FixedClock`].
//!
//! ```
//! use calday::{Calendar, CalendarUnit, ChronoCalendar, FixedClock, Instant};
//!
//! let now = Instant::from_epoch_seconds(1_640_365_200).unwrap(); // 2021-12-24T17:00:00Z
//! let cal = Calendar::new(ChronoCalendar::new(chrono_tz::America::Detroit), FixedClock(now));
//!
//! let morning = cal.from_fraction(0.25).unwrap();
//! assert_eq!(cal.to_components(morning).hour, 6);
//! assert_eq!(cal.single_unit_difference(morning, now, CalendarUnit::Hour), 6);
//! ```

mod calendar;
mod clock;
mod components;
pub mod compose;
mod config;
mod error;
pub mod fraction;
pub(crate) mod instant;
pub mod interval;
mod julian;
mod provider;
mod zulu;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use clock::{Clock, FixedClock, SystemClock};
pub use components::{CivilComponents, CivilDate, TimeOfDay, MINUTES_IN_DAY, MINUTES_IN_HOUR};
pub use compose::{
    at_time, compose, compose_from_scratch, first_hour_of_day, last_hour_of_day, replace_day,
    FieldOverrides,
};
pub use config::CalendarConfig;
pub use error::DateError;
pub use fraction::{from_fraction, minute_of_day, to_fraction, DayFraction};
pub use instant::Instant;
pub use interval::{
    days_between, difference, minutes_between, single_unit_difference, CalendarUnit,
    ComponentDelta, Interval,
};
pub use julian::{julian_day_number, MJD_EPOCH};
pub use provider::{CalendarProvider, ChronoCalendar};
pub use zulu::{format_zulu, format_zulu_millis, parse_zulu};

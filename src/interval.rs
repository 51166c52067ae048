// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar distance between two instants.
//!
//! This module provides:
//! - [`CalendarUnit`]: the six civil units a distance can be counted in
//! - [`ComponentDelta`]: a signed, greedy per-unit distance
//! - [`Interval`]: per-field magnitudes of a [`ComponentDelta`]
//! - [`difference`] / [`single_unit_difference`]: the calculators
//!
//! An [`Interval`] is *not* a normalized duration.  Each field is the
//! absolute value of the corresponding signed field reported by the
//! provider, taken independently, so the six numbers are only meaningful
//! as a calendar decomposition in the direction the provider counted.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::instant::Instant;
use crate::provider::CalendarProvider;

/// A civil unit of calendar distance, largest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl CalendarUnit {
    /// Every unit, largest first.
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Units shorter than a day, largest first.
    pub(crate) const SUB_DAY: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];

    /// Length in seconds of the units that have a fixed one.  Years, months
    /// and days depend on the calendar and report zero.
    #[inline]
    pub(crate) const fn fixed_seconds(self) -> i64 {
        match self {
            Self::Year | Self::Month | Self::Day => 0,
            Self::Hour => 3_600,
            Self::Minute => 60,
            Self::Second => 1,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ComponentDelta
// ═══════════════════════════════════════════════════════════════════════════

/// Signed calendar distance, one field per [`CalendarUnit`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ComponentDelta {
    /// The signed count for `unit`.
    pub const fn get(&self, unit: CalendarUnit) -> i64 {
        match unit {
            CalendarUnit::Year => self.years,
            CalendarUnit::Month => self.months,
            CalendarUnit::Day => self.days,
            CalendarUnit::Hour => self.hours,
            CalendarUnit::Minute => self.minutes,
            CalendarUnit::Second => self.seconds,
        }
    }

    pub(crate) fn set(&mut self, unit: CalendarUnit, value: i64) {
        match unit {
            CalendarUnit::Year => self.years = value,
            CalendarUnit::Month => self.months = value,
            CalendarUnit::Day => self.days = value,
            CalendarUnit::Hour => self.hours = value,
            CalendarUnit::Minute => self.minutes = value,
            CalendarUnit::Second => self.seconds = value,
        }
    }

    /// Per-field absolute values.
    pub const fn magnitudes(&self) -> Interval {
        Interval {
            years: self.years.unsigned_abs(),
            months: self.months.unsigned_abs(),
            days: self.days.unsigned_abs(),
            hours: self.hours.unsigned_abs(),
            minutes: self.minutes.unsigned_abs(),
            seconds: self.seconds.unsigned_abs(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Interval
// ═══════════════════════════════════════════════════════════════════════════

/// Unsigned calendar distance between two instants.
///
/// # Examples
///
/// ```
/// use calday::{difference, ChronoCalendar, Instant, Interval};
///
/// let cal = ChronoCalendar::utc();
/// let a = Instant::from_epoch_seconds(1_445_077_917).unwrap();
/// assert_eq!(difference(&cal, a, a), Interval::ZERO);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Interval {
    /// The zero interval.
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// `true` when every field is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}y {}mo {}d {}h {}min {}s",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Calculators
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar distance from `from` to `to` in all six units, with the
/// absolute value taken per field.
///
/// Same-instant input always yields [`Interval::ZERO`].
pub fn difference<P>(provider: &P, from: Instant, to: Instant) -> Interval
where
    P: CalendarProvider + ?Sized,
{
    let delta = provider.components_between(from, to, &CalendarUnit::ALL);
    tracing::trace!(?from, ?to, ?delta, "calendar difference");
    delta.magnitudes()
}

/// Absolute distance from `from` to `to` counted in `unit` alone.
///
/// Larger units are not split off first: two days and three minutes is
/// `2883` minutes, not `3`.
pub fn single_unit_difference<P>(
    provider: &P,
    from: Instant,
    to: Instant,
    unit: CalendarUnit,
) -> u64
where
    P: CalendarProvider + ?Sized,
{
    provider
        .components_between(from, to, &[unit])
        .get(unit)
        .unsigned_abs()
}

/// Whole minutes between two instants, ignoring direction.
#[inline]
pub fn minutes_between<P>(provider: &P, from: Instant, to: Instant) -> u64
where
    P: CalendarProvider + ?Sized,
{
    single_unit_difference(provider, from, to, CalendarUnit::Minute)
}

/// Whole calendar days between two instants, ignoring direction.
#[inline]
pub fn days_between<P>(provider: &P, from: Instant, to: Instant) -> u64
where
    P: CalendarProvider + ?Sized,
{
    single_unit_difference(provider, from, to, CalendarUnit::Day)
}

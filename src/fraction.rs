// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fraction of a civil day ↔ time of day.
//!
//! A [`DayFraction`] is the share of a 24-hour day that has elapsed, from
//! `0.0` (midnight) to `1.0`.  The mapping to a wall-clock time works at
//! minute granularity:
//!
//! ```text
//! total   = fraction · 1440
//! hours   = ⌊total / 60⌋
//! minutes = ⌊(total / 60 − hours) · 60⌋
//! ```
//!
//! so going fraction → time → fraction loses anything below one minute.
//! That loss is bounded by `1 / 1440` and is expected.

use qtty::{Days, Second, Seconds};

use crate::clock::Clock;
use crate::components::{TimeOfDay, MINUTES_IN_DAY, MINUTES_IN_HOUR};
use crate::compose::at_time;
use crate::error::DateError;
use crate::instant::Instant;
use crate::provider::CalendarProvider;

/// Elapsed share of a civil day, always within `[0.0, 1.0]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct DayFraction(f64);

impl DayFraction {
    /// Midnight.
    pub const START: Self = Self(0.0);

    /// Noon.
    pub const NOON: Self = Self(0.5);

    /// Clamp `value` into `[0.0, 1.0]`.  `NaN` is treated as `0.0`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Fraction of the day reached at `minute_of_day`.
    pub fn from_minute_of_day(minute_of_day: u32) -> Self {
        Self::new(f64::from(minute_of_day) / f64::from(MINUTES_IN_DAY))
    }

    /// The clamped value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// The elapsed part of the day as a duration.
    #[inline]
    pub fn elapsed(&self) -> Seconds {
        Days::new(self.0).to::<Second>()
    }

    /// Hour and minute reached at this fraction, second always zero.
    ///
    /// The truncation chain never overflows: a full day (`1.0`) saturates to
    /// 23:59 instead of rolling over to 24:00.
    pub fn time_of_day(&self) -> TimeOfDay {
        let total_minutes = self.0 * f64::from(MINUTES_IN_DAY);
        let hours_real = total_minutes / f64::from(MINUTES_IN_HOUR);
        let hours = hours_real.floor();
        let minutes = ((hours_real - hours) * f64::from(MINUTES_IN_HOUR)).floor();

        let (hour, minute) = if hours >= 24.0 {
            (23, MINUTES_IN_HOUR - 1)
        } else {
            (hours as u32, (minutes as u32).min(MINUTES_IN_HOUR - 1))
        };
        tracing::trace!(fraction = self.0, hour, minute, "day fraction to time of day");
        TimeOfDay::new(hour, minute, 0)
    }
}

impl From<f64> for DayFraction {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<DayFraction> for f64 {
    #[inline]
    fn from(fraction: DayFraction) -> Self {
        fraction.0
    }
}

/// Minutes elapsed since local midnight at `instant`.  Seconds are dropped.
#[inline]
pub fn minute_of_day<P>(provider: &P, instant: Instant) -> u32
where
    P: CalendarProvider + ?Sized,
{
    provider.decompose(instant).minute_of_day()
}

/// Fraction of the local day elapsed at `instant`, e.g. noon is `0.5`.
#[inline]
pub fn to_fraction<P>(provider: &P, instant: Instant) -> DayFraction
where
    P: CalendarProvider + ?Sized,
{
    DayFraction::from_minute_of_day(minute_of_day(provider, instant))
}

/// Today's date (per `clock`) at the time of day reached at `fraction`.
///
/// # Errors
///
/// [`DateError::DateNotCreated`] only when the zone skips that wall-clock
/// minute today (a DST gap).
pub fn from_fraction<P, C>(
    provider: &P,
    clock: &C,
    fraction: impl Into<DayFraction>,
) -> Result<Instant, DateError>
where
    P: CalendarProvider + ?Sized,
    C: Clock + ?Sized,
{
    let time = fraction.into().time_of_day();
    at_time(provider, clock.now(), time.hour, time.minute, time.second)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar context: a provider and a clock, bundled.
//!
//! [`Calendar<P, C>`] is the convenience front-end over the free functions in
//! [`compose`](crate::compose), [`fraction`](crate::fraction) and
//! [`interval`](crate::interval).  It owns nothing global: the zone lives in
//! the provider `P` and "now" comes from the clock `C`, both chosen by the
//! caller.
//!
//! ```
//! use calday::{Calendar, ChronoCalendar, FixedClock, Instant};
//!
//! let clock = FixedClock(Instant::from_epoch_seconds(1_640_365_200).unwrap());
//! let cal = Calendar::new(ChronoCalendar::new(chrono_tz::America::Detroit), clock);
//!
//! let noon = cal.now();
//! assert_eq!(cal.minute_of_day(noon), 720);
//! assert_eq!(cal.to_fraction(noon).value(), 0.5);
//! ```

use chrono::Utc;
use chrono_tz::Tz;

use crate::clock::{Clock, SystemClock};
use crate::components::{CivilComponents, CivilDate, TimeOfDay};
use crate::compose::{self, FieldOverrides};
use crate::config::CalendarConfig;
use crate::error::DateError;
use crate::fraction::{self, DayFraction};
use crate::instant::Instant;
use crate::interval::{self, CalendarUnit, Interval};
use crate::provider::{CalendarProvider, ChronoCalendar};

/// A calendar provider together with the clock that defines "now".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calendar<P = ChronoCalendar<Utc>, C = SystemClock> {
    provider: P,
    clock: C,
}

impl Calendar {
    /// UTC calendar on the system clock.
    #[inline]
    pub const fn utc() -> Self {
        Self {
            provider: ChronoCalendar::utc(),
            clock: SystemClock,
        }
    }
}

impl Calendar<ChronoCalendar<Tz>, SystemClock> {
    /// Calendar in the configured IANA zone, on the system clock.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, DateError> {
        let zone = config.time_zone()?;
        tracing::debug!(timezone = %zone, "calendar configured");
        Ok(Self::new(ChronoCalendar::new(zone), SystemClock))
    }
}

impl<P: CalendarProvider, C: Clock> Calendar<P, C> {
    #[inline]
    pub const fn new(provider: P, clock: C) -> Self {
        Self { provider, clock }
    }

    /// Same calendar, different clock.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Calendar<P, C2> {
        Calendar {
            provider: self.provider,
            clock,
        }
    }

    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The clock's current instant.
    #[inline]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    // ── component extraction ──────────────────────────────────────────

    /// All six civil fields of `instant`.
    #[inline]
    pub fn to_components(&self, instant: Instant) -> CivilComponents {
        self.provider.decompose(instant)
    }

    /// Month, day and year of `instant`.
    #[inline]
    pub fn to_month_day_year(&self, instant: Instant) -> CivilDate {
        self.provider.decompose(instant).date()
    }

    /// Julian Day Number of `instant`'s civil date.  Time of day is ignored.
    #[inline]
    pub fn julian_day_number(&self, instant: Instant) -> f64 {
        self.to_month_day_year(instant).julian_day_number()
    }

    /// `true` when both instants fall on the same civil date.
    pub fn is_same_day(&self, a: Instant, b: Instant) -> bool {
        self.to_month_day_year(a) == self.to_month_day_year(b)
    }

    // ── composition ───────────────────────────────────────────────────

    /// See [`compose::compose`].
    #[inline]
    pub fn compose(&self, base: Instant, overrides: &FieldOverrides) -> Result<Instant, DateError> {
        compose::compose(&self.provider, base, overrides)
    }

    /// See [`compose::at_time`].
    #[inline]
    pub fn at_time(
        &self,
        base: Instant,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Instant, DateError> {
        compose::at_time(&self.provider, base, hour, minute, second)
    }

    /// See [`compose::compose_from_scratch`].
    #[inline]
    pub fn compose_from_scratch(
        &self,
        date: CivilDate,
        time: TimeOfDay,
    ) -> Result<Instant, DateError> {
        compose::compose_from_scratch(&self.provider, date, time)
    }

    /// Midnight on `month`/`day`/`year`.
    #[inline]
    pub fn from_month(&self, month: u32, day: u32, year: i32) -> Result<Instant, DateError> {
        self.compose_from_scratch(CivilDate::new(month, day, year), TimeOfDay::MIDNIGHT)
    }

    /// See [`compose::replace_day`].
    #[inline]
    pub fn replace_day(&self, target: Instant, source_of_day: Instant) -> Instant {
        compose::replace_day(&self.provider, target, source_of_day)
    }

    /// `target`'s time of day on today's date.
    #[inline]
    pub fn replacing_day(&self, target: Instant) -> Instant {
        self.replace_day(target, self.now())
    }

    /// See [`compose::first_hour_of_day`].
    #[inline]
    pub fn first_hour_of_day(&self, instant: Instant) -> Result<Instant, DateError> {
        compose::first_hour_of_day(&self.provider, instant)
    }

    /// See [`compose::last_hour_of_day`].
    #[inline]
    pub fn last_hour_of_day(&self, instant: Instant) -> Result<Instant, DateError> {
        compose::last_hour_of_day(&self.provider, instant)
    }

    // ── arithmetic ────────────────────────────────────────────────────

    fn add(&self, instant: Instant, unit: CalendarUnit, amount: i64) -> Result<Instant, DateError> {
        self.provider.add(instant, unit, amount).ok_or_else(|| {
            let start = self.provider.decompose(instant);
            tracing::debug!(%start, ?unit, amount, "calendar addition failed");
            DateError::AdditionFailed {
                start,
                unit,
                amount,
            }
        })
    }

    /// Same wall-clock time `days` calendar days later (or earlier).
    #[inline]
    pub fn add_days(&self, instant: Instant, days: i64) -> Result<Instant, DateError> {
        self.add(instant, CalendarUnit::Day, days)
    }

    #[inline]
    pub fn add_hours(&self, instant: Instant, hours: i64) -> Result<Instant, DateError> {
        self.add(instant, CalendarUnit::Hour, hours)
    }

    #[inline]
    pub fn add_minutes(&self, instant: Instant, minutes: i64) -> Result<Instant, DateError> {
        self.add(instant, CalendarUnit::Minute, minutes)
    }

    // ── day fractions ─────────────────────────────────────────────────

    /// See [`fraction::from_fraction`].
    #[inline]
    pub fn from_fraction(&self, fraction: impl Into<DayFraction>) -> Result<Instant, DateError> {
        fraction::from_fraction(&self.provider, &self.clock, fraction)
    }

    /// See [`fraction::to_fraction`].
    #[inline]
    pub fn to_fraction(&self, instant: Instant) -> DayFraction {
        fraction::to_fraction(&self.provider, instant)
    }

    /// See [`fraction::minute_of_day`].
    #[inline]
    pub fn minute_of_day(&self, instant: Instant) -> u32 {
        fraction::minute_of_day(&self.provider, instant)
    }

    // ── intervals ─────────────────────────────────────────────────────

    /// See [`interval::difference`].
    #[inline]
    pub fn difference(&self, from: Instant, to: Instant) -> Interval {
        interval::difference(&self.provider, from, to)
    }

    /// `left − right` as a calendar interval.
    #[inline]
    pub fn subtract(&self, left: Instant, right: Instant) -> Interval {
        self.difference(left, right)
    }

    /// See [`interval::single_unit_difference`].
    #[inline]
    pub fn single_unit_difference(&self, from: Instant, to: Instant, unit: CalendarUnit) -> u64 {
        interval::single_unit_difference(&self.provider, from, to, unit)
    }

    #[inline]
    pub fn minutes_between(&self, a: Instant, b: Instant) -> u64 {
        interval::minutes_between(&self.provider, a, b)
    }

    /// Whole minutes between `instant` and the clock's now.
    #[inline]
    pub fn minutes_between_now(&self, instant: Instant) -> u64 {
        self.minutes_between(instant, self.now())
    }

    #[inline]
    pub fn days_between(&self, a: Instant, b: Instant) -> u64 {
        interval::days_between(&self.provider, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
        Instant::from(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    fn detroit_at(secs: i64) -> Calendar<ChronoCalendar<Tz>, FixedClock> {
        Calendar::new(
            ChronoCalendar::new(chrono_tz::America::Detroit),
            FixedClock(Instant::from_epoch_seconds(secs).unwrap()),
        )
    }

    #[test]
    fn test_mdy_and_components_in_detroit() {
        let cal = detroit_at(0);
        let date = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        assert_eq!(cal.to_month_day_year(date), CivilDate::new(10, 17, 2015));
        assert_eq!(
            cal.to_components(date),
            CivilComponents::new(2015, 10, 17, 6, 31, 57)
        );
    }

    #[test]
    fn test_julian_day_ignores_time_of_day() {
        let cal = Calendar::utc();
        let morning = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        let evening = Instant::from_epoch_seconds(1_445_114_196).unwrap();
        assert_eq!(cal.julian_day_number(morning), 2_457_313.0);
        assert_eq!(cal.julian_day_number(evening), 2_457_313.0);
    }

    #[test]
    fn test_add_days_minutes_hours() {
        let cal = Calendar::utc();
        let oct17 = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        assert_eq!(cal.to_month_day_year(cal.add_days(oct17, 1).unwrap()).day, 18);
        assert_eq!(cal.to_components(cal.add_minutes(oct17, 20).unwrap()).minute, 51);
        assert_eq!(cal.to_components(cal.add_hours(oct17, -11).unwrap()).day, 16);
    }

    #[test]
    fn test_add_overflow_is_an_error() {
        let cal = Calendar::utc();
        let oct17 = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        assert_eq!(
            cal.add_days(oct17, i64::MAX),
            Err(DateError::AdditionFailed {
                start: CivilComponents::new(2015, 10, 17, 10, 31, 57),
                unit: CalendarUnit::Day,
                amount: i64::MAX,
            })
        );
    }

    #[test]
    fn test_add_days_into_dst_gap_names_the_addition() {
        // 02:30 on 2024-03-10 is skipped in Detroit.
        let cal = detroit_at(0);
        let before = cal.from_month(3, 9, 2024).unwrap();
        let start = cal.at_time(before, 2, 30, 0).unwrap();
        let err = cal.add_days(start, 1).unwrap_err();
        assert_eq!(
            err,
            DateError::AdditionFailed {
                start: CivilComponents::new(2024, 3, 9, 2, 30, 0),
                unit: CalendarUnit::Day,
                amount: 1,
            }
        );
        assert_eq!(err.to_string(), "cannot add 1 Day to 2024-03-09 02:30:00");
    }

    #[test]
    fn test_is_same_day() {
        let cal = detroit_at(0);
        let morning = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        let evening = Instant::from_epoch_seconds(1_445_114_196).unwrap();
        assert!(cal.is_same_day(morning, evening));
        assert!(!cal.is_same_day(morning, utc(2015, 10, 18, 12, 0, 0)));
    }

    #[test]
    fn test_same_day_depends_on_zone() {
        // 2015-10-18T02:00Z is still Oct 17 in Detroit but not in UTC.
        let late = utc(2015, 10, 18, 2, 0, 0);
        let morning = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        assert!(detroit_at(0).is_same_day(morning, late));
        assert!(!Calendar::utc().is_same_day(morning, late));
    }

    #[test]
    fn test_from_month_is_midnight() {
        let cal = Calendar::utc();
        assert_eq!(cal.from_month(8, 6, 2024), Ok(utc(2024, 8, 6, 0, 0, 0)));
        assert!(cal.from_month(2, 30, 2024).is_err());
    }

    #[test]
    fn test_replacing_day_uses_clock() {
        let cal = detroit_at(1_640_365_200);
        let some_date = Instant::from_epoch_seconds(1_582_063_862).unwrap();
        let replaced = cal.replacing_day(some_date);
        assert_eq!(cal.to_month_day_year(replaced), cal.to_month_day_year(cal.now()));
        assert_eq!(
            cal.to_components(replaced).time(),
            cal.to_components(some_date).time()
        );
    }

    #[test]
    fn test_percent_of_day() {
        let cal = detroit_at(1_640_365_200);
        let mid = cal.from_fraction(0.5).unwrap();
        let c = cal.to_components(mid);
        assert_eq!((c.hour, c.minute), (12, 0));

        let end = cal.from_fraction(0.9999).unwrap();
        let c = cal.to_components(end);
        assert_eq!((c.month, c.day, c.hour, c.minute), (12, 24, 23, 59));
    }

    #[test]
    fn test_subtract_and_zero_difference() {
        let cal = Calendar::utc();
        let a = cal
            .compose_from_scratch(CivilDate::new(5, 15, 2025), TimeOfDay::new(10, 30, 45))
            .unwrap();
        let b = cal
            .compose_from_scratch(CivilDate::new(3, 10, 2024), TimeOfDay::new(8, 15, 30))
            .unwrap();
        let d = cal.subtract(a, b);
        assert_eq!(
            (d.years, d.months, d.days, d.hours, d.minutes, d.seconds),
            (1, 2, 5, 2, 15, 15)
        );
        assert_eq!(cal.subtract(a, a), Interval::ZERO);
    }

    #[test]
    fn test_minutes_between_now() {
        let cal = detroit_at(1_590_228_486 + 20 * 60);
        let then = Instant::from_epoch_seconds(1_590_228_486).unwrap();
        assert_eq!(cal.minutes_between_now(then), 20);
    }

    #[test]
    fn test_days_between() {
        let cal = Calendar::utc();
        let date = Instant::from_epoch_seconds(1_684_488_182).unwrap();
        let week_later = cal.add_days(date, 7).unwrap();
        assert_eq!(cal.days_between(week_later, date), 7);
    }

    #[test]
    fn test_from_config() {
        let cal = Calendar::from_config(&CalendarConfig::new("America/Detroit")).unwrap();
        let date = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        assert_eq!(cal.to_components(date).hour, 6);

        assert!(Calendar::from_config(&CalendarConfig::new("Nowhere/Special")).is_err());
    }

    #[test]
    fn test_with_clock_swaps_now() {
        let at = Instant::from_epoch_seconds(1_445_077_917).unwrap();
        let cal = Calendar::utc().with_clock(FixedClock(at));
        assert_eq!(cal.now(), at);
    }
}

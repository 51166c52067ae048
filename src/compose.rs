// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Building instants from civil components.
//!
//! Every function here follows the same shape: decompose a base instant
//! (if there is one), overwrite some fields, and ask the provider to
//! recompose.  A combination that does not address a real moment is
//! reported as [`DateError::DateNotCreated`]; nothing is wrapped or
//! clamped into a neighbouring valid date.

use crate::components::{CivilComponents, CivilDate, TimeOfDay};
use crate::error::DateError;
use crate::instant::Instant;
use crate::provider::CalendarProvider;

/// Fields to overwrite on a base instant.  `None` keeps the base value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FieldOverrides {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl FieldOverrides {
    /// Overwrite hour, minute and second.
    pub const fn time(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }

    /// Also overwrite month, day and year.
    pub const fn with_date(mut self, month: u32, day: u32, year: i32) -> Self {
        self.month = Some(month);
        self.day = Some(day);
        self.year = Some(year);
        self
    }

    fn apply(&self, base: CivilComponents) -> CivilComponents {
        CivilComponents {
            year: self.year.unwrap_or(base.year),
            month: self.month.unwrap_or(base.month),
            day: self.day.unwrap_or(base.day),
            hour: self.hour.unwrap_or(base.hour),
            minute: self.minute.unwrap_or(base.minute),
            second: self.second.unwrap_or(base.second),
        }
    }
}

/// Recompose `components`, turning "no such moment" into an error.
pub(crate) fn build<P>(provider: &P, components: CivilComponents) -> Result<Instant, DateError>
where
    P: CalendarProvider + ?Sized,
{
    provider.compose(&components).ok_or_else(|| {
        tracing::debug!(%components, "civil components do not address a real moment");
        DateError::not_created(components)
    })
}

/// Copy of `base` with the given fields overwritten.
///
/// # Errors
///
/// [`DateError::DateNotCreated`] when the resulting fields are not a valid
/// moment in the provider's calendar and zone.
pub fn compose<P>(
    provider: &P,
    base: Instant,
    overrides: &FieldOverrides,
) -> Result<Instant, DateError>
where
    P: CalendarProvider + ?Sized,
{
    build(provider, overrides.apply(provider.decompose(base)))
}

/// Same civil day as `base`, at `hour:minute:second`.
///
/// ```
/// use calday::{at_time, ChronoCalendar, Instant};
///
/// let cal = ChronoCalendar::utc();
/// let base = Instant::from_epoch_seconds(1_640_600_037).unwrap(); // 2021-12-27 10:13:57Z
/// let at = at_time(&cal, base, 8, 24, 12).unwrap();
/// assert_eq!(at.timestamp(), 1_640_593_452);
/// assert!(at_time(&cal, base, 8, 75, 0).is_err());
/// ```
#[inline]
pub fn at_time<P>(
    provider: &P,
    base: Instant,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<Instant, DateError>
where
    P: CalendarProvider + ?Sized,
{
    compose(provider, base, &FieldOverrides::time(hour, minute, second))
}

/// A wholly new instant from explicit fields, with no base.
pub fn compose_from_scratch<P>(
    provider: &P,
    date: CivilDate,
    time: TimeOfDay,
) -> Result<Instant, DateError>
where
    P: CalendarProvider + ?Sized,
{
    build(provider, CivilComponents::from_parts(date, time))
}

/// `target`'s time of day on `source_of_day`'s calendar date.
///
/// Combining a time of day that already exists with a valid date is
/// assumed to succeed.  In a zone with DST the wall-clock time can still be
/// skipped on the new date; that case falls back, in order, to:
///
/// 1. the same minute and second at the first later whole hour that exists
///    on that date,
/// 2. midnight at the start of that date,
/// 3. `source_of_day` itself, when the provider cannot compose anything on
///    that date.
///
/// Only an exact match keeps `target`'s time of day.  Each fallback is
/// logged at `debug`.
pub fn replace_day<P>(provider: &P, target: Instant, source_of_day: Instant) -> Instant
where
    P: CalendarProvider + ?Sized,
{
    let time = provider.decompose(target).time();
    let date = provider.decompose(source_of_day).date();
    let wanted = CivilComponents::from_parts(date, time);

    if let Some(instant) = provider.compose(&wanted) {
        return instant;
    }
    tracing::debug!(components = %wanted, "time of day skipped on replacement date");

    let later_hour = (time.hour + 1..24).find_map(|hour| {
        provider.compose(&CivilComponents::from_parts(
            date,
            TimeOfDay::new(hour, time.minute, time.second),
        ))
    });
    if let Some(instant) = later_hour {
        return instant;
    }

    let midnight = CivilComponents::from_parts(date, TimeOfDay::MIDNIGHT);
    match provider.compose(&midnight) {
        Some(instant) => {
            tracing::debug!(components = %midnight, "replacement date falls back to midnight");
            instant
        }
        None => {
            tracing::debug!(%date, "nothing composable on replacement date, keeping source");
            source_of_day
        }
    }
}

/// Midnight (00:00:00) at the start of `instant`'s civil day.
pub fn first_hour_of_day<P>(provider: &P, instant: Instant) -> Result<Instant, DateError>
where
    P: CalendarProvider + ?Sized,
{
    let date = provider.decompose(instant).date();
    build(provider, CivilComponents::from_parts(date, TimeOfDay::MIDNIGHT))
}

/// 23:59:59 on `instant`'s civil day.
pub fn last_hour_of_day<P>(provider: &P, instant: Instant) -> Result<Instant, DateError>
where
    P: CalendarProvider + ?Sized,
{
    let date = provider.decompose(instant).date();
    build(provider, CivilComponents::from_parts(date, TimeOfDay::LAST_SECOND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ChronoCalendar;
    use chrono::{TimeZone, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
        Instant::from(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[test]
    fn at_time_in_detroit() {
        let cal = ChronoCalendar::new(chrono_tz::America::Detroit);
        let date = Instant::from_epoch_seconds(1_640_600_037).unwrap();
        let expected = Instant::from_epoch_seconds(1_640_611_452).unwrap();
        assert_eq!(at_time(&cal, date, 8, 24, 12), Ok(expected));
    }

    #[test]
    fn at_time_rejects_minute_75() {
        let cal = ChronoCalendar::utc();
        let base = utc(2024, 1, 1, 0, 0, 0);
        let err = at_time(&cal, base, 10, 75, 0).unwrap_err();
        assert_eq!(
            err,
            DateError::DateNotCreated {
                components: CivilComponents::new(2024, 1, 1, 10, 75, 0)
            }
        );
    }

    #[test]
    fn compose_with_date_rejects_february_30() {
        let cal = ChronoCalendar::utc();
        let base = utc(2024, 1, 31, 0, 0, 0);
        let overrides = FieldOverrides::time(12, 0, 0).with_date(2, 30, 2024);
        assert!(matches!(
            compose(&cal, base, &overrides),
            Err(DateError::DateNotCreated { .. })
        ));
    }

    #[test]
    fn compose_rejects_month_13() {
        let cal = ChronoCalendar::utc();
        let overrides = FieldOverrides {
            month: Some(13),
            ..FieldOverrides::default()
        };
        assert!(compose(&cal, utc(2024, 1, 1, 0, 0, 0), &overrides).is_err());
    }

    #[test]
    fn compose_keeps_untouched_fields() {
        let cal = ChronoCalendar::utc();
        let base = utc(2015, 10, 17, 10, 31, 57);
        let overrides = FieldOverrides {
            day: Some(1),
            ..FieldOverrides::default()
        };
        assert_eq!(compose(&cal, base, &overrides), Ok(utc(2015, 10, 1, 10, 31, 57)));
    }

    #[test]
    fn compose_from_scratch_roundtrips() {
        let cal = ChronoCalendar::new(chrono_tz::Europe::Madrid);
        let date = CivilDate::new(7, 14, 2023);
        let time = TimeOfDay::new(21, 5, 9);
        let instant = compose_from_scratch(&cal, date, time).unwrap();
        assert_eq!(cal.decompose(instant), CivilComponents::from_parts(date, time));
    }

    #[test]
    fn compose_from_scratch_rejects_invalid() {
        let cal = ChronoCalendar::utc();
        let midnight = TimeOfDay::MIDNIGHT;
        assert!(compose_from_scratch(&cal, CivilDate::new(2, 29, 2023), midnight).is_err());
        assert!(compose_from_scratch(&cal, CivilDate::new(4, 31, 2023), midnight).is_err());
        let leap_second = TimeOfDay::new(0, 0, 60);
        assert!(compose_from_scratch(&cal, CivilDate::new(1, 1, 2023), leap_second).is_err());
    }

    #[test]
    fn replace_day_across_month_length_boundary() {
        let cal = ChronoCalendar::utc();
        let target = utc(2023, 2, 28, 23, 59, 59);
        let source = utc(2023, 3, 31, 4, 0, 0);
        let replaced = replace_day(&cal, target, source);
        assert_eq!(
            cal.decompose(replaced),
            CivilComponents::new(2023, 3, 31, 23, 59, 59)
        );
    }

    #[test]
    fn replace_day_into_dst_gap_moves_forward() {
        let cal = ChronoCalendar::new(chrono_tz::America::Detroit);
        let target = cal
            .compose(&CivilComponents::new(2024, 3, 1, 2, 30, 0))
            .unwrap();
        let source = cal
            .compose(&CivilComponents::new(2024, 3, 10, 12, 0, 0))
            .unwrap();
        let replaced = replace_day(&cal, target, source);
        assert_eq!(
            cal.decompose(replaced),
            CivilComponents::new(2024, 3, 10, 3, 30, 0)
        );
    }

    /// Delegates to UTC but only accepts the listed times of day.
    struct OnlyTimes(&'static [TimeOfDay]);

    impl CalendarProvider for OnlyTimes {
        fn decompose(&self, instant: Instant) -> CivilComponents {
            ChronoCalendar::utc().decompose(instant)
        }

        fn compose(&self, components: &CivilComponents) -> Option<Instant> {
            if self.0.contains(&components.time()) {
                ChronoCalendar::utc().compose(components)
            } else {
                None
            }
        }

        fn components_between(
            &self,
            from: Instant,
            to: Instant,
            units: &[crate::interval::CalendarUnit],
        ) -> crate::interval::ComponentDelta {
            ChronoCalendar::utc().components_between(from, to, units)
        }

        fn add(
            &self,
            instant: Instant,
            unit: crate::interval::CalendarUnit,
            amount: i64,
        ) -> Option<Instant> {
            ChronoCalendar::utc().add(instant, unit, amount)
        }
    }

    #[test]
    fn replace_day_without_later_hour_falls_back_to_midnight() {
        let cal = OnlyTimes(&[TimeOfDay::MIDNIGHT]);
        let target = utc(2024, 3, 1, 13, 15, 0);
        let source = utc(2024, 3, 10, 8, 0, 0);
        assert_eq!(replace_day(&cal, target, source), utc(2024, 3, 10, 0, 0, 0));
    }

    #[test]
    fn replace_day_with_nothing_composable_keeps_source() {
        let cal = OnlyTimes(&[]);
        let target = utc(2024, 3, 1, 13, 15, 0);
        let source = utc(2024, 3, 10, 8, 0, 0);
        assert_eq!(replace_day(&cal, target, source), source);
    }

    #[test]
    fn first_and_last_hour_of_day() {
        let cal = ChronoCalendar::utc();
        let i = utc(2015, 10, 17, 10, 31, 57);
        assert_eq!(first_hour_of_day(&cal, i), Ok(utc(2015, 10, 17, 0, 0, 0)));
        assert_eq!(last_hour_of_day(&cal, i), Ok(utc(2015, 10, 17, 23, 59, 59)));
    }
}

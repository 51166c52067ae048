// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar provider: decomposition and recomposition of instants.
//!
//! The [`CalendarProvider`] trait is the only place where a timezone and a
//! calendar system enter the crate.  Everything above it (composition,
//! day fractions, intervals) is written against the trait and never looks
//! at a zone directly.
//!
//! [`ChronoCalendar<Z>`] is the proleptic-Gregorian implementation backed by
//! any `chrono::TimeZone`:
//!
//! | Zone type | Example |
//! |-----------|---------|
//! | `chrono::Utc` | [`ChronoCalendar::utc()`] |
//! | `chrono::FixedOffset` | `ChronoCalendar::new(FixedOffset::east_opt(3600).unwrap())` |
//! | `chrono_tz::Tz` | `ChronoCalendar::new(chrono_tz::America::Detroit)` |

use chrono::{
    Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc,
};

use crate::components::CivilComponents;
use crate::instant::Instant;
use crate::interval::{CalendarUnit, ComponentDelta};

const SECONDS_PER_DAY: i64 = 86_400;

// ═══════════════════════════════════════════════════════════════════════════
// CalendarProvider trait
// ═══════════════════════════════════════════════════════════════════════════

/// Converts between instants and civil components in one zone and calendar.
///
/// Implementations must be pure with respect to their inputs: the same
/// arguments always give the same answer, and no method mutates shared
/// state.  That makes a provider safe to share across threads whenever the
/// type itself is `Sync`.
pub trait CalendarProvider {
    /// Split an instant into its civil fields.  Sub-second precision is
    /// dropped.
    fn decompose(&self, instant: Instant) -> CivilComponents;

    /// Build the instant addressed by `components`.
    ///
    /// Returns `None` when the fields do not name a real moment: an out of
    /// range field, a day past the end of its month, or a wall-clock time
    /// that the zone skips.  Out-of-range fields are never wrapped into the
    /// next unit.
    fn compose(&self, components: &CivilComponents) -> Option<Instant>;

    /// Signed calendar distance from `from` to `to`, counted greedily from
    /// the largest requested unit to the smallest.  Units not listed in
    /// `units` are reported as zero and their share spills into the next
    /// smaller requested unit.
    ///
    /// Years, months and days are counted on the wall clock; hours, minutes
    /// and seconds on the absolute timeline.
    fn components_between(&self, from: Instant, to: Instant, units: &[CalendarUnit])
        -> ComponentDelta;

    /// Move `instant` by `amount` of `unit`.
    ///
    /// Years, months and days move the wall clock (month ends are clamped);
    /// hours, minutes and seconds move the absolute timeline.  Returns
    /// `None` when the result is unrepresentable or skipped by the zone.
    fn add(&self, instant: Instant, unit: CalendarUnit, amount: i64) -> Option<Instant>;
}

// ═══════════════════════════════════════════════════════════════════════════
// ChronoCalendar<Z>
// ═══════════════════════════════════════════════════════════════════════════

/// Gregorian calendar in the zone `Z`, backed by chrono.
#[derive(Debug, Clone, PartialEq)]
pub struct ChronoCalendar<Z: TimeZone> {
    zone: Z,
}

impl ChronoCalendar<Utc> {
    /// Gregorian calendar on UTC.
    #[inline]
    pub const fn utc() -> Self {
        Self { zone: Utc }
    }
}

impl Default for ChronoCalendar<Utc> {
    fn default() -> Self {
        Self::utc()
    }
}

impl<Z: TimeZone> ChronoCalendar<Z> {
    #[inline]
    pub const fn new(zone: Z) -> Self {
        Self { zone }
    }

    /// The zone civil fields are expressed in.
    #[inline]
    pub fn zone(&self) -> &Z {
        &self.zone
    }

    fn local(&self, instant: Instant) -> NaiveDateTime {
        instant.to_utc().with_timezone(&self.zone).naive_local()
    }

    /// Map a wall-clock time back onto the timeline.  In a DST overlap the
    /// earlier of the two candidates wins; in a DST gap there is none.
    fn resolve(&self, local: NaiveDateTime) -> Option<Instant> {
        self.resolve_toward(local, true)
    }

    /// Like [`resolve`](Self::resolve), but in a DST overlap picks the
    /// candidate on the side the count is running from, so the sub-day
    /// remainder keeps the sign of the larger units.
    fn resolve_toward(&self, local: NaiveDateTime, forward: bool) -> Option<Instant> {
        let candidates = self.zone.from_local_datetime(&local);
        let picked = if forward {
            candidates.earliest()
        } else {
            candidates.latest()
        };
        picked.map(|dt| Instant::from_utc(dt.with_timezone(&Utc)))
    }
}

impl<Z: TimeZone> CalendarProvider for ChronoCalendar<Z> {
    fn decompose(&self, instant: Instant) -> CivilComponents {
        let local = self.local(instant);
        CivilComponents::new(
            local.year(),
            local.month(),
            local.day(),
            local.hour(),
            local.minute(),
            local.second(),
        )
    }

    fn compose(&self, components: &CivilComponents) -> Option<Instant> {
        let date = NaiveDate::from_ymd_opt(components.year, components.month, components.day)?;
        let time = NaiveTime::from_hms_opt(components.hour, components.minute, components.second)?;
        self.resolve(date.and_time(time))
    }

    fn components_between(
        &self,
        from: Instant,
        to: Instant,
        units: &[CalendarUnit],
    ) -> ComponentDelta {
        let start = self.local(from);
        let end = self.local(to);
        let wants = |unit: CalendarUnit| units.contains(&unit);
        let mut delta = ComponentDelta::default();

        let mut anchor = start;
        if wants(CalendarUnit::Year) || wants(CalendarUnit::Month) {
            let total = whole_months_between(start, end);
            if wants(CalendarUnit::Year) {
                delta.years = total / 12;
            }
            if wants(CalendarUnit::Month) {
                delta.months = total - delta.years * 12;
            }
            anchor = shift_months(start, delta.years * 12 + delta.months).unwrap_or(start);
        }

        if wants(CalendarUnit::Day) {
            let days = end.signed_duration_since(anchor).num_seconds() / SECONDS_PER_DAY;
            delta.days = days;
            anchor = anchor
                .checked_add_signed(TimeDelta::seconds(days * SECONDS_PER_DAY))
                .unwrap_or(anchor);
        }

        // Sub-day units run on the absolute timeline so that a DST
        // transition shows up as a 23 or 25 hour day.
        let base = if anchor == start {
            Some(from)
        } else {
            self.resolve_toward(anchor, to >= from)
        };
        let mut rest = match base {
            Some(base) => to.to_utc().signed_duration_since(base.to_utc()),
            None => end.signed_duration_since(anchor),
        };
        for unit in CalendarUnit::SUB_DAY {
            if !wants(unit) {
                continue;
            }
            let span = unit.fixed_seconds();
            let count = rest.num_seconds() / span;
            rest = rest - TimeDelta::seconds(count * span);
            delta.set(unit, count);
        }
        delta
    }

    fn add(&self, instant: Instant, unit: CalendarUnit, amount: i64) -> Option<Instant> {
        match unit {
            CalendarUnit::Year => {
                self.resolve(shift_months(self.local(instant), amount.checked_mul(12)?)?)
            }
            CalendarUnit::Month => self.resolve(shift_months(self.local(instant), amount)?),
            CalendarUnit::Day => {
                let shifted = self
                    .local(instant)
                    .checked_add_signed(TimeDelta::try_days(amount)?)?;
                self.resolve(shifted)
            }
            CalendarUnit::Hour | CalendarUnit::Minute | CalendarUnit::Second => {
                let delta = TimeDelta::try_seconds(amount.checked_mul(unit.fixed_seconds())?)?;
                instant
                    .to_utc()
                    .checked_add_signed(delta)
                    .map(Instant::from_utc)
            }
        }
    }
}

/// Move a wall-clock time by whole months, clamping the day to the end of
/// the target month.
fn shift_months(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        local.checked_add_months(magnitude)
    } else {
        local.checked_sub_months(magnitude)
    }
}

/// Largest signed month count `n` such that shifting `start` by `n` months
/// does not pass `end`.
fn whole_months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let mut months = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());
    match shift_months(start, months) {
        Some(shifted) if months > 0 && shifted > end => months -= 1,
        Some(shifted) if months < 0 && shifted < end => months += 1,
        _ => {}
    }
    months
}

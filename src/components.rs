// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (calendar + wall-clock) decomposition of an instant.
//!
//! These are plain value records. They carry whatever numbers the caller
//! put in them; whether a combination addresses a real moment is decided
//! only when a [`CalendarProvider`](crate::CalendarProvider) recomposes it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of minutes in a civil day.
pub const MINUTES_IN_DAY: u32 = 1_440;

/// Number of minutes in an hour.
pub const MINUTES_IN_HOUR: u32 = 60;

/// Year, month, day, hour, minute and second of an instant in some zone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilComponents {
    pub year: i32,
    /// 1–12.
    pub month: u32,
    /// 1–31, validity depends on month and year.
    pub day: u32,
    /// 0–23.
    pub hour: u32,
    /// 0–59.
    pub minute: u32,
    /// 0–59.
    pub second: u32,
}

impl CivilComponents {
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Joins a calendar date with a time of day.
    #[inline]
    pub const fn from_parts(date: CivilDate, time: TimeOfDay) -> Self {
        Self::new(
            date.year,
            date.month,
            date.day,
            time.hour,
            time.minute,
            time.second,
        )
    }

    /// The calendar-date part.
    #[inline]
    pub const fn date(&self) -> CivilDate {
        CivilDate::new(self.month, self.day, self.year)
    }

    /// The wall-clock part.
    #[inline]
    pub const fn time(&self) -> TimeOfDay {
        TimeOfDay::new(self.hour, self.minute, self.second)
    }

    /// Minutes elapsed since midnight; seconds are truncated away.
    #[inline]
    pub const fn minute_of_day(&self) -> u32 {
        self.hour * MINUTES_IN_HOUR + self.minute
    }
}

impl fmt::Display for CivilComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date(), self.time())
    }
}

/// A calendar date, in month/day/year order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl CivilDate {
    #[inline]
    pub const fn new(month: u32, day: u32, year: i32) -> Self {
        Self { month, day, year }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time of day.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    /// 23:59:59, the last whole second of a day.
    pub const LAST_SECOND: Self = Self::new(23, 59, 59);

    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

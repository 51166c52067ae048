// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Opaque point in time.
//!
//! [`Instant`] wraps a `chrono::DateTime<Utc>` and carries no zone or
//! calendar of its own.  Civil fields only exist relative to a
//! [`CalendarProvider`](crate::CalendarProvider); the instant itself is
//! just a position on the UTC axis with nanosecond resolution.

use chrono::{DateTime, Utc};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateError;

/// An immutable point in time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    // ── constructors ──────────────────────────────────────────────────

    /// Wrap a UTC timestamp.
    #[inline]
    pub const fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Whole seconds since 1970-01-01T00:00:00Z.
    ///
    /// Returns `None` outside chrono's representable range.
    #[inline]
    pub fn from_epoch_seconds(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Self)
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    #[inline]
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Self)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The wrapped UTC timestamp.
    #[inline]
    pub const fn to_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Whole seconds since the Unix epoch (floored).
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// Seconds since the Unix epoch, including the sub-second part.
    pub fn epoch_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + self.0.timestamp_subsec_nanos() as f64 / 1e9
    }

    // ── comparisons ───────────────────────────────────────────────────

    /// `true` when `start <= self <= end`.
    #[inline]
    pub fn is_between(&self, start: Self, end: Self) -> bool {
        *self >= start && *self <= end
    }
}

impl From<DateTime<Utc>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<Instant> for DateTime<Utc> {
    #[inline]
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::zulu::format_zulu(*self))
    }
}

impl FromStr for Instant {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::zulu::parse_zulu(s)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&crate::zulu::format_zulu_millis(*self))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::zulu::parse_zulu(&s).map_err(serde::de::Error::custom)
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-profile ISO 8601 ("Zulu") text conversion.
//!
//! Two profiles are supported, both always UTC with a `Z` suffix:
//!
//! | Profile | Example |
//! |---------|---------|
//! | seconds | `2024-08-06T14:30:00Z` |
//! | milliseconds | `2017-12-14T13:05:56.796Z` |
//!
//! Parsing accepts exactly these two shapes.  Offsets other than `Z`,
//! lowercase separators or trailing text are rejected.

use chrono::{NaiveDateTime, SecondsFormat, Timelike};

use crate::error::DateError;
use crate::instant::Instant;

const ZULU_SECONDS: &str = "%Y-%m-%dT%H:%M:%SZ";
const ZULU_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Byte layout of the two profiles; `d` is any ASCII digit.
const SHAPE_SECONDS: &[u8] = b"dddd-dd-ddTdd:dd:ddZ";
const SHAPE_MILLIS: &[u8] = b"dddd-dd-ddTdd:dd:dd.dddZ";

/// Format as `YYYY-MM-DDTHH:MM:SSZ` (sub-second part truncated).
pub fn format_zulu(instant: Instant) -> String {
    instant.to_utc().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format as `YYYY-MM-DDTHH:MM:SS.sssZ` (sub-millisecond part truncated).
pub fn format_zulu_millis(instant: Instant) -> String {
    instant.to_utc().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse either Zulu profile back into an [`Instant`].
///
/// Every field must be zero-padded to its full width, the year has exactly
/// four digits and no sign, and a leap second (`:60`) is rejected.
pub fn parse_zulu(input: &str) -> Result<Instant, DateError> {
    let format = match input.as_bytes() {
        bytes if matches_shape(bytes, SHAPE_SECONDS) => ZULU_SECONDS,
        bytes if matches_shape(bytes, SHAPE_MILLIS) => ZULU_MILLIS,
        _ => return Err(invalid(input)),
    };
    NaiveDateTime::parse_from_str(input, format)
        .ok()
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .map(|naive| Instant::from_utc(naive.and_utc()))
        .ok_or_else(|| invalid(input))
}

fn matches_shape(bytes: &[u8], shape: &[u8]) -> bool {
    bytes.len() == shape.len()
        && bytes.iter().zip(shape).all(|(&b, &s)| match s {
            b'd' => b.is_ascii_digit(),
            _ => b == s,
        })
}

fn invalid(input: &str) -> DateError {
    DateError::InvalidZulu {
        input: input.to_owned(),
    }
}

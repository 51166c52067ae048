// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar configuration.

use chrono_tz::Tz;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Settings a [`Calendar`](crate::Calendar) can be built from.
///
/// With the `serde` feature the struct deserializes from e.g.
/// `{"timezone": "Europe/Madrid"}`; a missing field falls back to `"UTC"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// IANA timezone name civil fields are expressed in.
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_owned(),
        }
    }
}

impl CalendarConfig {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }

    /// Resolve [`timezone`](Self::timezone) against the IANA database.
    pub fn time_zone(&self) -> Result<Tz, DateError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| DateError::UnknownTimeZone {
                name: self.timezone.clone(),
            })
    }
}

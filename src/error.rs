// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the fallible calendar operations.

use crate::components::CivilComponents;
use crate::interval::CalendarUnit;

/// Error type for all fallible operations in the calday crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when civil components do not address a real calendar moment
    /// (e.g. `minute = 75`, February 30, or a wall-clock time skipped by a
    /// DST transition).
    #[error("date not created from {components}")]
    DateNotCreated {
        /// The rejected components.
        components: CivilComponents,
    },

    /// Returned when moving an instant by a calendar amount leaves the
    /// representable range or lands in a DST gap.
    #[error("cannot add {amount} {unit:?} to {start}")]
    AdditionFailed {
        /// Civil fields of the instant the addition started from.
        start: CivilComponents,
        /// The unit that was added.
        unit: CalendarUnit,
        /// How many units were added.
        amount: i64,
    },

    /// Returned when a string is not in one of the two Zulu profiles.
    #[error("not a zulu timestamp: {input:?}")]
    InvalidZulu {
        /// The rejected input.
        input: String,
    },

    /// Returned when a configured timezone name is not an IANA zone.
    #[error("unknown time zone {name:?}")]
    UnknownTimeZone {
        /// The rejected zone name.
        name: String,
    },
}

impl DateError {
    pub(crate) fn not_created(components: CivilComponents) -> Self {
        Self::DateNotCreated { components }
    }
}

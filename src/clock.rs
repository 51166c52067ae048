// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Source of "now".
//!
//! Operations that need the current date ("today at 12:00", "minutes since
//! now") take a [`Clock`] explicitly instead of reading the system time, so
//! tests can pin the current instant with [`FixedClock`].

use chrono::Utc;

use crate::instant::Instant;

/// Something that can tell the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The operating system's wall clock.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::from_utc(Utc::now())
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> Instant {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day Number of a civil date.
//!
//! The conversion works at calendar-day granularity: no time-of-day field
//! enters the formula, so two instants on the same civil day always map to
//! the same number and the fractional part is always zero.  This is *not*
//! an astronomical Julian Date (which would start at noon and carry the
//! day fraction).
//!
//! ```
//! use calday::julian_day_number;
//!
//! assert_eq!(julian_day_number(10, 17, 2015), 2_457_313.0);
//! assert_eq!(julian_day_number(1, 1, 2000), 2_451_545.0);
//! ```

use qtty::Days;

use crate::components::CivilDate;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub const MJD_EPOCH: Days = Days::new(2_400_000.5);

/// Julian Day Number of a proleptic-Gregorian `month`/`day`/`year`.
///
/// No validation is performed.  Out-of-range months and days are fed
/// through the same arithmetic and give an extrapolated number.
///
/// ```text
/// a   = (14 − month) / 12              integer division, truncating
/// y   = year + 4800 − a
/// m   = month + 12·a − 3
/// jdn = day + ⌊(153·m + 2) / 5⌋ + 365·y + ⌊y/4⌋ − ⌊y/100⌋ + ⌊y/400⌋ − 32045
/// ```
pub fn julian_day_number(month: i32, day: i32, year: i32) -> f64 {
    // Integer division first; the floor of an integer is itself.
    let a = f64::from((14 - month) / 12);
    let y = f64::from(year) + 4800.0 - a;
    let m = f64::from(month) + 12.0 * a - 3.0;

    let mut f = ((153.0 * m + 2.0) / 5.0).floor();
    f += 365.0 * y;
    f += (y / 4.0).floor();
    f -= (y / 100.0).floor();
    f += (y / 400.0).floor();
    f -= 32_045.0;

    f64::from(day) + f
}

impl CivilDate {
    /// Julian Day Number of this date.  See [`julian_day_number`].
    ///
    /// Fields beyond `i32::MAX` saturate before entering the formula.
    #[inline]
    pub fn julian_day_number(&self) -> f64 {
        julian_day_number(saturate(self.month), saturate(self.day), self.year)
    }

    /// `JDN − 2 400 000.5`, the Modified Julian Day of noon on this date.
    #[inline]
    pub fn modified_julian_day(&self) -> Days {
        Days::new(self.julian_day_number()) - MJD_EPOCH
    }
}

#[inline]
fn saturate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

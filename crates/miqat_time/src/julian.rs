//! Julian Date ↔ Gregorian calendar conversion.
//!
//! Proleptic Gregorian throughout: the engine never deals with dates
//! anywhere near the 1582 calendar reform.
//!
//! Sources: standard JD arithmetic (Meeus, Astronomical Algorithms ch. 7).
//! Public domain formulas.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date from a Gregorian calendar date.
///
/// `day_frac` carries the time of day as a fraction (e.g. 20.5 = noon on
/// the 20th). The result is a UT Julian Date when the inputs are UT.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor()
        + day_frac
        + b
        - 1524.5
}

/// Gregorian calendar date from a Julian Date.
///
/// Returns `(year, month, day_frac)` with the time of day in the fractional
/// part of `day_frac`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Days elapsed since J2000.0 for a given Julian Date.
pub fn days_from_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

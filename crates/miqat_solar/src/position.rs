//! Low-precision solar ephemeris.
//!
//! Computes the Sun's declination and the equation of time from the mean
//! anomaly / mean longitude series of the USNO Astronomical Almanac
//! approximation. Accuracy is about 0.01° in declination and a few seconds
//! in the equation of time over ±2 centuries of J2000 — two orders of
//! magnitude finer than the minute-level precision prayer times carry.
//!
//! Sources: USNO Almanac low-precision solar formulas (also the basis of
//! the praytimes.org family of implementations). Public domain.

use miqat_time::days_from_j2000;

/// Solar declination and equation of time at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent declination of the Sun in degrees.
    pub declination_deg: f64,
    /// Equation of time in minutes: apparent solar time minus mean solar
    /// time. Positive when the sundial runs ahead of the clock.
    pub equation_of_time_min: f64,
}

/// Compute the Sun's position for a UT Julian Date.
///
/// The series needs no observer coordinate: at this precision the Sun's
/// geocentric declination is the same for every point on Earth.
pub fn solar_position(jd_ut: f64) -> SolarPosition {
    let d = days_from_j2000(jd_ut);

    // Mean anomaly and mean longitude of the Sun, degrees.
    let g = (357.529 + 0.985_600_28 * d).rem_euclid(360.0);
    let q = (280.459 + 0.985_647_36 * d).rem_euclid(360.0);

    // Geocentric apparent ecliptic longitude (equation of center applied).
    let g_rad = g.to_radians();
    let l = (q + 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin()).rem_euclid(360.0);
    let l_rad = l.to_radians();

    // Mean obliquity of the ecliptic, degrees.
    let e = 23.439 - 0.000_000_36 * d;
    let e_rad = e.to_radians();

    let declination_deg = (e_rad.sin() * l_rad.sin()).asin().to_degrees();

    // Right ascension in hours, same quadrant as l.
    let ra_hours = (e_rad.cos() * l_rad.sin())
        .atan2(l_rad.cos())
        .to_degrees()
        .rem_euclid(360.0)
        / 15.0;

    // EqT = mean longitude (in hours) - RA, wrapped to [-12h, 12h).
    let eqt_hours = (q / 15.0 - ra_hours + 12.0).rem_euclid(24.0) - 12.0;

    SolarPosition {
        declination_deg,
        equation_of_time_min: eqt_hours * 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miqat_time::calendar_to_jd;

    #[test]
    fn declination_march_equinox() {
        // 2024 equinox fell at 03:06 UT on Mar 20; by noon the Sun is a
        // fraction of a degree north.
        let pos = solar_position(calendar_to_jd(2024, 3, 20.5));
        assert!(
            pos.declination_deg.abs() < 0.5,
            "equinox declination = {}",
            pos.declination_deg
        );
    }

    #[test]
    fn declination_june_solstice() {
        let pos = solar_position(calendar_to_jd(2024, 6, 21.0));
        assert!(
            (pos.declination_deg - 23.43).abs() < 0.1,
            "June solstice declination = {}",
            pos.declination_deg
        );
    }

    #[test]
    fn declination_december_solstice() {
        let pos = solar_position(calendar_to_jd(2024, 12, 21.5));
        assert!(
            (pos.declination_deg + 23.43).abs() < 0.1,
            "December solstice declination = {}",
            pos.declination_deg
        );
    }

    #[test]
    fn declination_bounded_all_year() {
        let jd0 = calendar_to_jd(2024, 1, 1.0);
        for day in 0..366 {
            let pos = solar_position(jd0 + day as f64);
            assert!(
                pos.declination_deg.abs() < 23.5,
                "day {day}: declination = {}",
                pos.declination_deg
            );
        }
    }

    #[test]
    fn equation_of_time_november_maximum() {
        // Early November: sundial ~16.4 min ahead of the clock.
        let pos = solar_position(calendar_to_jd(2024, 11, 3.5));
        assert!(
            (pos.equation_of_time_min - 16.4).abs() < 0.7,
            "EqT Nov 3 = {}",
            pos.equation_of_time_min
        );
    }

    #[test]
    fn equation_of_time_february_minimum() {
        // Mid February: sundial ~14.2 min behind.
        let pos = solar_position(calendar_to_jd(2024, 2, 11.5));
        assert!(
            (pos.equation_of_time_min + 14.2).abs() < 0.7,
            "EqT Feb 11 = {}",
            pos.equation_of_time_min
        );
    }

    #[test]
    fn equation_of_time_near_zero_crossings() {
        // EqT crosses zero around Apr 15, Jun 13, Sep 1, Dec 25.
        for &(m, d) in &[(4, 15.5), (6, 13.5), (9, 1.5), (12, 25.5)] {
            let pos = solar_position(calendar_to_jd(2024, m, d));
            assert!(
                pos.equation_of_time_min.abs() < 2.0,
                "EqT near zero crossing {m}/{d} = {}",
                pos.equation_of_time_min
            );
        }
    }

    #[test]
    fn equation_of_time_bounded_all_year() {
        let jd0 = calendar_to_jd(2024, 1, 1.0);
        for day in 0..366 {
            let pos = solar_position(jd0 + day as f64);
            assert!(
                pos.equation_of_time_min.abs() < 17.0,
                "day {day}: EqT = {}",
                pos.equation_of_time_min
            );
        }
    }
}

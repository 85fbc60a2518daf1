//! Solar altitude events within a single solar day.
//!
//! Solves for the UT instant at which the Sun's altitude crosses a target
//! value before (rising) or after (setting) local solar noon. The solve is
//! a closed-form hour-angle inversion refined by a bounded fixed-point
//! loop that re-evaluates the ephemeris at each estimate.
//!
//! Sources: standard spherical-astronomy hour-angle formula
//! (Meeus, USNO). Public domain.

use crate::position::solar_position;

/// Maximum iterations for the event refinement loop.
const MAX_ITERATIONS: usize = 4;

/// Convergence threshold in hours (~0.36 seconds).
const CONVERGENCE_HOURS: f64 = 1.0e-4;

/// Altitude of the Sun's center at apparent rise/set, degrees.
///
/// −50 arcmin: 34' standard atmospheric refraction plus 16' solar
/// semidiameter, the upper-limb horizon convention.
pub const HORIZON_ALTITUDE_DEG: f64 = -(50.0 / 60.0);

/// Which side of solar noon an event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventDirection {
    /// Morning event: the Sun crosses the target altitude going up.
    Rising,
    /// Evening event: the Sun crosses the target altitude going down.
    Setting,
}

/// Altitude target for an event solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunAltitude {
    /// Fixed altitude in degrees; negative values are below the horizon.
    Fixed(f64),
    /// Shadow-ratio target for Asr: the instant the shadow of an object
    /// equals `factor` times its height plus the noon shadow. The
    /// equivalent altitude depends on declination and is re-derived from
    /// the current ephemeris on every iteration.
    Shadow(f64),
}

impl SunAltitude {
    /// Resolve the target to a concrete altitude in degrees.
    pub fn altitude_deg(self, latitude_deg: f64, declination_deg: f64) -> f64 {
        match self {
            Self::Fixed(alt) => alt,
            Self::Shadow(factor) => {
                let spread = (latitude_deg - declination_deg).abs().to_radians();
                (1.0 / (factor + spread.tan())).atan().to_degrees()
            }
        }
    }
}

/// Result of the hour-angle inversion for a target altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AltitudeCrossing {
    /// The Sun crosses the target altitude at ± this hour angle (degrees,
    /// always positive; negative side = morning).
    Crossing(f64),
    /// The Sun stays above the target altitude for the whole day.
    AlwaysAbove,
    /// The Sun stays below the target altitude for the whole day.
    AlwaysBelow,
}

/// Hour angle at which the Sun reaches a target altitude.
///
/// `cos H = (sin h₀ − sin φ · sin δ) / (cos φ · cos δ)`
///
/// No solution exists when `|cos H| > 1`: the target altitude is outside
/// the Sun's daily altitude range at this latitude and date (polar day or
/// night for horizon-class targets).
pub fn hour_angle_deg(
    target_altitude_deg: f64,
    declination_deg: f64,
    latitude_deg: f64,
) -> AltitudeCrossing {
    let h0 = target_altitude_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();

    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());

    if cos_h > 1.0 {
        return AltitudeCrossing::AlwaysBelow;
    }
    if cos_h < -1.0 {
        return AltitudeCrossing::AlwaysAbove;
    }
    AltitudeCrossing::Crossing(cos_h.acos().to_degrees())
}

/// A solar altitude event on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarEvent {
    /// Event instant in UT hours measured from 0h UT of the requested
    /// date. May be negative or exceed 24 for longitudes far from
    /// Greenwich; callers convert via `jd_0h + hours / 24`.
    At(f64),
    /// No event: the Sun never drops to the target altitude.
    AlwaysAbove,
    /// No event: the Sun never climbs to the target altitude.
    AlwaysBelow,
}

/// Local solar noon in UT hours from 0h UT of the date.
///
/// `noon = 12 − λ/15 − EqT`, refined by re-evaluating the equation of
/// time at the estimate. Result is an offset from `jd_0h`, not wrapped
/// into [0, 24).
pub fn solar_noon_utc_hours(jd_0h: f64, longitude_deg: f64) -> f64 {
    let mut noon = 12.0 - longitude_deg / 15.0;
    for _ in 0..MAX_ITERATIONS {
        let pos = solar_position(jd_0h + noon / 24.0);
        let next = 12.0 - longitude_deg / 15.0 - pos.equation_of_time_min / 60.0;
        let correction = (next - noon).abs();
        noon = next;
        if correction < CONVERGENCE_HOURS {
            break;
        }
    }
    noon
}

/// Solve for a solar altitude event in UT hours from 0h UT of the date.
///
/// Starts from the noon declination and iterates, re-querying the
/// ephemeris (and, for shadow targets, re-deriving the target altitude)
/// at each estimate until the correction falls below the convergence
/// threshold or the iteration cap is hit.
pub fn altitude_event_utc_hours(
    jd_0h: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    target: SunAltitude,
    direction: EventDirection,
) -> SolarEvent {
    let noon = solar_noon_utc_hours(jd_0h, longitude_deg);

    let mut hours = noon;
    for _ in 0..MAX_ITERATIONS {
        let pos = solar_position(jd_0h + hours / 24.0);
        let target_alt = target.altitude_deg(latitude_deg, pos.declination_deg);

        let ha = match hour_angle_deg(target_alt, pos.declination_deg, latitude_deg) {
            AltitudeCrossing::Crossing(h) => h,
            AltitudeCrossing::AlwaysAbove => return SolarEvent::AlwaysAbove,
            AltitudeCrossing::AlwaysBelow => return SolarEvent::AlwaysBelow,
        };

        let next = match direction {
            EventDirection::Rising => noon - ha / 15.0,
            EventDirection::Setting => noon + ha / 15.0,
        };

        let correction = (next - hours).abs();
        hours = next;
        if correction < CONVERGENCE_HOURS {
            break;
        }
    }

    SolarEvent::At(hours)
}

//! Qibla bearing: great-circle initial bearing toward the Kaaba.

use crate::coordinates::Coordinates;

/// Latitude of the Kaaba, degrees north.
pub const KAABA_LATITUDE_DEG: f64 = 21.4225;

/// Longitude of the Kaaba, degrees east.
pub const KAABA_LONGITUDE_DEG: f64 = 39.8262;

/// Initial great-circle bearing from an observer to the Kaaba, in degrees
/// clockwise from true north, normalized to [0, 360).
///
/// `θ = atan2(sin Δλ, cos φ₁ · tan φ₂ − sin φ₁ · cos Δλ)`
///
/// Deterministic for every valid coordinate. At the Kaaba itself the
/// bearing is geometrically undefined (zero distance); the formula
/// degenerates to 0° there.
pub fn qibla(observer: &Coordinates) -> f64 {
    let phi1 = observer.latitude_rad();
    let phi2 = KAABA_LATITUDE_DEG.to_radians();
    let delta_lon = (KAABA_LONGITUDE_DEG - observer.longitude_deg).to_radians();

    let y = delta_lon.sin();
    let x = phi1.cos() * phi2.tan() - phi1.sin() * delta_lon.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

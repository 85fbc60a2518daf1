//! Low-precision solar ephemeris and altitude-event solver.
//!
//! This crate provides:
//! - Solar declination and equation of time (USNO low-precision series)
//! - The hour-angle inversion for arbitrary sun-altitude targets, with
//!   polar-case signalling
//! - Local solar noon and the bounded iterative event refinement used to
//!   pin rise/set-class events to sub-second precision
//!
//! Everything is pure arithmetic over UT Julian Dates; higher layers own
//! coordinate validation and calendar types.

pub mod events;
pub mod position;

pub use events::{
    AltitudeCrossing, EventDirection, HORIZON_ALTITUDE_DEG, SolarEvent, SunAltitude,
    altitude_event_utc_hours, hour_angle_deg, solar_noon_utc_hours,
};
pub use position::{SolarPosition, solar_position};

//! UTC calendar and Julian Date plumbing.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `UtcTime`, the canonical UTC instant type (ISO-8601 parse/format)
//!
//! The engine works in UT throughout; there is no leap-second or ΔT
//! handling because prayer-time precision is far coarser than either.

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_from_j2000, jd_to_calendar,
};
pub use utc_time::UtcTime;

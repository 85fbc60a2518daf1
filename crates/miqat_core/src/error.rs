//! Error types for prayer-time calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the prayer-time engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MiqatError {
    /// A method name did not resolve to a registered preset.
    UnknownMethod(String),
    /// A prayer instant could not be resolved geometrically and no
    /// high-latitude fallback was configured (or the fallback itself is
    /// undefined, e.g. polar day/night with no horizon crossing).
    UnresolvableTime(&'static str),
    /// Non-chronological inputs to the sunnah-time computation.
    InvalidInterval(&'static str),
    /// Latitude or longitude outside its valid range.
    InvalidCoordinate(&'static str),
}

impl Display for MiqatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod(name) => write!(f, "unknown calculation method: {name}"),
            Self::UnresolvableTime(msg) => write!(f, "unresolvable time: {msg}"),
            Self::InvalidInterval(msg) => write!(f, "invalid interval: {msg}"),
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
        }
    }
}

impl Error for MiqatError {}

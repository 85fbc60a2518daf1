//! Calculation parameters: twilight angles, juristic conventions, and
//! per-prayer minute adjustments.
//!
//! A parameter set is immutable once constructed; preset sets come from
//! [`crate::method::Method::parameters`] and custom sets are built with
//! [`CalculationParameters::new`] plus the `with_*` helpers.

use crate::method::Method;

/// Juristic convention for the Asr shadow factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Madhab {
    /// Shafi'i/Maliki/Hanbali: shadow equals object height (factor 1).
    Standard,
    /// Hanafi: shadow equals twice the object height (factor 2).
    Hanafi,
}

impl Madhab {
    /// Shadow-length multiplier for the Asr formula.
    pub fn shadow_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

/// Fallback for Fajr/Isha when twilight cannot be resolved geometrically,
/// or resolves outside a sane portion of the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighLatitudeRule {
    /// No fallback: unresolvable twilight is a hard error.
    None,
    /// Fajr/Isha bounded to half the night from sunrise/sunset.
    MiddleOfNight,
    /// Fajr/Isha bounded to one seventh of the night.
    SeventhOfNight,
    /// Night portion proportional to the twilight angle: angle/60 of the
    /// night (the "angle-based" rule).
    TwilightAngle,
}

impl HighLatitudeRule {
    /// Fraction of the night allotted to the twilight interval, or `None`
    /// when the rule provides no bound.
    pub fn night_fraction(self, twilight_angle_deg: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::MiddleOfNight => Some(1.0 / 2.0),
            Self::SeventhOfNight => Some(1.0 / 7.0),
            Self::TwilightAngle => Some(twilight_angle_deg / 60.0),
        }
    }
}

/// How a method defines Isha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IshaRule {
    /// Sun depression angle below the horizon, degrees.
    Angle(f64),
    /// Fixed interval after Maghrib, minutes.
    Interval(f64),
}

/// Per-prayer minute offsets. Positive values delay a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeAdjustments {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
}

/// A complete, immutable parameter set for one prayer-time computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationParameters {
    /// Preset this set came from; `None` for custom parameters.
    pub method: Option<Method>,
    /// Sun depression angle below the horizon for Fajr, degrees.
    pub fajr_angle_deg: f64,
    /// Isha definition: depression angle or interval after Maghrib.
    pub isha: IshaRule,
    /// Optional Maghrib depression angle; plain sunset when absent.
    pub maghrib_angle_deg: Option<f64>,
    /// Juristic convention for Asr.
    pub madhab: Madhab,
    /// Fallback for unresolvable twilight.
    pub high_latitude_rule: HighLatitudeRule,
    /// Fixed per-prayer tweaks that are part of the preset definition.
    pub method_adjustments: TimeAdjustments,
    /// Caller-supplied offsets, applied after the method adjustments.
    pub adjustments: TimeAdjustments,
}

impl CalculationParameters {
    /// Custom parameter set with the given Fajr angle and Isha rule.
    ///
    /// Defaults: no Maghrib angle, Standard madhab, MiddleOfNight
    /// high-latitude rule, zero adjustments.
    pub fn new(fajr_angle_deg: f64, isha: IshaRule) -> Self {
        Self {
            method: None,
            fajr_angle_deg,
            isha,
            maghrib_angle_deg: None,
            madhab: Madhab::Standard,
            high_latitude_rule: HighLatitudeRule::MiddleOfNight,
            method_adjustments: TimeAdjustments::default(),
            adjustments: TimeAdjustments::default(),
        }
    }

    /// Replace the madhab.
    pub fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    /// Replace the high-latitude rule.
    pub fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    /// Replace the caller adjustments.
    pub fn with_adjustments(mut self, adjustments: TimeAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }
}

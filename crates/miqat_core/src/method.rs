//! Registry of named calculation methods.
//!
//! Each method is a fixed parameter tuple published by the issuing
//! organization: Fajr/Isha depression angles (or an Isha interval), an
//! optional Maghrib angle, and the fixed minute tweaks its published
//! timetables assume. The registry is a closed enum; arbitrary
//! parameter sets are built through
//! [`CalculationParameters::new`](crate::params::CalculationParameters::new)
//! instead of an open string key.

use crate::error::MiqatError;
use crate::params::{CalculationParameters, HighLatitudeRule, IshaRule, Madhab, TimeAdjustments};

/// Named prayer-time calculation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Muslim World League: Fajr 18°, Isha 17°.
    MuslimWorldLeague,
    /// Egyptian General Authority of Survey: Fajr 19.5°, Isha 17.5°.
    Egyptian,
    /// University of Islamic Sciences, Karachi: Fajr 18°, Isha 18°.
    Karachi,
    /// Umm al-Qura University, Makkah: Fajr 18.5°, Isha 90 min after
    /// Maghrib.
    UmmAlQura,
    /// UAE General Authority of Islamic Affairs: Fajr/Isha 18.2°.
    Dubai,
    /// Moonsighting Committee Worldwide: Fajr/Isha 18°.
    MoonsightingCommittee,
    /// Islamic Society of North America: Fajr/Isha 15°.
    NorthAmerica,
    /// Kuwait Ministry of Awqaf: Fajr 18°, Isha 17.5°.
    Kuwait,
    /// Qatar: Fajr 18°, Isha 90 min after Maghrib.
    Qatar,
    /// Majlis Ugama Islam Singapura: Fajr 20°, Isha 18°.
    Singapore,
    /// Institute of Geophysics, University of Tehran: Fajr 17.7°,
    /// Isha 14°, Maghrib angle 4.5°.
    Tehran,
    /// Diyanet İşleri Başkanlığı, Turkey: Fajr 18°, Isha 17°.
    Turkey,
}

/// All registered methods in enum order.
const ALL_METHODS: [Method; 12] = [
    Method::MuslimWorldLeague,
    Method::Egyptian,
    Method::Karachi,
    Method::UmmAlQura,
    Method::Dubai,
    Method::MoonsightingCommittee,
    Method::NorthAmerica,
    Method::Kuwait,
    Method::Qatar,
    Method::Singapore,
    Method::Tehran,
    Method::Turkey,
];

impl Method {
    /// All registered methods.
    pub fn all() -> &'static [Method] {
        &ALL_METHODS
    }

    /// Canonical method name, in the conventional CamelCase spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::MuslimWorldLeague => "MuslimWorldLeague",
            Self::Egyptian => "Egyptian",
            Self::Karachi => "Karachi",
            Self::UmmAlQura => "UmmAlQura",
            Self::Dubai => "Dubai",
            Self::MoonsightingCommittee => "MoonsightingCommittee",
            Self::NorthAmerica => "NorthAmerica",
            Self::Kuwait => "Kuwait",
            Self::Qatar => "Qatar",
            Self::Singapore => "Singapore",
            Self::Tehran => "Tehran",
            Self::Turkey => "Turkey",
        }
    }

    /// Resolve a method by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Method, MiqatError> {
        ALL_METHODS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MiqatError::UnknownMethod(name.to_string()))
    }

    /// The preset parameter tuple for this method.
    ///
    /// Every preset defaults to the MiddleOfNight high-latitude rule and
    /// the Standard madhab; callers override via the `with_*` helpers on
    /// the returned value.
    pub fn parameters(self) -> CalculationParameters {
        let (fajr_angle_deg, isha, maghrib_angle_deg, method_adjustments) = match self {
            Self::MuslimWorldLeague => (
                18.0,
                IshaRule::Angle(17.0),
                None,
                TimeAdjustments {
                    dhuhr: 1,
                    ..Default::default()
                },
            ),
            Self::Egyptian => (
                19.5,
                IshaRule::Angle(17.5),
                None,
                TimeAdjustments {
                    dhuhr: 1,
                    ..Default::default()
                },
            ),
            Self::Karachi => (
                18.0,
                IshaRule::Angle(18.0),
                None,
                TimeAdjustments {
                    dhuhr: 1,
                    ..Default::default()
                },
            ),
            Self::UmmAlQura => (18.5, IshaRule::Interval(90.0), None, TimeAdjustments::default()),
            Self::Dubai => (
                18.2,
                IshaRule::Angle(18.2),
                None,
                TimeAdjustments {
                    sunrise: -3,
                    dhuhr: 3,
                    asr: 3,
                    maghrib: 3,
                    ..Default::default()
                },
            ),
            Self::MoonsightingCommittee => (
                18.0,
                IshaRule::Angle(18.0),
                None,
                TimeAdjustments {
                    dhuhr: 5,
                    maghrib: 3,
                    ..Default::default()
                },
            ),
            Self::NorthAmerica => (
                15.0,
                IshaRule::Angle(15.0),
                None,
                TimeAdjustments {
                    dhuhr: 1,
                    ..Default::default()
                },
            ),
            Self::Kuwait => (18.0, IshaRule::Angle(17.5), None, TimeAdjustments::default()),
            Self::Qatar => (18.0, IshaRule::Interval(90.0), None, TimeAdjustments::default()),
            Self::Singapore => (
                20.0,
                IshaRule::Angle(18.0),
                None,
                TimeAdjustments {
                    dhuhr: 1,
                    ..Default::default()
                },
            ),
            Self::Tehran => (17.7, IshaRule::Angle(14.0), Some(4.5), TimeAdjustments::default()),
            Self::Turkey => (
                18.0,
                IshaRule::Angle(17.0),
                None,
                TimeAdjustments {
                    sunrise: -7,
                    dhuhr: 5,
                    asr: 4,
                    maghrib: 7,
                    ..Default::default()
                },
            ),
        };

        CalculationParameters {
            method: Some(self),
            fajr_angle_deg,
            isha,
            maghrib_angle_deg,
            madhab: Madhab::Standard,
            high_latitude_rule: HighLatitudeRule::MiddleOfNight,
            method_adjustments,
            adjustments: TimeAdjustments::default(),
        }
    }
}

//! Daily prayer-time resolution.
//!
//! Combines the solar ephemeris with a method's parameter set to produce
//! the six daily prayer instants, applying the high-latitude fallback
//! where twilight geometry fails and per-prayer minute offsets last.
//!
//! All instants are UTC-resolved: an event belonging to this location's
//! solar day may fall on the previous or next UTC calendar date at
//! longitudes far from Greenwich.

use miqat_solar::{
    EventDirection, HORIZON_ALTITUDE_DEG, SolarEvent, SunAltitude, altitude_event_utc_hours,
    solar_noon_utc_hours,
};
use miqat_time::UtcTime;

use crate::coordinates::Coordinates;
use crate::error::MiqatError;
use crate::params::{CalculationParameters, IshaRule};

/// The six daily prayer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// All prayers in chronological order.
const ALL_PRAYERS: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// All prayers in chronological order.
    pub fn all() -> &'static [Prayer] {
        &ALL_PRAYERS
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

/// The six prayer instants for one location and calendar date.
///
/// Invariant: `fajr < sunrise < dhuhr < asr < maghrib < isha` for every
/// input with a direct geometric solution, and for high-latitude
/// fallbacks with default adjustments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    /// The civil date the computation was requested for.
    pub date: UtcTime,
    pub coordinates: Coordinates,
    pub parameters: CalculationParameters,
    pub fajr: UtcTime,
    pub sunrise: UtcTime,
    pub dhuhr: UtcTime,
    pub asr: UtcTime,
    pub maghrib: UtcTime,
    pub isha: UtcTime,
}

/// Resolve a twilight event against its high-latitude bound.
///
/// `geometric` is the solved instant (hours from 0h UT), when one exists.
/// `fraction` is the night fraction from the configured rule. `anchor_h`
/// is sunrise (fajr) or sunset (isha); `before` selects which side of the
/// anchor the twilight interval extends to.
fn resolve_twilight(
    geometric: Option<f64>,
    fraction: Option<f64>,
    anchor_h: f64,
    night_hours: f64,
    before: bool,
    what: &'static str,
) -> Result<f64, MiqatError> {
    let bound = fraction.map(|f| f * night_hours);
    let safe = |b: f64| if before { anchor_h - b } else { anchor_h + b };

    match (geometric, bound) {
        (Some(h), Some(b)) => {
            let span = if before { anchor_h - h } else { h - anchor_h };
            Ok(if span > b { safe(b) } else { h })
        }
        (Some(h), None) => Ok(h),
        (None, Some(b)) => Ok(safe(b)),
        (None, None) => Err(MiqatError::UnresolvableTime(what)),
    }
}

impl PrayerTimes {
    /// Compute the prayer times for a coordinate and civil date.
    ///
    /// The time-of-day component of `date` is ignored; only the calendar
    /// date selects the solar day.
    pub fn new(
        coordinates: Coordinates,
        date: UtcTime,
        parameters: CalculationParameters,
    ) -> Result<Self, MiqatError> {
        let jd0 = date.date_jd0();
        let lat = coordinates.latitude_deg;
        let lon = coordinates.longitude_deg;
        let p = &parameters;

        let solve = |target: SunAltitude, direction: EventDirection| {
            altitude_event_utc_hours(jd0, lat, lon, target, direction)
        };

        // Horizon events anchor everything else; without them the solar
        // day is degenerate and no fallback is defined.
        let sunrise_h = match solve(
            SunAltitude::Fixed(HORIZON_ALTITUDE_DEG),
            EventDirection::Rising,
        ) {
            SolarEvent::At(h) => h,
            SolarEvent::AlwaysAbove => {
                return Err(MiqatError::UnresolvableTime(
                    "sun never sets on this date (polar day)",
                ));
            }
            SolarEvent::AlwaysBelow => {
                return Err(MiqatError::UnresolvableTime(
                    "sun never rises on this date (polar night)",
                ));
            }
        };
        let sunset_h = match solve(
            SunAltitude::Fixed(HORIZON_ALTITUDE_DEG),
            EventDirection::Setting,
        ) {
            SolarEvent::At(h) => h,
            _ => {
                return Err(MiqatError::UnresolvableTime(
                    "sun does not cross the horizon on this date",
                ));
            }
        };

        // Night span from sunset to the (next) sunrise.
        let night_hours = sunrise_h + 24.0 - sunset_h;

        let dhuhr_h = solar_noon_utc_hours(jd0, lon);

        let fajr_geometric = match solve(
            SunAltitude::Fixed(-p.fajr_angle_deg),
            EventDirection::Rising,
        ) {
            SolarEvent::At(h) => Some(h),
            _ => None,
        };
        let fajr_h = resolve_twilight(
            fajr_geometric,
            p.high_latitude_rule.night_fraction(p.fajr_angle_deg),
            sunrise_h,
            night_hours,
            true,
            "fajr twilight unreachable and no high-latitude rule configured",
        )?;

        let asr_h = match solve(
            SunAltitude::Shadow(p.madhab.shadow_factor()),
            EventDirection::Setting,
        ) {
            SolarEvent::At(h) => h,
            _ => {
                return Err(MiqatError::UnresolvableTime(
                    "asr shadow target unreachable at this latitude",
                ));
            }
        };

        let maghrib_h = match p.maghrib_angle_deg {
            None => sunset_h,
            Some(angle) => match solve(SunAltitude::Fixed(-angle), EventDirection::Setting) {
                SolarEvent::At(h) if h > sunset_h => h,
                _ => sunset_h,
            },
        };

        let isha_h = match p.isha {
            IshaRule::Interval(minutes) => maghrib_h + minutes / 60.0,
            IshaRule::Angle(angle) => {
                let geometric = match solve(SunAltitude::Fixed(-angle), EventDirection::Setting) {
                    SolarEvent::At(h) => Some(h),
                    _ => None,
                };
                resolve_twilight(
                    geometric,
                    p.high_latitude_rule.night_fraction(angle),
                    sunset_h,
                    night_hours,
                    false,
                    "isha twilight unreachable and no high-latitude rule configured",
                )?
            }
        };

        // Minute offsets last: preset tweaks, then caller adjustments.
        let adjusted = |h: f64, method_min: i32, caller_min: i32| {
            h + f64::from(method_min + caller_min) / 60.0
        };
        let ma = p.method_adjustments;
        let ca = p.adjustments;

        let time = |h: f64| UtcTime::from_jd_utc(jd0 + h / 24.0);

        let fajr = time(adjusted(fajr_h, ma.fajr, ca.fajr));
        let sunrise = time(adjusted(sunrise_h, ma.sunrise, ca.sunrise));
        let dhuhr = time(adjusted(dhuhr_h, ma.dhuhr, ca.dhuhr));
        let asr = time(adjusted(asr_h, ma.asr, ca.asr));
        let maghrib = time(adjusted(maghrib_h, ma.maghrib, ca.maghrib));
        let isha = time(adjusted(isha_h, ma.isha, ca.isha));

        Ok(Self {
            date,
            coordinates,
            parameters,
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
        })
    }

    /// The instant of a given prayer.
    pub fn time_for(&self, prayer: Prayer) -> UtcTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// The prayer period containing `at`: the latest prayer whose instant
    /// is not after `at`. `None` before Fajr.
    pub fn current_prayer(&self, at: &UtcTime) -> Option<Prayer> {
        let at_jd = at.to_jd_utc();
        ALL_PRAYERS
            .iter()
            .copied()
            .filter(|&prayer| self.time_for(prayer).to_jd_utc() <= at_jd)
            .next_back()
    }

    /// The first prayer strictly after `at`. `None` once Isha has passed;
    /// hosts roll over to the next date and recompute.
    pub fn next_prayer(&self, at: &UtcTime) -> Option<Prayer> {
        let at_jd = at.to_jd_utc();
        ALL_PRAYERS
            .iter()
            .copied()
            .find(|&prayer| self.time_for(prayer).to_jd_utc() > at_jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::params::{HighLatitudeRule, Madhab, TimeAdjustments};

    fn mecca() -> Coordinates {
        Coordinates::new(21.4225, 39.8262).unwrap()
    }

    fn equinox() -> UtcTime {
        UtcTime::new(2024, 3, 20, 0, 0, 0.0)
    }

    fn hours_of(t: &UtcTime, date: &UtcTime) -> f64 {
        (t.to_jd_utc() - date.date_jd0()) * 24.0
    }

    #[test]
    fn mecca_equinox_umm_al_qura() {
        let times =
            PrayerTimes::new(mecca(), equinox(), Method::UmmAlQura.parameters()).unwrap();
        let date = equinox();
        // Local civil time is UTC+3; published values for the day:
        // Fajr 05:08, Sunrise 06:24, Dhuhr 12:28, Asr 15:52, Maghrib
        // 18:32, Isha 20:02.
        let expect = [
            (times.fajr, 2.13),
            (times.sunrise, 3.40),
            (times.dhuhr, 9.47),
            (times.asr, 12.88),
            (times.maghrib, 15.54),
            (times.isha, 17.04),
        ];
        for (t, want) in expect {
            let got = hours_of(&t, &date);
            assert!(
                (got - want).abs() < 0.1,
                "expected ~{want}h UT, got {got}h ({t})"
            );
        }
    }

    #[test]
    fn ordering_strict() {
        let times =
            PrayerTimes::new(mecca(), equinox(), Method::MuslimWorldLeague.parameters()).unwrap();
        let jds: Vec<f64> = Prayer::all()
            .iter()
            .map(|&p| times.time_for(p).to_jd_utc())
            .collect();
        for pair in jds.windows(2) {
            assert!(pair[0] < pair[1], "ordering violated: {jds:?}");
        }
    }

    #[test]
    fn hanafi_asr_later() {
        let standard =
            PrayerTimes::new(mecca(), equinox(), Method::Karachi.parameters()).unwrap();
        let hanafi = PrayerTimes::new(
            mecca(),
            equinox(),
            Method::Karachi.parameters().with_madhab(Madhab::Hanafi),
        )
        .unwrap();
        assert!(
            hanafi.asr.to_jd_utc() > standard.asr.to_jd_utc(),
            "hanafi asr {} should follow standard asr {}",
            hanafi.asr,
            standard.asr
        );
        // Asr is the only instant the madhab moves.
        assert_eq!(standard.fajr, hanafi.fajr);
        assert_eq!(standard.dhuhr, hanafi.dhuhr);
        assert_eq!(standard.maghrib, hanafi.maghrib);
    }

    #[test]
    fn polar_day_is_an_error() {
        let tromso = Coordinates::new(69.65, 18.96).unwrap();
        let midsummer = UtcTime::new(2024, 6, 21, 0, 0, 0.0);
        let err = PrayerTimes::new(tromso, midsummer, Method::MuslimWorldLeague.parameters())
            .unwrap_err();
        assert!(matches!(err, MiqatError::UnresolvableTime(_)), "{err}");
    }

    #[test]
    fn polar_night_is_an_error() {
        let tromso = Coordinates::new(69.65, 18.96).unwrap();
        let midwinter = UtcTime::new(2024, 12, 21, 0, 0, 0.0);
        let err = PrayerTimes::new(tromso, midwinter, Method::MuslimWorldLeague.parameters())
            .unwrap_err();
        assert!(matches!(err, MiqatError::UnresolvableTime(_)), "{err}");
    }

    #[test]
    fn high_latitude_middle_of_night_clamp() {
        // Oslo in June: 18° twilight is unreachable, the default rule
        // substitutes sunrise − night/2.
        let oslo = Coordinates::new(59.9139, 10.7522).unwrap();
        let midsummer = UtcTime::new(2024, 6, 21, 0, 0, 0.0);
        let times =
            PrayerTimes::new(oslo, midsummer, Method::MuslimWorldLeague.parameters()).unwrap();
        let date = midsummer;

        let sunrise_h = hours_of(&times.sunrise, &date);
        let sunset_h = hours_of(&times.maghrib, &date);
        let night = sunrise_h + 24.0 - sunset_h;
        let fajr_h = hours_of(&times.fajr, &date);
        assert!(
            (sunrise_h - fajr_h - night / 2.0).abs() < 0.02,
            "fajr {fajr_h} should sit half a night ({night}h) before sunrise {sunrise_h}"
        );

        let isha_h = hours_of(&times.isha, &date);
        assert!(
            (isha_h - sunset_h - night / 2.0).abs() < 0.02,
            "isha {isha_h} should sit half a night after sunset {sunset_h}"
        );
    }

    #[test]
    fn high_latitude_none_rule_errors() {
        let oslo = Coordinates::new(59.9139, 10.7522).unwrap();
        let midsummer = UtcTime::new(2024, 6, 21, 0, 0, 0.0);
        let params = Method::MuslimWorldLeague
            .parameters()
            .with_high_latitude_rule(HighLatitudeRule::None);
        let err = PrayerTimes::new(oslo, midsummer, params).unwrap_err();
        assert!(matches!(err, MiqatError::UnresolvableTime(_)), "{err}");
    }

    #[test]
    fn seventh_of_night_tighter_than_middle() {
        let oslo = Coordinates::new(59.9139, 10.7522).unwrap();
        let midsummer = UtcTime::new(2024, 6, 21, 0, 0, 0.0);
        let middle =
            PrayerTimes::new(oslo, midsummer, Method::MuslimWorldLeague.parameters()).unwrap();
        let seventh = PrayerTimes::new(
            oslo,
            midsummer,
            Method::MuslimWorldLeague
                .parameters()
                .with_high_latitude_rule(HighLatitudeRule::SeventhOfNight),
        )
        .unwrap();
        assert!(
            seventh.fajr.to_jd_utc() > middle.fajr.to_jd_utc(),
            "1/7-night fajr should fall later than 1/2-night fajr"
        );
        assert!(seventh.isha.to_jd_utc() < middle.isha.to_jd_utc());
    }

    #[test]
    fn caller_adjustment_moves_one_prayer() {
        let base =
            PrayerTimes::new(mecca(), equinox(), Method::MuslimWorldLeague.parameters()).unwrap();
        let shifted = PrayerTimes::new(
            mecca(),
            equinox(),
            Method::MuslimWorldLeague
                .parameters()
                .with_adjustments(TimeAdjustments {
                    fajr: 10,
                    ..Default::default()
                }),
        )
        .unwrap();
        let delta_min = (shifted.fajr.to_jd_utc() - base.fajr.to_jd_utc()) * 24.0 * 60.0;
        assert!(
            (delta_min - 10.0).abs() < 1e-3,
            "fajr moved {delta_min} min, expected 10"
        );
        assert_eq!(base.sunrise, shifted.sunrise);
        assert_eq!(base.dhuhr, shifted.dhuhr);
        assert_eq!(base.asr, shifted.asr);
        assert_eq!(base.maghrib, shifted.maghrib);
        assert_eq!(base.isha, shifted.isha);
    }

    #[test]
    fn method_change_leaves_solar_times_alone() {
        // MWL and Egyptian differ only in twilight angles (both tweak
        // Dhuhr by +1 and share the Standard madhab).
        let mwl =
            PrayerTimes::new(mecca(), equinox(), Method::MuslimWorldLeague.parameters()).unwrap();
        let egyptian =
            PrayerTimes::new(mecca(), equinox(), Method::Egyptian.parameters()).unwrap();
        assert_eq!(mwl.sunrise, egyptian.sunrise);
        assert_eq!(mwl.dhuhr, egyptian.dhuhr);
        assert_eq!(mwl.asr, egyptian.asr);
        assert_eq!(mwl.maghrib, egyptian.maghrib);
        assert_ne!(mwl.fajr, egyptian.fajr, "19.5° fajr must differ from 18°");
        assert_ne!(mwl.isha, egyptian.isha);
    }

    #[test]
    fn tehran_maghrib_after_sunset() {
        let tehran_city = Coordinates::new(35.6892, 51.389).unwrap();
        let with_angle =
            PrayerTimes::new(tehran_city, equinox(), Method::Tehran.parameters()).unwrap();
        let sunset_only =
            PrayerTimes::new(tehran_city, equinox(), Method::Karachi.parameters()).unwrap();
        assert!(
            with_angle.maghrib.to_jd_utc() > sunset_only.maghrib.to_jd_utc(),
            "4.5° maghrib {} should follow sunset {}",
            with_angle.maghrib,
            sunset_only.maghrib
        );
    }

    #[test]
    fn current_and_next_prayer() {
        let times =
            PrayerTimes::new(mecca(), equinox(), Method::UmmAlQura.parameters()).unwrap();

        let before_fajr = UtcTime::new(2024, 3, 20, 1, 0, 0.0);
        assert_eq!(times.current_prayer(&before_fajr), None);
        assert_eq!(times.next_prayer(&before_fajr), Some(Prayer::Fajr));

        let midday = UtcTime::new(2024, 3, 20, 10, 0, 0.0);
        assert_eq!(times.current_prayer(&midday), Some(Prayer::Dhuhr));
        assert_eq!(times.next_prayer(&midday), Some(Prayer::Asr));

        let late = UtcTime::new(2024, 3, 20, 23, 0, 0.0);
        assert_eq!(times.current_prayer(&late), Some(Prayer::Isha));
        assert_eq!(times.next_prayer(&late), None);
    }
}

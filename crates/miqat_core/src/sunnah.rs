//! Sunnah night markers derived from consecutive days' prayer times.
//!
//! The Islamic night runs from Maghrib to the next day's Fajr. The
//! recommended markers are its midpoint and the start of its last third.

use miqat_time::UtcTime;

use crate::error::MiqatError;
use crate::prayer_times::PrayerTimes;

/// Night markers for one Maghrib-to-Fajr interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunnahTimes {
    /// Midpoint of the night.
    pub middle_of_the_night: UtcTime,
    /// Start of the final third of the night.
    pub last_third_of_the_night: UtcTime,
}

impl SunnahTimes {
    /// Derive the markers from today's and tomorrow's prayer times.
    pub fn new(today: &PrayerTimes, tomorrow: &PrayerTimes) -> Result<Self, MiqatError> {
        Self::from_interval(today.maghrib, tomorrow.fajr)
    }

    /// Derive the markers from a raw Maghrib / next-Fajr pair.
    pub fn from_interval(maghrib: UtcTime, next_fajr: UtcTime) -> Result<Self, MiqatError> {
        let maghrib_jd = maghrib.to_jd_utc();
        let fajr_jd = next_fajr.to_jd_utc();
        if fajr_jd <= maghrib_jd {
            return Err(MiqatError::InvalidInterval(
                "next-day fajr must follow maghrib",
            ));
        }

        let night_days = fajr_jd - maghrib_jd;
        Ok(Self {
            middle_of_the_night: UtcTime::from_jd_utc(maghrib_jd + night_days / 2.0),
            last_third_of_the_night: UtcTime::from_jd_utc(maghrib_jd + night_days * 2.0 / 3.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_hour_night() {
        // Maghrib 18:00, next fajr 05:00: night 11h, middle 23:30,
        // last third 01:20 the next day. Nudge by half a second before
        // reading the fields so float noise cannot flip a minute.
        let maghrib = UtcTime::new(2024, 3, 20, 18, 0, 0.0);
        let fajr = UtcTime::new(2024, 3, 21, 5, 0, 0.0);
        let sunnah = SunnahTimes::from_interval(maghrib, fajr).unwrap();

        let mid = sunnah.middle_of_the_night.plus_days(0.5 / 86_400.0);
        assert_eq!((mid.day, mid.hour, mid.minute), (20, 23, 30), "middle = {mid}");

        let third = sunnah.last_third_of_the_night.plus_days(0.5 / 86_400.0);
        assert_eq!(
            (third.day, third.hour, third.minute),
            (21, 1, 20),
            "last third = {third}"
        );
    }

    #[test]
    fn markers_ordered_within_night() {
        let maghrib = UtcTime::new(2024, 6, 1, 19, 13, 0.0);
        let fajr = UtcTime::new(2024, 6, 2, 3, 47, 0.0);
        let sunnah = SunnahTimes::from_interval(maghrib, fajr).unwrap();
        let m = maghrib.to_jd_utc();
        let f = fajr.to_jd_utc();
        let mid = sunnah.middle_of_the_night.to_jd_utc();
        let third = sunnah.last_third_of_the_night.to_jd_utc();
        assert!(m < mid && mid < third && third < f);
    }

    #[test]
    fn reversed_interval_rejected() {
        let maghrib = UtcTime::new(2024, 3, 21, 18, 0, 0.0);
        let fajr = UtcTime::new(2024, 3, 20, 5, 0, 0.0);
        let err = SunnahTimes::from_interval(maghrib, fajr).unwrap_err();
        assert!(matches!(err, MiqatError::InvalidInterval(_)), "{err}");
    }

    #[test]
    fn zero_interval_rejected() {
        let t = UtcTime::new(2024, 3, 20, 18, 0, 0.0);
        assert!(SunnahTimes::from_interval(t, t).is_err());
    }
}

//! Sunnah markers derived from two consecutive computed days.

use miqat_core::{Coordinates, Method, MiqatError, PrayerTimes, SunnahTimes};
use miqat_time::UtcTime;

#[test]
fn night_markers_from_consecutive_days() {
    let mecca = Coordinates::new(21.4225, 39.8262).unwrap();
    let params = Method::UmmAlQura.parameters();
    let today = PrayerTimes::new(
        mecca,
        UtcTime::new(2024, 3, 20, 0, 0, 0.0),
        params,
    )
    .unwrap();
    let tomorrow = PrayerTimes::new(
        mecca,
        UtcTime::new(2024, 3, 21, 0, 0, 0.0),
        params,
    )
    .unwrap();

    let sunnah = SunnahTimes::new(&today, &tomorrow).unwrap();

    let maghrib = today.maghrib.to_jd_utc();
    let fajr = tomorrow.fajr.to_jd_utc();
    let middle = sunnah.middle_of_the_night.to_jd_utc();
    let third = sunnah.last_third_of_the_night.to_jd_utc();

    assert!(maghrib < middle && middle < third && third < fajr);

    let expected_middle = maghrib + (fajr - maghrib) / 2.0;
    assert!(
        (middle - expected_middle).abs() * 86_400.0 < 1.0,
        "middle off by {}s",
        (middle - expected_middle).abs() * 86_400.0
    );

    let expected_third = maghrib + (fajr - maghrib) * 2.0 / 3.0;
    assert!(
        (third - expected_third).abs() * 86_400.0 < 1.0,
        "last third off by {}s",
        (third - expected_third).abs() * 86_400.0
    );
}

#[test]
fn swapped_days_rejected() {
    let mecca = Coordinates::new(21.4225, 39.8262).unwrap();
    let params = Method::UmmAlQura.parameters();
    let today = PrayerTimes::new(
        mecca,
        UtcTime::new(2024, 3, 20, 0, 0, 0.0),
        params,
    )
    .unwrap();
    let tomorrow = PrayerTimes::new(
        mecca,
        UtcTime::new(2024, 3, 21, 0, 0, 0.0),
        params,
    )
    .unwrap();

    let err = SunnahTimes::new(&tomorrow, &today).unwrap_err();
    assert!(matches!(err, MiqatError::InvalidInterval(_)), "{err}");
}

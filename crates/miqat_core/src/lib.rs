//! Prayer-time engine: method registry, daily resolver, sunnah night
//! markers, and qibla bearing.
//!
//! Every operation is a pure function of (coordinates, date, parameters):
//! no clocks, no caches, no shared state. Hosts re-invoke on their own
//! timer with "now" as an input.
//!
//! ```rust
//! use miqat_core::{Coordinates, Method, PrayerTimes, qibla};
//! use miqat_time::UtcTime;
//!
//! let mecca = Coordinates::new(21.4225, 39.8262).unwrap();
//! let date: UtcTime = "2024-03-20".parse().unwrap();
//! let times = PrayerTimes::new(mecca, date, Method::UmmAlQura.parameters()).unwrap();
//! assert!(times.fajr.to_jd_utc() < times.sunrise.to_jd_utc());
//!
//! let nyc = Coordinates::new(40.7128, -74.0060).unwrap();
//! assert!((qibla(&nyc) - 58.5).abs() < 1.0);
//! ```

pub mod coordinates;
pub mod error;
pub mod method;
pub mod params;
pub mod prayer_times;
pub mod qibla;
pub mod sunnah;

pub use coordinates::Coordinates;
pub use error::MiqatError;
pub use method::Method;
pub use params::{
    CalculationParameters, HighLatitudeRule, IshaRule, Madhab, TimeAdjustments,
};
pub use prayer_times::{Prayer, PrayerTimes};
pub use qibla::{KAABA_LATITUDE_DEG, KAABA_LONGITUDE_DEG, qibla};
pub use sunnah::SunnahTimes;

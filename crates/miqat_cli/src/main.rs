use clap::{Parser, Subcommand};
use miqat_core::{
    CalculationParameters, Coordinates, HighLatitudeRule, IshaRule, Madhab, Method, Prayer,
    PrayerTimes, SunnahTimes, TimeAdjustments, qibla,
};
use miqat_time::UtcTime;

#[derive(Parser)]
#[command(name = "miqat", about = "Miqat prayer-time CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the six daily prayer times for a date and location
    Times {
        /// UTC date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Calculation method (see `miqat methods`)
        #[arg(long, default_value = "MuslimWorldLeague")]
        method: String,
        /// Asr convention: standard or hanafi
        #[arg(long, default_value = "standard")]
        madhab: String,
        /// High-latitude rule: none, middle-of-night, seventh-of-night,
        /// twilight-angle (default: the method's rule)
        #[arg(long)]
        high_lat: Option<String>,
        /// Fajr offset in minutes
        #[arg(long, default_value = "0")]
        adjust_fajr: i32,
        /// Sunrise offset in minutes
        #[arg(long, default_value = "0")]
        adjust_sunrise: i32,
        /// Dhuhr offset in minutes
        #[arg(long, default_value = "0")]
        adjust_dhuhr: i32,
        /// Asr offset in minutes
        #[arg(long, default_value = "0")]
        adjust_asr: i32,
        /// Maghrib offset in minutes
        #[arg(long, default_value = "0")]
        adjust_maghrib: i32,
        /// Isha offset in minutes
        #[arg(long, default_value = "0")]
        adjust_isha: i32,
    },
    /// Compute sunnah night markers (middle and last third of the night)
    Sunnah {
        /// UTC date (YYYY-MM-DD); the night runs to the next day's fajr
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Calculation method (see `miqat methods`)
        #[arg(long, default_value = "MuslimWorldLeague")]
        method: String,
    },
    /// Compute the qibla bearing from a location
    Qibla {
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
    },
    /// List the built-in calculation methods
    Methods,
}

fn parse_date(s: &str) -> UtcTime {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_coordinates(lat: f64, lon: f64) -> Coordinates {
    Coordinates::new(lat, lon).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_method(s: &str) -> Method {
    Method::from_name(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid methods: run `miqat methods`");
        std::process::exit(1);
    })
}

fn parse_madhab(s: &str) -> Madhab {
    match s.to_lowercase().as_str() {
        "standard" | "shafi" => Madhab::Standard,
        "hanafi" => Madhab::Hanafi,
        _ => {
            eprintln!("Invalid madhab: {s}");
            eprintln!("Valid: standard (default), hanafi");
            std::process::exit(1);
        }
    }
}

fn parse_high_lat(s: &str) -> HighLatitudeRule {
    match s.to_lowercase().as_str() {
        "none" => HighLatitudeRule::None,
        "middle-of-night" => HighLatitudeRule::MiddleOfNight,
        "seventh-of-night" => HighLatitudeRule::SeventhOfNight,
        "twilight-angle" => HighLatitudeRule::TwilightAngle,
        _ => {
            eprintln!("Invalid high-latitude rule: {s}");
            eprintln!("Valid: none, middle-of-night, seventh-of-night, twilight-angle");
            std::process::exit(1);
        }
    }
}

/// Format an instant as HH:MM UTC, rounded to the nearest minute.
fn hh_mm(t: &UtcTime) -> String {
    let rounded = UtcTime::from_jd_utc(t.to_jd_utc() + 30.0 / 86_400.0);
    format!("{:02}:{:02}", rounded.hour, rounded.minute)
}

fn build_parameters(
    method: &str,
    madhab: &str,
    high_lat: Option<&str>,
    adjustments: TimeAdjustments,
) -> CalculationParameters {
    let mut params = parse_method(method)
        .parameters()
        .with_madhab(parse_madhab(madhab))
        .with_adjustments(adjustments);
    if let Some(rule) = high_lat {
        params = params.with_high_latitude_rule(parse_high_lat(rule));
    }
    params
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Times {
            date,
            lat,
            lon,
            method,
            madhab,
            high_lat,
            adjust_fajr,
            adjust_sunrise,
            adjust_dhuhr,
            adjust_asr,
            adjust_maghrib,
            adjust_isha,
        } => {
            let utc = parse_date(&date);
            let coords = parse_coordinates(lat, lon);
            let params = build_parameters(
                &method,
                &madhab,
                high_lat.as_deref(),
                TimeAdjustments {
                    fajr: adjust_fajr,
                    sunrise: adjust_sunrise,
                    dhuhr: adjust_dhuhr,
                    asr: adjust_asr,
                    maghrib: adjust_maghrib,
                    isha: adjust_isha,
                },
            );

            let times = PrayerTimes::new(coords, utc, params).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            println!(
                "Prayer times for {:04}-{:02}-{:02} at {:.4} deg, {:.4} deg ({}):\n",
                utc.year,
                utc.month,
                utc.day,
                lat,
                lon,
                params.method.map_or("custom", |m| m.name()),
            );
            for &prayer in Prayer::all() {
                let t = times.time_for(prayer);
                println!("  {:8} {} UTC  ({})", prayer.name(), hh_mm(&t), t);
            }
        }

        Commands::Sunnah {
            date,
            lat,
            lon,
            method,
        } => {
            let utc = parse_date(&date);
            let coords = parse_coordinates(lat, lon);
            let params = parse_method(&method).parameters();

            let today = PrayerTimes::new(coords, utc, params).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let tomorrow = PrayerTimes::new(coords, utc.plus_days(1.0), params)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            let sunnah = SunnahTimes::new(&today, &tomorrow).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            println!(
                "Night markers for {:04}-{:02}-{:02} at {:.4} deg, {:.4} deg:\n",
                utc.year, utc.month, utc.day, lat, lon
            );
            println!(
                "  Maghrib          {} UTC  ({})",
                hh_mm(&today.maghrib),
                today.maghrib
            );
            println!(
                "  Middle of night  {} UTC  ({})",
                hh_mm(&sunnah.middle_of_the_night),
                sunnah.middle_of_the_night
            );
            println!(
                "  Last third       {} UTC  ({})",
                hh_mm(&sunnah.last_third_of_the_night),
                sunnah.last_third_of_the_night
            );
            println!(
                "  Fajr (next day)  {} UTC  ({})",
                hh_mm(&tomorrow.fajr),
                tomorrow.fajr
            );
        }

        Commands::Qibla { lat, lon } => {
            let coords = parse_coordinates(lat, lon);
            let bearing = qibla(&coords);
            println!("Qibla bearing: {bearing:.2} deg from true north");
        }

        Commands::Methods => {
            println!("Built-in calculation methods:\n");
            for &method in Method::all() {
                let p = method.parameters();
                let isha = match p.isha {
                    IshaRule::Angle(a) => format!("isha {a} deg"),
                    IshaRule::Interval(m) => format!("isha maghrib+{m} min"),
                };
                let maghrib = match p.maghrib_angle_deg {
                    Some(a) => format!(", maghrib {a} deg"),
                    None => String::new(),
                };
                println!(
                    "  {:22} fajr {} deg, {}{}",
                    method.name(),
                    p.fajr_angle_deg,
                    isha,
                    maghrib
                );
            }
        }
    }
}

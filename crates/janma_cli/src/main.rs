use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use janma_chart::{BirthRequest, FixedGrahaReadings, compute_birth_chart, run_golden_suite};
use janma_config::EngineConfig;
use janma_time::{OffsetLookup, OffsetSource, UtcMoment, normalize_to_utc, offline};
use janma_vedic_base::{
    GeoLocation, Graha, Rashi, ayanamsha_deg, bhava_from_indices, deg_to_dms, lagna_details,
    nakshatra_from_longitude, nakshatra_from_tropical, rashi_for_bhava, rashi_from_longitude,
    rashi_from_tropical,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "janma", about = "Janma sidereal birth-chart CLI")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Skip the time-zone lookup and use mean solar time
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Rashi from tropical longitude
    RashiTropical {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Nakshatra from tropical longitude
    NakshatraTropical {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Julian Day of a UTC calendar date
    Jd {
        year: i32,
        month: u32,
        day: u32,
        /// Fractional UTC hour of day
        #[arg(long, default_value = "0")]
        hour: f64,
    },
    /// Linear ayanamsha at a Julian Day
    Ayanamsha {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Sidereal lagna (ascendant)
    Lagna {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Whole-sign bhava of a body rashi counted from the lagna rashi
    Bhava {
        /// Body rashi index (0-11)
        body: u8,
        /// Lagna rashi index (0-11)
        lagna: u8,
    },
    /// Convert a local birth time to UTC
    ToUtc {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Compute a birth chart and print it as JSON
    Chart {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Nine sidereal longitudes, Sun..Saturn, Rahu, Ketu (comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        grahas: String,
        /// Retrograde grahas (comma-separated names)
        #[arg(long)]
        retrograde: Option<String>,
    },
    /// Run the golden-value verification suite
    Verify {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn build_lookup(cli: &Cli) -> Result<Box<dyn OffsetLookup>> {
    if cli.offline {
        info!("offline mode; offsets use mean solar time");
        return Ok(Box::new(offline()));
    }
    let config = EngineConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    Ok(janma_tz::offset_lookup(&config.timezone))
}

fn parse_location(lat: f64, lon: f64) -> Result<GeoLocation> {
    GeoLocation::try_new(lat, lon).with_context(|| format!("Invalid location {lat}, {lon}"))
}

const GRAHA_NAMES: &str = "Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu";

fn parse_grahas(list: &str, retrograde: Option<&str>) -> Result<FixedGrahaReadings> {
    let values: Vec<f64> = list
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid longitude: {s:?}"))
        })
        .collect::<Result<_>>()?;
    let Ok(longitudes) = <[f64; 9]>::try_from(values.as_slice()) else {
        bail!("Expected 9 longitudes ({GRAHA_NAMES}), got {}", values.len());
    };

    let mut retro = Vec::new();
    for name in retrograde.into_iter().flat_map(|s| s.split(',')) {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let Some(graha) = Graha::from_name(name) else {
            bail!("Invalid graha name: {name}. Valid: {GRAHA_NAMES}");
        };
        retro.push(graha);
    }

    Ok(FixedGrahaReadings::from_longitudes(longitudes)?.with_retrograde(&retro))
}

fn describe_source(source: &OffsetSource) -> String {
    match source {
        OffsetSource::Lookup => "time-zone lookup".to_string(),
        OffsetSource::MeanSolarFallback { reason } => {
            format!("mean solar time (low confidence: {reason})")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match &cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(*lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi), lord {}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi,
                info.lord().english_name()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(*lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada,
                info.lord().english_name()
            );
        }

        Commands::RashiTropical { lon, jd } => {
            let info = rashi_from_tropical(*lon, *jd);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi, ayanamsha {:.4})",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi,
                ayanamsha_deg(*jd)
            );
        }

        Commands::NakshatraTropical { lon, jd } => {
            let info = nakshatra_from_tropical(*lon, *jd);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, ayanamsha {:.4})",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                ayanamsha_deg(*jd)
            );
        }

        Commands::Dms { deg } => {
            println!("{}", deg_to_dms(*deg));
        }

        Commands::Jd {
            year,
            month,
            day,
            hour,
        } => {
            let moment =
                UtcMoment::new(*year, *month, *day, *hour).context("Invalid UTC date")?;
            println!("{moment} -> JD {:.6}", moment.to_jd());
        }

        Commands::Ayanamsha { jd } => {
            let aya = ayanamsha_deg(*jd);
            println!("{aya:.6} deg ({})", deg_to_dms(aya));
        }

        Commands::Lagna { jd, lat, lon } => {
            let location = parse_location(*lat, *lon)?;
            let lagna = lagna_details(*jd, &location)?;
            let rashi = rashi_from_longitude(lagna.sidereal_deg);
            println!("GMST:       {:.6} deg", lagna.gmst_deg);
            println!("LST:        {:.6} deg", lagna.lst_deg);
            println!("Obliquity:  {:.6} deg", lagna.obliquity_deg);
            println!("Ayanamsha:  {:.6} deg", lagna.ayanamsha_deg);
            println!("Tropical:   {:.6} deg", lagna.tropical_deg);
            println!(
                "Sidereal:   {:.6} deg - {} {}",
                lagna.sidereal_deg,
                rashi.rashi.name(),
                rashi.dms
            );
        }

        Commands::Bhava { body, lagna } => {
            let Some(bhava) = bhava_from_indices(*body, *lagna) else {
                bail!("Invalid rashi index: expected 0-11, got body {body}, lagna {lagna}");
            };
            println!("Bhava {bhava}");
            if let Some(lagna_rashi) = Rashi::from_index(*lagna) {
                for b in 1..=12u8 {
                    if let Some(r) = rashi_for_bhava(b, lagna_rashi) {
                        println!("  {b:>2}: {}", r.name());
                    }
                }
            }
        }

        Commands::ToUtc {
            date,
            time,
            lat,
            lon,
        } => {
            let req = BirthRequest::parse(date, time, *lat, *lon)?;
            let lookup = build_lookup(&cli)?;
            let utc = normalize_to_utc(&req.local, &req.location, lookup.as_ref());
            println!("UTC:    {}", utc.moment);
            println!("Offset: {:+.3} s", utc.offset_seconds);
            println!("JD:     {:.6}", utc.moment.to_jd());
            println!("Source: {}", describe_source(&utc.source));
        }

        Commands::Chart {
            date,
            time,
            lat,
            lon,
            grahas,
            retrograde,
        } => {
            let req = BirthRequest::parse(date, time, *lat, *lon)?;
            let oracle = parse_grahas(grahas, retrograde.as_deref())?;
            let lookup = build_lookup(&cli)?;
            let chart = compute_birth_chart(&req, lookup.as_ref(), &oracle)?;
            if chart.is_low_confidence() {
                warn!(
                    source = %describe_source(chart.utc_source()),
                    "chart computed from an approximate UTC offset"
                );
            }
            let kundli = chart.to_kundli()?;
            println!("{}", kundli.to_json_pretty()?);
        }

        Commands::Verify { json } => {
            let report = run_golden_suite();
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for o in &report.outcomes {
                    let actual = o
                        .actual
                        .map_or_else(|| "error".to_string(), |a| format!("{a:.6}"));
                    println!(
                        "[{}] {:<36} expected {:.6} actual {} (tol {})",
                        if o.passed { "PASS" } else { "FAIL" },
                        o.name,
                        o.expected,
                        actual,
                        o.tolerance
                    );
                    if let Some(e) = &o.error {
                        println!("       {e}");
                    }
                }
            }
            let failed = report.failures().count();
            if failed > 0 {
                bail!("{failed} golden case(s) failed");
            }
        }
    }

    Ok(())
}

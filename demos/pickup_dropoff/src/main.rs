//! pickup_dropoff — one dispatch through the hours-of-service simulator.
//!
//! Usage: `pickup_dropoff [config.json] [output_dir]`
//!
//! The config names the trip start, prior cycle usage, and the three stops.
//! Legs come from `legs_csv` when given, otherwise from the straight-line
//! fallback between the stop coordinates.  With no config file the embedded
//! Chicago → Dallas → Denver dispatch is used.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hos_core::{DutyStatus, GeoPoint, LabelRng, RouteLeg, TripConfig};
use hos_output::{CsvWriter, LedgerOutputObserver};
use hos_sim::{TripPlan, load_legs_csv, run_trip};

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Stop {
    name: String,
    lat:  f64,
    lon:  f64,
}

impl Stop {
    fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Deserialize)]
struct DemoConfig {
    trip:     TripConfig,
    current:  Stop,
    pickup:   Stop,
    dropoff:  Stop,
    /// Two-row CSV (current → pickup, pickup → drop-off) overriding the
    /// straight-line legs.
    #[serde(default)]
    legs_csv: Option<PathBuf>,
}

const DEFAULT_CONFIG: &str = r#"{
    "trip": {
        "start": "2024-06-03T06:00:00",
        "initial_cycle_used_hours": 12.5,
        "label_seed": 42
    },
    "current": { "name": "Chicago, IL", "lat": 41.8781, "lon": -87.6298 },
    "pickup":  { "name": "Dallas, TX",  "lat": 32.7767, "lon": -96.7970 },
    "dropoff": { "name": "Denver, CO",  "lat": 39.7392, "lon": -104.9903 }
}"#;

const DEFAULT_OUTPUT_DIR: &str = "output/pickup_dropoff";

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => DEFAULT_CONFIG.to_owned(),
    };
    serde_json::from_str(&text).context("parsing trip config")
}

fn resolve_legs(cfg: &DemoConfig) -> Result<(RouteLeg, RouteLeg)> {
    if let Some(path) = &cfg.legs_csv {
        let mut legs = load_legs_csv(path)?;
        if legs.len() != 2 {
            bail!("{}: expected 2 legs, found {}", path.display(), legs.len());
        }
        let to_dropoff = legs.remove(1);
        let to_pickup = legs.remove(0);
        return Ok((to_pickup, to_dropoff));
    }

    let speed = cfg.trip.rules.fallback_speed_mph;
    let to_pickup = RouteLeg::straight_line(
        cfg.current.name.as_str(), cfg.current.point(),
        cfg.pickup.name.as_str(), cfg.pickup.point(),
        speed,
    );
    let to_dropoff = RouteLeg::straight_line(
        cfg.pickup.name.as_str(), cfg.pickup.point(),
        cfg.dropoff.name.as_str(), cfg.dropoff.point(),
        speed,
    );
    Ok((to_pickup, to_dropoff))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());

    println!("=== pickup_dropoff — hours-of-service trip simulator ===");

    // 1. Config and legs.
    let cfg = load_config(config_path.as_deref())?;
    let (to_pickup, to_dropoff) = resolve_legs(&cfg)?;
    println!(
        "{} → {} → {}  ({:.0} + {:.0} mi)",
        cfg.current.name, cfg.pickup.name, cfg.dropoff.name,
        to_pickup.distance_miles, to_dropoff.distance_miles,
    );
    let plan = TripPlan::pickup_and_delivery(to_pickup, to_dropoff);

    // 2. Output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let mut obs = LedgerOutputObserver::new(CsvWriter::new(&output_dir)?);

    // 3. Run.
    let started = Instant::now();
    let mut rng = LabelRng::new(cfg.trip.label_seed);
    let log = run_trip(&cfg.trip, &plan, &mut rng, &mut obs)?;
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "simulation done");

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    if !log.is_complete() {
        eprintln!("warning: trip truncated: {:?}", log.outcome);
    }

    // 4. Itinerary.
    println!();
    for line in log.itinerary() {
        println!("  {line}");
    }

    // 5. Daily summary.
    println!();
    println!(
        "{:<12} {:>7} {:>7} {:>7} {:>7} {:>8} {:>10}",
        "Date", "Off", "Sleeper", "Drive", "OnDuty", "Miles", "Avail tmrw",
    );
    println!("{}", "-".repeat(64));
    for day in log.daily_logs() {
        println!(
            "{:<12} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>8.1} {:>10.2}",
            day.date.to_string(),
            day.total(DutyStatus::OffDuty),
            day.total(DutyStatus::SleeperBerth),
            day.total(DutyStatus::Driving),
            day.total(DutyStatus::OnDuty),
            day.miles_driven,
            day.recap.available_tomorrow,
        );
    }
    println!();
    println!("Wrote {} events to {}", obs.events_written(), output_dir.display());

    Ok(())
}

//! CSV leg loader.
//!
//! # CSV format
//!
//! One row per resolved leg, in driving order.
//!
//! ```csv
//! distance_miles,duration_hours,start_location,end_location
//! 300.0,6.0,"Dallas, TX","Oklahoma City, OK"
//! 210.5,3.5,"Oklahoma City, OK","Wichita, KS"
//! ```
//!
//! `duration_hours` may be `0` (the leg is then driven at the fallback
//! speed), but neither numeric column may be negative or non-finite.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use hos_core::RouteLeg;

use crate::{SimError, SimResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LegRecord {
    distance_miles: f64,
    duration_hours: f64,
    start_location: String,
    end_location:   String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load route legs from a CSV file.
pub fn load_legs_csv(path: &Path) -> SimResult<Vec<RouteLeg>> {
    let file = std::fs::File::open(path)?;
    load_legs_reader(file)
}

/// Like [`load_legs_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_legs_reader<R: Read>(reader: R) -> SimResult<Vec<RouteLeg>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut legs = Vec::new();

    for (row, result) in csv_reader.deserialize::<LegRecord>().enumerate() {
        let r = result.map_err(|e| SimError::Parse(format!("row {}: {e}", row + 1)))?;
        let leg = RouteLeg::new(r.distance_miles, r.duration_hours, r.start_location, r.end_location);
        leg.validate()?;
        legs.push(leg);
    }

    Ok(legs)
}

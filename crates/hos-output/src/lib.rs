//! `hos-output` — ledger and daily-log writers for the `hos` simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                          |
//! |-----------|---------|----------------------------------------|
//! | *(none)*  | CSV     | `duty_events.csv`, `daily_logs.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                            |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`LedgerOutputObserver`], which implements `hos_sim::TripObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_output::{CsvWriter, LedgerOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = LedgerOutputObserver::new(writer);
//! let log = run_trip(&config, &plan, &mut rng, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LedgerOutputObserver;
pub use row::{DayRow, EventRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

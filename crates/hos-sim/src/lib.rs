//! `hos-sim` — leg-driving algorithm and trip runner for the `hos` driver-log
//! simulator.
//!
//! # Trip loop
//!
//! ```text
//! for step in plan.steps:
//!   Duty  → append the fixed event (inspection, loading, …)
//!   Drive → drive_leg: step the leg forward in ≤ 1 h increments, inserting
//!           rest breaks, daily resets, cycle restarts and fuel stops, then
//!           append the arrival event.  A truncated leg ends the trip.
//! ```
//!
//! The resulting [`TripLog`] holds the ledger; [`TripLog::daily_logs`] turns
//! it into per-day buckets via `hos-daily`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_trips` runs trips on Rayon's thread pool.         |
//! | `serde`    | `Serialize`/`Deserialize` on plans and outcomes.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_core::{RouteLeg, TripConfig};
//! use hos_sim::{TripPlan, simulate};
//!
//! let plan = TripPlan::pickup_and_delivery(
//!     RouteLeg::new(120.0, 2.0, "Dallas, TX", "Waco, TX"),
//!     RouteLeg::new(180.0, 3.0, "Waco, TX", "Houston, TX"),
//! );
//! let log = simulate(&TripConfig::new(start), &plan)?;
//! for day in log.daily_logs() {
//!     println!("{} {:?}", day.date, day.totals);
//! }
//! ```

pub mod driver;
pub mod error;
pub mod loader;
pub mod observer;
pub mod plan;
pub mod trip;


pub use driver::{LegOutcome, drive_leg};
pub use error::{SimError, SimResult};
pub use loader::{load_legs_csv, load_legs_reader};
pub use observer::{NoopObserver, TripObserver};
pub use plan::{TripPlan, TripStep};
pub use trip::{TripLog, TripOutcome, run_trip, run_trips, simulate};

//! `hos-core` — foundational types for the `hos` driver-log simulator.
//!
//! This crate is a dependency of every other `hos-*` crate.  It has no
//! `hos-*` dependencies and few external ones (`chrono`, `rand`, and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`status`]    | `DutyStatus` — the four log-grid rows                   |
//! | [`event`]     | `DutyEvent` — one immutable ledger entry                |
//! | [`leg`]       | `RouteLeg` — resolved routing input for one leg         |
//! | [`geo`]       | `GeoPoint`, straight-line mileage fallback              |
//! | [`config`]    | `HosRules` (regulatory limits), `TripConfig`            |
//! | [`time`]      | Minute/second/hour conversions on `chrono` types        |
//! | [`label`]     | Region-code extraction, interpolated highway labels     |
//! | [`rng`]       | `LabelRng` — seedable source of cosmetic route numbers  |
//! | [`error`]     | `HosError`, `HosResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod event;
pub mod geo;
pub mod label;
pub mod leg;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HosRules, TripConfig};
pub use error::{HosError, HosResult};
pub use event::DutyEvent;
pub use geo::GeoPoint;
pub use label::{FixedRoute, RouteNumbers, interpolated_label, region_code};
pub use leg::RouteLeg;
pub use rng::LabelRng;
pub use status::DutyStatus;

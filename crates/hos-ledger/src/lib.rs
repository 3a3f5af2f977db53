//! `hos-ledger` — the duty-status ledger and its rolling compliance counters.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `SchedulerState` — clock plus the five rolling counters   |
//! | [`scheduler`] | `Scheduler` — append-only ledger, counter rules, queries  |
//!
//! # Counter model (summary)
//!
//! ```text
//! Driving            → today += h, continuous += h, cycle += h
//! OnDuty             → cycle += h;  ≥ break  ⇒ continuous = 0
//! OffDuty / Sleeper  → ≥ reset   ⇒ today = 0, continuous = 0, window = now
//!                      ≥ break   ⇒ continuous = 0
//!                      ≥ restart ⇒ cycle = 0
//! ```
//!
//! Cycle usage is a single running total: only a restart ever lowers it.
//! There is no per-day history, so it does not decay as days roll out of the
//! 8-day lookback.

pub mod scheduler;
pub mod state;


pub use scheduler::{BreakCheck, Scheduler};
pub use state::SchedulerState;

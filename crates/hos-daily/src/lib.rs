//! `hos-daily` — turns a finished duty ledger into one log sheet per day.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`bucket`]    | `DayBucket`, `DayEvent`, `Recap`                        |
//! | [`aggregate`] | `aggregate`, `aggregate_with`                           |
//!
//! Aggregation is a pure function of the ledger: no state is carried between
//! calls, and calling it twice on the same ledger yields identical output.
//!
//! # Per-day pipeline
//!
//! ```text
//! split events at midnight → bucket by date → sum hours per status
//!   → round to 0.01 h → pad/trim Off Duty so the row totals are 24.00
//!   → recap: used = carried, worked = driving + on duty, carried += worked
//! ```

pub mod aggregate;
pub mod bucket;


pub use aggregate::{aggregate, aggregate_with, format_remark};
pub use bucket::{DayBucket, DayEvent, Recap};

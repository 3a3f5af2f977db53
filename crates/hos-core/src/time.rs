//! Conversions between the simulator's working units and `chrono` types.
//!
//! # Resolution
//!
//! Ledger durations are stored as whole seconds.  Fixed events (breaks,
//! resets, inspections) are whole minutes; partial driving steps are
//! fractional hours and get rounded to the nearest second here.  Counters
//! are always updated from the *stored* duration, so the clock and the
//! counters never drift apart.

use chrono::{NaiveDateTime, TimeDelta, Timelike};

pub const SECS_PER_MINUTE: i64 = 60;
pub const SECS_PER_HOUR:   i64 = 3_600;

/// Upper bound on any fixed-length event or duty step (one week).
pub const MAX_EVENT_MINUTES: i64 = 7 * 24 * 60;

/// Round `minutes` to whole seconds.  Negative and non-finite input yields 0.
pub fn minutes_to_secs(minutes: f64) -> i64 {
    if !minutes.is_finite() || minutes <= 0.0 {
        return 0;
    }
    (minutes * SECS_PER_MINUTE as f64).round() as i64
}

/// Round `hours` to whole seconds.  Negative and non-finite input yields 0.
#[inline]
pub fn hours_to_secs(hours: f64) -> i64 {
    minutes_to_secs(hours * 60.0)
}

#[inline]
pub fn secs_to_hours(secs: i64) -> f64 {
    secs as f64 / SECS_PER_HOUR as f64
}

/// Fractional hours in `delta` (sub-second part ignored).
#[inline]
pub fn delta_hours(delta: TimeDelta) -> f64 {
    secs_to_hours(delta.num_seconds())
}

/// Position within the calendar day, in fractional hours (`0.0 ..< 24.0`).
pub fn hour_of_day(t: NaiveDateTime) -> f64 {
    let secs = t.num_seconds_from_midnight() as i64;
    secs_to_hours(secs)
}

/// The first instant of the calendar day after `t`.
pub fn next_midnight(t: NaiveDateTime) -> NaiveDateTime {
    let tomorrow = t.date().succ_opt().unwrap_or(t.date());
    tomorrow.and_time(chrono::NaiveTime::MIN)
}

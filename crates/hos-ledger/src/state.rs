//! Per-trip clock and counter state.

use chrono::NaiveDateTime;

use hos_core::time::delta_hours;

/// The simulation clock and every rolling counter the rules consult.
///
/// Owned by exactly one [`Scheduler`][crate::Scheduler]; never shared across
/// trips.  All hour/mile fields are `≥ 0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerState {
    /// End of the last appended event (start of the next one).
    pub current_time:           NaiveDateTime,
    /// Running on-duty + driving total; lowered only by a cycle restart.
    pub cycle_used_hours:       f64,
    /// Driving since the last qualifying break.
    pub drive_continuous_hours: f64,
    /// Driving since the last daily reset.
    pub drive_today_hours:      f64,
    /// Start of the current on-duty window (end of the last daily reset).
    pub on_duty_window_start:   NaiveDateTime,
    /// Miles driven since the last fueling stop.
    pub miles_since_fuel:       f64,
}

impl SchedulerState {
    pub fn new(start: NaiveDateTime, cycle_used_hours: f64) -> Self {
        Self {
            current_time:           start,
            cycle_used_hours:       cycle_used_hours.max(0.0),
            drive_continuous_hours: 0.0,
            drive_today_hours:      0.0,
            on_duty_window_start:   start,
            miles_since_fuel:       0.0,
        }
    }

    /// Hours elapsed in the current on-duty window.
    #[inline]
    pub fn window_elapsed_hours(&self) -> f64 {
        delta_hours(self.current_time - self.on_duty_window_start)
    }
}

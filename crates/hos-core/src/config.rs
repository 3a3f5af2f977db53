//! Regulatory rule set and per-trip configuration.
//!
//! Typically loaded from a JSON file by the application crate and passed to
//! the trip runner.  Every field of [`HosRules`] has a default, so a config
//! file only needs to name what it overrides.

use chrono::NaiveDateTime;

use crate::time::MAX_EVENT_MINUTES;
use crate::{HosError, HosResult};

// ── HosRules ──────────────────────────────────────────────────────────────────

/// Hours-of-service limits and fixed event lengths.
///
/// The `*_minutes` fields do double duty: they are both the length of the
/// event the simulator inserts and the minimum length at which an event of
/// the matching status qualifies for the corresponding counter reset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosRules {
    /// Continuous driving allowed before a break is required.
    pub max_continuous_driving_hours: f64,
    pub break_minutes:                i64,

    /// Daily driving cap.
    pub max_driving_hours:            f64,
    /// On-duty window, measured from the end of the last daily reset.
    pub duty_window_hours:            f64,
    pub daily_reset_minutes:          i64,

    /// Cycle cap (on-duty + driving hours).
    pub cycle_limit_hours:            f64,
    /// Days in the cycle; only used for the recap label.
    pub cycle_days:                   u32,
    pub cycle_restart_minutes:        i64,

    pub fuel_interval_miles:          f64,
    pub fueling_minutes:              i64,
    /// Post-leg on-duty time at the destination.
    pub arrival_minutes:              i64,

    /// Speed assumed for legs whose routed duration is zero or negative.
    pub fallback_speed_mph:           f64,
    /// Speed the daily aggregator uses to turn driving hours into miles.
    pub log_speed_mph:                f64,

    /// Iteration ceiling for one leg.  Reaching it truncates the leg.
    pub max_leg_iterations:           u32,
    /// Region code used in highway labels when a place name has none.
    pub default_region:               String,
}

impl Default for HosRules {
    /// Property-carrying driver, 70-hour/8-day cycle.
    fn default() -> Self {
        Self {
            max_continuous_driving_hours: 8.0,
            break_minutes:                30,
            max_driving_hours:            11.0,
            duty_window_hours:            14.0,
            daily_reset_minutes:          600,
            cycle_limit_hours:            70.0,
            cycle_days:                   8,
            cycle_restart_minutes:        2_040,
            fuel_interval_miles:          1_000.0,
            fueling_minutes:              30,
            arrival_minutes:              15,
            fallback_speed_mph:           50.0,
            log_speed_mph:                50.0,
            max_leg_iterations:           500,
            default_region:               "US".to_owned(),
        }
    }
}

impl HosRules {
    /// Recap header label, e.g. `"70 / 8"`.
    pub fn cycle_label(&self) -> String {
        format!("{} / {}", self.cycle_limit_hours, self.cycle_days)
    }

    pub fn validate(&self) -> HosResult<()> {
        let hours = [
            ("max_continuous_driving_hours", self.max_continuous_driving_hours),
            ("max_driving_hours",            self.max_driving_hours),
            ("duty_window_hours",            self.duty_window_hours),
            ("cycle_limit_hours",            self.cycle_limit_hours),
            ("fuel_interval_miles",          self.fuel_interval_miles),
            ("fallback_speed_mph",           self.fallback_speed_mph),
            ("log_speed_mph",                self.log_speed_mph),
        ];
        for (name, value) in hours {
            if !value.is_finite() || value <= 0.0 {
                return Err(HosError::Config(format!("{name} must be finite and > 0 (got {value})")));
            }
        }

        let minutes = [
            ("break_minutes",         self.break_minutes),
            ("daily_reset_minutes",   self.daily_reset_minutes),
            ("cycle_restart_minutes", self.cycle_restart_minutes),
            ("fueling_minutes",       self.fueling_minutes),
        ];
        for (name, value) in minutes {
            if value <= 0 || value > MAX_EVENT_MINUTES {
                return Err(HosError::Config(format!(
                    "{name} must be in 1..={MAX_EVENT_MINUTES} (got {value})"
                )));
            }
        }
        if !(0..=MAX_EVENT_MINUTES).contains(&self.arrival_minutes) {
            return Err(HosError::Config(format!(
                "arrival_minutes must be in 0..={MAX_EVENT_MINUTES} (got {})",
                self.arrival_minutes
            )));
        }
        if self.max_leg_iterations == 0 {
            return Err(HosError::Config("max_leg_iterations must be > 0".into()));
        }
        Ok(())
    }
}

// ── TripConfig ────────────────────────────────────────────────────────────────

/// Everything a single trip simulation needs besides its itinerary.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripConfig {
    /// Local wall-clock time of the first event.
    pub start: NaiveDateTime,

    /// Cycle hours already used before this trip starts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_cycle_used_hours: f64,

    /// Seed for the cosmetic highway-number draw.  Same seed, same ledger.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label_seed: u64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: HosRules,
}

impl TripConfig {
    /// Default rules, zero prior cycle usage, seed 0.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            initial_cycle_used_hours: 0.0,
            label_seed: 0,
            rules: HosRules::default(),
        }
    }

    pub fn validate(&self) -> HosResult<()> {
        let used = self.initial_cycle_used_hours;
        if !used.is_finite() || used < 0.0 {
            return Err(HosError::Config(format!(
                "initial_cycle_used_hours must be finite and ≥ 0 (got {used})"
            )));
        }
        self.rules.validate()
    }
}

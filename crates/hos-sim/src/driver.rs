//! The leg-driving algorithm.
//!
//! # Step loop
//!
//! ```text
//! while miles remain:
//!   ① step   = min(1 h, remaining)
//!   ② fuel   — at the fuel interval already?  fuel and restart the iteration;
//!              otherwise shrink the step so it ends exactly at the interval
//!   ③ break  — continuous limit falls inside the step?
//!              drive up to it, insert a rest break, restart the iteration
//!   ④ reset  — daily cap or duty window exceeded?  insert a sleeper reset
//!   ⑤ cycle  — cycle cap exceeded?  insert a cycle restart
//!   ⑥ drive the step; fuel if the interval was reached
//! arrival on-duty event at the destination
//! ```
//!
//! The check order is fixed.  When several limits are hit in the same step,
//! it decides which corrective event comes first, so reordering it changes
//! the ledger.
//!
//! # Termination
//!
//! Every iteration either drives a positive distance or appends a corrective
//! event that clears the counter which triggered it, so simulated time always
//! advances.  The iteration ceiling in [`HosRules::max_leg_iterations`] is a
//! backstop for pathological rule sets; hitting it ends the leg with
//! [`LegOutcome::Truncated`] and no arrival event.

use tracing::{debug, warn};

use hos_core::time::hours_to_secs;
use hos_core::{DutyStatus, HosRules, RouteLeg, RouteNumbers, interpolated_label, region_code};
use hos_ledger::Scheduler;

use crate::TripObserver;

/// Longest single driving step.
pub const MAX_STEP_HOURS: f64 = 1.0;
/// Partial drives shorter than this are skipped (0.6 minutes).
pub const MIN_PARTIAL_HOURS: f64 = 0.01;
/// Remaining distance below this counts as arrived.
pub const ARRIVED_EPSILON_MILES: f64 = 1e-6;

pub const REMARK_DRIVING: &str = "Driving";
pub const REMARK_ARRIVED: &str = "Arrived / Post-Trip";
pub const LOCATION_REST_AREA: &str = "Rest Area";
pub const LOCATION_TRUCK_STOP: &str = "Truck Stop";
pub const LOCATION_FUEL_STATION: &str = "Fuel Station";

// ── LegOutcome ────────────────────────────────────────────────────────────────

/// How a call to [`drive_leg`] ended.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegOutcome {
    /// The full distance was driven and the arrival event appended.
    Completed { iterations: u32 },
    /// The iteration ceiling was hit with `remaining_miles` still to go.
    Truncated { remaining_miles: f64, iterations: u32 },
}

impl LegOutcome {
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, LegOutcome::Completed { .. })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Drive `leg` forward on `sched`, inserting rest breaks, daily resets, cycle
/// restarts, and fuel stops as the counters demand.
///
/// `numbers` supplies the cosmetic route numbers for driving-segment labels;
/// `observer` sees every appended event.
pub fn drive_leg<N, O>(
    sched:    &mut Scheduler,
    leg:      &RouteLeg,
    numbers:  &mut N,
    observer: &mut O,
) -> LegOutcome
where
    N: RouteNumbers + ?Sized,
    O: TripObserver + ?Sized,
{
    let rules = sched.rules().clone();
    let speed = leg.avg_speed_mph(rules.fallback_speed_mph);
    let distance = leg.distance_miles.max(0.0);
    let origin_region = region_code(&leg.start_location);
    let dest_region = region_code(&leg.end_location);

    let mut remaining = distance;
    let mut iterations = 0_u32;

    // Appends a driving segment starting at the current progress point.
    let mut drive = |sched: &mut Scheduler, observer: &mut O, hours: f64, miles: f64, remaining: f64| {
        let progress = 1.0 - remaining / distance;
        let label = interpolated_label(
            progress, origin_region, dest_region, &rules.default_region, &mut *numbers,
        );
        emit(sched, observer, DutyStatus::Driving, hours_to_secs(hours), label, REMARK_DRIVING);
        sched.record_miles(miles);
    };

    while remaining > ARRIVED_EPSILON_MILES {
        if iterations >= rules.max_leg_iterations {
            warn!(
                from = %leg.start_location,
                to = %leg.end_location,
                remaining_miles = remaining,
                iterations,
                "leg truncated at iteration ceiling"
            );
            return LegOutcome::Truncated { remaining_miles: remaining, iterations };
        }
        iterations += 1;

        // ① Candidate step.  The last step takes the exact remainder.
        let remaining_hours = remaining / speed;
        let (mut step_hours, mut step_miles) = if remaining_hours <= MAX_STEP_HOURS {
            (remaining_hours, remaining)
        } else {
            (MAX_STEP_HOURS, MAX_STEP_HOURS * speed)
        };

        // ② Fuel: only ever shortens the step, however close the mark is.
        let miles_to_fuel = rules.fuel_interval_miles - sched.state().miles_since_fuel;
        if miles_to_fuel <= ARRIVED_EPSILON_MILES {
            fuel_stop(sched, observer, &rules);
            continue;
        }
        let mut ends_at_fuel = false;
        if step_miles > miles_to_fuel {
            step_hours = miles_to_fuel / speed;
            step_miles = miles_to_fuel;
            ends_at_fuel = true;
        }

        // ③ Continuous-driving break.
        let check = sched.needs_break(step_hours);
        if check.required && check.hours_until_required < step_hours {
            let partial = check.hours_until_required;
            if partial > MIN_PARTIAL_HOURS {
                let partial_miles = partial * speed;
                drive(sched, observer, partial, partial_miles, remaining);
                remaining -= partial_miles;
            }
            debug!(at = %sched.current_time(), "inserting rest break");
            emit(
                sched, observer, DutyStatus::OffDuty,
                minutes_secs(rules.break_minutes),
                LOCATION_REST_AREA, break_remark(&rules),
            );
            continue;
        }

        // ④ 11-hour driving cap / 14-hour window.
        if sched.needs_daily_reset(step_hours, step_hours) {
            debug!(at = %sched.current_time(), "inserting daily reset");
            emit(
                sched, observer, DutyStatus::SleeperBerth,
                minutes_secs(rules.daily_reset_minutes),
                LOCATION_TRUCK_STOP, reset_remark(&rules),
            );
            continue;
        }

        // ⑤ Cycle cap.
        if sched.cycle_would_violate(step_hours) {
            debug!(at = %sched.current_time(), "inserting cycle restart");
            emit(
                sched, observer, DutyStatus::OffDuty,
                minutes_secs(rules.cycle_restart_minutes),
                LOCATION_TRUCK_STOP, restart_remark(&rules),
            );
            continue;
        }

        // ⑥ Drive the step.
        drive(sched, observer, step_hours, step_miles, remaining);
        remaining -= step_miles;

        if ends_at_fuel || sched.state().miles_since_fuel >= rules.fuel_interval_miles {
            fuel_stop(sched, observer, &rules);
        }
    }

    emit(
        sched, observer, DutyStatus::OnDuty,
        minutes_secs(rules.arrival_minutes),
        leg.end_location.clone(), REMARK_ARRIVED,
    );
    LegOutcome::Completed { iterations }
}

/// Append one event and report it to `observer`.
pub(crate) fn emit<O: TripObserver + ?Sized>(
    sched:    &mut Scheduler,
    observer: &mut O,
    status:   DutyStatus,
    secs:     i64,
    location: impl Into<String>,
    remark:   impl Into<String>,
) {
    let event = sched.add_event_secs(status, secs, location, remark);
    observer.on_event(event);
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fuel_stop<O: TripObserver + ?Sized>(sched: &mut Scheduler, observer: &mut O, rules: &HosRules) {
    debug!(at = %sched.current_time(), "inserting fuel stop");
    emit(
        sched, observer, DutyStatus::OnDuty,
        minutes_secs(rules.fueling_minutes),
        LOCATION_FUEL_STATION, "Fueling - On Duty",
    );
    sched.reset_fuel();
}

#[inline]
fn minutes_secs(minutes: i64) -> i64 {
    minutes * 60
}

fn break_remark(rules: &HosRules) -> String {
    format!("{}-min Rest Break", rules.break_minutes)
}

fn reset_remark(rules: &HosRules) -> String {
    format!("{}-hour Sleeper Berth Reset", rules.daily_reset_minutes / 60)
}

fn restart_remark(rules: &HosRules) -> String {
    format!("{}-Hour Cycle Restart", rules.cycle_restart_minutes / 60)
}

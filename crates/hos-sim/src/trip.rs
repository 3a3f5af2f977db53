//! Trip runner: executes a [`TripPlan`] against a fresh [`Scheduler`].

use tracing::{debug, info};

use hos_core::{DutyEvent, HosRules, LabelRng, RouteNumbers, TripConfig};
use hos_daily::{DayBucket, aggregate_with};
use hos_ledger::Scheduler;

use crate::driver::{drive_leg, emit};
use crate::{LegOutcome, NoopObserver, SimResult, TripObserver, TripPlan, TripStep};

// ── TripOutcome ───────────────────────────────────────────────────────────────

/// Whether every step of the plan made it into the ledger.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TripOutcome {
    Completed,
    /// Leg `leg_index` hit the iteration ceiling; later steps were not run.
    Truncated { leg_index: usize, remaining_miles: f64 },
}

// ── TripLog ───────────────────────────────────────────────────────────────────

/// The finished ledger of one trip plus what is needed to aggregate it.
#[derive(Clone, Debug)]
pub struct TripLog {
    pub events:                   Vec<DutyEvent>,
    pub initial_cycle_used_hours: f64,
    pub rules:                    HosRules,
    pub outcome:                  TripOutcome,
}

impl TripLog {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.outcome == TripOutcome::Completed
    }

    /// One [`DayBucket`] per calendar day, recomputed on every call.
    pub fn daily_logs(&self) -> Vec<DayBucket> {
        aggregate_with(&self.events, self.initial_cycle_used_hours, &self.rules)
    }

    /// `"{remark} at HH:MM"` for every event, in ledger order.
    pub fn itinerary(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| format!("{} at {}", e.remark, e.start.format("%H:%M")))
            .collect()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Run `plan` from `config.start`, drawing highway numbers from `numbers`.
///
/// Fails only on invalid configuration or plan; the simulation itself is
/// total.  A leg that exhausts the iteration ceiling ends the trip early with
/// [`TripOutcome::Truncated`].
pub fn run_trip<N, O>(
    config:   &TripConfig,
    plan:     &TripPlan,
    numbers:  &mut N,
    observer: &mut O,
) -> SimResult<TripLog>
where
    N: RouteNumbers + ?Sized,
    O: TripObserver + ?Sized,
{
    config.validate()?;
    plan.validate()?;

    info!(
        start = %config.start,
        steps = plan.steps.len(),
        miles = plan.total_miles(),
        cycle_used = config.initial_cycle_used_hours,
        "trip started"
    );
    observer.on_trip_start(config);

    let mut sched = Scheduler::new(
        config.start,
        config.initial_cycle_used_hours,
        config.rules.clone(),
    );
    let mut outcome = TripOutcome::Completed;
    let mut leg_index = 0;

    for step in &plan.steps {
        match step {
            TripStep::Duty { status, minutes, location, remark } => {
                emit(&mut sched, observer, *status, minutes * 60, location.clone(), remark.clone());
            }
            TripStep::Drive(leg) => {
                observer.on_leg_start(leg_index, leg);
                debug!(
                    leg = leg_index,
                    from = %leg.start_location,
                    to = %leg.end_location,
                    miles = leg.distance_miles,
                    "driving leg"
                );
                let result = drive_leg(&mut sched, leg, numbers, observer);
                observer.on_leg_end(leg_index, &result);

                if let LegOutcome::Truncated { remaining_miles, .. } = result {
                    outcome = TripOutcome::Truncated { leg_index, remaining_miles };
                    break;
                }
                leg_index += 1;
            }
        }
    }

    let events = sched.into_events();
    info!(events = events.len(), outcome = ?outcome, "trip finished");
    observer.on_trip_end(&events, &outcome);

    Ok(TripLog {
        events,
        initial_cycle_used_hours: config.initial_cycle_used_hours,
        rules: config.rules.clone(),
        outcome,
    })
}

/// [`run_trip`] with a [`LabelRng`] seeded from `config.label_seed` and no
/// observer.
pub fn simulate(config: &TripConfig, plan: &TripPlan) -> SimResult<TripLog> {
    let mut rng = LabelRng::new(config.label_seed);
    run_trip(config, plan, &mut rng, &mut NoopObserver)
}

/// Run independent trips, each with its own scheduler and its own
/// [`LabelRng::for_trip`] stream.
///
/// With the `parallel` Cargo feature the trips run on Rayon's thread pool;
/// results are returned in input order either way.
pub fn run_trips(trips: &[(TripConfig, TripPlan)]) -> Vec<SimResult<TripLog>> {
    let run_one = |(i, (config, plan)): (usize, &(TripConfig, TripPlan))| {
        let mut rng = LabelRng::for_trip(config.label_seed, i);
        run_trip(config, plan, &mut rng, &mut NoopObserver)
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        trips.par_iter().enumerate().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        trips.iter().enumerate().map(run_one).collect()
    }
}

//! `Scheduler` — the append-only duty ledger and its counter rules.
//!
//! The scheduler owns the trip clock.  Every mutation goes through
//! [`Scheduler::add_event`], which appends one event starting at the current
//! time, advances the clock to its end, and then updates the counters for
//! the event's status.  The three query methods tell the leg driver when a
//! corrective event is due; they never mutate anything.

use chrono::NaiveDateTime;
use tracing::trace;

use hos_core::time::{SECS_PER_MINUTE, minutes_to_secs, secs_to_hours};
use hos_core::{DutyEvent, DutyStatus, HosRules};

use crate::SchedulerState;

// ── BreakCheck ────────────────────────────────────────────────────────────────

/// Result of [`Scheduler::needs_break`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BreakCheck {
    /// `true` if driving the requested hours would exceed the continuous
    /// driving limit.
    pub required: bool,
    /// Driving hours left before the limit is reached (never negative).
    pub hours_until_required: f64,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Event ledger plus rolling counters for one trip.
///
/// Ledger invariant: consecutive events abut exactly
/// (`events[i].end == events[i + 1].start`), because each event starts at
/// the clock and the clock only moves to that event's end.
#[derive(Clone, Debug)]
pub struct Scheduler {
    state:  SchedulerState,
    events: Vec<DutyEvent>,
    rules:  HosRules,
}

impl Scheduler {
    /// Start a trip at `start` with `cycle_used_hours` already consumed.
    pub fn new(start: NaiveDateTime, cycle_used_hours: f64, rules: HosRules) -> Self {
        Self {
            state: SchedulerState::new(start, cycle_used_hours),
            events: Vec::new(),
            rules,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    #[inline]
    pub fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// The ledger so far, in append order.
    #[inline]
    pub fn events(&self) -> &[DutyEvent] {
        &self.events
    }

    #[inline]
    pub fn current_time(&self) -> NaiveDateTime {
        self.state.current_time
    }

    /// Consume the scheduler, keeping only the finished ledger.
    pub fn into_events(self) -> Vec<DutyEvent> {
        self.events
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append an event of `duration_minutes` (rounded to whole seconds) and
    /// apply the counter rules for `status`.
    pub fn add_event(
        &mut self,
        status:           DutyStatus,
        duration_minutes: f64,
        location:         impl Into<String>,
        remark:           impl Into<String>,
    ) -> &DutyEvent {
        self.add_event_secs(status, minutes_to_secs(duration_minutes), location, remark)
    }

    /// Like [`add_event`][Self::add_event] with an exact duration in seconds.
    pub fn add_event_secs(
        &mut self,
        status:        DutyStatus,
        duration_secs: i64,
        location:      impl Into<String>,
        remark:        impl Into<String>,
    ) -> &DutyEvent {
        let event = DutyEvent::new(status, self.state.current_time, duration_secs, location, remark);
        self.state.current_time = event.end;
        self.apply_counters(status, event.duration_secs);

        trace!(
            status = %status,
            start = %event.start,
            minutes = event.duration_minutes(),
            cycle_used = self.state.cycle_used_hours,
            drive_today = self.state.drive_today_hours,
            drive_continuous = self.state.drive_continuous_hours,
            "ledger append"
        );

        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Add driven distance to the fuel counter.
    #[inline]
    pub fn record_miles(&mut self, miles: f64) {
        self.state.miles_since_fuel += miles.max(0.0);
    }

    /// Zero the fuel counter after a fueling stop.
    #[inline]
    pub fn reset_fuel(&mut self) {
        self.state.miles_since_fuel = 0.0;
    }

    fn apply_counters(&mut self, status: DutyStatus, secs: i64) {
        let hours = secs_to_hours(secs);
        let qualifies = |minutes: i64| secs >= minutes * SECS_PER_MINUTE;
        let s = &mut self.state;

        match status {
            DutyStatus::Driving => {
                s.drive_today_hours += hours;
                s.drive_continuous_hours += hours;
                s.cycle_used_hours += hours;
            }
            DutyStatus::OnDuty => {
                s.cycle_used_hours += hours;
                if qualifies(self.rules.break_minutes) {
                    s.drive_continuous_hours = 0.0;
                }
            }
            DutyStatus::OffDuty | DutyStatus::SleeperBerth => {
                if qualifies(self.rules.daily_reset_minutes) {
                    s.drive_today_hours = 0.0;
                    s.drive_continuous_hours = 0.0;
                    s.on_duty_window_start = s.current_time;
                }
                if qualifies(self.rules.break_minutes) {
                    s.drive_continuous_hours = 0.0;
                }
                if qualifies(self.rules.cycle_restart_minutes) {
                    s.cycle_used_hours = 0.0;
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Would driving `needed_drive_hours` more break the continuous-driving
    /// limit?
    pub fn needs_break(&self, needed_drive_hours: f64) -> BreakCheck {
        let limit = self.rules.max_continuous_driving_hours;
        let continuous = self.state.drive_continuous_hours;
        BreakCheck {
            required:             continuous + needed_drive_hours > limit,
            hours_until_required: (limit - continuous).max(0.0),
        }
    }

    /// Would the next `needed_drive_hours` of driving break the daily driving
    /// cap, or `needed_total_hours` of duty run past the on-duty window?
    pub fn needs_daily_reset(&self, needed_drive_hours: f64, needed_total_hours: f64) -> bool {
        let s = &self.state;
        s.drive_today_hours + needed_drive_hours > self.rules.max_driving_hours
            || s.window_elapsed_hours() + needed_total_hours > self.rules.duty_window_hours
    }

    /// Would `needed_hours` more on-duty time exceed the cycle cap?
    pub fn cycle_would_violate(&self, needed_hours: f64) -> bool {
        self.state.cycle_used_hours + needed_hours > self.rules.cycle_limit_hours
    }
}

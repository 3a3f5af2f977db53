//! `TripPlan` — the ordered itinerary a trip runner executes.

use hos_core::time::MAX_EVENT_MINUTES;
use hos_core::{DutyStatus, HosError, HosResult, RouteLeg};

/// One itinerary entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TripStep {
    /// Drive a resolved leg, letting the rules insert whatever stops it needs.
    Drive(RouteLeg),
    /// A fixed administrative event (inspection, loading, unloading, …).
    Duty {
        status:   DutyStatus,
        minutes:  i64,
        location: String,
        remark:   String,
    },
}

/// An ordered list of [`TripStep`]s.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    pub steps: Vec<TripStep>,
}

impl TripPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drive step.
    pub fn drive(mut self, leg: RouteLeg) -> Self {
        self.steps.push(TripStep::Drive(leg));
        self
    }

    /// Append a fixed on-duty (not driving) event.
    pub fn on_duty(self, minutes: i64, location: impl Into<String>, remark: impl Into<String>) -> Self {
        self.duty(DutyStatus::OnDuty, minutes, location, remark)
    }

    /// Append a fixed event of any status.
    pub fn duty(
        mut self,
        status:   DutyStatus,
        minutes:  i64,
        location: impl Into<String>,
        remark:   impl Into<String>,
    ) -> Self {
        self.steps.push(TripStep::Duty {
            status,
            minutes,
            location: location.into(),
            remark:   remark.into(),
        });
        self
    }

    /// The standard dispatch: pre-trip at the current location, drive to the
    /// shipper, load, drive to the receiver, unload, post-trip.
    ///
    /// Place names come from the legs: `to_pickup` runs current → pickup and
    /// `to_dropoff` runs pickup → drop-off.
    pub fn pickup_and_delivery(to_pickup: RouteLeg, to_dropoff: RouteLeg) -> Self {
        let current = to_pickup.start_location.clone();
        let pickup = to_pickup.end_location.clone();
        let dropoff = to_dropoff.end_location.clone();
        Self::new()
            .on_duty(15, current, "Pre-trip Inspection")
            .drive(to_pickup)
            .on_duty(60, pickup, "Loading")
            .drive(to_dropoff)
            .on_duty(60, dropoff.clone(), "Unloading")
            .on_duty(15, dropoff, "Post-trip Inspection")
    }

    /// Drive steps only, in order.
    pub fn legs(&self) -> impl Iterator<Item = &RouteLeg> {
        self.steps.iter().filter_map(|s| match s {
            TripStep::Drive(leg) => Some(leg),
            TripStep::Duty { .. } => None,
        })
    }

    pub fn total_miles(&self) -> f64 {
        self.legs().map(|l| l.distance_miles.max(0.0)).sum()
    }

    pub fn validate(&self) -> HosResult<()> {
        for step in &self.steps {
            match step {
                TripStep::Drive(leg) => leg.validate()?,
                TripStep::Duty { minutes, remark, .. }
                    if !(0..=MAX_EVENT_MINUTES).contains(minutes) =>
                {
                    return Err(HosError::Config(format!(
                        "duty step {remark:?} must be 0..={MAX_EVENT_MINUTES} min (got {minutes})"
                    )));
                }
                TripStep::Duty { .. } => {}
            }
        }
        Ok(())
    }
}

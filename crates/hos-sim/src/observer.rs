//! Trip observer trait for progress reporting and data collection.

use hos_core::{DutyEvent, RouteLeg, TripConfig};

use crate::{LegOutcome, TripOutcome};

/// Callbacks invoked by [`run_trip`][crate::run_trip] as the ledger grows.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — remark printer
///
/// ```rust,ignore
/// struct RemarkPrinter;
///
/// impl TripObserver for RemarkPrinter {
///     fn on_event(&mut self, event: &DutyEvent) {
///         println!("{} {}", event.start.format("%H:%M"), event.remark);
///     }
/// }
/// ```
pub trait TripObserver {
    /// Called once before the first event is appended.
    fn on_trip_start(&mut self, _config: &TripConfig) {}

    /// Called before a leg is driven.  `leg_index` counts drive steps only.
    fn on_leg_start(&mut self, _leg_index: usize, _leg: &RouteLeg) {}

    /// Called after every append, with the event just added to the ledger.
    fn on_event(&mut self, _event: &DutyEvent) {}

    fn on_leg_end(&mut self, _leg_index: usize, _outcome: &LegOutcome) {}

    /// Called once with the finished ledger.
    fn on_trip_end(&mut self, _events: &[DutyEvent], _outcome: &TripOutcome) {}
}

/// A [`TripObserver`] that does nothing.  Use when you need to call
/// `run_trip` but don't want callbacks.
pub struct NoopObserver;

impl TripObserver for NoopObserver {}

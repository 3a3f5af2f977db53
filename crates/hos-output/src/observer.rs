//! `LedgerOutputObserver<W>` — bridges `TripObserver` to an `OutputWriter`.

use tracing::debug;

use hos_core::{DutyEvent, HosRules, TripConfig};
use hos_daily::aggregate_with;
use hos_sim::{TripObserver, TripOutcome};

use crate::row::{DayRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TripObserver`] that streams ledger events to any [`OutputWriter`]
/// backend and writes the daily logs once the trip ends.
///
/// Errors from the writer are stored internally because `TripObserver`
/// methods have no return value.  After `run_trip` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct LedgerOutputObserver<W: OutputWriter> {
    writer:        W,
    next_seq:      u32,
    initial_cycle: f64,
    rules:         HosRules,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> LedgerOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_seq:      0,
            initial_cycle: 0.0,
            rules:         HosRules::default(),
            last_error:    None,
        }
    }

    /// Take the stored write error (if any) after `run_trip` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of event rows handed to the writer so far.
    pub fn events_written(&self) -> u32 {
        self.next_seq
    }

    /// Unwrap the inner writer (e.g. to inspect files after the trip).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TripObserver for LedgerOutputObserver<W> {
    fn on_trip_start(&mut self, config: &TripConfig) {
        self.initial_cycle = config.initial_cycle_used_hours;
        self.rules = config.rules.clone();
        self.next_seq = 0;
    }

    fn on_event(&mut self, event: &DutyEvent) {
        let row = EventRow::from_event(self.next_seq, event);
        self.next_seq += 1;
        let result = self.writer.write_events(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_trip_end(&mut self, events: &[DutyEvent], outcome: &TripOutcome) {
        let days: Vec<DayRow> = aggregate_with(events, self.initial_cycle, &self.rules)
            .iter()
            .map(DayRow::from_bucket)
            .collect();
        debug!(days = days.len(), outcome = ?outcome, "writing daily logs");

        let result = self.writer.write_days(&days);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DayRow, EventRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// When driven by [`LedgerOutputObserver`][crate::LedgerOutputObserver],
/// errors are stored by the observer and retrieved with
/// [`take_error`][crate::LedgerOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of ledger events.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write a batch of daily-log rows.
    fn write_days(&mut self, rows: &[DayRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

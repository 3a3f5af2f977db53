//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `duty_events.csv`
//! - `daily_logs.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{DayRow, EventRow, OutputResult};
use crate::writer::OutputWriter;

pub const EVENTS_FILE: &str = "duty_events.csv";
pub const DAYS_FILE:   &str = "daily_logs.csv";

/// Writes a ledger and its daily logs to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    days:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["seq", "status", "start", "end", "duration_secs", "location", "remark"])?;

        let mut days = Writer::from_path(dir.join(DAYS_FILE))?;
        days.write_record([
            "date",
            "off_duty_hours",
            "sleeper_hours",
            "driving_hours",
            "on_duty_hours",
            "miles_driven",
            "from_city",
            "to_city",
            "cycle_limit",
            "used_last_7",
            "available_today",
            "worked_today",
            "total_since_start",
            "available_tomorrow",
        ])?;

        Ok(Self { events, days, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.seq.to_string(),
                row.status.to_owned(),
                row.start.clone(),
                row.end.clone(),
                row.duration_secs.to_string(),
                row.location.clone(),
                row.remark.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_days(&mut self, rows: &[DayRow]) -> OutputResult<()> {
        for row in rows {
            self.days.write_record(&[
                row.date.clone(),
                format!("{:.2}", row.off_duty_hours),
                format!("{:.2}", row.sleeper_hours),
                format!("{:.2}", row.driving_hours),
                format!("{:.2}", row.on_duty_hours),
                format!("{:.1}", row.miles_driven),
                row.from_city.clone(),
                row.to_city.clone(),
                row.cycle_limit.clone(),
                format!("{:.2}", row.used_last_7),
                format!("{:.2}", row.available_today),
                format!("{:.2}", row.worked_today),
                format!("{:.2}", row.total_since_start),
                format!("{:.2}", row.available_tomorrow),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.days.flush()?;
        Ok(())
    }
}

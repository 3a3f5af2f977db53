//! Integration tests for hos-output.

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use hos_core::{DutyEvent, DutyStatus, FixedRoute, RouteLeg, TripConfig};
use hos_sim::{TripPlan, run_trip};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap().and_hms_opt(6, 0, 0).unwrap()
}

fn sample_event() -> DutyEvent {
    DutyEvent::new(DutyStatus::SleeperBerth, t0(), 600 * 60, "Truck Stop", "10-hour Sleeper Berth Reset")
}

/// Two-day dispatch: 600 miles to the receiver forces an overnight reset.
fn dispatch() -> TripPlan {
    TripPlan::pickup_and_delivery(
        RouteLeg::new(50.0, 1.0, "Dallas, TX", "Fort Worth, TX"),
        RouteLeg::new(600.0, 12.0, "Fort Worth, TX", "Albuquerque, NM"),
    )
}

fn headers(path: &std::path::Path) -> Vec<String> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.headers().unwrap().iter().map(str::to_owned).collect()
}

fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::*;
    use crate::EventRow;

    #[test]
    fn event_row_formats_timestamps() {
        let row = EventRow::from_event(4, &sample_event());
        assert_eq!(row.seq, 4);
        assert_eq!(row.status, "sleeper_berth");
        assert_eq!(row.start, "2024-09-02 06:00:00");
        assert_eq!(row.end, "2024-09-02 16:00:00");
        assert_eq!(row.duration_secs, 36_000);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::{CsvWriter, DAYS_FILE, EVENTS_FILE};
    use crate::row::EventRow;
    use crate::writer::OutputWriter;

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(EVENTS_FILE).exists());
        assert!(dir.path().join(DAYS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join(EVENTS_FILE)),
            ["seq", "status", "start", "end", "duration_secs", "location", "remark"]
        );
        let day_headers = headers(&dir.path().join(DAYS_FILE));
        assert_eq!(day_headers[0], "date");
        assert_eq!(day_headers.len(), 14);
    }

    #[test]
    fn csv_event_quoting() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let e = DutyEvent::new(DutyStatus::OnDuty, t0(), 900, "Dallas, TX", "Pre-trip Inspection");
        w.write_events(&[EventRow::from_event(0, &e)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(EVENTS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "on_duty");
        assert_eq!(&rows[0][5], "Dallas, TX");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[]).unwrap();
        w.write_days(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::csv::{CsvWriter, DAYS_FILE, EVENTS_FILE};
    use crate::{DayRow, EventRow, LedgerOutputObserver, OutputError, OutputResult, OutputWriter};

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let mut obs = LedgerOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let config = TripConfig { initial_cycle_used_hours: 20.0, ..TripConfig::new(t0()) };
        let log = run_trip(&config, &dispatch(), &mut FixedRoute(20), &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.events_written() as usize, log.events.len());

        let events = records(&dir.path().join(EVENTS_FILE));
        assert_eq!(events.len(), log.events.len());
        assert_eq!(&events[0][6], "Pre-trip Inspection");
        assert_eq!(&events[events.len() - 1][6], "Post-trip Inspection");

        let days = records(&dir.path().join(DAYS_FILE));
        let expected = log.daily_logs();
        assert_eq!(days.len(), expected.len());
        assert!(days.len() >= 2);
        assert_eq!(&days[0][0], "2024-09-02");
        assert_eq!(&days[0][8], "70 / 8");
        assert_eq!(&days[0][9], "20.00");
    }

    /// Fails every write with an I/O error.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_events(&mut self, _rows: &[EventRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_days(&mut self, _rows: &[DayRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk gone")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept() {
        let mut obs = LedgerOutputObserver::new(Broken);
        let log = run_trip(&TripConfig::new(t0()), &dispatch(), &mut FixedRoute(1), &mut obs).unwrap();
        assert!(log.is_complete(), "write errors never stop the trip");

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::row::EventRow;
    use crate::sqlite::{DB_FILE, SqliteWriter};
    use crate::writer::OutputWriter;
    use crate::LedgerOutputObserver;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(DB_FILE).exists());
    }

    #[test]
    fn sqlite_event_stored() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_events(&[EventRow::from_event(0, &sample_event())]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join(DB_FILE)).unwrap();
        let (status, secs): (String, i64) = conn.query_row(
            "SELECT status, duration_secs FROM duty_events WHERE seq = 0",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(status, "sleeper_berth");
        assert_eq!(secs, 36_000);
    }

    #[test]
    fn sqlite_trip_counts() {
        let dir = tmp();
        let mut obs = LedgerOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        let log = run_trip(&TripConfig::new(t0()), &dispatch(), &mut FixedRoute(1), &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let conn = rusqlite::Connection::open(dir.path().join(DB_FILE)).unwrap();
        let events: i64 = conn.query_row("SELECT COUNT(*) FROM duty_events", [], |r| r.get(0)).unwrap();
        let days: i64 = conn.query_row("SELECT COUNT(*) FROM daily_logs", [], |r| r.get(0)).unwrap();
        assert_eq!(events as usize, log.events.len());
        assert_eq!(days as usize, log.daily_logs().len());

        let total: f64 = conn.query_row(
            "SELECT off_duty_hours + sleeper_hours + driving_hours + on_duty_hours \
             FROM daily_logs ORDER BY date LIMIT 1",
            [],
            |r| r.get(0),
        ).unwrap();
        assert!((total - 24.0).abs() < 1e-6);
    }

    #[test]
    fn sqlite_rerun_replaces_previous_trip() {
        let dir = tmp();
        let mut day_counts = Vec::new();
        for _ in 0..2 {
            let mut obs = LedgerOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
            let log = run_trip(&TripConfig::new(t0()), &dispatch(), &mut FixedRoute(1), &mut obs).unwrap();
            assert!(obs.take_error().is_none());
            day_counts.push(log.daily_logs().len());
        }

        let conn = rusqlite::Connection::open(dir.path().join(DB_FILE)).unwrap();
        let days: i64 = conn.query_row("SELECT COUNT(*) FROM daily_logs", [], |r| r.get(0)).unwrap();
        assert_eq!(days as usize, day_counts[1]);
        assert_eq!(day_counts[0], day_counts[1]);
    }
}

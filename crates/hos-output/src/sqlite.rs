//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `duty_events` and `daily_logs`.  Both are emptied when a
//! writer opens the file, so rerunning into the same directory replaces the
//! previous trip, matching the CSV backend.

use std::path::Path;

use rusqlite::Connection;

use crate::{DayRow, EventRow, OutputResult};
use crate::writer::OutputWriter;

pub const DB_FILE: &str = "output.db";

/// Writes a ledger and its daily logs to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir`, initialise the schema, and clear
    /// any rows left by an earlier run.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS duty_events (
                 seq           INTEGER NOT NULL,
                 status        TEXT    NOT NULL,
                 start         TEXT    NOT NULL,
                 end           TEXT    NOT NULL,
                 duration_secs INTEGER NOT NULL,
                 location      TEXT    NOT NULL,
                 remark        TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS daily_logs (
                 date               TEXT PRIMARY KEY,
                 off_duty_hours     REAL NOT NULL,
                 sleeper_hours      REAL NOT NULL,
                 driving_hours      REAL NOT NULL,
                 on_duty_hours      REAL NOT NULL,
                 miles_driven       REAL NOT NULL,
                 from_city          TEXT NOT NULL,
                 to_city            TEXT NOT NULL,
                 cycle_limit        TEXT NOT NULL,
                 used_last_7        REAL NOT NULL,
                 available_today    REAL NOT NULL,
                 worked_today       REAL NOT NULL,
                 total_since_start  REAL NOT NULL,
                 available_tomorrow REAL NOT NULL
             );
             DELETE FROM duty_events;
             DELETE FROM daily_logs;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO duty_events \
                 (seq, status, start, end, duration_secs, location, remark) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.seq,
                    row.status,
                    row.start,
                    row.end,
                    row.duration_secs,
                    row.location,
                    row.remark,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_days(&mut self, rows: &[DayRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO daily_logs \
                 (date, off_duty_hours, sleeper_hours, driving_hours, on_duty_hours, \
                  miles_driven, from_city, to_city, cycle_limit, used_last_7, \
                  available_today, worked_today, total_since_start, available_tomorrow) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.date,
                    row.off_duty_hours,
                    row.sleeper_hours,
                    row.driving_hours,
                    row.on_duty_hours,
                    row.miles_driven,
                    row.from_city,
                    row.to_city,
                    row.cycle_limit,
                    row.used_last_7,
                    row.available_today,
                    row.worked_today,
                    row.total_since_start,
                    row.available_tomorrow,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

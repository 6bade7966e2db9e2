//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `trip_plan.db` file in the configured output directory
//! with three tables: `logs`, `route_summary` and `daily_totals`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DailyTotalsRow, LogRow, OutputResult, SummaryRow};

/// Writes a trip plan to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `trip_plan.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("trip_plan.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS logs (
                 day       INTEGER NOT NULL,
                 start_hours REAL  NOT NULL,
                 end_hours   REAL  NOT NULL,
                 status    TEXT    NOT NULL,
                 duty_line INTEGER NOT NULL,
                 type      TEXT    NOT NULL,
                 location  TEXT    NOT NULL,
                 remarks   TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS route_summary (
                 day      INTEGER NOT NULL,
                 time     TEXT    NOT NULL,
                 activity TEXT    NOT NULL,
                 location TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS daily_totals (
                 day           INTEGER PRIMARY KEY,
                 off_duty      REAL NOT NULL,
                 sleeper_berth REAL NOT NULL,
                 driving       REAL NOT NULL,
                 on_duty       REAL NOT NULL,
                 total         REAL NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_log_rows(&mut self, rows: &[LogRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO logs \
                 (day, start_hours, end_hours, status, duty_line, type, location, remarks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.day,
                    row.start_hours,
                    row.end_hours,
                    row.status.as_str(),
                    row.duty_line,
                    row.kind.as_str(),
                    row.location,
                    row.remarks,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary_rows(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO route_summary (day, time, activity, location) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.day,
                    row.time.to_string(),
                    row.activity,
                    row.location,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_daily_totals(&mut self, rows: &[DailyTotalsRow]) -> OutputResult<()> {
        for row in rows {
            self.conn.execute(
                "INSERT INTO daily_totals \
                 (day, off_duty, sleeper_berth, driving, on_duty, total) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    row.day,
                    row.off_duty_hours,
                    row.sleeper_hours,
                    row.driving_hours,
                    row.on_duty_hours,
                    row.total_hours,
                ],
            )?;
        }
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

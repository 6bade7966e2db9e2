//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `logs.csv`
//! - `route_summary.csv`
//! - `daily_totals.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DailyTotalsRow, LogRow, OutputResult, SummaryRow};

/// Writes a trip plan to three CSV files.
pub struct CsvWriter {
    logs:     Writer<File>,
    summary:  Writer<File>,
    totals:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut logs = Writer::from_path(dir.join("logs.csv"))?;
        logs.write_record(["day", "start", "end", "status", "duty_line", "type", "location", "remarks"])?;

        let mut summary = Writer::from_path(dir.join("route_summary.csv"))?;
        summary.write_record(["day", "time", "activity", "location"])?;

        let mut totals = Writer::from_path(dir.join("daily_totals.csv"))?;
        totals.write_record(["day", "off_duty", "sleeper_berth", "driving", "on_duty", "total"])?;

        Ok(Self { logs, summary, totals, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_log_rows(&mut self, rows: &[LogRow]) -> OutputResult<()> {
        for row in rows {
            self.logs.write_record(&[
                row.day.to_string(),
                row.start_hours.to_string(),
                row.end_hours.to_string(),
                row.status.to_string(),
                row.duty_line.to_string(),
                row.kind.to_string(),
                row.location.clone(),
                row.remarks.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_summary_rows(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record(&[
                row.day.to_string(),
                row.time.to_string(),
                row.activity.clone(),
                row.location.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_daily_totals(&mut self, rows: &[DailyTotalsRow]) -> OutputResult<()> {
        for row in rows {
            self.totals.write_record(&[
                row.day.to_string(),
                row.off_duty_hours.to_string(),
                row.sleeper_hours.to_string(),
                row.driving_hours.to_string(),
                row.on_duty_hours.to_string(),
                row.total_hours.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.logs.flush()?;
        self.summary.flush()?;
        self.totals.flush()?;
        Ok(())
    }
}

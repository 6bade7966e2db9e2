//! Integration tests for hos-output.

use hos_sim::{TripPlan, plan_trip};

fn two_day_plan() -> TripPlan {
    plan_trip(1_200.0, 0.0).unwrap()
}

fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[cfg(test)]
mod row_tests {
    use hos_core::{ClockTime, DutyStatus, EntryKind};

    use super::*;
    use crate::row::{DailyTotalsRow, LogRow, SummaryRow};

    #[test]
    fn log_row_flattens_entry() {
        let plan = two_day_plan();
        let row = LogRow::from(&plan.logs[2]);
        assert_eq!(row.day, 1);
        assert_eq!(row.start_hours, 2.0);
        assert_eq!(row.end_hours, 10.0);
        assert_eq!(row.status, DutyStatus::Driving);
        assert_eq!(row.duty_line, 3);
        assert_eq!(row.kind, EntryKind::Drive);
        assert_eq!(row.remarks, "Driving");
    }

    #[test]
    fn summary_row_keeps_clock_time() {
        let plan = two_day_plan();
        let row = SummaryRow::from(&plan.route_summary[3]);
        assert_eq!(row.time, ClockTime::new(10, 30));
        assert_eq!(row.activity, "30-Minute Break");
        assert_eq!(row.location, "Roadside Rest");
    }

    #[test]
    fn totals_row_adds_up() {
        let plan = two_day_plan();
        let row = DailyTotalsRow::from(&plan.daily_totals()[0]);
        assert_eq!(row.day, 1);
        assert_eq!(row.driving_hours, 11.0);
        assert_eq!(row.on_duty_hours, 2.0);
        assert_eq!(row.off_duty_hours, 0.5);
        assert_eq!(row.sleeper_hours, 10.5);
        assert_eq!(row.total_hours, 24.0);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("logs.csv").exists());
        assert!(dir.path().join("route_summary.csv").exists());
        assert!(dir.path().join("daily_totals.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_csv(&dir.path().join("logs.csv"));
        assert_eq!(headers, ["day", "start", "end", "status", "duty_line", "type", "location", "remarks"]);
        assert!(rows.is_empty());

        let (headers, _) = read_csv(&dir.path().join("route_summary.csv"));
        assert_eq!(headers, ["day", "time", "activity", "location"]);

        let (headers, _) = read_csv(&dir.path().join("daily_totals.csv"));
        assert_eq!(headers, ["day", "off_duty", "sleeper_berth", "driving", "on_duty", "total"]);
    }

    #[test]
    fn csv_plan_written() {
        let dir = tmp();
        let plan = two_day_plan();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_plan(&plan).unwrap();
        w.finish().unwrap();

        let (_, logs) = read_csv(&dir.path().join("logs.csv"));
        assert_eq!(logs.len(), plan.logs.len());
        assert_eq!(&logs[0][0], "1");    // day
        assert_eq!(&logs[0][1], "0");    // start
        assert_eq!(&logs[0][2], "1");    // end
        assert_eq!(&logs[0][3], "ON");
        assert_eq!(&logs[0][4], "4");
        assert_eq!(&logs[0][5], "WORK");
        assert_eq!(&logs[0][7], "Pre-Trip Inspection / Initial Hookup");
        assert_eq!(&logs[5][7], "Reached 11-Hour Driving Limit");

        let (_, summary) = read_csv(&dir.path().join("route_summary.csv"));
        assert_eq!(summary.len(), plan.route_summary.len());
        assert_eq!(&summary[2][1], "10:00");
        assert_eq!(&summary[2][2], "Driving 480 miles");

        let (_, totals) = read_csv(&dir.path().join("daily_totals.csv"));
        assert_eq!(totals.len(), 2);
        assert_eq!(&totals[1][0], "2");
        assert_eq!(&totals[1][3], "9");  // driving
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_log_rows(&[]).unwrap();
        w.write_summary_rows(&[]).unwrap();
        w.write_daily_totals(&[]).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does-not-exist"));
        assert!(result.is_err());
    }

    #[test]
    fn observer_streams_same_rows_as_write_plan() {
        use hos_sim::{TripPlanner, TripRequest};

        use crate::observer::PlanOutputObserver;

        let streamed = tmp();
        let batch = tmp();

        let planner = TripPlanner::new(Default::default()).unwrap();
        let request = TripRequest::new(2_345.6, 45.5).unwrap();
        let mut obs = PlanOutputObserver::new(CsvWriter::new(streamed.path()).unwrap());
        let plan = planner.plan_with(&request, &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut w = CsvWriter::new(batch.path()).unwrap();
        w.write_plan(&plan).unwrap();
        w.finish().unwrap();

        for file in ["logs.csv", "route_summary.csv", "daily_totals.csv"] {
            let a = std::fs::read_to_string(streamed.path().join(file)).unwrap();
            let b = std::fs::read_to_string(batch.path().join(file)).unwrap();
            assert_eq!(a, b, "{file}");
        }
    }
}

#[cfg(test)]
mod json_tests {
    use serde_json::Value;

    use super::*;
    use crate::JsonWriter;

    fn to_value(plan: &TripPlan) -> Value {
        let mut w = JsonWriter::new(Vec::new());
        w.write(plan).unwrap();
        serde_json::from_slice(&w.into_inner()).unwrap()
    }

    #[test]
    fn response_shape() {
        let v = to_value(&two_day_plan());
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["logs", "routeSummary", "totalDays", "finalCycleUsed"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(v["totalDays"], 2);
        assert_eq!(v["finalCycleUsed"], 23.5);
    }

    #[test]
    fn log_entry_fields() {
        let v = to_value(&two_day_plan());
        let drive = &v["logs"][2];
        assert_eq!(drive["day"], 1);
        assert_eq!(drive["start"], 2.0);
        assert_eq!(drive["end"], 10.0);
        assert_eq!(drive["status"], "D");
        assert_eq!(drive["dutyLine"], 3);
        assert_eq!(drive["type"], "DRIVE");
        assert_eq!(drive["location"], "On Route");
        assert_eq!(drive["remarks"], "Driving");

        let rest = &v["logs"][5];
        assert_eq!(rest["status"], "SB");
        assert_eq!(rest["type"], "REST");
        assert_eq!(rest["end"], 24.0);
    }

    #[test]
    fn summary_times_are_clock_strings() {
        let v = to_value(&two_day_plan());
        let fuel = &v["routeSummary"][6];
        assert_eq!(fuel["day"], 2);
        assert_eq!(fuel["time"], "06:10");
        assert_eq!(fuel["activity"], "Fueling Stop (30 mins)");
        assert_eq!(fuel["location"], "Fuel Station");
    }

    #[test]
    fn plan_round_trips_through_json() {
        let plan = two_day_plan();
        let mut w = JsonWriter::pretty(Vec::new());
        w.write(&plan).unwrap();
        let back: TripPlan = serde_json::from_slice(&w.into_inner()).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn each_document_ends_with_newline() {
        let mut w = JsonWriter::new(Vec::new());
        w.write(&[1, 2, 3]).unwrap();
        w.write("done").unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), "[1,2,3]\n\"done\"\n");
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn db_file_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trip_plan.db").exists());
    }

    #[test]
    fn plan_rows_inserted() {
        let dir = tmp();
        let plan = two_day_plan();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_plan(&plan).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let conn = Connection::open(dir.path().join("trip_plan.db")).unwrap();
        assert_eq!(count(&conn, "logs"), plan.logs.len() as i64);
        assert_eq!(count(&conn, "route_summary"), plan.route_summary.len() as i64);
        assert_eq!(count(&conn, "daily_totals"), 2);

        let driving: f64 = conn
            .query_row("SELECT SUM(end_hours - start_hours) FROM logs WHERE type = 'DRIVE'", [], |r| r.get(0))
            .unwrap();
        assert!((driving - 20.0).abs() < 1e-9);

        let rest: String = conn
            .query_row("SELECT remarks FROM logs WHERE type = 'REST'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rest, "Reached 11-Hour Driving Limit");
    }
}

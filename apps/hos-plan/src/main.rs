//! hos-plan — plan a truck trip under the Hours-of-Service rules.
//!
//! Reads a trip request from flags or a JSON file, prints the planner
//! response (`logs`, `routeSummary`, `totalDays`, `finalCycleUsed`) as JSON
//! on stdout, and optionally writes the schedule as CSV files.
//!
//! ```text
//! hos-plan --distance 1200 --cycle-used 30 --pretty
//! hos-plan --request trips.json --csv-dir out/ --summary
//! ```
//!
//! Exit codes: 0 on success, 2 when a request is rejected (the response is
//! then `{"error": "..."}`), 1 on any other failure.

mod request;


use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};

use hos_core::{ClockTime, HosError, HosRules};
use hos_output::{CsvWriter, JsonWriter, OutputWriter, PlanOutputObserver};
use hos_sim::{LoggingObserver, TripPlan, TripPlanner, TripPlannerBuilder, TripRequest};

use request::{parse_request, request_from_args};

const REJECTED: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "hos-plan", version)]
#[command(about = "Plan a property-carrying truck trip under the 70-hour/8-day Hours-of-Service rules")]
struct Args {
    /// Total trip distance in miles
    #[arg(long, allow_hyphen_values = true)]
    distance: Option<String>,

    /// Hours already used in the current 70-hour cycle
    #[arg(long, allow_hyphen_values = true)]
    cycle_used: Option<String>,

    /// JSON request file: one `{tripDistance, cycleUsed}` object or an array
    /// of them ("-" reads stdin)
    #[arg(long, conflicts_with_all = ["distance", "cycle_used"])]
    request: Option<PathBuf>,

    /// JSON file overriding Hours-of-Service rules; absent fields keep the
    /// federal defaults
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Loop iteration cap per trip
    #[arg(long, default_value_t = TripPlanner::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Also write logs.csv, route_summary.csv and daily_totals.csv here
    /// (one trip-N subdirectory per request for batch files)
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Also write trip_plan.db here (single requests only)
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite_dir: Option<PathBuf>,

    /// Indent the JSON response
    #[arg(long)]
    pretty: bool,

    /// Print the route summary and daily recap to stderr
    #[arg(long)]
    summary: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rules = load_rules(args.rules.as_deref())?;
    let planner = TripPlannerBuilder::new()
        .rules(rules)
        .max_iterations(args.max_iterations)
        .build()
        .context("invalid planner configuration")?;

    let input = read_input(&args)?;
    let mut out = if args.pretty {
        JsonWriter::pretty(io::stdout().lock())
    } else {
        JsonWriter::new(io::stdout().lock())
    };

    let code = match input {
        Value::Array(items) => run_batch(&args, &planner, &items, &mut out)?,
        body => run_single(&args, &planner, &body, &mut out)?,
    };
    out.flush()?;
    Ok(code)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn load_rules(path: Option<&Path>) -> Result<HosRules> {
    let Some(path) = path else {
        return Ok(HosRules::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading rules file {}", path.display()))?;
    let rules = serde_json::from_str(&text)
        .with_context(|| format!("parsing rules file {}", path.display()))?;
    log::info!("loaded rule overrides from {}", path.display());
    Ok(rules)
}

fn read_input(args: &Args) -> Result<Value> {
    let Some(path) = &args.request else {
        return Ok(request_from_args(args.distance.as_deref(), args.cycle_used.as_deref()));
    };
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading request from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("reading request file {}", path.display()))?
    };
    serde_json::from_str(&text).context("request is not valid JSON")
}

// ── Single request ────────────────────────────────────────────────────────────

fn run_single<W: Write>(
    args:    &Args,
    planner: &TripPlanner,
    body:    &Value,
    out:     &mut JsonWriter<W>,
) -> Result<ExitCode> {
    let request = match parse_request(body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("request rejected: {e}");
            out.write(&error_body(&e))?;
            return Ok(ExitCode::from(REJECTED));
        }
    };

    let plan = plan_one(args, planner, &request)?;
    write_extras(args, &plan)?;
    out.write(&plan)?;
    Ok(ExitCode::SUCCESS)
}

/// Plan with CSV rows streamed as they are produced when `--csv-dir` is set.
fn plan_one(args: &Args, planner: &TripPlanner, request: &TripRequest) -> Result<TripPlan> {
    let Some(dir) = &args.csv_dir else {
        return Ok(planner.plan_with(request, &mut LoggingObserver)?);
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut obs = PlanOutputObserver::new(CsvWriter::new(dir)?);
    let plan = planner.plan_with(request, &mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).with_context(|| format!("writing CSV files to {}", dir.display()));
    }
    log::info!("wrote CSV schedule to {}", dir.display());
    Ok(plan)
}

fn write_extras(args: &Args, plan: &TripPlan) -> Result<()> {
    write_sqlite(args, plan)?;
    if args.summary {
        eprint!("{}", render_summary(plan));
    }
    Ok(())
}

#[cfg(feature = "sqlite")]
fn write_sqlite(args: &Args, plan: &TripPlan) -> Result<()> {
    let Some(dir) = &args.sqlite_dir else {
        return Ok(());
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut writer = hos_output::SqliteWriter::new(dir)?;
    writer.write_plan(plan)?;
    writer.finish()?;
    log::info!("wrote SQLite schedule to {}", dir.display());
    Ok(())
}

#[cfg(not(feature = "sqlite"))]
fn write_sqlite(_args: &Args, _plan: &TripPlan) -> Result<()> {
    Ok(())
}

// ── Batch ─────────────────────────────────────────────────────────────────────

/// Plan every valid request; rejected ones become `{"error": ...}` in place.
fn run_batch<W: Write>(
    args:    &Args,
    planner: &TripPlanner,
    items:   &[Value],
    out:     &mut JsonWriter<W>,
) -> Result<ExitCode> {
    let parsed: Vec<Result<TripRequest, HosError>> = items.iter().map(parse_request).collect();
    let valid: Vec<TripRequest> = parsed.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
    log::info!("planning {} of {} requests", valid.len(), parsed.len());

    let mut plans = planner.plan_batch(&valid).into_iter();
    let mut responses = Vec::with_capacity(parsed.len());
    let mut rejected = false;

    for (index, request) in parsed.iter().enumerate() {
        let response = match request {
            Err(e) => {
                log::warn!("request {} rejected: {e}", index + 1);
                rejected = true;
                error_body(e)
            }
            Ok(_) => {
                let plan = plans
                    .next()
                    .context("batch planner returned fewer plans than requests")??;
                if let Some(dir) = &args.csv_dir {
                    write_csv(&dir.join(format!("trip-{}", index + 1)), &plan)?;
                }
                if args.summary {
                    eprintln!("── Trip {} ──", index + 1);
                    eprint!("{}", render_summary(&plan));
                }
                serde_json::to_value(&plan)?
            }
        };
        responses.push(response);
    }

    out.write(&responses)?;
    Ok(if rejected { ExitCode::from(REJECTED) } else { ExitCode::SUCCESS })
}

fn write_csv(dir: &Path, plan: &TripPlan) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut writer = CsvWriter::new(dir)?;
    writer.write_plan(plan)?;
    writer.finish()?;
    Ok(())
}

// ── Presentation ──────────────────────────────────────────────────────────────

fn error_body(e: &HosError) -> Value {
    json!({ "error": e.to_string() })
}

/// Route summary grouped by day, each day followed by its remark entries
/// and its duty-status recap.
fn render_summary(plan: &TripPlan) -> String {
    let totals = plan.daily_totals();
    let mut text = String::new();
    for day in 1..=plan.total_days {
        text.push_str(&format!("Day {day}\n"));
        for row in plan.route_summary.iter().filter(|r| r.day == day) {
            text.push_str(&format!("  {}  {:<28} {}\n", row.time, row.activity, row.location));
        }
        for e in plan.remark_entries(day) {
            text.push_str(&format!(
                "  remark {}-{}  {} ({})\n",
                ClockTime::from(e.start()),
                ClockTime::from(e.end()),
                e.remarks(),
                e.location()
            ));
        }
        if let Some(t) = totals.iter().find(|t| t.day == day) {
            text.push_str(&format!("  {t}\n"));
        }
    }
    text.push_str(&format!(
        "Total: {} day(s), cycle used {:.2}h\n",
        plan.total_days,
        plan.final_cycle_used.as_hours()
    ));
    text
}

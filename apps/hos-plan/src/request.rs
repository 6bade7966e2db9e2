//! Loose JSON request parsing.
//!
//! Requests come from hand-written files and shell arguments, so numbers
//! may arrive as JSON numbers or as numeric strings.  Everything else is
//! rejected with the same messages the web endpoint returns.

use hos_core::{HosError, HosResult};
use hos_sim::TripRequest;
use serde_json::{Map, Value};

/// Build a [`TripRequest`] from a `{ tripDistance, cycleUsed }` object.
///
/// A missing or `null` field is `MissingInput`; a field that is neither a
/// number nor a numeric string is `NotANumber`.
pub fn parse_request(body: &Value) -> HosResult<TripRequest> {
    let (Some(distance), Some(cycle)) = (field(body, "tripDistance"), field(body, "cycleUsed"))
    else {
        return Err(HosError::MissingInput);
    };
    TripRequest::new(number(distance)?, number(cycle)?)
}

/// The request object for `--distance` / `--cycle-used`.  Absent flags
/// stay absent so validation reports them the same way.
pub fn request_from_args(distance: Option<&str>, cycle_used: Option<&str>) -> Value {
    let mut body = Map::new();
    if let Some(d) = distance {
        body.insert("tripDistance".into(), Value::String(d.to_owned()));
    }
    if let Some(c) = cycle_used {
        body.insert("cycleUsed".into(), Value::String(c.to_owned()));
    }
    Value::Object(body)
}

fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|v| !v.is_null())
}

fn number(value: &Value) -> HosResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(HosError::NotANumber),
        Value::String(s) => s.trim().parse().map_err(|_| HosError::NotANumber),
        _ => Err(HosError::NotANumber),
    }
}

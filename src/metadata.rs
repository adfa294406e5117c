//! Fixed metadata fields attached to every formatted event.
//!
//! These are the machine-stable part of the output record: `ts`,
//! `unix_ts`, `severity`, `pid`, and (when the event names one)
//! `program`. The field set and the timestamp pattern cannot be altered
//! by configuration; message fields that collide with these names are
//! renamed during the merge, never the other way around.

use serde_json::{Map, Value};

use crate::config::DATETIME_FORMAT;
use crate::process::ProcessInfo;

/// Build the metadata fields for one event.
///
/// - `ts`: the timestamp in UTC, formatted as `YYYY-MM-DDTHH:MM:SS.mmm`
///   ([`DATETIME_FORMAT`]).
/// - `unix_ts`: float seconds since the epoch, sub-second precision
///   preserved.
/// - `severity`: the label unmodified — no normalization, no case-folding.
/// - `pid`: queried from `process` at call time.
/// - `program`: present only when the event supplied a name.
pub fn build(
    severity: &str,
    timestamp: jiff::Timestamp,
    program: Option<&str>,
    process: &dyn ProcessInfo,
) -> Map<String, Value> {
    let mut fields = Map::new();

    let utc = timestamp.to_zoned(jiff::tz::TimeZone::UTC);
    fields.insert(
        "ts".to_string(),
        Value::String(utc.strftime(DATETIME_FORMAT).to_string()),
    );

    #[allow(clippy::cast_precision_loss)] // microseconds since epoch fit f64 exactly for any realistic instant
    let unix_ts = timestamp.as_microsecond() as f64 / 1_000_000.0;
    fields.insert("unix_ts".to_string(), Value::from(unix_ts));

    fields.insert("severity".to_string(), Value::String(severity.to_string()));
    fields.insert("pid".to_string(), Value::from(process.pid()));

    if let Some(name) = program {
        fields.insert("program".to_string(), Value::String(name.to_string()));
    }

    fields
}

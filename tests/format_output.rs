//! Integration tests for the shape of formatted output lines.

use jiff::Timestamp;
use serde_json::{Value, json};

use jot::{ColorMode, Destination, ErrorInfo, Event, FormatterConfig, JsonFormatter, ProcessInfo};

struct FixedPid(u32);

impl ProcessInfo for FixedPid {
    fn pid(&self) -> u32 {
        self.0
    }
}

struct NotATty;

impl Destination for NotATty {
    fn is_terminal(&self) -> bool {
        false
    }
}

fn plain_formatter() -> JsonFormatter {
    JsonFormatter::with_collaborators(
        FormatterConfig {
            color_mode: ColorMode::Never,
        },
        Box::new(FixedPid(9001)),
        Box::new(NotATty),
    )
}

fn ts() -> Timestamp {
    "2026-01-15T10:30:00.123Z".parse().unwrap()
}

fn parse_line(line: &str) -> Value {
    let body = line.strip_suffix('\n').expect("line terminator missing");
    serde_json::from_str(body).expect("line is not valid JSON")
}

#[test]
fn plain_text_message_is_single_message_field() {
    for text in [
        "hello",
        "",
        "line one\nline two",
        r#"he said "hi""#,
        "tab\there",
    ] {
        let line = plain_formatter().format("INFO", ts(), None, text).unwrap();
        let parsed = parse_line(&line);
        assert_eq!(parsed["message"], json!(text));
        // Exactly the metadata keys plus `message`.
        assert_eq!(parsed.as_object().unwrap().len(), 5);
    }
}

#[test]
fn metadata_fields_present_and_exact() {
    let line = plain_formatter()
        .format("WARN", ts(), Some("api"), "careful")
        .unwrap();
    let parsed = parse_line(&line);
    assert_eq!(parsed["ts"], json!("2026-01-15T10:30:00.123"));
    assert_eq!(parsed["severity"], json!("WARN"));
    assert_eq!(parsed["pid"], json!(9001));
    assert_eq!(parsed["program"], json!("api"));
}

#[test]
fn program_absent_when_not_supplied() {
    let line = plain_formatter().format("INFO", ts(), None, "hi").unwrap();
    let parsed = parse_line(&line);
    assert!(parsed.get("program").is_none());
}

#[test]
fn pid_matches_process_collaborator_exactly() {
    // Default wiring queries the OS.
    let formatter = JsonFormatter::new(FormatterConfig {
        color_mode: ColorMode::Never,
    });
    let line = formatter.format("INFO", ts(), None, "hi").unwrap();
    let parsed = parse_line(&line);
    assert_eq!(parsed["pid"], json!(std::process::id()));
}

#[test]
fn unix_ts_within_a_millisecond() {
    let line = plain_formatter().format("INFO", ts(), None, "hi").unwrap();
    let parsed = parse_line(&line);
    let unix_ts = parsed["unix_ts"].as_f64().unwrap();
    assert!((unix_ts - 1_768_473_000.123).abs() < 0.001);
}

/// Assert the literal `YYYY-MM-DDTHH:MM:SS.mmm` shape, byte for byte.
fn assert_ts_pattern(ts: &str) {
    assert_eq!(ts.len(), 23, "unexpected length in {ts:?}");
    for (i, c) in ts.char_indices() {
        match i {
            4 | 7 => assert_eq!(c, '-', "position {i} in {ts:?}"),
            10 => assert_eq!(c, 'T', "position {i} in {ts:?}"),
            13 | 16 => assert_eq!(c, ':', "position {i} in {ts:?}"),
            19 => assert_eq!(c, '.', "position {i} in {ts:?}"),
            _ => assert!(c.is_ascii_digit(), "position {i} in {ts:?}"),
        }
    }
}

#[test]
fn ts_always_matches_fixed_pattern() {
    let stamps = [
        "2026-01-15T10:30:00.123Z",
        "1999-12-31T23:59:59.999+05:00",
        "1970-01-01T00:00:00Z",
    ];
    for stamp in stamps {
        let when: Timestamp = stamp.parse().unwrap();
        let line = plain_formatter().format("INFO", when, None, "hi").unwrap();
        let parsed = parse_line(&line);
        assert_ts_pattern(parsed["ts"].as_str().unwrap());
    }
    // And there is no configuration path that could change it.
    let config = FormatterConfig {
        color_mode: ColorMode::Always,
    };
    assert_eq!(config.timestamp_format(), jot::DATETIME_FORMAT);
}

#[test]
fn error_payload_produces_exception_fields() {
    let info = ErrorInfo::new("MyError", "boom")
        .with_backtrace(vec!["a".to_string(), "b".to_string()]);
    let line = plain_formatter().format("ERROR", ts(), None, info).unwrap();
    let parsed = parse_line(&line);
    assert_eq!(parsed["exception.class"], json!("MyError"));
    assert_eq!(parsed["exception.backtrace"], json!(["a", "b"]));
    assert_eq!(parsed["exception.message"], json!("boom"));
    // Three exception fields + four metadata fields, nothing else.
    assert_eq!(parsed.as_object().unwrap().len(), 7);
}

#[test]
fn error_payload_without_trace_emits_null() {
    let line = plain_formatter()
        .format("ERROR", ts(), None, ErrorInfo::new("E", "nope"))
        .unwrap();
    let parsed = parse_line(&line);
    assert_eq!(parsed["exception.backtrace"], Value::Null);
}

#[test]
fn structured_payload_merges_verbatim() {
    let line = plain_formatter()
        .format("INFO", ts(), None, json!({"a": 1, "b": 2}))
        .unwrap();
    let parsed = parse_line(&line);
    assert_eq!(parsed["a"], json!(1));
    assert_eq!(parsed["b"], json!(2));
    assert!(parsed.get("user.a").is_none());
    assert_eq!(parsed.as_object().unwrap().len(), 6);
}

#[test]
fn non_object_structured_payload_degrades_to_text() {
    let line = plain_formatter()
        .format("INFO", ts(), None, json!(["x", "y"]))
        .unwrap();
    let parsed = parse_line(&line);
    assert!(parsed["message"].is_string());
}

#[test]
fn event_builder_and_positional_call_agree() {
    let formatter = plain_formatter();
    let event = Event::new("DEBUG", ts(), "probe").with_program("daemon");
    assert_eq!(
        formatter.format_event(&event).unwrap(),
        formatter.format("DEBUG", ts(), Some("daemon"), "probe").unwrap()
    );
}

//! `jot` — format log events as single-line machine-parseable JSON.
//!
//! One event in (severity, timestamp, optional program name, message
//! payload), one self-contained JSON line out, optionally wrapped in a
//! severity-keyed terminal color. Message payloads are polymorphic —
//! plain text, error information, or arbitrary structured values — and
//! are flattened into fields that merge with the fixed metadata fields
//! (`ts`, `unix_ts`, `severity`, `pid`, `program`) without data loss:
//! a message field colliding with a metadata name is renamed with a
//! `user.` prefix instead of being dropped or shadowing anything.
//!
//! Level filtering, dispatch, and transport belong to the surrounding
//! logging pipeline; this crate only turns one event into one line.
//!
//! # Example
//!
//! ```
//! use jot::{ColorMode, Event, FormatterConfig, JsonFormatter};
//!
//! let formatter = JsonFormatter::new(FormatterConfig {
//!     color_mode: ColorMode::Never,
//! });
//!
//! let ts: jiff::Timestamp = "2026-01-15T10:30:00.123Z".parse().unwrap();
//! let line = formatter
//!     .format_event(&Event::new("INFO", ts, "listening").with_program("api"))
//!     .unwrap();
//!
//! assert!(line.contains(r#""ts":"2026-01-15T10:30:00.123""#));
//! assert!(line.contains(r#""message":"listening""#));
//! assert!(line.ends_with('\n'));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod formatter;
pub mod merge;
pub mod metadata;
pub mod payload;
pub mod process;

// Re-export primary API types for convenience.
pub use color::ColorTag;
pub use config::{ColorMode, DATETIME_FORMAT, FormatterConfig};
pub use error::FormatError;
pub use event::Event;
pub use formatter::{Destination, JsonFormatter, strip_color};
pub use merge::MergedRecord;
pub use payload::{ErrorInfo, Payload, ToFields};
pub use process::{OsProcess, ProcessInfo};

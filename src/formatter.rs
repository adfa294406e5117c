//! Event-to-line orchestration.
//!
//! [`JsonFormatter`] ties the pieces together: build metadata, normalize
//! the message payload, merge with collision renaming, encode as JSON,
//! append the line terminator, and wrap the whole line in the severity's
//! color escapes when color is enabled. One synchronous pass per event;
//! the only failure mode is JSON encoding.

use std::io::{self, IsTerminal};

use crate::color::{self, ColorTag};
use crate::config::{ColorMode, FormatterConfig};
use crate::error::FormatError;
use crate::event::Event;
use crate::payload::Payload;
use crate::process::{OsProcess, ProcessInfo};
use crate::{merge, metadata, payload};

/// Output destination, consulted only for its terminal status when the
/// color mode is [`ColorMode::Auto`].
pub trait Destination {
    /// Whether the destination is an interactive terminal.
    fn is_terminal(&self) -> bool;
}

impl Destination for io::Stdout {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Destination for io::Stderr {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

/// Formats log events as single-line JSON records.
///
/// Holds immutable configuration plus the two injected collaborators
/// (process id source, output destination for the terminal check), so a
/// shared reference is safe to use from multiple threads.
pub struct JsonFormatter {
    config: FormatterConfig,
    process: Box<dyn ProcessInfo + Send + Sync>,
    destination: Box<dyn Destination + Send + Sync>,
}

impl JsonFormatter {
    /// Formatter wired to the OS process id and stdout.
    pub fn new(config: FormatterConfig) -> Self {
        Self::with_collaborators(config, Box::new(OsProcess), Box::new(io::stdout()))
    }

    /// Formatter with explicit collaborators, for embedding and tests.
    pub fn with_collaborators(
        config: FormatterConfig,
        process: Box<dyn ProcessInfo + Send + Sync>,
        destination: Box<dyn Destination + Send + Sync>,
    ) -> Self {
        Self {
            config,
            process,
            destination,
        }
    }

    /// The formatter's configuration.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format one event into a complete output line.
    ///
    /// The line is the JSON encoding of the merged record plus a single
    /// `\n`, bracketed by the severity color's escape sequences when
    /// color is enabled. Fails only if the record cannot be encoded;
    /// partial output is never returned.
    pub fn format_event(&self, event: &Event) -> Result<String, FormatError> {
        let metadata = metadata::build(
            &event.severity,
            event.timestamp,
            event.program.as_deref(),
            self.process.as_ref(),
        );
        let message = payload::normalize(&event.message);
        let record = merge::merge(metadata, message);

        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        if self.use_color() {
            line = color::paint(ColorTag::for_severity(&event.severity), &line);
        }
        Ok(line)
    }

    /// Positional convenience over [`format_event`](Self::format_event).
    pub fn format(
        &self,
        severity: &str,
        timestamp: jiff::Timestamp,
        program: Option<&str>,
        message: impl Into<Payload>,
    ) -> Result<String, FormatError> {
        let mut event = Event::new(severity, timestamp, message);
        if let Some(name) = program {
            event = event.with_program(name);
        }
        self.format_event(&event)
    }

    fn use_color(&self) -> bool {
        match self.config.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if !self.destination.is_terminal() {
                    return false;
                }
                if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                    return false;
                }
                if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                    return false;
                }
                true
            }
        }
    }
}

impl std::fmt::Debug for JsonFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFormatter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Strip a leading/trailing ANSI escape pair from a formatted line.
///
/// Consumers that parse colored lines as JSON need the escapes removed
/// first; this helper implements that external contract. Uncolored lines
/// pass through unchanged.
pub fn strip_color(line: &str) -> &str {
    let Some(start) = line.find('m').filter(|_| line.starts_with("\x1b[")) else {
        return line;
    };
    line[start + 1..]
        .strip_suffix("\x1b[0m")
        .unwrap_or(&line[start + 1..])
}

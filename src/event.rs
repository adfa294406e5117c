//! One log occurrence, as handed to the formatter by the surrounding
//! logging pipeline.

use crate::payload::Payload;

/// A single log event: severity, timestamp, optional program name, and a
/// message payload.
///
/// The severity is a free-form label, not a closed enum — unknown labels
/// format normally and only affect color selection. The timestamp is an
/// absolute instant; callers holding a [`jiff::Zoned`] pass
/// `zoned.timestamp()`.
#[derive(Debug, Clone)]
pub struct Event {
    pub severity: String,
    pub timestamp: jiff::Timestamp,
    pub program: Option<String>,
    pub message: Payload,
}

impl Event {
    /// Build an event with no program name.
    pub fn new(
        severity: impl Into<String>,
        timestamp: jiff::Timestamp,
        message: impl Into<Payload>,
    ) -> Self {
        Self {
            severity: severity.into(),
            timestamp,
            program: None,
            message: message.into(),
        }
    }

    /// Attach the program name.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_program() {
        let event = Event::new("INFO", jiff::Timestamp::UNIX_EPOCH, "hi");
        assert_eq!(event.severity, "INFO");
        assert!(event.program.is_none());
        assert_eq!(event.message, Payload::Text("hi".to_string()));
    }

    #[test]
    fn test_with_program() {
        let event = Event::new("INFO", jiff::Timestamp::UNIX_EPOCH, "hi").with_program("worker");
        assert_eq!(event.program.as_deref(), Some("worker"));
    }
}

//! Message payload normalization.
//!
//! A log message is one of three shapes: plain text, error information,
//! or an arbitrary structured value. [`normalize`] flattens any of them
//! into a field mapping. Selection is by payload shape, with an ordered
//! fallback chain for structured values: an explicit field mapping is
//! used verbatim, a JSON object value is used as a mapping, and anything
//! else degrades to a `message` field holding the value's debug
//! representation. Normalization never fails.

use std::fmt;

use serde_json::{Map, Value};

/// Structured view of a raised error, ready for field conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Name of the error's concrete type.
    pub class: String,
    /// Human-readable error message.
    pub message: String,
    /// Ordered frame strings, innermost first. `None` when no trace was
    /// captured; emitted as JSON `null`.
    pub backtrace: Option<Vec<String>>,
}

impl ErrorInfo {
    /// Build error info from an explicit type name and message.
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: message.into(),
            backtrace: None,
        }
    }

    /// Attach backtrace frames.
    #[must_use]
    pub fn with_backtrace(mut self, frames: Vec<String>) -> Self {
        self.backtrace = Some(frames);
        self
    }

    /// Capture an error value's concrete type name and display message.
    ///
    /// The type name is the full path reported by
    /// [`std::any::type_name`] (e.g. `std::io::Error`). No backtrace is
    /// captured; attach one with [`with_backtrace`](Self::with_backtrace)
    /// if frames are available.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        Self {
            class: std::any::type_name::<E>().to_string(),
            message: err.to_string(),
            backtrace: None,
        }
    }
}

/// Types that can convert themselves into a flat field mapping.
///
/// Implement this to log a domain type as structured fields rather than
/// text; [`Payload::fields`] picks it up.
pub trait ToFields {
    /// The field mapping for this value, keys and values verbatim.
    fn to_fields(&self) -> Map<String, Value>;
}

impl ToFields for Map<String, Value> {
    fn to_fields(&self) -> Map<String, Value> {
        self.clone()
    }
}

/// One log message payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Plain text — becomes a single `message` field, unchanged.
    Text(String),
    /// A raised error — becomes the three `exception.*` fields.
    Error(ErrorInfo),
    /// An explicit field mapping, used verbatim.
    Fields(Map<String, Value>),
    /// An arbitrary structured value. Objects are used as mappings;
    /// any other value falls back to its debug representation.
    Value(Value),
}

impl Payload {
    /// Payload from any type exposing the field-conversion capability.
    pub fn fields(value: &impl ToFields) -> Self {
        Self::Fields(value.to_fields())
    }

    /// Payload from a value with no better representation than its
    /// debug dump.
    pub fn debug(value: &impl fmt::Debug) -> Self {
        Self::Text(format!("{value:?}"))
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ErrorInfo> for Payload {
    fn from(info: ErrorInfo) -> Self {
        Self::Error(info)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Fields(map)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Flatten a payload into message fields.
///
/// Total over all payloads: a value that cannot be classified as a
/// mapping degrades to the text case.
pub fn normalize(payload: &Payload) -> Map<String, Value> {
    match payload {
        Payload::Text(s) => text_fields(s.clone()),
        Payload::Error(info) => error_fields(info),
        Payload::Fields(map) => map.clone(),
        Payload::Value(Value::Object(map)) => map.clone(),
        Payload::Value(other) => text_fields(format!("{other:?}")),
    }
}

fn text_fields(message: String) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("message".to_string(), Value::String(message));
    fields
}

fn error_fields(info: &ErrorInfo) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        "exception.class".to_string(),
        Value::String(info.class.clone()),
    );
    fields.insert(
        "exception.backtrace".to_string(),
        match &info.backtrace {
            Some(frames) => Value::Array(
                frames.iter().map(|f| Value::String(f.clone())).collect(),
            ),
            None => Value::Null,
        },
    );
    fields.insert(
        "exception.message".to_string(),
        Value::String(info.message.clone()),
    );
    fields
}

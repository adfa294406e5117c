//! Formatter configuration.
//!
//! The only knob is color output. The timestamp pattern is deliberately a
//! constant with a read-only accessor: the whole point of this formatter
//! is a consistent machine-parsable format, so there is no setter to
//! misuse.

/// Timestamp pattern for the `ts` metadata field: `YYYY-MM-DDTHH:MM:SS.mmm`
/// in UTC, no timezone suffix.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Color output mode, fixed at construction.
///
/// `Auto` defers to the output destination's terminal status at format
/// time; `Always`/`Never` override everything, including `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Immutable formatter configuration.
///
/// Use [`FormatterConfig::default`] for auto-detected color, or set
/// [`color_mode`](Self::color_mode) explicitly before handing the config
/// to [`JsonFormatter`](crate::JsonFormatter). Once the formatter is
/// constructed the configuration cannot change.
#[derive(Debug, Clone, Default)]
pub struct FormatterConfig {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
}

impl FormatterConfig {
    /// The timestamp pattern used for the `ts` field.
    ///
    /// Always [`DATETIME_FORMAT`]; exposed for callers that introspect
    /// the format, not for changing it.
    pub const fn timestamp_format(&self) -> &'static str {
        DATETIME_FORMAT
    }
}

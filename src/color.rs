//! Severity-to-color lookup and ANSI wrapping.
//!
//! Severity labels are free-form strings, not a closed enum, so the lookup
//! is a total function: the four labels with explicit entries get their
//! color, everything else falls back to [`ColorTag::White`]. Matching is
//! case-sensitive — `"error"` is an unknown label, `"ERROR"` is not.

use owo_colors::{OwoColorize, Style};

/// Terminal color assigned to a severity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Yellow,
    Faint,
    White,
}

impl ColorTag {
    /// Resolve the color for a severity label.
    ///
    /// Explicit entries: `FATAL` and `ERROR` → red, `WARN` → yellow,
    /// `DEBUG` → faint. Any other label resolves to white.
    pub fn for_severity(severity: &str) -> Self {
        match severity {
            "FATAL" | "ERROR" => Self::Red,
            "WARN" => Self::Yellow,
            "DEBUG" => Self::Faint,
            _ => Self::White,
        }
    }

    /// Returns the [`Style`] used to render this tag.
    pub const fn style(self) -> Style {
        match self {
            Self::Red => Style::new().red(),
            Self::Yellow => Style::new().yellow(),
            Self::Faint => Style::new().dimmed(),
            Self::White => Style::new().white(),
        }
    }
}

/// Wrap `text` in the tag's start/reset escape sequences.
///
/// The escapes bracket the text as-is; callers decide what goes inside
/// (for a full output line that includes the trailing newline).
pub fn paint(tag: ColorTag, text: &str) -> String {
    format!("{}", text.style(tag.style()))
}

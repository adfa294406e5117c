//! Error types for `jot`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur while formatting an event.
///
/// Malformed or unusual payloads are not errors — they degrade to a
/// readable `message` field. Only genuine encoding impossibility is
/// surfaced, so the calling pipeline can decide what to do with the
/// event; partial or invalid output is never produced.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The merged record contained a value the JSON encoder cannot represent.
    #[error("cannot encode record as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

//! Collision-safe union of metadata and message fields.
//!
//! Message fields never overwrite metadata: a message key that
//! string-equals a metadata key is renamed with a `user.` prefix, so the
//! record keeps both values and no field is silently dropped.

use serde::Serialize;
use serde_json::{Map, Value};

/// The complete field set for one event, ready for JSON encoding.
///
/// Keys iterate in the map's sorted order, which is the encoder's
/// stable output order. Key order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedRecord(pub Map<String, Value>);

/// Union `message` fields into `metadata`, renaming collisions.
///
/// Each message key colliding with a metadata key name is re-inserted as
/// `user.<key>`; metadata entries are never touched, so their values can
/// never be shadowed. If a message key already literally starts with
/// `user.` and another key renames onto it, the literal key wins: it
/// sorts after the colliding bare key, and the later insert overwrites.
pub fn merge(metadata: Map<String, Value>, message: Map<String, Value>) -> MergedRecord {
    let mut renamed = Map::new();
    for (key, value) in message {
        let key = if metadata.contains_key(&key) {
            format!("user.{key}")
        } else {
            key
        };
        renamed.insert(key, value);
    }

    let mut merged = metadata;
    for (key, value) in renamed {
        merged.insert(key, value);
    }
    MergedRecord(merged)
}

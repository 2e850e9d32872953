//! Envelope value aliases.
//!
//! Envelopes are plain `serde_json` values so they can be handed straight to
//! any serde-compatible encoder.

use serde_json::{Map, Value};

/// The serialized structure returned to callers.
///
/// Either a bare representation (any JSON value) or an object whose first
/// entry is keyed by the root key, followed by sibling metadata entries.
pub type Envelope = Value;

/// An ordered key/value mapping.
pub type Fields = Map<String, Value>;

/// Key used for metadata when an entity does not name its own.
pub const DEFAULT_META_KEY: &str = "meta";

/// Returns `false` for `null` and `false`, `true` for everything else.
///
/// Empty strings, zero and empty collections are all truthy.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

//! Serializer option maps.
//!
//! Options arrive either as typed structs or as open-ended JSON maps. The
//! `root` option is presence-sensitive: leaving it out falls back to the
//! entity's default root key, while an explicit `null` or `false` suppresses
//! root wrapping entirely.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::{is_truthy, Fields};
use crate::error::{OptionsError, OptionsResult};

const WRAP_IN_ARRAY_KEY: &str = "wrap_in_array";
const INTERNAL_WRAP_IN_ARRAY_KEY: &str = "_wrap_in_array";

/// Root-key override for a single serialization call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RootOption {
    /// No override was given; use the entity's default root key.
    #[default]
    Unspecified,
    /// Explicitly disabled; return the bare representation.
    Suppressed,
    /// Explicit root key.
    Key(String),
}

impl RootOption {
    /// Resolve the effective root key against the entity's default.
    pub fn resolve(&self, default: Option<&str>) -> Option<String> {
        match self {
            Self::Unspecified => default.map(str::to_string),
            Self::Suppressed => None,
            Self::Key(key) => Some(key.clone()),
        }
    }

    /// Returns `true` if no override was given.
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

impl From<Option<String>> for RootOption {
    /// `Some` is an explicit key, `None` is an explicit suppression.
    fn from(value: Option<String>) -> Self {
        match value {
            Some(key) => Self::Key(key),
            None => Self::Suppressed,
        }
    }
}

impl Serialize for RootOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unspecified | Self::Suppressed => serializer.serialize_none(),
            Self::Key(key) => serializer.serialize_str(key),
        }
    }
}

impl<'de> Deserialize<'de> for RootOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(false) => Ok(Self::Suppressed),
            Value::Bool(true) => Ok(Self::Unspecified),
            Value::String(key) => Ok(Self::Key(key)),
            other => Err(de::Error::custom(format!(
                "root must be a string, null, or boolean, got {other}"
            ))),
        }
    }
}

/// Options for a single envelope-producing call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Root-key override.
    #[serde(skip_serializing_if = "RootOption::is_unspecified")]
    pub root: RootOption,
}

impl SerializeOptions {
    /// Options with an explicit root key.
    pub fn with_root(key: impl Into<String>) -> Self {
        Self {
            root: RootOption::Key(key.into()),
        }
    }

    /// Options that suppress root wrapping.
    pub fn without_root() -> Self {
        Self {
            root: RootOption::Suppressed,
        }
    }

    /// Parse an open-ended option map. Unrecognised keys are ignored and
    /// `null` is treated as an empty map.
    pub fn from_json(value: &Value) -> OptionsResult<Self> {
        parse_map(value)
    }
}

/// Construction options for the default serializer.
///
/// When parsed from a map the flag is read from `_wrap_in_array`, falling
/// back to `wrap_in_array`, and tested for truthiness: `null`, `false` and
/// a missing key turn wrapping off, any other value turns it on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DefaultSerializerOptions {
    /// Wrap the result in a one-element list (and nil in an empty one).
    pub wrap_in_array: bool,
}

impl<'de> Deserialize<'de> for DefaultSerializerOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Fields::deserialize(deserializer)?;
        let flag = map
            .get(INTERNAL_WRAP_IN_ARRAY_KEY)
            .or_else(|| map.get(WRAP_IN_ARRAY_KEY));
        Ok(Self {
            wrap_in_array: flag.is_some_and(is_truthy),
        })
    }
}

impl DefaultSerializerOptions {
    /// Options with array wrapping turned on.
    pub fn wrapped() -> Self {
        Self {
            wrap_in_array: true,
        }
    }

    /// Parse an open-ended option map. Unrecognised keys are ignored and
    /// `null` is treated as an empty map.
    pub fn from_json(value: &Value) -> OptionsResult<Self> {
        parse_map(value)
    }
}

fn parse_map<T>(value: &Value) -> OptionsResult<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match value {
        Value::Null => Ok(T::default()),
        Value::Object(_) => {
            T::deserialize(value).map_err(|e| OptionsError::Invalid(e.to_string()))
        }
        other => Err(OptionsError::NotAnObject(other.to_string())),
    }
}

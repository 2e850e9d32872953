use std::fmt;

use amser_types::PATH_SEPARATOR;
use serde::{Deserialize, Serialize};

/// A resolved namespace: the enclosing scope of a serializable type.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace {
    path: String,
    segments: Vec<String>,
}

impl Namespace {
    /// Build a namespace from a `::`-separated path.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let segments = path
            .split(PATH_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { path, segments }
    }

    /// The full path, e.g. `Shop::Admin`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path split into segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The innermost segment, e.g. `Admin` for `Shop::Admin`.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The enclosing namespace, or `None` at the top level.
    pub fn parent(&self) -> Option<Namespace> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self::new(
            self.segments[..self.segments.len() - 1].join(PATH_SEPARATOR),
        ))
    }

    /// Qualify a type name inside this namespace.
    ///
    /// This is how serializers for types in the same namespace are located:
    /// `Shop` qualifies `ProductSerializer` as `Shop::ProductSerializer`.
    pub fn qualify(&self, name: &str) -> String {
        if self.path.is_empty() {
            return name.to_string();
        }
        format!("{}{PATH_SEPARATOR}{name}", self.path)
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self.path)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

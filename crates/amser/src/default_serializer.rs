use std::fmt;
use std::sync::Arc;

use amser_namespace::{Namespace, NamespaceSlot, NamespaceStore};
use amser_types::{DefaultSerializerOptions, Envelope, SerializeOptions};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::serializable::Serializable;

/// Uniform serializer for any `serde::Serialize` value.
///
/// The wrapped object may be absent. With `wrap_in_array` set, an absent
/// object serializes to `[]` and a present one to a one-element list;
/// otherwise the object's own representation is returned as-is and an
/// absent object becomes `null`.
///
/// Root options are ignored: the object's representation is never wrapped
/// in a root key.
pub struct DefaultSerializer<T> {
    object: Option<T>,
    wrap_in_array: bool,
    namespace_store: Option<Arc<dyn NamespaceStore>>,
    namespace: NamespaceSlot,
}

impl<T: Serialize> DefaultSerializer<T> {
    /// Create a serializer for `object`.
    pub fn new(object: Option<T>, options: &DefaultSerializerOptions) -> Self {
        Self {
            object,
            wrap_in_array: options.wrap_in_array,
            namespace_store: None,
            namespace: NamespaceSlot::new(),
        }
    }

    /// Create a serializer that wraps its output in a list.
    pub fn wrapping(object: Option<T>) -> Self {
        Self::new(object, &DefaultSerializerOptions::wrapped())
    }

    /// Attach the store used by [`resolve_namespace`](Self::resolve_namespace).
    pub fn with_namespace_store(mut self, store: Arc<dyn NamespaceStore>) -> Self {
        self.namespace_store = Some(store);
        self
    }

    /// The wrapped object.
    pub fn object(&self) -> Option<&T> {
        self.object.as_ref()
    }

    /// Whether output is wrapped in a list.
    pub fn wrap_in_array(&self) -> bool {
        self.wrap_in_array
    }

    /// Serialize the wrapped object.
    pub fn as_json(&self, options: &SerializeOptions) -> Result<Envelope, serde_json::Error> {
        self.to_envelope(options)
    }

    /// Same as [`as_json`](Self::as_json).
    pub fn serializable_hash(
        &self,
        options: &SerializeOptions,
    ) -> Result<Envelope, serde_json::Error> {
        self.to_envelope(options)
    }

    /// Same as [`as_json`](Self::as_json).
    pub fn serializable_object(
        &self,
        options: &SerializeOptions,
    ) -> Result<Envelope, serde_json::Error> {
        self.to_envelope(options)
    }

    /// This serializer's namespace, memoized on first use.
    ///
    /// Returns `None` when no store is attached.
    pub fn resolve_namespace(&self) -> Option<Arc<Namespace>> {
        let store = self.namespace_store.as_deref()?;
        self.namespace(store)
    }
}

impl<T: Serialize> Serializable for DefaultSerializer<T> {
    type Error = serde_json::Error;

    fn bare_representation(&self, _options: &SerializeOptions) -> Result<Envelope, Self::Error> {
        match &self.object {
            Some(object) => serde_json::to_value(object),
            None => Ok(Value::Null),
        }
    }

    fn namespace_slot(&self) -> &NamespaceSlot {
        &self.namespace
    }

    fn to_envelope(&self, options: &SerializeOptions) -> Result<Envelope, Self::Error> {
        if self.object.is_none() && self.wrap_in_array {
            debug!("absent object; returning empty list");
            return Ok(Value::Array(Vec::new()));
        }
        let hash = self.bare_representation(options)?;
        if self.wrap_in_array {
            Ok(Value::Array(vec![hash]))
        } else {
            Ok(hash)
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultSerializer")
            .field("object", &self.object)
            .field("wrap_in_array", &self.wrap_in_array)
            .field("has_namespace_store", &self.namespace_store.is_some())
            .finish()
    }
}

//! The [`Serializable`] capability.
//!
//! A type implements [`Serializable::bare_representation`] and, where it
//! has them, a default root key and metadata. The provided methods build the
//! envelope:
//!
//! - a truthy root key yields `{ root: bare, ..associations, meta_key: meta }`
//! - a suppressed or absent root key yields the bare representation alone,
//!   with no associations or metadata merged

use std::borrow::Cow;
use std::sync::Arc;

use amser_namespace::{Namespace, NamespaceSlot, NamespaceStore};
use amser_types::{
    enclosing_namespace, is_truthy, Envelope, Fields, SerializeOptions, DEFAULT_META_KEY,
};
use serde_json::Value;
use tracing::debug;

/// Envelope-producing capability for domain objects.
pub trait Serializable {
    /// Failure raised by the object's own bare representation. It is
    /// propagated unmodified.
    type Error;

    /// The object's own representation, without root wrapping or metadata.
    fn bare_representation(&self, options: &SerializeOptions) -> Result<Envelope, Self::Error>;

    /// Default root key. `None` means the envelope is never wrapped unless
    /// the caller names a root explicitly.
    fn json_key(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Metadata merged beside the root entry. `null` and `false` count as
    /// absent.
    fn meta(&self) -> Option<Value> {
        None
    }

    /// Key under which [`meta`](Self::meta) is merged.
    fn meta_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(DEFAULT_META_KEY)
    }

    /// Sibling entries merged beside the root entry.
    fn embedded_in_root_associations(&self) -> Fields {
        Fields::new()
    }

    /// Fully qualified `::`-separated type path.
    fn type_path(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Per-instance memo for [`namespace`](Self::namespace).
    ///
    /// Each instance owns its slot, so resolution happens once per instance
    /// and later calls return the memoized handle without touching the store.
    fn namespace_slot(&self) -> &NamespaceSlot;

    /// Build the envelope for this object.
    fn to_envelope(&self, options: &SerializeOptions) -> Result<Envelope, Self::Error> {
        let default_key = self.json_key();
        match options.root.resolve(default_key.as_deref()) {
            Some(root) => {
                let mut envelope = Fields::new();
                envelope.insert(root, self.bare_representation(options)?);
                envelope.extend(self.serializable_data());
                Ok(Value::Object(envelope))
            }
            None => {
                debug!(type_path = self.type_path(), "no root key; returning bare representation");
                self.bare_representation(options)
            }
        }
    }

    /// Associations plus the metadata entry, if any.
    ///
    /// Builds a fresh mapping on every call.
    fn serializable_data(&self) -> Fields {
        let mut data = self.embedded_in_root_associations();
        if let Some(meta) = self.meta().filter(is_truthy) {
            data.insert(self.meta_key().into_owned(), meta);
        }
        data
    }

    /// The namespace enclosing this object's type, resolved through `store`.
    ///
    /// Returns `None` for types without an enclosing namespace.
    fn namespace(&self, store: &dyn NamespaceStore) -> Option<Arc<Namespace>> {
        self.namespace_slot().get_or_resolve(|| {
            let module_name = enclosing_namespace(self.type_path())?;
            Some(store.fetch_or_store(module_name, &|| Namespace::new(module_name)))
        })
    }
}

//! Object-to-envelope serialization.
//!
//! Turns a domain object into a nested key/value [`Envelope`] ready for any
//! serde encoder, optionally wrapped in a named root key, merged with
//! sibling metadata, and optionally wrapped in a list.
//!
//! # Components
//!
//! - [`Serializable`] — The capability a type implements to produce
//!   envelopes: root-key resolution, metadata merge, namespace lookup.
//! - [`DefaultSerializer`] — Uniform entry point for any `serde::Serialize`
//!   value, including an absent one, with optional array wrapping.
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//!
//! use amser::{Envelope, NamespaceSlot, Serializable, SerializeOptions};
//! use serde_json::json;
//!
//! struct Product {
//!     name: String,
//!     namespace: NamespaceSlot,
//! }
//!
//! impl Serializable for Product {
//!     type Error = std::convert::Infallible;
//!
//!     fn bare_representation(&self, _: &SerializeOptions) -> Result<Envelope, Self::Error> {
//!         Ok(json!({ "name": self.name }))
//!     }
//!
//!     fn json_key(&self) -> Option<Cow<'_, str>> {
//!         Some(Cow::Borrowed("product"))
//!     }
//!
//!     fn meta(&self) -> Option<Envelope> {
//!         Some(json!({ "count": 5 }))
//!     }
//!
//!     fn namespace_slot(&self) -> &NamespaceSlot {
//!         &self.namespace
//!     }
//! }
//!
//! let product = Product {
//!     name: "lamp".into(),
//!     namespace: NamespaceSlot::new(),
//! };
//! assert_eq!(
//!     product.to_envelope(&SerializeOptions::default()).unwrap(),
//!     json!({ "product": { "name": "lamp" }, "meta": { "count": 5 } })
//! );
//! assert_eq!(
//!     product.to_envelope(&SerializeOptions::without_root()).unwrap(),
//!     json!({ "name": "lamp" })
//! );
//! ```

pub mod default_serializer;
pub mod serializable;

pub use default_serializer::DefaultSerializer;
pub use serializable::Serializable;

pub use amser_namespace::{InMemoryNamespaceStore, Namespace, NamespaceSlot, NamespaceStore};
pub use amser_types::{
    is_truthy, root_name, DefaultSerializerOptions, Envelope, Fields, OptionsError, RootOption,
    SerializeOptions, DEFAULT_META_KEY,
};

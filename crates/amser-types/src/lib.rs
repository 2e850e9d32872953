//! Foundation types for amser.
//!
//! This crate provides the value and configuration types shared by the
//! serializer crates. Every other amser crate depends on `amser-types`.
//!
//! # Key Types
//!
//! - [`Envelope`] — The serialized structure handed back to callers
//! - [`Fields`] — An ordered key/value mapping (associations, metadata)
//! - [`RootOption`] — Tri-state root-key override: unspecified, suppressed, or explicit
//! - [`SerializeOptions`] — Per-call options for envelope production
//! - [`DefaultSerializerOptions`] — Construction options for the default serializer
//!
//! # Naming
//!
//! - [`enclosing_namespace`] — Strip the last `::` segment from a type path
//! - [`root_name`] — Derive the default root key from a type path

pub mod envelope;
pub mod error;
pub mod naming;
pub mod options;

pub use envelope::{is_truthy, Envelope, Fields, DEFAULT_META_KEY};
pub use error::{OptionsError, OptionsResult};
pub use naming::{enclosing_namespace, last_segment, root_name, PATH_SEPARATOR};
pub use options::{DefaultSerializerOptions, RootOption, SerializeOptions};

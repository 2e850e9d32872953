//! Namespace resolution for amser.
//!
//! A serializable type's namespace is the enclosing path of its type name
//! (`Shop::Product` lives in `Shop`). Resolved namespaces are shared through
//! a [`NamespaceStore`] so every caller asking for the same path gets the
//! same [`Namespace`] handle.
//!
//! # Modules
//!
//! - [`namespace`] — The [`Namespace`] value
//! - [`traits`] — The [`NamespaceStore`] fetch-or-store interface
//! - [`memory`] — In-memory [`InMemoryNamespaceStore`]
//! - [`slot`] — Per-instance [`NamespaceSlot`] memo
//!
//! # Design Rules
//!
//! 1. Entries are never invalidated once stored.
//! 2. The first stored handle for a key wins; later stores return it.
//! 3. Stores are injected, never reached through a global.

pub mod memory;
pub mod namespace;
pub mod slot;
pub mod traits;

pub use memory::InMemoryNamespaceStore;
pub use namespace::Namespace;
pub use slot::NamespaceSlot;
pub use traits::NamespaceStore;

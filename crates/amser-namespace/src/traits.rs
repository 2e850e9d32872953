//! The [`NamespaceStore`] trait defining the namespace cache interface.

use std::sync::Arc;

use crate::namespace::Namespace;

/// Lazy, memoizing store of resolved namespaces keyed by path.
///
/// Implementations must satisfy these invariants:
/// - Entries are never invalidated or replaced once stored.
/// - `store` is insert-if-absent: when a key is already present the
///   existing handle is returned and the new value is dropped.
/// - All callers converge on the same `Arc` for a key. The compute closure
///   passed to `fetch_or_store` may run more than once under a race, but
///   only one result is ever published.
pub trait NamespaceStore: Send + Sync {
    /// Look up a cached namespace.
    fn fetch(&self, key: &str) -> Option<Arc<Namespace>>;

    /// Insert a namespace unless the key is already present, returning the
    /// handle that ends up cached.
    fn store(&self, key: &str, namespace: Namespace) -> Arc<Namespace>;

    /// Number of cached namespaces.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been cached yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the cached namespace for `key`, computing and storing it on a
    /// miss.
    fn fetch_or_store(&self, key: &str, compute: &dyn Fn() -> Namespace) -> Arc<Namespace> {
        if let Some(cached) = self.fetch(key) {
            return cached;
        }
        self.store(key, compute())
    }
}

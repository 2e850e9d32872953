use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::namespace::Namespace;
use crate::traits::NamespaceStore;

/// In-memory, HashMap-based namespace store.
///
/// Entries live behind a `RwLock`; hits only take the read lock. Share one
/// instance across serializers with `Arc<InMemoryNamespaceStore>`.
pub struct InMemoryNamespaceStore {
    entries: RwLock<HashMap<String, Arc<Namespace>>>,
}

impl InMemoryNamespaceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return a sorted list of all cached keys.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryNamespaceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceStore for InMemoryNamespaceStore {
    fn fetch(&self, key: &str) -> Option<Arc<Namespace>> {
        let map = self.entries.read().expect("lock poisoned");
        map.get(key).cloned()
    }

    fn store(&self, key: &str, namespace: Namespace) -> Arc<Namespace> {
        let mut map = self.entries.write().expect("lock poisoned");
        if let Some(existing) = map.get(key) {
            debug!(key, "namespace already cached");
            return Arc::clone(existing);
        }
        debug!(key, "caching namespace");
        let handle = Arc::new(namespace);
        map.insert(key.to_string(), Arc::clone(&handle));
        handle
    }

    fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }
}

impl std::fmt::Debug for InMemoryNamespaceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryNamespaceStore")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // -----------------------------------------------------------------------
    // Fetch / store
    // -----------------------------------------------------------------------

    #[test]
    fn fetch_missing_returns_none() {
        let store = InMemoryNamespaceStore::new();
        assert!(store.fetch("Shop").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn store_then_fetch_returns_same_handle() {
        let store = InMemoryNamespaceStore::new();
        let stored = store.store("Shop", Namespace::new("Shop"));
        let fetched = store.fetch("Shop").expect("should be cached");
        assert!(Arc::ptr_eq(&stored, &fetched));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn first_store_wins() {
        let store = InMemoryNamespaceStore::new();
        let first = store.store("Shop", Namespace::new("Shop"));
        let second = store.store("Shop", Namespace::new("Other"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.path(), "Shop");
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // fetch_or_store
    // -----------------------------------------------------------------------

    #[test]
    fn fetch_or_store_computes_once_when_uncontended() {
        let store = InMemoryNamespaceStore::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Namespace::new("Shop")
        };

        let a = store.fetch_or_store("Shop", &compute);
        let b = store.fetch_or_store("Shop", &compute);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn distinct_keys_are_cached_separately() {
        let store = InMemoryNamespaceStore::new();
        store.fetch_or_store("Shop", &|| Namespace::new("Shop"));
        store.fetch_or_store("Shop::Admin", &|| Namespace::new("Shop::Admin"));
        assert_eq!(store.keys(), vec!["Shop".to_string(), "Shop::Admin".to_string()]);
    }

    // -----------------------------------------------------------------------
    // Concurrent convergence
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_callers_converge_on_one_handle() {
        use std::thread;

        let store = Arc::new(InMemoryNamespaceStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.fetch_or_store("Shop", &|| Namespace::new("Shop")))
            })
            .collect();

        let results: Vec<Arc<Namespace>> = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .collect();
        for ns in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], ns));
        }
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Default / Debug
    // -----------------------------------------------------------------------

    #[test]
    fn default_creates_empty_store() {
        assert!(InMemoryNamespaceStore::default().is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryNamespaceStore::new();
        store.store("Shop", Namespace::new("Shop"));
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryNamespaceStore"));
        assert!(debug.contains("entry_count"));
    }
}

use std::sync::{Arc, OnceLock};

use crate::namespace::Namespace;

/// Per-instance memo for a resolved namespace.
///
/// Resolution runs at most once per slot; an absent namespace is memoized
/// as well, so a top-level type does not re-derive its path on every call.
#[derive(Debug, Default)]
pub struct NamespaceSlot {
    cell: OnceLock<Option<Arc<Namespace>>>,
}

impl NamespaceSlot {
    /// Create an unresolved slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized namespace, running `resolve` on first use.
    pub fn get_or_resolve<F>(&self, resolve: F) -> Option<Arc<Namespace>>
    where
        F: FnOnce() -> Option<Arc<Namespace>>,
    {
        self.cell.get_or_init(resolve).clone()
    }

    /// Returns `true` once resolution has happened.
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Clone for NamespaceSlot {
    // Clones start unresolved; the memo belongs to one instance.
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn resolves_once() {
        let slot = NamespaceSlot::new();
        let calls = Cell::new(0);
        let resolve = || {
            calls.set(calls.get() + 1);
            Some(Arc::new(Namespace::new("Shop")))
        };

        assert!(!slot.is_resolved());
        let a = slot.get_or_resolve(resolve).unwrap();
        let b = slot
            .get_or_resolve(|| panic!("should not resolve twice"))
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.get(), 1);
        assert!(slot.is_resolved());
    }

    #[test]
    fn absent_namespace_is_memoized() {
        let slot = NamespaceSlot::new();
        assert!(slot.get_or_resolve(|| None).is_none());
        assert!(slot.is_resolved());
        assert!(slot
            .get_or_resolve(|| Some(Arc::new(Namespace::new("Late"))))
            .is_none());
    }

    #[test]
    fn clone_starts_unresolved() {
        let slot = NamespaceSlot::new();
        slot.get_or_resolve(|| None);
        assert!(!slot.clone().is_resolved());
    }
}

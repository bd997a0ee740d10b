//! Resolution of logical style properties to host property names.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::host::StyleSurface;
use crate::vendor::VendorPrefix;

/// Write-once cache from a logical property (`transform`) to the name the
/// host accepts (`webkitTransform`).
///
/// One cache is shared by every widget in an environment. A key is probed
/// at most once successfully; after that the cached name is used for every
/// element. Reads vastly outnumber writes, hence the `RwLock`.
#[derive(Debug, Default)]
pub struct StylePropertyCache {
    resolved: RwLock<AHashMap<String, String>>,
}

impl StylePropertyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached name for `logical`, without probing.
    pub fn get(&self, logical: &str) -> Option<String> {
        self.resolved.read().get(logical).cloned()
    }

    /// Resolve `logical` against `surface`, probing only on a cache miss.
    ///
    /// Variants are tried in [`VendorPrefix::ALL`] order. Returns `None` if
    /// the surface accepts none of them; nothing is cached in that case.
    pub fn resolve<S: StyleSurface + ?Sized>(&self, surface: &S, logical: &str) -> Option<String> {
        if let Some(name) = self.get(logical) {
            return Some(name);
        }

        let Some(name) = VendorPrefix::ALL
            .iter()
            .map(|prefix| prefix.dom_name(logical))
            .find(|candidate| surface.has_property(candidate))
        else {
            tracing::trace!(logical, "no settable variant for style property");
            return None;
        };

        // First writer wins so a key never changes once resolved.
        let name = self
            .resolved
            .write()
            .entry(logical.to_string())
            .or_insert(name)
            .clone();
        tracing::debug!(logical, resolved = %name, "resolved style property");
        Some(name)
    }

    /// Set a logical property on `surface` through its resolved name.
    ///
    /// Returns `false` when the property could not be resolved and nothing
    /// was written.
    pub fn set<S: StyleSurface + ?Sized>(&self, surface: &S, logical: &str, value: &str) -> bool {
        match self.resolve(surface, logical) {
            Some(name) => {
                surface.set_property(&name, value);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.resolved.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeStyle {
        supported: &'static [&'static str],
        probes: Cell<usize>,
        written: RefCell<Vec<(String, String)>>,
    }

    impl FakeStyle {
        fn new(supported: &'static [&'static str]) -> Self {
            Self {
                supported,
                probes: Cell::new(0),
                written: RefCell::new(Vec::new()),
            }
        }
    }

    impl StyleSurface for FakeStyle {
        fn has_property(&self, name: &str) -> bool {
            self.probes.set(self.probes.get() + 1);
            self.supported.contains(&name)
        }

        fn property(&self, _name: &str) -> Option<String> {
            None
        }

        fn set_property(&self, name: &str, value: &str) {
            self.written
                .borrow_mut()
                .push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn test_resolve_prefers_unprefixed() {
        let cache = StylePropertyCache::new();
        let style = FakeStyle::new(&["transform", "webkitTransform"]);
        assert_eq!(cache.resolve(&style, "transform").as_deref(), Some("transform"));
        assert_eq!(style.probes.get(), 1);
    }

    #[test]
    fn test_resolve_falls_back_to_vendor() {
        let cache = StylePropertyCache::new();
        let style = FakeStyle::new(&["MozTransformOrigin"]);
        assert_eq!(
            cache.resolve(&style, "transform-origin").as_deref(),
            Some("MozTransformOrigin")
        );
        assert_eq!(style.probes.get(), 3);
    }

    #[test]
    fn test_resolution_is_cached() {
        let cache = StylePropertyCache::new();
        let style = FakeStyle::new(&["webkitTransform"]);
        cache.resolve(&style, "transform");
        let probes = style.probes.get();

        let other = FakeStyle::new(&["transform"]);
        assert_eq!(
            cache.resolve(&other, "transform").as_deref(),
            Some("webkitTransform")
        );
        assert_eq!(style.probes.get(), probes);
        assert_eq!(other.probes.get(), 0);
    }

    #[test]
    fn test_unresolved_is_not_cached() {
        let cache = StylePropertyCache::new();
        let style = FakeStyle::new(&[]);
        assert!(!cache.set(&style, "transform", "rotate(1deg)"));
        assert!(cache.is_empty());
        assert!(style.written.borrow().is_empty());
    }

    #[test]
    fn test_set_writes_resolved_name() {
        let cache = StylePropertyCache::new();
        let style = FakeStyle::new(&["msTransform"]);
        assert!(cache.set(&style, "transform", "rotate(5deg)"));
        assert_eq!(
            style.written.borrow().as_slice(),
            &[("msTransform".to_string(), "rotate(5deg)".to_string())]
        );
        assert_eq!(cache.len(), 1);
    }
}

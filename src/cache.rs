use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::{LazyLock, RwLock}
};

use crate::diagnostics::Diagnostic;

/// Global diagnostic cache
static DIAGNOSTIC_CACHE: LazyLock<RwLock<DiagnosticCache>> =
    LazyLock::new(|| RwLock::new(DiagnosticCache::new(1000)));

/// Per-document diagnostics, valid for one version.
///
/// Keyed by document identity (path or URI). A lookup hits only when the
/// stored version matches, so stale results are never served after an
/// edit.
pub struct DiagnosticCache {
    cache:    HashMap<String, CacheEntry>,
    max_size: usize
}

#[derive(Clone)]
struct CacheEntry {
    version:     u64,
    diagnostics: Vec<Diagnostic>
}

impl DiagnosticCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size
        }
    }

    pub fn get(&self, key: &str, version: u64) -> Option<Vec<Diagnostic>> {
        self.cache
            .get(key)
            .filter(|entry| entry.version == version)
            .map(|entry| entry.diagnostics.clone())
    }

    pub fn insert(&mut self, key: &str, version: u64, diagnostics: Vec<Diagnostic>) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size && !self.cache.contains_key(key) {
            let keys: Vec<_> = self.cache.keys().take(self.max_size / 2).cloned().collect();
            for k in keys {
                self.cache.remove(&k);
            }
        }

        self.cache.insert(
            key.to_owned(),
            CacheEntry {
                version,
                diagnostics
            }
        );
    }

    /// Drop a document's entry, e.g. when it is closed
    pub fn remove(&mut self, key: &str) {
        self.cache.remove(key);
    }
}

/// Content hash usable as a document version.
pub fn content_version(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

/// Get cached diagnostics or None
pub fn get_cached(key: &str, version: u64) -> Option<Vec<Diagnostic>> {
    DIAGNOSTIC_CACHE.read().ok()?.get(key, version)
}

/// Cache diagnostics for a document version
pub fn cache_diagnostics(key: &str, version: u64, diagnostics: Vec<Diagnostic>) {
    if let Ok(mut cache) = DIAGNOSTIC_CACHE.write() {
        cache.insert(key, version, diagnostics);
    }
}

/// Drop a closed document's cached diagnostics
pub fn evict(key: &str) {
    if let Ok(mut cache) = DIAGNOSTIC_CACHE.write() {
        cache.remove(key);
    }
}

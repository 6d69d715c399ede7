//! In-memory state simulators
//!
//! Deterministic, disposable stand-ins for the cache store and the persistent
//! record store during a test run. No durability, no eviction, no TTL, no
//! shared process-wide state: every instance is independent and lives only as
//! long as the test holds it.

use std::collections::BTreeMap;

/// Minimal read/write surface of a key-value cache.
///
/// Business logic under test takes `&mut impl CacheStore` so a test can hand
/// it a [`CacheState`] where production code would reach a real cache client.
pub trait CacheStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: &str);
    /// Remove a key; returns whether it was present.
    fn delete(&mut self, key: &str) -> bool;
    fn contains_key(&self, key: &str) -> bool;
}

/// Simulated cache: an owned string-to-string map seeded from the caller's
/// initial entries. Iteration order is deterministic (sorted by key).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheState {
    entries: BTreeMap<String, String>,
}

impl CacheState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl CacheStore for CacheState {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CacheState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Create a simulated cache pre-populated from `initial`.
///
/// The entries are copied in; later mutation of the returned state never
/// touches whatever collection the caller built `initial` from.
pub fn cache_state<K, V>(initial: impl IntoIterator<Item = (K, V)>) -> CacheState
where
    K: Into<String>,
    V: Into<String>,
{
    initial.into_iter().collect()
}

/// Create a simulated record store from an initial structured value.
///
/// Returns an owned copy the test can mutate freely without corrupting a
/// shared fixture object. The copy is fully independent: nested fields are
/// cloned along with the top level, so no aliasing with the caller's value
/// survives.
pub fn record_state<T: Clone>(initial: &T) -> T {
    initial.clone()
}

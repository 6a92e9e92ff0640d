// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Threadsafe key-value map: the registry's `active` table.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;

/// A `HashMap` guarded by a single mutex, exposing only operations that
/// release the lock before the caller can observe more than one entry at
/// a time — no iterator holds the lock while yielding.
pub struct ConcurrentMap<K, V> {
    inner: Mutex<HashMap<K, V>>,
}

impl<K, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self { inner: Mutex::new(HashMap::new()) }
    }
}

impl<K, V> ConcurrentMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains_key(key)
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.lock().insert(key, value);
    }

    pub fn pop(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }

    /// Snapshot of every key currently present. Released before returning —
    /// later lookups against individual keys may miss entries removed in
    /// the meantime, which every caller of `keys()` must tolerate.
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys().cloned().collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

#[cfg(test)]
#[path = "map_tests.rs"]
mod tests;

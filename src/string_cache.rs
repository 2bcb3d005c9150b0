use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Key to whole-string texture storage. At most one texture per key.
#[derive(Debug)]
pub(crate) struct StringCache<T, K> {
    strings: HashMap<K, T>,
}

impl<T, K> StringCache<T, K> {
    pub(crate) fn new() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.strings.len()
    }

    pub(crate) fn clear(&mut self) {
        self.strings.clear();
    }
}

impl<T, K: Hash + Eq> StringCache<T, K> {
    /// Stores `texture` under `key` and hands back the texture it replaced.
    pub(crate) fn store(&mut self, key: K, texture: T) -> Option<T> {
        self.strings.insert(key, texture)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.strings.get(key)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.strings.contains_key(key)
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.strings.remove(key)
    }
}

impl<T, K> Default for StringCache<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

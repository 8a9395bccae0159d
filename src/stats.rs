pub mod aggregate;
pub mod availability;
pub mod dataset;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Occurrence count per key. Keys never incremented read as zero and are not
/// part of the serialized output. Iteration is in ascending key order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Counter<K: Ord>(BTreeMap<K, u32>);

impl<K: Ord> Counter<K> {
    pub fn new() -> Counter<K> {
        Counter(BTreeMap::new())
    }

    pub fn increment(&mut self, key: K) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    pub fn get<Q>(&self, key: &Q) -> u32
    where
        K: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, u32> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Ord> Default for Counter<K> {
    fn default() -> Self {
        Counter::new()
    }
}

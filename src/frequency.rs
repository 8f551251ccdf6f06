//! Exact-match occurrence counter backed by a fixed bucket array with
//! separate chaining.

use serde::Serialize;

/// Prime bucket count. The table never resizes.
pub const BUCKET_COUNT: usize = 101;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct FrequencyIndex {
    buckets: Vec<Vec<FrequencyEntry>>,
    total_entries: usize,
}

impl Default for FrequencyIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// djb2: `hash * 33 + byte`, seeded with 5381, wrapping on overflow.
pub fn hash_key(key: &str) -> u64 {
    key.bytes().fold(5381u64, |hash, byte| {
        hash.wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(u64::from(byte))
    })
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            total_entries: 0,
        }
    }

    fn bucket_of(key: &str) -> usize {
        (hash_key(key) % BUCKET_COUNT as u64) as usize
    }

    /// Increments the count for `key`, creating the entry at 1 if absent.
    pub fn insert(&mut self, key: &str) {
        let chain = &mut self.buckets[Self::bucket_of(key)];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            entry.count += 1;
            return;
        }

        chain.push(FrequencyEntry {
            key: key.to_string(),
            count: 1,
        });
        self.total_entries += 1;
    }

    pub fn count_of(&self, key: &str) -> usize {
        self.buckets[Self::bucket_of(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map_or(0, |entry| entry.count)
    }

    /// Every entry, bucket index ascending then chain order. The order is
    /// stable for as long as the index is not modified.
    pub fn all_entries(&self) -> impl Iterator<Item = &FrequencyEntry> + '_ {
        self.buckets.iter().flatten()
    }

    /// Number of distinct keys, not the sum of their counts.
    pub fn total_distinct_keys(&self) -> usize {
        self.total_entries
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }

    /// Length of the longest collision chain.
    #[cfg(test)]
    pub(crate) fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.total_entries = 0;
    }
}

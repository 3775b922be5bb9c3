use std::collections::BTreeMap;

/// The embedded ordered key-value store boundary.
///
/// Everything the node persists goes through this trait; a production
/// backend (rocksdb-style) plugs in behind it without touching callers.
/// Keys follow the prefixed schema in [`keys`](crate::keys).
pub trait KvStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any prior value.
    fn put(&mut self, key: Vec<u8>, value: Vec<u8>);

    /// Remove the value under `key` if present.
    fn delete(&mut self, key: &[u8]);
}

/// In-memory [`KvStore`] backed by an ordered map.
///
/// Used by tests and tooling; contents do not survive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.map.get(key).cloned()
    }

    fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.map.insert(key, value);
    }

    fn delete(&mut self, key: &[u8]) {
        self.map.remove(key);
    }
}

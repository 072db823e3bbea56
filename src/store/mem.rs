//! In-memory preimage store backed by a hash map
//!
//! Intended for testing and simulation harnesses: large programs may need
//! more preimage data than fits in memory. Safe for concurrent use.

use crate::model::Hash;
use crate::store::PreimageKv;
use crate::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;

/// A thread-safe in-memory map from hash to preimage bytes
///
/// A single readers-writer lock guards the whole key space: any number of
/// concurrent [`get`](MemKv::get) calls proceed in parallel, while a
/// [`put`](MemKv::put) holds exclusive access for its duration. Values are
/// copied on the way in and on the way out, so callers never alias
/// store-internal buffers.
pub struct MemKv {
    inner: RwLock<HashMap<Hash, Vec<u8>>>,
}

impl MemKv {
    /// Create an empty store
    pub fn new() -> Self {
        MemKv {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite the value for `key`
    ///
    /// Stores an independent copy of `value`; mutating the caller's buffer
    /// afterward does not affect stored state. Last writer wins.
    pub fn put(&self, key: Hash, value: &[u8]) -> Result<()> {
        let mut map = self.inner.write();
        map.insert(key, value.to_vec());
        Ok(())
    }

    /// Return a copy of the value stored under `key`
    ///
    /// Fails with [`Error::NotFound`] when the key is absent.
    pub fn get(&self, key: Hash) -> Result<Vec<u8>> {
        let map = self.inner.read();
        map.get(&key).cloned().ok_or(Error::NotFound(key))
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl Default for MemKv {
    fn default() -> Self {
        MemKv::new()
    }
}

impl PreimageKv for MemKv {
    fn put(&self, key: Hash, value: &[u8]) -> Result<()> {
        MemKv::put(self, key, value)
    }

    fn get(&self, key: Hash) -> Result<Vec<u8>> {
        MemKv::get(self, key)
    }
}

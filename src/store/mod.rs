//! Preimage blob storage
//!
//! This module implements the store an oracle host reads preimages from.
//! Blobs are stored under their 32-byte hash; the only lookup is exact-key.

mod fixture;
mod mem;

pub use mem::MemKv;

use crate::model::Hash;
use crate::Result;

/// Exact-key preimage storage, as consumed by an oracle host.
///
/// Implementations hand back owned copies on `get`, so a caller can never
/// hold a reference into store-internal memory.
pub trait PreimageKv: Send + Sync {
    /// Store `value` under `key`, overwriting any previous value.
    fn put(&self, key: Hash, value: &[u8]) -> Result<()>;

    /// Fetch a copy of the value stored under `key`.
    ///
    /// Fails with [`crate::Error::NotFound`] when the key is absent; an
    /// empty stored value is returned as an empty vector, never as a miss.
    fn get(&self, key: Hash) -> Result<Vec<u8>>;
}

//! # preimage-kv
//!
//! An in-memory preimage key-value store for oracle test harnesses.
//!
//! Callers store byte blobs keyed by a fixed 32-byte hash and retrieve them
//! later. The store is built for correctness and isolation rather than
//! throughput: access is guarded by a readers-writer lock, and values are
//! copied on both store and retrieve so no caller ever aliases internal
//! buffers. There is no eviction, persistence, or iteration; the only
//! lookup is exact-key.
//!
//! ## Core Concepts
//!
//! - **Hash**: an opaque 32-byte content-addressed key
//! - **MemKv**: the thread-safe in-memory store
//! - **PreimageKv**: the put/get trait an oracle host consumes
//! - **Fixtures**: JSON documents of hex-encoded witness data that hydrate
//!   a store in one shot
//!
//! ## Example
//!
//! ```ignore
//! use preimage_kv::{Hash, MemKv};
//!
//! let kv = MemKv::from_fixture("witness.json")?;
//! let preimage = kv.get(Hash::from_hex("0xaaaa...")?)?;
//! ```

pub mod model;
pub mod store;

mod error;

pub use error::{Error, Result};
pub use model::Hash;
pub use store::{MemKv, PreimageKv};

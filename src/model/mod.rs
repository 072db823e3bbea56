//! Core data model types for preimage-kv

mod hash;

pub use hash::Hash;

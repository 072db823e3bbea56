//! Bulk population from a witness fixture file
//!
//! Fixture format:
//! ```text
//! {
//!   "witnessData": {
//!     "0x<64 hex digits>": "0x<hex digits>",
//!     ...
//!   }
//! }
//! ```
//!
//! Keys are 32-byte hashes; values are `0x`-prefixed hex-encoded preimages.

use crate::model::Hash;
use crate::store::MemKv;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Deserialize)]
struct Fixture {
    #[serde(rename = "witnessData", default)]
    witness_data: HashMap<Hash, String>,
}

impl MemKv {
    /// Build a store from a JSON witness fixture at `path`
    ///
    /// The fixture is read once and discarded; the returned store contains
    /// exactly the decoded key/value pairs. The first malformed value
    /// aborts the load: entries are never silently skipped. Errors:
    ///
    /// - [`Error::Io`] when the file cannot be opened or read
    /// - [`Error::Parse`] when the document is not the expected shape
    /// - [`Error::InvalidHex`] when a value is not `0x`-prefixed valid hex
    pub fn from_fixture(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let fixture: Fixture = serde_json::from_reader(BufReader::new(file))?;

        let kv = MemKv::new();
        for (key, value) in &fixture.witness_data {
            let digits = value
                .strip_prefix("0x")
                .ok_or_else(|| Error::InvalidHex(format!("missing 0x prefix: {value:?}")))?;
            let bytes = hex::decode(digits)
                .map_err(|e| Error::InvalidHex(format!("{value:?}: {e}")))?;
            kv.put(*key, &bytes)?;
        }

        Ok(kv)
    }
}

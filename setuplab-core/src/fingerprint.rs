//! Output fingerprinting: deterministic identity of an analysis result.
//!
//! BLAKE3 over the canonical `serde_json` encoding. Struct fields serialize
//! in declaration order and floats use shortest round-trip formatting, so two
//! runs on identical input always produce the same digest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// BLAKE3 digest as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(blake3::hash(data).to_hex().to_string())
    }

    /// Fingerprint of any serializable value.
    ///
    /// Falls back to hashing the `Debug` rendering if JSON encoding fails
    /// (non-string map keys); none of this crate's types hit that path.
    pub fn of<T: Serialize + fmt::Debug>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(json) => Self::from_bytes(&json),
            Err(_) => Self::from_bytes(format!("{value:?}").as_bytes()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

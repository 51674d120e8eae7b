//! Digest computation for roster leaves and tree nodes (FNV-1a, 64-bit)
//!
//! The digest is a fast mixing function, not a cryptographic hash. It gives
//! no preimage or collision resistance and must not be treated as
//! tamper-proof.

use serde::{Deserialize, Serialize};
use std::fmt;

/// FNV-1a 64-bit offset basis
const OFFSET_BASIS: u64 = 14695981039346656037;

/// FNV-1a 64-bit prime
const PRIME: u64 = 1099511628211;

/// Lowercase hexadecimal rendering of a 64-bit accumulator, without zero padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compute the digest of arbitrary bytes
pub fn compute_digest(data: &[u8]) -> Digest {
    let mut acc = OFFSET_BASIS;
    for &byte in data {
        acc ^= u64::from(byte);
        acc = acc.wrapping_mul(PRIME);
    }
    Digest(format!("{:x}", acc))
}

/// Digest of two child digests
///
/// Hashes the concatenation of both digest strings, no separator.
pub fn combine_digests(left: &Digest, right: &Digest) -> Digest {
    let mut joined = String::with_capacity(left.0.len() + right.0.len());
    joined.push_str(&left.0);
    joined.push_str(&right.0);
    compute_digest(joined.as_bytes())
}

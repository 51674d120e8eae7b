//! Membership verification against a roster hash tree
//!
//! Presence is decided by a linear scan over every leaf digest. Internal
//! node digests take no part in the check, so this is not an inclusion
//! proof: a leaf whose own digest field was altered goes unnoticed.

use crate::tree::{compute_digest, Digest, Tree};
use serde::Serialize;
use tracing::debug;

/// Outcome of checking one query against a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub query_digest: Digest,
    pub present: bool,
    pub leaves_scanned: usize,
}

/// Leaf digests in depth-first order, left before right
pub fn leaf_digests(tree: &Tree) -> Vec<&Digest> {
    tree.walk()
        .filter(|visit| visit.node.is_leaf())
        .map(|visit| visit.node.digest())
        .collect()
}

/// Check `query` against the tree's leaf set
pub fn verify(tree: Option<&Tree>, query: impl AsRef<[u8]>) -> Verification {
    let query_digest = compute_digest(query.as_ref());
    let Some(tree) = tree else {
        debug!(query_digest = %query_digest, "No tree to verify against");
        return Verification {
            query_digest,
            present: false,
            leaves_scanned: 0,
        };
    };

    let leaves = leaf_digests(tree);
    let present = leaves.iter().any(|leaf| **leaf == query_digest);
    debug!(
        query_digest = %query_digest,
        leaves_scanned = leaves.len(),
        present,
        "Membership check completed"
    );

    Verification {
        query_digest,
        present,
        leaves_scanned: leaves.len(),
    }
}

/// True iff the digest of `query` equals some leaf digest
pub fn contains(tree: Option<&Tree>, query: impl AsRef<[u8]>) -> bool {
    verify(tree, query).present
}

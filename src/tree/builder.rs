//! Tree builder for constructing roster hash trees

use crate::tree::hasher::{self, Digest};
use crate::tree::node::TreeNode;
use crate::tree::walker::PreOrder;
use std::time::Instant;
use tracing::{info, instrument, trace};

/// Immutable hash tree built over a roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: TreeNode,
    leaf_count: usize,
    height: usize,
}

impl Tree {
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Aggregate digest of the roster
    pub fn root_digest(&self) -> &Digest {
        self.root.digest()
    }

    /// Number of roster values the tree was built from
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of combination levels above the leaves (0 for a single leaf)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of nodes, carried nodes included
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Depth-first, pre-order traversal starting at the root
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder::new(&self.root)
    }
}

/// Tree builder for constructing hash trees from an ordered roster
pub struct TreeBuilder<'a, T> {
    leaves: &'a [T],
}

impl<'a, T: AsRef<[u8]>> TreeBuilder<'a, T> {
    /// Create a new tree builder over the given leaf values, in order
    pub fn new(leaves: &'a [T]) -> Self {
        Self { leaves }
    }

    /// Build the tree level by level
    ///
    /// Returns `None` for an empty roster. Nodes are paired left to right;
    /// a trailing odd node is carried to the next level with its digest
    /// unchanged.
    #[instrument(skip(self), fields(leaf_count = self.leaves.len()))]
    pub fn build(&self) -> Option<Tree> {
        if self.leaves.is_empty() {
            info!("Empty roster, no tree built");
            return None;
        }

        let start = Instant::now();
        let mut level: Vec<TreeNode> = self
            .leaves
            .iter()
            .map(|value| TreeNode::leaf(hasher::compute_digest(value.as_ref())))
            .collect();
        let mut height = 0;

        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut nodes = level.into_iter();
            while let Some(left) = nodes.next() {
                let parent = match nodes.next() {
                    Some(right) => {
                        let digest = hasher::combine_digests(left.digest(), right.digest());
                        TreeNode::pair(digest, left, right)
                    }
                    None => TreeNode::carry(left),
                };
                next.push(parent);
            }
            height += 1;
            trace!(height, width = next.len(), "Built tree level");
            level = next;
        }

        let root = level.pop()?;
        let tree = Tree {
            root,
            leaf_count: self.leaves.len(),
            height,
        };

        info!(
            height = tree.height,
            root_digest = %tree.root_digest(),
            duration_us = start.elapsed().as_micros(),
            "Tree build completed"
        );

        Some(tree)
    }
}

/// Build a tree over `leaves`; `None` iff `leaves` is empty
pub fn build_tree<T: AsRef<[u8]>>(leaves: &[T]) -> Option<Tree> {
    TreeBuilder::new(leaves).build()
}

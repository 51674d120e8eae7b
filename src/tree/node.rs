//! Hash tree node types

use crate::tree::hasher::Digest;

/// Child layout of a node
///
/// A node never has a right child without a left one, so that shape is not
/// representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// No children: the node is a roster leaf
    Leaf,
    /// Odd trailing node carried up one level; digest copied from the child
    Carry(Box<TreeNode>),
    /// Two children; digest combines both child digests
    Pair(Box<TreeNode>, Box<TreeNode>),
}

/// A node of the hash tree. Owns its children exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    digest: Digest,
    children: Children,
}

impl TreeNode {
    pub(crate) fn leaf(digest: Digest) -> Self {
        Self {
            digest,
            children: Children::Leaf,
        }
    }

    pub(crate) fn carry(child: TreeNode) -> Self {
        Self {
            digest: child.digest.clone(),
            children: Children::Carry(Box::new(child)),
        }
    }

    pub(crate) fn pair(digest: Digest, left: TreeNode, right: TreeNode) -> Self {
        Self {
            digest,
            children: Children::Pair(Box::new(left), Box::new(right)),
        }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Leaf)
    }

    pub fn left(&self) -> Option<&TreeNode> {
        match &self.children {
            Children::Leaf => None,
            Children::Carry(left) | Children::Pair(left, _) => Some(&**left),
        }
    }

    pub fn right(&self) -> Option<&TreeNode> {
        match &self.children {
            Children::Pair(_, right) => Some(&**right),
            _ => None,
        }
    }
}

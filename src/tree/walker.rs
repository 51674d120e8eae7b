//! Depth-first traversal of hash trees

use crate::tree::node::TreeNode;

/// Position of a visited node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Root,
    Left,
    Right,
}

impl Side {
    /// Tag used in rendered output
    pub fn tag(&self) -> &'static str {
        match self {
            Side::Root => "Root",
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}

/// A node reached during traversal
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
    pub side: Side,
}

/// Pre-order iterator (self, left subtree, right subtree) over an explicit stack
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        Self {
            stack: vec![Visit {
                node: root,
                depth: 0,
                side: Side::Root,
            }],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        // Right is pushed first so the left subtree is visited first.
        if let Some(right) = visit.node.right() {
            self.stack.push(Visit {
                node: right,
                depth: visit.depth + 1,
                side: Side::Right,
            });
        }
        if let Some(left) = visit.node.left() {
            self.stack.push(Visit {
                node: left,
                depth: visit.depth + 1,
                side: Side::Left,
            });
        }
        Some(visit)
    }
}

//! Roster Hash Tree
//!
//! Fixed-leaf hash tree over an ordered roster: one leaf per roster value,
//! pairs combined level by level, odd trailing nodes carried upward unchanged.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod render;
pub mod walker;

pub use builder::{build_tree, Tree, TreeBuilder};
pub use hasher::{combine_digests, compute_digest, Digest};
pub use node::{Children, TreeNode};
pub use render::render_tree;
pub use walker::{PreOrder, Side, Visit};

//! Diagnostic rendering of hash trees

use crate::tree::builder::Tree;

/// Indentation per depth level
const INDENT_WIDTH: usize = 4;

/// Render the tree as one line per node, in pre-order.
///
/// Each line is `"{indent}[{tag}] {digest}"`. No tree renders no lines.
pub fn render_tree(tree: Option<&Tree>) -> Vec<String> {
    let Some(tree) = tree else {
        return Vec::new();
    };
    tree.walk()
        .map(|visit| {
            format!(
                "{:indent$}[{}] {}",
                "",
                visit.side.tag(),
                visit.node.digest(),
                indent = visit.depth * INDENT_WIDTH
            )
        })
        .collect()
}

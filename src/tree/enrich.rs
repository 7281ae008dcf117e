//! Presentation enrichment: inherit group and color from the nearest styled
//! ancestor so every node reaches the renderer fully styled.

use super::TreeNode;

/// Neutral color for an entirely unstyled branch.
pub const DEFAULT_COLOR: &str = "#999999";

/// Top-down pass over the assembled forest, starting from the synthetic
/// super-root context (no group, neutral color). Runs strictly after the
/// builder and before serialization; mutates nodes in place.
pub fn enrich(forest: &mut [TreeNode]) {
    for node in forest {
        enrich_node(node, "", DEFAULT_COLOR);
    }
}

fn enrich_node(node: &mut TreeNode, group: &str, color: &str) {
    if node.group_name.is_empty() {
        node.group_name = group.to_string();
    }
    if node.color.is_empty() {
        node.color = color.to_string();
    }
    let (group, color) = (node.group_name.clone(), node.color.clone());
    for child in &mut node.children {
        enrich_node(child, &group, &color);
    }
}

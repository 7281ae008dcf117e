//! Tree phase: assemble the presentation tree from the validated index.

pub mod enrich;

pub use enrich::{enrich, DEFAULT_COLOR};

use serde::Serialize;

use crate::error::OrgError;
use crate::parse::types::Org;
use crate::resolve::{ResolvedOrg, ResolvedRole};

/// Hard recursion ceiling. The resolve phase already guarantees an acyclic
/// hierarchy; this keeps the builder from hanging if that guarantee breaks.
pub const MAX_DEPTH: usize = 512;

/// A presentation-ready node. Each node is exclusively owned by its parent;
/// the root sequence is owned by the emitted payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub color: String,
    /// Omitted from the payload on leaves.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Build one tree per root, depth-first, preserving child order from the
/// parent→children index.
pub fn build_forest(org: &Org, resolved: &ResolvedOrg) -> Result<Vec<TreeNode>, OrgError> {
    resolved
        .roots
        .iter()
        .filter_map(|id| resolved.role(id))
        .map(|role| build_node(org, resolved, role, 0))
        .collect()
}

fn build_node(
    org: &Org,
    resolved: &ResolvedOrg,
    role: &ResolvedRole,
    depth: usize,
) -> Result<TreeNode, OrgError> {
    if depth >= MAX_DEPTH {
        return Err(OrgError::ExcessiveDepth {
            role: role.id.clone(),
            max: MAX_DEPTH,
        });
    }

    let group = org.groups.get(role.group);
    let name = role
        .title
        .as_deref()
        .unwrap_or(&role.id)
        .trim()
        .to_string();

    let mut children = Vec::new();
    if let Some(child_ids) = resolved.children.get(&role.id) {
        for child_id in child_ids {
            if let Some(child) = resolved.role(child_id) {
                children.push(build_node(org, resolved, child, depth + 1)?);
            }
        }
    }

    Ok(TreeNode {
        id: role.id.clone(),
        name,
        description: role.description.clone().unwrap_or_default(),
        // Left empty when the group carries no styling; the enrich pass
        // fills these from the nearest styled ancestor.
        group_name: group.map(|g| g.name.clone()).unwrap_or_default(),
        color: group.and_then(|g| g.color.clone()).unwrap_or_default(),
        children,
    })
}

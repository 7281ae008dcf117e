//! Emit phase: serialize the styled tree into a self-contained HTML artifact.
//!
//! Public API: `payload(org, forest) -> OrgTree`, `render_html(&OrgTree)`.

mod surface;

use serde::Serialize;

use crate::error::OrgError;
use crate::parse::types::{Org, Orientation};
use crate::tree::{TreeNode, DEFAULT_COLOR};

/// The complete payload consumed by the rendering surface. Field names are a
/// compatibility contract: per-node keys are camelCase (`groupName`) while the
/// top level keeps `logo_url` as-is.
#[derive(Debug, Clone, Serialize)]
pub struct OrgTree {
    pub name: String,
    pub orientation: Orientation,
    pub logo_url: Option<String>,
    pub children: Vec<TreeNode>,
    pub legend: Vec<LegendEntry>,
}

/// One legend swatch per group, in original group order; never deduplicated
/// and never filtered to groups that appear in the tree.
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Assemble the output payload from the org metadata and the styled forest.
pub fn payload(org: &Org, forest: Vec<TreeNode>) -> OrgTree {
    OrgTree {
        name: org.name.clone(),
        orientation: org.orientation,
        logo_url: org.logo_url.clone(),
        children: forest,
        legend: org
            .groups
            .iter()
            .map(|g| LegendEntry {
                name: g.name.clone(),
                color: g.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            })
            .collect(),
    }
}

/// Render the payload into a single HTML page with the JSON inlined, so the
/// artifact needs no external data requests.
pub fn render_html(tree: &OrgTree) -> Result<String, OrgError> {
    let data = serde_json::to_string(tree)?;
    let title = tree.name.replace('&', "&amp;");
    let logo_html = match &tree.logo_url {
        Some(url) => format!("<img class=\"logo\" src=\"{url}\" alt=\"logo\"/>"),
        None => String::new(),
    };

    Ok(surface::TEMPLATE
        .replace("__TITLE__", &title)
        .replace("__DATA__", &data)
        .replace("__LOGO_HTML__", &logo_html))
}

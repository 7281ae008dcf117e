//! Resolve phase: flatten groups into an indexed, validated hierarchy.
//!
//! Applies group-level `default_reports_to` to roles with no explicit parent,
//! builds the flat role index and the parent→children index, and identifies
//! the root roles before any structural validation runs.

pub mod graph;
pub mod validate;

pub use graph::OrgGraph;

use std::collections::HashMap;

use crate::error::OrgError;
use crate::parse::types::Org;

/// A role after group-default filling, with its parent reference normalized.
#[derive(Debug, Clone)]
pub struct ResolvedRole {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reports_to: ReportsTo,
    /// Index of the owning group in `Org::groups`.
    pub group: usize,
}

/// Normalized `reports_to` value.
///
/// Three textual spellings mean "no parent" and must stay distinguishable:
/// existing org descriptions rely on the absent/empty/"null" buckets being
/// concatenated in that order to fix the visual ordering of top-level roles.
/// Do not extend this pattern to new sentinel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportsTo {
    /// Key absent after defaulting, or an explicit YAML null.
    Absent,
    /// Empty string.
    Empty,
    /// The literal string "null".
    NullWord,
    /// Concrete parent role id.
    Role(String),
}

impl ReportsTo {
    pub fn is_root(&self) -> bool {
        !matches!(self, ReportsTo::Role(_))
    }

    fn normalize(raw: Option<String>) -> Self {
        match raw.as_deref() {
            None => ReportsTo::Absent,
            Some("") => ReportsTo::Empty,
            Some("null") => ReportsTo::NullWord,
            Some(id) => ReportsTo::Role(id.to_string()),
        }
    }
}

/// The validated output of the resolve phase.
#[derive(Debug, Clone)]
pub struct ResolvedOrg {
    /// All roles in group order then role order.
    pub roles: Vec<ResolvedRole>,
    /// Role id → position in `roles`.
    pub index: HashMap<String, usize>,
    /// Parent role id → ordered child role ids. Root spellings are not keys
    /// here; roots live in `roots`.
    pub children: HashMap<String, Vec<String>>,
    /// Root role ids in legacy bucket order.
    pub roots: Vec<String>,
}

impl ResolvedOrg {
    pub fn role(&self, id: &str) -> Option<&ResolvedRole> {
        self.index.get(id).map(|&pos| &self.roles[pos])
    }
}

/// Resolve and validate the whole org. Pure; fails on the first structural
/// error with no partial output.
pub fn resolve(org: &Org) -> Result<ResolvedOrg, OrgError> {
    let mut roles: Vec<ResolvedRole> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (gi, group) in org.groups.iter().enumerate() {
        for role in &group.roles {
            // An absent key takes the group default; an explicit null does
            // not, and stays a root marker.
            let effective = match &role.reports_to {
                None => group.default_reports_to.clone(),
                Some(explicit) => explicit.clone(),
            };
            if index.insert(role.id.clone(), roles.len()).is_some() {
                return Err(OrgError::DuplicateRoleId(role.id.clone()));
            }
            roles.push(ResolvedRole {
                id: role.id.clone(),
                title: role.title.clone(),
                description: role.description.clone(),
                reports_to: ReportsTo::normalize(effective),
                group: gi,
            });
        }
    }

    let mut children: HashMap<String, Vec<String>> = HashMap::new();
    for role in &roles {
        if let ReportsTo::Role(parent) = &role.reports_to {
            children
                .entry(parent.clone())
                .or_default()
                .push(role.id.clone());
        }
    }

    let roots = root_order(&roles);

    validate::check_parents(&roles, &index)?;
    let graph = OrgGraph::build(&roles);
    validate::check_reachability(&roles, &graph, &roots)?;

    Ok(ResolvedOrg {
        roles,
        index,
        children,
        roots,
    })
}

/// Legacy root ordering: the absent/null bucket, then the empty-string
/// bucket, then the "null"-string bucket, concatenated rather than merged.
fn root_order(roles: &[ResolvedRole]) -> Vec<String> {
    let mut roots = Vec::new();
    for spelling in [ReportsTo::Absent, ReportsTo::Empty, ReportsTo::NullWord] {
        roots.extend(
            roles
                .iter()
                .filter(|r| r.reports_to == spelling)
                .map(|r| r.id.clone()),
        );
    }
    roots
}

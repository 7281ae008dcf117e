//! Structural validation of the resolved hierarchy.

use std::collections::{HashMap, HashSet};

use petgraph::visit::Bfs;

use super::{OrgGraph, ReportsTo, ResolvedRole};
use crate::error::OrgError;

/// Every concrete parent reference must name a known role.
pub fn check_parents(
    roles: &[ResolvedRole],
    index: &HashMap<String, usize>,
) -> Result<(), OrgError> {
    for role in roles {
        if let ReportsTo::Role(parent) = &role.reports_to {
            if !index.contains_key(parent) {
                return Err(OrgError::DanglingParent {
                    role: role.id.clone(),
                    parent: parent.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Every non-root role must be reachable from some root.
///
/// Each role has exactly one parent, so any reporting cycle is disconnected
/// from every root; a single BFS sweep therefore catches both cycles and
/// orphaned subtrees. The first offender in input order is reported.
pub fn check_reachability(
    roles: &[ResolvedRole],
    graph: &OrgGraph,
    roots: &[String],
) -> Result<(), OrgError> {
    let mut reached: HashSet<petgraph::graph::NodeIndex> = HashSet::new();
    for root in roots {
        let Some(&start) = graph.node_indices.get(root) else {
            continue;
        };
        let mut bfs = Bfs::new(&graph.graph, start);
        while let Some(nx) = bfs.next(&graph.graph) {
            reached.insert(nx);
        }
    }

    for role in roles {
        if role.reports_to.is_root() {
            continue;
        }
        let Some(&idx) = graph.node_indices.get(&role.id) else {
            continue;
        };
        if !reached.contains(&idx) {
            return Err(OrgError::CyclicOrUnreachable(role.id.clone()));
        }
    }
    Ok(())
}

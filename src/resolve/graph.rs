//! petgraph-based directed graph over the resolved reporting relationships.
//!
//! The hierarchy is kept as an explicit id index, not a pointer graph; this
//! wrapper exists purely so structural validation is a data traversal.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::{ReportsTo, ResolvedRole};

pub struct OrgGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl OrgGraph {
    /// Build the parent→child edge graph. Edges whose parent id is unknown
    /// are skipped; those are reported by `validate::check_parents`.
    pub fn build(roles: &[ResolvedRole]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for role in roles {
            let idx = graph.add_node(role.id.clone());
            node_indices.insert(role.id.clone(), idx);
        }

        for role in roles {
            if let ReportsTo::Role(parent) = &role.reports_to {
                if let (Some(&p), Some(&c)) =
                    (node_indices.get(parent), node_indices.get(&role.id))
                {
                    graph.add_edge(p, c, ());
                }
            }
        }

        OrgGraph {
            graph,
            node_indices,
        }
    }
}

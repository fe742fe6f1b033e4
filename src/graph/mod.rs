use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::manifest::Gav;

pub mod layout;
pub mod render;

/// Directed dependency graph keyed by coordinate. Insertion is idempotent;
/// the same coordinate always maps to the same node.
#[derive(Debug, Default)]
pub struct DepGraph {
    graph: DiGraph<Gav, ()>,
    index: HashMap<Gav, NodeIndex>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, gav: Gav) -> NodeIndex {
        if let Some(&ix) = self.index.get(&gav) {
            return ix;
        }
        let ix = self.graph.add_node(gav.clone());
        self.index.insert(gav, ix);
        ix
    }

    /// Adds both endpoints as needed. Re-adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: Gav, to: Gav) {
        let a = self.add_node(from);
        let b = self.add_node(to);
        self.graph.update_edge(a, b, ());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, gav: &Gav) -> bool {
        self.index.contains_key(gav)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Gav)> + '_ {
        self.graph.node_indices().map(|ix| (ix, &self.graph[ix]))
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target()))
    }
}

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex, NodeIndices};
use std::collections::HashMap;

/// Node identifier as supplied in the edge list (opaque string).
pub type NodeName = String;

/// Flow graph - the core data structure.
///
/// Node weights are the raw identifiers; parallel edges between the same
/// endpoints are distinct graph edges. Built once from an edge list and
/// treated as immutable for the duration of one analysis pass.
#[derive(Debug)]
pub struct FlowGraph {
    /// The directed multigraph of interned nodes
    pub graph: DiGraph<NodeName, ()>,

    /// Mapping from node name to node index
    pub name_to_node: HashMap<NodeName, NodeIndex>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_to_node: HashMap::new(),
        }
    }

    /// Interns a name, reusing the existing index on a repeat sighting.
    pub fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.name_to_node.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.name_to_node.insert(name.to_string(), idx);
        idx
    }

    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex) {
        self.graph.add_edge(source, target, ());
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_node.get(name).copied()
    }

    pub fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Out-neighbors of `idx`, one entry per edge so parallel edges repeat.
    /// Iteration order is fixed for a given build of the graph.
    pub fn out_neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// All node indices in first-seen order.
    pub fn node_indices(&self) -> NodeIndices {
        self.graph.node_indices()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Renders a path of indices back to node names.
    pub fn path_names(&self, path: &[NodeIndex]) -> Vec<&str> {
        path.iter().map(|&idx| self.name(idx)).collect()
    }
}

impl Default for FlowGraph {
    fn default() -> Self {
        Self::new()
    }
}

use crate::domain::edge::edge_label;
use crate::domain::enumerate::{Diagnostic, PathEnumerator};
use crate::domain::graph::FlowGraph;
use petgraph::graph::NodeIndex;
use std::collections::{BTreeMap, BTreeSet};

/// Edge-by-OD participation matrix.
///
/// Rows are the distinct edges appearing in any enumerated path, columns
/// the distinct OD pairs, both as sorted `a->b` labels. A cell is 1 when
/// the edge participates in at least one path of that OD. The SUM column
/// counts the distinct ODs an edge serves; it is participation, not the
/// usage frequency tracked by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    pub edge_labels: Vec<String>,
    pub od_labels: Vec<String>,
    /// `cells[row][col]`, row per edge label, column per OD label.
    pub cells: Vec<Vec<u8>>,
    /// Row-wise totals (the synthetic SUM column).
    pub row_sums: Vec<u32>,
}

impl IncidenceMatrix {
    pub fn is_empty(&self) -> bool {
        self.edge_labels.is_empty()
    }

    pub fn get(&self, edge: &str, od: &str) -> Option<u8> {
        let row = self.edge_labels.binary_search_by(|e| e.as_str().cmp(edge)).ok()?;
        let col = self.od_labels.binary_search_by(|o| o.as_str().cmp(od)).ok()?;
        Some(self.cells[row][col])
    }

    pub fn row_sum(&self, edge: &str) -> Option<u32> {
        let row = self.edge_labels.binary_search_by(|e| e.as_str().cmp(edge)).ok()?;
        Some(self.row_sums[row])
    }
}

/// Builds the matrix from an already-enumerated path set.
///
/// Paths shorter than two nodes carry no edge and are skipped. Per-path
/// edge sets are deduplicated; repeated occurrences of a path change
/// nothing here.
pub fn build_incidence(graph: &FlowGraph, paths: &[Vec<NodeIndex>]) -> IncidenceMatrix {
    let mut od_to_edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for path in paths {
        if path.len() < 2 {
            continue;
        }
        let od = edge_label(graph.name(path[0]), graph.name(path[path.len() - 1]));
        let edges = od_to_edges.entry(od).or_default();
        for pair in path.windows(2) {
            edges.insert(edge_label(graph.name(pair[0]), graph.name(pair[1])));
        }
    }

    let od_labels: Vec<String> = od_to_edges.keys().cloned().collect();
    let edge_labels: Vec<String> = od_to_edges
        .values()
        .flatten()
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let mut cells = vec![vec![0u8; od_labels.len()]; edge_labels.len()];
    for (col, od) in od_labels.iter().enumerate() {
        for edge in &od_to_edges[od] {
            let row = edge_labels
                .binary_search(edge)
                .expect("edge label collected from the same path set");
            cells[row][col] = 1;
        }
    }

    let row_sums = cells
        .iter()
        .map(|row| row.iter().map(|&cell| u32::from(cell)).sum())
        .collect();

    IncidenceMatrix {
        edge_labels,
        od_labels,
        cells,
        row_sums,
    }
}

/// Convenience variant for callers without a path set: enumerates all
/// pairs first with the default bounds, then builds the matrix. Any
/// enumeration diagnostics are passed through.
pub fn build_incidence_from_graph(graph: &FlowGraph) -> (IncidenceMatrix, Vec<Diagnostic>) {
    let all = PathEnumerator::default().find_all_paths(graph);
    (build_incidence(graph, &all.paths), all.diagnostics)
}

use crate::domain::graph::FlowGraph;
use petgraph::graph::NodeIndex;
use std::collections::BTreeMap;

/// Separator used when a path is canonicalized to a single string key.
///
/// `count_edges` splits on this exact token, so the join must round-trip;
/// the graph builder rejects node names that embed it.
pub const PATH_DELIMITER: &str = " -> ";

/// Canonical path string -> occurrence count.
pub type PathCounts = BTreeMap<String, u64>;

/// Directed edge (from, to) -> total usage count over all path occurrences.
pub type EdgeCounts = BTreeMap<(String, String), u64>;

/// Joins a path's node names into its canonical string form.
pub fn canonical_path(graph: &FlowGraph, path: &[NodeIndex]) -> String {
    graph.path_names(path).join(PATH_DELIMITER)
}

/// Counts how many times each canonical path occurs in `paths`.
pub fn count_paths(graph: &FlowGraph, paths: &[Vec<NodeIndex>]) -> PathCounts {
    let mut counts = PathCounts::new();
    for path in paths {
        *counts.entry(canonical_path(graph, path)).or_insert(0) += 1;
    }
    counts
}

/// Derives edge usage totals from path counts alone.
///
/// Each canonical path is split back into its node sequence; every
/// consecutive pair receives the path's occurrence count. An edge that
/// appears twice within one path is credited twice per occurrence. Raw
/// paths are never re-walked here.
pub fn count_edges(path_counts: &PathCounts) -> EdgeCounts {
    let mut counts = EdgeCounts::new();
    for (path, &repetitions) in path_counts {
        let nodes: Vec<&str> = path.split(PATH_DELIMITER).collect();
        for pair in nodes.windows(2) {
            *counts
                .entry((pair[0].to_string(), pair[1].to_string()))
                .or_insert(0) += repetitions;
        }
    }
    counts
}

/// Edge usage rows ordered by descending count, ties broken
/// lexicographically so exports are deterministic.
pub fn ranked_edges(edge_counts: &EdgeCounts) -> Vec<(&str, &str, u64)> {
    let mut rows: Vec<(&str, &str, u64)> = edge_counts
        .iter()
        .map(|((from, to), &count)| (from.as_str(), to.as_str(), count))
        .collect();
    rows.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| (a.0, a.1).cmp(&(b.0, b.1))));
    rows
}

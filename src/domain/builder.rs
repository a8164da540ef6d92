use crate::domain::aggregate::PATH_DELIMITER;
use crate::domain::edge::EdgeRow;
use crate::domain::error::AnalysisError;
use crate::domain::graph::FlowGraph;

/// Graph builder - domain service for constructing a [`FlowGraph`] from a
/// validated edge list.
///
/// Both endpoints of every row are interned, so sinks get an entry with an
/// empty neighbor list and no dangling references are possible. Duplicate
/// rows stay duplicated (parallel-edge semantics).
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn build(rows: &[EdgeRow]) -> Result<FlowGraph, AnalysisError> {
        let mut graph = FlowGraph::new();
        for row in rows {
            let source = checked_name(&row.source)?;
            let target = checked_name(&row.target)?;
            let source_idx = graph.intern(source);
            let target_idx = graph.intern(target);
            graph.add_edge(source_idx, target_idx);
        }
        Ok(graph)
    }
}

/// Canonical path strings are split on [`PATH_DELIMITER`] when edges are
/// re-derived from path counts, so names embedding it cannot round-trip.
fn checked_name(name: &str) -> Result<&str, AnalysisError> {
    if name.contains(PATH_DELIMITER) {
        return Err(AnalysisError::ReservedNodeName {
            name: name.to_string(),
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_interns_both_sides() {
        let rows = [EdgeRow::new("1", "2"), EdgeRow::new("2", "3")];
        let graph = GraphBuilder::build(&rows).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        // "3" only ever appears as a target but still has an entry.
        let sink = graph.get_node_by_name("3").unwrap();
        assert_eq!(graph.out_neighbors(sink).count(), 0);
    }

    #[test]
    fn test_build_preserves_parallel_edges() {
        let rows = [EdgeRow::new("1", "2"), EdgeRow::new("1", "2")];
        let graph = GraphBuilder::build(&rows).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        let one = graph.get_node_by_name("1").unwrap();
        assert_eq!(graph.out_neighbors(one).count(), 2);
    }

    #[test]
    fn test_build_rejects_delimiter_in_name() {
        let rows = [EdgeRow::new("a -> b", "c")];
        let err = GraphBuilder::build(&rows).unwrap_err();
        assert!(matches!(err, AnalysisError::ReservedNodeName { .. }));
    }

    #[test]
    fn test_build_empty_rows_gives_empty_graph() {
        let graph = GraphBuilder::build(&[]).unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_build_self_loop() {
        let rows = [EdgeRow::new("1", "1")];
        let graph = GraphBuilder::build(&rows).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }
}

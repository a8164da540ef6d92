use crate::app::engine::AnalysisResult;
use crate::domain::aggregate;
use serde::{Deserialize, Serialize};

/// Machine-readable summary of one analysis pass (the `--json` output).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_paths: usize,
    pub distinct_paths: usize,
    pub od_pairs: usize,
    pub diagnostics: Vec<String>,
    pub top_edges: Vec<EdgeUsageDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeUsageDto {
    pub from: String,
    pub to: String,
    pub count: u64,
}

impl AnalysisSummary {
    /// Condenses a result bundle, keeping the `top` busiest edges.
    pub fn from_result(result: &AnalysisResult, top: usize) -> Self {
        let top_edges = aggregate::ranked_edges(&result.edge_counts)
            .into_iter()
            .take(top)
            .map(|(from, to, count)| EdgeUsageDto {
                from: from.to_string(),
                to: to.to_string(),
                count,
            })
            .collect();

        Self {
            node_count: result.graph.node_count(),
            edge_count: result.graph.edge_count(),
            total_paths: result.all_paths.len(),
            distinct_paths: result.path_counts.len(),
            od_pairs: result.incidence.od_labels.len(),
            diagnostics: result.diagnostics.iter().map(|d| d.to_string()).collect(),
            top_edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::engine::{AnalysisConfig, AnalysisEngine};
    use crate::domain::builder::GraphBuilder;
    use crate::domain::edge::EdgeRow;

    #[test]
    fn test_summary_from_result() {
        let rows = [EdgeRow::new("1", "2"), EdgeRow::new("2", "3")];
        let graph = GraphBuilder::build(&rows).unwrap();
        let engine = AnalysisEngine::new(AnalysisConfig::default()).unwrap();
        let result = engine.analyze(graph).unwrap();

        let summary = AnalysisSummary::from_result(&result, 1);
        assert_eq!(summary.node_count, 3);
        assert_eq!(summary.edge_count, 2);
        assert_eq!(summary.total_paths, 3);
        assert_eq!(summary.distinct_paths, 3);
        assert_eq!(summary.od_pairs, 3);
        assert_eq!(summary.top_edges.len(), 1);
        // 2->3 serves both the 1->3 and 2->3 paths.
        assert_eq!(summary.top_edges[0].count, 2);

        let json = serde_json::to_string(&summary).unwrap();
        let back: AnalysisSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_paths, summary.total_paths);
    }
}

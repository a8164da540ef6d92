use crate::domain::aggregate::{self, EdgeCounts, PathCounts};
use crate::domain::enumerate::{
    AllPaths, DEFAULT_MAX_PATH_LENGTH, DEFAULT_MAX_PATHS_PER_OD, Diagnostic, Enumeration,
    PathEnumerator,
};
use crate::domain::error::AnalysisError;
use crate::domain::graph::FlowGraph;
use crate::domain::incidence::{self, IncidenceMatrix};
use petgraph::graph::NodeIndex;
use tracing::debug;

/// Tunable cost bounds for one analysis pass.
///
/// Both limits bound the combinatorial explosion of simple-path
/// enumeration and are mandatory; zero is rejected at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Maximum number of nodes in one path (default 15).
    pub max_path_length: usize,
    /// Per-OD cap on collected paths (default 1000).
    pub max_paths_per_od: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            max_paths_per_od: DEFAULT_MAX_PATHS_PER_OD,
        }
    }
}

/// Immutable bundle returned by [`AnalysisEngine::analyze`]: the graph,
/// every enumerated path, both count tables, the incidence matrix and the
/// non-fatal diagnostics accumulated along the way. This is the unit
/// handed to exporters and renderers.
#[derive(Debug)]
pub struct AnalysisResult {
    pub graph: FlowGraph,
    pub all_paths: Vec<Vec<NodeIndex>>,
    pub path_counts: PathCounts,
    pub edge_counts: EdgeCounts,
    pub incidence: IncidenceMatrix,
    pub diagnostics: Vec<Diagnostic>,
}

/// Analysis facade - validates input, sequences the domain services and
/// bundles one consolidated result. The only entry point external
/// collaborators (CLI, exporters, renderers) should depend on.
#[derive(Debug)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        if config.max_path_length == 0 {
            return Err(AnalysisError::InvalidLimit {
                name: "max_path_length",
            });
        }
        if config.max_paths_per_od == 0 {
            return Err(AnalysisError::InvalidLimit {
                name: "max_paths_per_od",
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// One-shot analysis: all-pairs enumeration, path and edge counting,
    /// incidence construction. Fatal on an empty graph; enumeration
    /// limits surface as diagnostics in the result instead.
    pub fn analyze(&self, graph: FlowGraph) -> Result<AnalysisResult, AnalysisError> {
        if graph.node_count() == 0 {
            return Err(AnalysisError::EmptyGraph);
        }

        let enumerator = self.enumerator();
        let AllPaths { paths, diagnostics } = enumerator.find_all_paths(&graph);
        debug!(
            paths = paths.len(),
            diagnostics = diagnostics.len(),
            "all-pairs enumeration finished"
        );

        let path_counts = aggregate::count_paths(&graph, &paths);
        let edge_counts = aggregate::count_edges(&path_counts);
        let incidence = incidence::build_incidence(&graph, &paths);

        Ok(AnalysisResult {
            graph,
            all_paths: paths,
            path_counts,
            edge_counts,
            incidence,
            diagnostics,
        })
    }

    /// Enumerates a single OD pair under this engine's bounds.
    pub fn paths_between(&self, graph: &FlowGraph, origin: &str, destination: &str) -> Enumeration {
        self.enumerator().find_paths_by_name(graph, origin, destination)
    }

    fn enumerator(&self) -> PathEnumerator {
        PathEnumerator::new(self.config.max_path_length, self.config.max_paths_per_od)
    }
}

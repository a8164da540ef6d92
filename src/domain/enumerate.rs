use crate::domain::graph::FlowGraph;
use petgraph::graph::NodeIndex;
use std::fmt;
use tracing::warn;

/// Documented default for the maximum number of nodes in one path.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 15;

/// Documented default for the per-OD path cap.
pub const DEFAULT_MAX_PATHS_PER_OD: usize = 1000;

/// Total-path volume above which the all-pairs sweep reports
/// [`Diagnostic::LargePathVolume`].
pub const VOLUME_THRESHOLD: usize = 10_000;

/// Non-fatal events raised during enumeration. Analysis continues past
/// these; callers inspect them to know a result is best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// One OD pair hit the per-call path cap. Its enumeration stopped
    /// early, so real paths for that pair are very likely missing.
    PathLimitReached {
        origin: String,
        destination: String,
        limit: usize,
    },
    /// The all-pairs total crossed [`VOLUME_THRESHOLD`]. Collection was
    /// not truncated.
    LargePathVolume {
        total_paths: usize,
        threshold: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::PathLimitReached {
                origin,
                destination,
                limit,
            } => write!(
                f,
                "path limit reached for OD pair {origin}->{destination}: \
                 stopped after {limit} paths, results for this pair are incomplete"
            ),
            Diagnostic::LargePathVolume {
                total_paths,
                threshold,
            } => write!(
                f,
                "enumerated {total_paths} paths across all OD pairs (threshold {threshold}): \
                 the network may be too dense for exhaustive enumeration"
            ),
        }
    }
}

/// Result of enumerating a single OD pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub paths: Vec<Vec<NodeIndex>>,
    /// True when the search stopped at the path cap instead of
    /// exhausting the graph.
    pub truncated: bool,
}

/// Result of the all-pairs sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPaths {
    pub paths: Vec<Vec<NodeIndex>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Path enumerator - finds all simple paths between ordered node pairs
/// under explicit length and count bounds.
///
/// The bounds are the only defense against the combinatorial explosion of
/// simple-path enumeration in dense graphs. `max_paths` is one shared
/// counter per `find_paths` call: the whole search for that pair stops
/// once the cap is hit, not just the current branch.
pub struct PathEnumerator {
    max_path_length: usize,
    max_paths: usize,
}

impl Default for PathEnumerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PATH_LENGTH, DEFAULT_MAX_PATHS_PER_OD)
    }
}

impl PathEnumerator {
    pub fn new(max_path_length: usize, max_paths: usize) -> Self {
        Self {
            max_path_length,
            max_paths,
        }
    }

    /// All simple paths from `start` to `end`.
    ///
    /// Iterative depth-first search over one mutable path buffer with an
    /// on-path membership mask, both backtracked in place. A node already
    /// on the current path is never revisited; the single-node path
    /// `[start]` is the one degenerate exception when `start == end`
    /// (covering true self-loops). Branches are abandoned silently once a
    /// completed path would exceed `max_path_length` nodes.
    ///
    /// Path order follows the graph's fixed neighbor-iteration order:
    /// identical graphs yield identical path lists.
    pub fn find_paths(&self, graph: &FlowGraph, start: NodeIndex, end: NodeIndex) -> Enumeration {
        let mut paths: Vec<Vec<NodeIndex>> = Vec::new();

        if start == end {
            paths.push(vec![start]);
            return Enumeration {
                paths,
                truncated: false,
            };
        }

        let mut on_path = vec![false; graph.node_count()];
        let mut path = vec![start];
        on_path[start.index()] = true;

        // Each frame owns the unexplored out-edges of the node at the same
        // depth in `path`.
        let mut frames = vec![graph.out_neighbors(start)];
        let mut truncated = false;

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(next) => {
                    if on_path[next.index()] {
                        continue;
                    }
                    if next == end {
                        if path.len() < self.max_path_length {
                            path.push(next);
                            paths.push(path.clone());
                            path.pop();
                            if paths.len() >= self.max_paths {
                                truncated = true;
                                break;
                            }
                        }
                    } else if path.len() + 1 < self.max_path_length {
                        path.push(next);
                        on_path[next.index()] = true;
                        frames.push(graph.out_neighbors(next));
                    }
                    // Otherwise the branch dies at the length bound.
                }
                None => {
                    frames.pop();
                    if let Some(done) = path.pop() {
                        on_path[done.index()] = false;
                    }
                }
            }
        }

        Enumeration { paths, truncated }
    }

    /// Name-based variant. An unknown `start` or `end` yields an empty,
    /// non-truncated result rather than an error.
    pub fn find_paths_by_name(&self, graph: &FlowGraph, start: &str, end: &str) -> Enumeration {
        match (graph.get_node_by_name(start), graph.get_node_by_name(end)) {
            (Some(s), Some(e)) => self.find_paths(graph, s, e),
            _ => Enumeration {
                paths: Vec::new(),
                truncated: false,
            },
        }
    }

    /// All simple paths between every ordered pair of distinct nodes.
    ///
    /// Outer and inner loops follow graph-iteration order, so the
    /// concatenated path list is reproducible. A truncated pair becomes a
    /// [`Diagnostic::PathLimitReached`]; a total above
    /// [`VOLUME_THRESHOLD`] adds one [`Diagnostic::LargePathVolume`]
    /// without stopping collection.
    pub fn find_all_paths(&self, graph: &FlowGraph) -> AllPaths {
        let mut all_paths: Vec<Vec<NodeIndex>> = Vec::new();
        let mut diagnostics = Vec::new();

        for start in graph.node_indices() {
            for end in graph.node_indices() {
                if start == end {
                    continue;
                }
                let Enumeration {
                    mut paths,
                    truncated,
                } = self.find_paths(graph, start, end);
                if truncated {
                    let diagnostic = Diagnostic::PathLimitReached {
                        origin: graph.name(start).to_string(),
                        destination: graph.name(end).to_string(),
                        limit: self.max_paths,
                    };
                    warn!("{diagnostic}");
                    diagnostics.push(diagnostic);
                }
                all_paths.append(&mut paths);
            }
        }

        if all_paths.len() > VOLUME_THRESHOLD {
            let diagnostic = Diagnostic::LargePathVolume {
                total_paths: all_paths.len(),
                threshold: VOLUME_THRESHOLD,
            };
            warn!("{diagnostic}");
            diagnostics.push(diagnostic);
        }

        AllPaths {
            paths: all_paths,
            diagnostics,
        }
    }
}

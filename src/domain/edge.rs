use serde::{Deserialize, Serialize};

/// One row of the raw edge list: an ordered (source, target) pair.
///
/// Repeated rows are meaningful: they become parallel edges, not
/// duplicates to be collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub source: String,
    pub target: String,
}

impl EdgeRow {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Directed edge label in the `a->b` form shared by the incidence matrix,
/// the OD columns and the exports.
pub fn edge_label(from: &str, to: &str) -> String {
    format!("{}->{}", from, to)
}

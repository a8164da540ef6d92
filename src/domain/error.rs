use thiserror::Error;

/// Fatal analysis errors. Non-fatal conditions are reported as
/// [`Diagnostic`](crate::domain::enumerate::Diagnostic) values alongside the
/// result instead of aborting the pass.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input-schema error: the edge list lacks a required column.
    #[error("edge list is missing required column '{column}'")]
    MissingColumn { column: String },

    /// Input-schema error: a row has an empty source or target field.
    #[error("edge list row {row} has an empty source or target field")]
    MissingField { row: usize },

    /// Node identifiers must not embed the canonical path delimiter, or
    /// edge counting could no longer invert path canonicalization.
    #[error("node name {name:?} contains the reserved path delimiter")]
    ReservedNodeName { name: String },

    /// Input-validity error: there is nothing to analyze.
    #[error("graph has no nodes; nothing to analyze")]
    EmptyGraph,

    /// Input-validity error: the enumeration bounds are mandatory
    /// explosion control, not optional tuning.
    #[error("{name} must be at least 1")]
    InvalidLimit { name: &'static str },
}

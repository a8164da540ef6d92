//! Shared graph fixtures for integration tests.
#![allow(dead_code)]

use flownet::domain::builder::GraphBuilder;
use flownet::domain::edge::EdgeRow;
use flownet::domain::graph::FlowGraph;

pub fn rows(pairs: &[(&str, &str)]) -> Vec<EdgeRow> {
    pairs.iter().map(|(s, t)| EdgeRow::new(*s, *t)).collect()
}

pub fn graph_from(pairs: &[(&str, &str)]) -> FlowGraph {
    GraphBuilder::build(&rows(pairs)).unwrap()
}

/// Three stops in a line: 1 -> 2 -> 3.
pub fn chain() -> FlowGraph {
    graph_from(&[("1", "2"), ("2", "3")])
}

/// Duplicate service on the first leg: 1 => 2 -> 3.
pub fn parallel_chain() -> FlowGraph {
    graph_from(&[("1", "2"), ("1", "2"), ("2", "3")])
}

/// Two routes between the terminals plus a crossover link.
pub fn braided() -> FlowGraph {
    graph_from(&[
        ("1", "2"),
        ("2", "4"),
        ("1", "3"),
        ("3", "4"),
        ("2", "3"),
    ])
}

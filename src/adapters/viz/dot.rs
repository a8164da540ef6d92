use crate::domain::aggregate::EdgeCounts;
use crate::domain::graph::FlowGraph;
use petgraph::visit::EdgeRef;
use std::fmt::Write;

/// Renders the analyzed network as a Graphviz digraph.
///
/// Pen width and color scale linearly between the minimum and maximum
/// usage counts; parallel edges get one arc each, as in the source
/// network. Render with e.g. `dot -Tpng network.dot -o network.png`.
pub fn render_dot(graph: &FlowGraph, edge_counts: &EdgeCounts, title: Option<&str>) -> String {
    let mut dot = String::new();

    dot.push_str("digraph flownet {\n");
    if let Some(name) = title {
        let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
        dot.push_str("    labelloc=t;\n");
    }
    dot.push_str("    rankdir=LR;\n");
    dot.push_str("    node [shape=ellipse, style=filled, fillcolor=\"#ffd54f\"];\n\n");

    for idx in graph.node_indices() {
        let _ = writeln!(dot, "    \"{}\";", escape_dot(graph.name(idx)));
    }
    dot.push('\n');

    let (min_count, max_count) = count_bounds(edge_counts);
    let span = max_count.saturating_sub(min_count).max(1);

    for edge in graph.graph.edge_references() {
        let from = graph.name(edge.source());
        let to = graph.name(edge.target());
        let count = edge_counts
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .unwrap_or(0);
        let t = count.saturating_sub(min_count) as f64 / span as f64;
        let _ = writeln!(
            dot,
            "    \"{}\" -> \"{}\" [penwidth={:.2}, color=\"{}\", label=\"{}\"];",
            escape_dot(from),
            escape_dot(to),
            1.0 + 2.0 * t,
            ramp_color(t),
            count
        );
    }

    dot.push_str("}\n");
    dot
}

fn count_bounds(edge_counts: &EdgeCounts) -> (u64, u64) {
    let mut values = edge_counts.values();
    match values.next() {
        None => (0, 0),
        Some(&first) => values.fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    }
}

/// Graphviz HSV triple on a cold-to-hot ramp: blue for the least used
/// edges through red for the busiest.
fn ramp_color(t: f64) -> String {
    format!("{:.3},1.000,0.850", 0.667 * (1.0 - t))
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::GraphBuilder;
    use crate::domain::edge::EdgeRow;

    #[test]
    fn test_render_contains_nodes_and_edges() {
        let rows = [EdgeRow::new("1", "2"), EdgeRow::new("2", "3")];
        let graph = GraphBuilder::build(&rows).unwrap();
        let mut counts = EdgeCounts::new();
        counts.insert(("1".into(), "2".into()), 2);
        counts.insert(("2".into(), "3".into()), 2);

        let dot = render_dot(&graph, &counts, Some("demo"));
        assert!(dot.starts_with("digraph flownet {"));
        assert!(dot.contains("label=\"demo\";"));
        assert!(dot.contains("\"1\" -> \"2\""));
        assert!(dot.contains("\"2\" -> \"3\""));
        assert!(dot.contains("label=\"2\""));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_parallel_edges_render_one_arc_each() {
        let rows = [EdgeRow::new("1", "2"), EdgeRow::new("1", "2")];
        let graph = GraphBuilder::build(&rows).unwrap();
        let counts = EdgeCounts::new();
        let dot = render_dot(&graph, &counts, None);
        assert_eq!(dot.matches("\"1\" -> \"2\"").count(), 2);
    }

    #[test]
    fn test_width_scales_with_usage() {
        let rows = [EdgeRow::new("1", "2"), EdgeRow::new("2", "3")];
        let graph = GraphBuilder::build(&rows).unwrap();
        let mut counts = EdgeCounts::new();
        counts.insert(("1".into(), "2".into()), 1);
        counts.insert(("2".into(), "3".into()), 9);

        let dot = render_dot(&graph, &counts, None);
        assert!(dot.contains("penwidth=1.00"));
        assert!(dot.contains("penwidth=3.00"));
    }

    #[test]
    fn test_names_are_escaped() {
        let rows = [EdgeRow::new("st \"A\"", "st B")];
        let graph = GraphBuilder::build(&rows).unwrap();
        let dot = render_dot(&graph, &EdgeCounts::new(), None);
        assert!(dot.contains("\"st \\\"A\\\"\""));
    }
}

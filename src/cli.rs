use crate::adapters::csv::reader::CsvEdgeListSource;
use crate::adapters::csv::writer::{write_edge_usage, write_incidence};
use crate::adapters::viz::dot::render_dot;
use crate::app::dto::AnalysisSummary;
use crate::app::engine::{AnalysisConfig, AnalysisEngine, AnalysisResult};
use crate::domain::aggregate::{canonical_path, ranked_edges};
use crate::domain::builder::GraphBuilder;
use crate::domain::graph::FlowGraph;
use crate::domain::ports::EdgeListSource;
use anyhow::{Context as _, Result};
use std::path::Path;

const OUTPUT_BASE_NAME: &str = "flownet";
const SUMMARY_TOP_EDGES: usize = 10;

/// Loads and validates an edge-list CSV into a graph.
pub fn load_graph(edges_csv: &Path, source_col: &str, target_col: &str) -> Result<FlowGraph> {
    let source = CsvEdgeListSource::new(edges_csv).with_columns(source_col, target_col);
    let rows = source.load()?;
    let graph = GraphBuilder::build(&rows)?;
    Ok(graph)
}

/// Runs the full pipeline and writes the tabular/DOT outputs.
pub fn run_analysis(
    graph: FlowGraph,
    config: AnalysisConfig,
    output_dir: &Path,
    emit_dot: bool,
    as_json: bool,
) -> Result<()> {
    let engine = AnalysisEngine::new(config)?;
    let result = engine.analyze(graph)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    write_edge_usage(
        &output_dir.join(format!("{OUTPUT_BASE_NAME}_edge_usage.csv")),
        &result.edge_counts,
    )?;
    write_incidence(
        &output_dir.join(format!("{OUTPUT_BASE_NAME}_od_incidence.csv")),
        &result.incidence,
    )?;
    if emit_dot {
        let dot = render_dot(&result.graph, &result.edge_counts, Some("flownet network"));
        let dot_path = output_dir.join(format!("{OUTPUT_BASE_NAME}_network.dot"));
        std::fs::write(&dot_path, dot)
            .with_context(|| format!("Failed to write {}", dot_path.display()))?;
    }

    if as_json {
        let summary = AnalysisSummary::from_result(&result, SUMMARY_TOP_EDGES);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&result, output_dir);
    }

    Ok(())
}

fn print_summary(result: &AnalysisResult, output_dir: &Path) {
    println!("Network Summary:");
    println!("  Nodes: {}", result.graph.node_count());
    println!("  Edges: {}", result.graph.edge_count());
    println!("  Paths enumerated: {}", result.all_paths.len());
    println!("  Distinct paths: {}", result.path_counts.len());
    println!("  OD pairs served: {}", result.incidence.od_labels.len());

    if !result.diagnostics.is_empty() {
        println!("\nDiagnostics:");
        for diagnostic in &result.diagnostics {
            println!("  - {}", diagnostic);
        }
    }

    println!("\nBusiest edges:");
    for (i, (from, to, count)) in ranked_edges(&result.edge_counts)
        .into_iter()
        .take(SUMMARY_TOP_EDGES)
        .enumerate()
    {
        println!("{}. {} -> {}  ({} path occurrences)", i + 1, from, to, count);
    }

    println!("\nOutputs written to {}", output_dir.display());
}

/// Enumerates one OD pair and prints every path.
pub fn list_paths(
    graph: &FlowGraph,
    origin: &str,
    destination: &str,
    max_path_length: usize,
    max_paths: usize,
) -> Result<()> {
    let engine = AnalysisEngine::new(AnalysisConfig {
        max_path_length,
        max_paths_per_od: max_paths,
    })?;
    let result = engine.paths_between(graph, origin, destination);

    println!(
        "Found {} path(s) from {} to {}:",
        result.paths.len(),
        origin,
        destination
    );
    for path in &result.paths {
        println!("  {}", canonical_path(graph, path));
    }
    if result.truncated {
        println!(
            "\nNote: stopped at the path cap ({}); more paths likely exist.",
            max_paths
        );
    }
    Ok(())
}

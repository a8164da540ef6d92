use crate::domain::aggregate::{EdgeCounts, ranked_edges};
use crate::domain::incidence::IncidenceMatrix;
use anyhow::{Context, Result};
use std::path::Path;

/// Writes `(from, to, count)` rows sorted by descending usage count.
pub fn write_edge_usage(path: &Path, edge_counts: &EdgeCounts) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["from", "to", "count"])?;
    for (from, to, count) in ranked_edges(edge_counts) {
        writer.write_record([from, to, count.to_string().as_str()])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

/// Writes the incidence matrix as `edge, <od...>, SUM`, one row per edge.
pub fn write_incidence(path: &Path, matrix: &IncidenceMatrix) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let mut header = vec!["edge".to_string()];
    header.extend(matrix.od_labels.iter().cloned());
    header.push("SUM".to_string());
    writer.write_record(&header)?;

    for (row, edge) in matrix.edge_labels.iter().enumerate() {
        let mut record = vec![edge.clone()];
        record.extend(matrix.cells[row].iter().map(|cell| cell.to_string()));
        record.push(matrix.row_sums[row].to_string());
        writer.write_record(&record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::GraphBuilder;
    use crate::domain::edge::EdgeRow;
    use crate::domain::incidence::build_incidence_from_graph;

    #[test]
    fn test_edge_usage_sorted_by_descending_count() {
        let mut counts = EdgeCounts::new();
        counts.insert(("1".into(), "2".into()), 1);
        counts.insert(("2".into(), "3".into()), 5);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edge_usage.csv");
        write_edge_usage(&path, &counts).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "from,to,count");
        assert_eq!(lines[1], "2,3,5");
        assert_eq!(lines[2], "1,2,1");
    }

    #[test]
    fn test_incidence_layout() {
        let rows = [EdgeRow::new("1", "2"), EdgeRow::new("2", "3")];
        let graph = GraphBuilder::build(&rows).unwrap();
        let (matrix, _) = build_incidence_from_graph(&graph);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incidence.csv");
        write_incidence(&path, &matrix).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "edge,1->2,1->3,2->3,SUM");
        assert_eq!(lines.len(), 1 + matrix.edge_labels.len());
        assert!(lines[1].starts_with("1->2,"));
        assert!(lines[1].ends_with(",2"));
    }
}

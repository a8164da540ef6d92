use crate::domain::edge::EdgeRow;
use crate::domain::error::AnalysisError;
use crate::domain::ports::EdgeListSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default column names for the common `from,to` edge-list header.
pub const DEFAULT_SOURCE_COL: &str = "from";
pub const DEFAULT_TARGET_COL: &str = "to";

/// CSV edge list reader.
///
/// Column names are configurable; lines starting with `#` are comments.
/// A missing column or an empty source/target cell is a fatal
/// input-schema error.
pub struct CsvEdgeListSource {
    path: PathBuf,
    source_col: String,
    target_col: String,
}

impl CsvEdgeListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source_col: DEFAULT_SOURCE_COL.to_string(),
            target_col: DEFAULT_TARGET_COL.to_string(),
        }
    }

    pub fn with_columns(mut self, source_col: &str, target_col: &str) -> Self {
        self.source_col = source_col.to_string();
        self.target_col = target_col.to_string();
        self
    }
}

impl EdgeListSource for CsvEdgeListSource {
    fn load(&self) -> Result<Vec<EdgeRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open edge list: {}", self.path.display()))?;

        let headers = reader.headers()?.clone();
        let source_idx = column_index(&headers, &self.source_col)?;
        let target_idx = column_index(&headers, &self.target_col)?;

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("Failed to read row {}", idx + 1))?;
            let source = record.get(source_idx).unwrap_or("");
            let target = record.get(target_idx).unwrap_or("");
            if source.is_empty() || target.is_empty() {
                return Err(AnalysisError::MissingField { row: idx + 1 }.into());
            }
            rows.push(EdgeRow::new(source, target));
        }
        Ok(rows)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        AnalysisError::MissingColumn {
            column: name.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_default_columns() {
        let file = write_csv("from,to\n1,2\n2,3\n");
        let rows = CsvEdgeListSource::new(file.path()).load().unwrap();
        assert_eq!(
            rows,
            vec![EdgeRow::new("1", "2"), EdgeRow::new("2", "3")]
        );
    }

    #[test]
    fn test_load_custom_columns_and_extras() {
        let file = write_csv("line,origin,dest\nA,1,2\nB,2,3\n");
        let rows = CsvEdgeListSource::new(file.path())
            .with_columns("origin", "dest")
            .load()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], EdgeRow::new("1", "2"));
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let file = write_csv("from,to\n# weekend services only below\n1,2\n");
        let rows = CsvEdgeListSource::new(file.path()).load().unwrap();
        assert_eq!(rows, vec![EdgeRow::new("1", "2")]);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let file = write_csv("source,target\n1,2\n");
        let err = CsvEdgeListSource::new(file.path()).load().unwrap_err();
        let err = err.downcast::<AnalysisError>().unwrap();
        assert!(matches!(err, AnalysisError::MissingColumn { column } if column == "from"));
    }

    #[test]
    fn test_empty_cell_is_schema_error() {
        let file = write_csv("from,to\n1,\n");
        let err = CsvEdgeListSource::new(file.path()).load().unwrap_err();
        let err = err.downcast::<AnalysisError>().unwrap();
        assert!(matches!(err, AnalysisError::MissingField { row: 1 }));
    }

    #[test]
    fn test_values_are_trimmed() {
        let file = write_csv("from,to\n 1 , 2 \n");
        let rows = CsvEdgeListSource::new(file.path()).load().unwrap();
        assert_eq!(rows, vec![EdgeRow::new("1", "2")]);
    }
}

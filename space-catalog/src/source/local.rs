use super::{RawRow, TableName, TableSource, parse_csv};
use crate::core::{CatalogError, CatalogResult};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Static CSV files in a data directory
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    data_dir: PathBuf,
}

impl LocalFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, table: TableName) -> PathBuf {
        self.data_dir.join(table.file_name())
    }
}

impl TableSource for LocalFileSource {
    #[instrument(skip(self), fields(dir = %self.data_dir.display()))]
    async fn load(&self, table: TableName) -> CatalogResult<Vec<RawRow>> {
        let path = self.path_for(table);
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            CatalogError::source_unavailable(table, format!("{}: {}", path.display(), e))
        })?;
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = 1 + valid.iter().filter(|b| **b == b'\n').count();
            CatalogError::parse(table, line, "file is not valid UTF-8")
        })?;

        let rows = parse_csv(table, &content)?;
        info!(rows = rows.len(), "Local table loaded");
        Ok(rows)
    }
}

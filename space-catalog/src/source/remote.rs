use super::{RawRow, TableName, TableSource, parse_csv};
use crate::core::{CatalogError, CatalogResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{info, instrument};

/// Published spreadsheet export, one sheet per table
///
/// Each table is requested as `<base_url>&sheet=<Resource>`.
#[derive(Debug, Clone)]
pub struct SheetExportSource {
    client: Client,
    base_url: String,
}

impl SheetExportSource {
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn url_for(&self, table: TableName) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}sheet={}",
            self.base_url,
            separator,
            urlencoding::encode(table.resource_name())
        )
    }
}

impl TableSource for SheetExportSource {
    #[instrument(skip(self))]
    async fn load(&self, table: TableName) -> CatalogResult<Vec<RawRow>> {
        let url = self.url_for(table);
        let unavailable = |e: reqwest::Error| CatalogError::source_unavailable(table, e.to_string());

        let content = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .text()
            .await
            .map_err(unavailable)?;

        let rows = parse_csv(table, &content)?;
        info!(rows = rows.len(), "Remote table loaded");
        Ok(rows)
    }
}

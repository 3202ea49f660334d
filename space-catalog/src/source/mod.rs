//! Table sources
//!
//! A [`TableSource`] turns a named resource into [`RawRow`]s. Two origins
//! produce the same output shape:
//! - [`LocalFileSource`] reads `<data_dir>/<Resource>.csv`
//! - [`SheetExportSource`] fetches the published sheet export
//!
//! [`TableOrigin`] picks one of them from [`Config::use_remote_sheet`].

mod csv;
mod local;
mod remote;

pub use csv::parse_csv;
pub use local::LocalFileSource;
pub use remote::SheetExportSource;

use crate::core::{CatalogResult, Config};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Named tabular resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
    Spaces,
    Equipment,
    SpaceEquipment,
    Prices,
    AvailablePeriods,
    UnifiedSpaces,
}

impl TableName {
    /// Resource name, shared by the local file stem and the remote sheet name
    pub fn resource_name(&self) -> &'static str {
        match self {
            TableName::Spaces => "Espacos",
            TableName::Equipment => "Equipamentos",
            TableName::SpaceEquipment => "EspacoEquipamentos",
            TableName::Prices => "Precos",
            TableName::AvailablePeriods => "PeriodosDisponiveis",
            TableName::UnifiedSpaces => "tabela_unificada_espacos_normalizado",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.resource_name())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// One source row: column name → trimmed cell text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line where the record starts (header is line 1)
    line: usize,
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Build a row from column/value pairs
    pub fn from_pairs<K, V>(line: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

/// Trait for table origins
#[allow(async_fn_in_trait)]
pub trait TableSource {
    /// Fetch and parse one table
    async fn load(&self, table: TableName) -> CatalogResult<Vec<RawRow>>;
}

/// Origin selected by configuration
#[derive(Debug, Clone)]
pub enum TableOrigin {
    Local(LocalFileSource),
    Remote(SheetExportSource),
}

impl TableOrigin {
    pub fn from_config(config: &Config) -> CatalogResult<Self> {
        if config.use_remote_sheet {
            let timeout = Duration::from_millis(config.request_timeout_ms);
            Ok(Self::Remote(SheetExportSource::new(&config.sheet_url, timeout)?))
        } else {
            Ok(Self::Local(LocalFileSource::new(PathBuf::from(&config.data_dir))))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl TableSource for TableOrigin {
    async fn load(&self, table: TableName) -> CatalogResult<Vec<RawRow>> {
        match self {
            Self::Local(source) => source.load(table).await,
            Self::Remote(source) => source.load(table).await,
        }
    }
}

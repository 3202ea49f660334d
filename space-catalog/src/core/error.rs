use crate::source::TableName;
use thiserror::Error;

/// Catalog error kinds
///
/// | Variant | Meaning |
/// |---------|---------|
/// | SourceUnavailable | file/network fetch failed |
/// | Parse | malformed table or cell |
/// | JoinIncomplete | one of the four join inputs failed |
/// | UnresolvedReference | dangling foreign key under the reject policy |
/// | Config | invalid configuration value |
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Source unavailable: {table}: {reason}")]
    SourceUnavailable { table: TableName, reason: String },

    #[error("Parse error in {table} at line {line}: {reason}")]
    Parse {
        table: TableName,
        line: usize,
        reason: String,
    },

    #[error("Join incomplete: {table} could not be loaded")]
    JoinIncomplete {
        table: TableName,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("Unresolved reference in {table}: {column} = {key}")]
    UnresolvedReference {
        table: TableName,
        column: &'static str,
        key: String,
    },

    #[error("Invalid config: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn source_unavailable(table: TableName, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            table,
            reason: reason.into(),
        }
    }

    pub fn parse(table: TableName, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            table,
            line,
            reason: reason.into(),
        }
    }

    pub fn join_incomplete(table: TableName, source: CatalogError) -> Self {
        Self::JoinIncomplete {
            table,
            source: Box::new(source),
        }
    }

    /// Table the error originates from, if any
    pub fn table(&self) -> Option<TableName> {
        match self {
            Self::SourceUnavailable { table, .. }
            | Self::Parse { table, .. }
            | Self::JoinIncomplete { table, .. }
            | Self::UnresolvedReference { table, .. } => Some(*table),
            Self::Config(_) => None,
        }
    }

    /// Innermost error, looking through `JoinIncomplete`
    pub fn root_cause(&self) -> &CatalogError {
        match self {
            Self::JoinIncomplete { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

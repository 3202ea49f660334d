//! Catalog Service - one entry point for the presentation layer
//!
//! Every call reloads from the origin and rebuilds its result from scratch;
//! nothing is cached between calls.

use crate::catalog::{JoinEngine, group_by_space, load_tables};
use crate::core::{CatalogResult, Config};
use crate::normalize;
use crate::source::{TableName, TableOrigin, TableSource};
use shared::models::{PeriodAvailability, SpaceView, UnifiedSpace};
use tracing::info;

#[derive(Debug, Clone)]
pub struct CatalogService<S = TableOrigin> {
    source: S,
    engine: JoinEngine,
}

impl CatalogService<TableOrigin> {
    /// Origin and join policy from configuration
    pub fn from_config(config: &Config) -> CatalogResult<Self> {
        let source = TableOrigin::from_config(config)?;
        let engine = JoinEngine::new(config.unresolved_policy);
        info!(
            remote = source.is_remote(),
            policy = ?engine.policy(),
            "Catalog origin selected"
        );
        Ok(Self::new(source, engine))
    }
}

impl<S: TableSource> CatalogService<S> {
    pub fn new(source: S, engine: JoinEngine) -> Self {
        Self { source, engine }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the four tables and join them
    pub async fn load_views(&self) -> CatalogResult<Vec<SpaceView>> {
        let tables = load_tables(&self.source).await?;
        let views = self.engine.join(
            &tables.spaces,
            &tables.equipment,
            &tables.links,
            &tables.prices,
        )?;
        info!(views = views.len(), "Catalog joined");
        Ok(views)
    }

    /// Availability cards from PeriodosDisponiveis
    pub async fn load_availability(&self) -> CatalogResult<Vec<PeriodAvailability>> {
        let rows = self.source.load(TableName::AvailablePeriods).await?;
        let entries = normalize::availability(&rows)?;
        Ok(group_by_space(&entries))
    }

    /// Legacy single-table catalog
    pub async fn load_unified(&self) -> CatalogResult<Vec<UnifiedSpace>> {
        let rows = self.source.load(TableName::UnifiedSpaces).await?;
        normalize::unified_spaces(&rows)
    }
}

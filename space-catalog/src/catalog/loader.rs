//! Join-all barrier over the four source tables
//!
//! The four loads run concurrently on the current task. The join only runs
//! once all of them succeed; the first failure is returned as
//! [`CatalogError::JoinIncomplete`] and no partial catalog is produced.

use crate::core::{CatalogError, CatalogResult};
use crate::normalize;
use crate::source::{RawRow, TableName, TableSource};
use shared::models::{Equipment, Price, Space, SpaceEquipmentLink};
use tracing::{info, warn};

/// Normalized join inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTables {
    pub spaces: Vec<Space>,
    pub equipment: Vec<Equipment>,
    pub links: Vec<SpaceEquipmentLink>,
    pub prices: Vec<Price>,
}

pub async fn load_tables<S: TableSource>(source: &S) -> CatalogResult<CatalogTables> {
    let (spaces, equipment, links, prices) = tokio::try_join!(
        load_table(source, TableName::Spaces, normalize::spaces),
        load_table(source, TableName::Equipment, normalize::equipment),
        load_table(source, TableName::SpaceEquipment, normalize::links),
        load_table(source, TableName::Prices, normalize::prices),
    )?;

    info!(
        spaces = spaces.len(),
        equipment = equipment.len(),
        links = links.len(),
        prices = prices.len(),
        "Catalog tables loaded"
    );

    Ok(CatalogTables {
        spaces,
        equipment,
        links,
        prices,
    })
}

async fn load_table<S, T>(
    source: &S,
    table: TableName,
    normalize: fn(&[RawRow]) -> CatalogResult<Vec<T>>,
) -> CatalogResult<Vec<T>>
where
    S: TableSource,
{
    source
        .load(table)
        .await
        .and_then(|rows| normalize(&rows))
        .map_err(|e| {
            warn!(table = %table, error = %e, "Table load failed");
            CatalogError::join_incomplete(table, e)
        })
}

//! Legacy single-table export
//!
//! Before the catalog was split into four tables, one sheet carried every
//! space already denormalized, with list cells for equipment and related
//! spaces.

use super::{optional, parse_amount, parse_count, required, split_list};
use crate::core::CatalogResult;
use crate::source::{RawRow, TableName};
use shared::models::{SpaceView, UnifiedSpace};

const NAME: &str = "espaco";
const SPACE_TYPE: &str = "tipo_espaco";
const CAPACITY: &str = "capacidade";
const PRICE_HALF_DAY: &str = "preco_meio_dia";
const PRICE_FULL_DAY: &str = "preco_todo_dia";
const EQUIPMENT: &str = "equipamentos";
const RELATED_SPACES: &str = "outros_espacos";

pub(super) const REQUIRED_COLUMNS: &[&str] = &[NAME];

/// Map unified rows; rows without an `id`/`ID` column are numbered by position
pub fn unified_spaces(rows: &[RawRow]) -> CatalogResult<Vec<UnifiedSpace>> {
    let table = TableName::UnifiedSpaces;
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let id = row
                .get("id")
                .or_else(|| row.get("ID"))
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| (index + 1).to_string());

            Ok(UnifiedSpace {
                view: SpaceView {
                    id,
                    name: required(table, row, NAME)?.to_string(),
                    space_type: optional(row, SPACE_TYPE).to_string(),
                    capacity: parse_count(table, row, CAPACITY),
                    equipment_names: split_list(optional(row, EQUIPMENT)),
                    price_half_day: parse_amount(table, row, PRICE_HALF_DAY),
                    price_full_day: parse_amount(table, row, PRICE_FULL_DAY),
                },
                related_spaces: split_list(optional(row, RELATED_SPACES)),
            })
        })
        .collect()
}

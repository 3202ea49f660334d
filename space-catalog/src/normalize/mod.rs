//! Typed ingestion
//!
//! The only place that knows source column names. Every table is mapped
//! into the models from `shared::models` before it reaches the join.
//!
//! Numeric cells: empty means "no value", never zero. A non-empty cell that
//! is not a non-negative number also reads as "no value" and is logged.

mod unified;

pub use unified::unified_spaces;

use crate::core::{CatalogError, CatalogResult};
use crate::source::{RawRow, TableName};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::models::{Equipment, Period, Price, Space, SpaceEquipmentLink};
use std::str::FromStr;
use tracing::warn;

/// Source column names
pub mod columns {
    pub const ID: &str = "ID";
    pub const NAME: &str = "Nome";
    pub const SPACE_TYPE: &str = "Tipo de Espaço";
    pub const CAPACITY: &str = "Capacidade";
    pub const SPACE_ID: &str = "Espaco_ID";
    pub const EQUIPMENT_ID: &str = "Equipamento_ID";
    pub const QUANTITY: &str = "Quantidade";
    pub const PERIOD: &str = "Periodo";
    pub const PRICE: &str = "Preco(AOA)";
}

/// Availability entry before grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityEntry {
    pub space_name: String,
    pub label: String,
}

/// Columns a table header must carry, checked once per load
pub fn required_columns(table: TableName) -> &'static [&'static str] {
    match table {
        TableName::Spaces => &[columns::ID, columns::NAME, columns::SPACE_TYPE],
        TableName::Equipment => &[columns::ID, columns::NAME],
        TableName::SpaceEquipment => &[columns::SPACE_ID, columns::EQUIPMENT_ID],
        TableName::Prices => &[columns::SPACE_ID, columns::PERIOD],
        TableName::AvailablePeriods => &[columns::NAME, columns::SPACE_TYPE],
        TableName::UnifiedSpaces => unified::REQUIRED_COLUMNS,
    }
}

pub fn spaces(rows: &[RawRow]) -> CatalogResult<Vec<Space>> {
    let table = TableName::Spaces;
    rows.iter()
        .map(|row| {
            Ok(Space {
                id: required(table, row, columns::ID)?.to_string(),
                name: required(table, row, columns::NAME)?.to_string(),
                space_type: required(table, row, columns::SPACE_TYPE)?.to_string(),
                capacity: parse_count(table, row, columns::CAPACITY),
            })
        })
        .collect()
}

pub fn equipment(rows: &[RawRow]) -> CatalogResult<Vec<Equipment>> {
    let table = TableName::Equipment;
    rows.iter()
        .map(|row| {
            Ok(Equipment {
                id: required(table, row, columns::ID)?.to_string(),
                name: required(table, row, columns::NAME)?.to_string(),
            })
        })
        .collect()
}

pub fn links(rows: &[RawRow]) -> CatalogResult<Vec<SpaceEquipmentLink>> {
    let table = TableName::SpaceEquipment;
    rows.iter()
        .map(|row| {
            Ok(SpaceEquipmentLink {
                space_id: required(table, row, columns::SPACE_ID)?.to_string(),
                equipment_id: required(table, row, columns::EQUIPMENT_ID)?.to_string(),
                quantity: parse_count(table, row, columns::QUANTITY),
            })
        })
        .collect()
}

/// Price rows; rows with an unknown `Periodo` are skipped with a warning
pub fn prices(rows: &[RawRow]) -> CatalogResult<Vec<Price>> {
    let table = TableName::Prices;
    let mut prices = Vec::with_capacity(rows.len());
    for row in rows {
        let space_id = required(table, row, columns::SPACE_ID)?;
        let label = required(table, row, columns::PERIOD)?;
        let amount = parse_amount(table, row, columns::PRICE);

        let Some(period) = Period::from_label(label) else {
            warn!(line = row.line(), period = %label, space_id = %space_id, "Skipping price with unknown period");
            continue;
        };

        prices.push(Price {
            space_id: space_id.to_string(),
            period,
            amount,
        });
    }
    Ok(prices)
}

/// PeriodosDisponiveis rows (`Nome`, `Tipo de Espaço`)
pub fn availability(rows: &[RawRow]) -> CatalogResult<Vec<AvailabilityEntry>> {
    let table = TableName::AvailablePeriods;
    rows.iter()
        .map(|row| {
            Ok(AvailabilityEntry {
                space_name: required(table, row, columns::NAME)?.to_string(),
                label: required(table, row, columns::SPACE_TYPE)?.to_string(),
            })
        })
        .collect()
}

// ========== Cell helpers ==========

/// Cell of a column the table must have; the value itself may be empty
pub fn required<'a>(table: TableName, row: &'a RawRow, column: &str) -> CatalogResult<&'a str> {
    row.get(column)
        .ok_or_else(|| CatalogError::parse(table, row.line(), format!("missing column '{}'", column)))
}

/// Optional column: a missing column reads as an empty cell
pub fn optional<'a>(row: &'a RawRow, column: &str) -> &'a str {
    row.get(column).unwrap_or_default()
}

/// Non-negative integer cell; accepts integral decimals such as `30.0`
pub fn parse_count(table: TableName, row: &RawRow, column: &str) -> Option<u32> {
    let value = parse_amount(table, row, column)?;
    let count = Some(value)
        .filter(|v| v.fract().is_zero())
        .and_then(|v| v.to_u32());
    if count.is_none() {
        warn!(table = %table, line = row.line(), column, value = %value, "Ignoring non-integer count");
    }
    count
}

/// Non-negative decimal cell
///
/// None when the cell is empty, the column is absent, or the text is not a
/// non-negative number (logged).
pub fn parse_amount(table: TableName, row: &RawRow, column: &str) -> Option<Decimal> {
    let raw = optional(row, column);
    if raw.is_empty() {
        return None;
    }
    match parse_decimal(raw) {
        Some(value) if !value.is_sign_negative() || value.is_zero() => Some(value),
        _ => {
            warn!(table = %table, line = row.line(), column, value = %raw, "Ignoring invalid number");
            None
        }
    }
}

/// Parse `1234.5`, `1 234,5` or `1234,5`
///
/// Spaces (including no-break spaces) are digit group separators. A comma is
/// read as the decimal separator only when the text has no dot.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}')
        .collect();
    if let Ok(value) = Decimal::from_str(&compact) {
        return Some(value);
    }
    if !compact.contains('.') && compact.matches(',').count() == 1 {
        return Decimal::from_str(&compact.replace(',', ".")).ok();
    }
    None
}

/// Split a comma-separated list cell; an empty cell yields an empty list
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//! Space catalog source models
//!
//! Typed rows of the four normalized source tables. Column names never leave
//! the ingestion step; everything downstream works with these structs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rentable space (Espacos table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    pub name: String,
    /// Category name, e.g. "Sala" or "Auditório"
    #[serde(rename = "type")]
    pub space_type: String,
    /// None when the source cell is empty
    pub capacity: Option<u32>,
}

/// Equipment item (Equipamentos table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
}

/// Space ↔ equipment junction row (EspacoEquipamentos table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceEquipmentLink {
    pub space_id: String,
    pub equipment_id: String,
    pub quantity: Option<u32>,
}

/// Per-period rental price (Precos table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub space_id: String,
    pub period: Period,
    /// Amount in the catalog currency; None when the source cell is empty
    pub amount: Option<Decimal>,
}

/// Rental time block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    #[default]
    HalfDay,
    FullDay,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::HalfDay, Period::FullDay];

    /// Label used both in the Precos table and in request messages
    pub fn label(&self) -> &'static str {
        match self {
            Period::HalfDay => "Meio dia",
            Period::FullDay => "Todo dia",
        }
    }

    /// Parse a `Periodo` cell ("Meio dia" / "Todo dia"), ignoring case and
    /// surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name a period
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown period: {0}")]
pub struct UnknownPeriod(pub String);

impl FromStr for Period {
    type Err = UnknownPeriod;

    /// Accepts the table labels as well as `half-day`/`full-day` style keys
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(period) = Self::from_label(s) {
            return Ok(period);
        }
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "half_day" | "meio_dia" => Ok(Period::HalfDay),
            "full_day" | "todo_dia" => Ok(Period::FullDay),
            _ => Err(UnknownPeriod(s.to_string())),
        }
    }
}

//! Joined space views

use super::space::Period;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Denormalized space with resolved equipment names and period prices
///
/// Built wholesale by the join on every data load and never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceView {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: String,
    pub capacity: Option<u32>,
    /// Link-table order; unresolved equipment ids are never present
    pub equipment_names: Vec<String>,
    pub price_half_day: Option<Decimal>,
    pub price_full_day: Option<Decimal>,
}

impl SpaceView {
    /// Stored price for a period
    pub fn price_for(&self, period: Period) -> Option<Decimal> {
        match period {
            Period::HalfDay => self.price_half_day,
            Period::FullDay => self.price_full_day,
        }
    }

    /// Capacity as displayed; empty when unknown
    pub fn capacity_text(&self) -> String {
        self.capacity.map(|c| c.to_string()).unwrap_or_default()
    }
}

/// Row of the legacy single-table export, already denormalized at the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedSpace {
    #[serde(flatten)]
    pub view: SpaceView,
    /// Names of other spaces offered alongside this one
    pub related_spaces: Vec<String>,
}

/// Availability card: one space with the entries listed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAvailability {
    pub space_name: String,
    pub entries: Vec<String>,
}

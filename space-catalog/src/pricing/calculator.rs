//! Rental Price Calculator
//!
//! Final price = base + base × 10% × selected equipment count.
//! The surcharge is flat per item and does not compound. Amounts stay in
//! `Decimal` end to end; rounding only happens when formatting.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Period, SelectionState, SpaceView};

/// Surcharge per selected equipment item, as a fraction of the base price
pub const EQUIPMENT_SURCHARGE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Final price for a period base price and a number of add-ons
///
/// An absent base price yields zero.
pub fn compute_price(base_price: Option<Decimal>, selected_equipment_count: usize) -> Decimal {
    let Some(base) = base_price else {
        return Decimal::ZERO;
    };
    base + surcharge(base, selected_equipment_count)
}

fn surcharge(base: Decimal, selected_equipment_count: usize) -> Decimal {
    base * EQUIPMENT_SURCHARGE_RATE * Decimal::from(selected_equipment_count)
}

/// Price breakdown for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub period: Period,
    pub base_price: Option<Decimal>,
    pub equipment_count: usize,
    pub surcharge: Decimal,
    pub final_price: Decimal,
}

impl Quote {
    pub fn is_priced(&self) -> bool {
        self.base_price.is_some()
    }
}

/// Quote a space for the current selection
///
/// Always derived from the view's stored prices and the selection as they
/// are now; call again after every period or equipment change.
pub fn quote(view: &SpaceView, selection: &SelectionState) -> Quote {
    let period = selection.selected_period();
    let base_price = view.price_for(period);
    let equipment_count = selection.equipment_count();

    Quote {
        period,
        base_price,
        equipment_count,
        surcharge: base_price
            .map(|base| surcharge(base, equipment_count))
            .unwrap_or_default(),
        final_price: compute_price(base_price, equipment_count),
    }
}

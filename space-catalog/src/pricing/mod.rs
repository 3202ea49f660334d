//! Rental pricing
//!
//! Surcharge calculation for equipment add-ons and pt-PT price display.

mod calculator;
mod format;

pub use calculator::*;
pub use format::*;

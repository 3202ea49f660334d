//! Price display (pt-PT)
//!
//! Up to 2 fraction digits with trailing zeros dropped, decimal comma, and a
//! no-break space between digit groups once the integer part has 5 digits.

use rust_decimal::prelude::*;

/// Rounding for displayed amounts (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Digit group separator
const GROUP_SEPARATOR: char = '\u{a0}';

/// Integer parts shorter than this are not grouped
const MIN_GROUPED_DIGITS: usize = 5;

/// `1234.5` → `"1234,5 AOA"`, `12345` → `"12 345 AOA"`
pub fn format_price(amount: Decimal, currency: &str) -> String {
    format!("{} {}", format_amount(amount), currency)
}

/// Displayed price, or `-` when there is nothing to charge
pub fn display_price(amount: Option<Decimal>, currency: &str) -> String {
    match amount {
        Some(value) if !value.is_zero() => format_price(value, currency),
        _ => "-".to_string(),
    }
}

fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 4);
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

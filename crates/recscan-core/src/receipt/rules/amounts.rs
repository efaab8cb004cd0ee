//! Price handling for receipt lines.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::STANDALONE_PRICE;

/// Format captured price digits as `$` followed by the digits.
pub fn format_price(digits: &str) -> String {
    format!("${}", digits)
}

/// Match a line that is only a price, e.g. `$12.50` or `12.50`.
pub fn match_standalone_price(line: &str) -> Option<String> {
    STANDALONE_PRICE
        .captures(line)
        .map(|caps| format_price(&caps[1]))
}

/// Numeric value of a formatted price. Placeholders yield `None`.
pub fn parse_price_amount(price: &str) -> Option<Decimal> {
    let digits = price.strip_prefix('$')?;
    Decimal::from_str(digits).ok()
}

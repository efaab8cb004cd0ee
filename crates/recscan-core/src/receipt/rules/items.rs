//! Item line matching: `<qty>x <name>` with or without a trailing price.

use regex::Captures;

use super::amounts::format_price;
use super::patterns::{ITEM_ONLY, ITEM_WITH_PRICE};

/// An item as found on its line, before price reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedItem {
    pub quantity: u32,
    pub name: String,
    /// Inline price, if the line carried one.
    pub price: Option<String>,
}

/// Match `1 x Pie $7.00` style lines.
///
/// Returns `None` when the pattern does not apply and `Some(None)` when it
/// does but the quantity or name is unusable. Such a line carries an inline
/// price, so it must not be retried as a price-less item.
pub fn match_item_with_price(line: &str) -> Option<Option<DetectedItem>> {
    let caps = ITEM_WITH_PRICE.captures(line)?;
    let item = detected_item(&caps).map(|mut item| {
        item.price = Some(format_price(&caps[3]));
        item
    });
    Some(item)
}

/// Match `2 x Soft Drink` style lines that carry no price.
pub fn match_item_only(line: &str) -> Option<DetectedItem> {
    let caps = ITEM_ONLY.captures(line)?;
    detected_item(&caps)
}

/// Quantity from group 1, name from group 2.
///
/// Zero or overflowing quantities and blank names yield `None`.
fn detected_item(caps: &Captures<'_>) -> Option<DetectedItem> {
    let quantity: u32 = caps[1].parse().ok().filter(|&q| q > 0)?;

    let name = caps[2].trim();
    if name.is_empty() {
        return None;
    }

    Some(DetectedItem {
        quantity,
        name: name.to_string(),
        price: None,
    })
}

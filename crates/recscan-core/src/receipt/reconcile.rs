//! Price reconciliation between item lines and standalone price lines.
//!
//! Receipts often print the item name on one line and its price on a later
//! line. Items without an inline price take standalone prices in the order
//! both were found. The last standalone price is held back as the total and
//! is never handed to an item.

use tracing::debug;

use crate::models::receipt::{LineItem, UNKNOWN_PRICE};

use super::rules::DetectedItem;

/// Items with every price resolved, plus the reserved total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub items: Vec<LineItem>,
    pub total: Option<String>,
}

/// Assign standalone prices to unpriced items and pick the total.
///
/// Items keep their order. Unpriced items beyond the available prices get
/// [`UNKNOWN_PRICE`], first come first served.
pub fn reconcile(items: Vec<DetectedItem>, mut prices: Vec<String>) -> Reconciled {
    let total = prices.pop();
    let mut available = prices.into_iter();

    let items = items
        .into_iter()
        .map(|item| {
            let price = match item.price {
                Some(inline) => inline,
                None => match available.next() {
                    Some(price) => {
                        debug!("Assigned {} to {}", price, item.name);
                        price
                    }
                    None => {
                        debug!("No price left for {}", item.name);
                        UNKNOWN_PRICE.to_string()
                    }
                },
            };

            LineItem {
                quantity: item.quantity,
                name: item.name,
                price,
            }
        })
        .collect();

    Reconciled { items, total }
}

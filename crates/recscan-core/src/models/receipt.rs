//! Receipt data models produced by the structuring pass.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::receipt::rules::{amounts::parse_price_amount, dates::parse_receipt_date};

/// Merchant placeholder when the input has no first line.
pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

/// Date placeholder when no line matched the date pattern.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Item price placeholder when no price could be reconciled.
pub const UNKNOWN_PRICE: &str = "Unknown Price";

/// Total placeholder when no standalone price line was found.
pub const UNKNOWN_TOTAL: &str = "Unknown Total";

/// A structured receipt.
///
/// Every field is always populated; missing values carry one of the
/// `UNKNOWN_*` placeholders, which downstream consumers match on verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// First line of the OCR text.
    pub merchant: String,

    /// Matched date text, e.g. `Jan 5, 2024`.
    pub date: String,

    /// Purchased items in the order they appeared.
    pub items: Vec<LineItem>,

    /// Total as `$` followed by the amount.
    pub total: String,
}

impl ReceiptRecord {
    /// Record with every field at its placeholder.
    pub fn empty() -> Self {
        Self {
            merchant: UNKNOWN_MERCHANT.to_string(),
            date: UNKNOWN_DATE.to_string(),
            items: Vec::new(),
            total: UNKNOWN_TOTAL.to_string(),
        }
    }

    pub fn has_merchant(&self) -> bool {
        self.merchant != UNKNOWN_MERCHANT
    }

    pub fn has_date(&self) -> bool {
        self.date != UNKNOWN_DATE
    }

    pub fn has_total(&self) -> bool {
        self.total != UNKNOWN_TOTAL
    }

    /// Calendar date behind the matched date text.
    ///
    /// Returns `None` for the placeholder and for text that names an
    /// impossible day such as `Feb 30, 2024`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        if !self.has_date() {
            return None;
        }
        parse_receipt_date(&self.date)
    }

    /// Numeric value of the total.
    pub fn total_amount(&self) -> Option<Decimal> {
        parse_price_amount(&self.total)
    }

    /// Items still carrying the price placeholder.
    pub fn unpriced_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|item| !item.has_price())
    }
}

impl Default for ReceiptRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single purchased item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity, always at least 1.
    pub quantity: u32,

    /// Item name as printed, trimmed.
    pub name: String,

    /// Price as `$` followed by the amount, or [`UNKNOWN_PRICE`].
    pub price: String,
}

impl LineItem {
    pub fn has_price(&self) -> bool {
        self.price != UNKNOWN_PRICE
    }

    /// Numeric value of the price.
    pub fn amount(&self) -> Option<Decimal> {
        parse_price_amount(&self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_empty_record_serializes_placeholders() {
        let json = serde_json::to_value(ReceiptRecord::empty()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "merchant": "Unknown Merchant",
                "date": "Unknown Date",
                "items": [],
                "total": "Unknown Total",
            })
        );
    }

    #[test]
    fn test_parsed_date() {
        let mut record = ReceiptRecord::empty();
        assert_eq!(record.parsed_date(), None);

        record.date = "Jan 5, 2024".to_string();
        assert_eq!(record.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 5));

        record.date = "Feb 30, 2024".to_string();
        assert_eq!(record.parsed_date(), None);
    }

    #[test]
    fn test_amounts() {
        let mut record = ReceiptRecord::empty();
        assert_eq!(record.total_amount(), None);

        record.total = "$12.50".to_string();
        assert_eq!(record.total_amount(), Some(Decimal::from_str("12.50").unwrap()));

        let item = LineItem {
            quantity: 1,
            name: "Pie".to_string(),
            price: UNKNOWN_PRICE.to_string(),
        };
        assert!(!item.has_price());
        assert_eq!(item.amount(), None);
    }
}

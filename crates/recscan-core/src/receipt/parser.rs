//! Receipt record assembly and the rule-based parser.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::receipt::{ReceiptRecord, UNKNOWN_DATE, UNKNOWN_MERCHANT, UNKNOWN_TOTAL};

use super::classifier::{accumulate, Accumulators, LineStats};
use super::reconcile::reconcile;

/// Turn raw OCR text into a structured receipt.
///
/// Never fails: fields that cannot be found fall back to their `UNKNOWN_*`
/// placeholders, so `structure("")` yields a record with no items and every
/// field unknown. The same text always yields the same record.
pub fn structure(text: &str) -> ReceiptRecord {
    assemble(merchant_line(text), accumulate(text))
}

/// The first raw line, untrimmed.
fn merchant_line(text: &str) -> Option<&str> {
    text.split('\n').next().filter(|line| !line.is_empty())
}

fn assemble(merchant: Option<&str>, acc: Accumulators) -> ReceiptRecord {
    let reconciled = reconcile(acc.items, acc.prices);

    ReceiptRecord {
        merchant: merchant.unwrap_or(UNKNOWN_MERCHANT).to_string(),
        date: acc.date.unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        items: reconciled.items,
        total: reconciled.total.unwrap_or_else(|| UNKNOWN_TOTAL.to_string()),
    }
}

/// Result of receipt extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Structured receipt.
    pub record: ReceiptRecord,
    /// Notes about fields that fell back to placeholders.
    pub warnings: Vec<String>,
    /// Line counts per classification.
    pub stats: LineStats,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse a receipt from OCR text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser applying the ordered line rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRuleParser;

impl LineRuleParser {
    pub fn new() -> Self {
        Self
    }
}

impl ReceiptParser for LineRuleParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing receipt from {} characters of text", text.len());

        let acc = accumulate(text);
        let stats = acc.stats;
        let record = assemble(merchant_line(text), acc);
        let warnings = collect_warnings(&record);

        debug!(
            "Extracted {} items from {} lines ({} unrecognized), total {}",
            record.items.len(),
            stats.total,
            stats.unrecognized,
            record.total
        );

        ExtractionResult {
            record,
            warnings,
            stats,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

fn collect_warnings(record: &ReceiptRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    if !record.has_merchant() {
        warnings.push("Could not extract merchant".to_string());
    }
    if !record.has_date() {
        warnings.push("Could not extract date".to_string());
    }
    if record.items.is_empty() {
        warnings.push("Could not extract line items".to_string());
    }
    for item in record.unpriced_items() {
        warnings.push(format!("No price found for item {}", item.name));
    }
    if !record.has_total() {
        warnings.push("Could not extract total".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::{LineItem, UNKNOWN_PRICE};
    use pretty_assertions::assert_eq;

    fn item(quantity: u32, name: &str, price: &str) -> LineItem {
        LineItem {
            quantity,
            name: name.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_structure_full_receipt() {
        let text = "Joe's Diner\n\
                    123 Main St\n\
                    Phone: 555-0100\n\
                    Jan 5, 2024\n\
                    3:45 PM\n\
                    1x Burger\n\
                    2 x Soft Drink\n\
                    1 x Pie $7.00\n\
                    $9.50\n\
                    $4.00\n\
                    -\n\
                    $20.50\n\
                    Thank You!";

        let record = structure(text);

        assert_eq!(
            record,
            ReceiptRecord {
                merchant: "Joe's Diner".to_string(),
                date: "Jan 5, 2024".to_string(),
                items: vec![
                    item(1, "Burger", "$9.50"),
                    item(2, "Soft Drink", "$4.00"),
                    item(1, "Pie", "$7.00"),
                ],
                total: "$20.50".to_string(),
            }
        );
    }

    #[test]
    fn test_merchant_is_untrimmed_first_line() {
        assert_eq!(structure("  Corner Shop \n$1.00").merchant, "  Corner Shop ");
        assert_eq!(structure("\nCorner Shop").merchant, UNKNOWN_MERCHANT);
    }

    #[test]
    fn test_merchant_line_is_still_classified() {
        let record = structure("2x Bagel\n$3.00");

        assert_eq!(record.merchant, "2x Bagel");
        assert_eq!(record.items, vec![item(2, "Bagel", UNKNOWN_PRICE)]);
        assert_eq!(record.total, "$3.00");
    }

    #[test]
    fn test_parse_reports_warnings() {
        let result = LineRuleParser::new().parse("Cafe\n2x Coffee\n$6.00");

        assert_eq!(
            result.warnings,
            vec![
                "Could not extract date".to_string(),
                "No price found for item Coffee".to_string(),
            ]
        );
        assert_eq!(result.stats.total, 3);
        assert_eq!(result.record, structure("Cafe\n2x Coffee\n$6.00"));
    }

    #[test]
    fn test_parse_empty() {
        let result = LineRuleParser::new().parse("");

        assert_eq!(result.record, ReceiptRecord::empty());
        assert_eq!(result.warnings.len(), 4);
    }
}

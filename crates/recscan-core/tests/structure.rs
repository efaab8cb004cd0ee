use pretty_assertions::assert_eq;
use recscan_core::models::receipt::{UNKNOWN_DATE, UNKNOWN_MERCHANT, UNKNOWN_PRICE, UNKNOWN_TOTAL};
use recscan_core::{structure, LineItem, ReceiptRecord};

fn item(quantity: u32, name: &str, price: &str) -> LineItem {
    LineItem {
        quantity,
        name: name.to_string(),
        price: price.to_string(),
    }
}

#[test]
fn empty_input_falls_back_everywhere() {
    assert_eq!(
        structure(""),
        ReceiptRecord {
            merchant: UNKNOWN_MERCHANT.to_string(),
            date: UNKNOWN_DATE.to_string(),
            items: vec![],
            total: UNKNOWN_TOTAL.to_string(),
        }
    );
}

#[test]
fn repeated_runs_are_identical() {
    let text = "Joe's Diner\nJan 5, 2024\n1x Burger\n2 x Fries\n$4.00\n$3.00\n$7.00";

    let first = serde_json::to_string(&structure(text)).unwrap();
    let second = serde_json::to_string(&structure(text)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn merchant_is_first_line() {
    let record = structure("Joe's Diner\nThank You\n1x Burger\n$5.00");

    assert_eq!(record.merchant, "Joe's Diner");
}

#[test]
fn single_price_is_reserved_for_total() {
    let record = structure("Cafe\n2x Coffee\n$6.00");

    assert_eq!(record.items, vec![item(2, "Coffee", UNKNOWN_PRICE)]);
    assert_eq!(record.total, "$6.00");
}

#[test]
fn inline_price_takes_precedence() {
    let record = structure("Bakery\n1 x Pie $7.00\n1x Tart\n$3.00\n$10.00");

    assert_eq!(
        record.items,
        vec![item(1, "Pie", "$7.00"), item(1, "Tart", "$3.00")]
    );
    assert_eq!(record.total, "$10.00");
}

#[test]
fn first_date_wins() {
    let record = structure("Shop\nPaid on Jan 5, 2024\nReturn by Feb 4, 2024");

    assert_eq!(record.date, "Jan 5, 2024");
}

#[test]
fn noise_lines_contribute_nothing() {
    let record = structure(
        "Shop\nThank You\nVisit us at Jan 5, 2024\nPhone: 555 1234\n3:45 PM\n-\n1x Visitor pass",
    );

    assert_eq!(record.date, UNKNOWN_DATE);
    assert!(record.items.is_empty());
    assert_eq!(record.total, UNKNOWN_TOTAL);
}

#[test]
fn prices_assigned_in_appearance_order() {
    let record = structure("Tea House\n1x Tea\n1x Scone\n$2.00\n$3.00\n$10.00");

    assert_eq!(
        record.items,
        vec![item(1, "Tea", "$2.00"), item(1, "Scone", "$3.00")]
    );
    assert_eq!(record.total, "$10.00");
}

#[test]
fn excess_items_get_placeholder_latest_first() {
    let record = structure("Deli\n1x A\n1x B\n1x C\n$1.00\n$2.00");

    assert_eq!(
        record.items,
        vec![
            item(1, "A", "$1.00"),
            item(1, "B", UNKNOWN_PRICE),
            item(1, "C", UNKNOWN_PRICE),
        ]
    );
    assert_eq!(record.total, "$2.00");
}

#[test]
fn multibyte_names_and_crlf() {
    let record = structure("Café Olé\r\n2x Crème brûlée\r\n$9.00\r\n");

    assert_eq!(record.merchant, "Café Olé\r");
    assert_eq!(record.items, vec![item(2, "Crème brûlée", UNKNOWN_PRICE)]);
    assert_eq!(record.total, "$9.00");
}

#[test]
fn record_json_shape() {
    let record = structure("Cafe\n1 x Pie $7.00\n$7.00");

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({
            "merchant": "Cafe",
            "date": "Unknown Date",
            "items": [{"quantity": 1, "name": "Pie", "price": "$7.00"}],
            "total": "$7.00",
        })
    );
}

#[test]
fn inline_price_pattern_tried_before_plain_item() {
    let record = structure("Corner Store\n3x Soda 4.50\n1x Chips\n$1.25\n$14.75");

    assert_eq!(
        record.items,
        vec![item(3, "Soda", "$4.50"), item(1, "Chips", "$1.25")]
    );
    assert_eq!(record.total, "$14.75");
}

#[test]
fn blank_item_name_with_price_is_dropped() {
    let record = structure("Shop\n2x   5.00\n$1.00");

    assert!(record.items.is_empty());
    assert_eq!(record.total, "$1.00");
}

#[test]
fn byte_order_mark_is_trimmed_from_lines() {
    let record = structure("\u{feff}$3.00\nShop");

    assert_eq!(record.total, "$3.00");
}

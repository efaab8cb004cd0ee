//! Line patterns for receipt OCR text.
//!
//! All patterns run against a single trimmed line.

use lazy_static::lazy_static;
use regex::Regex;

/// Case-insensitive fragments marking a line as noise.
pub const NOISE_KEYWORDS: [&str; 3] = ["thank you", "visit", "phone"];

/// A line consisting of only this is a separator.
pub const SEPARATOR: &str = "-";

lazy_static! {
    // 12-hour clock, e.g. "3:45 PM"
    pub static ref TIMESTAMP: Regex = Regex::new(
        r"[0-9]{1,2}:[0-9]{2} (AM|PM)"
    ).unwrap();

    // "Jan 5, 2024", "January 15 2024"
    pub static ref DATE: Regex = Regex::new(
        r"\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+([0-9]{1,2}),?\s+([0-9]{4})\b"
    ).unwrap();

    // "$12.50" or "12.50" and nothing else
    pub static ref STANDALONE_PRICE: Regex = Regex::new(
        r"^\$?([0-9]+\.[0-9]{2})$"
    ).unwrap();

    // "1 x Pie $7.00", "2x Soda 3.00"
    pub static ref ITEM_WITH_PRICE: Regex = Regex::new(
        r"^([0-9]+) ?x\s+(.+?)\s+\$?([0-9]+\.[0-9]{2})$"
    ).unwrap();

    // "1x Burger", "2 x Soft Drink"
    pub static ref ITEM_ONLY: Regex = Regex::new(
        r"^([0-9]+) ?x\s+([^$]+)$"
    ).unwrap();
}

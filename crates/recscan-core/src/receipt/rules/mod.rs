//! Rule-based matchers for receipt lines.
//!
//! Each matcher inspects one trimmed line and reports whether its rule
//! applies. Ordering between rules lives in the classifier.

pub mod amounts;
pub mod dates;
pub mod items;
pub mod noise;
pub mod patterns;

pub use amounts::{format_price, match_standalone_price, parse_price_amount};
pub use dates::{match_date, parse_receipt_date};
pub use items::{match_item_only, match_item_with_price, DetectedItem};
pub use noise::is_noise;
pub use patterns::*;

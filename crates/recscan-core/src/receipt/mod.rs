//! Receipt text structuring.
//!
//! Raw OCR text flows through four stages: every trimmed line is classified
//! by ordered rules, prices and items are accumulated in encounter order,
//! unpriced items are reconciled against standalone prices, and the record is
//! assembled with the first line as merchant.

mod classifier;
mod input;
mod parser;
mod reconcile;
pub mod rules;

pub use classifier::{accumulate, classify_line, trim_line, Accumulators, LineKind, LineStats};
pub use input::check_input;
pub use parser::{structure, ExtractionResult, LineRuleParser, ReceiptParser};
pub use reconcile::{reconcile, Reconciled};

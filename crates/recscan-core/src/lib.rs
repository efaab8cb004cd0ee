//! Core library for receipt OCR text structuring.
//!
//! This crate provides:
//! - Line classification of raw OCR text (noise, dates, prices, items)
//! - Price reconciliation between item lines and standalone price lines
//! - Receipt record assembly with stable fallback values
//! - Boundary checks and configuration for callers feeding OCR text in

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{InputError, RecscanError, Result};
pub use models::config::RecscanConfig;
pub use models::receipt::{LineItem, ReceiptRecord};
pub use receipt::{check_input, structure, ExtractionResult, LineRuleParser, ReceiptParser};

//! Data models for structured receipts and configuration.

pub mod config;
pub mod receipt;

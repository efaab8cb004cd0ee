//! Checks applied to OCR text before it reaches the parser.

use crate::error::{InputError, Result};
use crate::models::config::InputConfig;

/// Validate OCR text against the configured limits.
///
/// A limit of 0 disables that check.
pub fn check_input(text: &str, config: &InputConfig) -> Result<()> {
    if config.reject_empty && text.trim().is_empty() {
        return Err(InputError::NoText.into());
    }

    let size = text.len();
    if config.max_bytes > 0 && size > config.max_bytes {
        return Err(InputError::TooLarge {
            size,
            limit: config.max_bytes,
        }
        .into());
    }

    if config.max_lines > 0 {
        let count = text.split('\n').count();
        if count > config.max_lines {
            return Err(InputError::TooManyLines {
                count,
                limit: config.max_lines,
            }
            .into());
        }
    }

    Ok(())
}

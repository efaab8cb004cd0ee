//! WASM bindings for receipt OCR text structuring.
//!
//! Browser or Node.js code runs OCR itself and hands the text over here.

use wasm_bindgen::prelude::*;

use recscan_core::{structure, LineRuleParser, ReceiptParser, ReceiptRecord};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Structure receipt OCR text into `{merchant, date, items, total}`.
#[wasm_bindgen]
pub fn structure_receipt(text: &str) -> Result<JsValue, JsValue> {
    to_js(&structure(text))
}

/// Same as [`structure_receipt`], serialized as a JSON string.
#[wasm_bindgen]
pub fn structure_receipt_json(text: &str) -> String {
    record_json(&structure(text))
}

/// Receipt extractor class for browser use.
#[wasm_bindgen]
pub struct ReceiptExtractor {
    parser: LineRuleParser,
}

#[wasm_bindgen]
impl ReceiptExtractor {
    /// Create a new receipt extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: LineRuleParser::new(),
        }
    }

    /// Extract receipt from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text).record)
    }

    /// Get extraction result with warnings, line counts and timing.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.parser.parse(text))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for ReceiptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Text lines collected from browser-side OCR.
#[wasm_bindgen]
pub struct OcrLinesJs {
    lines: Vec<String>,
}

#[wasm_bindgen]
impl OcrLinesJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append one recognized line, top to bottom.
    #[wasm_bindgen]
    pub fn add_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    /// Get the full text.
    #[wasm_bindgen]
    pub fn get_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Structure the collected lines.
    #[wasm_bindgen]
    pub fn extract_receipt(&self) -> Result<JsValue, JsValue> {
        structure_receipt(&self.get_text())
    }
}

impl Default for OcrLinesJs {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(record: &ReceiptRecord) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(record).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn record_json(record: &ReceiptRecord) -> String {
    // Only strings and integers, serialization cannot fail
    serde_json::to_string(record).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_structure_receipt_json() {
        let json = structure_receipt_json("Cafe\n2x Coffee\n$6.00");

        assert_eq!(
            json,
            r#"{"merchant":"Cafe","date":"Unknown Date","items":[{"quantity":2,"name":"Coffee","price":"Unknown Price"}],"total":"$6.00"}"#
        );
    }

    #[wasm_bindgen_test]
    fn test_ocr_lines_join() {
        let mut lines = OcrLinesJs::new();
        lines.add_line("Cafe");
        lines.add_line("1 x Pie $7.00");

        assert_eq!(lines.get_text(), "Cafe\n1 x Pie $7.00");
    }
}

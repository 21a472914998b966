//! WASM bindings for HelioScope summary report extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! A page can hand over an uploaded `File`, raw PDF bytes, or already
//! flattened text and gets the extraction result back as a plain JS object.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use helio_core::models::report::ExtractionResult;
use helio_core::pdf::{PdfExtractor, PdfProcessor};
use helio_core::report::rules::{RULE_NAMES, is_rule_name};
use helio_core::report::view::ReportView;
use helio_core::report::{HelioscopeParser, ReportParser};

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

/// Names of the extraction rules that can be disabled.
#[wasm_bindgen]
pub fn rule_names() -> Vec<String> {
    RULE_NAMES.iter().map(|name| name.to_string()).collect()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects rather than Maps so the result reads like JSON.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn flatten_pdf(data: &[u8]) -> Result<String, JsValue> {
    let mut extractor = PdfExtractor::new();
    extractor
        .load(data)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    extractor
        .extract_text()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract report data from already flattened text.
#[wasm_bindgen]
pub fn extract_report_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&HelioscopeParser::new().parse(text))
}

/// Extract report data from the bytes of a PDF.
#[wasm_bindgen]
pub fn extract_report_from_pdf(data: &[u8]) -> Result<JsValue, JsValue> {
    ReportExtractor::new().extract_pdf(data)
}

/// Extract report data from an uploaded file.
#[wasm_bindgen]
pub async fn extract_report_from_file(file: web_sys::File) -> Result<JsValue, JsValue> {
    let data = read_file(&file).await?;
    extract_report_from_pdf(&data)
}

/// Flatten a PDF to text, pages joined by newlines.
#[wasm_bindgen]
pub fn extract_pdf_text(data: &[u8]) -> Result<String, JsValue> {
    flatten_pdf(data)
}

/// Presentation sections for a result previously returned by one of the
/// extract functions.
#[wasm_bindgen]
pub fn report_view(result: JsValue) -> Result<JsValue, JsValue> {
    let result: ExtractionResult = serde_wasm_bindgen::from_value(result)?;
    to_js(&ReportView::from_result(&result))
}

async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Report extractor class for browser use.
#[wasm_bindgen]
pub struct ReportExtractor {
    parser: HelioscopeParser,
}

#[wasm_bindgen]
impl ReportExtractor {
    /// Create a new report extractor with every rule enabled.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: HelioscopeParser::new(),
        }
    }

    /// Skip the named rules. Unknown names are rejected.
    #[wasm_bindgen]
    pub fn set_disabled_rules(&mut self, names: Vec<String>) -> Result<(), JsValue> {
        if let Some(unknown) = names.iter().find(|name| !is_rule_name(name)) {
            return Err(JsValue::from_str(&format!("Unknown rule name: {}", unknown)));
        }
        self.parser = HelioscopeParser::new().with_disabled_rules(names);
        Ok(())
    }

    /// Extract report data from flattened text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// Extract report data from PDF bytes.
    #[wasm_bindgen]
    pub fn extract_pdf(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        let text = flatten_pdf(data)?;
        to_js(&self.parser.parse(&text))
    }

    /// Get the extraction result together with the flattened text.
    #[wasm_bindgen]
    pub fn extract_pdf_with_text(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExtractWithText {
            result: ExtractionResult,
            raw_text: String,
        }

        let raw_text = flatten_pdf(data)?;
        let output = ExtractWithText {
            result: self.parser.parse(&raw_text),
            raw_text,
        };

        to_js(&output)
    }
}

impl Default for ReportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

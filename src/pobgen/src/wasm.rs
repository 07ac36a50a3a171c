//! WebAssembly bindings for pobgen
//!
//! This module provides JavaScript-friendly bindings for the web front end.

use crate::document::{decode_document as rust_decode_document, export, ExportOptions};
use crate::model::{CharacterRecord, TreeRecord};
use crate::translate::Dictionary;
use wasm_bindgen::prelude::*;

/// Convert character and tree JSON into an import code
///
/// # Arguments
/// * `items_json` - The `get-items` response
/// * `tree_json` - The `get-passive-skills` response
/// * `dictionary_json` - Translation dictionary (`{"names": .., "mods": ..}`)
///
/// # Returns
/// The encoded build document
#[wasm_bindgen(js_name = exportBuild)]
pub fn export_build(
    items_json: &str,
    tree_json: &str,
    dictionary_json: &str,
) -> Result<String, JsValue> {
    let character = CharacterRecord::from_json(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid items JSON: {}", e)))?;
    let tree = TreeRecord::from_json(tree_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid tree JSON: {}", e)))?;
    let dictionary = Dictionary::from_json(dictionary_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid dictionary JSON: {}", e)))?;

    export(&character, &tree, &dictionary, &ExportOptions::default())
        .map_err(|e| JsValue::from_str(&format!("Export failed: {}", e)))
}

/// Decode an import code back into document XML
#[wasm_bindgen(js_name = decodeDocument)]
pub fn decode_document(code: &str) -> Result<String, JsValue> {
    rust_decode_document(code).map_err(|e| JsValue::from_str(&format!("Decode failed: {}", e)))
}

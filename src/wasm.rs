//! WASM bindings for browser-based book generation.
//!
//! This module exposes the generator to JavaScript via wasm-bindgen. The
//! inputs are JSON strings (the travel list and the settings object) and
//! the output is the finished HTML document.

use wasm_bindgen::prelude::*;

use crate::book::BookGenerator;
use crate::model::{BookSettings, TravelForBook, find_preset};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn parse_travels(travels_json: &str) -> Result<Vec<TravelForBook>, JsValue> {
    serde_json::from_str(travels_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn generate(settings: BookSettings, travels: &[TravelForBook]) -> String {
    let user_name = travels.first().and_then(|travel| travel.user_name.as_deref());
    let settings = settings.resolve(user_name);
    BookGenerator::new(settings).generate(travels)
}

/// Generate a book from a travel list and a settings object.
///
/// Takes two JSON strings and returns the complete HTML document.
#[wasm_bindgen]
pub fn generate_book(travels_json: &str, settings_json: &str) -> Result<String, JsValue> {
    let travels = parse_travels(travels_json)?;
    let settings: BookSettings =
        serde_json::from_str(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    settings
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(generate(settings, &travels))
}

/// Generate a book from a travel list using a named preset's settings.
#[wasm_bindgen]
pub fn generate_book_with_preset(travels_json: &str, preset_id: &str) -> Result<String, JsValue> {
    let travels = parse_travels(travels_json)?;
    let preset = find_preset(preset_id).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(generate(BookSettings::from_preset(preset), &travels))
}

/// Names of the shipped themes, for populating a theme picker.
#[wasm_bindgen]
pub fn theme_names() -> Vec<String> {
    crate::theme::theme_names().map(str::to_string).collect()
}

/// Identifiers of the shipped presets, for populating a preset picker.
#[wasm_bindgen]
pub fn preset_ids() -> Vec<String> {
    crate::model::book_presets()
        .iter()
        .map(|preset| preset.id.to_string())
        .collect()
}

/// The preset registry as JSON, including labels, icons and categories.
#[wasm_bindgen]
pub fn preset_catalog() -> Result<String, JsValue> {
    serde_json::to_string(crate::model::book_presets())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

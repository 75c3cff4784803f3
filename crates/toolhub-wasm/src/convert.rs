//! Unit converter WASM bindings.

use serde::Serialize;
use toolhub_core::convert::{convert_units, Category, Country};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct CountryEntry {
    code: &'static str,
    name: &'static str,
}

/// Convert a value and return the display text: 4 decimals for length and
/// weight, 2 for temperature.
///
/// # Example (TypeScript)
/// ```typescript
/// convert('length', 'US', 'meter', 'feet', 1);            // "3.2808"
/// convert('temperature', 'CA', 'fahrenheit', 'celsius', 100); // "37.78"
/// ```
#[wasm_bindgen]
pub fn convert(
    category: &str,
    country: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<String, JsValue> {
    convert_units(category, country, from_unit, to_unit, value)
        .map(|conversion| conversion.formatted())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a value and return the full record
/// (`{category, country, fromUnit, toUnit, fromValue, toValue}`).
#[wasm_bindgen]
pub fn convert_record(
    category: &str,
    country: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<JsValue, JsValue> {
    let conversion = convert_units(category, country, from_unit, to_unit, value)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&conversion)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Units offered for a category in a country, in display order.
#[wasm_bindgen]
pub fn units(category: &str, country: &str) -> Result<Vec<String>, JsValue> {
    unit_names(category, country).map_err(|e| JsValue::from_str(&e))
}

fn unit_names(category: &str, country: &str) -> Result<Vec<String>, String> {
    let category: Category = category.parse().map_err(|e: toolhub_core::ConvertError| e.to_string())?;
    let country: Country = country.parse().map_err(|e: toolhub_core::ConvertError| e.to_string())?;
    Ok(toolhub_core::units(category, country)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Category selectors, in display order.
#[wasm_bindgen]
pub fn categories() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|category| category.as_str().to_string())
        .collect()
}

/// Supported countries as `[{code, name}]`.
#[wasm_bindgen]
pub fn countries() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&country_entries())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn country_entries() -> Vec<CountryEntry> {
    Country::ALL
        .iter()
        .map(|country| CountryEntry {
            code: country.code(),
            name: country.name(),
        })
        .collect()
}

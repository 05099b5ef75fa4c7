//! Stateless conversion functions for JavaScript.
//!
//! Core errors are returned as string `JsValue`s so they surface as thrown
//! exceptions on the JS side.

use wasm_bindgen::prelude::*;
use difficulty_core::{
    decode_compact_target, format_target_binary, format_target_hex, genesis_target,
    target_from_difficulty, ConversionError, DifficultyUnit,
};
use crate::state::UnitInfo;

fn to_js_error(e: ConversionError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_unit(unit: &str) -> Result<DifficultyUnit, JsValue> {
    DifficultyUnit::from_str(unit)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown unit: {}", unit)))
}

/// Leading zero bits a hash needs at the given difficulty.
#[wasm_bindgen]
pub fn required_leading_zero_bits(difficulty: f64) -> Result<u32, JsValue> {
    difficulty_core::required_leading_zero_bits(difficulty).map_err(to_js_error)
}

/// Difficulty implied by a leading zero count (`Infinity` at 255).
#[wasm_bindgen]
pub fn difficulty_from_leading_zero_bits(zeroes: i32) -> Result<f64, JsValue> {
    difficulty_core::difficulty_from_leading_zero_bits(zeroes as i64).map_err(to_js_error)
}

/// Target for a difficulty, as 0x-prefixed hex.
#[wasm_bindgen]
pub fn target_from_difficulty_hex(difficulty: f64) -> Result<String, JsValue> {
    let target = target_from_difficulty(difficulty).map_err(to_js_error)?;
    Ok(format_target_hex(&target))
}

/// Target for a difficulty, as 256 binary digits.
#[wasm_bindgen]
pub fn target_from_difficulty_binary(difficulty: f64) -> Result<String, JsValue> {
    let target = target_from_difficulty(difficulty).map_err(to_js_error)?;
    Ok(format_target_binary(&target))
}

/// Decode compact "bits" into a hex target.
#[wasm_bindgen]
pub fn decode_compact_target_hex(bits: u32) -> Result<String, JsValue> {
    let target = decode_compact_target(bits).map_err(to_js_error)?;
    Ok(format_target_hex(&target))
}

/// Difficulty encoded by compact "bits".
#[wasm_bindgen]
pub fn difficulty_from_bits(bits: u32) -> Result<f64, JsValue> {
    difficulty_core::difficulty_from_bits(bits).map_err(to_js_error)
}

/// The genesis (difficulty 1) target as hex.
#[wasm_bindgen]
pub fn genesis_target_hex() -> String {
    format_target_hex(genesis_target())
}

/// Format a difficulty in a unit ("", "K", "M", "G", "T", "P", "E").
#[wasm_bindgen]
pub fn format_difficulty(value: f64, unit: &str) -> Result<String, JsValue> {
    Ok(difficulty_core::format_difficulty(value, parse_unit(unit)?))
}

/// Parse difficulty text typed in a unit. Unparsable text is 0.
#[wasm_bindgen]
pub fn parse_difficulty(text: &str, unit: &str) -> Result<f64, JsValue> {
    Ok(difficulty_core::parse_difficulty(text, parse_unit(unit)?))
}

/// Format a number with a magnitude word ("1.5 million").
#[wasm_bindgen]
pub fn format_large_number(value: f64) -> String {
    difficulty_core::format_large_number(value)
}

/// Units for the unit picker.
#[wasm_bindgen]
pub fn difficulty_units() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&UnitInfo::all())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

//! Converter controller exposed to JavaScript.

use wasm_bindgen::prelude::*;
use difficulty_core::DifficultyUnit;
use crate::state::ConverterState;

/// The bidirectional difficulty / leading zero converter.
///
/// Each setter takes the raw field text, updates the other field and
/// returns a fresh snapshot of everything the page displays.
#[wasm_bindgen]
pub struct Converter {
    /// Form state.
    state: ConverterState,
}

#[wasm_bindgen]
impl Converter {
    /// Create a converter with the default inputs.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Converter {
        Converter {
            state: ConverterState::new(),
        }
    }

    /// The user edited the difficulty field.
    #[wasm_bindgen]
    pub fn set_difficulty(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.state.set_difficulty_input(text);
        self.report_error();
        self.snapshot()
    }

    /// The user edited the leading zero field.
    #[wasm_bindgen]
    pub fn set_leading_zeros(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.state.set_leading_zeros_input(text);
        self.report_error();
        self.snapshot()
    }

    /// The user picked another unit.
    ///
    /// # Arguments
    /// * `unit` - Unit symbol ("", "K" ... "E") or name ("units", "tera")
    #[wasm_bindgen]
    pub fn set_unit(&mut self, unit: &str) -> Result<JsValue, JsValue> {
        let unit = DifficultyUnit::from_str(unit)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown unit: {}", unit)))?;
        self.state.set_unit(unit);
        self.report_error();
        self.snapshot()
    }

    /// Get the current display snapshot.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        self.state.snapshot().to_js()
    }

    /// Get the current display snapshot as JSON.
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.state
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Difficulty field text.
    #[wasm_bindgen(getter)]
    pub fn difficulty_input(&self) -> String {
        self.state.difficulty_input().to_string()
    }

    /// Leading zero field text.
    #[wasm_bindgen(getter)]
    pub fn leading_zeros_input(&self) -> String {
        self.state.leading_zeros_input().to_string()
    }

    /// Selected unit symbol.
    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.state.unit().symbol().to_string()
    }

    /// Full difficulty value.
    #[wasm_bindgen(getter)]
    pub fn difficulty(&self) -> f64 {
        self.state.actual_difficulty()
    }

    /// Reset to the default inputs.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.state = ConverterState::new();
    }

    /// Log a conversion error to the console instead of failing the update.
    fn report_error(&mut self) {
        if let Some(error) = self.state.take_error() {
            web_sys::console::error_1(&JsValue::from_str(&error));
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

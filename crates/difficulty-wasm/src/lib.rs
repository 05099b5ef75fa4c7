//! WebAssembly bindings for the Bitcoin difficulty converter.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Converting between difficulty, leading zero bits and targets
//! - Formatting difficulty values in display units
//! - Driving the bidirectional converter form

use wasm_bindgen::prelude::*;

pub mod api;
pub mod converter;
pub mod state;

// Re-export main types for JS access
pub use converter::Converter;
pub use state::{ConversionInfo, ConverterState};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Converter form state and the snapshots handed to JavaScript.

use difficulty_core::{
    convert::{expected_hashes, log2_difficulty},
    format::{format_grouped, parse_leading_zeros},
    format_difficulty, format_large_number, format_target_binary, format_target_hex,
    parse_difficulty, required_leading_zero_bits, target_from_difficulty,
    zeros::{binary_pattern_preview, hash_probability, zeroes_ratio_percent, MAX_LEADING_ZEROS},
    difficulty_from_leading_zero_bits, DifficultyUnit,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Difficulty text shown before the user types anything.
pub const DEFAULT_DIFFICULTY_INPUT: &str = "88.40";

/// Leading zero text shown before the user types anything.
pub const DEFAULT_LEADING_ZEROS_INPUT: &str = "70";

/// Which side of the form was edited last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSource {
    /// The difficulty field drives the zero count.
    Difficulty,
    /// The zero count drives the difficulty field.
    LeadingZeros,
}

/// State of the bidirectional difficulty / leading zero form.
///
/// Mirrors what the two input fields hold. Whichever field was edited last
/// is the source of truth and the other one is recomputed from it. Errors
/// never escape: the other field keeps its previous text and the error is
/// kept for the caller to log.
#[derive(Debug, Clone)]
pub struct ConverterState {
    difficulty_input: String,
    unit: DifficultyUnit,
    leading_zeros_input: String,
    source: EditSource,
    last_error: Option<String>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterState {
    /// Create the form with its default inputs, zero count already synced.
    pub fn new() -> Self {
        let mut state = ConverterState {
            difficulty_input: DEFAULT_DIFFICULTY_INPUT.to_string(),
            unit: DifficultyUnit::Tera,
            leading_zeros_input: DEFAULT_LEADING_ZEROS_INPUT.to_string(),
            source: EditSource::Difficulty,
            last_error: None,
        };
        state.sync();
        state
    }

    /// Raw difficulty field text.
    pub fn difficulty_input(&self) -> &str {
        &self.difficulty_input
    }

    /// Raw leading zero field text.
    pub fn leading_zeros_input(&self) -> &str {
        &self.leading_zeros_input
    }

    /// Selected display unit.
    pub fn unit(&self) -> DifficultyUnit {
        self.unit
    }

    /// Field that was edited last.
    pub fn source(&self) -> EditSource {
        self.source
    }

    /// Full difficulty value of the difficulty field in its unit.
    pub fn actual_difficulty(&self) -> f64 {
        parse_difficulty(&self.difficulty_input, self.unit)
    }

    /// Leading zero count as displayed, 0 when the field is not a number.
    pub fn leading_zeros(&self) -> i64 {
        parse_leading_zeros(&self.leading_zeros_input).unwrap_or(0)
    }

    /// The user typed in the difficulty field.
    pub fn set_difficulty_input(&mut self, text: &str) {
        self.difficulty_input = text.to_string();
        self.source = EditSource::Difficulty;
        self.sync();
    }

    /// The user typed in the leading zero field.
    pub fn set_leading_zeros_input(&mut self, text: &str) {
        self.leading_zeros_input = text.to_string();
        self.source = EditSource::LeadingZeros;
        self.sync();
    }

    /// Switch units, keeping the same difficulty value.
    pub fn set_unit(&mut self, unit: DifficultyUnit) {
        let current = self.actual_difficulty();
        self.difficulty_input = format_difficulty(current, unit);
        self.unit = unit;
        self.sync();
    }

    /// Take the last recorded error, if any.
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    fn sync(&mut self) {
        match self.source {
            EditSource::Difficulty => self.sync_from_difficulty(),
            EditSource::LeadingZeros => self.sync_from_leading_zeros(),
        }
    }

    fn sync_from_difficulty(&mut self) {
        let difficulty = self.actual_difficulty();
        if !(difficulty > 0.0) {
            return;
        }
        match required_leading_zero_bits(difficulty) {
            Ok(zeroes) => self.leading_zeros_input = zeroes.to_string(),
            Err(e) => {
                self.last_error = Some(format!("Error calculating leading zeroes: {}", e))
            }
        }
    }

    fn sync_from_leading_zeros(&mut self) {
        let zeroes = match parse_leading_zeros(&self.leading_zeros_input) {
            Some(zeroes) if (0..=MAX_LEADING_ZEROS).contains(&zeroes) => zeroes,
            _ => return,
        };
        match difficulty_from_leading_zero_bits(zeroes) {
            Ok(difficulty) if difficulty.is_finite() => {
                self.difficulty_input = format_difficulty(difficulty, self.unit);
            }
            Ok(_) => {}
            Err(e) => {
                self.last_error = Some(format!("Error calculating difficulty: {}", e))
            }
        }
    }

    /// Build a display snapshot of the current form.
    pub fn snapshot(&self) -> ConversionInfo {
        let difficulty = self.actual_difficulty();
        let zeroes = self.leading_zeros();
        let probability = hash_probability(zeroes);
        let target = target_from_difficulty(difficulty).ok();

        ConversionInfo {
            difficulty_input: self.difficulty_input.clone(),
            unit: self.unit.symbol().to_string(),
            difficulty,
            difficulty_display: format_grouped(difficulty),
            leading_zeros_input: self.leading_zeros_input.clone(),
            leading_zeros: zeroes,
            hash_probability: probability,
            hash_probability_display: format_grouped(probability),
            hash_probability_words: format_large_number(probability),
            binary_pattern: binary_pattern_preview(zeroes),
            log2_difficulty: log2_difficulty(difficulty),
            zeroes_ratio_percent: zeroes_ratio_percent(zeroes),
            expected_hashes: expected_hashes(difficulty),
            target_hex: target.as_ref().map(format_target_hex),
            target_binary: target.as_ref().map(format_target_binary),
        }
    }
}

/// Everything the converter page displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionInfo {
    /// Difficulty field text.
    pub difficulty_input: String,
    /// Unit symbol of the difficulty field.
    pub unit: String,
    /// Full difficulty value.
    pub difficulty: f64,
    /// Full difficulty with thousands separators.
    pub difficulty_display: String,
    /// Leading zero field text.
    pub leading_zeros_input: String,
    /// Leading zero count as displayed.
    pub leading_zeros: i64,
    /// Hash probability, as "1 in N".
    pub hash_probability: f64,
    /// Hash probability with thousands separators.
    pub hash_probability_display: String,
    /// Hash probability in words ("1.2 sextillion").
    pub hash_probability_words: String,
    /// Binary pattern preview.
    pub binary_pattern: String,
    /// Base-2 logarithm of the difficulty.
    pub log2_difficulty: f64,
    /// Leading zeroes as a share of 256 bits.
    pub zeroes_ratio_percent: f64,
    /// Average hashes needed per block.
    pub expected_hashes: f64,
    /// Target for the difficulty, hex. Absent for invalid difficulty.
    pub target_hex: Option<String>,
    /// Target for the difficulty, binary. Absent for invalid difficulty.
    pub target_binary: Option<String>,
}

impl ConversionInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }

    /// Convert to a JSON string.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Serialization error: {}", e))
    }
}

/// Unit picker entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Symbol used as the unit tag.
    pub symbol: String,
    /// Label for the picker.
    pub label: String,
    /// Full name.
    pub name: String,
    /// Scale factor.
    pub multiplier: f64,
}

impl UnitInfo {
    /// All units, smallest first.
    pub fn all() -> Vec<UnitInfo> {
        DifficultyUnit::ALL
            .iter()
            .map(|unit| UnitInfo {
                symbol: unit.symbol().to_string(),
                label: unit.label().to_string(),
                name: unit.name().to_string(),
                multiplier: unit.multiplier(),
            })
            .collect()
    }
}

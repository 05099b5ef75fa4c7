//! Core conversion logic for the Bitcoin difficulty converter.
//!
//! This crate provides pure Rust implementations of:
//! - Compact "nBits" target decoding and encoding
//! - Difficulty to target conversion relative to the genesis target
//! - Leading zero bit counting and target synthesis
//! - Difficulty unit scaling and human readable number formatting

pub mod convert;
pub mod error;
pub mod format;
pub mod target;
pub mod zeros;

pub use convert::{difficulty_from_bits, difficulty_from_target, target_from_difficulty};
pub use error::{ConversionError, Result};
pub use format::{
    format_difficulty, format_large_number, format_target_binary, format_target_hex,
    parse_difficulty, DifficultyUnit,
};
pub use target::{
    decode_compact_target, encode_compact_target, genesis_target, leading_zero_bits,
    GENESIS_BITS, GENESIS_TARGET,
};
pub use zeros::{difficulty_from_leading_zero_bits, required_leading_zero_bits};

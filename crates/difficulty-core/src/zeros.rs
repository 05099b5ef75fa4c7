//! Leading zero bit counting and the reverse synthesis of targets.
//!
//! A hash meets a target roughly when it starts with as many zero bits as
//! the target does, so the leading zero count is a readable proxy for
//! difficulty.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::convert::{difficulty_from_target, target_from_difficulty};
use crate::error::{ConversionError, Result};
use crate::target::{leading_zero_bits, TARGET_BITS};

/// Largest accepted leading zero count.
pub const MAX_LEADING_ZEROS: i64 = 255;

/// Number of zeroes spelled out by [`binary_pattern_preview`].
const PREVIEW_ZEROS: usize = 32;

/// Calculate how many leading zero bits a hash needs for a given difficulty.
pub fn required_leading_zero_bits(difficulty: f64) -> Result<u32> {
    let target = target_from_difficulty(difficulty)?;
    Ok(leading_zero_bits(&target))
}

/// Build the target implied by exactly `zeroes` leading zero bits.
///
/// That is a single set bit right after the zeroes: `2^(255 - zeroes)`.
/// At 255 zeroes there are no bits left and the target is 0.
pub fn target_from_leading_zero_bits(zeroes: i64) -> Result<BigUint> {
    if !(0..=MAX_LEADING_ZEROS).contains(&zeroes) {
        log::debug!("rejecting leading zero count {}", zeroes);
        return Err(ConversionError::InvalidRange(zeroes));
    }

    let remaining = (TARGET_BITS as i64 - 1 - zeroes) as u32;
    if remaining == 0 {
        return Ok(BigUint::zero());
    }
    Ok(BigUint::one() << remaining)
}

/// Calculate difficulty from a leading zero count (reverse conversion).
///
/// Returns `f64::INFINITY` for 255 zeroes.
pub fn difficulty_from_leading_zero_bits(zeroes: i64) -> Result<f64> {
    let target = target_from_leading_zero_bits(zeroes)?;
    Ok(difficulty_from_target(&target))
}

/// Odds of a random hash having `zeroes` leading zero bits, as "1 in N".
pub fn hash_probability(zeroes: i64) -> f64 {
    2f64.powi(zeroes.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Short binary picture of a hash with `zeroes` leading zero bits.
///
/// At most 32 zeroes are spelled out, followed by `1...` when the first
/// set bit falls inside that window.
pub fn binary_pattern_preview(zeroes: i64) -> String {
    let shown = zeroes.clamp(0, PREVIEW_ZEROS as i64) as usize;
    let mut pattern = "0".repeat(shown);
    if zeroes < PREVIEW_ZEROS as i64 {
        pattern.push_str("1...");
    } else {
        pattern.push_str("...");
    }
    pattern
}

/// Share of the 256 hash bits that must be zero, in percent.
pub fn zeroes_ratio_percent(zeroes: i64) -> f64 {
    zeroes as f64 / TARGET_BITS as f64 * 100.0
}

//! Difficulty to target conversion and back.
//!
//! Difficulty = genesis_target / current_target
//! Where genesis_target is decoded from bits = 0x1d00ffff (difficulty 1).

use num_bigint::BigUint;
use num_traits::{FromPrimitive, Zero};

use crate::error::{ConversionError, Result};
use crate::target::{decode_compact_target, genesis_target, target_to_f64};

/// Compute the target a hash must fall below for a given difficulty.
///
/// Difficulties of 1 and above (and whole numbers) are truncated to an
/// integer and divide the genesis target. Fractional difficulties below 1
/// multiply the genesis target by `floor(1 / difficulty)`, so 0.4 maps to
/// the same target as 0.5.
pub fn target_from_difficulty(difficulty: f64) -> Result<BigUint> {
    if !(difficulty > 0.0) || !difficulty.is_finite() {
        log::debug!("rejecting difficulty {}", difficulty);
        return Err(ConversionError::InvalidDifficulty(difficulty));
    }

    if difficulty < 1.0 && difficulty.fract() != 0.0 {
        let factor = BigUint::from_f64((1.0 / difficulty).floor())
            .ok_or(ConversionError::InvalidDifficulty(difficulty))?;
        Ok(genesis_target() * factor)
    } else {
        let divisor = BigUint::from_f64(difficulty.trunc())
            .ok_or(ConversionError::InvalidDifficulty(difficulty))?;
        Ok(genesis_target() / divisor)
    }
}

/// Compute the difficulty implied by a target.
///
/// The quotient is taken with integer division and then narrowed to f64, so
/// targets above the genesis target report a difficulty of 0. A zero target
/// has no finite difficulty and returns `f64::INFINITY`.
pub fn difficulty_from_target(target: &BigUint) -> f64 {
    if target.is_zero() {
        return f64::INFINITY;
    }
    target_to_f64(&(genesis_target() / target))
}

/// Calculate difficulty from compact "bits".
pub fn difficulty_from_bits(bits: u32) -> Result<f64> {
    let target = decode_compact_target(bits)?;
    Ok(difficulty_from_target(&target))
}

/// Base-2 logarithm of a difficulty. Zero and NaN are treated as 1.
pub fn log2_difficulty(difficulty: f64) -> f64 {
    if difficulty == 0.0 || difficulty.is_nan() {
        return 0.0;
    }
    difficulty.log2()
}

const HASHES_PER_DIFFICULTY: f64 = 4_294_967_296.0;

/// Mean number of hash attempts before one meets the target for `difficulty`.
///
/// Difficulty 1 accepts one hash in 2^32.
pub fn expected_hashes(difficulty: f64) -> f64 {
    difficulty * HASHES_PER_DIFFICULTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::GENESIS_BITS;

    #[test]
    fn test_difficulty_one_is_genesis() {
        let target = target_from_difficulty(1.0).unwrap();
        assert_eq!(&target, genesis_target());
        assert_eq!(difficulty_from_target(&target), 1.0);
    }

    #[test]
    fn test_integer_difficulty_divides() {
        let target = target_from_difficulty(1000.0).unwrap();
        assert_eq!(target, genesis_target() / BigUint::from(1000u32));

        // Fractional part above 1 is truncated.
        assert_eq!(target_from_difficulty(1000.9).unwrap(), target);
    }

    #[test]
    fn test_sub_one_difficulty_uses_floor_of_reciprocal() {
        let half = target_from_difficulty(0.5).unwrap();
        assert_eq!(half, genesis_target() * BigUint::from(2u32));

        // floor(1 / 0.4) = 2
        assert_eq!(target_from_difficulty(0.4).unwrap(), half);

        // floor(1 / 0.3) = 3
        assert_eq!(
            target_from_difficulty(0.3).unwrap(),
            genesis_target() * BigUint::from(3u32)
        );
    }

    #[test]
    fn test_invalid_difficulty() {
        assert_eq!(
            target_from_difficulty(0.0),
            Err(ConversionError::InvalidDifficulty(0.0))
        );
        assert_eq!(
            target_from_difficulty(-5.0),
            Err(ConversionError::InvalidDifficulty(-5.0))
        );
        assert!(target_from_difficulty(f64::NAN).is_err());
        assert!(target_from_difficulty(f64::INFINITY).is_err());
    }

    #[test]
    fn test_difficulty_from_target() {
        assert_eq!(difficulty_from_target(&BigUint::zero()), f64::INFINITY);

        let target = genesis_target() / BigUint::from(88_400_000_000_000u64);
        let difficulty = difficulty_from_target(&target);
        assert!(difficulty >= 88_400_000_000_000.0);
        assert!((difficulty - 88_400_000_000_000.0) / 88_400_000_000_000.0 < 1e-9);

        // Easier than genesis rounds down to zero.
        let easy = genesis_target() * BigUint::from(2u32);
        assert_eq!(difficulty_from_target(&easy), 0.0);
    }

    #[test]
    fn test_difficulty_from_bits() {
        assert_eq!(difficulty_from_bits(GENESIS_BITS).unwrap(), 1.0);

        // Block 100,000 era bits
        let difficulty = difficulty_from_bits(0x1b0404cb).unwrap();
        assert!((difficulty - 16307.0).abs() < 1.0);

        assert!(difficulty_from_bits(0x1d80ffff).is_err());
    }

    #[test]
    fn test_log2_difficulty() {
        assert_eq!(log2_difficulty(0.0), 0.0);
        assert_eq!(log2_difficulty(1.0), 0.0);
        assert_eq!(log2_difficulty(1024.0), 10.0);
    }

    #[test]
    fn test_expected_hashes() {
        assert_eq!(expected_hashes(1.0), 4_294_967_296.0);
        assert_eq!(expected_hashes(0.5), 2_147_483_648.0);
    }
}

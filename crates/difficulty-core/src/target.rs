//! Compact "nBits" target codec and the genesis target constant.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{ConversionError, Result};

/// Compact encoding of the genesis block target (difficulty 1).
pub const GENESIS_BITS: u32 = 0x1d00ffff;

/// Width of a hash target in bits.
pub const TARGET_BITS: u32 = 256;

/// Sign bit of the compact mantissa.
const SIGN_BIT: u32 = 0x0080_0000;

/// Coefficient mask (the low 23 bits).
const COEFFICIENT_MASK: u32 = 0x007f_ffff;

/// The genesis target, decoded once from [`GENESIS_BITS`].
///
/// Every difficulty value is relative to this target.
pub static GENESIS_TARGET: LazyLock<BigUint> = LazyLock::new(|| {
    let target = expand_compact(GENESIS_BITS);
    log::debug!("genesis target initialised from nBits {:#010x}", GENESIS_BITS);
    target
});

/// Borrow the genesis target.
#[inline]
pub fn genesis_target() -> &'static BigUint {
    &GENESIS_TARGET
}

/// Decode the compact "bits" representation into a full target.
///
/// The bits format is: [exponent (1 byte)][sign (1 bit)][coefficient (23 bits)]
/// Target = coefficient * 2^(8 * (exponent - 3))
///
/// Exponents below 3 shift the coefficient right instead, dropping the
/// low-order bytes.
pub fn decode_compact_target(bits: u32) -> Result<BigUint> {
    if bits & SIGN_BIT != 0 {
        log::debug!("rejecting negative compact target {:#010x}", bits);
        return Err(ConversionError::InvalidTarget(bits));
    }
    Ok(expand_compact(bits))
}

fn expand_compact(bits: u32) -> BigUint {
    let exponent = (bits >> 24) & 0xff;
    let coefficient = BigUint::from(bits & COEFFICIENT_MASK);

    if exponent >= 3 {
        coefficient << (8 * (exponent - 3))
    } else {
        coefficient >> (8 * (3 - exponent))
    }
}

/// Encode a target back into compact "bits" form.
///
/// The mantissa is normalised so the sign bit is never set. Returns `None`
/// when the target is too wide for a one-byte exponent.
pub fn encode_compact_target(target: &BigUint) -> Option<u32> {
    if target.is_zero() {
        return Some(0);
    }

    let bytes = target.to_bytes_be();
    let mut exponent = bytes.len() as u32;

    // Take up to three most significant bytes, left aligned.
    let mut mantissa: u32 = 0;
    for i in 0..3 {
        mantissa <<= 8;
        if let Some(byte) = bytes.get(i) {
            mantissa |= *byte as u32;
        }
    }

    if mantissa & SIGN_BIT != 0 {
        mantissa >>= 8;
        exponent += 1;
    }

    if exponent > 0xff {
        return None;
    }

    Some((exponent << 24) | (mantissa & COEFFICIENT_MASK))
}

/// Count leading zero bits in the 256-bit rendering of a target.
///
/// A zero target has all 256 bits clear. Targets wider than 256 bits have
/// no leading zeroes.
pub fn leading_zero_bits(target: &BigUint) -> u32 {
    let width = target.bits().min(TARGET_BITS as u64) as u32;
    TARGET_BITS - width
}

/// Narrow a target to an approximate f64.
pub(crate) fn target_to_f64(target: &BigUint) -> f64 {
    target.to_f64().unwrap_or(f64::INFINITY)
}

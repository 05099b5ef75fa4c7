//! Display units and human readable formatting.
//!
//! Formatting never fails: non-finite values print as `NaN`, `Infinity`
//! and `-Infinity`, and unparsable text reads as zero.

use num_bigint::BigUint;

use crate::target::TARGET_BITS;

/// Difficulty display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifficultyUnit {
    /// Plain difficulty (x1)
    #[default]
    Units,
    /// x1e3
    Kilo,
    /// x1e6
    Mega,
    /// x1e9
    Giga,
    /// x1e12
    Tera,
    /// x1e15
    Peta,
    /// x1e18
    Exa,
}

impl DifficultyUnit {
    /// Every unit, smallest first.
    pub const ALL: [DifficultyUnit; 7] = [
        DifficultyUnit::Units,
        DifficultyUnit::Kilo,
        DifficultyUnit::Mega,
        DifficultyUnit::Giga,
        DifficultyUnit::Tera,
        DifficultyUnit::Peta,
        DifficultyUnit::Exa,
    ];

    /// Scale factor applied when displaying a difficulty in this unit.
    pub fn multiplier(&self) -> f64 {
        match self {
            DifficultyUnit::Units => 1.0,
            DifficultyUnit::Kilo => 1e3,
            DifficultyUnit::Mega => 1e6,
            DifficultyUnit::Giga => 1e9,
            DifficultyUnit::Tera => 1e12,
            DifficultyUnit::Peta => 1e15,
            DifficultyUnit::Exa => 1e18,
        }
    }

    /// Unit symbol. Plain units have an empty symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            DifficultyUnit::Units => "",
            DifficultyUnit::Kilo => "K",
            DifficultyUnit::Mega => "M",
            DifficultyUnit::Giga => "G",
            DifficultyUnit::Tera => "T",
            DifficultyUnit::Peta => "P",
            DifficultyUnit::Exa => "E",
        }
    }

    /// Full unit name.
    pub fn name(&self) -> &'static str {
        match self {
            DifficultyUnit::Units => "Units",
            DifficultyUnit::Kilo => "Kilo",
            DifficultyUnit::Mega => "Mega",
            DifficultyUnit::Giga => "Giga",
            DifficultyUnit::Tera => "Tera",
            DifficultyUnit::Peta => "Peta",
            DifficultyUnit::Exa => "Exa",
        }
    }

    /// Label for a unit picker.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyUnit::Units => "Units",
            other => other.symbol(),
        }
    }

    /// Parse a unit from its symbol or name.
    ///
    /// Accepts `""`, `"units"`, `"K"`, `"kilo"` and so on. Symbols are case
    /// sensitive since `m` and `M` differ elsewhere; names are not.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(unit) = Self::ALL.iter().find(|unit| unit.symbol() == s) {
            return Some(*unit);
        }
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|unit| unit.name().to_lowercase() == lower)
            .copied()
    }
}

impl core::fmt::Display for DifficultyUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Named magnitudes for large numbers, largest first.
const LARGE_NUMBER_NAMES: [(f64, &str); 12] = [
    (1e39, "duodecillion"),
    (1e36, "undecillion"),
    (1e33, "decillion"),
    (1e30, "nonillion"),
    (1e27, "octillion"),
    (1e24, "septillion"),
    (1e21, "sextillion"),
    (1e18, "quintillion"),
    (1e15, "quadrillion"),
    (1e12, "trillion"),
    (1e9, "billion"),
    (1e6, "million"),
];

/// Fractional digits kept by [`format_difficulty`].
const DIFFICULTY_DECIMALS: usize = 6;

/// Fractional digits kept by [`format_grouped`].
const GROUPED_DECIMALS: usize = 3;

/// Format a difficulty in the given unit.
///
/// Up to six fractional digits, trailing zeroes and a dangling decimal
/// point removed: 88.4e12 in `T` is `"88.4"`.
pub fn format_difficulty(value: f64, unit: DifficultyUnit) -> String {
    let mut display = value / unit.multiplier();
    if !display.is_finite() {
        return non_finite(display, "Infinity");
    }
    if display == 0.0 {
        // Drop the sign of negative zero.
        display = 0.0;
    }
    strip_fraction_zeros(&to_fixed(display, DIFFICULTY_DECIMALS)).to_string()
}

/// Parse difficulty text typed in the given unit.
///
/// Reads the longest numeric prefix, so `"12abc"` is 12. Text without a
/// numeric prefix is 0.
pub fn parse_difficulty(text: &str, unit: DifficultyUnit) -> f64 {
    match parse_float_prefix(text) {
        Some(value) => value * unit.multiplier(),
        None => 0.0,
    }
}

/// Parse a leading zero count the way a lenient integer field reads it.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit. Returns `None` when no digits were found.
pub fn parse_leading_zeros(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    text[..end].parse::<i64>().ok()
}

/// Format a number with thousands separators and up to three decimals.
///
/// Negative values that round to zero keep their sign (`"-0"`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value, "∞");
    }

    let fixed = to_fixed(value.abs(), GROUPED_DECIMALS);
    let fixed = strip_fraction_zeros(&fixed);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed, None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format a number with a magnitude word.
///
/// Below one million the grouped form is returned. Above, the largest
/// named magnitude not exceeding the value is used, with one decimal under
/// 10 and none otherwise: 1.5e6 is `"1.5 million"`. Nothing is named past
/// duodecillion, so larger values keep counting in duodecillions.
pub fn format_large_number(value: f64) -> String {
    if !value.is_finite() || value < 1e6 {
        return format_grouped(value);
    }

    let (threshold, name) = LARGE_NUMBER_NAMES
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .copied()
        .unwrap_or(LARGE_NUMBER_NAMES[LARGE_NUMBER_NAMES.len() - 1]);

    let scaled = value / threshold;
    if scaled < 10.0 {
        format!("{} {}", to_fixed(scaled, 1), name)
    } else {
        format!("{:.0} {}", scaled.round(), name)
    }
}

/// Render a target as `0x` followed by 64 hex digits.
pub fn format_target_hex(target: &BigUint) -> String {
    let bytes = target.to_bytes_be();
    let width = (TARGET_BITS / 8) as usize;
    let mut padded = vec![0u8; width.saturating_sub(bytes.len())];
    padded.extend_from_slice(&bytes);
    format!("0x{}", hex::encode(padded))
}

/// Render a target as 256 binary digits, most significant first.
pub fn format_target_binary(target: &BigUint) -> String {
    format!("{:0width$b}", target, width = TARGET_BITS as usize)
}

/// Fractional digits needed to print any f64 exactly.
const EXACT_DECIMALS: usize = 1074;

/// Fixed-point rendering with exact halves rounded away from zero.
///
/// `{:.N}` rounds ties to even, so 1.25 at one decimal would print `1.2`.
/// Ties only exist for values whose binary expansion ends exactly on a 5
/// at digit N + 1; those are detected on the exact expansion and bumped.
fn to_fixed(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_DECIMALS, value.abs());
    let (integer, fraction) = match exact.split_once('.') {
        Some(parts) if parts.1.len() > decimals => parts,
        _ => return format!("{:.*}", decimals, value),
    };
    let rest = &fraction[decimals..];
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", decimals, value);
    }

    let mut digits: Vec<u8> = integer.bytes().chain(fraction[..decimals].bytes()).collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(core::str::from_utf8(&digits[..split]).unwrap_or("0"));
    if decimals > 0 {
        out.push('.');
        out.push_str(core::str::from_utf8(&digits[split..]).unwrap_or(""));
    }
    out
}

fn non_finite(value: f64, infinity: &str) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_negative() {
        format!("-{}", infinity)
    } else {
        infinity.to_string()
    }
}

/// Drop trailing fractional zeroes, and the point if nothing is left after it.
fn strip_fraction_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

/// Parse the longest decimal literal at the start of `text`.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let infinity = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -infinity } else { infinity });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = frac_end - end - 1;
        if frac_digits > 0 {
            end = frac_end;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::genesis_target;
    use num_traits::Zero;

    #[test]
    fn test_unit_table() {
        assert_eq!(DifficultyUnit::Units.multiplier(), 1.0);
        assert_eq!(DifficultyUnit::Tera.multiplier(), 1e12);
        assert_eq!(DifficultyUnit::Exa.multiplier(), 1e18);
        assert_eq!(DifficultyUnit::Units.label(), "Units");
        assert_eq!(DifficultyUnit::Giga.label(), "G");
        assert_eq!(DifficultyUnit::Peta.name(), "Peta");
        assert_eq!(DifficultyUnit::default(), DifficultyUnit::Units);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!(DifficultyUnit::from_str(""), Some(DifficultyUnit::Units));
        assert_eq!(DifficultyUnit::from_str("units"), Some(DifficultyUnit::Units));
        assert_eq!(DifficultyUnit::from_str("T"), Some(DifficultyUnit::Tera));
        assert_eq!(DifficultyUnit::from_str("mega"), Some(DifficultyUnit::Mega));
        assert_eq!(DifficultyUnit::from_str("x"), None);
        for unit in DifficultyUnit::ALL {
            assert_eq!(DifficultyUnit::from_str(unit.symbol()), Some(unit));
        }
    }

    #[test]
    fn test_format_difficulty() {
        assert_eq!(format_difficulty(88.4e12, DifficultyUnit::Tera), "88.4");
        assert_eq!(format_difficulty(1e12, DifficultyUnit::Units), "1000000000000");
        assert_eq!(format_difficulty(1.0, DifficultyUnit::Units), "1");
        assert_eq!(format_difficulty(1500.0, DifficultyUnit::Kilo), "1.5");
        assert_eq!(format_difficulty(1.0, DifficultyUnit::Mega), "0.000001");
        assert_eq!(format_difficulty(1.0, DifficultyUnit::Giga), "0");
        assert_eq!(format_difficulty(100.0, DifficultyUnit::Units), "100");
        assert_eq!(format_difficulty(-0.0, DifficultyUnit::Units), "0");
    }

    #[test]
    fn test_format_difficulty_rounds_halves_up() {
        // 7.8125 / 1000 is exactly 2^-7 = 0.0078125
        assert_eq!(format_difficulty(7.8125, DifficultyUnit::Kilo), "0.007813");
        assert_eq!(format_difficulty(0.0078124, DifficultyUnit::Units), "0.007812");
        assert_eq!(format_difficulty(1.6e-6, DifficultyUnit::Units), "0.000002");
    }

    #[test]
    fn test_format_difficulty_non_finite() {
        assert_eq!(format_difficulty(f64::NAN, DifficultyUnit::Tera), "NaN");
        assert_eq!(format_difficulty(f64::INFINITY, DifficultyUnit::Tera), "Infinity");
        assert_eq!(format_difficulty(f64::NEG_INFINITY, DifficultyUnit::Units), "-Infinity");
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("88.4", DifficultyUnit::Tera), 88.4 * 1e12);
        assert_eq!(parse_difficulty("  12abc", DifficultyUnit::Units), 12.0);
        assert_eq!(parse_difficulty("1e3", DifficultyUnit::Kilo), 1e6);
        assert_eq!(parse_difficulty(".5", DifficultyUnit::Units), 0.5);
        assert_eq!(parse_difficulty("7.", DifficultyUnit::Units), 7.0);
        assert_eq!(parse_difficulty("2e", DifficultyUnit::Units), 2.0);
        assert_eq!(parse_difficulty("-3", DifficultyUnit::Units), -3.0);
        assert_eq!(parse_difficulty("Infinity", DifficultyUnit::Units), f64::INFINITY);
        assert_eq!(parse_difficulty("", DifficultyUnit::Tera), 0.0);
        assert_eq!(parse_difficulty("abc", DifficultyUnit::Tera), 0.0);
        assert_eq!(parse_difficulty(".", DifficultyUnit::Tera), 0.0);
        assert_eq!(parse_difficulty("-", DifficultyUnit::Tera), 0.0);
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_leading_zeros("70"), Some(70));
        assert_eq!(parse_leading_zeros(" 12.9"), Some(12));
        assert_eq!(parse_leading_zeros("-1"), Some(-1));
        assert_eq!(parse_leading_zeros("abc"), None);
        assert_eq!(parse_leading_zeros(""), None);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(12_345.678_9), "12,345.679");
        assert_eq!(
            format_grouped(1_180_591_620_717_411_303_424.0),
            "1,180,591,620,717,411,303,424"
        );
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
        assert_eq!(format_grouped(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_grouped_rounding() {
        assert_eq!(format_grouped(0.0625), "0.063");
        assert_eq!(format_grouped(-0.0625), "-0.063");
        assert_eq!(format_grouped(1_234.0625), "1,234.063");
        assert_eq!(format_grouped(0.0624), "0.062");
        assert_eq!(format_grouped(-0.0004), "-0");
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(999.0), "999");
        assert_eq!(format_large_number(1_500_000.0), "1.5 million");
        assert_eq!(format_large_number(1e6), "1.0 million");
        assert_eq!(format_large_number(25e9), "25 billion");
        assert_eq!(format_large_number(2f64.powi(70)), "1.2 sextillion");
        assert_eq!(format_large_number(4.2e39), "4.2 duodecillion");
        // No names past duodecillion
        assert_eq!(format_large_number(1e42), "1000 duodecillion");
    }

    #[test]
    fn test_format_large_number_rounding() {
        assert_eq!(format_large_number(1_250_000.0), "1.3 million");
        assert_eq!(format_large_number(1_249_999.0), "1.2 million");
        // Still under 10 before rounding, so one decimal is kept
        assert_eq!(format_large_number(9.96e6), "10.0 million");
        assert_eq!(format_large_number(10.5e9), "11 billion");
    }

    #[test]
    fn test_format_target_hex() {
        assert_eq!(format_target_hex(&BigUint::zero()), format!("0x{}", "0".repeat(64)));
        assert_eq!(
            format_target_hex(genesis_target()),
            "0x00000000ffff0000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_format_target_binary() {
        let zero = format_target_binary(&BigUint::zero());
        assert_eq!(zero.len(), 256);
        assert!(zero.chars().all(|c| c == '0'));

        let genesis = format_target_binary(genesis_target());
        assert_eq!(genesis.len(), 256);
        assert!(genesis.starts_with(&format!("{}{}", "0".repeat(32), "1".repeat(16))));
    }
}

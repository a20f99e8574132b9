use compact_str::{format_compact, CompactString};

use crate::tokenizer::Value;

pub const DEFAULT_PRECISION: usize = 12;

const SCIENTIFIC_ABOVE: Value = 1e12;
const SCIENTIFIC_BELOW: Value = 1e-6;

// Enough fractional digits to print any f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;
const EXACT_MANTISSA_DIGITS: usize = 800;
const MANTISSA_DIGITS: usize = 6;

/// Renders a value compactly: fixed-point with `precision` fractional digits,
/// or scientific notation with six fractional mantissa digits for very large
/// and very small magnitudes. Ties round away from zero. Trailing zeros and a
/// bare decimal point are dropped from the mantissa; the exponent is left alone.
pub fn format_number(value: Value, precision: usize) -> CompactString {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }

    let magnitude = value.abs();
    let body = if magnitude > SCIENTIFIC_ABOVE || (magnitude < SCIENTIFIC_BELOW && value != 0.0) {
        let exact = format_compact!("{:.*e}", EXACT_MANTISSA_DIGITS, magnitude);
        let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
        let mut exponent: i32 = exponent.parse().unwrap_or(0);
        let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let mut rounded = round_half_up(int, frac, MANTISSA_DIGITS);
        // 9.9999995 carried into 10.000000
        if rounded.starts_with("10") {
            rounded = round_half_up("1", "", MANTISSA_DIGITS);
            exponent += 1;
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        format_compact!("{}e{}{}", trim_fraction(&rounded), sign, exponent.unsigned_abs())
    } else {
        let exact = format_compact!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
        let (int, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        trim_fraction(&round_half_up(int, frac, precision)).into()
    };

    // Anything that rounds to zero renders unsigned
    if value < 0.0 && body != "0" {
        format_compact!("-{body}")
    } else {
        body
    }
}

/// Rounds the exact unsigned decimal `int.frac` to `places` fractional
/// digits, rounding ties up.
fn round_half_up(int: &str, frac: &str, places: usize) -> CompactString {
    let mut digits: Vec<u8> = int
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    if frac.as_bytes().get(places).is_some_and(|&b| b >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let mut out = CompactString::default();
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

fn trim_fraction(digits: &str) -> &str {
    if !digits.contains('.') {
        return digits;
    }
    digits.trim_end_matches('0').trim_end_matches('.')
}

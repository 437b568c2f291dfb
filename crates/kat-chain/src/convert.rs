//! Numeric, boolean, and char parsing/formatting over raw byte ranges.
//!
//! Every projection here operates directly on `&[u8]` and never allocates
//! beyond what the caller's destination requires. Parsing never panics and
//! never returns an error: on any malformed input it returns the
//! caller-supplied default, so a solver can express "try this projection,
//! else fall back" without paying for a `Result`.
//! [`Chain`](crate::chain::Chain) is the only caller most users need — these
//! functions are exposed directly for callers that already have a borrowed
//! byte slice and don't want to build a chain around it.
use alloc::{string::String, vec::Vec};

use num_bigint::BigInt;

/// The narrowest numeric representation a decimal byte sequence fits: an
/// integer whose absolute value is at most `i32::MAX` and has no decimal
/// point or exponent is an `Int`; otherwise, absent a decimal point or
/// exponent, it is a `Long`; any decimal point or exponent forces a
/// `Double`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Fits in `i32` by the magnitude rule above.
    Int(i32),
    /// An integral value that does not fit the `Int` magnitude rule.
    Long(i64),
    /// Any value with a decimal point or exponent.
    Double(f64),
}

/// Decode a single ASCII/Latin-1 digit or letter as a value in `[0, radix)`,
/// or `None` if it does not belong to `radix`.
fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => u32::from(byte - b'0'),
        b'a'..=b'z' => u32::from(byte - b'a') + 10,
        b'A'..=b'Z' => u32::from(byte - b'A') + 10,
        _ => return None,
    };
    (value < radix).then_some(value)
}

/// Parse a signed 64-bit integer from `bytes` in the given `radix`
/// (`2..=36`), returning `None` on an empty buffer, an invalid byte, an
/// invalid radix, or overflow.
fn try_parse_i64(bytes: &[u8], radix: u32) -> Option<i64> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        Some(_) => (false, bytes),
        None => return None,
    };
    if digits.is_empty() {
        return None;
    }

    let radix_i64 = i64::from(radix);
    let mut value: i64 = 0;
    for &b in digits {
        let digit = i64::from(digit_value(b, radix)?);
        value = value.checked_mul(radix_i64)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}

/// Parse a signed 32-bit integer from `bytes` in the given `radix`
/// (`2..=36`), returning `default` on any parse failure or on a value that
/// overflows `i32`.
#[must_use]
pub fn parse_i32(bytes: &[u8], radix: u32, default: i32) -> i32 {
    try_parse_i64(bytes, radix)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(default)
}

/// Parse a signed 64-bit integer from `bytes` in the given `radix`
/// (`2..=36`), returning `default` on any parse failure.
#[must_use]
pub fn parse_i64(bytes: &[u8], radix: u32, default: i64) -> i64 {
    try_parse_i64(bytes, radix).unwrap_or(default)
}

/// Parse an IEEE-754 `f32` from `bytes` (standard decimal real syntax,
/// including exponents), returning `default` on any parse failure
/// (including non-UTF-8 input).
#[must_use]
pub fn parse_f32(bytes: &[u8], default: f32) -> f32 {
    core::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(default)
}

/// Parse an IEEE-754 `f64` from `bytes` (standard decimal real syntax,
/// including exponents), returning `default` on any parse failure
/// (including non-UTF-8 input).
#[must_use]
pub fn parse_f64(bytes: &[u8], default: f64) -> f64 {
    core::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(default)
}

/// Parse a boolean from `bytes`: `true`/`false` case-insensitively, or the
/// single digits `0`/`1`. Anything else returns `default`.
#[must_use]
pub fn parse_bool(bytes: &[u8], default: bool) -> bool {
    if bytes.eq_ignore_ascii_case(b"true") {
        true
    } else if bytes.eq_ignore_ascii_case(b"false") {
        false
    } else if bytes == b"1" {
        true
    } else if bytes == b"0" {
        false
    } else {
        default
    }
}

/// Whether `bytes` contains a decimal point or an exponent marker (`e`/`E`),
/// i.e. whether it can only be represented as a [`Number::Double`].
fn looks_like_double(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .any(|&b| b == b'.' || b == b'e' || b == b'E')
}

/// Parse `bytes` into the narrowest fitting [`Number`], or `default` if it
/// does not parse as a number at all.
///
/// The `Int`-vs-`Long` boundary checks the magnitude against `i32::MAX`,
/// not the signed `i32` range, so `i32::MIN`'s magnitude (`2147483648`) is
/// one past `i32::MAX` and is therefore categorized as a `Long` even
/// though it fits in an `i32`.
#[must_use]
pub fn parse_number(bytes: &[u8], default: Number) -> Number {
    if looks_like_double(bytes) {
        return core::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .map_or(default, Number::Double);
    }
    match try_parse_i64(bytes, 10) {
        Some(v) if v.unsigned_abs() <= u64::from(i32::MAX as u32) => {
            Number::Int(i32::try_from(v).expect("checked against i32::MAX above"))
        }
        Some(v) => Number::Long(v),
        None => default,
    }
}

/// Decode `bytes` as a single UTF-8 scalar value spanning the *entire*
/// buffer, returning `default` if the buffer is empty, malformed, or
/// contains more than one code point.
#[must_use]
pub fn parse_char(bytes: &[u8], default: char) -> char {
    core::str::from_utf8(bytes)
        .ok()
        .and_then(|s| {
            let mut chars = s.chars();
            let first = chars.next()?;
            chars.next().is_none().then_some(first)
        })
        .unwrap_or(default)
}

/// Parse an arbitrary-precision integer from `bytes`.
///
/// Attempts a fast `i64` parse first; on failure (including overflow) falls
/// back to treating `bytes` as a Latin-1 decimal string and parsing it with
/// [`BigInt::parse_bytes`]. Returns `default` if neither succeeds.
#[must_use]
pub fn parse_bigint(bytes: &[u8], default: BigInt) -> BigInt {
    if let Some(v) = try_parse_i64(bytes, 10) {
        return BigInt::from(v);
    }
    BigInt::parse_bytes(bytes, 10).unwrap_or(default)
}

/// An arbitrary-precision decimal: `unscaled * 10^-scale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigDecimalValue {
    /// The unscaled integer value.
    pub unscaled: BigInt,
    /// The number of digits to the right of the decimal point.
    pub scale: i64,
}

/// Parse an arbitrary-precision decimal from `bytes`: optional sign, digits,
/// an optional `.` followed by digits, and an optional exponent
/// (`[eE][+-]?digits`). Returns `default` on any malformed input.
#[must_use]
pub fn parse_bigdecimal(bytes: &[u8], default: BigDecimalValue) -> BigDecimalValue {
    parse_bigdecimal_inner(bytes).unwrap_or(default)
}

fn parse_bigdecimal_inner(bytes: &[u8]) -> Option<BigDecimalValue> {
    let text = core::str::from_utf8(bytes).ok()?;
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(idx) => (&text[..idx], text[idx + 1..].parse::<i64>().ok()?),
        None => (text, 0),
    };

    let (sign, mantissa) = if let Some(rest) = mantissa.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = mantissa.strip_prefix('+') {
        ("", rest)
    } else {
        ("", mantissa)
    };
    let (int_part, frac_part) = match mantissa.find('.') {
        Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let mut digits = String::with_capacity(sign.len() + int_part.len() + frac_part.len());
    digits.push_str(sign);
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let unscaled = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    let scale = i64::try_from(frac_part.len()).ok()? - exponent;
    Some(BigDecimalValue { unscaled, scale })
}

/// Append the ASCII decimal representation of `value` to `dst`, handling
/// the sign explicitly.
///
/// Negative values are emitted digit-by-digit from `value % 10` (which is
/// in `-9..=0` for a negative `value`): `b'0' as i64 - (remaining % 10)`
/// gives the correct ASCII digit for the negated remainder without
/// computing `abs(value)` — the one case this avoids is `value ==
/// i64::MIN`, where `abs` would overflow `i64`. The freshly appended
/// digits are then reversed into place.
pub fn write_signed_decimal(dst: &mut Vec<u8>, value: i64) {
    if value == 0 {
        dst.push(b'0');
        return;
    }

    let negative = value < 0;
    if negative {
        dst.push(b'-');
    }
    let start = dst.len();
    let mut remaining = value;
    while remaining != 0 {
        let digit_byte = if negative {
            (i64::from(b'0') - (remaining % 10)) as u8
        } else {
            b'0' + (remaining % 10) as u8
        };
        dst.push(digit_byte);
        remaining /= 10;
    }
    dst[start..].reverse();
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use super::*;

    #[test]
    fn parse_signed_ints() {
        assert_eq!(parse_i32(b"-12345", 10, 0), -12345);
        assert_eq!(parse_i32(b"-12345", 37, 0), 0);
        assert_eq!(parse_i64(b"+42", 10, -1), 42);
        assert_eq!(parse_i32(b"", 10, 7), 7);
        assert_eq!(parse_i32(b"zz", 36, -1), 35 * 36 + 35);
    }

    #[test]
    fn parse_int_overflow_falls_back() {
        assert_eq!(parse_i32(b"99999999999", 10, -1), -1);
        assert_eq!(parse_i64(i64::MIN.to_string().as_bytes(), 10, 0), i64::MIN);
    }

    #[test]
    fn parse_float_and_double() {
        assert!((parse_f64(b"1.5e2", 0.0) - 150.0).abs() < f64::EPSILON);
        assert_eq!(parse_f32(b"not a number", 9.0), 9.0);
    }

    #[test]
    fn parse_boolean_values() {
        assert!(parse_bool(b"TRUE", false));
        assert!(parse_bool(b"1", false));
        assert!(!parse_bool(b"false", true));
        assert!(!parse_bool(b"0", true));
        assert!(parse_bool(b"nah", true));
    }

    #[test]
    fn parse_number_picks_narrowest() {
        assert_eq!(parse_number(b"42", Number::Int(0)), Number::Int(42));
        assert_eq!(
            parse_number(b"2147483648", Number::Int(0)),
            Number::Long(2_147_483_648)
        );
        assert_eq!(
            parse_number(b"-2147483648", Number::Int(0)),
            Number::Long(-2_147_483_648)
        );
        assert_eq!(
            parse_number(b"1.5e2", Number::Int(0)),
            Number::Double(150.0)
        );
    }

    #[test]
    fn parse_char_requires_single_scalar() {
        assert_eq!(parse_char("中".as_bytes(), '?'), '\u{4E2D}');
        assert_eq!(parse_char(b"ab", '?'), '?');
        assert_eq!(parse_char(b"", '?'), '?');
    }

    #[test]
    fn parse_bigint_falls_back_from_i64() {
        let huge = "123456789012345678901234567890";
        let value = parse_bigint(huge.as_bytes(), BigInt::from(0));
        assert_eq!(value.to_string(), huge);
    }

    #[test]
    fn parse_bigdecimal_basic() {
        let value = parse_bigdecimal(b"-12.340", BigDecimalValue {
            unscaled: BigInt::from(0),
            scale: 0,
        });
        assert_eq!(value.unscaled, BigInt::from(-12340));
        assert_eq!(value.scale, 3);
    }

    #[test]
    fn write_signed_decimal_matches_itoa() {
        for n in [0_i64, 1, -1, 12345, -12345, i64::MAX, i64::MIN] {
            let mut dst = Vec::new();
            write_signed_decimal(&mut dst, n);
            assert_eq!(dst, n.to_string().into_bytes());
        }
    }

    #[test]
    fn write_signed_decimal_examples() {
        let mut dst = vec![b'x'];
        write_signed_decimal(&mut dst, -7);
        assert_eq!(dst, b"x-7");
    }
}

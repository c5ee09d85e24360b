// ============================================================================
// Numeric Coercion
// Normalizes heterogeneous inputs into canonical decimal strings
// ============================================================================
//
// Every constructor and every operand position funnels through this module,
// so the integer, decimal and hex grammars live in exactly one place.

use super::big_integer::BigInteger;
use super::big_number::BigNumber;
use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;

/// Any value accepted where a big numeric operand is expected.
///
/// Conversions exist for string slices, native integers, `f64`,
/// [`BigInt`], [`BigInteger`] and [`BigNumber`], so call sites can pass
/// `"1.5"`, `42`, `0.25` or `&other` directly.
#[derive(Debug, Clone, Copy)]
pub enum NumericInput<'a> {
    /// Numeric string, validated against the target grammar
    Str(&'a str),
    /// Native signed integer
    Int(i128),
    /// Native float, expanded to plain decimal notation
    Float(f64),
    /// Raw backing integer
    BigInt(&'a BigInt),
    /// Existing big integer
    BigInteger(&'a BigInteger),
    /// Existing big number
    BigNumber(&'a BigNumber),
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Str(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Str(value.as_str())
    }
}

macro_rules! impl_from_native_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput<'_> {
                fn from(value: $t) -> Self {
                    NumericInput::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_native_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl<'a> From<&'a BigInt> for NumericInput<'a> {
    fn from(value: &'a BigInt) -> Self {
        NumericInput::BigInt(value)
    }
}

impl<'a> From<&'a BigInteger> for NumericInput<'a> {
    fn from(value: &'a BigInteger) -> Self {
        NumericInput::BigInteger(value)
    }
}

impl<'a> From<&'a BigNumber> for NumericInput<'a> {
    fn from(value: &'a BigNumber) -> Self {
        NumericInput::BigNumber(value)
    }
}

// ============================================================================
// Grammars
// ============================================================================

/// `^(0|-?[1-9][0-9]*)$`
pub fn is_integer_string(s: &str) -> bool {
    if s == "0" {
        return true;
    }

    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.as_bytes() {
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        },
        [] => false,
    }
}

/// `^-?(0|[1-9]+[0-9]*)(\.[0-9]+)?$`
pub fn is_decimal_string(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let int_ok = match int_part.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        },
        [] => false,
    };

    let frac_ok = match frac_part {
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };

    int_ok && frac_ok
}

/// Drop a leading `0x` or `0X`.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// `^(0x)?[0-9a-f]+$` (case-insensitive, prefix included).
pub fn is_base16(s: &str, allow_prefix: bool) -> bool {
    let digits = if allow_prefix { strip_hex_prefix(s) } else { s };

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

// ============================================================================
// Float Expansion
// ============================================================================

/// Render a float as a plain fixed-point decimal string.
///
/// Uses the shortest digit sequence that round-trips the float and never
/// falls back to exponent notation, so `1.0E-7` becomes `"0.0000001"` and
/// `1e21` becomes `"1000000000000000000000"`.
///
/// # Errors
/// Returns `InvalidArgument` for NaN and infinities.
pub fn float_to_decimal(value: f64) -> NumericResult<String> {
    if !value.is_finite() {
        return Err(NumericError::InvalidArgument("float is not finite"));
    }

    if value == 0.0 {
        return Ok("0".to_string());
    }

    let expanded = value.to_string();
    tracing::trace!(input = value, expanded = %expanded, "expanded float to plain decimal");
    Ok(expanded)
}

// ============================================================================
// Coercion
// ============================================================================

/// Canonical base-10 string for a big-integer operand.
///
/// # Errors
/// - `InvalidFormat` if a string does not match the integer grammar
/// - `InvalidArgument` for floats and decimals, which are never narrowed
pub fn big_integer_value(input: NumericInput<'_>) -> NumericResult<String> {
    match input {
        NumericInput::Str(s) if is_integer_string(s) => Ok(s.to_string()),
        NumericInput::Str(s) => {
            tracing::debug!(input = s, "rejected malformed big-integer string");
            Err(NumericError::InvalidFormat)
        },
        NumericInput::Int(i) => Ok(i.to_string()),
        NumericInput::BigInt(b) => Ok(b.to_string()),
        NumericInput::BigInteger(b) => Ok(b.value()),
        NumericInput::Float(_) | NumericInput::BigNumber(_) => {
            Err(NumericError::InvalidArgument("not a valid big-integer value"))
        },
    }
}

/// Canonical plain-decimal string for a big-number operand.
///
/// # Errors
/// Returns `InvalidArgument` if a string does not match the decimal grammar
/// or a float is not finite.
pub fn big_number_value(input: NumericInput<'_>) -> NumericResult<String> {
    match input {
        NumericInput::Str(s) if is_decimal_string(s) => Ok(s.to_string()),
        NumericInput::Str(s) => {
            tracing::debug!(input = s, "rejected malformed big-number string");
            Err(NumericError::InvalidArgument("not a valid number"))
        },
        NumericInput::Int(i) => Ok(i.to_string()),
        NumericInput::Float(f) => float_to_decimal(f),
        NumericInput::BigInt(b) => Ok(b.to_string()),
        NumericInput::BigInteger(b) => Ok(b.value()),
        NumericInput::BigNumber(n) => Ok(n.value()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_grammar() {
        for valid in ["0", "7", "-7", "10", "123456789012345678901234567890"] {
            assert!(is_integer_string(valid), "{valid} should be valid");
        }
        for invalid in ["", "-", "-0", "007", "1.5", "+1", "1e5", " 1", "0x10"] {
            assert!(!is_integer_string(invalid), "{invalid} should be invalid");
        }
    }

    #[test]
    fn test_decimal_grammar() {
        for valid in ["0", "-0", "0.5", "-0.05", "10", "1.230", "99.0001"] {
            assert!(is_decimal_string(valid), "{valid} should be valid");
        }
        for invalid in ["", "-", ".5", "1.", "01", "00.1", "1e10abc", "1e10", "1.2.3", "+3"] {
            assert!(!is_decimal_string(invalid), "{invalid} should be invalid");
        }
    }

    #[test]
    fn test_base16_grammar() {
        assert!(is_base16("ff", false));
        assert!(is_base16("DeadBeef", false));
        assert!(is_base16("0xff", true));
        assert!(is_base16("0XFF", true));
        assert!(!is_base16("0xff", false));
        assert!(!is_base16("0Xff", false));
        assert!(!is_base16("0X", true));
        assert!(!is_base16("0x", true));
        assert!(!is_base16("", true));
        assert!(!is_base16("fg", true));
    }

    #[test]
    fn test_float_to_decimal() {
        assert_eq!(float_to_decimal(1.0E-7).unwrap(), "0.0000001");
        assert_eq!(float_to_decimal(1.5).unwrap(), "1.5");
        assert_eq!(float_to_decimal(-2.0).unwrap(), "-2");
        assert_eq!(float_to_decimal(-0.0).unwrap(), "0");
        assert_eq!(float_to_decimal(1e21).unwrap(), "1000000000000000000000");
        assert!(float_to_decimal(f64::NAN).is_err());
        assert!(float_to_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_big_integer_value() {
        assert_eq!(big_integer_value("-15".into()).unwrap(), "-15");
        assert_eq!(big_integer_value(42i64.into()).unwrap(), "42");
        assert_eq!(big_integer_value("007".into()), Err(NumericError::InvalidFormat));
        assert!(matches!(
            big_integer_value(1.5f64.into()),
            Err(NumericError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_big_number_value() {
        assert_eq!(big_number_value("1.230".into()).unwrap(), "1.230");
        assert_eq!(big_number_value(3u8.into()).unwrap(), "3");
        assert_eq!(big_number_value(0.25f64.into()).unwrap(), "0.25");
        assert!(matches!(
            big_number_value("1e10abc".into()),
            Err(NumericError::InvalidArgument(_))
        ));
    }
}

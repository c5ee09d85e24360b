// ============================================================================
// Big Integer
// Immutable arbitrary-precision signed integer with hex/decimal round-trip
// ============================================================================

use super::big_number::BigNumber;
use super::coerce::{big_integer_value, is_base16, strip_hex_prefix, NumericInput};
use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, Sign};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Arbitrary-precision signed integer.
///
/// Values are immutable: every arithmetic method returns a new instance.
/// The canonical textual forms are base-10 ([`BigInteger::value`]) and
/// even-length lowercase base-16 of the magnitude ([`BigInteger::to_base16`]).
///
/// # Example
/// ```
/// use bignum_values::numeric::BigInteger;
///
/// let a = BigInteger::new("255").unwrap();
/// assert_eq!(a.to_base16(), "ff");
///
/// let b = BigInteger::from_base16("0x0100").unwrap();
/// assert_eq!(a.add(&b).unwrap().value(), "511");
/// assert_eq!(a.sub("5").unwrap().value(), "250");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigInteger(BigInt);

/// Coerce an operand, borrowing when it is already a big integer.
fn operand<'a>(value: impl Into<NumericInput<'a>>) -> NumericResult<Cow<'a, BigInt>> {
    match value.into() {
        NumericInput::BigInteger(b) => Ok(Cow::Borrowed(&b.0)),
        NumericInput::BigInt(b) => Ok(Cow::Borrowed(b)),
        other => BigInteger::new(other).map(|b| Cow::Owned(b.0)),
    }
}

impl BigInteger {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a decimal string, native integer, [`BigInt`] or another
    /// big integer.
    ///
    /// # Errors
    /// - `InvalidFormat` if a string does not match `^(0|-?[1-9][0-9]*)$`
    /// - `InvalidArgument` for floats and decimals
    pub fn new<'a>(value: impl Into<NumericInput<'a>>) -> NumericResult<Self> {
        match value.into() {
            NumericInput::BigInteger(b) => Ok(b.clone()),
            NumericInput::BigInt(b) => Ok(Self(b.clone())),
            other => {
                let canonical = big_integer_value(other)?;
                BigInt::parse_bytes(canonical.as_bytes(), 10)
                    .map(Self)
                    .ok_or(NumericError::InvalidFormat)
            },
        }
    }

    /// Create from a hexadecimal string with an optional `0x`/`0X` prefix.
    ///
    /// The result is always non-negative.
    ///
    /// # Errors
    /// Returns `InvalidFormat` unless the remainder is one or more hex digits.
    pub fn from_base16(hex: &str) -> NumericResult<Self> {
        if !is_base16(hex, true) {
            tracing::debug!(input = hex, "rejected malformed hex string");
            return Err(NumericError::InvalidFormat);
        }

        let digits = strip_hex_prefix(hex);
        BigInt::parse_bytes(digits.as_bytes(), 16)
            .map(Self)
            .ok_or(NumericError::InvalidFormat)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Canonical base-10 string, with `-` for negative values.
    pub fn value(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Lowercase hex of the magnitude, left-padded to an even length.
    ///
    /// The sign is not encoded; callers that need it track it separately.
    pub fn to_base16(&self) -> String {
        let hex = self.0.magnitude().to_str_radix(16);
        if hex.len() % 2 != 0 {
            format!("0{}", hex)
        } else {
            hex
        }
    }

    /// Borrow the backing integer.
    #[inline]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Convert to a big number at the default scale.
    pub fn to_big_number(&self) -> BigNumber {
        BigNumber::from(self)
    }

    /// True for negative values.
    #[inline]
    pub fn is_signed(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// True for zero and positive values.
    #[inline]
    pub fn is_unsigned(&self) -> bool {
        !self.is_signed()
    }

    /// Smallest power-of-two byte count that holds the hex form.
    ///
    /// This is a bracket, not the tight length: a 3-byte value reports 4 and a
    /// 5-byte value reports 8. Zero and single-byte values report 1.
    pub fn size_in_bytes(&self) -> usize {
        let bytes = self.to_base16().len() / 2;

        let mut bracket = 1;
        while bytes > bracket {
            bracket *= 2;
        }
        bracket
    }

    // ========================================================================
    // Comparison
    // ========================================================================
    //
    // Operands go through the same coercion as `new`, so `"42"`, `42` and
    // `&other` are all accepted. Malformed operands surface the constructor's
    // error.

    /// Compare with another value: -1, 0 or 1.
    ///
    /// # Errors
    /// Returns the coercion error if `other` is not a valid integer.
    pub fn cmp<'a>(&self, other: impl Into<NumericInput<'a>>) -> NumericResult<i32> {
        Ok(match self.0.cmp(&*operand(other)?) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    pub fn equals<'a>(&self, other: impl Into<NumericInput<'a>>) -> NumericResult<bool> {
        Ok(self.cmp(other)? == 0)
    }

    /// `self > other`, or `self >= other` when `or_equals` is set.
    pub fn greater_than<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        or_equals: bool,
    ) -> NumericResult<bool> {
        let threshold = if or_equals { 0 } else { 1 };
        Ok(self.cmp(other)? >= threshold)
    }

    /// `self < other`, or `self <= other` when `or_equals` is set.
    pub fn less_than<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        or_equals: bool,
    ) -> NumericResult<bool> {
        let threshold = if or_equals { 0 } else { -1 };
        Ok(self.cmp(other)? <= threshold)
    }

    /// Inclusive on both bounds.
    pub fn in_range<'a, 'b>(
        &self,
        min: impl Into<NumericInput<'a>>,
        max: impl Into<NumericInput<'b>>,
    ) -> NumericResult<bool> {
        Ok(self.cmp(min)? >= 0 && self.cmp(max)? <= 0)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================
    //
    // The `&a + &b` operator impls below are the infallible path for operands
    // that are already big integers.

    pub fn add<'a>(&self, other: impl Into<NumericInput<'a>>) -> NumericResult<Self> {
        Ok(Self(&self.0 + &*operand(other)?))
    }

    pub fn sub<'a>(&self, other: impl Into<NumericInput<'a>>) -> NumericResult<Self> {
        Ok(Self(&self.0 - &*operand(other)?))
    }

    pub fn mul<'a>(&self, other: impl Into<NumericInput<'a>>) -> NumericResult<Self> {
        Ok(Self(&self.0 * &*operand(other)?))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<BigInt> for BigInteger {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<BigInteger> for BigInt {
    fn from(value: BigInteger) -> Self {
        value.0
    }
}

impl FromStr for BigInteger {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        BigInteger(&self.0 + &rhs.0)
    }
}

impl Sub for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: Self) -> Self::Output {
        BigInteger(&self.0 - &rhs.0)
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        BigInteger(&self.0 * &rhs.0)
    }
}

impl Neg for BigInteger {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({}, hex={})", self.value(), self.to_base16())
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Serialization
// ============================================================================
//
// Persisted as the base-16 string. Negative values carry a leading `-` so the
// sign survives a reload through `from_base16`.

#[cfg(feature = "serde")]
impl Serialize for BigInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hex = self.to_base16();
        if self.is_signed() {
            serializer.serialize_str(&format!("-{}", hex))
        } else {
            serializer.serialize_str(&hex)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let (negative, hex) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.as_str()),
        };

        let magnitude = Self::from_base16(hex).map_err(|e| {
            tracing::warn!(input = %s, "rejected persisted big integer");
            serde::de::Error::custom(e)
        })?;

        Ok(if negative { -magnitude } else { magnitude })
    }
}

// ============================================================================
// Tests
// ============================================================================

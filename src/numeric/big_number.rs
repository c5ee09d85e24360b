// ============================================================================
// Big Number
// Arbitrary-precision decimal with a caller-controlled truncation scale
// ============================================================================

use super::big_integer::BigInteger;
use super::coerce::{big_number_value, NumericInput};
use super::errors::{NumericError, NumericResult};
use super::fixed_point::FixedPoint;
use crate::platform::IntBounds;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scale used when none is given at construction.
pub const DEFAULT_SCALE: i32 = 18;

const DEFAULT_DIGITS: u32 = DEFAULT_SCALE.unsigned_abs();

/// Arbitrary-precision decimal number.
///
/// Holds a plain fixed-point value (never exponent notation) plus a default
/// `scale`: the number of fractional digits every comparison and arithmetic
/// method works at unless a per-call scale is supplied. Digits beyond the
/// effective scale are truncated toward zero, never rounded.
///
/// Values are immutable. [`BigNumber::change_scale`] and [`BigNumber::trim`]
/// return new values.
///
/// `==` compares the textual value and the scale; use [`BigNumber::equals`]
/// for numeric equality at a scale.
///
/// # Example
/// ```
/// use bignum_values::numeric::BigNumber;
///
/// let price = BigNumber::with_scale("19.99", 2).unwrap();
/// let total = price.mul(3, None).unwrap();
/// assert_eq!(total.value(), "59.97");
///
/// let third = BigNumber::with_scale(1, 4).unwrap().div(3, None).unwrap();
/// assert_eq!(third.value(), "0.3333");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "PersistedBigNumber", try_from = "PersistedBigNumber")
)]
pub struct BigNumber {
    digits: FixedPoint,
    scale: u32,
}

/// Validate a caller-supplied scale.
fn check_scale(scale: i32) -> NumericResult<u32> {
    u32::try_from(scale).map_err(|_| NumericError::InvalidArgument("scale must not be negative"))
}

/// Coerce an operand into fixed-point digits.
fn operand<'a>(value: impl Into<NumericInput<'a>>) -> NumericResult<FixedPoint> {
    FixedPoint::parse(&big_number_value(value.into())?)
}

impl BigNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create at [`DEFAULT_SCALE`].
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a string does not match
    /// `^-?(0|[1-9]+[0-9]*)(\.[0-9]+)?$` or a float is not finite.
    pub fn new<'a>(value: impl Into<NumericInput<'a>>) -> NumericResult<Self> {
        Ok(Self {
            digits: operand(value)?,
            scale: DEFAULT_DIGITS,
        })
    }

    /// Create with an explicit default scale.
    ///
    /// # Errors
    /// - `InvalidArgument` if the value is not a valid number
    /// - `InvalidArgument` if `scale` is negative
    pub fn with_scale<'a>(value: impl Into<NumericInput<'a>>, scale: i32) -> NumericResult<Self> {
        let scale = check_scale(scale)?;
        Ok(Self {
            digits: operand(value)?,
            scale,
        })
    }

    /// Build a result value: digits truncated to exactly `scale` places.
    fn from_fixed(digits: FixedPoint, scale: u32) -> Self {
        Self {
            digits: digits.rescale(scale),
            scale,
        }
    }

    /// Scale to use for a call: the per-call override if given, else the
    /// instance default.
    fn use_scale(&self, scale: Option<i32>) -> NumericResult<u32> {
        match scale {
            Some(scale) => check_scale(scale),
            None => Ok(self.scale),
        }
    }

    // ========================================================================
    // Scale and Formatting
    // ========================================================================

    /// Same value with a different default scale.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `scale` is negative.
    pub fn change_scale(&self, scale: i32) -> NumericResult<Self> {
        Ok(Self {
            digits: self.digits.clone(),
            scale: check_scale(scale)?,
        })
    }

    /// Strip trailing fractional zeros from the textual value.
    ///
    /// Integral values are returned unchanged. With `retain > 0` the fraction
    /// is then padded back with zeros to at least `retain` digits. Only the
    /// text changes; the numeric value and the scale do not.
    pub fn trim(&self, retain: u32) -> Self {
        if self.is_integer() {
            return self.clone();
        }

        let mut digits = self.digits.normalized();
        if retain > digits.scale() {
            digits = digits.rescale(retain);
        }

        Self {
            digits,
            scale: self.scale,
        }
    }

    /// An independent value with identical text and scale.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Canonical plain-decimal text.
    pub fn value(&self) -> String {
        self.digits.to_string()
    }

    /// Default scale for comparisons and arithmetic.
    #[inline]
    pub fn scale(&self) -> i32 {
        // Every stored scale passed `check_scale`, so it fits.
        self.scale as i32
    }

    /// True if the text has no fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.digits.scale() == 0
    }

    /// Narrow to a native signed integer.
    ///
    /// # Errors
    /// Returns `Domain` if the value has a fractional part or lies outside
    /// [`IntBounds::NATIVE`].
    pub fn int(&self) -> NumericResult<i64> {
        self.int_within(IntBounds::NATIVE)
    }

    /// Narrow to a signed integer within explicit bounds.
    ///
    /// # Errors
    /// Returns `Domain` if the value has a fractional part or lies outside
    /// `bounds`.
    pub fn int_within(&self, bounds: IntBounds) -> NumericResult<i64> {
        if !self.is_integer() {
            return Err(NumericError::Domain("value is not integral"));
        }

        self.digits
            .integer_part()
            .to_i64()
            .filter(|v| bounds.contains(*v))
            .ok_or(NumericError::Domain("value exceeds native integer range"))
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// Zero at the instance scale (`0.0001` is zero at scale 2).
    pub fn is_zero(&self) -> bool {
        self.digits.signum_at(self.scale) == 0
    }

    pub fn is_positive(&self) -> bool {
        self.digits.signum_at(self.scale) > 0
    }

    pub fn is_negative(&self) -> bool {
        self.digits.signum_at(self.scale) < 0
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare with another number at the effective scale: -1, 0 or 1.
    ///
    /// Both sides are truncated to the scale before comparing.
    pub fn cmp<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<i32> {
        let other = operand(other)?;
        let scale = self.use_scale(scale)?;
        Ok(match self.digits.cmp_at(&other, scale) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    pub fn equals<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<bool> {
        Ok(self.cmp(other, scale)? == 0)
    }

    pub fn greater_than<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<bool> {
        Ok(self.cmp(other, scale)? == 1)
    }

    pub fn greater_than_or_equals<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<bool> {
        Ok(self.cmp(other, scale)? >= 0)
    }

    pub fn less_than<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<bool> {
        Ok(self.cmp(other, scale)? == -1)
    }

    pub fn less_than_or_equals<'a>(
        &self,
        other: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<bool> {
        Ok(self.cmp(other, scale)? <= 0)
    }

    /// Check `min <= self <= max` at the effective scale.
    pub fn in_range<'a, 'b>(
        &self,
        min: impl Into<NumericInput<'a>>,
        max: impl Into<NumericInput<'b>>,
        scale: Option<i32>,
    ) -> NumericResult<bool> {
        let min = operand(min)?;
        let max = operand(max)?;
        let scale = self.use_scale(scale)?;

        Ok(self.digits.cmp_at(&min, scale) != Ordering::Less
            && self.digits.cmp_at(&max, scale) != Ordering::Greater)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================
    //
    // Each result is truncated to the effective scale and carries that scale,
    // so its text always has exactly `scale` fractional digits.

    pub fn add<'a>(
        &self,
        num: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        let num = operand(num)?;
        let scale = self.use_scale(scale)?;
        Ok(Self::from_fixed(self.digits.add_exact(&num), scale))
    }

    pub fn sub<'a>(
        &self,
        num: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        let num = operand(num)?;
        let scale = self.use_scale(scale)?;
        Ok(Self::from_fixed(self.digits.sub_exact(&num), scale))
    }

    pub fn mul<'a>(
        &self,
        num: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        let num = operand(num)?;
        let scale = self.use_scale(scale)?;
        Ok(Self::from_fixed(self.digits.mul_exact(&num), scale))
    }

    /// Multiply by `base^exponent`, e.g. converting `1.5` ether to wei with
    /// `multiply_by_pow(10, 18, Some(0))`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `base` or `exponent` is below 1, or if
    /// `exponent` exceeds [`MAX_EXPONENT`](crate::numeric::MAX_EXPONENT).
    pub fn multiply_by_pow(
        &self,
        base: i64,
        exponent: i64,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        let scale = self.use_scale(scale)?;
        if base < 1 {
            return Err(NumericError::InvalidArgument("base must be a positive integer"));
        }
        if exponent < 1 {
            return Err(NumericError::InvalidArgument(
                "exponent must be a positive integer",
            ));
        }

        let factor = FixedPoint::from_raw(BigInt::from(base), 0).checked_pow(exponent, 0)?;
        Ok(Self::from_fixed(self.digits.mul_exact(&factor), scale))
    }

    /// # Errors
    /// Returns `DivisionByZero` if the divisor is zero.
    pub fn div<'a>(
        &self,
        num: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        let num = operand(num)?;
        let scale = self.use_scale(scale)?;
        let quotient = self.digits.checked_div(&num, scale)?;
        Ok(Self::from_fixed(quotient, scale))
    }

    /// Raise to an integral power. Negative exponents yield the reciprocal
    /// truncated at the effective scale.
    ///
    /// # Errors
    /// - `InvalidArgument` if the exponent has a fractional part or its
    ///   magnitude exceeds [`MAX_EXPONENT`](crate::numeric::MAX_EXPONENT)
    /// - `DivisionByZero` for zero raised to a negative power
    pub fn pow<'a>(
        &self,
        num: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        let num = operand(num)?;
        let scale = self.use_scale(scale)?;

        let whole = num.integer_part();
        if num.cmp_at(&FixedPoint::from_raw(whole.clone(), 0), num.scale()) != Ordering::Equal {
            return Err(NumericError::InvalidArgument(
                "exponent cannot have a fractional part",
            ));
        }

        let exponent = whole
            .to_i64()
            .ok_or(NumericError::InvalidArgument("exponent is too large"))?;
        let power = self.digits.checked_pow(exponent, scale)?;
        Ok(Self::from_fixed(power, scale))
    }

    /// Remainder of truncated division; the sign follows the dividend.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the divisor is zero.
    pub fn modulo<'a>(
        &self,
        divisor: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        let divisor = operand(divisor)?;
        let scale = self.use_scale(scale)?;
        let remainder = self.digits.checked_rem(&divisor)?;
        Ok(Self::from_fixed(remainder, scale))
    }

    /// Alias of [`BigNumber::modulo`].
    pub fn remainder<'a>(
        &self,
        divisor: impl Into<NumericInput<'a>>,
        scale: Option<i32>,
    ) -> NumericResult<Self> {
        self.modulo(divisor, scale)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl BigNumber {
    /// Convert from `rust_decimal::Decimal`, keeping its digits exactly.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `scale` is negative.
    pub fn from_decimal(d: rust_decimal::Decimal, scale: i32) -> NumericResult<Self> {
        Ok(Self {
            digits: FixedPoint::from_raw(BigInt::from(d.mantissa()), d.scale()),
            scale: check_scale(scale)?,
        })
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Domain` if the value does not fit a 96-bit decimal without
    /// losing digits.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.value())
            .map_err(|_| NumericError::Domain("value does not fit a 96-bit decimal"))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<&BigInteger> for BigNumber {
    fn from(value: &BigInteger) -> Self {
        Self {
            digits: FixedPoint::from_raw(value.as_bigint().clone(), 0),
            scale: DEFAULT_DIGITS,
        }
    }
}

impl From<BigInteger> for BigNumber {
    fn from(value: BigInteger) -> Self {
        Self {
            digits: FixedPoint::from_raw(value.into(), 0),
            scale: DEFAULT_DIGITS,
        }
    }
}

impl FromStr for BigNumber {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({}, scale={})", self.digits, self.scale)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Persisted shape: `{"value": "...", "scale": n}`. Both fields are
/// re-validated on load; corrupt data is rejected, never coerced.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PersistedBigNumber {
    value: String,
    scale: i64,
}

#[cfg(feature = "serde")]
impl From<BigNumber> for PersistedBigNumber {
    fn from(n: BigNumber) -> Self {
        Self {
            value: n.value(),
            scale: i64::from(n.scale),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<PersistedBigNumber> for BigNumber {
    type Error = NumericError;

    fn try_from(p: PersistedBigNumber) -> Result<Self, Self::Error> {
        let scale = i32::try_from(p.scale)
            .map_err(|_| NumericError::InvalidArgument("scale is out of range"));
        scale
            .and_then(|scale| Self::with_scale(p.value.as_str(), scale))
            .inspect_err(|e| {
                tracing::warn!(value = %p.value, scale = p.scale, error = %e, "rejected persisted big number");
            })
    }
}

// ============================================================================
// Tests
// ============================================================================

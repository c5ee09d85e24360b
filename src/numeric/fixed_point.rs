// ============================================================================
// Fixed-Point Engine
// Truncating arbitrary-precision decimal arithmetic with runtime scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Arbitrary-precision fixed-point decimal.
///
/// Internally stores `value × 10^scale` as a [`BigInt`], so `1.25` is held as
/// `raw = 125, scale = 2`. Operations that take a target scale truncate toward
/// zero; digits past the scale are dropped, never rounded.
///
/// Equality is structural (`1.0` and `1.00` differ). Use [`FixedPoint::cmp_at`]
/// for numeric comparison.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct FixedPoint {
    raw: BigInt,
    scale: u32,
}

/// Largest exponent magnitude accepted by power operations.
///
/// Results grow linearly with the exponent, so larger requests are rejected
/// with `InvalidArgument` instead of exhausting memory.
pub const MAX_EXPONENT: u32 = 100_000;

/// Compute 10^n
fn pow10(n: u32) -> BigInt {
    BigInt::from(10u8).pow(n)
}

impl FixedPoint {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub(crate) fn from_raw(raw: BigInt, scale: u32) -> Self {
        Self { raw, scale }
    }

    pub(crate) fn one() -> Self {
        Self::from_raw(BigInt::one(), 0)
    }

    /// Parse a plain decimal string (`-12.340`, `7`, `0.5`).
    ///
    /// The integer/decimal grammar is enforced by the coercion layer; this only
    /// rejects what it cannot turn into digits.
    pub(crate) fn parse(s: &str) -> NumericResult<Self> {
        let (is_negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match unsigned.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (unsigned, ""),
        };

        if int_str.is_empty()
            || !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidArgument("not a plain decimal number"));
        }

        let digits = format!("{}{}", int_str, frac_str);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or(NumericError::InvalidArgument("not a plain decimal number"))?;

        let scale = u32::try_from(frac_str.len())
            .map_err(|_| NumericError::InvalidArgument("too many fractional digits"))?;

        let raw = if is_negative { -magnitude } else { magnitude };
        Ok(Self { raw, scale })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub(crate) fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Get the integer part (truncated toward zero).
    pub(crate) fn integer_part(&self) -> BigInt {
        &self.raw / pow10(self.scale)
    }

    // ========================================================================
    // Scaling
    // ========================================================================

    /// Re-express at `scale` fractional digits, truncating toward zero when
    /// the scale shrinks.
    pub(crate) fn rescale(&self, scale: u32) -> Self {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::from_raw(&self.raw * pow10(scale - self.scale), scale),
            Ordering::Less => Self::from_raw(&self.raw / pow10(self.scale - scale), scale),
        }
    }

    /// Drop trailing fractional zeros without changing the value.
    pub(crate) fn normalized(&self) -> Self {
        let ten = BigInt::from(10u8);
        let mut raw = self.raw.clone();
        let mut scale = self.scale;
        while scale > 0 && (&raw % &ten).is_zero() {
            raw /= &ten;
            scale -= 1;
        }
        Self { raw, scale }
    }

    /// Bring both operands to the larger of their scales.
    fn align(&self, rhs: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(rhs.scale);
        (
            self.rescale(scale).raw,
            rhs.rescale(scale).raw,
            scale,
        )
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================
    //
    // The exact variants keep every digit; callers truncate once at the end
    // via `rescale`, so a single operation never truncates twice.

    pub(crate) fn add_exact(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.align(rhs);
        Self::from_raw(a + b, scale)
    }

    pub(crate) fn sub_exact(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.align(rhs);
        Self::from_raw(a - b, scale)
    }

    pub(crate) fn mul_exact(&self, rhs: &Self) -> Self {
        Self::from_raw(&self.raw * &rhs.raw, self.scale + rhs.scale)
    }

    /// Quotient truncated to `scale` fractional digits.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub(crate) fn checked_div(&self, rhs: &Self, scale: u32) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        // (A / 10^sa) / (B / 10^sb) at scale s  =>  A * 10^(sb + s) / (B * 10^sa)
        let numerator = &self.raw * pow10(rhs.scale + scale);
        let denominator = &rhs.raw * pow10(self.scale);
        Ok(Self::from_raw(numerator / denominator, scale))
    }

    /// Remainder of truncated division: `self - rhs * trunc(self / rhs)`.
    ///
    /// The result carries the sign of the dividend.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub(crate) fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let (a, b, scale) = self.align(rhs);
        Ok(Self::from_raw(a % b, scale))
    }

    /// Integer power truncated to `scale` fractional digits.
    ///
    /// Positive exponents are computed exactly before the final truncation;
    /// negative exponents divide one by the exact positive power.
    ///
    /// # Errors
    /// - `InvalidArgument` if the exponent magnitude exceeds [`MAX_EXPONENT`]
    /// - `DivisionByZero` for a zero base raised to a negative exponent
    pub(crate) fn checked_pow(&self, exponent: i64, scale: u32) -> NumericResult<Self> {
        let magnitude = u32::try_from(exponent.unsigned_abs())
            .ok()
            .filter(|m| *m <= MAX_EXPONENT)
            .ok_or(NumericError::InvalidArgument("exponent is too large"))?;

        let power_scale = self
            .scale
            .checked_mul(magnitude)
            .ok_or(NumericError::InvalidArgument("exponent is too large"))?;
        let power = Self::from_raw(self.raw.pow(magnitude), power_scale);

        if exponent < 0 {
            Self::one().checked_div(&power, scale)
        } else {
            Ok(power.rescale(scale))
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare after truncating both operands to `scale` fractional digits.
    pub(crate) fn cmp_at(&self, rhs: &Self, scale: u32) -> Ordering {
        self.rescale(scale).raw.cmp(&rhs.rescale(scale).raw)
    }

    /// Sign after truncation to `scale` digits: -1, 0 or 1.
    pub(crate) fn signum_at(&self, scale: u32) -> i32 {
        let truncated = self.rescale(scale);
        match truncated.raw.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint({}, raw={}, scale={})", self, self.raw, self.scale)
    }
}

impl fmt::Display for FixedPoint {
    /// Plain decimal with exactly `scale` fractional digits. Zero is never
    /// rendered with a minus sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.raw.abs().to_string();
        let sign = if self.raw.is_negative() { "-" } else { "" };

        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let width = self.scale as usize + 1;
        let padded = format!("{:0>width$}", digits, width = width);
        let (int_part, frac_part) = padded.split_at(padded.len() - self.scale as usize);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(s: &str) -> FixedPoint {
        FixedPoint::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        let x = fp("123.456");
        assert_eq!(x.raw, BigInt::from(123_456));
        assert_eq!(x.scale(), 3);

        let y = fp("-0.001");
        assert_eq!(y.raw, BigInt::from(-1));
        assert_eq!(y.scale(), 3);

        let z = fp("42");
        assert_eq!(z.raw, BigInt::from(42));
        assert_eq!(z.scale(), 0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(FixedPoint::parse("").is_err());
        assert!(FixedPoint::parse(".5").is_err());
        assert!(FixedPoint::parse("1e5").is_err());
        assert!(FixedPoint::parse("1_000").is_err());
        assert!(FixedPoint::parse("+1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(fp("123.456").to_string(), "123.456");
        assert_eq!(fp("0.05").to_string(), "0.05");
        assert_eq!(fp("-0.05").to_string(), "-0.05");
        assert_eq!(fp("7").to_string(), "7");
        assert_eq!(FixedPoint::from_raw(BigInt::zero(), 3).to_string(), "0.000");
    }

    #[test]
    fn test_rescale_truncates() {
        assert_eq!(fp("1.999").rescale(2).to_string(), "1.99");
        assert_eq!(fp("-1.999").rescale(0).to_string(), "-1");
        assert_eq!(fp("1.5").rescale(4).to_string(), "1.5000");
        // No negative zero after truncation
        assert_eq!(fp("-0.001").rescale(2).to_string(), "0.00");
    }

    #[test]
    fn test_normalized() {
        assert_eq!(fp("1.230").normalized().to_string(), "1.23");
        assert_eq!(fp("100.000").normalized().to_string(), "100");
        assert_eq!(fp("0.000").normalized().to_string(), "0");
        assert_eq!(fp("100").normalized().to_string(), "100");
    }

    #[test]
    fn test_add_sub_exact() {
        assert_eq!(fp("1.25").add_exact(&fp("2.5")).to_string(), "3.75");
        assert_eq!(fp("1").sub_exact(&fp("2.001")).to_string(), "-1.001");
    }

    #[test]
    fn test_mul_exact() {
        assert_eq!(fp("1.5").mul_exact(&fp("1.5")).to_string(), "2.25");
        assert_eq!(fp("-2.5").mul_exact(&fp("4")).to_string(), "-10.0");
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(fp("1").checked_div(&fp("3"), 5).unwrap().to_string(), "0.33333");
        assert_eq!(fp("-2").checked_div(&fp("3"), 3).unwrap().to_string(), "-0.666");
        assert_eq!(fp("10").checked_div(&fp("0.25"), 0).unwrap().to_string(), "40");
        assert_eq!(
            fp("1").checked_div(&fp("0.000"), 2),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_rem() {
        assert_eq!(fp("10").checked_rem(&fp("3")).unwrap().to_string(), "1");
        assert_eq!(fp("-10").checked_rem(&fp("3")).unwrap().to_string(), "-1");
        assert_eq!(fp("5.5").checked_rem(&fp("2")).unwrap().to_string(), "1.5");
        assert_eq!(fp("1").checked_rem(&fp("0")), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_checked_pow() {
        assert_eq!(fp("2").checked_pow(10, 0).unwrap().to_string(), "1024");
        assert_eq!(fp("1.5").checked_pow(2, 4).unwrap().to_string(), "2.2500");
        assert_eq!(fp("2").checked_pow(-2, 3).unwrap().to_string(), "0.250");
        assert_eq!(fp("7").checked_pow(0, 0).unwrap().to_string(), "1");
        assert_eq!(fp("0").checked_pow(-1, 2), Err(NumericError::DivisionByZero));
        assert_eq!(
            fp("1").checked_pow(i64::from(MAX_EXPONENT), 0).unwrap().to_string(),
            "1"
        );
        assert!(matches!(
            fp("2").checked_pow(i64::from(MAX_EXPONENT) + 1, 0),
            Err(NumericError::InvalidArgument(_))
        ));
        assert!(matches!(
            fp("2").checked_pow(-i64::from(MAX_EXPONENT) - 1, 4),
            Err(NumericError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cmp_at() {
        assert_eq!(fp("1.001").cmp_at(&fp("1.002"), 2), Ordering::Equal);
        assert_eq!(fp("1.001").cmp_at(&fp("1.002"), 3), Ordering::Less);
        assert_eq!(fp("-1").cmp_at(&fp("0.5"), 0), Ordering::Less);
    }

    #[test]
    fn test_signum_at() {
        assert_eq!(fp("0.0001").signum_at(2), 0);
        assert_eq!(fp("0.0001").signum_at(4), 1);
        assert_eq!(fp("-3").signum_at(0), -1);
    }

    #[test]
    fn test_integer_part() {
        assert_eq!(fp("123.999").integer_part(), BigInt::from(123));
        assert_eq!(fp("-5.5").integer_part(), BigInt::from(-5));
    }
}

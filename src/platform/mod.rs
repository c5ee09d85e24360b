// ============================================================================
// Platform Module
// Native integer bounds used when narrowing big values to machine integers
// ============================================================================
//
// The bounds are named constants fixed at compile time instead of being read
// from the host word size at the call site, so narrowing behaves the same on
// every target and can be exercised with narrower bounds in tests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive signed-integer range a big value may be narrowed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntBounds {
    pub min: i64,
    pub max: i64,
}

/// Smallest native signed integer (64-bit).
pub const NATIVE_INT_MIN: i64 = i64::MIN;

/// Largest native signed integer (64-bit).
pub const NATIVE_INT_MAX: i64 = i64::MAX;

impl IntBounds {
    /// Full native signed 64-bit range
    pub const NATIVE: Self = Self {
        min: NATIVE_INT_MIN,
        max: NATIVE_INT_MAX,
    };

    /// Signed 32-bit range, for 32-bit hosts and wire formats
    pub const I32: Self = Self {
        min: i32::MIN as i64,
        max: i32::MAX as i64,
    };

    /// Create custom bounds.
    ///
    /// Returns `None` when `min > max`.
    pub const fn new(min: i64, max: i64) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// Check whether `value` lies within the bounds (inclusive).
    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for IntBounds {
    fn default() -> Self {
        Self::NATIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_bounds() {
        assert_eq!(IntBounds::NATIVE.max, 9_223_372_036_854_775_807);
        assert_eq!(IntBounds::NATIVE.min, -9_223_372_036_854_775_808);
        assert_eq!(IntBounds::default(), IntBounds::NATIVE);
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = IntBounds::new(-5, 5).unwrap();
        assert!(bounds.contains(-5));
        assert!(bounds.contains(5));
        assert!(!bounds.contains(6));
        assert!(IntBounds::new(1, 0).is_none());
    }

    #[test]
    fn test_i32_bounds() {
        assert!(IntBounds::I32.contains(i32::MAX as i64));
        assert!(!IntBounds::I32.contains(i32::MAX as i64 + 1));
    }
}

// ============================================================================
// Numeric Configuration
// Defaults applied when constructing and narrowing big numbers
// ============================================================================

use crate::numeric::{BigNumber, NumericInput, NumericResult, DEFAULT_SCALE};
use crate::platform::IntBounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defaults for a family of big numbers (e.g. all amounts in one currency).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericConfig {
    /// Default scale given to numbers built through this config
    pub default_scale: i32,

    /// Range used when narrowing to a native integer
    pub int_bounds: IntBounds,
}

impl NumericConfig {
    /// Create a configuration with the default scale (18) and native bounds
    pub fn new() -> Self {
        Self {
            default_scale: DEFAULT_SCALE,
            int_bounds: IntBounds::NATIVE,
        }
    }

    /// Builder method: Set default scale
    pub fn with_scale(mut self, scale: i32) -> Self {
        self.default_scale = scale;
        self
    }

    /// Builder method: Set integer narrowing bounds
    pub fn with_int_bounds(mut self, bounds: IntBounds) -> Self {
        self.int_bounds = bounds;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_scale < 0 {
            return Err("Default scale cannot be negative".to_string());
        }

        if self.int_bounds.min > self.int_bounds.max {
            return Err("Integer bounds minimum exceeds maximum".to_string());
        }

        Ok(())
    }

    /// Build a big number carrying this configuration's default scale.
    pub fn big_number<'a>(&self, value: impl Into<NumericInput<'a>>) -> NumericResult<BigNumber> {
        BigNumber::with_scale(value, self.default_scale)
    }

    /// Narrow a big number using this configuration's integer bounds.
    pub fn int(&self, value: &BigNumber) -> NumericResult<i64> {
        value.int_within(self.int_bounds)
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl NumericConfig {
    /// Fiat amounts: two fractional digits (cents)
    pub fn monetary() -> Self {
        Self::new().with_scale(2)
    }

    /// Ether-style token amounts: eighteen fractional digits (wei)
    pub fn wei() -> Self {
        Self::new().with_scale(18)
    }

    /// Whole numbers only: every operation truncates to integers
    pub fn integer_only() -> Self {
        Self::new().with_scale(0)
    }

    /// Narrow into 32-bit integers, for 32-bit hosts and wire formats
    pub fn i32_bounds() -> Self {
        Self::new().with_int_bounds(IntBounds::I32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_config_creation() {
        let config = NumericConfig::new();
        assert_eq!(config.default_scale, 18);
        assert_eq!(config.default_scale, DEFAULT_SCALE);
        assert_eq!(config.big_number(1).unwrap().scale(), config.default_scale);
        assert_eq!(config.int_bounds, IntBounds::NATIVE);
        assert!(config.validate().is_ok());
        assert_eq!(NumericConfig::default(), config);
    }

    #[test]
    fn test_builder_pattern() {
        let bounds = IntBounds::new(-100, 100).unwrap();
        let config = NumericConfig::monetary().with_int_bounds(bounds);

        assert_eq!(config.default_scale, 2);
        assert_eq!(config.int_bounds, bounds);
    }

    #[test]
    fn test_validation() {
        let config = NumericConfig::new().with_scale(-1);
        assert!(config.validate().is_err());

        let config = NumericConfig::new().with_int_bounds(IntBounds { min: 5, max: 1 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(NumericConfig::wei().default_scale, 18);
        assert_eq!(NumericConfig::integer_only().default_scale, 0);
        assert_eq!(NumericConfig::i32_bounds().int_bounds, IntBounds::I32);
    }

    #[test]
    fn test_big_number_uses_default_scale() {
        let config = NumericConfig::monetary();
        let amount = config.big_number("10.129").unwrap();
        assert_eq!(amount.scale(), 2);
        assert_eq!(amount.add("0.001", None).unwrap().value(), "10.13");

        let broken = NumericConfig::new().with_scale(-4);
        assert!(matches!(
            broken.big_number("1"),
            Err(NumericError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_int_uses_bounds() {
        let config = NumericConfig::i32_bounds();
        let small = config.big_number(1_000).unwrap();
        assert_eq!(config.int(&small).unwrap(), 1_000);

        let large = config.big_number(5_000_000_000i64).unwrap();
        assert!(matches!(config.int(&large), Err(NumericError::Domain(_))));
        assert_eq!(NumericConfig::new().int(&large).unwrap(), 5_000_000_000);
    }
}

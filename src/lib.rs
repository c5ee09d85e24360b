// ============================================================================
// Big Numeric Values Library
// Arbitrary-precision integers and fixed-point decimals with exact text forms
// ============================================================================

//! # Big Numeric Values
//!
//! Arbitrary-precision value types for amounts that outgrow machine words:
//! ledger balances, token amounts in wei, cryptographic scalars.
//!
//! ## Features
//!
//! - **BigInteger**: unbounded signed integer with canonical base-10 and
//!   even-length base-16 forms
//! - **BigNumber**: decimal with a default **scale**; comparisons and
//!   arithmetic truncate to the scale instead of rounding
//! - **No floating-point error**: floats are accepted as inputs but expanded
//!   to plain decimal text before any arithmetic
//! - **Checked narrowing** to native integers against named bounds
//!
//! ## Example
//!
//! ```rust
//! use bignum_values::prelude::*;
//!
//! // 1.5 ether in wei
//! let ether = BigNumber::new("1.5").unwrap();
//! let wei = ether.multiply_by_pow(10, 18, Some(0)).unwrap();
//! assert_eq!(wei.value(), "1500000000000000000");
//!
//! // Hex round-trip for the integer form
//! let raw = BigInteger::new(wei.value().as_str()).unwrap();
//! let hex = raw.to_base16();
//! assert_eq!(BigInteger::from_base16(&hex).unwrap(), raw);
//!
//! // Monetary arithmetic at two decimals
//! let config = NumericConfig::monetary();
//! let price = config.big_number("19.99").unwrap();
//! assert_eq!(price.mul(3, None).unwrap().value(), "59.97");
//! ```

pub mod config;
pub mod numeric;
pub mod platform;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::NumericConfig;
    pub use crate::numeric::{
        BigInteger, BigNumber, NumericError, NumericInput, NumericResult, DEFAULT_SCALE,
    };
    pub use crate::platform::IntBounds;
}

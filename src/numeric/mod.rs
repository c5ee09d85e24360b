// ============================================================================
// Numeric Module
// Arbitrary-precision value types for exact integer and decimal arithmetic
// ============================================================================
//
// This module provides:
// - BigInteger: unbounded signed integer with canonical base-10/base-16 forms
// - BigNumber: fixed-point decimal with a caller-controlled truncation scale
// - NumericInput: the single coercion point for heterogeneous operands
// - NumericError: Error types for all of the above
//
// Design principles:
// - No floating-point arithmetic (floats are only accepted as inputs)
// - All fallible operations return Result (no panics)
// - Values are immutable; every operation returns a new value
// - Digits past the effective scale are truncated, never rounded

mod big_integer;
mod big_number;
mod coerce;
mod errors;
mod fixed_point;

pub use big_integer::BigInteger;
pub use big_number::{BigNumber, DEFAULT_SCALE};
pub use coerce::{
    big_integer_value, big_number_value, float_to_decimal, is_base16, is_decimal_string,
    is_integer_string, NumericInput,
};
pub use errors::{NumericError, NumericResult};
pub use fixed_point::MAX_EXPONENT;

// ============================================================================
// Numeric Errors
// Error types for big-integer and big-number operations
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or operating on big numeric values.
///
/// Every failure is raised at the boundary (construction or method entry);
/// nothing here is ever recovered from internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string does not match the integer or hexadecimal grammar
    InvalidFormat,
    /// Structurally wrong input (unsupported kind, bad scale, bad base/exponent)
    InvalidArgument(&'static str),
    /// Well-formed request that does not apply to the current value
    Domain(&'static str),
    /// Attempted division (or modulo) by zero
    DivisionByZero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat => {
                write!(f, "invalid format: input is not a valid integer or hex string")
            },
            NumericError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            NumericError::Domain(reason) => write!(f, "domain error: {}", reason),
            NumericError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error type for fallible decimal operations.
///
/// NaN is not an error: it is an ordinary value that propagates through
/// every operation. Errors are reserved for arguments outside an
/// operation's domain and for results that cannot be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DecimalError {
    /// The divisor of a division or modulo operation was zero.
    DivisionByZero,
    /// An argument was outside the domain of the operation, or a string
    /// did not match the decimal grammar.
    InvalidArgument,
    /// A value does not fit the requested bounds or the packed
    /// representation.
    ValueOutOfRange,
}

impl Display for DecimalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DecimalError::DivisionByZero => "division by zero",
            DecimalError::InvalidArgument => "invalid argument",
            DecimalError::ValueOutOfRange => "value out of range",
        })
    }
}

impl Error for DecimalError {}

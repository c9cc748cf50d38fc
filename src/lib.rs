//! An exact, arbitrary-precision decimal number type.
//!
//! Values are stored as arrays of base-10000 digits (the radix is a
//! compile-time feature; see the `base-10` and `base-100` features) with a
//! separately tracked weight and display scale, in the manner of SQL
//! numeric types. Arithmetic is exact: addition, subtraction and
//! multiplication never lose digits, while inherently inexact operations
//! (division, square root, logarithms, exponentials and powers) choose a
//! result scale preserving at least 16 significant digits.
//!
//! A special non-numeric token, NaN, propagates through every operation
//! and sorts above every number, giving a total order.
//!
//! # Examples
//!
//! ```
//! use decimal_var::Decimal;
//!
//! let a: Decimal = "1.13".parse().unwrap();
//! let b: Decimal = "0.1".parse().unwrap();
//!
//! assert_eq!((&a + &b).to_string(), "1.23");
//! assert_eq!((&a - &b).to_string(), "1.03");
//! assert_eq!((&a * &b).to_string(), "0.113");
//!
//! let one: Decimal = "1".parse().unwrap();
//! let three: Decimal = "3".parse().unwrap();
//! let third = one.checked_div(&three).unwrap();
//! assert_eq!(third.to_string(), "0.33333333333333333333");
//!
//! let two: Decimal = "2".parse().unwrap();
//! assert_eq!(two.sqrt().unwrap().to_string(), "1.414213562373095");
//!
//! // NaN propagates and compares above everything
//! let nan = Decimal::nan();
//! assert!((&nan + &a).is_nan());
//! assert!(nan > a);
//! ```
//!
//! Display honors precision for rounded output, and scientific notation is
//! available through `{:e}` or [`Decimal::to_sci_string`]:
//!
//! ```
//! use decimal_var::Decimal;
//!
//! let x: Decimal = "12.355".parse().unwrap();
//! assert_eq!(format!("{:.2}", x), "12.36");
//! assert_eq!(format!("{:.1e}", x), "1.2e+01");
//! ```

mod arith;
mod consts;
mod convert;
mod dec_impls;
mod decimal;
mod error;
mod fmt_dec;
mod parse;
mod radix;
mod transcendental;
mod var;

pub use crate::decimal::Decimal;
pub use crate::error::DecimalError;

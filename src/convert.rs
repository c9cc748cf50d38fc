//! Conversions between decimals and the primitive integer and float types.
//!
//! Float bridging always goes through the decimal text form: a float
//! becomes its shortest round-trip rendering and is then parsed, and a
//! decimal is formatted and then read with the float parser. That avoids
//! any platform-dependent behavior on magnitudes a native digit walk could
//! mishandle.

use std::convert::TryFrom;

use num_traits::{FromPrimitive, ToPrimitive};

use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::fmt_dec::get_str;
use crate::parse::set_from_str;
use crate::radix::{Digit, NBASE};
use crate::var::{DecimalVar, Sign};

/// Convert an `i64` into a working variable.
pub(crate) fn i64_to_var(val: i64) -> DecimalVar {
    if val == 0 {
        return DecimalVar::new();
    }

    let sign = if val < 0 { Sign::Neg } else { Sign::Pos };
    let mut uval = val.unsigned_abs();

    let mut digits: Vec<Digit> = Vec::new();
    while uval != 0 {
        digits.push((uval % NBASE as u64) as Digit);
        uval /= NBASE as u64;
    }
    digits.reverse();

    let weight = digits.len() as i32 - 1;
    DecimalVar::from_parts(sign, weight, 0, &digits)
}

/// Convert a variable to an `i64`, rounding to the nearest integer first.
/// Returns `None` on overflow. CAUTION: the variable is modified by the
/// rounding.
pub(crate) fn var_to_i64(var: &mut DecimalVar) -> Option<i64> {
    /* Round to the nearest integer */
    var.round(0);

    /* Check for zero input */
    var.strip();
    if var.ndigits == 0 {
        return Some(0);
    }

    /*
     * For input like 10000000000, the stripped trailing zero digits are
     * still significant, so the loop below assumes there are weight + 1
     * digits before the decimal point.
     */
    let weight = var.weight;
    debug_assert!(weight >= 0 && var.ndigits as i32 <= weight + 1);

    /*
     * Accumulate negatively, so that i64::MIN (whose magnitude a positive
     * accumulator cannot hold) still converts.
     */
    let neg = var.sign == Sign::Neg;
    let mut val = -i64::from(var.digit(0));
    for i in 1..=weight {
        val = val.checked_mul(i64::from(NBASE))?;
        if (i as usize) < var.ndigits {
            val = val.checked_sub(i64::from(var.digit(i as usize)))?;
        }
    }

    if neg {
        Some(val)
    } else {
        val.checked_neg()
    }
}

/// Convert a variable to an `f64` through its text form, ignoring any
/// precision loss. Magnitudes beyond the float range come back infinite.
pub(crate) fn var_to_f64(var: &DecimalVar) -> Result<f64, DecimalError> {
    let mut x = DecimalVar::new();
    x.assign(var);
    let dscale = x.dscale;
    get_str(&mut x, dscale)
        .parse::<f64>()
        .map_err(|_| DecimalError::InvalidArgument)
}

impl Decimal {
    pub(crate) fn from_i64_value(val: i64) -> Decimal {
        Decimal::from_var(&i64_to_var(val)).expect("an integer always fits the packed form")
    }

    /// Convert to `f64`. NaN maps to the float NaN; magnitudes beyond the
    /// float range come back infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_var::Decimal;
    ///
    /// let x: Decimal = "1.25".parse().unwrap();
    /// assert_eq!(x.to_f64(), 1.25);
    /// ```
    pub fn to_f64(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        let mut var = self.to_var();
        let dscale = var.dscale;
        get_str(&mut var, dscale)
            .parse()
            .expect("fixed notation is a valid float literal")
    }

    /// Convert to `f32`. NaN maps to the float NaN.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Decimal {
                fn from(val: $ty) -> Decimal {
                    Decimal::from_i64_value(i64::from(val))
                }
            }
        )+
    };
}

impl_from_int!(u8, i8, u16, i16, u32, i32, i64);

macro_rules! impl_try_into_int {
    ($ty:ty) => {
        impl TryFrom<&Decimal> for $ty {
            type Error = DecimalError;

            fn try_from(num: &Decimal) -> Result<$ty, DecimalError> {
                if num.is_nan() {
                    return Err(DecimalError::InvalidArgument);
                }
                let mut x = num.to_var();
                let val = var_to_i64(&mut x).ok_or(DecimalError::ValueOutOfRange)?;
                /* check the narrowing by converting the value back */
                <$ty>::try_from(val).map_err(|_| DecimalError::ValueOutOfRange)
            }
        }

        impl TryFrom<Decimal> for $ty {
            type Error = DecimalError;

            fn try_from(num: Decimal) -> Result<$ty, DecimalError> {
                <$ty>::try_from(&num)
            }
        }
    };
}

impl_try_into_int!(i32);
impl_try_into_int!(i64);

impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    /// Converts a finite or NaN float; infinities have no decimal form and
    /// are rejected.
    fn try_from(val: f64) -> Result<Decimal, DecimalError> {
        if val.is_nan() {
            return Ok(Decimal::nan());
        }
        if val.is_infinite() {
            return Err(DecimalError::InvalidArgument);
        }
        let rendered = val.to_string();
        let (var, consumed) = set_from_str(&rendered)?;
        debug_assert_eq!(consumed, rendered.len());
        Decimal::from_var(&var)
    }
}

impl TryFrom<f32> for Decimal {
    type Error = DecimalError;

    fn try_from(val: f32) -> Result<Decimal, DecimalError> {
        Decimal::try_from(f64::from(val))
    }
}

impl ToPrimitive for Decimal {
    fn to_i64(&self) -> Option<i64> {
        if self.is_nan() {
            return None;
        }
        var_to_i64(&mut self.to_var())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|val| u64::try_from(val).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Decimal::to_f64(self))
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Decimal::to_f32(self))
    }
}

impl FromPrimitive for Decimal {
    fn from_i64(n: i64) -> Option<Decimal> {
        Some(Decimal::from_i64_value(n))
    }

    fn from_u64(n: u64) -> Option<Decimal> {
        match i64::try_from(n) {
            Ok(val) => Some(Decimal::from_i64_value(val)),
            /* out of i64 range; go through the decimal text form */
            Err(_) => Decimal::parse(&n.to_string(), -1, -1).ok(),
        }
    }

    fn from_f64(n: f64) -> Option<Decimal> {
        Decimal::try_from(n).ok()
    }

    fn from_f32(n: f32) -> Option<Decimal> {
        Decimal::try_from(n).ok()
    }
}

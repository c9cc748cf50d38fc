//! The packed, immutable decimal type and its operations.

use std::cmp::Ordering;

use crate::arith::{ceil_var, div_var, floor_var, mod_var, mul_var, select_div_scale};
use crate::consts;
use crate::convert::var_to_f64;
use crate::error::DecimalError;
use crate::fmt_dec::{get_str, get_str_sci};
use crate::radix::{
    int_log10, Digit, DEC_DIGITS, MAX_DISPLAY_SCALE, MAX_PACKED_DSCALE, MAX_RESULT_SCALE,
    MIN_DISPLAY_SCALE, MIN_SIG_DIGITS,
};
use crate::transcendental::{exp_var, ln_var, log_var, power_var, sqrt_var};
use crate::var::{add_var, cmp_common, cmp_var, sub_var, DecimalVar, Sign};

/// An exact, arbitrary-precision decimal number.
///
/// A `Decimal` is either the special non-numeric token NaN or a signed
/// base-10000 number (the radix is a compile-time feature choice). Values
/// are immutable; every operation produces a fresh, normalized value with
/// no leading or trailing zero digits in storage.
///
/// NaN propagates through every operation: any NaN input yields a NaN
/// output. For comparisons, NaN is equal to NaN and greater than every
/// number, which makes the ordering total.
///
/// The display scale (the number of fractional digits shown by
/// [`std::fmt::Display`]) follows SQL numeric rules: addition keeps the
/// larger of the input scales, multiplication adds them, and inherently
/// inexact operations pick a scale that preserves at least 16 significant
/// digits.
///
/// # Examples
///
/// ```
/// use decimal_var::Decimal;
///
/// let a: Decimal = "1.13".parse().unwrap();
/// let b: Decimal = "0.1".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "1.23");
/// assert_eq!((&a * &b).to_string(), "0.113");
///
/// let third = a.checked_div(&b).unwrap();
/// assert_eq!(third.to_string(), "11.3000000000000000");
/// ```
#[derive(Clone, Debug)]
pub struct Decimal {
    sign: Sign,
    weight: i16,
    dscale: i16,
    digits: Box<[Digit]>,
}

impl Decimal {
    /// The non-numeric token.
    pub fn nan() -> Decimal {
        Decimal {
            sign: Sign::Nan,
            weight: 0,
            dscale: 0,
            digits: Box::from([]),
        }
    }

    /// True for the NaN token.
    pub fn is_nan(&self) -> bool {
        self.sign == Sign::Nan
    }

    /// The display scale: the number of fractional decimal digits carried
    /// for output.
    pub fn dscale(&self) -> u32 {
        self.dscale as u32
    }

    pub(crate) fn zero_value() -> Decimal {
        Decimal {
            sign: Sign::Pos,
            weight: 0,
            dscale: 0,
            digits: Box::from([]),
        }
    }

    /// Pack a working variable into the immutable form: strip leading and
    /// trailing zero digits, canonicalize zero, and bounds-check the
    /// header fields.
    pub(crate) fn from_var(var: &DecimalVar) -> Result<Decimal, DecimalError> {
        if var.is_nan() {
            return Ok(Decimal::nan());
        }

        let mut digits = var.digits();
        let mut weight = var.weight;

        /* truncate leading zeroes */
        while !digits.is_empty() && digits[0] == 0 {
            digits = &digits[1..];
            weight -= 1;
        }
        /* truncate trailing zeroes */
        let mut n = digits.len();
        while n > 0 && digits[n - 1] == 0 {
            n -= 1;
        }
        digits = &digits[..n];

        if var.dscale < 0 || var.dscale > MAX_PACKED_DSCALE {
            return Err(DecimalError::ValueOutOfRange);
        }

        /* a zero result forces weight 0 and positive sign */
        if digits.is_empty() {
            let mut result = Decimal::zero_value();
            result.dscale = var.dscale as i16;
            return Ok(result);
        }

        if weight < i32::from(i16::MIN) || weight > i32::from(i16::MAX) {
            return Err(DecimalError::ValueOutOfRange);
        }

        Ok(Decimal {
            sign: var.sign,
            weight: weight as i16,
            dscale: var.dscale as i16,
            digits: Box::from(digits),
        })
    }

    /// Unpack into a working variable, with an extra digit of space ahead
    /// of the value in case a rounding carry comes out of the top.
    pub(crate) fn to_var(&self) -> DecimalVar {
        DecimalVar::from_parts(
            self.sign,
            i32::from(self.weight),
            i32::from(self.dscale),
            &self.digits,
        )
    }

    pub(crate) fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Total-order comparison: NaN equals NaN and sorts above every
    /// number. `Ord` and the comparison operators go through this.
    pub(crate) fn cmp_value(&self, other: &Decimal) -> Ordering {
        if self.is_nan() {
            if other.is_nan() {
                Ordering::Equal /* NaN = NaN */
            } else {
                Ordering::Greater /* NaN > non-NaN */
            }
        } else if other.is_nan() {
            Ordering::Less /* non-NaN < NaN */
        } else {
            cmp_common(
                &self.digits,
                i32::from(self.weight),
                self.sign,
                &other.digits,
                i32::from(other.weight),
                other.sign,
            )
        }
    }

    /// Hash of the numeric value. dscale is deliberately left out so that
    /// values comparing equal (for instance `1.0` and `1.00`) hash alike.
    pub(crate) fn value_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;

        match self.sign {
            Sign::Nan => state.write_u8(2),
            Sign::Pos => state.write_u8(0),
            Sign::Neg => state.write_u8(1),
        }
        if !self.is_nan() {
            self.weight.hash(state);
            self.digits.hash(state);
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Decimal {
        if self.is_nan() {
            return Decimal::nan();
        }
        let mut result = self.clone();
        result.sign = Sign::Pos;
        result
    }

    /// The value itself, unchanged. Exists for symmetry with [`Decimal::abs`]
    /// and unary negation.
    pub fn plus(&self) -> Decimal {
        self.clone()
    }

    pub(crate) fn negated(&self) -> Decimal {
        if self.is_nan() {
            return Decimal::nan();
        }
        let mut result = self.clone();
        /* a zero keeps its positive sign */
        if !result.digits.is_empty() {
            result.sign = match result.sign {
                Sign::Pos => Sign::Neg,
                Sign::Neg => Sign::Pos,
                Sign::Nan => unreachable!(),
            };
        }
        result
    }

    /// -1, 0 or 1 by the sign of the value, as a decimal. NaN stays NaN.
    pub fn sign(&self) -> Decimal {
        if self.is_nan() {
            return Decimal::nan();
        }
        if self.digits.is_empty() {
            return Decimal::zero_value();
        }
        let mut result = Decimal::from(1);
        result.sign = self.sign;
        result
    }

    /// Round to `scale` digits after the decimal point, half away from
    /// zero, reporting overflow of the packed form instead of panicking.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when a carry past the top digit
    /// pushes the value out of the packed range.
    pub fn checked_round(&self, scale: i32) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }

        /* Limit the scale to avoid overflow in the computations below */
        let scale = scale.max(-MAX_RESULT_SCALE).min(MAX_RESULT_SCALE);

        let mut arg = self.to_var();
        arg.round(scale);

        /* a negative output dscale is not allowed */
        if scale < 0 {
            arg.dscale = 0;
        }

        Decimal::from_var(&arg)
    }

    /// Round to `scale` digits after the decimal point, half away from
    /// zero. A negative `scale` rounds left of the decimal point:
    /// `round("12.355", -1)` is 10.
    ///
    /// # Panics
    ///
    /// When the rounded value does not fit the packed representation; use
    /// [`Decimal::checked_round`] to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_var::Decimal;
    ///
    /// let x: Decimal = "12.355".parse().unwrap();
    /// assert_eq!(x.round(2).to_string(), "12.36");
    /// assert_eq!(x.round(-1).to_string(), "10");
    /// ```
    pub fn round(&self, scale: i32) -> Decimal {
        self.checked_round(scale)
            .expect("attempt to round with overflow")
    }

    /// Truncate towards zero at `scale` digits after the decimal point,
    /// reporting overflow of the packed form instead of panicking.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when the result does not fit the
    /// packed representation.
    pub fn checked_trunc(&self, scale: i32) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }

        let scale = scale.max(-MAX_RESULT_SCALE).min(MAX_RESULT_SCALE);

        let mut arg = self.to_var();
        arg.truncate(scale);

        if scale < 0 {
            arg.dscale = 0;
        }

        Decimal::from_var(&arg)
    }

    /// Truncate towards zero at `scale` digits after the decimal point.
    /// A negative `scale` truncates left of the decimal point.
    ///
    /// # Panics
    ///
    /// When the result does not fit the packed representation; use
    /// [`Decimal::checked_trunc`] to handle that case.
    pub fn trunc(&self, scale: i32) -> Decimal {
        self.checked_trunc(scale)
            .expect("attempt to truncate with overflow")
    }

    /// The smallest integer greater than or equal to the value, reporting
    /// overflow of the packed form instead of panicking.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when stepping up to the next
    /// integer pushes the value out of the packed range.
    pub fn checked_ceil(&self) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }
        Decimal::from_var(&ceil_var(&self.to_var()))
    }

    /// The smallest integer greater than or equal to the value.
    ///
    /// # Panics
    ///
    /// When the result does not fit the packed representation; use
    /// [`Decimal::checked_ceil`] to handle that case.
    pub fn ceil(&self) -> Decimal {
        self.checked_ceil().expect("attempt to ceil with overflow")
    }

    /// The largest integer less than or equal to the value, reporting
    /// overflow of the packed form instead of panicking.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when stepping down to the next
    /// integer pushes the value out of the packed range.
    pub fn checked_floor(&self) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }
        Decimal::from_var(&floor_var(&self.to_var()))
    }

    /// The largest integer less than or equal to the value.
    ///
    /// # Panics
    ///
    /// When the result does not fit the packed representation; use
    /// [`Decimal::checked_floor`] to handle that case.
    pub fn floor(&self) -> Decimal {
        self.checked_floor().expect("attempt to floor with overflow")
    }

    /// Add, reporting overflow of the packed form instead of panicking
    /// like the `+` operator does.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when the sum does not fit the
    /// packed representation, which can happen even for two individually
    /// valid operands near the weight limit.
    pub fn checked_add(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        Decimal::from_var(&add_var(&self.to_var(), &other.to_var()))
    }

    /// Subtract, reporting overflow of the packed form instead of
    /// panicking like the `-` operator does.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when the difference does not fit
    /// the packed representation.
    pub fn checked_sub(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        Decimal::from_var(&sub_var(&self.to_var(), &other.to_var()))
    }

    /// Multiply, reporting overflow of the packed form instead of
    /// panicking like the `*` operator does.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when the product does not fit the
    /// packed representation. The product's display scale is the sum of
    /// the operands' scales, so two operands with large display scales can
    /// overflow the packed scale even when both are individually valid.
    pub fn checked_mul(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        let a = self.to_var();
        let b = other.to_var();
        /*
         * Request an exact representation of the product; the result scale
         * is the sum of the input dscales.
         */
        Decimal::from_var(&mul_var(&a, &b, a.dscale + b.dscale))
    }

    /// Divide, selecting a result scale that keeps at least 16 significant
    /// digits. NaN operands yield NaN, even `NaN / 0`.
    ///
    /// # Errors
    ///
    /// [`DecimalError::DivisionByZero`] when `other` is zero, and
    /// [`DecimalError::ValueOutOfRange`] when the quotient does not fit
    /// the packed representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_var::Decimal;
    ///
    /// let one: Decimal = "1".parse().unwrap();
    /// let three: Decimal = "3".parse().unwrap();
    /// assert_eq!(
    ///     one.checked_div(&three).unwrap().to_string(),
    ///     "0.33333333333333333333",
    /// );
    /// ```
    pub fn checked_div(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        /* NaN propagation comes before the zero check: NaN / 0 is NaN */
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        let a = self.to_var();
        let b = other.to_var();
        let rscale = select_div_scale(&a, &b);
        let result = div_var(&a, &b, rscale, true)?;
        Decimal::from_var(&result)
    }

    /// Divide and truncate the quotient to an integer.
    ///
    /// # Errors
    ///
    /// [`DecimalError::DivisionByZero`] when `other` is zero, and
    /// [`DecimalError::ValueOutOfRange`] when the quotient does not fit
    /// the packed representation.
    pub fn div_trunc(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        let result = div_var(&self.to_var(), &other.to_var(), 0, false)?;
        Decimal::from_var(&result)
    }

    /// The remainder of truncated division: `self - div_trunc(self, other)
    /// * other`, with the sign of `self`.
    ///
    /// # Errors
    ///
    /// [`DecimalError::DivisionByZero`] when `other` is zero, and
    /// [`DecimalError::ValueOutOfRange`] when the remainder does not fit
    /// the packed representation.
    pub fn checked_rem(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        let result = mod_var(&self.to_var(), &other.to_var())?;
        Decimal::from_var(&result)
    }

    /// The square root, with at least 16 significant digits.
    ///
    /// # Errors
    ///
    /// [`DecimalError::InvalidArgument`] for a negative argument.
    pub fn sqrt(&self) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }

        let arg = self.to_var();

        /* Assume the input was normalized, so the weight is accurate */
        let sweight = (arg.weight + 1) * DEC_DIGITS / 2 - 1;

        let mut rscale = MIN_SIG_DIGITS - sweight;
        rscale = rscale.max(arg.dscale);
        rscale = rscale.max(MIN_DISPLAY_SCALE);
        rscale = rscale.min(MAX_DISPLAY_SCALE);

        let result = sqrt_var(&arg, rscale)?;
        Decimal::from_var(&result)
    }

    /// e raised to this value, with at least 16 significant digits.
    ///
    /// # Errors
    ///
    /// [`DecimalError::ValueOutOfRange`] when the result would be
    /// astronomically large.
    pub fn exp(&self) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }

        let arg = self.to_var();

        /* convert the input to a float, ignoring overflow */
        let mut val = var_to_f64(&arg)?;

        /*
         * log10(result) = val * log10(e), so this approximates the decimal
         * weight of the result:
         */
        val *= 0.434294481903252;

        /* limit to something that won't cause integer overflow */
        val = val.max(f64::from(-MAX_RESULT_SCALE));
        val = val.min(f64::from(MAX_RESULT_SCALE));

        let mut rscale = MIN_SIG_DIGITS - val as i32;
        rscale = rscale.max(arg.dscale);
        rscale = rscale.max(MIN_DISPLAY_SCALE);
        rscale = rscale.min(MAX_DISPLAY_SCALE);

        let result = exp_var(&arg, rscale)?;
        Decimal::from_var(&result)
    }

    /// The natural logarithm.
    ///
    /// # Errors
    ///
    /// [`DecimalError::InvalidArgument`] for an argument that is zero or
    /// negative.
    pub fn ln(&self) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }

        let arg = self.to_var();

        /* Approximate decimal digits before the decimal point */
        let dec_digits = (arg.weight + 1) * DEC_DIGITS;

        let mut rscale = if dec_digits > 1 {
            MIN_SIG_DIGITS - int_log10(dec_digits - 1)
        } else if dec_digits < 1 {
            MIN_SIG_DIGITS - int_log10(1 - dec_digits)
        } else {
            MIN_SIG_DIGITS
        };
        rscale = rscale.max(arg.dscale);
        rscale = rscale.max(MIN_DISPLAY_SCALE);
        rscale = rscale.min(MAX_DISPLAY_SCALE);

        let result = ln_var(&arg, rscale)?;
        Decimal::from_var(&result)
    }

    /// The base-10 logarithm.
    ///
    /// # Errors
    ///
    /// [`DecimalError::InvalidArgument`] for an argument that is zero or
    /// negative.
    pub fn log10(&self) -> Result<Decimal, DecimalError> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }

        let result = log_var(&consts::TEN, &self.to_var())?;
        Decimal::from_var(&result)
    }

    /// `self` raised to the power `exp`. Integral exponents that fit an
    /// `i32` use exact binary exponentiation; everything else goes through
    /// `exp(exp * ln(self))`. By convention `0^0 = 1`.
    ///
    /// # Errors
    ///
    /// [`DecimalError::InvalidArgument`] for zero raised to a negative
    /// power, or a negative base raised to a non-integral power.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_var::Decimal;
    ///
    /// let two: Decimal = "2".parse().unwrap();
    /// let thirtyone: Decimal = "31".parse().unwrap();
    /// assert_eq!(
    ///     two.power(&thirtyone).unwrap().to_string(),
    ///     "2147483648.0000000000000000",
    /// );
    /// ```
    pub fn power(&self, exp: &Decimal) -> Result<Decimal, DecimalError> {
        if self.is_nan() || exp.is_nan() {
            return Ok(Decimal::nan());
        }

        let base = self.to_var();
        let exp = exp.to_var();

        let mut exp_trunc = DecimalVar::new();
        exp_trunc.assign(&exp);
        exp_trunc.truncate(0);

        /*
         * 0 ^ negative is an invalid argument, not a division by zero, and
         * a negative base demands an integral exponent.
         */
        if cmp_var(&base, &consts::ZERO) == Ordering::Equal
            && cmp_var(&exp, &consts::ZERO) == Ordering::Less
        {
            return Err(DecimalError::InvalidArgument);
        }
        if cmp_var(&base, &consts::ZERO) == Ordering::Less
            && cmp_var(&exp, &exp_trunc) != Ordering::Equal
        {
            return Err(DecimalError::InvalidArgument);
        }

        let result = power_var(&base, &exp)?;
        Decimal::from_var(&result)
    }

    /// Fixed-notation string with exactly `scale` fractional digits;
    /// `scale = -1` uses the stored display scale.
    pub fn to_fixed_string(&self, scale: i32) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }
        let mut var = self.to_var();
        let scale = if scale < 0 { var.dscale } else { scale };
        get_str(&mut var, scale)
    }

    /// Scientific-notation string with `scale` fractional digits in the
    /// significand; `scale = -1` uses the stored display scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_var::Decimal;
    ///
    /// let x: Decimal = "0.12".parse().unwrap();
    /// assert_eq!(x.to_sci_string(1), "1.2e-01");
    /// ```
    pub fn to_sci_string(&self, scale: i32) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }
        let mut var = self.to_var();
        let scale = if scale < 0 { var.dscale } else { scale };
        get_str_sci(&mut var, scale, 'e')
    }
}

#[cfg(test)]
mod test {
    use crate::decimal::Decimal;
    use crate::error::DecimalError;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s, -1, -1).unwrap()
    }

    fn fix(x: &Decimal) -> String {
        x.to_fixed_string(-1)
    }

    #[test]
    fn abs() {
        assert_eq!(fix(&dec("-7.5").abs()), "7.5");
        assert_eq!(fix(&dec("7.5").abs()), "7.5");
        assert_eq!(fix(&dec("0.0").abs()), "0.0");
        assert!(dec("NaN").abs().is_nan());
    }

    #[test]
    fn negation() {
        assert_eq!(fix(&-dec("-7.5")), "7.5");
        assert_eq!(fix(&-dec("7.5")), "-7.5");
        assert_eq!(fix(&-dec("0.0")), "0.0");
        assert!((-dec("NaN")).is_nan());
    }

    #[test]
    fn plus_is_identity() {
        assert_eq!(fix(&dec("-7.5").plus()), "-7.5");
        assert_eq!(fix(&dec("7.5").plus()), "7.5");
        assert!(dec("NaN").plus().is_nan());
    }

    #[test]
    fn sign() {
        assert_eq!(fix(&dec("-7.5").sign()), "-1");
        assert_eq!(fix(&dec("7.5").sign()), "1");
        assert_eq!(fix(&dec("0.0").sign()), "0");
        assert!(dec("NaN").sign().is_nan());
    }

    #[test]
    fn round() {
        assert_eq!(fix(&dec("12.345").round(1)), "12.3");
        assert_eq!(fix(&dec("12.3449").round(2)), "12.34");
        assert_eq!(fix(&dec("12.345").round(2)), "12.35");
        assert_eq!(fix(&dec("12.355").round(2)), "12.36");
        assert_eq!(fix(&dec("12.355").round(0)), "12");
        assert_eq!(fix(&dec("12.355").round(-1)), "10");
        assert_eq!(fix(&dec("-12.345").round(1)), "-12.3");
        assert_eq!(fix(&dec("-12.3449").round(2)), "-12.34");
        assert_eq!(fix(&dec("-12.345").round(2)), "-12.35");
        assert_eq!(fix(&dec("-12.355").round(2)), "-12.36");
        assert_eq!(fix(&dec("-12.355").round(0)), "-12");
        assert_eq!(fix(&dec("-12.355").round(-1)), "-10");
        assert!(dec("NaN").round(1).is_nan());
    }

    #[test]
    fn round_widens_scale() {
        // rounding to a larger scale only changes the display scale
        assert_eq!(fix(&dec("12.3").round(3)), "12.300");
    }

    #[test]
    fn checked_arithmetic_overflow() {
        // each operand is individually valid; the sum's weight is not
        let big = dec(&format!("9999{}", "0".repeat(131068)));
        assert_eq!(big.checked_add(&big), Err(DecimalError::ValueOutOfRange));
        assert_eq!(
            big.checked_sub(&-big.clone()),
            Err(DecimalError::ValueOutOfRange)
        );

        // the product's display scale exceeds what the packed form carries
        let tiny = dec(&format!("0.{}1", "0".repeat(8999)));
        assert_eq!(tiny.checked_mul(&tiny), Err(DecimalError::ValueOutOfRange));

        // in-range values come through the checked forms unchanged
        assert_eq!(
            dec("1.13").checked_add(&dec("0.1")).unwrap().to_string(),
            "1.23"
        );
        assert_eq!(
            dec("1.13").checked_sub(&dec("0.1")).unwrap().to_string(),
            "1.03"
        );
        assert_eq!(
            dec("1.13").checked_mul(&dec("1.1")).unwrap().to_string(),
            "1.243"
        );
    }

    #[test]
    fn checked_rounding_overflow() {
        // a carry out of the top digit can push the weight past the
        // packed bound
        let nines = dec(&"9".repeat(131072));
        assert_eq!(
            nines.checked_round(-2000),
            Err(DecimalError::ValueOutOfRange)
        );
        assert_eq!(
            dec(&format!("{}.5", "9".repeat(131072))).checked_ceil(),
            Err(DecimalError::ValueOutOfRange)
        );
        assert_eq!(
            dec(&format!("-{}.5", "9".repeat(131072))).checked_floor(),
            Err(DecimalError::ValueOutOfRange)
        );
        // truncation never grows the value
        assert_eq!(nines.checked_trunc(0).unwrap(), nines);

        assert_eq!(dec("12.355").checked_round(2).unwrap().to_string(), "12.36");
        assert_eq!(dec("12.355").checked_trunc(2).unwrap().to_string(), "12.35");
        assert_eq!(dec("12.345").checked_ceil().unwrap().to_string(), "13");
        assert_eq!(dec("12.345").checked_floor().unwrap().to_string(), "12");
    }

    #[test]
    fn round_sets_dscale() {
        assert_eq!(dec("12.345").round(2).dscale(), 2);
        assert_eq!(dec("12.345").round(0).dscale(), 0);
        // negative scales never produce a negative display scale
        assert_eq!(dec("12.355").round(-1).dscale(), 0);
        assert_eq!(dec("0.5").trunc(3).dscale(), 3);
    }

    #[test]
    fn transcendental_identities() {
        let tolerance = dec("0.0000000001");

        let two = dec("2");
        let there_and_back = two.ln().unwrap().exp().unwrap();
        assert!((there_and_back - &two).abs() <= tolerance);

        let root = dec("2").sqrt().unwrap();
        assert!((&(&root * &root) - &two).abs() <= tolerance);

        // power agrees with repeated multiplication for small exponents
        let b = dec("1.5");
        let cube = b.power(&dec("3")).unwrap();
        assert_eq!(cube, &(&b * &b) * &b);
    }

    #[test]
    fn trunc() {
        assert_eq!(fix(&dec("12.345").trunc(1)), "12.3");
        assert_eq!(fix(&dec("12.3449").trunc(2)), "12.34");
        assert_eq!(fix(&dec("12.345").trunc(2)), "12.34");
        assert_eq!(fix(&dec("12.355").trunc(2)), "12.35");
        assert_eq!(fix(&dec("12.355").trunc(0)), "12");
        assert_eq!(fix(&dec("12.355").trunc(-1)), "10");
        assert_eq!(fix(&dec("-12.345").trunc(1)), "-12.3");
        assert_eq!(fix(&dec("-12.3449").trunc(2)), "-12.34");
        assert_eq!(fix(&dec("-12.345").trunc(2)), "-12.34");
        assert_eq!(fix(&dec("-12.355").trunc(2)), "-12.35");
        assert_eq!(fix(&dec("-12.355").trunc(0)), "-12");
        assert_eq!(fix(&dec("-12.355").trunc(-1)), "-10");
        assert!(dec("NaN").trunc(1).is_nan());
    }

    #[test]
    fn ceil() {
        assert_eq!(fix(&dec("12.345").ceil()), "13");
        assert_eq!(fix(&dec("1.0").ceil()), "1");
        assert_eq!(fix(&dec("0.01").ceil()), "1");
        assert_eq!(fix(&dec("0").ceil()), "0");
        assert_eq!(fix(&dec("-0.01").ceil()), "0");
        assert_eq!(fix(&dec("-12.345").ceil()), "-12");
        assert!(dec("NaN").ceil().is_nan());
    }

    #[test]
    fn floor() {
        assert_eq!(fix(&dec("12.345").floor()), "12");
        assert_eq!(fix(&dec("1.0").floor()), "1");
        assert_eq!(fix(&dec("0.01").floor()), "0");
        assert_eq!(fix(&dec("0").floor()), "0");
        assert_eq!(fix(&dec("-0.01").floor()), "-1");
        assert_eq!(fix(&dec("-12.345").floor()), "-13");
        assert!(dec("NaN").floor().is_nan());
    }

    #[test]
    fn add() {
        assert_eq!(fix(&(dec("1.13") + dec("0.1"))), "1.23");
        assert_eq!(fix(&(dec("1.13") + dec("-1.13"))), "0.00");
        assert_eq!(fix(&(dec("1.13") + dec("-1.03"))), "0.10");
        assert_eq!(fix(&(dec("0.1") + dec("1.13"))), "1.23");
        assert_eq!(fix(&(dec("1.13") + dec("-0.1"))), "1.03");
        assert!((dec("1.13") + dec("NaN")).is_nan());
        assert!((dec("NaN") + dec("1.13")).is_nan());
    }

    #[test]
    fn sub() {
        assert_eq!(fix(&(dec("1.13") - dec("0.1"))), "1.03");
        assert_eq!(fix(&(dec("1.13") - dec("1.13"))), "0.00");
        assert_eq!(fix(&(dec("1.13") - dec("1.03"))), "0.10");
        assert_eq!(fix(&(dec("0.1") - dec("1.13"))), "-1.03");
        assert_eq!(fix(&(dec("1.13") - dec("-0.1"))), "1.23");
        assert!((dec("1.13") - dec("NaN")).is_nan());
        assert!((dec("NaN") - dec("1.13")).is_nan());
    }

    #[test]
    fn mul() {
        assert_eq!(fix(&(dec("1.13") * dec("1.0"))), "1.130");
        assert_eq!(fix(&(dec("1.13") * dec("0.1"))), "0.113");
        assert_eq!(fix(&(dec("1.13") * dec("1.1"))), "1.243");
        assert_eq!(fix(&(dec("12.3") * dec("-4.56"))), "-56.088");
        assert!((dec("1.13") * dec("NaN")).is_nan());
        assert!((dec("NaN") * dec("1.13")).is_nan());
    }

    #[test]
    fn div() {
        let div = |a: &str, b: &str| dec(a).checked_div(&dec(b));
        assert_eq!(fix(&div("1.13", "1.0").unwrap()), "1.13000000000000000000");
        assert_eq!(fix(&div("1.13", "0.1").unwrap()), "11.3000000000000000");
        assert_eq!(fix(&div("1.243", "1.1").unwrap()), "1.13000000000000000000");
        assert_eq!(fix(&div("1.243", "0.2").unwrap()), "6.2150000000000000");
        assert_eq!(fix(&div("1", "3").unwrap()), "0.33333333333333333333");
        assert_eq!(fix(&div("2", "3").unwrap()), "0.66666666666666666667");
        assert_eq!(div("1.243", "0"), Err(DecimalError::DivisionByZero));
        assert!(div("1.13", "NaN").unwrap().is_nan());
        assert!(div("NaN", "1.13").unwrap().is_nan());
        // NaN propagation wins over the zero check
        assert!(div("NaN", "0").unwrap().is_nan());
    }

    #[test]
    fn div_trunc() {
        let div = |a: &str, b: &str| dec(a).div_trunc(&dec(b));
        assert_eq!(fix(&div("1.13", "1.0").unwrap()), "1");
        assert_eq!(fix(&div("1.13", "0.1").unwrap()), "11");
        assert_eq!(fix(&div("1.243", "1.1").unwrap()), "1");
        assert_eq!(fix(&div("1.243", "0.2").unwrap()), "6");
        assert_eq!(fix(&div("1", "3").unwrap()), "0");
        assert_eq!(fix(&div("2", "3").unwrap()), "0");
        assert_eq!(fix(&div("10", "3").unwrap()), "3");
        assert_eq!(fix(&div("20", "3").unwrap()), "6");
        assert_eq!(fix(&div("5", "2").unwrap()), "2");
        assert_eq!(div("1.243", "0"), Err(DecimalError::DivisionByZero));
        assert!(div("1.13", "NaN").unwrap().is_nan());
        assert!(div("NaN", "1.13").unwrap().is_nan());
    }

    #[test]
    fn modulo() {
        let rem = |a: &str, b: &str| dec(a).checked_rem(&dec(b));
        assert_eq!(fix(&rem("1.13", "1.0").unwrap()), "0.13");
        assert_eq!(fix(&rem("1.13", "0.1").unwrap()), "0.03");
        assert_eq!(fix(&rem("1.243", "1.1").unwrap()), "0.143");
        assert_eq!(fix(&rem("1.243", "0.2").unwrap()), "0.043");
        assert_eq!(fix(&rem("1", "3").unwrap()), "1");
        assert_eq!(fix(&rem("2", "3").unwrap()), "2");
        assert_eq!(fix(&rem("5", "2").unwrap()), "1");
        assert_eq!(rem("1.243", "0"), Err(DecimalError::DivisionByZero));
        assert!(rem("1.13", "NaN").unwrap().is_nan());
        assert!(rem("NaN", "1.13").unwrap().is_nan());
    }

    #[test]
    fn min_max() {
        let min = |a: &str, b: &str| fix(&dec(a).min(dec(b)));
        let max = |a: &str, b: &str| fix(&dec(a).max(dec(b)));
        assert_eq!(min("1.13", "1.0"), "1.0");
        assert_eq!(min("1.13", "0.1"), "0.1");
        assert_eq!(min("1.243", "1.1"), "1.1");
        assert_eq!(min("-1.243", "0.2"), "-1.243");
        assert_eq!(min("1.13", "NaN"), "1.13");
        assert_eq!(min("NaN", "1.13"), "1.13");
        assert_eq!(max("1.13", "1.0"), "1.13");
        assert_eq!(max("1.13", "0.1"), "1.13");
        assert_eq!(max("1.243", "1.1"), "1.243");
        assert_eq!(max("-1.243", "0.2"), "0.2");
        assert_eq!(max("1.13", "NaN"), "NaN");
        assert_eq!(max("NaN", "1.13"), "NaN");
    }

    #[test]
    fn sqrt() {
        assert_eq!(fix(&dec("1").sqrt().unwrap()), "1.000000000000000");
        assert_eq!(dec("-1").sqrt(), Err(DecimalError::InvalidArgument));
        assert_eq!(fix(&dec("0").sqrt().unwrap()), "0.000000000000000");
        assert_eq!(fix(&dec("4").sqrt().unwrap()), "2.000000000000000");
        assert_eq!(fix(&dec("9").sqrt().unwrap()), "3.000000000000000");
        assert_eq!(fix(&dec("2").sqrt().unwrap()), "1.414213562373095");
        assert_eq!(fix(&dec("0.1").sqrt().unwrap()), "0.31622776601683793");
        assert_eq!(fix(&dec("1.1").sqrt().unwrap()), "1.048808848170152");
        assert!(dec("NaN").sqrt().unwrap().is_nan());
    }

    #[test]
    fn exp() {
        assert_eq!(fix(&dec("0").exp().unwrap()), "1.0000000000000000");
        assert_eq!(fix(&dec("1").exp().unwrap()), "2.7182818284590452");
        assert_eq!(fix(&dec("0.693147181").exp().unwrap()), "2.0000000008801094");
        assert_eq!(fix(&dec("10").exp().unwrap()), "22026.465794806717");
        assert_eq!(fix(&dec("-1").exp().unwrap()), "0.3678794411714423");
        assert_eq!(fix(&dec("-10").exp().unwrap()), "0.00004539992976248485");
        assert_eq!(dec("100000000").exp(), Err(DecimalError::ValueOutOfRange));
        assert!(dec("NaN").exp().unwrap().is_nan());
    }

    #[test]
    fn ln() {
        assert_eq!(fix(&dec("1").ln().unwrap()), "0.0000000000000000");
        assert_eq!(fix(&dec("1.5").ln().unwrap()), "0.4054651081081644");
        assert_eq!(fix(&dec("2").ln().unwrap()), "0.6931471805599453");
        assert_eq!(
            fix(&dec("2.718281828459045").ln().unwrap()),
            "0.9999999999999999"
        );
        assert_eq!(
            fix(&dec("2.718281828459046").ln().unwrap()),
            "1.0000000000000003"
        );
        assert_eq!(
            fix(&dec("2.718281828459047").ln().unwrap()),
            "1.0000000000000006"
        );
        assert_eq!(fix(&dec("10").ln().unwrap()), "2.3025850929940457");
        assert_eq!(fix(&dec("10.5").ln().unwrap()), "2.3513752571634777");
        assert_eq!(fix(&dec("9999").ln().unwrap()), "9.2102403669758494");
        assert_eq!(
            fix(&dec("0.99999991000000405").ln().unwrap()),
            "-0.00000009000000000"
        );
        assert_eq!(
            fix(&dec("9.99999999999266E+999").ln().unwrap()),
            "2302.58509299404495"
        );
        assert_eq!(dec("0").ln(), Err(DecimalError::InvalidArgument));
        assert_eq!(dec("-1").ln(), Err(DecimalError::InvalidArgument));
        assert!(dec("NaN").ln().unwrap().is_nan());
    }

    #[test]
    fn log10() {
        assert_eq!(fix(&dec("0.001").log10().unwrap()), "-3.0000000000000000");
        assert_eq!(fix(&dec("1").log10().unwrap()), "0.00000000000000000000");
        assert_eq!(
            fix(&dec("1.5").log10().unwrap()),
            "0.17609125905568124208"
        );
        assert_eq!(fix(&dec("2").log10().unwrap()), "0.30102999566398119521");
        assert_eq!(fix(&dec("10").log10().unwrap()), "1.00000000000000000000");
        assert_eq!(
            fix(&dec("10.5").log10().unwrap()),
            "1.02118929906993807279"
        );
        assert_eq!(fix(&dec("70").log10().unwrap()), "1.8450980400142568");
        assert_eq!(fix(&dec("9999").log10().unwrap()), "3.9999565683801925");
        assert_eq!(dec("0").log10(), Err(DecimalError::InvalidArgument));
        assert_eq!(dec("-1").log10(), Err(DecimalError::InvalidArgument));
        assert!(dec("NaN").log10().unwrap().is_nan());
    }

    #[test]
    fn power() {
        let pow = |a: &str, b: &str| fix(&dec(a).power(&dec(b)).unwrap());
        assert_eq!(pow("0", "0"), "1.0000000000000000");
        assert_eq!(pow("0", "1"), "0.0000000000000000");
        assert_eq!(pow("0", "2"), "0.0000000000000000");
        assert_eq!(pow("1", "0"), "1.0000000000000000");
        assert_eq!(pow("1", "1"), "1.0000000000000000");
        assert_eq!(pow("1", "2"), "1.0000000000000000");
        assert_eq!(pow("2", "0"), "1.0000000000000000");
        assert_eq!(pow("2", "1"), "2.0000000000000000");
        assert_eq!(pow("2", "2"), "4.0000000000000000");
        assert_eq!(pow("2", "3"), "8.0000000000000000");
        assert_eq!(pow("2", "4"), "16.0000000000000000");
        assert_eq!(pow("2", "5"), "32.0000000000000000");
        assert_eq!(pow("2", "31"), "2147483648.0000000000000000");
        assert_eq!(pow("2", "32"), "4294967296.0000000000000000");
        assert_eq!(pow("10", "0"), "1.0000000000000000");
        assert_eq!(pow("10", "1"), "10.0000000000000000");
        assert_eq!(pow("10", "2"), "100.0000000000000000");
        assert_eq!(pow("10", "5"), "100000.0000000000000000");
        assert_eq!(pow("10", "8"), "100000000.0000000000000000");
        assert_eq!(pow("0.1", "0"), "1.0000000000000000");
        assert_eq!(pow("0.1", "1"), "0.1000000000000000");
        assert_eq!(pow("0.1", "2"), "0.0100000000000000");
        assert_eq!(pow("0.1", "3"), "0.0010000000000000");
        assert_eq!(pow("0.1", "6"), "0.0000010000000000");
        assert_eq!(pow("1", "-1"), "1.0000000000000000");
        assert_eq!(pow("3", "-1"), "0.3333333333333333");
        assert_eq!(pow("1.2", "0.003"), "1.0005471142828335");
        assert_eq!(pow("71", "1.2"), "166.53672446385521");
        assert_eq!(pow("10E-19", "0.5"), "0.0000000010000000000000000");
        assert!(dec("1.13").power(&dec("NaN")).unwrap().is_nan());
        assert!(dec("NaN").power(&dec("1.13")).unwrap().is_nan());
    }

    #[test]
    fn power_domain_errors() {
        assert_eq!(
            dec("0").power(&dec("-1")),
            Err(DecimalError::InvalidArgument)
        );
        assert_eq!(
            dec("-2").power(&dec("0.5")),
            Err(DecimalError::InvalidArgument)
        );
        // a negative base with an integral exponent is fine
        assert_eq!(fix(&dec("-2").power(&dec("3")).unwrap()), "-8.0000000000000000");
    }

    #[test]
    fn power_tiny_exponents() {
        let pow = |a: &str, b: &str| fix(&dec(a).power(&dec(b)).unwrap());
        assert_eq!(
            pow("1.000001", "1e-101"),
            format!("1.{}", "0".repeat(101))
        );
        assert_eq!(pow("1.000001", "1e-95"), format!("1.{}", "0".repeat(95)));
        assert_eq!(
            pow("0.9999999", "1e-101"),
            format!("1.{}", "0".repeat(101))
        );
        assert_eq!(pow("0.9999999", "1e-95"), format!("1.{}", "0".repeat(95)));
    }
}

//! String-to-decimal conversion.

use std::str::FromStr;

use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::radix::{int_log10, Digit, DEC_DIGITS, MAX_PRECISION};
use crate::var::{DecimalVar, Sign};

/// Parse a number from the start of `input` and return it together with the
/// byte position just past what was consumed, so the caller can check for
/// trailing garbage. The grammar is
///
/// ```text
/// [+|-] (digit+ ['.' digit*] | '.' digit+) [(e|E) [+|-] digit+]
/// ```
///
/// Leading and trailing spaces and the `NaN` token are handled by the
/// caller, not here.
pub(crate) fn set_from_str(input: &str) -> Result<(DecimalVar, usize), DecimalError> {
    let bytes = input.as_bytes();
    let mut cp = 0;

    /*
     * First pass the string to extract the decimal digits and determine the
     * correct decimal weight, then convert to NBASE representation.
     */
    let mut sign = Sign::Pos;
    match bytes.first() {
        Some(b'+') => cp += 1,
        Some(b'-') => {
            sign = Sign::Neg;
            cp += 1;
        }
        _ => {}
    }

    let mut have_dp = false;
    if bytes.get(cp) == Some(&b'.') {
        have_dp = true;
        cp += 1;
    }

    if !matches!(bytes.get(cp), Some(b'0'..=b'9')) {
        return Err(DecimalError::InvalidArgument);
    }

    /* leading padding for digit alignment later */
    let mut decdigits = Vec::with_capacity(bytes.len() + 2 * DEC_DIGITS as usize);
    decdigits.resize(DEC_DIGITS as usize, 0u8);

    let mut dweight: i32 = -1;
    let mut dscale: i32 = 0;

    while let Some(&ch) = bytes.get(cp) {
        if ch.is_ascii_digit() {
            decdigits.push(ch - b'0');
            cp += 1;
            if !have_dp {
                dweight += 1;
            } else {
                dscale += 1;
            }
        } else if ch == b'.' {
            if have_dp {
                return Err(DecimalError::InvalidArgument);
            }
            have_dp = true;
            cp += 1;
        } else {
            break;
        }
    }

    let ddigits = decdigits.len() as i32 - DEC_DIGITS;
    /* trailing padding for digit alignment later */
    decdigits.resize(decdigits.len() + (DEC_DIGITS - 1) as usize, 0);

    /* Handle the exponent, if any */
    if matches!(bytes.get(cp), Some(b'e') | Some(b'E')) {
        cp += 1;
        let estart = cp;
        if matches!(bytes.get(cp), Some(b'+') | Some(b'-')) {
            cp += 1;
        }
        let dstart = cp;
        while matches!(bytes.get(cp), Some(b'0'..=b'9')) {
            cp += 1;
        }
        if cp == dstart {
            return Err(DecimalError::InvalidArgument);
        }
        let exponent = input[estart..cp]
            .parse::<i64>()
            .map_err(|_| DecimalError::InvalidArgument)?;
        if exponent > i64::from(MAX_PRECISION) || exponent < -i64::from(MAX_PRECISION) {
            return Err(DecimalError::InvalidArgument);
        }
        dweight += exponent as i32;
        dscale -= exponent as i32;
        if dscale < 0 {
            dscale = 0;
        }
    }

    /*
     * Convert the pure-decimal representation to base NBASE. First figure
     * the converted weight and ndigits; offset is the number of decimal
     * zeroes to insert before the first given digit so the first NBASE
     * digit comes out correctly aligned.
     */
    let weight = if dweight >= 0 {
        (dweight + 1 + DEC_DIGITS - 1) / DEC_DIGITS - 1
    } else {
        -((-dweight - 1) / DEC_DIGITS + 1)
    };
    let offset = (weight + 1) * DEC_DIGITS - (dweight + 1);
    let ndigits = (ddigits + offset + DEC_DIGITS - 1) / DEC_DIGITS;

    let mut dest = DecimalVar::new();
    dest.alloc(ndigits as usize);
    dest.sign = sign;
    dest.weight = weight;
    dest.dscale = dscale;

    let mut i = (DEC_DIGITS - offset) as usize;
    {
        let digits = dest.digits_mut();
        for dig in digits.iter_mut() {
            let mut acc: i32 = 0;
            for &dec in &decdigits[i..i + DEC_DIGITS as usize] {
                acc = acc * 10 + i32::from(dec);
            }
            *dig = acc as Digit;
            i += DEC_DIGITS as usize;
        }
    }

    /* Strip any leading/trailing zeroes, and normalize the weight if zero */
    dest.strip();

    Ok((dest, cp))
}

/// Round to `scale` and verify the value fits `precision` total decimal
/// digits. A negative `precision` means unconstrained.
pub(crate) fn check_bounds_and_round(
    var: &mut DecimalVar,
    precision: i32,
    scale: i32,
) -> Result<(), DecimalError> {
    /* Do nothing if we have a default precision (-1) */
    if precision < 0 {
        return Ok(());
    }

    let maxdigits = precision - scale;

    /* Round to the target scale (and set the dscale) */
    var.round(scale);

    /*
     * Check for overflow. This cannot be done before rounding, because
     * rounding could raise the weight; and the weight could be inflated by
     * leading zeroes that have not been stripped yet, so a true zero must
     * be recognized here too.
     */
    let mut ddigits = (var.weight + 1) * DEC_DIGITS;
    if ddigits > maxdigits {
        for i in 0..var.ndigits {
            let dig = i32::from(var.digit(i));
            if dig != 0 {
                /* Adjust for any high-order decimal zero digits */
                ddigits -= DEC_DIGITS - 1 - int_log10(dig);
                if ddigits > maxdigits {
                    return Err(DecimalError::ValueOutOfRange);
                }
                break;
            }
            ddigits -= DEC_DIGITS;
        }
    }
    Ok(())
}

impl Decimal {
    /// Parse a decimal from a string.
    ///
    /// Leading and trailing whitespace is ignored, and `NaN` is accepted
    /// case-insensitively. With a non-negative `precision` the value is
    /// rounded to `scale` fractional digits and must fit in `precision`
    /// total decimal digits; `precision = -1` leaves the value as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use decimal_var::Decimal;
    ///
    /// let x = Decimal::parse("12.345", -1, -1).unwrap();
    /// assert_eq!(x.to_string(), "12.345");
    ///
    /// let rounded = Decimal::parse("12.345", 4, 2).unwrap();
    /// assert_eq!(rounded.to_string(), "12.35");
    ///
    /// assert!(Decimal::parse("123.45", 4, 2).is_err());
    /// ```
    pub fn parse(s: &str, precision: i32, scale: i32) -> Result<Decimal, DecimalError> {
        let cp = s.trim_start();

        /* Check for NaN */
        if let Some(prefix) = cp.get(..3) {
            if prefix.eq_ignore_ascii_case("nan") {
                /* there should be nothing left but spaces */
                if !cp[3..].chars().all(char::is_whitespace) {
                    return Err(DecimalError::InvalidArgument);
                }
                return Ok(Decimal::nan());
            }
        }

        let (mut value, consumed) = set_from_str(cp)?;

        /*
         * Report any trailing junk before any semantic error from the
         * bounds check; check_bounds_and_round must not see a NaN, which
         * is why the token was handled separately above.
         */
        if !cp[consumed..].chars().all(char::is_whitespace) {
            return Err(DecimalError::InvalidArgument);
        }

        check_bounds_and_round(&mut value, precision, scale)?;

        Decimal::from_var(&value)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Decimal, DecimalError> {
        Decimal::parse(s, -1, -1)
    }
}

//! Decimal-to-string conversion, fixed and scientific.

use std::fmt::{Display, Formatter, LowerExp, UpperExp};

use crate::arith::div_var;
use crate::convert::i64_to_var;
use crate::decimal::Decimal;
use crate::radix::{int_log10, DEC_DIGITS, POW10};
use crate::transcendental::power_var_int;
use crate::var::{DecimalVar, Sign};

/// Render `var` in fixed notation with exactly `dscale` digits after the
/// decimal point. CAUTION: the variable is modified by rounding.
pub(crate) fn get_str(var: &mut DecimalVar, dscale: i32) -> String {
    let dscale = dscale.max(0);

    /* Round up before printing, if needed */
    var.round(dscale);

    /*
     * i is the number of decimal digits before the decimal point; we may
     * generate as many as DEC_DIGITS - 1 excess digits at the end, plus
     * room for the sign and the decimal point.
     */
    let i = ((var.weight + 1) * DEC_DIGITS).max(1);
    let mut s = String::with_capacity((i + dscale + DEC_DIGITS + 2) as usize);

    /* Output a dash for negative values */
    if var.sign == Sign::Neg {
        s.push('-');
    }

    /* Output all digits before the decimal point */
    let mut d;
    if var.weight < 0 {
        d = var.weight + 1;
        s.push('0');
    } else {
        for pos in 0..=var.weight {
            let dig = if (pos as usize) < var.ndigits {
                i32::from(var.digit(pos as usize))
            } else {
                0
            };
            /* In the first digit, suppress extra leading decimal zeroes */
            if pos == 0 {
                push_digits(&mut s, dig, int_log10(dig.max(1)) + 1);
            } else {
                push_digits(&mut s, dig, DEC_DIGITS);
            }
        }
        d = var.weight + 1;
    }

    /*
     * If requested, output a decimal point and the digits after it. Each
     * stored digit contributes DEC_DIGITS decimal digits; the last one may
     * be cut short.
     */
    if dscale > 0 {
        s.push('.');
        let mut emitted = 0;
        while emitted < dscale {
            let dig = if d >= 0 && (d as usize) < var.ndigits {
                i32::from(var.digit(d as usize))
            } else {
                0
            };
            let width = DEC_DIGITS.min(dscale - emitted);
            /* truncate the digit when fewer decimal places remain */
            push_digits(&mut s, dig / POW10[(DEC_DIGITS - width) as usize], width);
            d += 1;
            emitted += DEC_DIGITS;
        }
    }

    s
}

/// Append `dig` to the string as exactly `width` decimal digits,
/// zero-padded on the left.
fn push_digits(s: &mut String, dig: i32, width: i32) {
    debug_assert!(dig >= 0 && width >= 1);
    for w in (0..width).rev() {
        let d = (dig / POW10[w as usize]) % 10;
        s.push((b'0' + d as u8) as char);
    }
}

/// Render `var` in normalised scientific notation, `a * 10^b` written with
/// E notation and a minimum of two exponent digits, e.g. `1.2e+03`.
/// `rscale` is the number of decimal digits after the decimal point in the
/// significand; negative values are treated as zero.
/// CAUTION: the variable is modified by rounding.
pub(crate) fn get_str_sci(var: &mut DecimalVar, rscale: i32, e: char) -> String {
    let rscale = rscale.max(0);

    /*
     * The exponent puts exactly one significant digit before the decimal
     * point. Compensate for leading decimal zeroes in the first stored
     * digit by reducing the nominal weight-derived exponent. Zero has no
     * meaningful exponent; display it as zero for consistency.
     */
    let exponent = if var.ndigits > 0 {
        (var.weight + 1) * DEC_DIGITS - (DEC_DIGITS - int_log10(i32::from(var.digit(0))))
    } else {
        0
    };

    /*
     * Divide by 10^exponent to get the significand, rounding to rscale
     * digits in the process.
     */
    let denom_scale = if exponent < 0 { -exponent } else { 0 };

    let ten = i64_to_var(10);
    let denominator = power_var_int(&ten, exponent, denom_scale)
        .expect("a power of ten has no error cases");
    let mut significand = div_var(var, &denominator, rscale, true)
        .expect("a power of ten divisor is nonzero");
    let sig_out = get_str(&mut significand, rscale);

    format!("{}{}{:+03}", sig_out, e, exponent)
}

impl Display for Decimal {
    /// Formats the value in fixed notation. Without a precision the stored
    /// display scale determines the fractional digits; `{:.N}` rounds to
    /// `N` fractional digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        let mut var = self.to_var();
        let scale = match f.precision() {
            Some(prec) => prec as i32,
            None => var.dscale,
        };
        f.write_str(&get_str(&mut var, scale))
    }
}

impl LowerExp for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        let mut var = self.to_var();
        let scale = match f.precision() {
            Some(prec) => prec as i32,
            None => var.dscale,
        };
        f.write_str(&get_str_sci(&mut var, scale, 'e'))
    }
}

impl UpperExp for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        let mut var = self.to_var();
        let scale = match f.precision() {
            Some(prec) => prec as i32,
            None => var.dscale,
        };
        f.write_str(&get_str_sci(&mut var, scale, 'E'))
    }
}

//! Square root, exponential, logarithms and power.
//!
//! These compose the arithmetic primitives at carefully boosted local
//! scales: every range-reduction step adds working precision so the final
//! rounding still has accurate digits to chew on. Intermediate divisions
//! use the fast estimated division, whose slack the extra scale absorbs.

use std::cmp::Ordering;
use std::convert::TryFrom;

use crate::arith::{div_var, div_var_fast, mul_var, select_div_scale};
use crate::consts;
use crate::convert::{var_to_f64, var_to_i64};
use crate::error::DecimalError;
use crate::radix::{
    int_log10, DEC_DIGITS, MAX_DISPLAY_SCALE, MAX_RESULT_SCALE, MIN_DISPLAY_SCALE, MIN_SIG_DIGITS,
    MUL_GUARD_DIGITS, NBASE,
};
use crate::var::{add_var, cmp_var, sub_var, DecimalVar, Sign};

/// Square root by Newton's algorithm, to `rscale` fractional digits.
pub(crate) fn sqrt_var(arg: &DecimalVar, rscale: i32) -> Result<DecimalVar, DecimalError> {
    let local_rscale = rscale + 8;

    match cmp_var(arg, &consts::ZERO) {
        Ordering::Equal => {
            let mut result = DecimalVar::new();
            result.dscale = rscale;
            return Ok(result);
        }
        Ordering::Less => return Err(DecimalError::InvalidArgument),
        Ordering::Greater => {}
    }

    let mut tmp_arg = DecimalVar::new();
    tmp_arg.assign(arg);

    /* Initialize the result to the first guess */
    let mut result = DecimalVar::new();
    result.alloc(1);
    let guess = (tmp_arg.digit(0) / 2).max(1);
    result.digits_mut()[0] = guess;
    result.weight = tmp_arg.weight / 2;
    result.sign = Sign::Pos;

    let mut last_val = result.clone();

    loop {
        let tmp_val = div_var_fast(&tmp_arg, &result, local_rscale, true)?;

        result = add_var(&result, &tmp_val);
        result = mul_var(&result, &consts::ZERO_POINT_FIVE, local_rscale);

        if cmp_var(&last_val, &result) == Ordering::Equal {
            break;
        }
        last_val = result.clone();
    }

    result.round(rscale);
    Ok(result)
}

/// Raise e to the power of `arg`, to `rscale` fractional digits.
///
/// The input is split as `e^x = e^xint * e^xfrac`; the fractional part goes
/// through the Taylor series in `exp_var_internal` and the integer part is
/// folded in by integer exponentiation of `e`.
pub(crate) fn exp_var(arg: &DecimalVar, rscale: i32) -> Result<DecimalVar, DecimalError> {
    let mut x = DecimalVar::new();
    x.assign(arg);

    let mut xneg = false;
    if x.sign == Sign::Neg {
        xneg = true;
        x.sign = Sign::Pos;
    }

    /* Extract the integer part, removing it from x */
    let mut xintval: i32 = 0;
    while x.weight >= 0 {
        xintval *= NBASE;
        if x.ndigits > 0 {
            xintval += i32::from(x.digit(0));
            x.pop_first_digit();
        }
        x.weight -= 1;
        /* Guard against overflow */
        if xintval >= MAX_RESULT_SCALE * 3 {
            return Err(DecimalError::ValueOutOfRange);
        }
    }

    /* Select an appropriate scale for the internal calculation */
    let local_rscale = rscale + MUL_GUARD_DIGITS * 2;

    /* Compute e^xfrac */
    let mut result = exp_var_internal(&x, local_rscale)?;

    /* If there's an integer part, multiply by e^xint */
    if xintval > 0 {
        let mut e = exp_var_internal(&consts::ONE, local_rscale)?;
        e = power_var_int(&e, xintval, local_rscale)?;
        result = mul_var(&e, &result, local_rscale);
    }

    /* Compensate for the input sign, and round to the requested rscale */
    if xneg {
        result = div_var_fast(&consts::ONE, &result, rscale, true)?;
    } else {
        result.round(rscale);
    }

    Ok(result)
}

/// Raise e to the power of `arg`, where `0 <= arg <= 1`.
///
/// The result is good to at least `rscale` digits but is not rounded off;
/// callers do that themselves.
fn exp_var_internal(arg: &DecimalVar, rscale: i32) -> Result<DecimalVar, DecimalError> {
    let mut x = DecimalVar::new();
    x.assign(arg);
    debug_assert!(x.sign == Sign::Pos);

    let mut local_rscale = rscale + 8;

    /* Reduce the input into the range 0 <= x <= 0.01 */
    let mut ndiv2 = 0;
    while cmp_var(&x, &consts::ZERO_POINT_01) == Ordering::Greater {
        ndiv2 += 1;
        local_rscale += 1;
        let halved_scale = x.dscale + 1;
        x = mul_var(&x, &consts::ZERO_POINT_FIVE, halved_scale);
    }

    /*
     * Use the Taylor series
     *
     * exp(x) = 1 + x + x^2/2! + x^3/3! + ...
     *
     * Given the limited range of x this converges quickly; run it until
     * the terms fall below the local_rscale limit.
     */
    let mut result = add_var(&consts::ONE, &x);
    let mut xpow = DecimalVar::new();
    xpow.assign(&x);
    let mut ifac = DecimalVar::new();
    ifac.assign(&consts::ONE);
    let mut ni = DecimalVar::new();
    ni.assign(&consts::ONE);

    loop {
        ni = add_var(&ni, &consts::ONE);
        xpow = mul_var(&xpow, &x, local_rscale);
        ifac = mul_var(&ifac, &ni, 0);
        let elem = div_var_fast(&xpow, &ifac, local_rscale, true)?;

        if elem.ndigits == 0 {
            break;
        }

        result = add_var(&result, &elem);
    }

    /* Compensate for the argument range reduction by squaring back up */
    while ndiv2 > 0 {
        ndiv2 -= 1;
        result = mul_var(&result, &result, local_rscale);
    }

    Ok(result)
}

/// Natural logarithm, to `rscale` fractional digits.
pub(crate) fn ln_var(arg: &DecimalVar, rscale: i32) -> Result<DecimalVar, DecimalError> {
    if cmp_var(arg, &consts::ZERO) != Ordering::Greater {
        return Err(DecimalError::InvalidArgument);
    }

    let mut local_rscale = rscale + 8;

    let mut x = DecimalVar::new();
    x.assign(arg);
    let mut fact = DecimalVar::new();
    fact.assign(&consts::TWO);

    /* Reduce the input into the range 0.9 < x < 1.1 */
    while cmp_var(&x, &consts::ZERO_POINT_NINE) != Ordering::Greater {
        local_rscale += 1;
        x = sqrt_var(&x, local_rscale)?;
        fact = mul_var(&fact, &consts::TWO, 0);
    }
    while cmp_var(&x, &consts::ONE_POINT_ONE) != Ordering::Less {
        local_rscale += 1;
        x = sqrt_var(&x, local_rscale)?;
        fact = mul_var(&fact, &consts::TWO, 0);
    }

    /*
     * Use the Taylor series for 0.5 * ln((1+z)/(1-z)),
     *
     * z + z^3/3 + z^5/5 + ...
     *
     * where z = (x-1)/(x+1) is small after the range reduction above. The
     * convergence is not spectacular but tolerable for small z.
     */
    let mut result = sub_var(&x, &consts::ONE);
    let elem = add_var(&x, &consts::ONE);
    result = div_var_fast(&result, &elem, local_rscale, true)?;
    let mut xx = DecimalVar::new();
    xx.assign(&result);
    let zsquared = mul_var(&result, &result, local_rscale);

    let mut ni = DecimalVar::new();
    ni.assign(&consts::ONE);

    loop {
        ni = add_var(&ni, &consts::TWO);
        xx = mul_var(&xx, &zsquared, local_rscale);
        let elem = div_var_fast(&xx, &ni, local_rscale, true)?;

        if elem.ndigits == 0 {
            break;
        }

        result = add_var(&result, &elem);

        if elem.weight < result.weight - local_rscale * 2 / DEC_DIGITS {
            break;
        }
    }

    /* Compensate for the argument range reduction, round to rscale */
    Ok(mul_var(&result, &fact, rscale))
}

/// Logarithm of `num` in the given base, as `ln(num) / ln(base)`. This
/// routine chooses the result dscale itself.
pub(crate) fn log_var(base: &DecimalVar, num: &DecimalVar) -> Result<DecimalVar, DecimalError> {
    /* Set the scale for the ln() calculations, as in Decimal::ln */
    let dec_digits = (num.weight + 1) * DEC_DIGITS;
    let mut rscale = if dec_digits > 1 {
        MIN_SIG_DIGITS - int_log10(dec_digits - 1)
    } else if dec_digits < 1 {
        MIN_SIG_DIGITS - int_log10(1 - dec_digits)
    } else {
        MIN_SIG_DIGITS
    };
    rscale = rscale.max(base.dscale);
    rscale = rscale.max(num.dscale);
    rscale = rscale.max(MIN_DISPLAY_SCALE);
    rscale = rscale.min(MAX_DISPLAY_SCALE);

    let local_rscale = rscale + 8;

    /* Form the natural logarithms */
    let mut ln_base = ln_var(base, local_rscale)?;
    let mut ln_num = ln_var(num, local_rscale)?;

    ln_base.dscale = rscale;
    ln_num.dscale = rscale;

    /* Select the scale for the division result */
    let rscale = select_div_scale(&ln_num, &ln_base);

    div_var_fast(&ln_num, &ln_base, rscale, true)
}

/// Raise `base` to the power of `exp`. This routine chooses the result
/// dscale itself.
pub(crate) fn power_var(base: &DecimalVar, exp: &DecimalVar) -> Result<DecimalVar, DecimalError> {
    /* If exp can be represented as an integer, use power_var_int */
    if exp.ndigits == 0 || exp.ndigits as i32 <= exp.weight + 1 {
        /* exact integer, but does it fit in i32? */
        let mut x = DecimalVar::new();
        x.assign(exp);
        if let Some(expval64) = var_to_i64(&mut x) {
            /* the narrowing must be checked explicitly */
            if let Ok(expval) = i32::try_from(expval64) {
                let mut rscale = MIN_SIG_DIGITS;
                rscale = rscale.max(base.dscale);
                rscale = rscale.max(MIN_DISPLAY_SCALE);
                rscale = rscale.min(MAX_DISPLAY_SCALE);

                return power_var_int(base, expval, rscale);
            }
        }
    }

    /*
     * This avoids log(0) for cases of 0 raised to a non-integer; 0 ^ 0 is
     * handled by power_var_int.
     */
    if cmp_var(base, &consts::ZERO) == Ordering::Equal {
        let mut result = DecimalVar::new();
        result.assign(&consts::ZERO);
        result.dscale = MIN_SIG_DIGITS; /* no need to round */
        return Ok(result);
    }

    /* Set the scale for the ln() calculation; extra accuracy is needed */
    let dec_digits = (base.weight + 1) * DEC_DIGITS;
    let mut rscale = if dec_digits > 1 {
        MIN_SIG_DIGITS * 2 - int_log10(dec_digits - 1)
    } else if dec_digits < 1 {
        MIN_SIG_DIGITS * 2 - int_log10(1 - dec_digits)
    } else {
        MIN_SIG_DIGITS * 2
    };
    rscale = rscale.max(base.dscale * 2);
    rscale = rscale.max(exp.dscale * 2);
    rscale = rscale.max(MIN_DISPLAY_SCALE * 2);
    rscale = rscale.min(MAX_DISPLAY_SCALE * 2);

    let local_rscale = rscale + 8;

    let ln_base = ln_var(base, local_rscale)?;
    let ln_num = mul_var(&ln_base, exp, local_rscale);

    /* Set the scale for exp(), from a float estimate of the result weight */
    let mut val = var_to_f64(&ln_num)?;

    /* log10(result) = num * log10(e), so this approximates the weight: */
    val *= 0.434294481903252;

    /* limit to something that won't cause integer overflow */
    val = val.max(f64::from(-MAX_RESULT_SCALE));
    val = val.min(f64::from(MAX_RESULT_SCALE));

    let mut rscale = MIN_SIG_DIGITS - val as i32;
    rscale = rscale.max(base.dscale);
    rscale = rscale.max(exp.dscale);
    rscale = rscale.max(MIN_DISPLAY_SCALE);
    rscale = rscale.min(MAX_DISPLAY_SCALE);

    exp_var(&ln_num, rscale)
}

/// Raise `base` to an integer power, to `rscale` fractional digits.
pub(crate) fn power_var_int(
    base: &DecimalVar,
    exp: i32,
    rscale: i32,
) -> Result<DecimalVar, DecimalError> {
    match exp {
        0 => {
            /*
             * 0 ^ 0 could be either 1 or an error, but most programming
             * languages and SQL:2003 say 1.
             */
            let mut result = DecimalVar::new();
            result.assign(&consts::ONE);
            result.dscale = rscale; /* no need to round */
            return Ok(result);
        }
        1 => {
            let mut result = DecimalVar::new();
            result.assign(base);
            result.round(rscale);
            return Ok(result);
        }
        -1 => {
            return div_var(&consts::ONE, base, rscale, true);
        }
        2 => {
            return Ok(mul_var(base, base, rscale));
        }
        _ => {}
    }

    /*
     * The general case repeatedly multiplies base according to the bit
     * pattern of exp, with some extra precision on the way.
     */
    let neg = exp < 0;
    let mut mask = exp.unsigned_abs();

    let local_rscale = rscale + MUL_GUARD_DIGITS * 2;

    let mut base_prod = DecimalVar::new();
    base_prod.assign(base);

    let mut result = DecimalVar::new();
    if mask & 1 == 1 {
        result.assign(base);
    } else {
        result.assign(&consts::ONE);
    }

    mask >>= 1;
    while mask > 0 {
        base_prod = mul_var(&base_prod, &base_prod, local_rscale);
        if mask & 1 == 1 {
            result = mul_var(&base_prod, &result, local_rscale);
        }
        mask >>= 1;
    }

    /* Compensate for the input sign, and round to the requested rscale */
    if neg {
        div_var_fast(&consts::ONE, &result, rscale, true)
    } else {
        result.round(rscale);
        Ok(result)
    }
}

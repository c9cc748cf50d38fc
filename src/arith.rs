//! Multiplication, division and their scale policy.
//!
//! Division comes in two flavors. `div_var` is schoolbook long division
//! (Knuth volume 2, Algorithm 4.3.1D) and produces exact quotient digits.
//! `div_var_fast` is the FM-library approach: it estimates every quotient
//! digit with float arithmetic and fixes things up in a final carry pass,
//! which is much faster but may be off in the last digits. The fast variant
//! is therefore only used by the transcendental routines, which carry their
//! own slack.

use std::cmp::Ordering;

use crate::consts;
use crate::error::DecimalError;
use crate::radix::{
    Digit, DEC_DIGITS, DIV_GUARD_DIGITS, MAX_DISPLAY_SCALE, MIN_DISPLAY_SCALE, MIN_SIG_DIGITS,
    MUL_GUARD_DIGITS, NBASE,
};
use crate::var::{add_var, cmp_var, sub_var, DecimalVar, Sign};

fn result_sign(var1: &DecimalVar, var2: &DecimalVar) -> Sign {
    if var1.sign == var2.sign {
        Sign::Pos
    } else {
        Sign::Neg
    }
}

/// Multiply, rounding the result to no more than `rscale` fractional
/// decimal digits.
pub(crate) fn mul_var(var1: &DecimalVar, var2: &DecimalVar, rscale: i32) -> DecimalVar {
    let mut var1ndigits = var1.ndigits;
    let mut var2ndigits = var2.ndigits;

    if var1ndigits == 0 || var2ndigits == 0 {
        /* one or both inputs is zero; so is the result */
        let mut result = DecimalVar::new();
        result.dscale = rscale;
        return result;
    }

    let res_sign = result_sign(var1, var2);
    /* account for a possible carry into the top position */
    let res_weight = var1.weight + var2.weight + 2;

    /*
     * Determine the number of result digits to compute. If the exact result
     * would have more than rscale fractional digits, truncate the
     * computation with MUL_GUARD_DIGITS guard digits, by pretending that
     * one or both inputs have fewer digits than they really do.
     */
    let mut res_ndigits = var1ndigits as i32 + var2ndigits as i32 + 1;
    let mut maxdigits = res_weight + 1 + rscale * DEC_DIGITS + MUL_GUARD_DIGITS;
    if res_ndigits > maxdigits {
        if maxdigits < 3 {
            /* no useful precision at all in the result */
            let mut result = DecimalVar::new();
            result.dscale = rscale;
            return result;
        }
        /* force maxdigits odd so that the input ndigits can be equal */
        if maxdigits & 1 == 0 {
            maxdigits += 1;
        }
        let mut n1 = var1ndigits as i32;
        let mut n2 = var2ndigits as i32;
        if n1 > n2 {
            n1 -= res_ndigits - maxdigits;
            if n1 < n2 {
                n1 = (n1 + n2) / 2;
                n2 = n1;
            }
        } else {
            n2 -= res_ndigits - maxdigits;
            if n2 < n1 {
                n2 = (n1 + n2) / 2;
                n1 = n2;
            }
        }
        var1ndigits = n1 as usize;
        var2ndigits = n2 as usize;
        res_ndigits = maxdigits;
        debug_assert_eq!(res_ndigits, var1ndigits as i32 + var2ndigits as i32 + 1);
    }
    let res_ndigits = res_ndigits as usize;

    /*
     * The accumulator is an array of i32. i32::MAX is noticeably larger
     * than NBASE*NBASE, which gives headroom to postpone carry
     * normalization. maxdig tracks the maximum possible value of any cell;
     * to avoid overflow in maxdig itself it actually holds the bound
     * divided by NBASE-1.
     */
    let mut dig = vec![0i32; res_ndigits];
    let mut maxdig = 0i32;

    let digits1 = var1.digits();
    let digits2 = var2.digits();
    let mut ri = res_ndigits - 1;
    for i1 in (0..var1ndigits).rev() {
        let var1digit = i32::from(digits1[i1]);
        if var1digit != 0 {
            /* Time to normalize? */
            maxdig += var1digit;
            if maxdig > i32::MAX / (NBASE - 1) {
                let mut carry = 0;
                for cell in dig.iter_mut().rev() {
                    let mut newdig = *cell + carry;
                    if newdig >= NBASE {
                        carry = newdig / NBASE;
                        newdig -= carry * NBASE;
                    } else {
                        carry = 0;
                    }
                    *cell = newdig;
                }
                debug_assert_eq!(carry, 0);
                /* the new worst case is the product just about to be added */
                maxdig = 1 + var1digit;
            }

            /* Add the appropriate multiple of var2 into the accumulator */
            let mut i = ri;
            for i2 in (0..var2ndigits).rev() {
                dig[i] += var1digit * i32::from(digits2[i2]);
                i -= 1;
            }
        }
        ri -= 1;
    }

    /*
     * One final carry propagation pass, combined with storing the digits
     * into the output. This is still done at full precision with the guard
     * digits.
     */
    let mut result = DecimalVar::new();
    result.alloc(res_ndigits);
    let mut carry = 0;
    {
        let res_digits = result.digits_mut();
        for i in (0..res_ndigits).rev() {
            let mut newdig = dig[i] + carry;
            if newdig >= NBASE {
                carry = newdig / NBASE;
                newdig -= carry * NBASE;
            } else {
                carry = 0;
            }
            res_digits[i] = newdig as Digit;
        }
    }
    debug_assert_eq!(carry, 0);

    result.weight = res_weight;
    result.sign = res_sign;
    result.round(rscale);
    result.strip();
    result
}

/// Exact division. The quotient is figured to exactly `rscale` fractional
/// decimal digits; if `round` is true it is rounded at that digit,
/// otherwise truncated towards zero.
pub(crate) fn div_var(
    var1: &DecimalVar,
    var2: &DecimalVar,
    rscale: i32,
    round: bool,
) -> Result<DecimalVar, DecimalError> {
    let var1ndigits = var1.ndigits;
    let var2ndigits = var2.ndigits;

    /* we must not be handed an unnormalized divisor */
    if var2ndigits == 0 || var2.digit(0) == 0 {
        return Err(DecimalError::DivisionByZero);
    }

    if var1ndigits == 0 {
        let mut result = DecimalVar::new();
        result.dscale = rscale;
        return Ok(result);
    }

    /*
     * The weight figured here is correct if the emitted quotient has no
     * leading zero digits; otherwise strip() fixes things up at the end.
     */
    let res_sign = result_sign(var1, var2);
    let res_weight = var1.weight - var2.weight;
    /* The number of accurate result digits we need to produce: */
    let mut res_ndigits = res_weight + 1 + (rscale + DEC_DIGITS - 1) / DEC_DIGITS;
    res_ndigits = res_ndigits.max(1);
    /* If rounding is needed, compute one extra digit for a correct result */
    if round {
        res_ndigits += 1;
    }

    /*
     * The working dividend normally needs res_ndigits + var2ndigits digits,
     * but make it at least var1ndigits so all of var1 can be loaded into
     * it. There is an extra leading slot dividend[0] (not counted in
     * div_ndigits, matching Knuth's notation) to make room for the
     * normalization shift.
     */
    let div_ndigits = (res_ndigits + var2ndigits as i32).max(var1ndigits as i32) as usize;
    let res_ndigits = res_ndigits as usize;

    let mut dividend = vec![0 as Digit; div_ndigits + 1];
    dividend[1..=var1ndigits].copy_from_slice(var1.digits());
    /* divisor[0] stays zero; the data lives in divisor[1..=var2ndigits] */
    let mut divisor = vec![0 as Digit; var2ndigits + 1];
    divisor[1..=var2ndigits].copy_from_slice(var2.digits());

    let mut result = DecimalVar::new();
    result.alloc(res_ndigits);

    if var2ndigits == 1 {
        /*
         * A single-digit divisor allows a simple running-remainder scheme
         * (cf. Knuth section 4.3.1 exercise 16).
         */
        let divisor1 = i32::from(divisor[1]);
        let mut carry = 0;
        let res_digits = result.digits_mut();
        for i in 0..res_ndigits {
            carry = carry * NBASE + i32::from(dividend[i + 1]);
            res_digits[i] = (carry / divisor1) as Digit;
            carry %= divisor1;
        }
    } else {
        /*
         * The full multiple-place algorithm, Knuth Algorithm D.
         *
         * The first divisor digit must be >= NBASE/2; if it isn't, scale
         * both the divisor and the dividend by the factor d. The leading
         * dividend slot absorbs the shift.
         */
        if i32::from(divisor[1]) < NBASE / 2 {
            let d = NBASE / (i32::from(divisor[1]) + 1);

            let mut carry = 0;
            for i in (1..=var2ndigits).rev() {
                carry += i32::from(divisor[i]) * d;
                divisor[i] = (carry % NBASE) as Digit;
                carry /= NBASE;
            }
            debug_assert_eq!(carry, 0);

            carry = 0;
            /* at this point only var1ndigits of the dividend can be nonzero */
            for i in (0..=var1ndigits).rev() {
                carry += i32::from(dividend[i]) * d;
                dividend[i] = (carry % NBASE) as Digit;
                carry /= NBASE;
            }
            debug_assert_eq!(carry, 0);
            debug_assert!(i32::from(divisor[1]) >= NBASE / 2);
        }
        /* The first two divisor digits are used repeatedly in the loop */
        let divisor1 = i32::from(divisor[1]);
        let divisor2 = i32::from(divisor[2]);

        /*
         * Each iteration produces the j'th quotient digit by dividing
         * dividend[j .. j + var2ndigits] by the divisor, as in the common
         * manual procedure for long division.
         */
        let res_digits = result.digits_mut();
        for j in 0..res_ndigits {
            /* Estimate the quotient digit from the first two dividend digits */
            let next2digits = i32::from(dividend[j]) * NBASE + i32::from(dividend[j + 1]);

            /*
             * A zero here means the quotient digit is zero and the working
             * dividend needs no adjustment; worth testing to fall out fast
             * on trailing zeroes in a dividend.
             */
            if next2digits == 0 {
                res_digits[j] = 0;
                continue;
            }

            let mut qhat = if i32::from(dividend[j]) == divisor1 {
                NBASE - 1
            } else {
                next2digits / divisor1
            };

            /*
             * Reduce the estimate if it's too large. Knuth proves that
             * afterwards the digit is correct or just one too large, so
             * this loop runs at most twice. (Using dividend[j+2] is fine
             * since the divisor has at least 2 digits here.)
             */
            while divisor2 * qhat > (next2digits - qhat * divisor1) * NBASE + i32::from(dividend[j + 2])
            {
                qhat -= 1;
            }

            /* As above, nothing more to do when the quotient digit is 0 */
            if qhat > 0 {
                /*
                 * Multiply the divisor by qhat and subtract that from the
                 * working dividend in one pass; carry tracks the
                 * multiplication, borrow the subtraction.
                 */
                let mut carry = 0;
                let mut borrow = 0;
                for i in (0..=var2ndigits).rev() {
                    carry += i32::from(divisor[i]) * qhat;
                    borrow -= carry % NBASE;
                    carry /= NBASE;
                    borrow += i32::from(dividend[j + i]);
                    if borrow < 0 {
                        dividend[j + i] = (borrow + NBASE) as Digit;
                        borrow = -1;
                    } else {
                        dividend[j + i] = borrow as Digit;
                        borrow = 0;
                    }
                }
                debug_assert_eq!(carry, 0);

                /*
                 * A borrow out of the top digit means qhat was one too
                 * large; decrement it and add back the divisor. Knuth
                 * proves this happens only about 3/NBASE of the time, so
                 * exercise this path with a small NBASE when changing it.
                 */
                if borrow != 0 {
                    qhat -= 1;
                    let mut carry = 0;
                    for i in (0..=var2ndigits).rev() {
                        carry += i32::from(dividend[j + i]) + i32::from(divisor[i]);
                        if carry >= NBASE {
                            dividend[j + i] = (carry - NBASE) as Digit;
                            carry = 1;
                        } else {
                            dividend[j + i] = carry as Digit;
                            carry = 0;
                        }
                    }
                    /* a carry must occur here to cancel the borrow */
                    debug_assert_eq!(carry, 1);
                }
            }

            res_digits[j] = qhat as Digit;
        }
    }

    result.weight = res_weight;
    result.sign = res_sign;
    if round {
        result.round(rscale);
    } else {
        result.truncate(rscale);
    }
    result.strip();

    Ok(result)
}

/// Float-estimated division, FM-library style. Same contract as `div_var`
/// except that the least significant kept digits may be inaccurate, since
/// rounding can propagate leftwards; `DIV_GUARD_DIGITS` extra positions are
/// computed to compensate. Only the transcendental routines use this.
pub(crate) fn div_var_fast(
    var1: &DecimalVar,
    var2: &DecimalVar,
    rscale: i32,
    round: bool,
) -> Result<DecimalVar, DecimalError> {
    let var1ndigits = var1.ndigits;
    let var2ndigits = var2.ndigits;

    /* we must not be handed an unnormalized divisor */
    if var2ndigits == 0 || var2.digit(0) == 0 {
        return Err(DecimalError::DivisionByZero);
    }

    if var1ndigits == 0 {
        let mut result = DecimalVar::new();
        result.dscale = rscale;
        return Ok(result);
    }

    let res_sign = result_sign(var1, var2);
    let res_weight = var1.weight - var2.weight + 1;
    /* The number of accurate result digits we need to produce: */
    let mut div_ndigits = res_weight + 1 + (rscale + DEC_DIGITS - 1) / DEC_DIGITS;
    /* Add guard digits for roundoff error */
    div_ndigits += DIV_GUARD_DIGITS;
    if div_ndigits < DIV_GUARD_DIGITS {
        div_ndigits = DIV_GUARD_DIGITS;
    }
    /* Must be at least var1ndigits, too, to simplify data loading */
    if div_ndigits < var1ndigits as i32 {
        div_ndigits = var1ndigits as i32;
    }
    let div_ndigits = div_ndigits as usize;

    /*
     * The working array is signed i32; i32::MAX gives enough headroom over
     * NBASE*NBASE to postpone carries here too. It starts out holding one
     * zero digit followed by the dividend's digits. Each step computes an
     * approximate quotient digit and stores it into div, consuming one
     * dividend position; a final carry-propagation pass mops up any
     * mistaken estimates.
     */
    let digits1 = var1.digits();
    let digits2 = var2.digits();
    let mut div = vec![0i32; div_ndigits + 1];
    for i in 0..var1ndigits {
        div[i + 1] = i32::from(digits1[i]);
    }

    /*
     * Each quotient digit is estimated in floating point, from the first
     * four digits of the current dividend and divisor. The divisor inverse
     * is computed once up front.
     */
    let mut fdivisor = f64::from(digits2[0]);
    for i in 1..4 {
        fdivisor *= f64::from(NBASE);
        if i < var2ndigits {
            fdivisor += f64::from(digits2[i]);
        }
    }
    let fdivisorinverse = 1.0 / fdivisor;

    /*
     * maxdiv tracks the maximum possible absolute value of any div entry,
     * divided by NBASE-1 to avoid overflowing the tracker itself. When the
     * bound threatens i32::MAX, carries are propagated and the estimate
     * recomputed.
     */
    let mut maxdiv = 1i32;

    for qi in 0..div_ndigits {
        /* Approximate the current dividend value */
        let mut fdividend = f64::from(div[qi]);
        for i in 1..4 {
            fdividend *= f64::from(NBASE);
            if qi + i <= div_ndigits {
                fdividend += f64::from(div[qi + i]);
            }
        }
        /* Compute the (approximate) quotient digit */
        let fquotient = fdividend * fdivisorinverse;
        /* truncate towards -infinity */
        let mut qdigit = if fquotient >= 0.0 {
            fquotient as i32
        } else {
            fquotient as i32 - 1
        };

        if qdigit != 0 {
            /* Do we need to normalize now? */
            maxdiv += qdigit.abs();
            if maxdiv > i32::MAX / (NBASE - 1) {
                let mut carry = 0;
                for i in ((qi + 1)..=div_ndigits).rev() {
                    let mut newdig = div[i] + carry;
                    if newdig < 0 {
                        carry = -((-newdig - 1) / NBASE) - 1;
                        newdig -= carry * NBASE;
                    } else if newdig >= NBASE {
                        carry = newdig / NBASE;
                        newdig -= carry * NBASE;
                    } else {
                        carry = 0;
                    }
                    div[i] = newdig;
                }
                div[qi] += carry;

                /*
                 * All the div digits except possibly div[qi] are now in
                 * 0..NBASE-1.
                 */
                maxdiv = (div[qi].abs() / (NBASE - 1)).max(1);

                /*
                 * Recompute the quotient digit since new info may have
                 * propagated into the top four dividend digits.
                 */
                let mut fdividend = f64::from(div[qi]);
                for i in 1..4 {
                    fdividend *= f64::from(NBASE);
                    if qi + i <= div_ndigits {
                        fdividend += f64::from(div[qi + i]);
                    }
                }
                let fquotient = fdividend * fdivisorinverse;
                qdigit = if fquotient >= 0.0 {
                    fquotient as i32
                } else {
                    fquotient as i32 - 1
                };
                maxdiv += qdigit.abs();
            }

            /* Subtract off the appropriate multiple of the divisor */
            if qdigit != 0 {
                let istop = var2ndigits.min(div_ndigits - qi + 1);
                for i in 0..istop {
                    div[qi + i] -= qdigit * i32::from(digits2[i]);
                }
            }
        }

        /*
         * The dividend digit being replaced might still be nonzero; fold
         * it into the next position. This nearly cancels with the divisor
         * subtraction, so it cannot overflow.
         */
        div[qi + 1] += div[qi] * NBASE;
        div[qi] = qdigit;
    }

    /* Approximate and store the last quotient digit */
    let qi = div_ndigits;
    let mut fdividend = f64::from(div[qi]);
    for _ in 1..4 {
        fdividend *= f64::from(NBASE);
    }
    let fquotient = fdividend * fdivisorinverse;
    div[qi] = if fquotient >= 0.0 {
        fquotient as i32
    } else {
        fquotient as i32 - 1
    };

    /*
     * Final carry propagation pass, normalizing every position into a real
     * digit and folding mistaken estimates back where they belong.
     */
    let mut result = DecimalVar::new();
    result.alloc(div_ndigits + 1);
    let mut carry = 0;
    {
        let res_digits = result.digits_mut();
        for i in (0..=div_ndigits).rev() {
            let mut newdig = div[i] + carry;
            if newdig < 0 {
                carry = -((-newdig - 1) / NBASE) - 1;
                newdig -= carry * NBASE;
            } else if newdig >= NBASE {
                carry = newdig / NBASE;
                newdig -= carry * NBASE;
            } else {
                carry = 0;
            }
            res_digits[i] = newdig as Digit;
        }
    }
    debug_assert_eq!(carry, 0);

    result.weight = res_weight;
    result.sign = res_sign;
    if round {
        result.round(rscale);
    } else {
        result.truncate(rscale);
    }
    result.strip();

    Ok(result)
}

/// Default result-scale selection for division.
///
/// No SQL standard specifies a scale for division; pick one that yields at
/// least MIN_SIG_DIGITS significant digits (so the result is no less
/// accurate than float division would be), but never less than either
/// input's display scale.
pub(crate) fn select_div_scale(var1: &DecimalVar, var2: &DecimalVar) -> i32 {
    /* Get the actual (normalized) weight and first digit of each input */
    let mut weight1 = 0;
    let mut firstdigit1 = 0;
    for (i, &dig) in var1.digits().iter().enumerate() {
        if dig != 0 {
            firstdigit1 = dig;
            weight1 = var1.weight - i as i32;
            break;
        }
    }

    let mut weight2 = 0;
    let mut firstdigit2 = 0;
    for (i, &dig) in var2.digits().iter().enumerate() {
        if dig != 0 {
            firstdigit2 = dig;
            weight2 = var2.weight - i as i32;
            break;
        }
    }

    /*
     * Estimate the quotient weight. If the two first digits are equal we
     * can't be sure, so assume the quotient is less than one.
     */
    let mut qweight = weight1 - weight2;
    if firstdigit1 <= firstdigit2 {
        qweight -= 1;
    }

    let mut rscale = MIN_SIG_DIGITS - qweight * DEC_DIGITS;
    rscale = rscale.max(var1.dscale);
    rscale = rscale.max(var2.dscale);
    rscale = rscale.max(MIN_DISPLAY_SCALE);
    rscale.min(MAX_DISPLAY_SCALE)
}

/// Modulo, via `mod(x, y) = x - trunc(x / y) * y`.
pub(crate) fn mod_var(var1: &DecimalVar, var2: &DecimalVar) -> Result<DecimalVar, DecimalError> {
    /* div_var can be persuaded to give us trunc(x/y) directly */
    let tmp = div_var(var1, var2, 0, false)?;
    let tmp = mul_var(var2, &tmp, var2.dscale);
    Ok(sub_var(var1, &tmp))
}

/// Smallest integer not less than the argument.
pub(crate) fn ceil_var(var: &DecimalVar) -> DecimalVar {
    let mut tmp = DecimalVar::new();
    tmp.assign(var);
    tmp.truncate(0);

    if var.sign == Sign::Pos && cmp_var(var, &tmp) != Ordering::Equal {
        tmp = add_var(&tmp, &consts::ONE);
    }
    tmp
}

/// Largest integer not greater than the argument.
pub(crate) fn floor_var(var: &DecimalVar) -> DecimalVar {
    let mut tmp = DecimalVar::new();
    tmp.assign(var);
    tmp.truncate(0);

    if var.sign == Sign::Neg && cmp_var(var, &tmp) != Ordering::Equal {
        tmp = sub_var(&tmp, &consts::ONE);
    }
    tmp
}

#[cfg(all(test, feature = "base-10000"))]
mod test {
    use std::cmp::Ordering;

    use super::{div_var, div_var_fast, mul_var, select_div_scale};
    use crate::error::DecimalError;
    use crate::var::{cmp_var, DecimalVar, Sign};

    fn var(sign: Sign, weight: i32, dscale: i32, digits: &[i16]) -> DecimalVar {
        DecimalVar::from_parts(sign, weight, dscale, digits)
    }

    #[test]
    fn mul_simple() {
        // 1.13 * 1.1 = 1.243
        let a = var(Sign::Pos, 0, 2, &[1, 1300]);
        let b = var(Sign::Pos, 0, 1, &[1, 1000]);
        let prod = mul_var(&a, &b, 3);
        assert_eq!(prod.weight, 0);
        assert_eq!(prod.digits(), &[1, 2430]);
        assert_eq!(prod.dscale, 3);
        assert_eq!(prod.sign, Sign::Pos);
    }

    #[test]
    fn mul_zero() {
        let a = DecimalVar::new();
        let b = var(Sign::Neg, 0, 0, &[7]);
        let prod = mul_var(&a, &b, 5);
        assert_eq!(prod.ndigits, 0);
        assert_eq!(prod.dscale, 5);
    }

    #[test]
    fn mul_signs() {
        let a = var(Sign::Neg, 0, 0, &[3]);
        let b = var(Sign::Pos, 0, 0, &[4]);
        let prod = mul_var(&a, &b, 0);
        assert_eq!(prod.sign, Sign::Neg);
        assert_eq!(prod.digits(), &[12]);
    }

    #[test]
    fn div_by_zero() {
        let a = var(Sign::Pos, 0, 0, &[5]);
        let b = DecimalVar::new();
        assert_eq!(div_var(&a, &b, 0, false), Err(DecimalError::DivisionByZero));
        assert_eq!(
            div_var_fast(&a, &b, 0, false),
            Err(DecimalError::DivisionByZero)
        );
    }

    #[test]
    fn div_zero_dividend() {
        let a = DecimalVar::new();
        let b = var(Sign::Pos, 0, 0, &[5]);
        let quot = div_var(&a, &b, 7, true).unwrap();
        assert_eq!(quot.ndigits, 0);
        assert_eq!(quot.dscale, 7);
    }

    #[test]
    fn div_single_digit_divisor() {
        // 1 / 3 at scale 8 = 0.33333333
        let a = var(Sign::Pos, 0, 0, &[1]);
        let b = var(Sign::Pos, 0, 0, &[3]);
        let quot = div_var(&a, &b, 8, true).unwrap();
        assert_eq!(quot.weight, -1);
        assert_eq!(quot.digits(), &[3333, 3333]);
    }

    #[test]
    fn div_multi_digit_agrees_with_fast() {
        // 1.243 / 1.1 = 1.13
        let a = var(Sign::Pos, 0, 3, &[1, 2430]);
        let b = var(Sign::Pos, 0, 1, &[1, 1000]);
        let exact = div_var(&a, &b, 12, true).unwrap();
        let fast = div_var_fast(&a, &b, 12, true).unwrap();
        assert_eq!(cmp_var(&exact, &fast), Ordering::Equal);
        assert_eq!(exact.digits(), &[1, 1300]);
    }

    #[test]
    fn div_trunc_vs_round() {
        // 2 / 3 at scale 0
        let a = var(Sign::Pos, 0, 0, &[2]);
        let b = var(Sign::Pos, 0, 0, &[3]);
        let trunc = div_var(&a, &b, 0, false).unwrap();
        assert_eq!(trunc.ndigits, 0);
        let round = div_var(&a, &b, 0, true).unwrap();
        assert_eq!(round.digits(), &[1]);
    }

    #[test]
    fn scale_selection() {
        // 1 / 3: quotient weight estimate is -1, so 20 fractional digits
        let a = var(Sign::Pos, 0, 0, &[1]);
        let b = var(Sign::Pos, 0, 0, &[3]);
        assert_eq!(select_div_scale(&a, &b), 20);

        // 1.13 / 0.1: quotient weight estimate is 1
        let c = var(Sign::Pos, 0, 2, &[1, 1300]);
        let d = var(Sign::Pos, -1, 1, &[1000]);
        assert_eq!(select_div_scale(&c, &d), 16);
    }
}

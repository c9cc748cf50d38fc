//! Preinitialized shared constants.
//!
//! These are read-only: every routine that would otherwise scribble on one
//! of them copies it into its own working variable first.

use once_cell::sync::Lazy;

use crate::radix::{Digit, DEC_DIGITS, HALF_NBASE, NBASE};
use crate::var::{DecimalVar, Sign};

pub(crate) static ZERO: Lazy<DecimalVar> =
    Lazy::new(|| DecimalVar::from_parts(Sign::Pos, 0, 0, &[]));

pub(crate) static ONE: Lazy<DecimalVar> =
    Lazy::new(|| DecimalVar::from_parts(Sign::Pos, 0, 0, &[1]));

pub(crate) static TWO: Lazy<DecimalVar> =
    Lazy::new(|| DecimalVar::from_parts(Sign::Pos, 0, 0, &[2]));

pub(crate) static TEN: Lazy<DecimalVar> = Lazy::new(|| {
    if DEC_DIGITS == 1 {
        DecimalVar::from_parts(Sign::Pos, 1, 0, &[1])
    } else {
        DecimalVar::from_parts(Sign::Pos, 0, 0, &[10])
    }
});

pub(crate) static ZERO_POINT_FIVE: Lazy<DecimalVar> =
    Lazy::new(|| DecimalVar::from_parts(Sign::Pos, -1, 1, &[HALF_NBASE as Digit]));

pub(crate) static ZERO_POINT_NINE: Lazy<DecimalVar> =
    Lazy::new(|| DecimalVar::from_parts(Sign::Pos, -1, 1, &[(9 * (NBASE / 10)) as Digit]));

pub(crate) static ZERO_POINT_01: Lazy<DecimalVar> = Lazy::new(|| {
    if DEC_DIGITS == 1 {
        DecimalVar::from_parts(Sign::Pos, -2, 2, &[1])
    } else {
        DecimalVar::from_parts(Sign::Pos, -1, 2, &[(NBASE / 100) as Digit])
    }
});

pub(crate) static ONE_POINT_ONE: Lazy<DecimalVar> =
    Lazy::new(|| DecimalVar::from_parts(Sign::Pos, 0, 1, &[1, (NBASE / 10) as Digit]));

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::{ONE, ONE_POINT_ONE, TEN, TWO, ZERO, ZERO_POINT_01, ZERO_POINT_FIVE};
    use crate::var::{add_var, cmp_var};

    #[test]
    fn constants_relate() {
        assert_eq!(cmp_var(&add_var(&ONE, &ONE), &TWO), Ordering::Equal);
        assert_eq!(cmp_var(&ZERO, &ONE), Ordering::Less);
        assert_eq!(cmp_var(&ZERO_POINT_01, &ZERO_POINT_FIVE), Ordering::Less);
        assert_eq!(cmp_var(&ONE_POINT_ONE, &ONE), Ordering::Greater);
        assert_eq!(cmp_var(&TEN, &TWO), Ordering::Greater);
    }

    #[test]
    fn half_plus_half_is_one() {
        let sum = add_var(&ZERO_POINT_FIVE, &ZERO_POINT_FIVE);
        assert_eq!(cmp_var(&sum, &ONE), Ordering::Equal);
    }
}

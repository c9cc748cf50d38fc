//! Operator and numeric-trait implementations for `Decimal`.
//!
//! The operators behave like their primitive-integer counterparts: `Div`
//! and `Rem` panic on a zero divisor, and every arithmetic operator panics
//! when the result does not fit the packed representation. The `checked_*`
//! methods (`checked_add` through `checked_rem` and `div_trunc`) report
//! those conditions as errors instead.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use num_traits::{Num, One, Pow, Signed, Zero};

use crate::decimal::Decimal;
use crate::error::DecimalError;

macro_rules! impl_checked_op {
    ($trait:ident, $fn_name:ident, $imp:ident, $msg:expr) => {
        impl $trait for Decimal {
            type Output = Decimal;

            fn $fn_name(self, rhs: Decimal) -> Decimal {
                Decimal::$imp(&self, &rhs).expect($msg)
            }
        }

        impl $trait<&Decimal> for Decimal {
            type Output = Decimal;

            fn $fn_name(self, rhs: &Decimal) -> Decimal {
                Decimal::$imp(&self, rhs).expect($msg)
            }
        }

        impl $trait for &Decimal {
            type Output = Decimal;

            fn $fn_name(self, rhs: &Decimal) -> Decimal {
                Decimal::$imp(self, rhs).expect($msg)
            }
        }

        impl $trait<Decimal> for &Decimal {
            type Output = Decimal;

            fn $fn_name(self, rhs: Decimal) -> Decimal {
                Decimal::$imp(self, &rhs).expect($msg)
            }
        }
    };
}

macro_rules! impl_assign {
    ($trait:ident, $fn_name:ident, $op:tt) => {
        impl $trait for Decimal {
            fn $fn_name(&mut self, rhs: Decimal) {
                *self = &*self $op &rhs;
            }
        }

        impl $trait<&Decimal> for Decimal {
            fn $fn_name(&mut self, rhs: &Decimal) {
                *self = &*self $op rhs;
            }
        }
    };
}

impl_checked_op!(Add, add, checked_add, "attempt to add with overflow");
impl_checked_op!(Sub, sub, checked_sub, "attempt to subtract with overflow");
impl_checked_op!(Mul, mul, checked_mul, "attempt to multiply with overflow");
impl_checked_op!(Div, div, checked_div, "attempt to divide by zero");
impl_checked_op!(
    Rem,
    rem,
    checked_rem,
    "attempt to calculate the remainder with a divisor of zero"
);

impl_assign!(AddAssign, add_assign, +);
impl_assign!(SubAssign, sub_assign, -);
impl_assign!(MulAssign, mul_assign, *);
impl_assign!(DivAssign, div_assign, /);
impl_assign!(RemAssign, rem_assign, %);

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negated()
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negated()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Decimal) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        self.cmp_value(other)
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_hash(state);
    }
}

impl Default for Decimal {
    fn default() -> Decimal {
        Zero::zero()
    }
}

impl Zero for Decimal {
    fn zero() -> Decimal {
        Decimal::zero_value()
    }

    fn is_zero(&self) -> bool {
        !self.is_nan() && self.digits().is_empty()
    }
}

impl One for Decimal {
    fn one() -> Decimal {
        Decimal::from(1)
    }

    fn is_one(&self) -> bool {
        *self == Decimal::from(1)
    }
}

impl Num for Decimal {
    type FromStrRadixErr = DecimalError;

    /// Only radix 10 is meaningful for a decimal type.
    fn from_str_radix(s: &str, radix: u32) -> Result<Decimal, DecimalError> {
        if radix != 10 {
            return Err(DecimalError::InvalidArgument);
        }
        Decimal::parse(s, -1, -1)
    }
}

impl Signed for Decimal {
    fn abs(&self) -> Decimal {
        Decimal::abs(self)
    }

    fn abs_sub(&self, other: &Decimal) -> Decimal {
        if self.is_nan() || other.is_nan() {
            return Decimal::nan();
        }
        if self <= other {
            Zero::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Decimal {
        self.sign()
    }

    fn is_positive(&self) -> bool {
        !self.is_nan() && *self > Zero::zero()
    }

    fn is_negative(&self) -> bool {
        !self.is_nan() && *self < Zero::zero()
    }
}

impl Pow<Decimal> for Decimal {
    type Output = Decimal;

    fn pow(self, rhs: Decimal) -> Decimal {
        self.power(&rhs).expect("invalid arguments to pow")
    }
}

impl Pow<&Decimal> for Decimal {
    type Output = Decimal;

    fn pow(self, rhs: &Decimal) -> Decimal {
        self.power(rhs).expect("invalid arguments to pow")
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Zero::zero(), |acc, x| acc + x)
    }
}

impl Product for Decimal {
    fn product<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(One::one(), |acc, x| acc * x)
    }
}

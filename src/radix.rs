//! Compile-time radix configuration.
//!
//! Decimal values are stored as arrays of base-`NBASE` digits. The base is a
//! power of ten chosen at compile time through the `base-10`, `base-100` and
//! `base-10000` cargo features, so that I/O conversion and decimal rounding
//! stay cheap. `NBASE * NBASE` must fit in an `i32` with enough headroom for
//! the multiplication and fast-division loops to postpone carry processing;
//! all three supported bases satisfy that comfortably.

#[cfg(all(
    feature = "base-10",
    not(feature = "base-100"),
    not(feature = "base-10000")
))]
mod base {
    pub const NBASE: i32 = 10;
    pub const DEC_DIGITS: i32 = 1;
    /* these are measured in NBASE digits */
    pub const MUL_GUARD_DIGITS: i32 = 4;
    pub const DIV_GUARD_DIGITS: i32 = 8;
}

#[cfg(all(
    feature = "base-100",
    not(feature = "base-10"),
    not(feature = "base-10000")
))]
mod base {
    pub const NBASE: i32 = 100;
    pub const DEC_DIGITS: i32 = 2;
    pub const MUL_GUARD_DIGITS: i32 = 3;
    pub const DIV_GUARD_DIGITS: i32 = 6;
}

#[cfg(all(
    feature = "base-10000",
    not(feature = "base-10"),
    not(feature = "base-100")
))]
mod base {
    pub const NBASE: i32 = 10000;
    pub const DEC_DIGITS: i32 = 4;
    pub const MUL_GUARD_DIGITS: i32 = 2;
    pub const DIV_GUARD_DIGITS: i32 = 4;
}

#[cfg(not(any(feature = "base-10", feature = "base-100", feature = "base-10000")))]
compile_error!("one of the base-10, base-100 or base-10000 features must be enabled");

#[cfg(any(
    all(feature = "base-10", feature = "base-100"),
    all(feature = "base-10", feature = "base-10000"),
    all(feature = "base-100", feature = "base-10000")
))]
compile_error!(
    "the base-10, base-100 and base-10000 features are mutually exclusive \
     (disable default features to pick a non-default base)"
);

pub(crate) use base::{DEC_DIGITS, DIV_GUARD_DIGITS, MUL_GUARD_DIGITS, NBASE};

/// A single stored digit, in `0..NBASE`. Signed and wide enough for every
/// supported base.
pub(crate) type Digit = i16;

pub(crate) const HALF_NBASE: i32 = NBASE / 2;

/// Powers of ten up to `10^DEC_DIGITS`, indexed by decimal digit count.
/// Intra-digit rounding, truncation and formatting all use this table.
pub(crate) const POW10: [i32; 5] = [1, 10, 100, 1000, 10000];

/// Hardcoded precision limit; must be small enough that dscale values fit in
/// the packed form's 14 bits.
pub(crate) const MAX_PRECISION: i32 = 1000;

pub(crate) const MAX_DISPLAY_SCALE: i32 = MAX_PRECISION;
pub(crate) const MIN_DISPLAY_SCALE: i32 = 0;

pub(crate) const MAX_RESULT_SCALE: i32 = MAX_PRECISION * 2;

/// For inherently inexact calculations such as division and square root, aim
/// for at least this many significant digits, so results are no worse than
/// an `f64` would give.
pub(crate) const MIN_SIG_DIGITS: i32 = 16;

/// Largest dscale the packed form can carry.
pub(crate) const MAX_PACKED_DSCALE: i32 = (1 << 14) - 1;

/// Truncated base-10 logarithm of a positive integer.
///
/// The scale-selection heuristics only ever need `log10` of small exact
/// integers, so an integer loop keeps them deterministic across platforms.
pub(crate) fn int_log10(mut x: i32) -> i32 {
    debug_assert!(x >= 1);
    let mut log = 0;
    while x >= 10 {
        x /= 10;
        log += 1;
    }
    log
}

#[cfg(test)]
mod test {
    use super::{int_log10, DEC_DIGITS, HALF_NBASE, NBASE, POW10};

    #[test]
    fn base_is_consistent() {
        assert_eq!(POW10[DEC_DIGITS as usize], NBASE);
        assert_eq!(HALF_NBASE * 2, NBASE);
    }

    #[test]
    fn integer_log10() {
        assert_eq!(int_log10(1), 0);
        assert_eq!(int_log10(9), 0);
        assert_eq!(int_log10(10), 1);
        assert_eq!(int_log10(9999), 3);
        assert_eq!(int_log10(10000), 4);
    }
}

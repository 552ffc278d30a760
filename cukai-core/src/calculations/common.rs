//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the calculation
//! modules, including the financial rounding rules applied to every ringgit
//! amount the engine returns.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use cukai_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to a whole ringgit using the same half-up rule.
///
/// Used by the required-income solver, whose answer is only meaningful to
/// RM1 precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use cukai_core::calculations::common::round_whole_rm;
///
/// assert_eq!(round_whole_rm(dec!(4999.50)), dec!(5000));
/// assert_eq!(round_whole_rm(dec!(4999.49)), dec!(4999));
/// ```
pub fn round_whole_rm(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use cukai_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

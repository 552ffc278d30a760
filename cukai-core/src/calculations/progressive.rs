//! Generic tiered-bracket tax calculator.
//!
//! Both the personal and corporate schedules are computed through this
//! primitive. Amounts are taxed marginally: each bracket taxes only the
//! slice of the amount that falls inside it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cukai_core::calculations::progressive::progressive_tax;
//! use cukai_core::models::TaxBracket;
//!
//! let brackets = vec![
//!     TaxBracket::new(dec!(0), Some(dec!(5000)), dec!(0)),
//!     TaxBracket::new(dec!(5000), Some(dec!(20000)), dec!(0.01)),
//!     TaxBracket::new(dec!(20000), None, dec!(0.03)),
//! ];
//!
//! // 15000 at 1% on the slice above 5000.
//! assert_eq!(progressive_tax(dec!(20000), &brackets), dec!(150.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::{TaxBracket, TaxBracketBreakdown};

/// Tax plus its per-bracket decomposition, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTaxOutcome {
    pub tax: Decimal,
    pub breakdown: Vec<TaxBracketBreakdown>,
}

/// Computes progressive tax on `amount` over `brackets`, rounded to 2 dp.
///
/// Non-positive amounts yield zero. Brackets must satisfy the schedule
/// invariant (contiguous, ascending, unbounded top tier); out-of-contract
/// bracket slices produce unspecified results.
pub fn progressive_tax(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    progressive_tax_with_breakdown(amount, brackets).tax
}

/// Per-bracket decomposition of the progressive tax on `amount`.
///
/// One entry per bracket that received a nonzero slice; empty for
/// non-positive amounts. Each entry's `tax_for_bracket` is rounded to 2 dp
/// independently of the total.
pub fn progressive_tax_breakdown(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> Vec<TaxBracketBreakdown> {
    progressive_tax_with_breakdown(amount, brackets).breakdown
}

/// Computes the total tax and breakdown in a single walk of the schedule.
///
/// The total accumulates unrounded per-bracket tax and is rounded once at
/// the end, so it may differ from the sum of the rounded breakdown entries
/// by at most one cent per bracket.
pub fn progressive_tax_with_breakdown(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> ProgressiveTaxOutcome {
    if amount <= Decimal::ZERO {
        return ProgressiveTaxOutcome {
            tax: Decimal::ZERO,
            breakdown: Vec::new(),
        };
    }

    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for bracket in brackets {
        if amount <= bracket.min {
            break;
        }

        let ceiling = bracket.max.unwrap_or(Decimal::MAX);
        let amount_in_bracket = amount.min(ceiling) - bracket.min;
        let tax_for_bracket = amount_in_bracket * bracket.rate;

        total += tax_for_bracket;
        breakdown.push(TaxBracketBreakdown {
            bracket_min: bracket.min,
            bracket_max: bracket.max,
            rate: bracket.rate,
            amount_in_bracket,
            tax_for_bracket: round_half_up(tax_for_bracket),
        });
    }

    ProgressiveTaxOutcome {
        tax: round_half_up(total),
        breakdown,
    }
}

//! Resident individual income tax, plus the inverse net-cash solver.
//!
//! The forward direction applies the year's progressive schedule to
//! chargeable income. The inverse direction answers "what gross income
//! leaves a target net cash after tax", which the comparison layer uses to
//! equate an Enterprise draw with a Sdn Bhd salary package.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{max, round_whole_rm};
use crate::calculations::progressive::{
    ProgressiveTaxOutcome, progressive_tax, progressive_tax_with_breakdown,
};
use crate::models::PersonalTaxConfig;
use crate::years::current_tax_year;

/// Termination safeguard for the inverse solver; the search window reaches
/// RM1 long before this on any realistic input.
const MAX_SOLVER_ITERATIONS: u32 = 50;

/// Personal tax calculator over one year's schedule.
#[derive(Debug, Clone, Copy)]
pub struct PersonalTax<'a> {
    config: &'a PersonalTaxConfig,
}

impl<'a> PersonalTax<'a> {
    pub fn new(config: &'a PersonalTaxConfig) -> Self {
        Self { config }
    }

    /// Calculator for the current Year of Assessment.
    pub fn current_year() -> PersonalTax<'static> {
        PersonalTax::new(&current_tax_year().personal)
    }

    /// Tax on chargeable income, rounded to 2 dp. Non-positive income
    /// yields zero.
    pub fn tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        progressive_tax(taxable_income, &self.config.brackets)
    }

    /// Tax with its per-bracket decomposition.
    pub fn tax_with_breakdown(
        &self,
        taxable_income: Decimal,
    ) -> ProgressiveTaxOutcome {
        progressive_tax_with_breakdown(taxable_income, &self.config.brackets)
    }

    /// The default total reliefs for this year (the basic relief).
    pub fn default_total_reliefs(&self) -> Decimal {
        self.config.default_total_reliefs
    }

    /// Finds the gross income whose net cash after tax is
    /// `target_net_cash`, to whole-RM precision.
    ///
    /// Net cash `G - tax(max(0, G - total_reliefs))` is monotonically
    /// non-decreasing in `G` under a progressive schedule, so a binary
    /// search on `[target, 2 * target]` converges; the upper bound widens
    /// to `3 * target` when a probe shows it undershoots. The search stops
    /// once the window is within RM1.
    pub fn required_income_for_net_cash(
        &self,
        target_net_cash: Decimal,
        total_reliefs: Decimal,
    ) -> Decimal {
        if target_net_cash <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut low = target_net_cash;
        let mut high = target_net_cash * Decimal::TWO;
        if self.net_cash(high, total_reliefs) < target_net_cash {
            high = target_net_cash * Decimal::from(3);
        }

        let mut iterations = 0;
        while high - low > Decimal::ONE {
            if iterations >= MAX_SOLVER_ITERATIONS {
                warn!(
                    %target_net_cash,
                    window = %(high - low),
                    "required-income solver hit the iteration cap"
                );
                break;
            }
            iterations += 1;

            let mid = (low + high) / Decimal::TWO;
            if self.net_cash(mid, total_reliefs) < target_net_cash {
                low = mid;
            } else {
                high = mid;
            }
        }

        round_whole_rm((low + high) / Decimal::TWO)
    }

    fn net_cash(
        &self,
        gross_income: Decimal,
        total_reliefs: Decimal,
    ) -> Decimal {
        gross_income - self.tax(max(gross_income - total_reliefs, Decimal::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn calculator() -> PersonalTax<'static> {
        PersonalTax::current_year()
    }

    // =========================================================================
    // tax tests
    // =========================================================================

    #[test]
    fn tax_is_zero_within_exempt_band() {
        let result = calculator().tax(dec!(5000));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn tax_at_20000_is_150() {
        let result = calculator().tax(dec!(20000));

        assert_eq!(result, dec!(150.00));
    }

    #[test]
    fn tax_mid_band_at_53000() {
        // 1500 cumulative to 50000, plus 11% of 3000.
        let result = calculator().tax(dec!(53000));

        assert_eq!(result, dec!(1830.00));
    }

    #[test]
    fn tax_at_100000_is_9400() {
        let result = calculator().tax(dec!(100000));

        assert_eq!(result, dec!(9400.00));
    }

    #[test]
    fn tax_in_top_band_at_700000() {
        // 141900 cumulative to 600000, plus 30% of 100000.
        let result = calculator().tax(dec!(700000));

        assert_eq!(result, dec!(171900.00));
    }

    #[test]
    fn tax_breakdown_uses_ten_brackets_for_top_band_income() {
        let outcome = calculator().tax_with_breakdown(dec!(700000));

        assert_eq!(outcome.breakdown.len(), 10);
    }

    // =========================================================================
    // required_income_for_net_cash tests
    // =========================================================================

    #[test]
    fn solver_returns_zero_for_zero_target() {
        let result = calculator().required_income_for_net_cash(dec!(0), dec!(9000));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn solver_returns_zero_for_negative_target() {
        let result = calculator().required_income_for_net_cash(dec!(-5000), dec!(9000));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn solver_returns_target_when_income_is_untaxed() {
        // 10000 gross minus 9000 reliefs leaves 1000 chargeable at 0%.
        let result = calculator().required_income_for_net_cash(dec!(10000), dec!(9000));

        assert_eq!(result, dec!(10000));
    }

    #[test]
    fn solver_round_trips_within_one_ringgit() {
        let calc = calculator();
        let reliefs = dec!(9000);

        for target in [dec!(50000), dec!(120000), dec!(450000)] {
            let gross = calc.required_income_for_net_cash(target, reliefs);
            let net = gross - calc.tax(gross - reliefs);

            let error = (net - target).abs();
            assert!(
                error <= dec!(2),
                "target {target}: gross {gross} nets {net}"
            );
        }
    }

    #[test]
    fn solver_finds_known_mid_band_answer() {
        // G - tax(G - 9000) = 50000 solves to G = 51021.28 in the 6% band.
        let result = calculator().required_income_for_net_cash(dec!(50000), dec!(9000));

        assert!(
            result >= dec!(51020) && result <= dec!(51023),
            "got {result}"
        );
    }
}

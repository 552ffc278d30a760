//! SME corporate income tax.
//!
//! Qualifying Sdn Bhd companies pay reduced rates on the first RM600k of
//! chargeable profit; above that the standard rate applies. The breakdown
//! variant reports per-bracket amounts under corporate field naming.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::progressive::{progressive_tax, progressive_tax_with_breakdown};
use crate::models::CorporateTaxConfig;
use crate::years::current_tax_year;

/// The share of one bracket in a corporate tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateTaxBreakdown {
    pub bracket_min: Decimal,
    pub bracket_max: Option<Decimal>,
    pub rate: Decimal,
    pub profit_in_bracket: Decimal,
    pub tax_for_bracket: Decimal,
}

/// Corporate tax with its per-bracket decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateTaxOutcome {
    pub tax: Decimal,
    pub breakdown: Vec<CorporateTaxBreakdown>,
}

/// Corporate tax calculator over one year's SME schedule.
#[derive(Debug, Clone, Copy)]
pub struct CorporateTax<'a> {
    config: &'a CorporateTaxConfig,
}

impl<'a> CorporateTax<'a> {
    pub fn new(config: &'a CorporateTaxConfig) -> Self {
        Self { config }
    }

    /// Calculator for the current Year of Assessment.
    pub fn current_year() -> CorporateTax<'static> {
        CorporateTax::new(&current_tax_year().corporate)
    }

    /// Tax on chargeable profit, rounded to 2 dp. Non-positive profit
    /// yields zero.
    pub fn tax(
        &self,
        taxable_profit: Decimal,
    ) -> Decimal {
        progressive_tax(taxable_profit, &self.config.brackets)
    }

    /// Tax with its per-bracket decomposition.
    pub fn tax_with_breakdown(
        &self,
        taxable_profit: Decimal,
    ) -> CorporateTaxOutcome {
        let outcome = progressive_tax_with_breakdown(taxable_profit, &self.config.brackets);

        CorporateTaxOutcome {
            tax: outcome.tax,
            breakdown: outcome
                .breakdown
                .into_iter()
                .map(|item| CorporateTaxBreakdown {
                    bracket_min: item.bracket_min,
                    bracket_max: item.bracket_max,
                    rate: item.rate,
                    profit_in_bracket: item.amount_in_bracket,
                    tax_for_bracket: item.tax_for_bracket,
                })
                .collect(),
        }
    }

    /// The non-SME flat rate for this year.
    pub fn standard_rate(&self) -> Decimal {
        self.config.standard_rate
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn calculator() -> CorporateTax<'static> {
        CorporateTax::current_year()
    }

    #[test]
    fn tax_is_zero_for_zero_profit() {
        let result = calculator().tax(dec!(0));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn tax_within_first_tier_at_15_percent() {
        let result = calculator().tax(dec!(100000));

        assert_eq!(result, dec!(15000.00));
    }

    #[test]
    fn tax_at_first_tier_boundary() {
        let result = calculator().tax(dec!(150000));

        assert_eq!(result, dec!(22500.00));
    }

    #[test]
    fn tax_spans_second_tier_at_17_percent() {
        // 22500 + 17% of 250000.
        let result = calculator().tax(dec!(400000));

        assert_eq!(result, dec!(65000.00));
    }

    #[test]
    fn tax_above_600000_at_24_percent() {
        // 22500 + 76500 + 24% of 400000.
        let result = calculator().tax(dec!(1000000));

        assert_eq!(result, dec!(195000.00));
    }

    #[test]
    fn breakdown_uses_corporate_field_naming() {
        let outcome = calculator().tax_with_breakdown(dec!(200000));

        assert_eq!(outcome.breakdown.len(), 2);
        assert_eq!(outcome.breakdown[0].profit_in_bracket, dec!(150000));
        assert_eq!(outcome.breakdown[1].profit_in_bracket, dec!(50000));
        assert_eq!(outcome.tax, dec!(31000.00));
    }

    #[test]
    fn standard_rate_is_24_percent() {
        assert_eq!(calculator().standard_rate(), dec!(0.24));
    }
}

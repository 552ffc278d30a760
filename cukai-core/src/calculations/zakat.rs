//! Zakat computation, rebates, and deductions.
//!
//! Individuals receive a rebate against tax payable capped at 100% of the
//! liability; companies deduct zakat from aggregate income capped at 2.5%.
//! An income at or above the nisab threshold is zakat-liable.
//!
//! Boundary semantics: [`ZakatCalculator::gross_income_zakat`] exempts with
//! a strict `< nisab` comparison while [`ZakatCalculator::meets_nisab`]
//! qualifies with `>=`. The two agree that income exactly equal to nisab is
//! liable; keep both operators as written.

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up};
use crate::models::{
    ZakatAssessment, ZakatAssessmentInput, ZakatBusinessDeduction, ZakatConfig, ZakatDeductions,
    ZakatMethod, ZakatRebate,
};
use crate::years::current_tax_year;

/// Splits zakat paid by an individual into the rebate against tax payable
/// and the non-refundable excess. Independent of year policy.
pub fn individual_zakat_rebate(
    zakat_paid: Decimal,
    tax_payable: Decimal,
) -> ZakatRebate {
    let rebate = zakat_paid.min(tax_payable);

    ZakatRebate {
        rebate: round_half_up(rebate),
        net_tax: round_half_up(max(tax_payable - rebate, Decimal::ZERO)),
        excess_zakat: round_half_up(max(zakat_paid - tax_payable, Decimal::ZERO)),
    }
}

/// Zakat calculator over one year's nisab and rate.
#[derive(Debug, Clone, Copy)]
pub struct ZakatCalculator<'a> {
    config: &'a ZakatConfig,
}

impl<'a> ZakatCalculator<'a> {
    pub fn new(config: &'a ZakatConfig) -> Self {
        Self { config }
    }

    /// Calculator for the current Year of Assessment.
    pub fn current_year() -> ZakatCalculator<'static> {
        ZakatCalculator::new(&current_tax_year().zakat)
    }

    /// The nisab threshold in force.
    pub fn nisab(&self) -> Decimal {
        self.config.nisab
    }

    /// Whether `income` reaches the nisab threshold (inclusive).
    pub fn meets_nisab(
        &self,
        income: Decimal,
    ) -> bool {
        income >= self.config.nisab
    }

    /// Zakat on gross income: zero below nisab (strictly), else 2.5%
    /// rounded to 2 dp.
    pub fn gross_income_zakat(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        if gross_income < self.config.nisab {
            return Decimal::ZERO;
        }

        round_half_up(gross_income * self.config.rate)
    }

    /// Zakat on income net of deductions, floored at zero, under the same
    /// nisab and rate rule as the gross method.
    pub fn net_income_zakat(
        &self,
        gross_income: Decimal,
        deductions: &ZakatDeductions,
    ) -> Decimal {
        self.gross_income_zakat(max(gross_income - deductions.total(), Decimal::ZERO))
    }

    /// Splits business zakat paid into the deductible part (capped at 2.5%
    /// of aggregate income) and the excess.
    ///
    /// `effective_deduction` mirrors `deduction`; kept as a separate field
    /// for consumers that already read it.
    pub fn business_deduction(
        &self,
        zakat_paid: Decimal,
        aggregate_income: Decimal,
    ) -> ZakatBusinessDeduction {
        let max_deduction = aggregate_income * self.config.rate;
        let deduction = round_half_up(zakat_paid.min(max_deduction));

        ZakatBusinessDeduction {
            deduction,
            excess_zakat: round_half_up(max(zakat_paid - max_deduction, Decimal::ZERO)),
            effective_deduction: deduction,
        }
    }

    /// Full assessment for an individual: computes the obligation for the
    /// elected method, then the rebate the paid amount earns against
    /// `tax_payable`. A disabled election yields an all-zero assessment.
    pub fn assess_individual(
        &self,
        input: &ZakatAssessmentInput,
        gross_income: Decimal,
        tax_payable: Decimal,
    ) -> ZakatAssessment {
        let method = input.method.unwrap_or_default();
        if !input.enabled {
            return self.disabled_assessment(method);
        }

        let base = self.assessment_base(method, gross_income, input.deductions.as_ref());
        let zakat_amount = self.gross_income_zakat(base);
        let paid = input.amount_paid.unwrap_or(zakat_amount);
        let rebate = individual_zakat_rebate(paid, tax_payable);

        ZakatAssessment {
            zakat_amount,
            meets_nisab: self.meets_nisab(base),
            nisab_threshold: self.config.nisab,
            tax_rebate: Some(rebate.rebate),
            tax_deduction: None,
            net_tax_impact: rebate.rebate,
            method,
        }
    }

    /// Full assessment for a company: computes the obligation for the
    /// elected method over aggregate income, then the capped deduction the
    /// paid amount earns.
    pub fn assess_business(
        &self,
        input: &ZakatAssessmentInput,
        aggregate_income: Decimal,
    ) -> ZakatAssessment {
        let method = input.method.unwrap_or_default();
        if !input.enabled {
            return self.disabled_assessment(method);
        }

        let base = self.assessment_base(method, aggregate_income, input.deductions.as_ref());
        let zakat_amount = self.gross_income_zakat(base);
        let paid = input.amount_paid.unwrap_or(zakat_amount);
        let deduction = self.business_deduction(paid, aggregate_income);

        ZakatAssessment {
            zakat_amount,
            meets_nisab: self.meets_nisab(base),
            nisab_threshold: self.config.nisab,
            tax_rebate: None,
            tax_deduction: Some(deduction.deduction),
            net_tax_impact: deduction.deduction,
            method,
        }
    }

    fn assessment_base(
        &self,
        method: ZakatMethod,
        income: Decimal,
        deductions: Option<&ZakatDeductions>,
    ) -> Decimal {
        match method {
            ZakatMethod::GrossIncome => income,
            // Working capital shares the deduction-adjusted base rule.
            ZakatMethod::NetIncome | ZakatMethod::WorkingCapital => max(
                income - deductions.map(ZakatDeductions::total).unwrap_or_default(),
                Decimal::ZERO,
            ),
        }
    }

    fn disabled_assessment(
        &self,
        method: ZakatMethod,
    ) -> ZakatAssessment {
        ZakatAssessment {
            zakat_amount: Decimal::ZERO,
            meets_nisab: false,
            nisab_threshold: self.config.nisab,
            tax_rebate: None,
            tax_deduction: None,
            net_tax_impact: Decimal::ZERO,
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn calculator() -> ZakatCalculator<'static> {
        ZakatCalculator::current_year()
    }

    // =========================================================================
    // gross_income_zakat tests
    // =========================================================================

    #[test]
    fn gross_income_zakat_is_zero_strictly_below_nisab() {
        assert_eq!(calculator().gross_income_zakat(dec!(29960)), dec!(0));
    }

    #[test]
    fn gross_income_zakat_applies_exactly_at_nisab() {
        // Income equal to nisab is liable: strict < is the exemption.
        let result = calculator().gross_income_zakat(dec!(29961));

        assert_eq!(result, dec!(749.03));
    }

    #[test]
    fn gross_income_zakat_is_two_and_half_percent() {
        assert_eq!(calculator().gross_income_zakat(dec!(100000)), dec!(2500.00));
    }

    // =========================================================================
    // net_income_zakat tests
    // =========================================================================

    #[test]
    fn net_income_zakat_subtracts_deductions_before_nisab_check() {
        // 40000 - 11000 leaves 29000, below nisab.
        let deductions = ZakatDeductions {
            epf: Some(dec!(6000)),
            expenses: Some(dec!(4000)),
            other: Some(dec!(1000)),
        };

        let result = calculator().net_income_zakat(dec!(40000), &deductions);

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn net_income_zakat_taxes_the_net_base() {
        let deductions = ZakatDeductions {
            epf: Some(dec!(10000)),
            ..Default::default()
        };

        let result = calculator().net_income_zakat(dec!(50000), &deductions);

        assert_eq!(result, dec!(1000.00));
    }

    #[test]
    fn net_income_zakat_floors_base_at_zero() {
        let deductions = ZakatDeductions {
            expenses: Some(dec!(60000)),
            ..Default::default()
        };

        let result = calculator().net_income_zakat(dec!(50000), &deductions);

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // nisab accessors
    // =========================================================================

    #[test]
    fn meets_nisab_is_inclusive() {
        assert!(calculator().meets_nisab(dec!(29961)));
        assert!(!calculator().meets_nisab(dec!(29960.99)));
    }

    #[test]
    fn nisab_exposes_threshold() {
        assert_eq!(calculator().nisab(), dec!(29961));
    }

    // =========================================================================
    // individual_zakat_rebate tests
    // =========================================================================

    #[test]
    fn rebate_is_capped_at_tax_payable() {
        let result = individual_zakat_rebate(dec!(8000), dec!(5000));

        assert_eq!(
            result,
            ZakatRebate {
                rebate: dec!(5000.00),
                net_tax: dec!(0.00),
                excess_zakat: dec!(3000.00),
            }
        );
    }

    #[test]
    fn rebate_below_tax_leaves_residual_tax() {
        let result = individual_zakat_rebate(dec!(2000), dec!(5000));

        assert_eq!(
            result,
            ZakatRebate {
                rebate: dec!(2000.00),
                net_tax: dec!(3000.00),
                excess_zakat: dec!(0.00),
            }
        );
    }

    // =========================================================================
    // business_deduction tests
    // =========================================================================

    #[test]
    fn business_deduction_is_capped_at_rate_of_aggregate_income() {
        let result = calculator().business_deduction(dec!(5000), dec!(100000));

        assert_eq!(
            result,
            ZakatBusinessDeduction {
                deduction: dec!(2500.00),
                excess_zakat: dec!(2500.00),
                effective_deduction: dec!(2500.00),
            }
        );
    }

    #[test]
    fn business_deduction_passes_through_below_cap() {
        let result = calculator().business_deduction(dec!(1000), dec!(100000));

        assert_eq!(result.deduction, dec!(1000.00));
        assert_eq!(result.excess_zakat, dec!(0.00));
        assert_eq!(result.effective_deduction, result.deduction);
    }

    // =========================================================================
    // assessment tests
    // =========================================================================

    #[test]
    fn disabled_election_assesses_to_zero() {
        let input = ZakatAssessmentInput::default();

        let result = calculator().assess_individual(&input, dec!(100000), dec!(9400));

        assert_eq!(result.zakat_amount, dec!(0));
        assert_eq!(result.tax_rebate, None);
        assert_eq!(result.net_tax_impact, dec!(0));
        assert!(!result.meets_nisab);
    }

    #[test]
    fn individual_assessment_defaults_paid_to_obligation() {
        let input = ZakatAssessmentInput {
            enabled: true,
            ..Default::default()
        };

        let result = calculator().assess_individual(&input, dec!(100000), dec!(9400));

        assert_eq!(result.zakat_amount, dec!(2500.00));
        assert_eq!(result.tax_rebate, Some(dec!(2500.00)));
        assert_eq!(result.net_tax_impact, dec!(2500.00));
        assert!(result.meets_nisab);
        assert_eq!(result.method, ZakatMethod::GrossIncome);
    }

    #[test]
    fn individual_assessment_caps_rebate_at_tax_payable() {
        let input = ZakatAssessmentInput {
            enabled: true,
            amount_paid: Some(dec!(8000)),
            ..Default::default()
        };

        let result = calculator().assess_individual(&input, dec!(100000), dec!(5000));

        assert_eq!(result.tax_rebate, Some(dec!(5000.00)));
    }

    #[test]
    fn business_assessment_reports_capped_deduction() {
        let input = ZakatAssessmentInput {
            enabled: true,
            amount_paid: Some(dec!(5000)),
            ..Default::default()
        };

        let result = calculator().assess_business(&input, dec!(100000));

        assert_eq!(result.tax_deduction, Some(dec!(2500.00)));
        assert_eq!(result.net_tax_impact, dec!(2500.00));
        assert_eq!(result.tax_rebate, None);
    }

    #[test]
    fn net_income_method_flows_through_assessment() {
        let input = ZakatAssessmentInput {
            enabled: true,
            method: Some(ZakatMethod::NetIncome),
            deductions: Some(ZakatDeductions {
                epf: Some(dec!(10000)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let result = calculator().assess_individual(&input, dec!(50000), dec!(1500));

        assert_eq!(result.zakat_amount, dec!(1000.00));
        assert_eq!(result.method, ZakatMethod::NetIncome);
    }
}

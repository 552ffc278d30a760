//! Property tests over the calculation engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use cukai_core::calculations::epf::EpfCalculator;
use cukai_core::calculations::progressive::{progressive_tax, progressive_tax_with_breakdown};
use cukai_core::calculations::zakat::individual_zakat_rebate;
use cukai_core::current_tax_year;

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_progressive_tax_is_monotone_in_amount(
        amount_sen in 0u64..200_000_000,
        step_sen in 0u64..50_000_000,
    ) {
        let brackets = &current_tax_year().personal.brackets;
        let lower = Decimal::new(amount_sen as i64, 2);
        let higher = lower + Decimal::new(step_sen as i64, 2);

        prop_assert!(progressive_tax(higher, brackets) >= progressive_tax(lower, brackets));
    }

    #[test]
    fn prop_breakdown_sums_to_total_within_rounding(
        amount_sen in 0u64..200_000_000,
    ) {
        let brackets = &current_tax_year().personal.brackets;
        let amount = Decimal::new(amount_sen as i64, 2);

        let outcome = progressive_tax_with_breakdown(amount, brackets);
        let sum: Decimal = outcome.breakdown.iter().map(|b| b.tax_for_bracket).sum();

        // Each entry is rounded independently; at most one cent per bracket.
        let tolerance = Decimal::new(brackets.len() as i64, 2);
        prop_assert!((sum - outcome.tax).abs() <= tolerance);
    }

    #[test]
    fn prop_effective_rate_never_exceeds_top_marginal_rate(
        amount_rm in 1u64..5_000_000,
    ) {
        let brackets = &current_tax_year().personal.brackets;
        let amount = Decimal::from(amount_rm);

        let tax = progressive_tax(amount, brackets);
        prop_assert!(tax <= amount * dec!(0.30));
    }

    #[test]
    fn prop_max_affordable_salary_round_trips(
        profit_rm in 1u64..2_000_000,
    ) {
        let epf = EpfCalculator::current_year();
        let profit = Decimal::from(profit_rm);

        let salary = epf.max_affordable_salary(profit);
        let spent = salary + epf.employer_contribution(salary);

        prop_assert!((spent - profit).abs() <= dec!(1), "salary {salary} spends {spent}");
    }

    #[test]
    fn prop_zakat_rebate_never_makes_tax_negative(
        paid_sen in 0u64..10_000_000,
        tax_sen in 0u64..10_000_000,
    ) {
        let paid = Decimal::new(paid_sen as i64, 2);
        let tax = Decimal::new(tax_sen as i64, 2);

        let rebate = individual_zakat_rebate(paid, tax);

        prop_assert!(rebate.net_tax >= Decimal::ZERO);
        prop_assert!(rebate.rebate <= tax);
        prop_assert_eq!(rebate.rebate + rebate.net_tax, tax);
        prop_assert_eq!(rebate.rebate + rebate.excess_zakat, paid);
    }
}

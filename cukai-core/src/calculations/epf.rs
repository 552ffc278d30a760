//! EPF statutory retirement contributions.
//!
//! Both contribution functions take an **annual** salary; the employer
//! rate tier is decided on the monthly equivalent (13% at or below RM5,000
//! per month, 12% above). Contrast with the SOCSO functions, which take a
//! monthly salary.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cukai_core::calculations::epf::EpfCalculator;
//!
//! let epf = EpfCalculator::current_year();
//!
//! // RM4,000/month stays in the 13% tier.
//! assert_eq!(epf.employer_contribution(dec!(48000)), dec!(6240.00));
//! assert_eq!(epf.employee_contribution(dec!(48000)), dec!(5280.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::EpfConfig;
use crate::years::current_tax_year;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// EPF contribution calculator over one year's rates.
#[derive(Debug, Clone, Copy)]
pub struct EpfCalculator<'a> {
    config: &'a EpfConfig,
}

impl<'a> EpfCalculator<'a> {
    pub fn new(config: &'a EpfConfig) -> Self {
        Self { config }
    }

    /// Calculator for the current Year of Assessment.
    pub fn current_year() -> EpfCalculator<'static> {
        EpfCalculator::new(&current_tax_year().epf)
    }

    /// Employer contribution on an annual salary, rounded to 2 dp.
    /// Non-positive salary yields zero.
    pub fn employer_contribution(
        &self,
        annual_salary: Decimal,
    ) -> Decimal {
        if annual_salary <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let rate = if annual_salary / MONTHS_PER_YEAR <= self.config.monthly_threshold {
            self.config.employer_rate_low
        } else {
            self.config.employer_rate_high
        };

        round_half_up(annual_salary * rate)
    }

    /// Employee contribution on an annual salary, flat rate, rounded to
    /// 2 dp. Non-positive salary yields zero.
    pub fn employee_contribution(
        &self,
        annual_salary: Decimal,
    ) -> Decimal {
        if annual_salary <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        round_half_up(annual_salary * self.config.employee_rate)
    }

    /// The largest annual salary such that salary plus employer EPF
    /// exhausts `business_profit` exactly.
    ///
    /// Closed form rather than iterative: the employer rate only depends
    /// on which side of the monthly threshold the salary falls, so the two
    /// candidate formulas `profit / 1.12` and `profit / 1.13` are each
    /// self-validating. Try the high-tier formula first; if its monthly
    /// salary clears the threshold it is the answer, otherwise the
    /// low-tier formula is. Breaks if EPF ever gains a third rate tier —
    /// that would need an iterative search like the personal-tax inverse
    /// solver.
    pub fn max_affordable_salary(
        &self,
        business_profit: Decimal,
    ) -> Decimal {
        if business_profit <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let high_tier_salary = business_profit / (Decimal::ONE + self.config.employer_rate_high);
        if high_tier_salary / MONTHS_PER_YEAR > self.config.monthly_threshold {
            return round_half_up(high_tier_salary);
        }

        round_half_up(business_profit / (Decimal::ONE + self.config.employer_rate_low))
    }
}

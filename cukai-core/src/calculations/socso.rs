//! SOCSO statutory social security contributions.
//!
//! Both contribution functions take a **monthly** salary, unlike the EPF
//! functions which take an annual salary. Above the RM6,000 wage ceiling
//! contribution becomes optional and this engine treats optional as not
//! contributed.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::SocsoConfig;
use crate::years::current_tax_year;

/// SOCSO contribution calculator over one year's rates.
#[derive(Debug, Clone, Copy)]
pub struct SocsoCalculator<'a> {
    config: &'a SocsoConfig,
}

impl<'a> SocsoCalculator<'a> {
    pub fn new(config: &'a SocsoConfig) -> Self {
        Self { config }
    }

    /// Calculator for the current Year of Assessment.
    pub fn current_year() -> SocsoCalculator<'static> {
        SocsoCalculator::new(&current_tax_year().socso)
    }

    /// Employer contribution on a monthly salary, rounded to 2 dp.
    /// Zero for non-positive salary or above the wage ceiling.
    pub fn employer_contribution(
        &self,
        monthly_salary: Decimal,
    ) -> Decimal {
        self.contribution(monthly_salary, self.config.employer_rate)
    }

    /// Employee contribution on a monthly salary, rounded to 2 dp.
    /// Zero for non-positive salary or above the wage ceiling.
    pub fn employee_contribution(
        &self,
        monthly_salary: Decimal,
    ) -> Decimal {
        self.contribution(monthly_salary, self.config.employee_rate)
    }

    fn contribution(
        &self,
        monthly_salary: Decimal,
        rate: Decimal,
    ) -> Decimal {
        if monthly_salary <= Decimal::ZERO || monthly_salary > self.config.monthly_wage_ceiling {
            return Decimal::ZERO;
        }

        round_half_up(monthly_salary * rate)
    }
}

//! Enterprise versus Sdn Bhd net-cash comparison.
//!
//! Assembles the individual rules into the two full structures a business
//! owner chooses between: staying a sole proprietorship taxed under the
//! personal schedule, or incorporating, paying a director salary with
//! statutory contributions, corporate tax on the remainder, and drawing
//! the rest as dividends.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up};
use crate::calculations::corporate::CorporateTax;
use crate::calculations::dividend::DividendSurcharge;
use crate::calculations::epf::EpfCalculator;
use crate::calculations::personal::PersonalTax;
use crate::calculations::socso::SocsoCalculator;
use crate::calculations::zakat::ZakatCalculator;
use crate::models::{TaxYearConfig, ZakatAssessment, ZakatAssessmentInput};
use crate::years::current_tax_year;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Inputs for one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// Annual business profit before owner remuneration and tax.
    pub business_profit: Decimal,

    /// Annual director salary drawn under the Sdn Bhd structure.
    pub annual_salary: Decimal,

    /// Fraction of after-tax profit distributed as dividends, clamped to
    /// `[0, 1]`.
    pub dividend_payout_ratio: Decimal,

    /// Total personal reliefs; the year's basic relief when absent.
    pub total_reliefs: Option<Decimal>,

    /// Zakat election, applied as an individual rebate on the Enterprise
    /// side and a business deduction on the Sdn Bhd side.
    pub zakat: ZakatAssessmentInput,
}

/// Sole-proprietorship outcome: profit taxed as personal income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseOutcome {
    pub taxable_income: Decimal,
    pub tax_payable: Decimal,
    pub zakat: ZakatAssessment,
    pub zakat_paid: Decimal,
    pub net_cash: Decimal,
}

/// Sdn Bhd outcome: salary, statutory contributions, corporate tax, and
/// dividends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdnBhdOutcome {
    pub employer_epf: Decimal,
    pub employer_socso: Decimal,
    pub corporate_taxable_profit: Decimal,
    pub zakat: ZakatAssessment,
    pub zakat_paid: Decimal,
    pub corporate_tax: Decimal,
    pub after_tax_profit: Decimal,
    pub dividends: Decimal,
    pub dividend_surcharge: Decimal,
    pub retained_profit: Decimal,
    pub personal_tax_on_salary: Decimal,
    pub employee_epf: Decimal,
    pub employee_socso: Decimal,
    pub director_take_home: Decimal,
    pub net_cash: Decimal,
}

/// Both outcomes side by side. `advantage` is Sdn Bhd net cash minus
/// Enterprise net cash; positive favors incorporating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub enterprise: EnterpriseOutcome,
    pub sdn_bhd: SdnBhdOutcome,
    pub advantage: Decimal,
}

/// Comparison engine over one year's full policy.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> Comparison<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Engine for the current Year of Assessment.
    pub fn current_year() -> Comparison<'static> {
        Comparison::new(current_tax_year())
    }

    pub fn compare(
        &self,
        input: &ComparisonInput,
    ) -> ComparisonResult {
        let enterprise = self.enterprise(input);
        let sdn_bhd = self.sdn_bhd(input);
        let advantage = sdn_bhd.net_cash - enterprise.net_cash;

        ComparisonResult {
            enterprise,
            sdn_bhd,
            advantage,
        }
    }

    fn enterprise(
        &self,
        input: &ComparisonInput,
    ) -> EnterpriseOutcome {
        let personal = PersonalTax::new(&self.config.personal);
        let zakat_calc = ZakatCalculator::new(&self.config.zakat);

        let taxable_income = max(input.business_profit - self.reliefs(input), Decimal::ZERO);
        let tax_payable = personal.tax(taxable_income);

        let zakat = zakat_calc.assess_individual(&input.zakat, input.business_profit, tax_payable);
        let zakat_paid = zakat_paid(&input.zakat, &zakat);

        // The rebate is capped at the tax payable, so the subtraction
        // cannot go negative.
        let net_tax = tax_payable - zakat.net_tax_impact;
        let net_cash = input.business_profit - net_tax - zakat_paid;

        EnterpriseOutcome {
            taxable_income,
            tax_payable,
            zakat,
            zakat_paid,
            net_cash,
        }
    }

    fn sdn_bhd(
        &self,
        input: &ComparisonInput,
    ) -> SdnBhdOutcome {
        let personal = PersonalTax::new(&self.config.personal);
        let corporate = CorporateTax::new(&self.config.corporate);
        let epf = EpfCalculator::new(&self.config.epf);
        let socso = SocsoCalculator::new(&self.config.socso);
        let dividend = DividendSurcharge::new(&self.config.dividend);
        let zakat_calc = ZakatCalculator::new(&self.config.zakat);

        let salary = max(input.annual_salary, Decimal::ZERO);
        let monthly_salary = salary / MONTHS_PER_YEAR;

        let employer_epf = epf.employer_contribution(salary);
        let employer_socso = socso.employer_contribution(monthly_salary) * MONTHS_PER_YEAR;

        let corporate_taxable_profit = max(
            input.business_profit - salary - employer_epf - employer_socso,
            Decimal::ZERO,
        );

        let zakat = zakat_calc.assess_business(&input.zakat, corporate_taxable_profit);
        let zakat_paid = zakat_paid(&input.zakat, &zakat);

        let chargeable_profit = max(
            corporate_taxable_profit - zakat.net_tax_impact,
            Decimal::ZERO,
        );
        let corporate_tax = corporate.tax(chargeable_profit);

        let after_tax_profit = max(
            corporate_taxable_profit - corporate_tax - zakat_paid,
            Decimal::ZERO,
        );

        let payout_ratio = input
            .dividend_payout_ratio
            .clamp(Decimal::ZERO, Decimal::ONE);
        let dividends = round_half_up(after_tax_profit * payout_ratio);
        let dividend_surcharge = dividend.surcharge(dividends);
        let retained_profit = after_tax_profit - dividends;

        let personal_tax_on_salary = personal.tax(max(salary - self.reliefs(input), Decimal::ZERO));
        let employee_epf = epf.employee_contribution(salary);
        let employee_socso = socso.employee_contribution(monthly_salary) * MONTHS_PER_YEAR;

        let director_take_home = salary - employee_epf - employee_socso - personal_tax_on_salary
            + dividends
            - dividend_surcharge;

        SdnBhdOutcome {
            employer_epf,
            employer_socso,
            corporate_taxable_profit,
            zakat,
            zakat_paid,
            corporate_tax,
            after_tax_profit,
            dividends,
            dividend_surcharge,
            retained_profit,
            personal_tax_on_salary,
            employee_epf,
            employee_socso,
            net_cash: director_take_home + retained_profit,
            director_take_home,
        }
    }

    fn reliefs(
        &self,
        input: &ComparisonInput,
    ) -> Decimal {
        input
            .total_reliefs
            .unwrap_or(self.config.personal.default_total_reliefs)
    }
}

fn zakat_paid(
    input: &ZakatAssessmentInput,
    assessment: &ZakatAssessment,
) -> Decimal {
    if !input.enabled {
        return Decimal::ZERO;
    }

    input.amount_paid.unwrap_or(assessment.zakat_amount)
}

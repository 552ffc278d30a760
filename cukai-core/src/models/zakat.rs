use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which base the zakat calculation uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZakatMethod {
    #[default]
    GrossIncome,
    NetIncome,
    WorkingCapital,
}

/// Deductions applied before the net-income zakat base.
///
/// Each component is optional and defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatDeductions {
    pub epf: Option<Decimal>,
    pub expenses: Option<Decimal>,
    pub other: Option<Decimal>,
}

impl ZakatDeductions {
    pub fn total(&self) -> Decimal {
        self.epf.unwrap_or_default()
            + self.expenses.unwrap_or_default()
            + self.other.unwrap_or_default()
    }
}

/// A user's zakat election for one calculation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatAssessmentInput {
    /// Whether zakat is considered at all. When false, the assessment is
    /// all zeros regardless of the other fields.
    pub enabled: bool,

    /// Zakat actually paid during the year. Defaults to the computed
    /// obligation when absent.
    pub amount_paid: Option<Decimal>,

    /// Calculation method; defaults to gross income.
    pub method: Option<ZakatMethod>,

    /// Deductions for the net-income and working-capital methods.
    pub deductions: Option<ZakatDeductions>,
}

/// Result of a full zakat assessment, derived per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatAssessment {
    /// The zakat obligation for the chosen method.
    pub zakat_amount: Decimal,

    /// Whether the assessed base reached the nisab threshold.
    pub meets_nisab: bool,

    /// The nisab threshold in force for the tax year.
    pub nisab_threshold: Decimal,

    /// Individual assessments only: rebate against personal tax payable.
    pub tax_rebate: Option<Decimal>,

    /// Business assessments only: deduction against aggregate income.
    pub tax_deduction: Option<Decimal>,

    /// The amount by which zakat reduced the tax position.
    pub net_tax_impact: Decimal,

    /// The method that produced this assessment.
    pub method: ZakatMethod,
}

/// Individual zakat rebate split: capped at 100% of tax payable, with any
/// excess tracked as non-refundable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatRebate {
    pub rebate: Decimal,
    pub net_tax: Decimal,
    pub excess_zakat: Decimal,
}

/// Business zakat deduction split, capped at 2.5% of aggregate income.
///
/// `effective_deduction` currently always equals `deduction`; the field is
/// kept separate for API stability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatBusinessDeduction {
    pub deduction: Decimal,
    pub excess_zakat: Decimal,
    pub effective_deduction: Decimal,
}

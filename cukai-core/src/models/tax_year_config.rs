use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors found when validating a [`TaxYearConfig`].
///
/// Validation runs over the year-config constants at test time; the
/// calculation functions assume valid configuration and never re-check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxYearConfigError {
    #[error("{schedule} schedule has no brackets")]
    EmptyBrackets { schedule: &'static str },

    #[error("{schedule} schedule must start at zero, got {min}")]
    NonZeroFirstBracket { schedule: &'static str, min: Decimal },

    #[error("{schedule} bracket {index} is not contiguous with its predecessor")]
    NonContiguousBrackets { schedule: &'static str, index: usize },

    #[error("{schedule} bracket {index} has rate {rate} outside [0, 1]")]
    InvalidRate {
        schedule: &'static str,
        index: usize,
        rate: Decimal,
    },

    #[error("{schedule} bracket {index} has max {max} not above min {min}")]
    EmptyBracketRange {
        schedule: &'static str,
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("{schedule} top bracket must be unbounded")]
    BoundedTopBracket { schedule: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositiveThreshold {
        field: &'static str,
        value: Decimal,
    },
}

/// Personal (resident individual) income tax policy for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalTaxConfig {
    /// Progressive schedule over chargeable income.
    pub brackets: Vec<TaxBracket>,

    /// Total reliefs assumed when the caller supplies none
    /// (the basic individual relief).
    pub default_total_reliefs: Decimal,

    /// Statutory caps on the well-known relief categories.
    pub relief_limits: ReliefLimits,
}

/// Per-category relief caps for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefLimits {
    pub basic: Decimal,
    pub epf_and_life_insurance: Decimal,
    pub medical: Decimal,
    pub spouse: Decimal,
    pub children: Decimal,
    pub education: Decimal,
}

/// SME corporate income tax policy for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateTaxConfig {
    /// Progressive SME schedule over chargeable profit.
    pub brackets: Vec<TaxBracket>,

    /// The non-SME flat rate, equal to the top SME bracket rate.
    pub standard_rate: Decimal,
}

/// EPF contribution policy. Both contribution functions take an
/// **annual** salary; the rate tier is decided on the monthly equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpfConfig {
    /// Employer rate when monthly salary is at or below the threshold.
    pub employer_rate_low: Decimal,

    /// Employer rate when monthly salary exceeds the threshold.
    pub employer_rate_high: Decimal,

    /// Monthly salary threshold dividing the two employer tiers.
    pub monthly_threshold: Decimal,

    /// Employee rate, flat across all salary levels.
    pub employee_rate: Decimal,
}

/// SOCSO contribution policy. Contribution functions take a **monthly**
/// salary; above the wage ceiling contribution is optional and treated
/// as not contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocsoConfig {
    pub employer_rate: Decimal,
    pub employee_rate: Decimal,
    pub monthly_wage_ceiling: Decimal,
}

/// Dividend surcharge policy (YA2025 onward).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendConfig {
    /// Annual dividend income at or below this amount is exempt.
    pub exempt_threshold: Decimal,

    /// Flat surcharge rate on the excess above the threshold.
    pub surcharge_rate: Decimal,
}

/// Zakat policy: nisab threshold and rate, shared by the individual and
/// business rules in the current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatConfig {
    pub nisab: Decimal,
    pub rate: Decimal,
}

/// Audit-exemption thresholds; a company must satisfy all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditExemptionConfig {
    pub max_revenue: Decimal,
    pub max_total_assets: Decimal,
    pub max_employees: u32,
}

/// The aggregate tax policy for one Year of Assessment.
///
/// Every calculator borrows its slice of this config; the registry in
/// [`crate::years`] is the single source of truth for the numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    /// Year of Assessment key, e.g. `"YA2024-2025"`.
    pub year_assessment: String,

    pub personal: PersonalTaxConfig,
    pub corporate: CorporateTaxConfig,
    pub epf: EpfConfig,
    pub socso: SocsoConfig,
    pub dividend: DividendConfig,
    pub zakat: ZakatConfig,
    pub audit_exemption: AuditExemptionConfig,
}

impl TaxYearConfig {
    /// Checks internal consistency: contiguous ascending brackets with
    /// valid rates and an unbounded top tier, and positive thresholds.
    pub fn validate(&self) -> Result<(), TaxYearConfigError> {
        validate_brackets("personal", &self.personal.brackets)?;
        validate_brackets("corporate", &self.corporate.brackets)?;

        for (field, value) in [
            ("epf.monthly_threshold", self.epf.monthly_threshold),
            ("socso.monthly_wage_ceiling", self.socso.monthly_wage_ceiling),
            ("dividend.exempt_threshold", self.dividend.exempt_threshold),
            ("zakat.nisab", self.zakat.nisab),
            ("audit_exemption.max_revenue", self.audit_exemption.max_revenue),
            (
                "audit_exemption.max_total_assets",
                self.audit_exemption.max_total_assets,
            ),
        ] {
            if value <= Decimal::ZERO {
                return Err(TaxYearConfigError::NonPositiveThreshold { field, value });
            }
        }

        Ok(())
    }
}

fn validate_brackets(
    schedule: &'static str,
    brackets: &[TaxBracket],
) -> Result<(), TaxYearConfigError> {
    let Some(first) = brackets.first() else {
        return Err(TaxYearConfigError::EmptyBrackets { schedule });
    };

    if first.min != Decimal::ZERO {
        return Err(TaxYearConfigError::NonZeroFirstBracket {
            schedule,
            min: first.min,
        });
    }

    let mut previous_max: Option<Decimal> = None;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(TaxYearConfigError::InvalidRate {
                schedule,
                index,
                rate: bracket.rate,
            });
        }

        if let Some(prev) = previous_max
            && bracket.min != prev
        {
            return Err(TaxYearConfigError::NonContiguousBrackets { schedule, index });
        }

        match bracket.max {
            Some(max) if max <= bracket.min => {
                return Err(TaxYearConfigError::EmptyBracketRange {
                    schedule,
                    index,
                    min: bracket.min,
                    max,
                });
            }
            Some(_) => {}
            None if index + 1 != brackets.len() => {
                // An unbounded tier below the top makes later tiers unreachable.
                return Err(TaxYearConfigError::NonContiguousBrackets {
                    schedule,
                    index: index + 1,
                });
            }
            None => {}
        }

        previous_max = bracket.max;
    }

    if previous_max.is_some() {
        return Err(TaxYearConfigError::BoundedTopBracket { schedule });
    }

    Ok(())
}

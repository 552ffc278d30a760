//! Audit-exemption eligibility for private companies.

use crate::models::{AuditExemptionConfig, AuditExemptionCriteria};
use crate::years::current_tax_year;

/// Audit-exemption rule over one year's thresholds.
#[derive(Debug, Clone, Copy)]
pub struct AuditExemption<'a> {
    config: &'a AuditExemptionConfig,
}

impl<'a> AuditExemption<'a> {
    pub fn new(config: &'a AuditExemptionConfig) -> Self {
        Self { config }
    }

    /// Rule for the current Year of Assessment.
    pub fn current_year() -> AuditExemption<'static> {
        AuditExemption::new(&current_tax_year().audit_exemption)
    }

    /// A company is exempt only when all three criteria hold: revenue,
    /// total assets, and headcount each at or below their thresholds.
    pub fn is_exempt(
        &self,
        criteria: &AuditExemptionCriteria,
    ) -> bool {
        criteria.revenue <= self.config.max_revenue
            && criteria.total_assets <= self.config.max_total_assets
            && criteria.employees <= self.config.max_employees
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a company's financial profile for the audit-exemption check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditExemptionCriteria {
    /// Annual revenue for the financial year.
    pub revenue: Decimal,

    /// Total assets at the end of the financial year.
    pub total_assets: Decimal,

    /// Number of employees at the end of the financial year.
    pub employees: u32,
}

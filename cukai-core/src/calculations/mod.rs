//! Tax calculation modules for the Enterprise-vs-Sdn-Bhd comparison.
//!
//! Each module covers one statutory rule set; all of them read their
//! policy from a borrowed slice of [`crate::models::TaxYearConfig`] and
//! default to the current Year of Assessment via a `current_year`
//! constructor.

pub mod audit_exemption;
pub mod common;
pub mod comparison;
pub mod corporate;
pub mod dividend;
pub mod epf;
pub mod personal;
pub mod progressive;
pub mod socso;
pub mod zakat;

pub use audit_exemption::AuditExemption;
pub use comparison::{Comparison, ComparisonInput, ComparisonResult};
pub use corporate::{CorporateTax, CorporateTaxBreakdown, CorporateTaxOutcome};
pub use dividend::DividendSurcharge;
pub use epf::EpfCalculator;
pub use personal::PersonalTax;
pub use progressive::{
    ProgressiveTaxOutcome, progressive_tax, progressive_tax_breakdown,
    progressive_tax_with_breakdown,
};
pub use socso::SocsoCalculator;
pub use zakat::{ZakatCalculator, individual_zakat_rebate};

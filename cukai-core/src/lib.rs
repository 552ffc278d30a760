//! Malaysian small-business tax comparison engine.
//!
//! Computes the net cash outcome of operating as a sole proprietorship
//! ("Enterprise") versus a private limited company ("Sdn Bhd"):
//! progressive personal and SME corporate tax, EPF and SOCSO statutory
//! contributions, the audit-exemption rule, the dividend surcharge, and
//! zakat treatment, all versioned by Year of Assessment.
//!
//! All engine functions are pure and synchronous; amounts are
//! [`rust_decimal::Decimal`] rounded half-away-from-zero at the cent.

pub mod calculations;
pub mod memo;
pub mod models;
pub mod years;

pub use calculations::{
    AuditExemption, Comparison, ComparisonInput, ComparisonResult, CorporateTax,
    DividendSurcharge, EpfCalculator, PersonalTax, SocsoCalculator, ZakatCalculator,
};
pub use models::*;
pub use years::{CURRENT_TAX_YEAR, available_tax_years, current_tax_year, tax_year};

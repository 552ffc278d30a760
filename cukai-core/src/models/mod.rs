mod audit;
mod reliefs;
mod tax_bracket;
mod tax_year_config;
mod zakat;

pub use audit::AuditExemptionCriteria;
pub use reliefs::PersonalReliefs;
pub use tax_bracket::{TaxBracket, TaxBracketBreakdown};
pub use tax_year_config::{
    AuditExemptionConfig, CorporateTaxConfig, DividendConfig, EpfConfig, PersonalTaxConfig,
    ReliefLimits, SocsoConfig, TaxYearConfig, TaxYearConfigError, ZakatConfig,
};
pub use zakat::{
    ZakatAssessment, ZakatAssessmentInput, ZakatBusinessDeduction, ZakatDeductions, ZakatMethod,
    ZakatRebate,
};

//! Year of Assessment policy registry.
//!
//! All rates, brackets, and thresholds live here, keyed by YA. Adding a
//! future year means adding one constructor and flipping
//! [`CURRENT_TAX_YEAR`]; the calculation modules read their policy from a
//! borrowed [`TaxYearConfig`] slice and contain no numeric constants of
//! their own.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal_macros::dec;

use crate::models::{
    AuditExemptionConfig, CorporateTaxConfig, DividendConfig, EpfConfig, PersonalTaxConfig,
    ReliefLimits, SocsoConfig, TaxBracket, TaxYearConfig, ZakatConfig,
};

/// The Year of Assessment used when a caller does not pick one explicitly.
pub const CURRENT_TAX_YEAR: &str = "YA2024-2025";

static TAX_YEARS: LazyLock<BTreeMap<&'static str, TaxYearConfig>> = LazyLock::new(|| {
    let mut years = BTreeMap::new();
    years.insert(CURRENT_TAX_YEAR, ya_2024_2025());
    years
});

/// The config for [`CURRENT_TAX_YEAR`].
pub fn current_tax_year() -> &'static TaxYearConfig {
    // The current-year key is inserted unconditionally above.
    &TAX_YEARS[CURRENT_TAX_YEAR]
}

/// Looks up a Year of Assessment by key; `None` for unknown years.
pub fn tax_year(key: &str) -> Option<&'static TaxYearConfig> {
    TAX_YEARS.get(key)
}

/// All registered Year of Assessment keys, ascending.
pub fn available_tax_years() -> Vec<&'static str> {
    TAX_YEARS.keys().copied().collect()
}

fn ya_2024_2025() -> TaxYearConfig {
    TaxYearConfig {
        year_assessment: CURRENT_TAX_YEAR.to_string(),
        personal: PersonalTaxConfig {
            // Resident individual schedule, YA2024/2025.
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(5000)), dec!(0)),
                TaxBracket::new(dec!(5000), Some(dec!(20000)), dec!(0.01)),
                TaxBracket::new(dec!(20000), Some(dec!(35000)), dec!(0.03)),
                TaxBracket::new(dec!(35000), Some(dec!(50000)), dec!(0.06)),
                TaxBracket::new(dec!(50000), Some(dec!(70000)), dec!(0.11)),
                TaxBracket::new(dec!(70000), Some(dec!(100000)), dec!(0.19)),
                TaxBracket::new(dec!(100000), Some(dec!(250000)), dec!(0.25)),
                TaxBracket::new(dec!(250000), Some(dec!(400000)), dec!(0.26)),
                TaxBracket::new(dec!(400000), Some(dec!(600000)), dec!(0.28)),
                TaxBracket::new(dec!(600000), None, dec!(0.30)),
            ],
            default_total_reliefs: dec!(9000),
            relief_limits: ReliefLimits {
                basic: dec!(9000),
                epf_and_life_insurance: dec!(7000),
                medical: dec!(10000),
                spouse: dec!(4000),
                children: dec!(8000),
                education: dec!(7000),
            },
        },
        corporate: CorporateTaxConfig {
            // SME schedule: reduced rates on the first RM600k of
            // chargeable profit.
            brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(150000)), dec!(0.15)),
                TaxBracket::new(dec!(150000), Some(dec!(600000)), dec!(0.17)),
                TaxBracket::new(dec!(600000), None, dec!(0.24)),
            ],
            standard_rate: dec!(0.24),
        },
        epf: EpfConfig {
            employer_rate_low: dec!(0.13),
            employer_rate_high: dec!(0.12),
            monthly_threshold: dec!(5000),
            employee_rate: dec!(0.11),
        },
        socso: SocsoConfig {
            employer_rate: dec!(0.0175),
            employee_rate: dec!(0.005),
            monthly_wage_ceiling: dec!(6000),
        },
        dividend: DividendConfig {
            exempt_threshold: dec!(100000),
            surcharge_rate: dec!(0.02),
        },
        zakat: ZakatConfig {
            nisab: dec!(29961),
            rate: dec!(0.025),
        },
        audit_exemption: AuditExemptionConfig {
            max_revenue: dec!(100000),
            max_total_assets: dec!(300000),
            max_employees: 5,
        },
    }
}

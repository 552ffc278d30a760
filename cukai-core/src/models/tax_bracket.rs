use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive tax schedule.
///
/// Brackets in a schedule are contiguous and sorted ascending by `min`:
/// each bracket's `min` equals the previous bracket's `max`, and the top
/// tier has `max` of `None` (unbounded). These invariants are checked by
/// [`TaxYearConfig::validate`](crate::models::TaxYearConfig::validate) over
/// the year-config constants, not by the calculation functions themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }
}

/// The share of one bracket in a progressive tax calculation.
///
/// Produced per call by the breakdown variants; only brackets that received
/// a nonzero amount appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketBreakdown {
    pub bracket_min: Decimal,
    pub bracket_max: Option<Decimal>,
    pub rate: Decimal,
    pub amount_in_bracket: Decimal,
    pub tax_for_bracket: Decimal,
}

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Personal tax reliefs claimed for one calculation run.
///
/// Open-ended mapping from relief category to amount; the well-known
/// categories have named constants, but the UI layer may add arbitrary
/// keys. All amounts are non-negative; the engine only ever reads the
/// total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalReliefs {
    amounts: BTreeMap<String, Decimal>,
}

impl PersonalReliefs {
    pub const BASIC: &'static str = "basic";
    pub const EPF_AND_LIFE_INSURANCE: &'static str = "epfAndLifeInsurance";
    pub const MEDICAL: &'static str = "medical";
    pub const SPOUSE: &'static str = "spouse";
    pub const CHILDREN: &'static str = "children";
    pub const EDUCATION: &'static str = "education";

    pub fn new() -> Self {
        Self::default()
    }

    /// The basic individual relief only, at the given amount.
    pub fn basic_only(amount: Decimal) -> Self {
        let mut reliefs = Self::new();
        reliefs.set(Self::BASIC, amount);
        reliefs
    }

    pub fn set(
        &mut self,
        category: impl Into<String>,
        amount: Decimal,
    ) -> &mut Self {
        self.amounts.insert(category.into(), amount);
        self
    }

    pub fn get(
        &self,
        category: &str,
    ) -> Option<Decimal> {
        self.amounts.get(category).copied()
    }

    /// Sum of all claimed relief amounts.
    pub fn total(&self) -> Decimal {
        self.amounts.values().copied().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn total_sums_all_categories() {
        let mut reliefs = PersonalReliefs::new();
        reliefs
            .set(PersonalReliefs::BASIC, dec!(9000))
            .set(PersonalReliefs::MEDICAL, dec!(2500))
            .set("lifestyle", dec!(2500));

        assert_eq!(reliefs.total(), dec!(14000));
    }

    #[test]
    fn total_of_empty_reliefs_is_zero() {
        let reliefs = PersonalReliefs::new();

        assert_eq!(reliefs.total(), Decimal::ZERO);
    }

    #[test]
    fn basic_only_sets_single_category() {
        let reliefs = PersonalReliefs::basic_only(dec!(9000));

        assert_eq!(reliefs.get(PersonalReliefs::BASIC), Some(dec!(9000)));
        assert_eq!(reliefs.get(PersonalReliefs::MEDICAL), None);
        assert_eq!(reliefs.total(), dec!(9000));
    }
}

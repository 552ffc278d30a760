//! Dividend surcharge on individual shareholders (YA2025 onward).
//!
//! Annual dividend income up to RM100,000 is exempt; the excess bears a
//! flat 2% surcharge.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::DividendConfig;
use crate::years::current_tax_year;

/// Dividend surcharge rule over one year's threshold and rate.
#[derive(Debug, Clone, Copy)]
pub struct DividendSurcharge<'a> {
    config: &'a DividendConfig,
}

impl<'a> DividendSurcharge<'a> {
    pub fn new(config: &'a DividendConfig) -> Self {
        Self { config }
    }

    /// Rule for the current Year of Assessment.
    pub fn current_year() -> DividendSurcharge<'static> {
        DividendSurcharge::new(&current_tax_year().dividend)
    }

    /// Surcharge on annual dividend income, rounded to 2 dp. Zero at or
    /// below the exempt threshold and for non-positive amounts.
    pub fn surcharge(
        &self,
        dividend_amount: Decimal,
    ) -> Decimal {
        if dividend_amount <= self.config.exempt_threshold {
            return Decimal::ZERO;
        }

        round_half_up((dividend_amount - self.config.exempt_threshold) * self.config.surcharge_rate)
    }

    pub fn exempt_threshold(&self) -> Decimal {
        self.config.exempt_threshold
    }
}

//! Pricing
//!
//! Turns box counts into money. All arithmetic is exact decimal; the total is rounded once, at
//! the end, half-up to whole cents.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, UnitCosts},
    counts::CountMap,
};

/// Decimal places prices are rounded to.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Errors converting a computed cost into a [`Money`] value.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The amount does not fit in minor currency units.
    #[error("amount {0} is out of range for minor currency units")]
    OutOfRange(Decimal),
}

impl UnitCosts {
    /// Total price of the given boxes.
    ///
    /// The exact sum is rounded half-up (not to even) to two decimal places, so `0.125`
    /// becomes `0.13`. The result always carries two decimal places, including for no boxes.
    ///
    /// Costs are capped at [`MAX_UNIT_COST`](crate::catalog::costs::MAX_UNIT_COST), so the
    /// sum cannot overflow for any `u32` counts.
    pub fn total_cost(&self, counts: &CountMap) -> Decimal {
        let mut total = counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .fold(Decimal::ZERO, |acc, (variety, count)| {
                acc + self.get(variety) * Decimal::from(*count)
            })
            .round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        total.rescale(PRICE_DECIMAL_PLACES);

        debug!(boxes = counts.total(), %total, "calculated cookie cost");

        total
    }
}

impl Catalog {
    /// Total price of the given boxes in this catalog.
    pub fn cost(&self, counts: &CountMap) -> Decimal {
        self.unit_costs().total_cost(counts)
    }

    /// Express an amount in this catalog's currency.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::OutOfRange`] if the amount cannot be held in minor units.
    pub fn to_money(&self, amount: Decimal) -> Result<Money<'static, Currency>, PricingError> {
        let minor = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|value| value.to_i64())
            .ok_or(PricingError::OutOfRange(amount))?;

        Ok(Money::from_minor(minor, self.currency()))
    }
}

/// Total price of the given boxes at standard prices.
pub fn calculate_cost(counts: &CountMap) -> Decimal {
    Catalog::standard().cost(counts)
}

//! Unit costs

use rust_decimal::Decimal;

use crate::{catalog::TableError, counts::VarietyMap, varieties::Variety};

/// Most a single box may cost.
///
/// Keeps every total over `u32` box counts far inside `Decimal`'s range.
pub const MAX_UNIT_COST: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Cost of a single box of each variety.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCosts {
    costs: VarietyMap<Decimal>,
}

impl UnitCosts {
    /// Validate a cost table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidAmount`] if a cost is negative or above [`MAX_UNIT_COST`].
    pub fn try_new(costs: VarietyMap<Decimal>) -> Result<Self, TableError> {
        for (variety, cost) in costs.iter() {
            if cost.is_sign_negative() || *cost > MAX_UNIT_COST {
                return Err(TableError::InvalidAmount {
                    variety,
                    value: cost.to_string(),
                });
            }
        }

        Ok(Self { costs })
    }

    /// The troop's standard prices: $6.00 a box, $7.00 for Toffee-tastics.
    pub fn standard() -> Self {
        Self {
            costs: VarietyMap::from_fn(|variety| match variety {
                Variety::ToffeeTastics => Decimal::new(700, 2),
                _ => Decimal::new(600, 2),
            }),
        }
    }

    /// Cost of one box of `variety`.
    pub fn get(&self, variety: Variety) -> Decimal {
        self.costs[variety]
    }

    /// Iterate over every variety's cost.
    pub fn iter(&self) -> impl Iterator<Item = (Variety, Decimal)> + '_ {
        self.costs.iter().map(|(variety, cost)| (variety, *cost))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn standard_prices() {
        let costs = UnitCosts::standard();

        assert_eq!(costs.get(Variety::ThinMints), Decimal::new(6, 0));
        assert_eq!(costs.get(Variety::ToffeeTastics), Decimal::new(7, 0));
        assert_eq!(
            costs.iter().filter(|(_, cost)| *cost == Decimal::new(6, 0)).count(),
            8
        );
    }

    #[test]
    fn standard_prices_carry_two_decimal_places() {
        for (variety, cost) in UnitCosts::standard().iter() {
            assert_eq!(cost.scale(), 2, "{variety:?}");
        }
    }

    #[test]
    fn accepts_costs_up_to_the_ceiling() -> TestResult {
        let costs = UnitCosts::try_new(VarietyMap::from_fn(|_| MAX_UNIT_COST))?;

        assert_eq!(costs.get(Variety::Samoas), MAX_UNIT_COST);

        Ok(())
    }

    #[test]
    fn rejects_negative_and_oversized_costs() {
        for cost in [Decimal::new(-1, 2), MAX_UNIT_COST + Decimal::new(1, 2), Decimal::MAX] {
            let costs = VarietyMap::from_fn(|variety| match variety {
                Variety::Samoas => cost,
                _ => Decimal::new(600, 2),
            });

            assert!(
                matches!(
                    UnitCosts::try_new(costs),
                    Err(TableError::InvalidAmount {
                        variety: Variety::Samoas,
                        ..
                    })
                ),
                "{cost} should be rejected"
            );
        }
    }
}

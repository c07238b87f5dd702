//! Popularity

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{catalog::TableError, counts::VarietyMap, varieties::Variety};

/// Share of sales per variety, in thousandths, most popular first.
///
/// Current as of January 16, 2026.
const STANDARD_PER_MILLE: [(Variety, i64); Variety::COUNT] = [
    (Variety::ThinMints, 278),
    (Variety::Samoas, 208),
    (Variety::Tagalongs, 142),
    (Variety::Exploremores, 99),
    (Variety::Adventurefuls, 69),
    (Variety::Trefoils, 65),
    (Variety::LemonUps, 61),
    (Variety::DoSiDos, 47),
    (Variety::ToffeeTastics, 31),
];

const _: () = assert!(
    per_mille_total(&STANDARD_PER_MILLE) == 1000,
    "cookie popularity values must sum to 1.0"
);

const fn per_mille_total(mut table: &[(Variety, i64)]) -> i64 {
    let mut total = 0;

    while let [(_, weight), rest @ ..] = table {
        total += *weight;
        table = rest;
    }

    total
}

/// Popularity weights for every variety, with the derived popularity ranking.
///
/// Weights are fractions in `[0, 1]` that sum to exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popularity {
    weights: VarietyMap<Decimal>,
    ranked: [Variety; Variety::COUNT],
}

impl Popularity {
    /// Validate a weight table.
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidWeight`]: a weight is negative or above one.
    /// - [`TableError::PopularitySum`]: the weights do not sum to exactly one.
    pub fn try_new(weights: VarietyMap<Decimal>) -> Result<Self, TableError> {
        for (variety, weight) in weights.iter() {
            if weight.is_sign_negative() || *weight > Decimal::ONE {
                return Err(TableError::InvalidWeight {
                    variety,
                    value: weight.to_string(),
                });
            }
        }

        let total: Decimal = weights.iter().map(|(_, weight)| *weight).sum();

        if total != Decimal::ONE {
            return Err(TableError::PopularitySum(total));
        }

        Ok(Self::from_valid(weights))
    }

    /// The standard popularity table.
    pub fn standard() -> Self {
        let weights = STANDARD_PER_MILLE
            .into_iter()
            .map(|(variety, per_mille)| (variety, Decimal::new(per_mille, 3)))
            .collect();

        Self::from_valid(weights)
    }

    fn from_valid(weights: VarietyMap<Decimal>) -> Self {
        let mut ranked = Variety::ALL;

        // Stable, so equally popular varieties keep declaration order.
        ranked.sort_by(|a, b| weights[*b].cmp(&weights[*a]));

        Self { weights, ranked }
    }

    /// Weight of `variety` as a fraction.
    pub fn weight(&self, variety: Variety) -> Decimal {
        self.weights[variety]
    }

    /// Weight of `variety` as a percentage.
    pub fn share(&self, variety: Variety) -> Percentage {
        Percentage::from(self.weight(variety))
    }

    /// Varieties from most to least popular.
    pub fn ranked(&self) -> &[Variety; Variety::COUNT] {
        &self.ranked
    }
}

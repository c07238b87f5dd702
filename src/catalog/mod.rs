//! Catalog
//!
//! The configuration tables the engine runs against: what a box costs and how popular each
//! variety is. A [`Catalog`] is immutable once built. The standard catalog is built on first
//! use and shared by every caller for the rest of the process.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::varieties::{UnknownVariety, Variety};

pub mod costs;
pub mod loader;
pub mod popularity;

pub use costs::{MAX_UNIT_COST, UnitCosts};
pub use popularity::Popularity;

/// Errors raised while building or loading configuration tables.
///
/// These are startup failures: a process holding an invalid table must not serve requests.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to read a tables file.
    #[error("failed to read tables file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a tables file.
    #[error("failed to parse tables YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A table referenced a variety code that does not exist.
    #[error(transparent)]
    UnknownVariety(#[from] UnknownVariety),

    /// Unsupported currency code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A unit cost was not a non-negative decimal amount.
    #[error("invalid unit cost for {variety}: {value}")]
    InvalidAmount {
        /// Variety the amount belongs to
        variety: Variety,
        /// Raw value as written in the table
        value: String,
    },

    /// A popularity weight was not a decimal fraction in `[0, 1]`.
    #[error("invalid popularity weight for {variety}: {value}")]
    InvalidWeight {
        /// Variety the weight belongs to
        variety: Variety,
        /// Raw value as written in the table
        value: String,
    },

    /// Popularity weights did not sum to exactly one.
    #[error("cookie popularity values must sum to 1.0, got {0}")]
    PopularitySum(Decimal),
}

/// Box cost and popularity tables, plus the currency prices are quoted in.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: &'static Currency,
    unit_costs: UnitCosts,
    popularity: Popularity,
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(iso::USD, UnitCosts::standard(), Popularity::standard())
});

impl Catalog {
    /// Create a catalog from already validated tables.
    pub fn new(currency: &'static Currency, unit_costs: UnitCosts, popularity: Popularity) -> Self {
        Self {
            currency,
            unit_costs,
            popularity,
        }
    }

    /// The troop's standard catalog, shared process-wide.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Currency unit costs are quoted in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Cost per box.
    pub fn unit_costs(&self) -> &UnitCosts {
        &self.unit_costs
    }

    /// Popularity weights and ranking.
    pub fn popularity(&self) -> &Popularity {
        &self.popularity
    }
}

/// Resolve a supported ISO currency code.
///
/// # Errors
///
/// Returns [`TableError::UnknownCurrency`] for anything other than USD, GBP or EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, TableError> {
    match code.trim() {
        "USD" => Ok(iso::USD),
        "GBP" => Ok(iso::GBP),
        "EUR" => Ok(iso::EUR),
        other => Err(TableError::UnknownCurrency(other.to_string())),
    }
}

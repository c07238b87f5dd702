//! Tables file loading
//!
//! A tables file overrides the standard catalog, for example when prices change mid-season:
//!
//! ```yaml
//! currency: USD
//! unit_costs:
//!   TMint: "6.00"
//!   Toff: "7.00"
//! popularity:
//!   TMint: "0.278"
//!   Sam: "0.208"
//! ```
//!
//! Amounts and weights are written as strings so they are read as exact decimals.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    catalog::{Catalog, Popularity, TableError, UnitCosts, parse_currency},
    counts::VarietyMap,
    varieties::Variety,
};

/// Raw tables file contents.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesFile {
    /// ISO currency code (defaults to USD)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Map of variety code -> cost per box
    #[serde(default)]
    pub unit_costs: FxHashMap<String, String>,

    /// Map of variety code -> popularity weight
    pub popularity: FxHashMap<String, String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl TryFrom<TablesFile> for Catalog {
    type Error = TableError;

    fn try_from(file: TablesFile) -> Result<Self, Self::Error> {
        let currency = parse_currency(&file.currency)?;
        let unit_costs = parse_unit_costs(&file.unit_costs)?;
        let popularity = Popularity::try_new(parse_weights(&file.popularity)?)?;

        Ok(Catalog::new(currency, unit_costs, popularity))
    }
}

impl Catalog {
    /// Load a catalog from a YAML tables file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any table is invalid.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&contents)?;

        info!(path = %path.display(), "loaded cookie tables");

        Ok(catalog)
    }

    /// Parse a catalog from YAML tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or if any table is invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TableError> {
        let file: TablesFile = serde_norway::from_str(yaml)?;

        file.try_into()
    }
}

/// Parse unit costs. Varieties without a listed cost are free. Range checks happen in
/// [`UnitCosts::try_new`].
fn parse_unit_costs(raw: &FxHashMap<String, String>) -> Result<UnitCosts, TableError> {
    let costs = parse_table(raw, |variety, value| {
        value
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| TableError::InvalidAmount {
                variety,
                value: value.to_string(),
            })
    })?;

    for variety in Variety::ALL {
        if !raw.keys().any(|code| code == variety.code()) {
            warn!(variety = variety.code(), "no unit cost configured, boxes priced at 0.00");
        }
    }

    UnitCosts::try_new(costs)
}

/// Parse popularity weights. Range and sum checks happen in [`Popularity::try_new`].
fn parse_weights(raw: &FxHashMap<String, String>) -> Result<VarietyMap<Decimal>, TableError> {
    parse_table(raw, |variety, value| {
        value
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| TableError::InvalidWeight {
                variety,
                value: value.to_string(),
            })
    })
}

fn parse_table(
    raw: &FxHashMap<String, String>,
    mut parse_value: impl FnMut(Variety, &str) -> Result<Decimal, TableError>,
) -> Result<VarietyMap<Decimal>, TableError> {
    let mut table = VarietyMap::default();

    for (code, value) in raw {
        let variety = code.parse::<Variety>()?;
        table[variety] = parse_value(variety, value)?;
    }

    Ok(table)
}

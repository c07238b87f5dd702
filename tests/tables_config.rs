//! Loading troop tables from disk and running calculations against them.

use std::path::PathBuf;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use testresult::TestResult;

use cookie_trails::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("tables")
        .join(name)
}

#[test]
fn standard_tables_file_matches_built_in_catalog() -> TestResult {
    let catalog = Catalog::from_yaml_file(fixture("standard.yml"))?;
    let standard = Catalog::standard();

    assert_eq!(catalog.unit_costs(), standard.unit_costs());
    assert_eq!(catalog.popularity(), standard.popularity());

    for total in [0, 1, 12, 100, 750, 1000] {
        assert_eq!(catalog.distribution(total), calculate_distribution(total));
    }

    Ok(())
}

#[test]
fn loaded_tables_price_like_the_standard_ones() -> TestResult {
    let catalog = Catalog::from_yaml_file(fixture("standard.yml"))?;

    let counts: CountMap = [
        (Variety::ThinMints, 3),
        (Variety::Samoas, 2),
        (Variety::ToffeeTastics, 1),
    ]
    .into_iter()
    .collect();

    assert_eq!(catalog.cost(&counts), Decimal::new(3700, 2));
    assert_eq!(
        catalog.to_money(catalog.cost(&counts))?,
        Money::from_minor(3700, iso::USD)
    );

    Ok(())
}

#[test]
fn popularity_that_does_not_sum_to_one_is_rejected() {
    let result = Catalog::from_yaml_file(fixture("invalid_popularity.yml"));

    assert!(
        matches!(result, Err(TableError::PopularitySum(sum)) if sum == Decimal::new(990, 3)),
        "{result:?}"
    );
}

#[test]
fn missing_tables_file_is_an_io_error() {
    let result = Catalog::from_yaml_file(fixture("does_not_exist.yml"));

    assert!(matches!(result, Err(TableError::Io(_))), "{result:?}");
}

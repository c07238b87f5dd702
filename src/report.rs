//! Report
//!
//! Presentation helpers for the calculator, cases and count screens: variety rows in
//! popularity order, and a terminal table of counts, cases and costs.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cases::calculate_cases_with_threshold,
    catalog::Catalog,
    counts::CountMap,
    pricing::PricingError,
    varieties::Variety,
};

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A cost could not be expressed as money.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Failed to write the report.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// One variety's display details.
#[derive(Debug, Clone, PartialEq)]
pub struct VarietyRow {
    /// Variety
    pub variety: Variety,

    /// Stable code
    pub code: &'static str,

    /// Display name
    pub label: &'static str,

    /// Brand colour (`#RRGGBB`)
    pub color: &'static str,

    /// Whether text over the brand colour should be dark
    pub text_dark: bool,

    /// Popularity in percent points, e.g. `27.8`
    pub popularity_points: Decimal,

    /// Boxes of this variety
    pub count: u32,
}

/// Rows for every variety, most popular first.
///
/// When `counts` is `None` every row's count is zero.
pub fn variety_rows(catalog: &Catalog, counts: Option<&CountMap>) -> Vec<VarietyRow> {
    let popularity = catalog.popularity();

    popularity
        .ranked()
        .iter()
        .map(|&variety| VarietyRow {
            variety,
            code: variety.code(),
            label: variety.label(),
            color: variety.color(),
            text_dark: variety.prefers_dark_text(),
            popularity_points: (popularity.share(variety) * Decimal::ONE_HUNDRED).round_dp(1),
            count: counts.map_or(0, |counts| counts[variety]),
        })
        .collect()
}

/// Write a table of boxes, suggested cases and cost per variety, followed by a total row.
///
/// Varieties are listed in popularity order. Cases use `case_threshold`.
///
/// # Errors
///
/// Returns a [`ReportError`] if a cost cannot be represented or the output cannot be written.
pub fn write_counts_table(
    mut out: impl io::Write,
    catalog: &Catalog,
    counts: &CountMap,
    case_threshold: u32,
) -> Result<(), ReportError> {
    let cases = calculate_cases_with_threshold(counts, case_threshold);

    let mut builder = Builder::default();

    builder.push_record(["Variety", "Popularity", "Boxes", "Cases", "Cost"]);

    for row in variety_rows(catalog, Some(counts)) {
        let single: CountMap = [(row.variety, row.count)].into_iter().collect();
        let cost = catalog.to_money(catalog.cost(&single))?;

        builder.push_record([
            row.label.to_string(),
            format!("{}%", row.popularity_points),
            row.count.to_string(),
            cases[row.variety].to_string(),
            cost.to_string(),
        ]);
    }

    let total_cost = catalog.to_money(catalog.cost(counts))?;

    builder.push_record([
        "Total".to_string(),
        String::new(),
        counts.total().to_string(),
        cases.total().to_string(),
        total_cost.to_string(),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Rows::last(), Color::BOLD);
    table.modify(Columns::new(1..5), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

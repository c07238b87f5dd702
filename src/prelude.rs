//! Cookie Trails prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cases::{
        BOXES_PER_CASE, CASE_THRESHOLD, calculate_cases, calculate_cases_with_threshold,
        cases_to_boxes,
    },
    catalog::{Catalog, MAX_UNIT_COST, Popularity, TableError, UnitCosts},
    counts::{CaseMap, CountMap, VarietyMap},
    distribution::calculate_distribution,
    events::{Event, EventKind, family_balance, latest_count},
    pricing::{PricingError, calculate_cost},
    report::{ReportError, VarietyRow, variety_rows, write_counts_table},
    varieties::{UnknownVariety, Variety},
};

//! Cookie Trails
//!
//! Cookie accounting for a troop's cookie sale: what a set of boxes costs, how a total number
//! of boxes is likely to split across varieties, and how many cases to order.
//!
//! Every calculation is a pure function over immutable tables. The free functions
//! ([`calculate_cost`], [`calculate_distribution`], [`calculate_cases`]) use the standard
//! [`Catalog`]; methods on a loaded [`Catalog`] do the same against custom tables.
//!
//! ```
//! use cookie_trails::prelude::*;
//!
//! let boxes = calculate_distribution(100);
//! assert_eq!(boxes.total(), 100);
//!
//! let cases = calculate_cases(&boxes);
//! assert_eq!(cases[Variety::ThinMints], 3);
//!
//! assert_eq!(calculate_cost(&boxes).to_string(), "603.00");
//! ```

pub mod cases;
pub mod catalog;
pub mod config;
pub mod counts;
pub mod distribution;
pub mod events;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod report;
pub mod varieties;

pub use cases::{calculate_cases, calculate_cases_with_threshold};
pub use catalog::Catalog;
pub use distribution::calculate_distribution;
pub use pricing::calculate_cost;

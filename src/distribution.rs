//! Distribution
//!
//! Estimates how a total number of boxes splits across varieties, in proportion to popularity.

use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::{
    catalog::{Catalog, Popularity},
    counts::CountMap,
};

impl Popularity {
    /// Split `total_boxes` across varieties by popularity.
    ///
    /// Each variety first gets `total × weight` rounded half-to-even. That product is taken in
    /// `f64`, so a product such as `1250 × 0.278`, exactly `347.5` in decimal, lands just above
    /// the tie and rounds up.
    ///
    /// The rounding residual is then settled one box at a time, walking varieties from most to
    /// least popular and wrapping around. When boxes are missing each visited variety gains
    /// one; when there are too many each visited variety with boxes left gives one back.
    ///
    /// The result always sums to `total_boxes`. With the standard popularity table a more
    /// popular variety also never gets fewer boxes than a less popular one.
    ///
    /// The residual can never exceed `total_boxes`. That bound is only asserted in debug
    /// builds; release builds settle whatever residual they get.
    pub fn distribute(&self, total_boxes: u32) -> CountMap {
        let total = f64::from(total_boxes);

        let mut distribution = CountMap::from_fn(|variety| {
            let weight = self.weight(variety).to_f64().unwrap_or_default();

            (total * weight).round_ties_even().to_u32().unwrap_or_default()
        });

        let mut diff = i64::from(total_boxes) - total_to_i64(&distribution);

        debug_assert!(
            diff.unsigned_abs() <= u64::from(total_boxes),
            "rounding residual {diff} exceeds total boxes {total_boxes}"
        );

        debug!(total_boxes, residual = diff, "settling distribution residual");

        for &variety in self.ranked().iter().cycle() {
            if diff == 0 {
                break;
            }

            let count = &mut distribution[variety];

            if diff > 0 {
                *count += 1;
                diff -= 1;
            } else if *count > 0 {
                *count -= 1;
                diff += 1;
            }
        }

        distribution
    }
}

fn total_to_i64(counts: &CountMap) -> i64 {
    counts.iter().map(|(_, count)| i64::from(*count)).sum()
}

impl Catalog {
    /// Estimated boxes per variety for `total_boxes`, using this catalog's popularity.
    pub fn distribution(&self, total_boxes: u32) -> CountMap {
        self.popularity().distribute(total_boxes)
    }
}

/// Estimated boxes per variety for `total_boxes`, using standard popularity.
pub fn calculate_distribution(total_boxes: u32) -> CountMap {
    Catalog::standard().distribution(total_boxes)
}

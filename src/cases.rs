//! Cases
//!
//! Cookies are ordered from the council by the case. These helpers suggest how many cases of
//! each variety cover a set of box counts.

use tracing::debug;

use crate::counts::{CaseMap, CountMap};

/// Boxes in a full case.
pub const BOXES_PER_CASE: u32 = 12;

/// Fewest boxes of a variety worth ordering a case for.
pub const CASE_THRESHOLD: u32 = 5;

/// Suggested cases per variety, using the default [`CASE_THRESHOLD`].
pub fn calculate_cases(boxes: &CountMap) -> CaseMap {
    calculate_cases_with_threshold(boxes, CASE_THRESHOLD)
}

/// Suggested cases per variety.
///
/// Varieties with at least `threshold` boxes round up to whole cases; anything below the
/// threshold gets no case at all.
pub fn calculate_cases_with_threshold(boxes: &CountMap, threshold: u32) -> CaseMap {
    // CONSIDER: when the boxes left over past a full case are below the threshold, round
    // down instead? For now 13 boxes => 2 cases and 17 boxes => 2 cases.
    let cases = boxes.map(|_, &box_count| {
        if box_count >= threshold {
            box_count.div_ceil(BOXES_PER_CASE)
        } else {
            0
        }
    });

    debug!(boxes = boxes.total(), cases = cases.total(), threshold, "calculated cases");

    cases
}

/// Boxes delivered by a case order.
pub fn cases_to_boxes(cases: &CaseMap) -> CountMap {
    cases.map(|_, &case_count| case_count.saturating_mul(BOXES_PER_CASE))
}

#[cfg(test)]
mod tests {
    use crate::varieties::Variety;

    use super::*;

    fn boxes(entries: &[(Variety, u32)]) -> CountMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn typical_order_cases() {
        let boxes = boxes(&[
            (Variety::ThinMints, 57),
            (Variety::Samoas, 26),
            (Variety::LemonUps, 7),
            (Variety::ToffeeTastics, 3),
        ]);

        let cases = calculate_cases_with_threshold(&boxes, 5);

        assert_eq!(cases[Variety::ThinMints], 5);
        assert_eq!(cases[Variety::Samoas], 3);
        assert_eq!(cases[Variety::LemonUps], 1);
        assert_eq!(cases[Variety::ToffeeTastics], 0);
        assert_eq!(cases[Variety::Trefoils], 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let cases = calculate_cases(&boxes(&[
            (Variety::Trefoils, CASE_THRESHOLD),
            (Variety::Tagalongs, CASE_THRESHOLD - 1),
        ]));

        assert_eq!(cases[Variety::Trefoils], 1);
        assert_eq!(cases[Variety::Tagalongs], 0);
    }

    #[test]
    fn partial_cases_always_round_up() {
        let cases = calculate_cases(&boxes(&[
            (Variety::Samoas, 12),
            (Variety::Tagalongs, 13),
            (Variety::Trefoils, 17),
            (Variety::ThinMints, 24),
        ]));

        assert_eq!(cases[Variety::Samoas], 1);
        assert_eq!(cases[Variety::Tagalongs], 2);
        assert_eq!(cases[Variety::Trefoils], 2);
        assert_eq!(cases[Variety::ThinMints], 2);
    }

    #[test]
    fn custom_threshold() {
        let counts = boxes(&[(Variety::Exploremores, 3), (Variety::DoSiDos, 1)]);

        assert_eq!(calculate_cases_with_threshold(&counts, 1).total(), 2);
        assert_eq!(calculate_cases_with_threshold(&counts, 4).total(), 0);
    }

    #[test]
    fn zero_threshold_still_gives_zero_cases_for_zero_boxes() {
        let cases = calculate_cases_with_threshold(&CountMap::default(), 0);

        assert!(cases.is_empty());
    }

    #[test]
    fn cases_to_boxes_fills_whole_cases() {
        let cases = calculate_cases(&boxes(&[(Variety::ThinMints, 57), (Variety::Samoas, 3)]));
        let delivered = cases_to_boxes(&cases);

        assert_eq!(delivered[Variety::ThinMints], 60);
        assert_eq!(delivered[Variety::Samoas], 0);
    }
}

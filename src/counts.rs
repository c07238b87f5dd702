//! Counts
//!
//! Per-variety value tables. [`CountMap`] (boxes) and [`CaseMap`] (cases) are the shapes the
//! engine accepts and returns.

use std::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
};
use tracing::{debug, warn};

use crate::varieties::Variety;

/// Box counts per variety.
pub type CountMap = VarietyMap<u32>;

/// Case counts per variety.
pub type CaseMap = VarietyMap<u32>;

/// A table holding exactly one value per [`Variety`].
///
/// Varieties that were never set hold `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarietyMap<T> {
    values: [T; Variety::COUNT],
}

impl<T> VarietyMap<T> {
    /// Build a table by evaluating `f` for every variety.
    pub fn from_fn(f: impl FnMut(Variety) -> T) -> Self {
        Self {
            values: Variety::ALL.map(f),
        }
    }

    /// Value for the given variety.
    pub fn get(&self, variety: Variety) -> &T {
        &self[variety]
    }

    /// Replace the value for the given variety.
    pub fn set(&mut self, variety: Variety, value: T) {
        self[variety] = value;
    }

    /// Iterate over all varieties and their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Variety, &T)> + '_ {
        Variety::ALL.into_iter().zip(self.values.iter())
    }

    /// Apply `f` to every value, keeping the variety keys.
    pub fn map<U>(&self, mut f: impl FnMut(Variety, &T) -> U) -> VarietyMap<U> {
        VarietyMap::from_fn(|variety| f(variety, &self[variety]))
    }
}

impl<T: Default> Default for VarietyMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: Default> FromIterator<(Variety, T)> for VarietyMap<T> {
    /// Later entries for the same variety replace earlier ones.
    fn from_iter<I: IntoIterator<Item = (Variety, T)>>(iter: I) -> Self {
        let mut map = Self::default();

        for (variety, value) in iter {
            map[variety] = value;
        }

        map
    }
}

impl<T> Index<Variety> for VarietyMap<T> {
    type Output = T;

    #[expect(
        clippy::indexing_slicing,
        reason = "variety index is always below Variety::COUNT"
    )]
    fn index(&self, variety: Variety) -> &Self::Output {
        &self.values[variety.index()]
    }
}

impl<T> IndexMut<Variety> for VarietyMap<T> {
    #[expect(
        clippy::indexing_slicing,
        reason = "variety index is always below Variety::COUNT"
    )]
    fn index_mut(&mut self, variety: Variety) -> &mut Self::Output {
        &mut self.values[variety.index()]
    }
}

impl VarietyMap<u32> {
    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.values.iter().copied().map(u64::from).sum()
    }

    /// Whether every count is zero.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|&count| count == 0)
    }

    /// Build a count table from raw form fields keyed by variety code.
    ///
    /// This is the boundary where untrusted input is cleaned up before it reaches the engine:
    /// unknown codes are skipped, and anything that is not a non-negative integer counts as
    /// zero.
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut counts = Self::default();

        for (code, raw) in fields {
            let (code, raw) = (code.as_ref(), raw.as_ref());

            let Ok(variety) = code.parse::<Variety>() else {
                debug!(code, "ignoring count for unknown variety");
                continue;
            };

            counts[variety] = parse_count(variety, raw);
        }

        counts
    }
}

/// Parse a single submitted box count, clamping bad input to zero.
fn parse_count(variety: Variety, raw: &str) -> u32 {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return 0;
    }

    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => {
            warn!(variety = variety.code(), value, "negative box count clamped to zero");
            0
        }
        Ok(value) => u32::try_from(value).unwrap_or_else(|_err| {
            warn!(variety = variety.code(), value, "box count out of range clamped to zero");
            0
        }),
        Err(_err) => {
            warn!(variety = variety.code(), raw, "non-numeric box count treated as zero");
            0
        }
    }
}

impl<T: Serialize> Serialize for VarietyMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for VarietyMap<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(VarietyMapVisitor(PhantomData))
    }
}

struct VarietyMapVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for VarietyMapVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = VarietyMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map keyed by cookie variety code")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = VarietyMap::default();

        while let Some((variety, value)) = access.next_entry::<Variety, T>()? {
            map[variety] = value;
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_is_all_zero() {
        let counts = CountMap::default();

        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.iter().count(), Variety::COUNT);
    }

    #[test]
    fn from_iter_sets_given_varieties_only() {
        let counts: CountMap = [(Variety::ThinMints, 3), (Variety::Samoas, 2)]
            .into_iter()
            .collect();

        assert_eq!(counts[Variety::ThinMints], 3);
        assert_eq!(counts[Variety::Samoas], 2);
        assert_eq!(counts[Variety::Trefoils], 0);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn total_does_not_overflow_u32() {
        let counts = CountMap::from_fn(|_| u32::MAX);

        assert_eq!(counts.total(), u64::from(u32::MAX) * 9);
    }

    #[test]
    fn map_keeps_keys() {
        let counts: CountMap = [(Variety::Tagalongs, 4)].into_iter().collect();
        let doubled = counts.map(|_, count| count * 2);

        assert_eq!(doubled[Variety::Tagalongs], 8);
        assert_eq!(doubled.total(), 8);
    }

    #[test]
    fn from_fields_clamps_bad_input() {
        let counts = CountMap::from_fields([
            ("TMint", "12"),
            ("Sam", " 3 "),
            ("Tags", "-4"),
            ("Exp", "lots"),
            ("Tre", ""),
            ("Nope", "7"),
            ("Toff", "99999999999"),
        ]);

        assert_eq!(counts[Variety::ThinMints], 12);
        assert_eq!(counts[Variety::Samoas], 3);
        assert_eq!(counts[Variety::Tagalongs], 0);
        assert_eq!(counts[Variety::Exploremores], 0);
        assert_eq!(counts[Variety::Trefoils], 0);
        assert_eq!(counts[Variety::ToffeeTastics], 0);
        assert_eq!(counts.total(), 15);
    }

    #[test]
    fn deserializes_partial_maps() -> TestResult {
        let counts: CountMap = serde_norway::from_str("TMint: 5\nD-S-D: 2\n")?;

        assert_eq!(counts[Variety::ThinMints], 5);
        assert_eq!(counts[Variety::DoSiDos], 2);
        assert_eq!(counts.total(), 7);

        Ok(())
    }

    #[test]
    fn deserialize_rejects_unknown_codes() {
        let result: Result<CountMap, _> = serde_norway::from_str("Oreo: 5\n");

        assert!(result.is_err());
    }

    #[test]
    fn serializes_every_variety_by_code() -> TestResult {
        let counts: CountMap = [(Variety::LemonUps, 7)].into_iter().collect();
        let yaml = serde_norway::to_string(&counts)?;

        assert!(yaml.contains("Lmup: 7"));
        assert!(yaml.contains("Advf: 0"));

        let parsed: CountMap = serde_norway::from_str(&yaml)?;
        assert_eq!(parsed, counts);

        Ok(())
    }
}

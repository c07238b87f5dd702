//! Events
//!
//! Box movements between the troop and a family. Pickups and returns move inventory; counts
//! are a family's own report of what they are holding.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::Catalog,
    counts::{CountMap, VarietyMap},
    varieties::Variety,
};

/// An event kind code did not match any known kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown event kind: {0}")]
pub struct UnknownEventKind(pub String);

/// Kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Family takes cookies from troop inventory
    Pickup,

    /// Family returns cookies to troop inventory
    Return,

    /// Family reports the cookies they currently hold
    Count,
}

impl EventKind {
    /// Stable code, as stored.
    pub const fn code(self) -> &'static str {
        match self {
            EventKind::Pickup => "pickup",
            EventKind::Return => "return",
            EventKind::Count => "count",
        }
    }

    /// Human-readable description of the direction cookies move.
    pub const fn label(self) -> &'static str {
        match self {
            EventKind::Pickup => "Pickup (troop → family)",
            EventKind::Return => "Return (family → troop)",
            EventKind::Count => "Count",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(EventKind::Pickup),
            "return" => Ok(EventKind::Return),
            "count" => Ok(EventKind::Count),
            other => Err(UnknownEventKind(other.to_string())),
        }
    }
}

/// A single logged event with its box counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// What happened
    pub kind: EventKind,

    /// Boxes involved, per variety
    pub counts: CountMap,
}

impl Event {
    /// Create an event.
    pub fn new(kind: EventKind, counts: CountMap) -> Self {
        Self { kind, counts }
    }

    /// Total boxes in the event.
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Boxes of a single variety.
    pub fn count_for(&self, variety: Variety) -> u32 {
        self.counts[variety]
    }

    /// Value of the event's boxes in the given catalog.
    pub fn cost(&self, catalog: &Catalog) -> Decimal {
        catalog.cost(&self.counts)
    }
}

/// Boxes a family should be holding: everything picked up, less everything returned.
///
/// Count events don't move inventory and are ignored. A variety never goes below zero, even
/// if more was returned than picked up.
pub fn family_balance(events: &[Event]) -> CountMap {
    let (picked_up, returned) = events.iter().fold(
        (VarietyTotals::default(), VarietyTotals::default()),
        |(mut picked_up, mut returned), event| {
            match event.kind {
                EventKind::Pickup => picked_up.add(&event.counts),
                EventKind::Return => returned.add(&event.counts),
                EventKind::Count => {}
            }

            (picked_up, returned)
        },
    );

    CountMap::from_fn(|variety| {
        let held = picked_up.get(variety).saturating_sub(returned.get(variety));

        u32::try_from(held).unwrap_or(u32::MAX)
    })
}

/// The most recent count a family reported, if any. Events are in the order they happened.
pub fn latest_count(events: &[Event]) -> Option<&Event> {
    events
        .iter()
        .rev()
        .find(|event| event.kind == EventKind::Count)
}

/// Running per-variety sums that can't overflow a `u32` count.
#[derive(Debug, Default)]
struct VarietyTotals(VarietyMap<u64>);

impl VarietyTotals {
    fn add(&mut self, counts: &CountMap) {
        for (variety, count) in counts.iter() {
            self.0[variety] += u64::from(*count);
        }
    }

    fn get(&self, variety: Variety) -> u64 {
        self.0[variety]
    }
}

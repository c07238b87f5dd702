//! Varieties
//!
//! The closed set of cookie varieties sold by the troop. Every table in the crate is keyed by
//! [`Variety`], so a table can never be missing an entry or carry one for an unknown product.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A variety code did not match any known variety.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown cookie variety code: {0}")]
pub struct UnknownVariety(pub String);

/// Cookie variety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variety {
    /// Adventurefuls
    #[serde(rename = "Advf")]
    Adventurefuls,

    /// Lemon-Ups
    #[serde(rename = "Lmup")]
    LemonUps,

    /// Trefoils
    #[serde(rename = "Tre")]
    Trefoils,

    /// Do-si-dos
    #[serde(rename = "D-S-D")]
    DoSiDos,

    /// Samoas
    #[serde(rename = "Sam")]
    Samoas,

    /// Tagalongs
    #[serde(rename = "Tags")]
    Tagalongs,

    /// Thin Mints
    #[serde(rename = "TMint")]
    ThinMints,

    /// Exploremores
    #[serde(rename = "Exp")]
    Exploremores,

    /// Toffee-tastics
    #[serde(rename = "Toff")]
    ToffeeTastics,
}

impl Variety {
    /// Number of varieties.
    pub const COUNT: usize = 9;

    /// Every variety, in declaration order.
    pub const ALL: [Variety; Variety::COUNT] = [
        Variety::Adventurefuls,
        Variety::LemonUps,
        Variety::Trefoils,
        Variety::DoSiDos,
        Variety::Samoas,
        Variety::Tagalongs,
        Variety::ThinMints,
        Variety::Exploremores,
        Variety::ToffeeTastics,
    ];

    /// Stable short code, as used in stored count data.
    pub const fn code(self) -> &'static str {
        match self {
            Variety::Adventurefuls => "Advf",
            Variety::LemonUps => "Lmup",
            Variety::Trefoils => "Tre",
            Variety::DoSiDos => "D-S-D",
            Variety::Samoas => "Sam",
            Variety::Tagalongs => "Tags",
            Variety::ThinMints => "TMint",
            Variety::Exploremores => "Exp",
            Variety::ToffeeTastics => "Toff",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Variety::Adventurefuls => "Adventurefuls",
            Variety::LemonUps => "Lemon-Ups",
            Variety::Trefoils => "Trefoils",
            Variety::DoSiDos => "Do-si-dos",
            Variety::Samoas => "Samoas",
            Variety::Tagalongs => "Tagalongs",
            Variety::ThinMints => "Thin Mints",
            Variety::Exploremores => "Exploremores",
            Variety::ToffeeTastics => "Toffee-tastics",
        }
    }

    /// Brand colour as a `#RRGGBB` hex string (2026 eBudde scheme).
    pub const fn color(self) -> &'static str {
        match self {
            Variety::Adventurefuls => "#D5CA9F",
            Variety::LemonUps => "#EDDF3E",
            Variety::Trefoils => "#005BAA",
            Variety::DoSiDos => "#FCC56A",
            Variety::Samoas => "#7D4199",
            Variety::Tagalongs => "#E51A40",
            Variety::ThinMints => "#00A654",
            Variety::Exploremores => "#EB9F94",
            Variety::ToffeeTastics => "#00CABE",
        }
    }

    /// Brand colour as RGB channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Variety::Adventurefuls => (0xD5, 0xCA, 0x9F),
            Variety::LemonUps => (0xED, 0xDF, 0x3E),
            Variety::Trefoils => (0x00, 0x5B, 0xAA),
            Variety::DoSiDos => (0xFC, 0xC5, 0x6A),
            Variety::Samoas => (0x7D, 0x41, 0x99),
            Variety::Tagalongs => (0xE5, 0x1A, 0x40),
            Variety::ThinMints => (0x00, 0xA6, 0x54),
            Variety::Exploremores => (0xEB, 0x9F, 0x94),
            Variety::ToffeeTastics => (0x00, 0xCA, 0xBE),
        }
    }

    /// Whether dark text reads better than light text on top of the brand colour.
    pub fn prefers_dark_text(self) -> bool {
        let (r, g, b) = self.rgb();

        let luminance =
            (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;

        luminance > 0.5
    }

    /// Position of the variety in [`Variety::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Variety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variety {
    type Err = UnknownVariety;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variety::ALL
            .into_iter()
            .find(|variety| variety.code() == s)
            .ok_or_else(|| UnknownVariety(s.to_string()))
    }
}

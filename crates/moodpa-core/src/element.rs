//! # Graphical Elements: Submission Drawing Checklist
//!
//! Defines the eight [`GraphicalElement`]s municipal submission rules expect
//! in an architectural project, split into two fixed categories.
//!
//! | # | Element | Key | Category |
//! |---|---------|-----|----------|
//! | 1 | Floor plan | `floorPlan` | Mandatory |
//! | 2 | Sections | `sections` | Mandatory |
//! | 3 | Facades | `facades` | Mandatory |
//! | 4 | Site plan | `siteplan` | Mandatory |
//! | 5 | Roof plan | `roofPlan` | Supplementary |
//! | 6 | Levels and dimensions | `levelsAndDimensions` | Supplementary |
//! | 7 | Scale indicators | `scaleIndicators` | Supplementary |
//! | 8 | North arrow | `northArrow` | Supplementary |
//!
//! The variant declaration order is the checklist order. `Ord` follows it,
//! so a `BTreeMap` keyed by element iterates in checklist order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// A drawing category required (or recommended) by submission rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GraphicalElement {
    /// Floor plan (planta baixa).
    FloorPlan,
    /// Building sections (cortes).
    Sections,
    /// Facades (fachadas).
    Facades,
    /// Site plan (implantação).
    #[serde(rename = "siteplan")]
    Siteplan,
    /// Roof plan (planta de cobertura).
    RoofPlan,
    /// Levels and dimensions on plans (cotas e níveis).
    LevelsAndDimensions,
    /// Scale indicators on drawings (escalas).
    ScaleIndicators,
    /// North-arrow indication on the site plan.
    NorthArrow,
}

/// Total number of graphical elements.
pub const GRAPHICAL_ELEMENT_COUNT: usize = 8;

/// Whether an element's absence blocks total conformity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    /// Required for total conformity.
    Mandatory,
    /// Absence is reported but does not downgrade the overall classification.
    Supplementary,
}

const MANDATORY: [GraphicalElement; 4] = [
    GraphicalElement::FloorPlan,
    GraphicalElement::Sections,
    GraphicalElement::Facades,
    GraphicalElement::Siteplan,
];

const SUPPLEMENTARY: [GraphicalElement; 4] = [
    GraphicalElement::RoofPlan,
    GraphicalElement::LevelsAndDimensions,
    GraphicalElement::ScaleIndicators,
    GraphicalElement::NorthArrow,
];

const ALL: [GraphicalElement; GRAPHICAL_ELEMENT_COUNT] = [
    GraphicalElement::FloorPlan,
    GraphicalElement::Sections,
    GraphicalElement::Facades,
    GraphicalElement::Siteplan,
    GraphicalElement::RoofPlan,
    GraphicalElement::LevelsAndDimensions,
    GraphicalElement::ScaleIndicators,
    GraphicalElement::NorthArrow,
];

impl GraphicalElement {
    /// All eight elements, mandatory first, each group in checklist order.
    pub fn all() -> &'static [GraphicalElement] {
        &ALL
    }

    /// The four mandatory elements in checklist order.
    pub fn mandatory() -> &'static [GraphicalElement] {
        &MANDATORY
    }

    /// The four supplementary elements in checklist order.
    pub fn supplementary() -> &'static [GraphicalElement] {
        &SUPPLEMENTARY
    }

    /// Category this element belongs to.
    pub fn category(&self) -> ElementCategory {
        match self {
            Self::FloorPlan | Self::Sections | Self::Facades | Self::Siteplan => {
                ElementCategory::Mandatory
            }
            Self::RoofPlan | Self::LevelsAndDimensions | Self::ScaleIndicators | Self::NorthArrow => {
                ElementCategory::Supplementary
            }
        }
    }

    /// The map key used in serialized element sets. Matches serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FloorPlan => "floorPlan",
            Self::Sections => "sections",
            Self::Facades => "facades",
            Self::Siteplan => "siteplan",
            Self::RoofPlan => "roofPlan",
            Self::LevelsAndDimensions => "levelsAndDimensions",
            Self::ScaleIndicators => "scaleIndicators",
            Self::NorthArrow => "northArrow",
        }
    }

    /// Human-readable name used inside observation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FloorPlan => "floor plan",
            Self::Sections => "sections",
            Self::Facades => "facades",
            Self::Siteplan => "siteplan",
            Self::RoofPlan => "roof plan",
            Self::LevelsAndDimensions => "levels and dimensions",
            Self::ScaleIndicators => "scale indicators",
            Self::NorthArrow => "north arrow",
        }
    }
}

impl std::fmt::Display for GraphicalElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphicalElement {
    type Err = ConfigError;

    /// Parse an element from its map key. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ConfigError::Profile(format!("unknown graphical element: {s:?}")))
    }
}

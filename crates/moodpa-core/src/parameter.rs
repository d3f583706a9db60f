//! # Urban Parameters: Zoning Rule Axes
//!
//! The five numeric parameters a project is checked against, each with a
//! threshold direction.
//!
//! | Parameter | Key | Kind | Default |
//! |-----------|-----|------|---------|
//! | Front setback | `frontSetback` | Min | 5.0 m |
//! | Side setback | `sideSetback` | Min | 1.5 m |
//! | Occupancy rate | `occupancyRate` | Max | 70 % |
//! | Permeability rate | `permeabilityRate` | Min | 20 % |
//! | Floor area ratio | `floorAreaRatio` | Max | 1.5 |

use serde::{Deserialize, Serialize};

/// Direction of a threshold comparison. Both directions are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdKind {
    /// The value must be at least the threshold.
    Min,
    /// The value must be at most the threshold.
    Max,
}

impl ThresholdKind {
    /// Whether `value` satisfies `threshold` in this direction.
    ///
    /// A value exactly equal to the threshold conforms for both kinds.
    pub fn admits(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Min => value >= threshold,
            Self::Max => value <= threshold,
        }
    }
}

impl std::fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Min => f.write_str("MIN"),
            Self::Max => f.write_str("MAX"),
        }
    }
}

/// One of the five zoning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrbanParameter {
    /// Distance from the front lot boundary (recuo frontal).
    FrontSetback,
    /// Distance from the side lot boundaries (recuo lateral).
    SideSetback,
    /// Built area as a percentage of lot area (taxa de ocupação).
    OccupancyRate,
    /// Permeable share of the lot, in percent (taxa de permeabilidade).
    PermeabilityRate,
    /// Built area over lot area (coeficiente de aproveitamento).
    FloorAreaRatio,
}

/// Total number of urban parameters.
pub const URBAN_PARAMETER_COUNT: usize = 5;

const ALL: [UrbanParameter; URBAN_PARAMETER_COUNT] = [
    UrbanParameter::FrontSetback,
    UrbanParameter::SideSetback,
    UrbanParameter::OccupancyRate,
    UrbanParameter::PermeabilityRate,
    UrbanParameter::FloorAreaRatio,
];

impl UrbanParameter {
    /// All parameters in report order.
    pub fn all() -> &'static [UrbanParameter] {
        &ALL
    }

    /// Threshold direction for this parameter.
    pub fn kind(&self) -> ThresholdKind {
        match self {
            Self::FrontSetback | Self::SideSetback | Self::PermeabilityRate => ThresholdKind::Min,
            Self::OccupancyRate | Self::FloorAreaRatio => ThresholdKind::Max,
        }
    }

    /// Threshold applied when no municipal override exists.
    pub fn default_threshold(&self) -> f64 {
        match self {
            Self::FrontSetback => 5.0,
            Self::SideSetback => 1.5,
            Self::OccupancyRate => 70.0,
            Self::PermeabilityRate => 20.0,
            Self::FloorAreaRatio => 1.5,
        }
    }

    /// Unit suffix used when printing values.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::FrontSetback | Self::SideSetback => "m",
            Self::OccupancyRate | Self::PermeabilityRate => "%",
            Self::FloorAreaRatio => "",
        }
    }

    /// Serialized key. Matches serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontSetback => "frontSetback",
            Self::SideSetback => "sideSetback",
            Self::OccupancyRate => "occupancyRate",
            Self::PermeabilityRate => "permeabilityRate",
            Self::FloorAreaRatio => "floorAreaRatio",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrontSetback => "Front setback",
            Self::SideSetback => "Side setback",
            Self::OccupancyRate => "Occupancy rate",
            Self::PermeabilityRate => "Permeability rate",
            Self::FloorAreaRatio => "Floor area ratio",
        }
    }
}

impl std::fmt::Display for UrbanParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

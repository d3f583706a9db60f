//! # Zoning Thresholds and Municipal Profiles
//!
//! [`ZoningThresholds`] carries the five limits a project is judged
//! against. It is an ordinary value passed into every evaluation; there is
//! no global rule table.
//!
//! Every field has a serde default, so a configuration document may
//! override any subset:
//!
//! ```yaml
//! municipality: Belém
//! thresholds:
//!   frontSetbackMin: 4.0
//!   occupancyRateMax: 60
//! ```
//!
//! Unknown keys are rejected so a misspelt threshold cannot silently fall
//! back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::parameter::{ThresholdKind, UrbanParameter};

/// Limits for the five urban parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ZoningThresholds {
    /// Minimum front setback, in metres.
    pub front_setback_min: f64,
    /// Minimum side setback, in metres.
    pub side_setback_min: f64,
    /// Maximum occupancy rate, in percent of lot area.
    pub occupancy_rate_max: f64,
    /// Minimum permeability rate, in percent of lot area.
    pub permeability_rate_min: f64,
    /// Maximum floor area ratio.
    pub floor_area_ratio_max: f64,
}

impl Default for ZoningThresholds {
    fn default() -> Self {
        Self {
            front_setback_min: UrbanParameter::FrontSetback.default_threshold(),
            side_setback_min: UrbanParameter::SideSetback.default_threshold(),
            occupancy_rate_max: UrbanParameter::OccupancyRate.default_threshold(),
            permeability_rate_min: UrbanParameter::PermeabilityRate.default_threshold(),
            floor_area_ratio_max: UrbanParameter::FloorAreaRatio.default_threshold(),
        }
    }
}

impl ZoningThresholds {
    /// Threshold for `parameter`.
    pub fn get(&self, parameter: UrbanParameter) -> f64 {
        match parameter {
            UrbanParameter::FrontSetback => self.front_setback_min,
            UrbanParameter::SideSetback => self.side_setback_min,
            UrbanParameter::OccupancyRate => self.occupancy_rate_max,
            UrbanParameter::PermeabilityRate => self.permeability_rate_min,
            UrbanParameter::FloorAreaRatio => self.floor_area_ratio_max,
        }
    }

    /// Return a copy with the threshold for `parameter` replaced.
    pub fn with(mut self, parameter: UrbanParameter, value: f64) -> Self {
        let slot = match parameter {
            UrbanParameter::FrontSetback => &mut self.front_setback_min,
            UrbanParameter::SideSetback => &mut self.side_setback_min,
            UrbanParameter::OccupancyRate => &mut self.occupancy_rate_max,
            UrbanParameter::PermeabilityRate => &mut self.permeability_rate_min,
            UrbanParameter::FloorAreaRatio => &mut self.floor_area_ratio_max,
        };
        *slot = value;
        self
    }

    /// Serialized name of the threshold field for `parameter`.
    pub fn field_name(parameter: UrbanParameter) -> &'static str {
        match parameter {
            UrbanParameter::FrontSetback => "frontSetbackMin",
            UrbanParameter::SideSetback => "sideSetbackMin",
            UrbanParameter::OccupancyRate => "occupancyRateMax",
            UrbanParameter::PermeabilityRate => "permeabilityRateMin",
            UrbanParameter::FloorAreaRatio => "floorAreaRatioMax",
        }
    }

    /// Check that every threshold is finite and non-negative.
    ///
    /// A zero minimum is accepted (it disables the rule) but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &parameter in UrbanParameter::all() {
            let value = self.get(parameter);
            let name = Self::field_name(parameter);
            if !value.is_finite() {
                return Err(ConfigError::InvalidThreshold {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    name,
                    value,
                    reason: "must be non-negative",
                });
            }
            if value == 0.0 && parameter.kind() == ThresholdKind::Min {
                tracing::warn!(threshold = name, "zero minimum disables this rule");
            }
        }
        Ok(())
    }
}

/// Named threshold set for one municipality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalProfile {
    /// Municipality the thresholds apply to.
    pub municipality: String,
    /// Free-text note, e.g. the ordinance the numbers come from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Threshold overrides. Omitted keys keep their defaults.
    #[serde(default)]
    pub thresholds: ZoningThresholds,
}

impl MunicipalProfile {
    /// Profile carrying the default thresholds.
    pub fn new(municipality: impl Into<String>) -> Self {
        Self {
            municipality: municipality.into(),
            description: None,
            thresholds: ZoningThresholds::default(),
        }
    }

    /// Parse and validate a profile from YAML (JSON is accepted too).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document does not parse, names an
    /// unknown threshold, has an empty municipality, or carries a
    /// non-finite or negative threshold.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let profile: Self = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read, parse and validate a profile file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let profile = Self::from_yaml_str(&content)?;
        tracing::info!(
            municipality = %profile.municipality,
            path = %path.display(),
            "loaded municipal profile"
        );
        Ok(profile)
    }

    /// Validate the municipality name and thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.municipality.trim().is_empty() {
            return Err(ConfigError::Profile(
                "municipality must not be empty".to_string(),
            ));
        }
        self.thresholds.validate()
    }
}

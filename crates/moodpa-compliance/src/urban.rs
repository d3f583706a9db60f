//! # Urban Parameter Evaluation
//!
//! Turns a project's [`SiteMeasurements`] into an [`UrbanParameterSet`]:
//! five [`ParameterCheck`]s, one per [`UrbanParameter`].
//!
//! Setbacks and permeability rate are taken as measured. Occupancy rate and
//! floor area ratio are derived from the lot and built areas:
//!
//! ```text
//! occupancyRate  = round(builtArea / lotArea * 100)
//! floorAreaRatio = round2(builtArea / lotArea)
//! ```

use serde::{Deserialize, Serialize};

use moodpa_core::{ComplianceError, UrbanParameter, ZoningThresholds};

use crate::check::{evaluate_parameter, ParameterCheck};

/// Measured inputs for one project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeasurements {
    /// Lot area, in square metres. Must be positive.
    pub lot_area: f64,
    /// Built area, in square metres.
    pub built_area: f64,
    /// Front setback, in metres.
    pub front_setback: f64,
    /// Side setback, in metres.
    pub side_setback: f64,
    /// Permeable share of the lot, in percent.
    pub permeability_rate: f64,
}

impl SiteMeasurements {
    /// Reject non-finite, negative, or out-of-range inputs and a zero lot area.
    ///
    /// Range errors are reported before division by zero, in field order.
    pub fn validate(&self) -> Result<(), ComplianceError> {
        let fields = [
            ("lotArea", self.lot_area),
            ("builtArea", self.built_area),
            ("frontSetback", self.front_setback),
            ("sideSetback", self.side_setback),
            ("permeabilityRate", self.permeability_rate),
        ];
        for (field, value) in fields {
            check_measurement(field, value)?;
        }
        if self.permeability_rate > 100.0 {
            return Err(ComplianceError::InvalidInput {
                field: "permeabilityRate",
                value: self.permeability_rate,
                reason: "must not exceed 100 percent",
            });
        }
        if self.lot_area == 0.0 {
            return Err(ComplianceError::DivisionByZero { field: "lotArea" });
        }
        Ok(())
    }

    /// Built area as a whole-number percentage of lot area.
    pub fn occupancy_rate(&self) -> Result<f64, ComplianceError> {
        let ratio = self.area_ratio()?;
        Ok((ratio * 100.0).round())
    }

    /// Built area over lot area, rounded to two decimals.
    ///
    /// Rounds the exact value of the stored ratio, so 301 / 200 (stored
    /// just below 1.505) gives 1.50, not 1.51.
    pub fn floor_area_ratio(&self) -> Result<f64, ComplianceError> {
        let ratio = self.area_ratio()?;
        Ok(round_to_hundredths(ratio))
    }

    fn area_ratio(&self) -> Result<f64, ComplianceError> {
        if self.lot_area == 0.0 {
            return Err(ComplianceError::DivisionByZero { field: "lotArea" });
        }
        Ok(self.built_area / self.lot_area)
    }
}

/// Reject a non-finite or negative measurement.
pub(crate) fn check_measurement(field: &'static str, value: f64) -> Result<(), ComplianceError> {
    if !value.is_finite() {
        return Err(ComplianceError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ComplianceError::InvalidInput {
            field,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(())
}

/// Round a finite, non-negative value to two decimals.
///
/// Works on the exact binary value instead of `value * 100.0`, whose own
/// rounding can push a value such as 1.50499... up to 150.5. Exact ties
/// round up.
fn round_to_hundredths(value: f64) -> f64 {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    // From 2^46 upward the spacing of f64 exceeds 0.01: nothing to round.
    if exponent >= -6 {
        return value;
    }
    let shift = exponent.unsigned_abs();
    if shift >= 128 {
        return 0.0;
    }
    let scaled = u128::from(mantissa) * 100;
    let hundredths = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let rounded = if remainder >= 1u128 << (shift - 1) {
        hundredths + 1
    } else {
        hundredths
    };
    // Below 2^46 the count of hundredths is below 2^53, so the cast is exact.
    rounded as f64 / 100.0
}

/// The five parameter checks of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrbanParameterSet {
    pub front_setback: ParameterCheck,
    pub side_setback: ParameterCheck,
    pub occupancy_rate: ParameterCheck,
    pub permeability_rate: ParameterCheck,
    pub floor_area_ratio: ParameterCheck,
}

impl UrbanParameterSet {
    /// Check for `parameter`.
    pub fn get(&self, parameter: UrbanParameter) -> &ParameterCheck {
        match parameter {
            UrbanParameter::FrontSetback => &self.front_setback,
            UrbanParameter::SideSetback => &self.side_setback,
            UrbanParameter::OccupancyRate => &self.occupancy_rate,
            UrbanParameter::PermeabilityRate => &self.permeability_rate,
            UrbanParameter::FloorAreaRatio => &self.floor_area_ratio,
        }
    }

    /// Checks paired with their parameter, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (UrbanParameter, &ParameterCheck)> + '_ {
        UrbanParameter::all().iter().map(move |&p| (p, self.get(p)))
    }

    /// Whether all five checks conform.
    pub fn all_conform(&self) -> bool {
        self.iter().all(|(_, check)| check.conforms)
    }

    /// Parameters that failed, in report order.
    pub fn non_conforming(&self) -> Vec<UrbanParameter> {
        self.iter()
            .filter(|(_, check)| !check.conforms)
            .map(|(p, _)| p)
            .collect()
    }
}

/// Evaluate all five urban parameters.
///
/// # Errors
///
/// - [`ComplianceError::InvalidInput`] for non-finite or negative
///   measurements, or a permeability rate above 100.
/// - [`ComplianceError::DivisionByZero`] if `lot_area` is zero.
pub fn evaluate_urban_parameters(
    measurements: &SiteMeasurements,
    thresholds: &ZoningThresholds,
) -> Result<UrbanParameterSet, ComplianceError> {
    measurements.validate()?;

    let check = |parameter: UrbanParameter, value: f64| {
        evaluate_parameter(value, thresholds.get(parameter), parameter.kind())
    };

    let set = UrbanParameterSet {
        front_setback: check(UrbanParameter::FrontSetback, measurements.front_setback)?,
        side_setback: check(UrbanParameter::SideSetback, measurements.side_setback)?,
        occupancy_rate: check(UrbanParameter::OccupancyRate, measurements.occupancy_rate()?)?,
        permeability_rate: check(UrbanParameter::PermeabilityRate, measurements.permeability_rate)?,
        floor_area_ratio: check(UrbanParameter::FloorAreaRatio, measurements.floor_area_ratio()?)?,
    };

    tracing::debug!(
        occupancy_rate = set.occupancy_rate.value,
        floor_area_ratio = set.floor_area_ratio.value,
        all_conform = set.all_conform(),
        "urban parameters evaluated"
    );

    Ok(set)
}

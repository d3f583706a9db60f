//! # Compliance Report
//!
//! [`evaluate_compliance`] composes the urban-parameter checks, the
//! graphical checklist, and the observation list into one
//! [`ComplianceReport`].
//!
//! ## Aggregation Rule
//!
//! ```text
//! Total   ⇔ all five parameter checks conform ∧ all four mandatory elements present
//! Partial ⇔ otherwise
//! ```
//!
//! Missing supplementary elements add observations but do not turn a
//! `Total` into a `Partial`. A report can therefore be `Total` while
//! listing supplementary gaps.

use serde::{Deserialize, Serialize};

use moodpa_core::{ComplianceError, ZoningThresholds};

use crate::graphical::{evaluate_graphical_elements, GraphicalElementSet};
use crate::observation::build_observations;
use crate::urban::{evaluate_urban_parameters, SiteMeasurements, UrbanParameterSet};

/// Overall classification of an evaluated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallConformance {
    /// Every parameter conforms and every mandatory drawing is present.
    Total,
    /// At least one parameter or mandatory drawing fails.
    Partial,
}

impl std::fmt::Display for OverallConformance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Total => f.write_str("Total"),
            Self::Partial => f.write_str("Partial"),
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// The five parameter checks.
    pub parameters: UrbanParameterSet,
    /// The evaluated checklist, with an entry for every element.
    pub graphical_elements: GraphicalElementSet,
    /// Findings in emission order.
    pub observations: Vec<String>,
    /// Aggregate classification.
    pub overall_conformance: OverallConformance,
}

impl ComplianceReport {
    /// Whether the report is `Total`.
    pub fn is_total(&self) -> bool {
        self.overall_conformance == OverallConformance::Total
    }
}

/// Evaluate one project.
///
/// Pure and deterministic: identical inputs give identical reports.
///
/// # Errors
///
/// Propagates [`ComplianceError`] from measurement validation.
pub fn evaluate_compliance(
    measurements: &SiteMeasurements,
    elements: &GraphicalElementSet,
    thresholds: &ZoningThresholds,
) -> Result<ComplianceReport, ComplianceError> {
    let parameters = evaluate_urban_parameters(measurements, thresholds)?;
    let graphical = evaluate_graphical_elements(elements);
    let observations = build_observations(&parameters, &graphical);

    let overall_conformance = if parameters.all_conform() && graphical.mandatory_conforms {
        OverallConformance::Total
    } else {
        OverallConformance::Partial
    };

    tracing::debug!(
        overall = %overall_conformance,
        observations = observations.len(),
        "compliance evaluated"
    );

    Ok(ComplianceReport {
        parameters,
        graphical_elements: elements.normalized(),
        observations,
        overall_conformance,
    })
}

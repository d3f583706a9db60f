//! # Observation Messages
//!
//! One fixed-template message per finding. Reports are compared textually
//! by the store and by tests, so the wording and the emission order are
//! stable:
//!
//! 1. Non-conforming urban parameters, in parameter order.
//! 2. Missing mandatory elements, in checklist order.
//! 3. Missing supplementary elements, in checklist order.

use moodpa_core::{GraphicalElement, UrbanParameter};

use crate::graphical::GraphicalEvaluation;
use crate::urban::UrbanParameterSet;

/// Message emitted when `parameter` does not conform.
pub fn parameter_observation(parameter: UrbanParameter) -> &'static str {
    match parameter {
        UrbanParameter::FrontSetback => {
            "Front setback is below the minimum required by municipal legislation."
        }
        UrbanParameter::SideSetback => {
            "Side setback is below the minimum required by municipal legislation."
        }
        UrbanParameter::OccupancyRate => {
            "Occupancy rate exceeds the maximum allowed by municipal legislation."
        }
        UrbanParameter::PermeabilityRate => "Permeability rate is below the minimum required.",
        UrbanParameter::FloorAreaRatio => {
            "Floor area ratio exceeds the maximum allowed by municipal legislation."
        }
    }
}

/// Message emitted when `element` is missing from the submission.
pub fn missing_element_observation(element: GraphicalElement) -> String {
    match element {
        GraphicalElement::NorthArrow => "Missing north-arrow indication in the site plan.".to_string(),
        other => format!(
            "Missing {} as required by representation standards.",
            other.display_name()
        ),
    }
}

/// Assemble the ordered observation list for one evaluation.
pub fn build_observations(
    parameters: &UrbanParameterSet,
    graphical: &GraphicalEvaluation,
) -> Vec<String> {
    let parameter_messages = parameters
        .non_conforming()
        .into_iter()
        .map(|p| parameter_observation(p).to_string());

    let element_messages = graphical
        .missing_mandatory
        .iter()
        .chain(&graphical.missing_supplementary)
        .map(|&e| missing_element_observation(e));

    parameter_messages.chain(element_messages).collect()
}

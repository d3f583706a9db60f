//! # Recommendations
//!
//! Maps observation messages to corrective recommendations by category.
//! Each observation yields at most one recommendation. Repeated categories
//! repeat their recommendation; callers de-duplicate if they want to.
//!
//! Parameter recommendations quote the threshold that was applied, so a
//! municipal profile that relaxes the front setback to 4.0 m yields advice
//! citing 4.0 m. With the default thresholds the texts read:
//!
//! ```text
//! Adjust the front setback to meet the 5.0 m minimum required by legislation.
//! Reduce the built area to meet the maximum occupancy rate of 70% allowed.
//! ```
//!
//! Missing mandatory drawings have no recommendation category. Their
//! observation already states the fix.

use moodpa_core::{UrbanParameter, ZoningThresholds};

/// What a matched category recommends.
enum Advice {
    /// Text quoting the threshold for this parameter.
    Parameter(UrbanParameter),
    /// Threshold-independent text.
    Fixed(&'static str),
}

/// Category marker found in an observation, and the advice it triggers.
///
/// Checked in order; the first marker contained in the observation wins.
const CATEGORIES: &[(&str, Advice)] = &[
    ("Front setback", Advice::Parameter(UrbanParameter::FrontSetback)),
    ("Side setback", Advice::Parameter(UrbanParameter::SideSetback)),
    ("Occupancy rate", Advice::Parameter(UrbanParameter::OccupancyRate)),
    ("Permeability rate", Advice::Parameter(UrbanParameter::PermeabilityRate)),
    ("Floor area ratio", Advice::Parameter(UrbanParameter::FloorAreaRatio)),
    ("roof plan", Advice::Fixed("Add a roof plan to the project.")),
    (
        "north-arrow",
        Advice::Fixed("Include a north-arrow indication in the site plan."),
    ),
    (
        "levels and dimensions",
        Advice::Fixed("Add levels and dimensions to every plan in the project."),
    ),
    (
        "scale indicators",
        Advice::Fixed("Include scale indicators in every project drawing."),
    ),
];

fn parameter_advice(parameter: UrbanParameter, thresholds: &ZoningThresholds) -> String {
    let limit = thresholds.get(parameter);
    match parameter {
        UrbanParameter::FrontSetback => format!(
            "Adjust the front setback to meet the {limit:.1} m minimum required by legislation."
        ),
        UrbanParameter::SideSetback => format!(
            "Adjust the side setback to meet the {limit:.1} m minimum required by legislation."
        ),
        UrbanParameter::OccupancyRate => format!(
            "Reduce the built area to meet the maximum occupancy rate of {limit}% allowed."
        ),
        UrbanParameter::PermeabilityRate => format!(
            "Increase the permeable area to reach the minimum of {limit}% of the lot area."
        ),
        UrbanParameter::FloorAreaRatio => format!(
            "Reduce the total built area to meet the maximum floor area ratio of {limit}."
        ),
    }
}

/// Recommendation for a single observation under `thresholds`, if its
/// category has one.
pub fn recommendation_for(observation: &str, thresholds: &ZoningThresholds) -> Option<String> {
    CATEGORIES
        .iter()
        .find(|(marker, _)| observation.contains(marker))
        .map(|(_, advice)| match advice {
            Advice::Parameter(parameter) => parameter_advice(*parameter, thresholds),
            Advice::Fixed(text) => (*text).to_string(),
        })
}

/// Recommendations for `observations` under the default thresholds, in
/// observation order.
pub fn recommendations_for<S: AsRef<str>>(observations: &[S]) -> Vec<String> {
    recommendations_under(observations, &ZoningThresholds::default())
}

/// Recommendations for `observations`, quoting `thresholds`, in
/// observation order.
pub fn recommendations_under<S: AsRef<str>>(
    observations: &[S],
    thresholds: &ZoningThresholds,
) -> Vec<String> {
    observations
        .iter()
        .filter_map(|obs| recommendation_for(obs.as_ref(), thresholds))
        .collect()
}

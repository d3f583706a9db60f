//! # moodpa-compliance: Zoning Compliance Evaluator
//!
//! Evaluates an architectural project against municipal zoning rules and
//! produces a [`ComplianceReport`]:
//!
//! ```text
//! SiteMeasurements ──► evaluate_urban_parameters ──► UrbanParameterSet ─┐
//!                                                                      ├─► build_observations ──► ComplianceReport
//! GraphicalElementSet ─► evaluate_graphical_elements ─► GraphicalEvaluation ─┘
//! ```
//!
//! Every function in the evaluation path is pure: no I/O, no clock, no
//! randomness, no shared state. Identical inputs produce identical
//! reports, and evaluations may run concurrently without coordination.
//!
//! Around the evaluator sit the store-facing types: [`ProjectRecord`]
//! with its analysis lifecycle, the renderer-facing [`ProjectReport`], and
//! [`PortfolioStatistics`] for the dashboard.

pub mod check;
pub mod graphical;
pub mod observation;
pub mod project;
pub mod recommendation;
pub mod report;
pub mod statistics;
pub mod urban;

// Re-export primary types.
pub use check::{evaluate_parameter, ParameterCheck};
pub use graphical::{evaluate_graphical_elements, GraphicalElementSet, GraphicalEvaluation};
pub use observation::{build_observations, missing_element_observation, parameter_observation};
pub use project::{
    ProjectConformity, ProjectRecord, ProjectReport, ProjectStatus, ProjectSubmission,
    ProjectType, SiteSurvey,
};
pub use recommendation::{recommendation_for, recommendations_for, recommendations_under};
pub use report::{evaluate_compliance, ComplianceReport, OverallConformance};
pub use statistics::{ConformityShare, PortfolioAverages, PortfolioStatistics};
pub use urban::{evaluate_urban_parameters, SiteMeasurements, UrbanParameterSet};

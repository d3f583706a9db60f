//! # Project Records and Reports
//!
//! A [`ProjectRecord`] is what the project store keeps for one submission:
//! identity, declared areas, lifecycle status, and the latest analysis.
//! A [`ProjectReport`] is the document handed to the report renderer: the
//! compliance report plus the project metadata and recommendations.
//!
//! ## Lifecycle
//!
//! ```text
//! new ──► UnderAnalysis / Pending ──analyze──► AnalysisComplete / Total|Partial
//!               ▲                                       │
//!               └────────── update_areas (changed) ─────┘
//! ```
//!
//! Changing the lot or built area invalidates the stored analysis, since
//! occupancy rate and floor area ratio derive from them. A failed analysis
//! leaves the record untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use moodpa_core::{ComplianceError, ZoningThresholds};

use crate::graphical::GraphicalElementSet;
use crate::recommendation::recommendations_under;
use crate::report::{evaluate_compliance, ComplianceReport, OverallConformance};
use crate::urban::{check_measurement, SiteMeasurements};

/// Declared use of the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Mixed,
    Industrial,
    Institutional,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Mixed => "mixed",
            Self::Industrial => "industrial",
            Self::Institutional => "institutional",
        };
        f.write_str(s)
    }
}

/// Where a project is in the review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Submitted, no current analysis.
    UnderAnalysis,
    /// A current analysis is attached.
    AnalysisComplete,
}

/// Conformity as stored on a project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectConformity {
    /// Not analysed yet.
    Pending,
    Total,
    Partial,
}

impl From<OverallConformance> for ProjectConformity {
    fn from(value: OverallConformance) -> Self {
        match value {
            OverallConformance::Total => Self::Total,
            OverallConformance::Partial => Self::Partial,
        }
    }
}

impl std::fmt::Display for ProjectConformity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Total => f.write_str("Total"),
            Self::Partial => f.write_str("Partial"),
        }
    }
}

/// On-site measurements that are not part of the declared project areas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSurvey {
    pub front_setback: f64,
    pub side_setback: f64,
    pub permeability_rate: f64,
}

/// Renderer-facing analysis document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub project_id: Uuid,
    pub project_name: String,
    pub project_type: ProjectType,
    pub analyzed_at: DateTime<Utc>,
    pub report: ComplianceReport,
    /// One entry per observation that has a recommendation category.
    pub recommendations: Vec<String>,
}

impl ProjectReport {
    /// Attach project metadata and recommendations to `report`.
    ///
    /// Recommendations quote `thresholds`, which should be the ones the
    /// report was evaluated under.
    pub fn new(
        record: &ProjectRecord,
        report: ComplianceReport,
        thresholds: &ZoningThresholds,
        analyzed_at: DateTime<Utc>,
    ) -> Self {
        let recommendations = recommendations_under(&report.observations, thresholds);
        Self {
            project_id: record.id,
            project_name: record.name.clone(),
            project_type: record.project_type,
            analyzed_at,
            report,
            recommendations,
        }
    }

    pub fn conformance(&self) -> OverallConformance {
        self.report.overall_conformance
    }
}

/// One submitted project as held by the project store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub name: String,
    pub project_type: ProjectType,
    /// Lot area, in square metres.
    pub lot_area: f64,
    /// Built area, in square metres.
    pub built_area: f64,
    pub submitted_at: DateTime<Utc>,
    pub status: ProjectStatus,
    pub conformity: ProjectConformity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ProjectReport>,
}

impl ProjectRecord {
    /// A freshly submitted project with a random id.
    ///
    /// # Errors
    ///
    /// Returns [`ComplianceError::InvalidInput`] if either area is
    /// non-finite or negative. A zero lot area is accepted here and
    /// rejected at analysis.
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        lot_area: f64,
        built_area: f64,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ComplianceError> {
        check_areas(lot_area, built_area)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            project_type,
            lot_area,
            built_area,
            submitted_at,
            status: ProjectStatus::UnderAnalysis,
            conformity: ProjectConformity::Pending,
            analysis: None,
        })
    }

    /// Check the declared areas of a record read from the store.
    pub fn validate_areas(&self) -> Result<(), ComplianceError> {
        check_areas(self.lot_area, self.built_area)
    }

    /// Combine the declared areas with an on-site survey.
    pub fn measurements(&self, survey: &SiteSurvey) -> SiteMeasurements {
        SiteMeasurements {
            lot_area: self.lot_area,
            built_area: self.built_area,
            front_setback: survey.front_setback,
            side_setback: survey.side_setback,
            permeability_rate: survey.permeability_rate,
        }
    }

    /// Evaluate the project and store the result.
    ///
    /// # Errors
    ///
    /// Returns [`ComplianceError`] if the measurements are invalid. The
    /// record is not modified in that case.
    pub fn analyze(
        &mut self,
        survey: &SiteSurvey,
        elements: &GraphicalElementSet,
        thresholds: &ZoningThresholds,
        analyzed_at: DateTime<Utc>,
    ) -> Result<&ProjectReport, ComplianceError> {
        let report = evaluate_compliance(&self.measurements(survey), elements, thresholds)?;
        let project_report = ProjectReport::new(self, report, thresholds, analyzed_at);

        self.status = ProjectStatus::AnalysisComplete;
        self.conformity = project_report.conformance().into();
        tracing::info!(
            project_id = %self.id,
            conformity = %self.conformity,
            "project analysis complete"
        );

        Ok(self.analysis.insert(project_report))
    }

    /// Replace the declared areas.
    ///
    /// Returns `true` if either area changed, in which case the stored
    /// analysis is discarded and the record returns to `UnderAnalysis`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplianceError::InvalidInput`] for a non-finite or
    /// negative area. The record is not modified in that case.
    pub fn update_areas(
        &mut self,
        lot_area: f64,
        built_area: f64,
    ) -> Result<bool, ComplianceError> {
        check_areas(lot_area, built_area)?;
        if lot_area == self.lot_area && built_area == self.built_area {
            return Ok(false);
        }
        self.lot_area = lot_area;
        self.built_area = built_area;
        self.analysis = None;
        self.status = ProjectStatus::UnderAnalysis;
        self.conformity = ProjectConformity::Pending;
        tracing::debug!(project_id = %self.id, "areas changed, analysis reset");
        Ok(true)
    }
}

fn check_areas(lot_area: f64, built_area: f64) -> Result<(), ComplianceError> {
    check_measurement("lotArea", lot_area)?;
    check_measurement("builtArea", built_area)
}

/// A project as submitted for evaluation: metadata, measurements, checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub name: String,
    pub project_type: ProjectType,
    pub measurements: SiteMeasurements,
    #[serde(default)]
    pub graphical_elements: GraphicalElementSet,
}

impl ProjectSubmission {
    /// Store record for this submission, not yet analysed.
    pub fn to_record(&self, submitted_at: DateTime<Utc>) -> Result<ProjectRecord, ComplianceError> {
        ProjectRecord::new(
            self.name.clone(),
            self.project_type,
            self.measurements.lot_area,
            self.measurements.built_area,
            submitted_at,
        )
    }

    /// The survey half of the measurements.
    pub fn survey(&self) -> SiteSurvey {
        SiteSurvey {
            front_setback: self.measurements.front_setback,
            side_setback: self.measurements.side_setback,
            permeability_rate: self.measurements.permeability_rate,
        }
    }
}

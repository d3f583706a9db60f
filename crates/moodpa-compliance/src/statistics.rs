//! # Portfolio Statistics
//!
//! Aggregate figures over a set of project records, as shown on the
//! administration dashboard and in the statistical report.
//!
//! The mean occupancy rate is the ratio of the mean areas, not the mean of
//! per-project rates:
//!
//! ```text
//! meanOccupancyRate = meanBuiltArea / meanLotArea * 100
//! ```

use serde::{Deserialize, Serialize};

use crate::project::{ProjectConformity, ProjectRecord};

/// Count and share of projects with one conformity value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConformityShare {
    pub count: usize,
    /// Percentage of all projects, 0 for an empty portfolio.
    pub percentage: f64,
}

impl ConformityShare {
    fn of(count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        Self { count, percentage }
    }
}

/// Area averages across the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAverages {
    pub mean_lot_area: f64,
    pub mean_built_area: f64,
    pub mean_occupancy_rate: f64,
}

/// Dashboard figures for a set of projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStatistics {
    pub total_projects: usize,
    pub total: ConformityShare,
    pub partial: ConformityShare,
    pub pending: ConformityShare,
    /// `None` for an empty portfolio or a zero mean lot area.
    pub averages: Option<PortfolioAverages>,
}

impl PortfolioStatistics {
    pub fn compute(projects: &[ProjectRecord]) -> Self {
        let total_projects = projects.len();
        let count = |c: ProjectConformity| projects.iter().filter(|p| p.conformity == c).count();

        let averages = if total_projects == 0 {
            None
        } else {
            let n = total_projects as f64;
            let mean_lot_area = projects.iter().map(|p| p.lot_area).sum::<f64>() / n;
            let mean_built_area = projects.iter().map(|p| p.built_area).sum::<f64>() / n;
            (mean_lot_area > 0.0).then(|| PortfolioAverages {
                mean_lot_area,
                mean_built_area,
                mean_occupancy_rate: mean_built_area / mean_lot_area * 100.0,
            })
        };

        Self {
            total_projects,
            total: ConformityShare::of(count(ProjectConformity::Total), total_projects),
            partial: ConformityShare::of(count(ProjectConformity::Partial), total_projects),
            pending: ConformityShare::of(count(ProjectConformity::Pending), total_projects),
            averages,
        }
    }
}

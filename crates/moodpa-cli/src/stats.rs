//! # Stats Subcommand
//!
//! Reads an exported array of project records and prints portfolio
//! statistics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use moodpa_compliance::{PortfolioStatistics, ProjectRecord};

use crate::read_document;

/// Arguments for `moodpa stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// JSON or YAML array of project records.
    pub input: PathBuf,

    /// Print the statistics as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the stats subcommand.
pub fn run_stats(args: &StatsArgs) -> Result<u8> {
    let projects: Vec<ProjectRecord> = read_document(&args.input)?;
    for project in &projects {
        project
            .validate_areas()
            .with_context(|| format!("invalid project record {} ({:?})", project.id, project.name))?;
    }
    tracing::debug!(projects = projects.len(), "computing portfolio statistics");
    let stats = PortfolioStatistics::compute(&projects);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_text(&stats));
    }
    Ok(0)
}

/// Plain-text rendering of portfolio statistics.
pub fn render_text(stats: &PortfolioStatistics) -> String {
    let mut lines = vec![
        format!("Projects analysed:       {}", stats.total_projects),
        format!(
            "Total conformity:        {} ({:.1}%)",
            stats.total.count, stats.total.percentage
        ),
        format!(
            "Partial conformity:      {} ({:.1}%)",
            stats.partial.count, stats.partial.percentage
        ),
        format!(
            "Pending:                 {} ({:.1}%)",
            stats.pending.count, stats.pending.percentage
        ),
    ];
    if let Some(avg) = &stats.averages {
        lines.push(format!("Mean lot area:           {:.2} m²", avg.mean_lot_area));
        lines.push(format!("Mean built area:         {:.2} m²", avg.mean_built_area));
        lines.push(format!("Mean occupancy rate:     {:.2}%", avg.mean_occupancy_rate));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

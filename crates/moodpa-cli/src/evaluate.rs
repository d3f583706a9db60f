//! # Evaluate Subcommand
//!
//! Reads a [`ProjectSubmission`] (YAML or JSON), evaluates it against the
//! effective thresholds, and prints the resulting [`ProjectReport`].
//!
//! ```yaml
//! name: Residência Unifamiliar
//! projectType: residential
//! measurements:
//!   lotArea: 250
//!   builtArea: 150
//!   frontSetback: 3.5
//!   sideSetback: 1.5
//!   permeabilityRate: 25
//! graphicalElements:
//!   floorPlan: true
//!   sections: true
//!   facades: true
//!   siteplan: false
//! ```
//!
//! Exits 0 for `Total`, 2 for `Partial`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use moodpa_compliance::{OverallConformance, ProjectReport, ProjectSubmission};
use moodpa_core::{GraphicalElement, ZoningThresholds};

use crate::{load_thresholds, read_document, EXIT_PARTIAL, EXIT_TOTAL};

/// Arguments for `moodpa evaluate`.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Project submission file (YAML or JSON).
    pub input: PathBuf,

    /// Municipal profile (YAML) overriding the default thresholds.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the evaluate subcommand.
pub fn run_evaluate(args: &EvaluateArgs) -> Result<u8> {
    let thresholds = load_thresholds(args.profile.as_deref())?;
    let submission: ProjectSubmission = read_document(&args.input)?;
    let report = evaluate_submission(&submission, &thresholds)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(match report.conformance() {
        OverallConformance::Total => EXIT_TOTAL,
        OverallConformance::Partial => EXIT_PARTIAL,
    })
}

/// Turn a submission into an analysed project report.
pub fn evaluate_submission(
    submission: &ProjectSubmission,
    thresholds: &ZoningThresholds,
) -> Result<ProjectReport> {
    let now = chrono::Utc::now();
    let context = || format!("cannot evaluate project {:?}", submission.name);
    let mut record = submission.to_record(now).with_context(context)?;
    let report = record
        .analyze(
            &submission.survey(),
            &submission.graphical_elements,
            thresholds,
            now,
        )
        .with_context(context)?;
    Ok(report.clone())
}

/// Plain-text rendering of a project report.
pub fn render_text(report: &ProjectReport) -> String {
    let inner = &report.report;
    let mut lines = vec![
        format!("Project:     {} ({})", report.project_name, report.project_type),
        format!("Project id:  {}", report.project_id),
        format!("Conformity:  {}", inner.overall_conformance),
        String::new(),
        "Urban parameters:".to_string(),
    ];
    lines.extend(inner.parameters.iter().map(|(parameter, check)| {
        format!(
            "  {:<18} {:>8}{:<2} {} {:>6}{:<2} {}",
            parameter.label(),
            format_value(check.value),
            parameter.unit(),
            check.threshold_kind,
            format_value(check.threshold),
            parameter.unit(),
            if check.conforms { "conforming" } else { "NOT conforming" },
        )
    }));

    lines.push(String::new());
    lines.push("Graphical elements:".to_string());
    lines.extend(GraphicalElement::all().iter().map(|&element| {
        let mark = if inner.graphical_elements.is_present(element) { "x" } else { " " };
        format!("  [{mark}] {}", element.display_name())
    }));

    for (title, items) in [
        ("Observations:", &inner.observations),
        ("Recommendations:", &report.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(title.to_string());
        lines.extend(items.iter().map(|item| format!("  - {item}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

//! # CLI Document Integration Tests
//!
//! Municipal profiles and submission files on disk, driven through the
//! `moodpa-cli` library functions the binary dispatches to.

use std::path::Path;

use moodpa_cli::evaluate::{evaluate_submission, run_evaluate, EvaluateArgs};
use moodpa_cli::stats::{run_stats, StatsArgs};
use moodpa_cli::{load_profile, load_thresholds, read_document, EXIT_PARTIAL, EXIT_TOTAL};
use moodpa_compliance::{OverallConformance, ProjectRecord, ProjectSubmission};
use moodpa_core::{GraphicalElement, MunicipalProfile};

const SUBMISSION: &str = "\
name: Sobrado Cidade Velha
projectType: residential
measurements:
  lotArea: 250
  builtArea: 150
  frontSetback: 4
  sideSetback: 1.5
  permeabilityRate: 25
graphicalElements:
  floorPlan: true
  sections: true
  facades: true
  siteplan: true
  roofPlan: true
  levelsAndDimensions: true
  scaleIndicators: true
  northArrow: true
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn default_thresholds_fail_front_setback() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "project.yaml", SUBMISSION);
    let args = EvaluateArgs {
        input,
        profile: None,
        json: false,
    };
    assert_eq!(run_evaluate(&args).unwrap(), EXIT_PARTIAL);
}

#[test]
fn municipal_profile_relaxes_front_setback() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "project.yaml", SUBMISSION);
    let profile = write(
        dir.path(),
        "belem.yaml",
        "municipality: Belém\nthresholds:\n  frontSetbackMin: 4.0\n",
    );
    let args = EvaluateArgs {
        input,
        profile: Some(profile),
        json: true,
    };
    assert_eq!(run_evaluate(&args).unwrap(), EXIT_TOTAL);
}

#[test]
fn submission_without_checklist_is_partial() {
    let dir = tempfile::tempdir().unwrap();
    let doc = SUBMISSION.split("graphicalElements:").next().unwrap();
    let path = write(dir.path(), "bare.yaml", doc);
    let submission: ProjectSubmission = read_document(&path).unwrap();
    let report = evaluate_submission(&submission, &load_thresholds(None).unwrap()).unwrap();

    assert_eq!(report.conformance(), OverallConformance::Partial);
    let missing: Vec<_> = GraphicalElement::all()
        .iter()
        .filter(|&&e| !report.report.graphical_elements.is_present(e))
        .collect();
    assert_eq!(missing.len(), 8);
}

#[test]
fn json_submission_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let submission: ProjectSubmission = serde_yaml::from_str(SUBMISSION).unwrap();
    let path = write(
        dir.path(),
        "project.json",
        &serde_json::to_string(&submission).unwrap(),
    );
    let parsed: ProjectSubmission = read_document(&path).unwrap();
    assert_eq!(parsed, submission);
}

#[test]
fn unknown_element_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let doc = SUBMISSION.replace("roofPlan", "roofPlans");
    let path = write(dir.path(), "typo.yaml", &doc);
    let args = EvaluateArgs {
        input: path,
        profile: None,
        json: false,
    };
    let err = run_evaluate(&args).unwrap_err();
    assert!(format!("{err:#}").contains("typo.yaml"));
}

#[test]
fn zero_lot_area_is_an_error_not_a_result() {
    let dir = tempfile::tempdir().unwrap();
    let doc = SUBMISSION.replace("lotArea: 250", "lotArea: 0");
    let path = write(dir.path(), "zero.yaml", &doc);
    let args = EvaluateArgs {
        input: path,
        profile: None,
        json: false,
    };
    let err = run_evaluate(&args).unwrap_err();
    assert!(format!("{err:#}").contains("division by zero"));
}

#[test]
fn profile_with_misspelt_threshold_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write(
        dir.path(),
        "typo.yaml",
        "municipality: Belém\nthresholds:\n  frontSetback: 4.0\n",
    );
    assert!(load_profile(Some(&profile)).is_err());
}

#[test]
fn default_profile_matches_library_defaults() {
    assert_eq!(load_profile(None).unwrap(), MunicipalProfile::new("default"));
}

#[test]
fn stats_over_evaluated_export() {
    let dir = tempfile::tempdir().unwrap();
    let submission: ProjectSubmission = serde_yaml::from_str(SUBMISSION).unwrap();
    let thresholds = load_thresholds(None).unwrap();
    let mut record = submission.to_record(chrono::Utc::now()).unwrap();
    record
        .analyze(
            &submission.survey(),
            &submission.graphical_elements,
            &thresholds,
            chrono::Utc::now(),
        )
        .unwrap();
    let records: Vec<ProjectRecord> = vec![record];
    let path = write(
        dir.path(),
        "projects.json",
        &serde_json::to_string(&records).unwrap(),
    );
    let args = StatsArgs { input: path, json: true };
    assert_eq!(run_stats(&args).unwrap(), 0);
}

#[test]
fn stats_rejects_record_with_negative_area() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "projects.json",
        r#"[{
            "id": "6f1c2a8e-3b7d-4e52-9a0c-1d2e3f4a5b6c",
            "name": "Loteamento",
            "projectType": "residential",
            "lotArea": 300,
            "builtArea": -120,
            "submittedAt": "2024-03-11T09:30:00Z",
            "status": "under_analysis",
            "conformity": "PENDING"
        }]"#,
    );
    let args = StatsArgs { input: path, json: true };
    let err = run_stats(&args).unwrap_err();
    assert!(format!("{err:#}").contains("builtArea"));
}

#[test]
fn floor_area_ratio_just_under_limit_conforms() {
    let dir = tempfile::tempdir().unwrap();
    // 301 / 200 is stored just below 1.505 and rounds to the 1.50 limit.
    let doc = SUBMISSION
        .replace("lotArea: 250", "lotArea: 200")
        .replace("builtArea: 150", "builtArea: 301")
        .replace("frontSetback: 4", "frontSetback: 5");
    let path = write(dir.path(), "far.yaml", &doc);
    let submission: ProjectSubmission = read_document(&path).unwrap();
    let report = evaluate_submission(&submission, &load_thresholds(None).unwrap()).unwrap();
    let far = report.report.parameters.floor_area_ratio;
    assert_eq!(far.value, 1.5);
    assert!(far.conforms);
}

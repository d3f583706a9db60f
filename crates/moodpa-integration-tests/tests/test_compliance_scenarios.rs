//! # Compliance Scenario Integration Tests
//!
//! End-to-end evaluations through the public API of `moodpa-compliance`:
//! - Reference measurements and their derived ratios
//! - Observation ordering across parameters and drawings
//! - The aggregation rule and supplementary gaps
//! - Input rejection

use moodpa_compliance::{
    evaluate_compliance, evaluate_graphical_elements, evaluate_urban_parameters,
    recommendations_for, GraphicalElementSet, OverallConformance, SiteMeasurements,
};
use moodpa_core::{ComplianceError, GraphicalElement, UrbanParameter, ZoningThresholds};

fn site(lot: f64, built: f64, front: f64, side: f64) -> SiteMeasurements {
    SiteMeasurements {
        lot_area: lot,
        built_area: built,
        front_setback: front,
        side_setback: side,
        permeability_rate: 25.0,
    }
}

// ---------------------------------------------------------------------------
// 1. Reference measurements
// ---------------------------------------------------------------------------

#[test]
fn single_family_house_reference_values() {
    let params =
        evaluate_urban_parameters(&site(250.0, 150.0, 3.5, 1.5), &ZoningThresholds::default())
            .unwrap();

    assert!(!params.front_setback.conforms, "3.5 m < 5.0 m");
    assert!(params.side_setback.conforms, "1.5 m is the boundary");
    assert_eq!(params.occupancy_rate.value, 60.0);
    assert!(params.occupancy_rate.conforms);
    assert_eq!(params.floor_area_ratio.value, 0.6);
    assert!(params.floor_area_ratio.conforms);
    assert_eq!(params.non_conforming(), vec![UrbanParameter::FrontSetback]);
}

#[test]
fn occupancy_boundary_conforms() {
    let params =
        evaluate_urban_parameters(&site(500.0, 350.0, 5.5, 2.0), &ZoningThresholds::default())
            .unwrap();

    assert_eq!(params.occupancy_rate.value, 70.0);
    assert!(params.occupancy_rate.conforms);
    assert_eq!(params.floor_area_ratio.value, 0.7);
    assert!(params.floor_area_ratio.conforms);
    assert!(params.all_conform());
}

#[test]
fn floor_area_ratio_rounds_stored_quotient() {
    let thresholds = ZoningThresholds::default();
    let far = |lot, built| {
        evaluate_urban_parameters(&site(lot, built, 5.0, 1.5), &thresholds)
            .unwrap()
            .floor_area_ratio
    };

    // 301 / 200 is stored just below 1.505: rounds to the limit and conforms.
    let at_limit = far(200.0, 301.0);
    assert_eq!(at_limit.value, 1.5);
    assert!(at_limit.conforms);

    assert_eq!(far(200.0, 223.0).value, 1.11);
    assert_eq!(far(200.0, 535.0).value, 2.67);
}

// ---------------------------------------------------------------------------
// 2. Aggregation
// ---------------------------------------------------------------------------

#[test]
fn all_conforming_is_total_regardless_of_supplementary() {
    let mut elements = GraphicalElementSet::new();
    for &e in GraphicalElement::mandatory() {
        elements.set(e, true);
    }
    for supplementary in [false, true] {
        let mut elements = elements.clone();
        for &e in GraphicalElement::supplementary() {
            elements.set(e, supplementary);
        }
        let mut measurements = site(500.0, 350.0, 5.5, 2.0);
        measurements.permeability_rate = 20.0;
        let report =
            evaluate_compliance(&measurements, &elements, &ZoningThresholds::default()).unwrap();
        assert_eq!(report.overall_conformance, OverallConformance::Total);
        if supplementary {
            assert!(report.observations.is_empty());
        } else {
            assert_eq!(report.observations.len(), 4);
        }
    }
}

#[test]
fn front_setback_and_missing_siteplan_observations_in_order() {
    let elements = GraphicalElementSet::complete().with(GraphicalElement::Siteplan, false);
    let report = evaluate_compliance(
        &site(250.0, 150.0, 3.5, 1.5),
        &elements,
        &ZoningThresholds::default(),
    )
    .unwrap();

    assert_eq!(report.overall_conformance, OverallConformance::Partial);
    assert_eq!(
        report.observations,
        vec![
            "Front setback is below the minimum required by municipal legislation.",
            "Missing siteplan as required by representation standards.",
        ]
    );
}

#[test]
fn every_finding_in_declared_order() {
    let measurements = SiteMeasurements {
        lot_area: 100.0,
        built_area: 200.0,
        front_setback: 0.0,
        side_setback: 0.0,
        permeability_rate: 0.0,
    };
    let report = evaluate_compliance(
        &measurements,
        &GraphicalElementSet::new(),
        &ZoningThresholds::default(),
    )
    .unwrap();

    assert_eq!(
        report.observations,
        vec![
            "Front setback is below the minimum required by municipal legislation.",
            "Side setback is below the minimum required by municipal legislation.",
            "Occupancy rate exceeds the maximum allowed by municipal legislation.",
            "Permeability rate is below the minimum required.",
            "Floor area ratio exceeds the maximum allowed by municipal legislation.",
            "Missing floor plan as required by representation standards.",
            "Missing sections as required by representation standards.",
            "Missing facades as required by representation standards.",
            "Missing siteplan as required by representation standards.",
            "Missing roof plan as required by representation standards.",
            "Missing levels and dimensions as required by representation standards.",
            "Missing scale indicators as required by representation standards.",
            "Missing north-arrow indication in the site plan.",
        ]
    );

    let recommendations = recommendations_for(&report.observations);
    assert_eq!(recommendations.len(), 9);
    assert_eq!(
        recommendations[0],
        "Adjust the front setback to meet the 5.0 m minimum required by legislation."
    );
    assert_eq!(
        recommendations[8],
        "Include a north-arrow indication in the site plan."
    );
}

#[test]
fn missing_keys_read_as_absent() {
    let elements: GraphicalElementSet =
        serde_json::from_str(r#"{"floorPlan": true, "sections": true, "facades": true}"#).unwrap();
    let eval = evaluate_graphical_elements(&elements);
    assert!(!eval.mandatory_conforms);
    assert_eq!(eval.missing_mandatory, vec![GraphicalElement::Siteplan]);
    assert_eq!(eval.missing_supplementary, GraphicalElement::supplementary().to_vec());
}

#[test]
fn report_lists_all_eight_elements() {
    let elements: GraphicalElementSet = serde_json::from_str(r#"{"siteplan": true}"#).unwrap();
    let report = evaluate_compliance(
        &site(250.0, 150.0, 6.0, 2.0),
        &elements,
        &ZoningThresholds::default(),
    )
    .unwrap();
    for &e in GraphicalElement::all() {
        assert!(report.graphical_elements.contains(e), "{e}");
    }
    assert!(report.graphical_elements.is_present(GraphicalElement::Siteplan));
    assert!(!report.graphical_elements.is_present(GraphicalElement::FloorPlan));
}

// ---------------------------------------------------------------------------
// 3. Municipal overrides
// ---------------------------------------------------------------------------

#[test]
fn stricter_municipality_flips_occupancy() {
    let thresholds = ZoningThresholds::default().with(UrbanParameter::OccupancyRate, 55.0);
    let report = evaluate_compliance(
        &site(250.0, 150.0, 6.0, 2.0),
        &GraphicalElementSet::complete(),
        &thresholds,
    )
    .unwrap();
    assert_eq!(report.overall_conformance, OverallConformance::Partial);
    assert_eq!(report.parameters.occupancy_rate.threshold, 55.0);
    assert_eq!(
        report.observations,
        vec!["Occupancy rate exceeds the maximum allowed by municipal legislation."]
    );
}

// ---------------------------------------------------------------------------
// 4. Input rejection
// ---------------------------------------------------------------------------

#[test]
fn zero_lot_area_is_division_by_zero() {
    let err = evaluate_compliance(
        &site(0.0, 150.0, 5.0, 2.0),
        &GraphicalElementSet::complete(),
        &ZoningThresholds::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ComplianceError::DivisionByZero { .. }));
}

#[test]
fn negative_and_non_finite_inputs_are_invalid() {
    let thresholds = ZoningThresholds::default();
    let elements = GraphicalElementSet::complete();
    for measurements in [
        site(-1.0, 150.0, 5.0, 2.0),
        site(250.0, f64::NAN, 5.0, 2.0),
        site(250.0, 150.0, f64::INFINITY, 2.0),
        site(250.0, 150.0, 5.0, -0.5),
    ] {
        let err = evaluate_compliance(&measurements, &elements, &thresholds).unwrap_err();
        assert!(
            matches!(err, ComplianceError::InvalidInput { .. }),
            "{measurements:?} gave {err:?}"
        );
    }
}

#[test]
fn negative_input_reported_before_zero_lot() {
    let err = evaluate_compliance(
        &site(0.0, -5.0, 5.0, 2.0),
        &GraphicalElementSet::complete(),
        &ZoningThresholds::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ComplianceError::InvalidInput { field: "builtArea", .. }
    ));
}

//! # Parameter Checks
//!
//! A [`ParameterCheck`] is the outcome of comparing one measured value to one
//! threshold. It is derived entirely from its inputs and never mutated.

use serde::{Deserialize, Serialize};

use moodpa_core::{ComplianceError, ThresholdKind};

/// Result of checking one value against one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterCheck {
    /// Measured or derived value.
    pub value: f64,
    /// Limit the value was compared to.
    pub threshold: f64,
    /// Direction of the comparison.
    pub threshold_kind: ThresholdKind,
    /// `value >= threshold` for `Min`, `value <= threshold` for `Max`.
    pub conforms: bool,
}

/// Compare `value` to `threshold`.
///
/// Equality conforms in both directions.
///
/// # Errors
///
/// Returns [`ComplianceError::InvalidInput`] if either number is NaN or
/// infinite.
pub fn evaluate_parameter(
    value: f64,
    threshold: f64,
    kind: ThresholdKind,
) -> Result<ParameterCheck, ComplianceError> {
    if !value.is_finite() {
        return Err(ComplianceError::InvalidInput {
            field: "value",
            value,
            reason: "must be finite",
        });
    }
    if !threshold.is_finite() {
        return Err(ComplianceError::InvalidInput {
            field: "threshold",
            value: threshold,
            reason: "must be finite",
        });
    }
    Ok(ParameterCheck {
        value,
        threshold,
        threshold_kind: kind,
        conforms: kind.admits(value, threshold),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn min_below_threshold_fails() {
        let check = evaluate_parameter(3.5, 5.0, ThresholdKind::Min).unwrap();
        assert!(!check.conforms);
        assert_eq!(check.value, 3.5);
        assert_eq!(check.threshold, 5.0);
        assert_eq!(check.threshold_kind, ThresholdKind::Min);
    }

    #[test]
    fn max_above_threshold_fails() {
        let check = evaluate_parameter(71.0, 70.0, ThresholdKind::Max).unwrap();
        assert!(!check.conforms);
    }

    #[test]
    fn equality_conforms_for_both_kinds() {
        assert!(evaluate_parameter(1.5, 1.5, ThresholdKind::Min).unwrap().conforms);
        assert!(evaluate_parameter(70.0, 70.0, ThresholdKind::Max).unwrap().conforms);
    }

    #[test]
    fn nan_value_rejected() {
        let err = evaluate_parameter(f64::NAN, 5.0, ThresholdKind::Min).unwrap_err();
        assert!(matches!(err, ComplianceError::InvalidInput { field: "value", .. }));
    }

    #[test]
    fn infinite_threshold_rejected() {
        let err = evaluate_parameter(1.0, f64::INFINITY, ThresholdKind::Max).unwrap_err();
        assert!(matches!(err, ComplianceError::InvalidInput { field: "threshold", .. }));
    }

    #[test]
    fn serializes_camel_case() {
        let check = evaluate_parameter(60.0, 70.0, ThresholdKind::Max).unwrap();
        let json = serde_json::to_value(check).unwrap();
        assert_eq!(json["thresholdKind"], "MAX");
        assert_eq!(json["conforms"], true);
    }

    proptest! {
        #[test]
        fn min_conforms_iff_value_at_least_threshold(
            value in -1.0e6f64..1.0e6,
            threshold in -1.0e6f64..1.0e6,
        ) {
            let check = evaluate_parameter(value, threshold, ThresholdKind::Min).unwrap();
            prop_assert_eq!(check.conforms, value >= threshold);
        }

        #[test]
        fn max_conforms_iff_value_at_most_threshold(
            value in -1.0e6f64..1.0e6,
            threshold in -1.0e6f64..1.0e6,
        ) {
            let check = evaluate_parameter(value, threshold, ThresholdKind::Max).unwrap();
            prop_assert_eq!(check.conforms, value <= threshold);
        }

        #[test]
        fn value_equal_to_threshold_always_conforms(x in -1.0e6f64..1.0e6) {
            prop_assert!(evaluate_parameter(x, x, ThresholdKind::Min).unwrap().conforms);
            prop_assert!(evaluate_parameter(x, x, ThresholdKind::Max).unwrap().conforms);
        }
    }
}

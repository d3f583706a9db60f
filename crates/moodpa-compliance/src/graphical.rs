//! # Graphical Element Checklist
//!
//! A [`GraphicalElementSet`] records which drawings a submission contains.
//! It serializes as a flat map keyed by element name:
//!
//! ```json
//! { "floorPlan": true, "sections": true, "facades": true, "siteplan": false }
//! ```
//!
//! A key missing from the map reads as absent. The store may hold
//! partially filled checklists, and an incomplete checklist is a normal
//! evaluation outcome rather than an error. An unknown key does fail
//! deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use moodpa_core::GraphicalElement;

/// Presence flag per graphical element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphicalElementSet {
    elements: BTreeMap<GraphicalElement, bool>,
}

impl GraphicalElementSet {
    /// An empty set. Every element reads as absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with all eight elements present.
    pub fn complete() -> Self {
        GraphicalElement::all().iter().map(|&e| (e, true)).collect()
    }

    /// Builder-style setter.
    pub fn with(mut self, element: GraphicalElement, present: bool) -> Self {
        self.set(element, present);
        self
    }

    /// Record presence for `element`.
    pub fn set(&mut self, element: GraphicalElement, present: bool) {
        self.elements.insert(element, present);
    }

    /// Whether `element` is present. Missing keys read as `false`.
    pub fn is_present(&self, element: GraphicalElement) -> bool {
        self.elements.get(&element).copied().unwrap_or(false)
    }

    /// Whether `element` has an explicit entry.
    pub fn contains(&self, element: GraphicalElement) -> bool {
        self.elements.contains_key(&element)
    }

    /// A copy with an explicit entry for all eight elements.
    pub fn normalized(&self) -> Self {
        GraphicalElement::all()
            .iter()
            .map(|&e| (e, self.is_present(e)))
            .collect()
    }
}

impl FromIterator<(GraphicalElement, bool)> for GraphicalElementSet {
    fn from_iter<I: IntoIterator<Item = (GraphicalElement, bool)>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Checklist outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicalEvaluation {
    /// All four mandatory elements present.
    pub mandatory_conforms: bool,
    /// All four supplementary elements present.
    pub supplementary_conforms: bool,
    /// Absent mandatory elements, in checklist order.
    pub missing_mandatory: Vec<GraphicalElement>,
    /// Absent supplementary elements, in checklist order.
    pub missing_supplementary: Vec<GraphicalElement>,
}

/// Walk the mandatory then supplementary lists and collect what is missing.
pub fn evaluate_graphical_elements(elements: &GraphicalElementSet) -> GraphicalEvaluation {
    let missing = |list: &[GraphicalElement]| -> Vec<GraphicalElement> {
        list.iter()
            .copied()
            .filter(|&e| !elements.is_present(e))
            .collect()
    };

    let missing_mandatory = missing(GraphicalElement::mandatory());
    let missing_supplementary = missing(GraphicalElement::supplementary());

    tracing::debug!(
        missing_mandatory = missing_mandatory.len(),
        missing_supplementary = missing_supplementary.len(),
        "graphical elements evaluated"
    );

    GraphicalEvaluation {
        mandatory_conforms: missing_mandatory.is_empty(),
        supplementary_conforms: missing_supplementary.is_empty(),
        missing_mandatory,
        missing_supplementary,
    }
}

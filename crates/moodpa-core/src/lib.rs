//! # moodpa-core: Foundational Types for MOOD.PA
//!
//! Defines the vocabulary shared by every other crate in the workspace:
//! the five urban parameters checked against municipal zoning law, the
//! eight graphical elements of a submission checklist, the thresholds
//! configuration those parameters are judged against, and the error
//! hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Single taxonomy enums.** [`UrbanParameter`] and [`GraphicalElement`]
//!    are the one definition of each rule axis. Every `match` on them is
//!    exhaustive, so adding a parameter or element is a compile error until
//!    every message table and evaluator handles it.
//!
//! 2. **Declared ordering.** `UrbanParameter::all()` and the mandatory /
//!    supplementary element lists fix the order in which observations are
//!    emitted. Reports are compared textually, so this order is part of the
//!    contract.
//!
//! 3. **Thresholds are values, not globals.** [`ZoningThresholds`] is passed
//!    into every evaluation. Municipal overrides are loaded as
//!    [`MunicipalProfile`]s.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `moodpa-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod element;
pub mod error;
pub mod parameter;
pub mod thresholds;

// Re-export primary types for ergonomic imports.
pub use element::{ElementCategory, GraphicalElement, GRAPHICAL_ELEMENT_COUNT};
pub use error::{ComplianceError, ConfigError, MoodpaError};
pub use parameter::{ThresholdKind, UrbanParameter, URBAN_PARAMETER_COUNT};
pub use thresholds::{MunicipalProfile, ZoningThresholds};

//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the input snapshot (`ValuationInputs`)
//! - derived figures and projections (`DerivedMetrics`, `YearProjection`)
//! - valuation outputs (`ValuationResult`, `SensitivityPoint`)
//! - qualitative annotations (`RiskFlag`, `Insight`, `Narrative`)

pub mod types;

pub use types::*;

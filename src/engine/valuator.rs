//! Multi-method valuation.
//!
//! Three independent approaches are computed per run and scaled by one shared
//! technology-risk multiplier (`tech_score / 100`):
//!
//! - income: the DCF total (terminal value included)
//! - market: ARR times the revenue multiple
//! - cost: cumulative R&D spend at a replacement-cost markup
//!
//! A tech score of 0 degenerates all three to zero; that is an accepted
//! boundary, not an error.

use crate::domain::{DerivedMetrics, ValuationInputs, ValuationResult};
use crate::engine::dcf::DcfOutcome;

/// Replacement-cost markup applied to cumulative R&D spend.
pub const COST_MARKUP: f64 = 1.5;

/// Scale a technology score in [0, 100] to the [0, 1] risk multiplier.
pub fn tech_risk_multiplier(tech_score: f64) -> f64 {
    tech_score / 100.0
}

/// Combine the three valuation methods into the result record.
pub fn value_methods(
    inputs: &ValuationInputs,
    metrics: &DerivedMetrics,
    dcf: &DcfOutcome,
) -> ValuationResult {
    let multiplier = tech_risk_multiplier(inputs.tech_score);

    let income = (dcf.dcf_value * multiplier).round();
    let market = (metrics.arr * inputs.market_multiple * multiplier).round();
    let cost = (inputs.rd_expenses * COST_MARKUP * multiplier).round();
    let average = ((income + market + cost) / 3.0).round();

    ValuationResult {
        income,
        market,
        cost,
        average,
        ltv: metrics.ltv.round(),
        customer_count: metrics.customer_count,
        projections: dcf.projections.clone(),
    }
}

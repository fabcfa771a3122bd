//! Churn sensitivity sweep.
//!
//! The sweep re-evaluates lifetime value at each integer churn rate in
//! [2, 10] and scales the baseline DCF total by the lifetime-value ratio,
//! holding every other input fixed. Points are independent of each other, so
//! they are evaluated in parallel; the output order is the churn order.

use rayon::prelude::*;

use crate::domain::{DerivedMetrics, SensitivityPoint, SweepScaling, ValuationInputs};
use crate::engine::dcf::CASH_FLOW_RATIO;
use crate::engine::metrics::lifetime_value;
use crate::engine::valuator::tech_risk_multiplier;
use crate::error::ValuationError;

/// Lowest churn rate in the sweep (integer percent).
pub const SWEEP_CHURN_MIN: u32 = 2;
/// Highest churn rate in the sweep (integer percent).
pub const SWEEP_CHURN_MAX: u32 = 10;

/// Evaluate the sweep against the baseline DCF total.
///
/// Returns exactly `SWEEP_CHURN_MAX - SWEEP_CHURN_MIN + 1` points in
/// ascending churn order. Each point is a rounded millions figure.
pub fn sweep(
    inputs: &ValuationInputs,
    metrics: &DerivedMetrics,
    dcf_value: f64,
    scaling: SweepScaling,
) -> Result<Vec<SensitivityPoint>, ValuationError> {
    // The ratio divides by the baseline lifetime value; a zero gross margin
    // zeroes it out and the ratio becomes 0/0.
    if metrics.ltv == 0.0 {
        return Err(ValuationError::NonPositiveInput {
            field: "gross_margin",
            value: inputs.gross_margin,
        });
    }

    let multiplier = tech_risk_multiplier(inputs.tech_score);
    let scale = match scaling {
        SweepScaling::Haircut => CASH_FLOW_RATIO,
        SweepScaling::Plain => 1.0,
    };

    let grid: Vec<u32> = (SWEEP_CHURN_MIN..=SWEEP_CHURN_MAX).collect();
    let points = grid
        .par_iter()
        .map(|&churn| {
            let sens_ltv = lifetime_value(inputs.mrr, inputs.gross_margin, churn as f64);
            let adjusted = dcf_value * (sens_ltv / metrics.ltv) * scale;
            SensitivityPoint {
                churn_rate: churn,
                valuation_millions: (adjusted * multiplier / 1_000_000.0).round(),
            }
        })
        .collect();

    Ok(points)
}

//! Shared valuation pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> metrics -> DCF -> methods -> sweep -> rules -> narrative
//!
//! The pipeline is the engine boundary: a pure function from one input
//! snapshot to the full set of outputs. Nothing is cached between calls;
//! callers re-invoke it wholesale whenever any input changes and replace
//! prior results atomically.

use serde::{Deserialize, Serialize};

use crate::domain::{
    DerivedMetrics, Insight, Narrative, RiskFlag, SensitivityPoint, SweepScaling, ValuationInputs,
    ValuationResult,
};
use crate::error::ValuationError;

/// All computed outputs of a single valuation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRun {
    pub metrics: DerivedMetrics,
    pub result: ValuationResult,
    pub sensitivity: Vec<SensitivityPoint>,
    pub risk_flags: Vec<RiskFlag>,
    pub insights: Vec<Insight>,
    pub narrative: Narrative,
}

/// Execute the full valuation pipeline and return the computed outputs.
pub fn run_valuation(
    inputs: &ValuationInputs,
    scaling: SweepScaling,
) -> Result<ValuationRun, ValuationError> {
    // 1) Reject invalid snapshots before any arithmetic.
    crate::engine::validate(inputs)?;

    // 2) Annual figures and lifetime value.
    let metrics = crate::engine::derive_metrics(inputs)?;

    // 3) Five-year DCF with terminal value.
    let dcf = crate::engine::project(inputs, metrics.arr)?;

    // 4) Three valuation methods under one risk multiplier.
    let result = crate::engine::value_methods(inputs, &metrics, &dcf);

    // 5) Churn sweep against the baseline DCF total.
    let sensitivity = crate::engine::sweep(inputs, &metrics, dcf.dcf_value, scaling)?;

    // 6) Rule tables and narrative.
    let risk_flags = crate::insight::evaluate_risk_flags(inputs, metrics.ltv);
    let insights = crate::insight::generate_insights(inputs, metrics.ltv);
    let narrative = crate::insight::build_narrative(inputs, &result);

    Ok(ValuationRun {
        metrics,
        result,
        sensitivity,
        risk_flags,
        insights,
        narrative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InsightKind;

    fn base_inputs() -> ValuationInputs {
        ValuationInputs {
            mrr: 416_667.0,
            growth_rate: 25.0,
            churn_rate: 5.0,
            gross_margin: 80.0,
            cac: 1_200.0,
            rd_expenses: 2_000_000.0,
            discount_rate: 12.0,
            terminal_growth: 3.0,
            market_multiple: 8.0,
            tech_score: 75.0,
        }
    }

    #[test]
    fn reference_scenario_end_to_end() {
        let run = run_valuation(&base_inputs(), SweepScaling::Haircut).unwrap();

        assert!((run.metrics.arr - 5_000_004.0).abs() < 1e-6);
        assert!((run.metrics.ltv - 80_000_064.0).abs() < 1.0);
        assert_eq!(run.result.market, 30_000_024.0);
        assert_eq!(run.result.cost, 2_250_000.0);

        // Income: five explicit years plus the terminal term, risk-adjusted.
        // Coarse bounds pin the magnitude without re-deriving every digit.
        assert!(
            run.result.income > 50_000_000.0 && run.result.income < 62_000_000.0,
            "income={}",
            run.result.income
        );

        assert_eq!(run.result.projections.len(), 5);
        assert_eq!(run.sensitivity.len(), 9);
        assert!(run.risk_flags.is_empty());
        assert_eq!(run.insights.len(), 1);
        assert_eq!(run.insights[0].kind, InsightKind::Success);
        assert!(!run.narrative.summary.is_empty());
        assert!(!run.narrative.recommendation.is_empty());
    }

    #[test]
    fn identical_inputs_produce_identical_runs() {
        let a = run_valuation(&base_inputs(), SweepScaling::Haircut).unwrap();
        let b = run_valuation(&base_inputs(), SweepScaling::Haircut).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn income_follows_terminal_growth() {
        let mut inputs = base_inputs();
        inputs.terminal_growth = 2.0;
        let low = run_valuation(&inputs, SweepScaling::Haircut).unwrap();
        inputs.terminal_growth = 4.0;
        let high = run_valuation(&inputs, SweepScaling::Haircut).unwrap();
        assert!(high.result.income > low.result.income);
    }

    #[test]
    fn invalid_snapshot_is_rejected_before_any_output() {
        let mut inputs = base_inputs();
        inputs.churn_rate = 0.0;
        assert!(matches!(
            run_valuation(&inputs, SweepScaling::Haircut).unwrap_err(),
            ValuationError::ZeroChurnRate { .. }
        ));
    }

    #[test]
    fn sweep_scaling_only_affects_sensitivity() {
        let haircut = run_valuation(&base_inputs(), SweepScaling::Haircut).unwrap();
        let plain = run_valuation(&base_inputs(), SweepScaling::Plain).unwrap();

        assert_eq!(haircut.result, plain.result);
        assert_eq!(haircut.risk_flags, plain.risk_flags);
        assert_eq!(haircut.insights, plain.insights);
        assert_ne!(haircut.sensitivity, plain.sensitivity);
    }
}

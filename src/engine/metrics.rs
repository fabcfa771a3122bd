//! Annualized metric derivation.
//!
//! The lifetime value formula is:
//!
//! `ltv = (mrr * gross_margin / 100) / (churn_rate / 100 / 12)`
//!
//! i.e. monthly gross profit per customer divided by the monthly churn
//! fraction, which is the expected cumulative gross profit before churn.

use crate::domain::{DerivedMetrics, ValuationInputs};
use crate::error::ValuationError;

/// Months per year used to annualize monthly figures.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Annual recurring revenue from monthly recurring revenue.
pub fn annual_run_rate(mrr: f64) -> f64 {
    mrr * MONTHS_PER_YEAR
}

/// Customer lifetime value at the given churn rate.
///
/// Shared with the sensitivity sweep, which re-evaluates it at swept churn
/// rates while everything else stays fixed.
pub fn lifetime_value(mrr: f64, gross_margin: f64, churn_rate: f64) -> f64 {
    let monthly_gross_profit = mrr * gross_margin / 100.0;
    let monthly_churn_fraction = churn_rate / 100.0 / MONTHS_PER_YEAR;
    monthly_gross_profit / monthly_churn_fraction
}

/// Derive annual figures and lifetime value from an input snapshot.
///
/// Guards its own divisions even though the pipeline validates first, so the
/// function stays safe when called directly.
pub fn derive_metrics(inputs: &ValuationInputs) -> Result<DerivedMetrics, ValuationError> {
    if inputs.mrr <= 0.0 {
        return Err(ValuationError::ZeroMonthlyRevenue { value: inputs.mrr });
    }
    if inputs.churn_rate <= 0.0 {
        return Err(ValuationError::ZeroChurnRate {
            value: inputs.churn_rate,
        });
    }

    let arr = annual_run_rate(inputs.mrr);
    let ltv = lifetime_value(inputs.mrr, inputs.gross_margin, inputs.churn_rate);
    // Simplified from the long-hand `arr / (mrr*12 / (arr/mrr))`, which
    // collapses algebraically to `arr / mrr`. A test checks numeric agreement
    // between the two forms.
    let customer_count = (arr / inputs.mrr).round();

    Ok(DerivedMetrics {
        arr,
        ltv,
        customer_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn reference_scenario_metrics() {
        let m = derive_metrics(&base_inputs()).unwrap();
        assert!((m.arr - 5_000_004.0).abs() < 1e-6);
        // (416667 * 0.8) / (0.05 / 12) = 80,000,064
        assert!((m.ltv - 80_000_064.0).abs() < 1.0, "ltv={}", m.ltv);
        assert!((m.customer_count - 12.0).abs() < 1e-12);
    }

    #[test]
    fn ltv_formula_is_exact() {
        let inputs = base_inputs();
        let m = derive_metrics(&inputs).unwrap();
        let expected =
            (inputs.mrr * inputs.gross_margin / 100.0) / (inputs.churn_rate / 100.0 / 12.0);
        assert_eq!(m.ltv, expected);
    }

    #[test]
    fn customer_count_matches_redundant_form() {
        // The simplified count must agree with the long-hand expression it
        // replaced, within floating-point tolerance.
        for mrr in [1.0, 999.5, 416_667.0, 12_345_678.9] {
            let mut inputs = base_inputs();
            inputs.mrr = mrr;
            let m = derive_metrics(&inputs).unwrap();
            let arr = mrr * 12.0;
            let redundant = (arr / (mrr * 12.0 / (arr / mrr))).round();
            assert!(
                (m.customer_count - redundant).abs() < 1e-9,
                "mrr={mrr}: {} vs {redundant}",
                m.customer_count
            );
        }
    }

    #[test]
    fn zero_churn_is_rejected() {
        let mut inputs = base_inputs();
        inputs.churn_rate = 0.0;
        assert!(matches!(
            derive_metrics(&inputs).unwrap_err(),
            ValuationError::ZeroChurnRate { .. }
        ));
    }

    #[test]
    fn zero_mrr_is_rejected() {
        let mut inputs = base_inputs();
        inputs.mrr = 0.0;
        assert!(matches!(
            derive_metrics(&inputs).unwrap_err(),
            ValuationError::ZeroMonthlyRevenue { .. }
        ));
    }

    #[test]
    fn lower_churn_raises_ltv() {
        let mut inputs = base_inputs();
        let high_churn = derive_metrics(&inputs).unwrap().ltv;
        inputs.churn_rate = 2.0;
        let low_churn = derive_metrics(&inputs).unwrap().ltv;
        assert!(low_churn > high_churn);
    }
}

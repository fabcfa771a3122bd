//! Insight commentary and the narrative summary/recommendation pair.
//!
//! This is a second rule table over the same snapshot, separate from the
//! risk flags. Confidence percentages are fixed per rule; messages
//! interpolate current values. All strings are template-filled, never
//! learned.

use crate::domain::{
    Insight, InsightColor, InsightKind, Narrative, ValuationInputs, ValuationResult,
};

/// Market-median monthly churn used as the comparison baseline.
const CHURN_REFERENCE_MEDIAN: f64 = 5.2;
/// Churn percentage above which the alert fires.
const CHURN_ALERT_LIMIT: f64 = 6.0;
/// CAC share of lifetime value above which the warning fires. Same
/// inequality as the risk table, framed separately on purpose.
const CAC_LTV_RATIO_LIMIT: f64 = 0.3;
/// Growth percentage above which the hypergrowth insight fires.
const HYPERGROWTH_LIMIT: f64 = 35.0;
/// Healthy growth band for the all-clear item.
const HEALTHY_GROWTH_MIN: f64 = 15.0;
const HEALTHY_GROWTH_MAX: f64 = 35.0;

/// Evaluate the commentary rules against the snapshot and its lifetime value.
pub fn generate_insights(inputs: &ValuationInputs, ltv: f64) -> Vec<Insight> {
    let mut out = Vec::new();

    if inputs.churn_rate > CHURN_ALERT_LIMIT {
        out.push(Insight {
            kind: InsightKind::Alert,
            title: "Churn Above Market Median".to_string(),
            message: format!(
                "Monthly churn of {:.1}% sits above the {CHURN_REFERENCE_MEDIAN}% median for comparable subscription businesses; retention is eroding lifetime value.",
                inputs.churn_rate
            ),
            confidence: 89,
            color: InsightColor::Red,
        });
    }

    if inputs.cac > ltv * CAC_LTV_RATIO_LIMIT {
        out.push(Insight {
            kind: InsightKind::Warning,
            title: "Acquisition Spend Out of Balance".to_string(),
            message: format!(
                "CAC of ${:.0} exceeds 30% of the ${:.0} customer lifetime value; payback looks slow at current margins.",
                inputs.cac, ltv
            ),
            confidence: 94,
            color: InsightColor::Amber,
        });
    }

    if inputs.growth_rate > HYPERGROWTH_LIMIT {
        out.push(Insight {
            kind: InsightKind::Insight,
            title: "Exceptional Growth Trajectory".to_string(),
            message: format!(
                "Annual growth of {:.1}% is well above typical market expansion rates and supports a premium multiple.",
                inputs.growth_rate
            ),
            confidence: 87,
            color: InsightColor::Blue,
        });
    }

    if out.is_empty()
        && (HEALTHY_GROWTH_MIN..=HEALTHY_GROWTH_MAX).contains(&inputs.growth_rate)
    {
        out.push(Insight {
            kind: InsightKind::Success,
            title: "Metrics Within Healthy Ranges".to_string(),
            message: format!(
                "Churn ({:.1}%), acquisition spend and growth ({:.1}%) all sit inside typical ranges for a fundable subscription business.",
                inputs.churn_rate, inputs.growth_rate
            ),
            confidence: 95,
            color: InsightColor::Green,
        });
    }

    out
}

/// Relative difference below which income and market approaches are treated
/// as agreeing.
const ALIGNMENT_LIMIT: f64 = 0.2;
/// Growth bucket boundaries for the narrative.
const STRONG_GROWTH: f64 = 25.0;
const MODERATE_GROWTH: f64 = 15.0;
/// Technology score above which the platform gets positive framing.
const TECH_SCORE_STRENGTH: f64 = 75.0;
/// Churn above which the recommendation shifts to retention.
const RETENTION_FOCUS_CHURN: f64 = 5.0;

/// Build the narrative summary and recommendation from the computed result.
pub fn build_narrative(inputs: &ValuationInputs, result: &ValuationResult) -> Narrative {
    let growth_phrase = if inputs.growth_rate > STRONG_GROWTH {
        "strong"
    } else if inputs.growth_rate > MODERATE_GROWTH {
        "moderate"
    } else {
        "below-average"
    };

    let larger = result.income.max(result.market);
    let aligned = if larger > 0.0 {
        (result.income - result.market).abs() / larger < ALIGNMENT_LIMIT
    } else {
        true
    };
    let alignment_phrase = if aligned {
        "are well-aligned, which supports confidence in the range"
    } else {
        "diverge, so the final figure depends heavily on method weighting"
    };

    let tech_phrase = if inputs.tech_score > TECH_SCORE_STRENGTH {
        "The technology platform scores highly and supports premium positioning."
    } else {
        "The technology platform would benefit from further investment before it supports a premium multiple."
    };

    let summary = format!(
        "The business shows {growth_phrase} growth at {:.1}% annually. The income (${:.1}M) and market (${:.1}M) approaches {alignment_phrase}. {tech_phrase}",
        inputs.growth_rate,
        result.income / 1_000_000.0,
        result.market / 1_000_000.0,
    );

    let recommendation = if inputs.churn_rate > RETENTION_FOCUS_CHURN {
        format!(
            "Prioritize retention: reducing churn from {:.1}% would lift lifetime value and every valuation method with it.",
            inputs.churn_rate
        )
    } else {
        format!(
            "Retention is healthy at {:.1}% churn; focus spend on expansion while the growth engine compounds.",
            inputs.churn_rate
        )
    };

    Narrative {
        summary,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{derive_metrics, project, value_methods};

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

    fn ltv_for(inputs: &ValuationInputs) -> f64 {
        derive_metrics(inputs).unwrap().ltv
    }

    #[test]
    fn reference_scenario_yields_single_success() {
        let inputs = base_inputs();
        let insights = generate_insights(&inputs, ltv_for(&inputs));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Success);
        assert_eq!(insights[0].confidence, 95);
    }

    #[test]
    fn churn_alert_fires_below_the_risk_threshold() {
        // 6.5% churn triggers the commentary alert but not the risk flag,
        // which only fires above 7%.
        let mut inputs = base_inputs();
        inputs.churn_rate = 6.5;
        let ltv = ltv_for(&inputs);

        let insights = generate_insights(&inputs, ltv);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Alert);
        assert_eq!(insights[0].confidence, 89);
        assert!(insights[0].message.contains("6.5%"));
        assert!(insights[0].message.contains("5.2%"));

        assert!(crate::insight::evaluate_risk_flags(&inputs, ltv).is_empty());
    }

    #[test]
    fn cac_warning_mirrors_the_risk_rule_threshold() {
        let mut inputs = base_inputs();
        let ltv = ltv_for(&inputs);
        inputs.cac = ltv * 0.3 + 1.0;

        let insights = generate_insights(&inputs, ltv);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[0].confidence, 94);

        // The same inequality fires the risk table independently.
        let flags = crate::insight::evaluate_risk_flags(&inputs, ltv);
        assert_eq!(flags.len(), 1);
    }

    #[test]
    fn hypergrowth_suppresses_the_success_item() {
        let mut inputs = base_inputs();
        inputs.growth_rate = 40.0;
        let insights = generate_insights(&inputs, ltv_for(&inputs));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Insight);
        assert_eq!(insights[0].confidence, 87);
    }

    #[test]
    fn sluggish_growth_yields_no_items() {
        // Growth below the healthy band with no other rule firing: the list
        // is empty rather than padded with an all-clear.
        let mut inputs = base_inputs();
        inputs.growth_rate = 10.0;
        assert!(generate_insights(&inputs, ltv_for(&inputs)).is_empty());
    }

    fn result_for(inputs: &ValuationInputs) -> ValuationResult {
        let metrics = derive_metrics(inputs).unwrap();
        let dcf = project(inputs, metrics.arr).unwrap();
        value_methods(inputs, &metrics, &dcf)
    }

    #[test]
    fn narrative_buckets_growth() {
        let mut inputs = base_inputs();
        inputs.growth_rate = 30.0;
        let n = build_narrative(&inputs, &result_for(&inputs));
        assert!(n.summary.contains("strong"));

        inputs.growth_rate = 20.0;
        let n = build_narrative(&inputs, &result_for(&inputs));
        assert!(n.summary.contains("moderate"));

        inputs.growth_rate = 10.0;
        let n = build_narrative(&inputs, &result_for(&inputs));
        assert!(n.summary.contains("below-average"));
    }

    #[test]
    fn narrative_reports_method_divergence() {
        // Reference scenario: income lands near twice the market figure.
        let inputs = base_inputs();
        let n = build_narrative(&inputs, &result_for(&inputs));
        assert!(n.summary.contains("diverge"));
    }

    #[test]
    fn recommendation_switches_on_churn() {
        let mut inputs = base_inputs();
        inputs.churn_rate = 6.0;
        let n = build_narrative(&inputs, &result_for(&inputs));
        assert!(n.recommendation.contains("retention") || n.recommendation.contains("Prioritize"));

        inputs.churn_rate = 4.0;
        let n = build_narrative(&inputs, &result_for(&inputs));
        assert!(n.recommendation.contains("expansion"));
    }
}

//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the numeric/rules code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::ValuationRun;
use crate::domain::{
    Insight, Narrative, RiskFlag, SensitivityPoint, SweepScaling, ValuationInputs, YearProjection,
};

/// Format the run header: inputs, derived metrics and the three methods.
pub fn format_run_summary(
    run: &ValuationRun,
    inputs: &ValuationInputs,
    scaling: SweepScaling,
) -> String {
    let mut out = String::new();

    out.push_str("=== sv - SaaS Asset Valuation ===\n");
    out.push_str(&format!(
        "Inputs: mrr=${} | growth={:.1}% | churn={:.1}% | margin={:.1}%\n",
        fmt_thousands(inputs.mrr),
        inputs.growth_rate,
        inputs.churn_rate,
        inputs.gross_margin,
    ));
    out.push_str(&format!(
        "        discount={:.1}% | terminal={:.1}% | multiple={:.1}x | tech={:.0}/100\n",
        inputs.discount_rate, inputs.terminal_growth, inputs.market_multiple, inputs.tech_score,
    ));
    out.push_str(&format!(
        "ARR: {} | LTV: ${} | Customers: {:.0}\n",
        fmt_millions(run.metrics.arr),
        fmt_thousands(run.result.ltv),
        run.result.customer_count,
    ));

    out.push_str("\nValuation methods:\n");
    out.push_str(&format!(
        "  {:<16} {}\n",
        "Income (DCF)",
        fmt_millions(run.result.income)
    ));
    out.push_str(&format!(
        "  {:<16} {}\n",
        "Market multiple",
        fmt_millions(run.result.market)
    ));
    out.push_str(&format!(
        "  {:<16} {}\n",
        "Cost approach",
        fmt_millions(run.result.cost)
    ));
    out.push_str(&format!(
        "  {:<16} {} (mean of the three methods)\n",
        "Blended",
        fmt_millions(run.result.average)
    ));
    out.push_str(&format!("Sweep scaling: {}\n", scaling.display_name()));

    out
}

/// Format the five-year projection table.
pub fn format_projections(projections: &[YearProjection]) -> String {
    let mut out = String::new();

    out.push_str("Five-year projection:\n");
    out.push_str(&format!(
        "{:<6} {:>14} {:>14} {:>14} {:>14}\n",
        "year", "revenue", "gross profit", "cash flow", "pv"
    ));
    out.push_str(&format!(
        "{:-<6} {:-<14} {:-<14} {:-<14} {:-<14}\n",
        "", "", "", "", ""
    ));
    for p in projections {
        out.push_str(&format!(
            "{:<6} {:>14} {:>14} {:>14} {:>14}\n",
            p.year,
            fmt_millions(p.revenue),
            fmt_millions(p.gross_profit),
            fmt_millions(p.cash_flow),
            fmt_millions(p.present_value),
        ));
    }

    out
}

/// Format the churn sweep table.
pub fn format_sensitivity(points: &[SensitivityPoint], scaling: SweepScaling) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Churn sensitivity ({} scaling):\n",
        scaling.display_name()
    ));
    out.push_str(&format!("{:<10} {:>14}\n", "churn", "valuation"));
    out.push_str(&format!("{:-<10} {:-<14}\n", "", ""));
    for p in points {
        out.push_str(&format!(
            "{:<10} {:>13}M\n",
            format!("{}%", p.churn_rate),
            format!("${}", p.valuation_millions),
        ));
    }

    out
}

/// Format the risk flag block, with an explicit all-clear line when empty.
pub fn format_risk_flags(flags: &[RiskFlag]) -> String {
    let mut out = String::new();

    out.push_str("Risk assessment:\n");
    if flags.is_empty() {
        out.push_str("  No significant risk flags identified\n");
        return out;
    }
    for flag in flags {
        out.push_str(&format!(
            "  [{:<6}] {}\n",
            flag.severity.display_name(),
            flag.kind.display_name(),
        ));
    }

    out
}

/// Format the commentary block plus the narrative footer.
pub fn format_insights(insights: &[Insight], narrative: &Narrative) -> String {
    let mut out = String::new();

    out.push_str("Commentary:\n");
    for i in insights {
        out.push_str(&format!(
            "  {:<7} ({:>2}%) {}: {}\n",
            i.kind.display_name(),
            i.confidence,
            i.title,
            i.message,
        ));
    }
    out.push('\n');
    out.push_str(&format!("Summary: {}\n", narrative.summary));
    out.push_str(&format!("Recommendation: {}\n", narrative.recommendation));

    out
}

/// Render a currency figure as `$X.XM`.
fn fmt_millions(v: f64) -> String {
    format!("${:.1}M", v / 1_000_000.0)
}

/// Render a non-negative currency figure with thousands separators.
fn fmt_thousands(v: f64) -> String {
    let n = v.round() as u64;
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

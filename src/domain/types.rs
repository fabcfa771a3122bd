//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during a valuation run
//! - exported to JSON/CSV
//! - reloaded later for comparisons across scenarios

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One input snapshot for a valuation run.
///
/// Rates are percentages stored as plain numbers (`25` means 25%). Currency
/// fields are plain currency units. The snapshot is immutable for the
/// duration of one computation; callers re-invoke the pipeline with a fresh
/// snapshot when anything changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Monthly recurring revenue, > 0.
    pub mrr: f64,
    /// Annual revenue growth rate (percent).
    pub growth_rate: f64,
    /// Monthly customer churn rate (percent), > 0.
    pub churn_rate: f64,
    /// Gross margin (percent).
    pub gross_margin: f64,
    /// Customer acquisition cost, >= 0.
    pub cac: f64,
    /// Cumulative R&D investment, >= 0.
    pub rd_expenses: f64,
    /// Discount rate for the DCF (percent). As a fraction it must exceed
    /// `terminal_growth`, else the terminal value is undefined.
    pub discount_rate: f64,
    /// Terminal growth rate (percent).
    pub terminal_growth: f64,
    /// Revenue multiple for the market approach, > 0.
    pub market_multiple: f64,
    /// Technology quality score in [0, 100]. Scaled to the [0, 1] risk
    /// multiplier applied uniformly to every valuation method.
    pub tech_score: f64,
}

/// Annualized figures derived from the input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Annual recurring revenue (`mrr * 12`).
    pub arr: f64,
    /// Customer lifetime value: expected cumulative gross profit per customer
    /// before churn. Unrounded; the result record carries the rounded figure.
    pub ltv: f64,
    /// Derived customer count (`round(arr / mrr)`).
    pub customer_count: f64,
}

/// One row of the five-year free-cash-flow projection.
///
/// Values are unrounded; rounding happens at the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// Year index, 1..=5.
    pub year: u32,
    pub revenue: f64,
    pub gross_profit: f64,
    /// Free cash flow (70% of gross profit, fixed policy constant).
    pub cash_flow: f64,
    /// `(1 + discount fraction)^year`.
    pub discount_factor: f64,
    pub present_value: f64,
}

/// The three valuation methods plus derived headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Income approach: risk-adjusted DCF total (rounded).
    pub income: f64,
    /// Market approach: ARR times the revenue multiple, risk-adjusted (rounded).
    pub market: f64,
    /// Cost approach: R&D spend at replacement-cost markup, risk-adjusted (rounded).
    pub cost: f64,
    /// Blended enterprise value: mean of the three methods (rounded).
    pub average: f64,
    /// Customer lifetime value (rounded).
    pub ltv: f64,
    pub customer_count: f64,
    /// Exactly five rows, years ascending. Terminal value is folded into
    /// `income`, never shown as a sixth row.
    pub projections: Vec<YearProjection>,
}

/// One point of the churn sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Swept monthly churn rate (integer percent, 2..=10).
    pub churn_rate: u32,
    /// Resulting income valuation in rounded millions.
    pub valuation_millions: f64,
}

/// How the churn sweep scales the baseline DCF value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SweepScaling {
    /// Apply the 70% cash-flow conversion a second time on top of the
    /// per-year conversion already embedded in the DCF total. Deliberately
    /// conservative; the default.
    Haircut,
    /// Scale by the lifetime-value ratio alone.
    Plain,
}

impl SweepScaling {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SweepScaling::Haircut => "haircut",
            SweepScaling::Plain => "plain",
        }
    }
}

/// Severity attached to a risk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn display_name(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

/// The fixed set of rule-based risk conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlagKind {
    HighChurn,
    CacLtvImbalance,
    TechnologyRisk,
    LowGrowth,
}

impl RiskFlagKind {
    pub fn display_name(self) -> &'static str {
        match self {
            RiskFlagKind::HighChurn => "High Churn Risk",
            RiskFlagKind::CacLtvImbalance => "CAC/LTV Imbalance",
            RiskFlagKind::TechnologyRisk => "Technology Risk",
            RiskFlagKind::LowGrowth => "Low Growth Rate",
        }
    }
}

/// A triggered risk condition. The set is unordered and may be empty; an
/// empty set on a completed run means "no risk identified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub kind: RiskFlagKind,
    pub severity: Severity,
}

/// Category of a commentary insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Alert,
    Warning,
    Insight,
    Success,
}

impl InsightKind {
    pub fn display_name(self) -> &'static str {
        match self {
            InsightKind::Alert => "ALERT",
            InsightKind::Warning => "WARNING",
            InsightKind::Insight => "INSIGHT",
            InsightKind::Success => "SUCCESS",
        }
    }
}

/// Display color tag for an insight. Presentation hint only; no logic
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightColor {
    Red,
    Amber,
    Blue,
    Green,
}

/// One rendered commentary item with a fixed confidence annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    /// Message with current values interpolated.
    pub message: String,
    /// Fixed per-rule confidence (percent).
    pub confidence: u8,
    pub color: InsightColor,
}

/// Template-filled narrative strings for the report footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub summary: String,
    pub recommendation: String,
}

/// A saved valuation report (JSON).
///
/// This is the portable representation of one run: the echoed input snapshot
/// plus everything the pipeline computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationFile {
    pub tool: String,
    pub asof_date: NaiveDate,
    pub sweep_scaling: SweepScaling,
    pub inputs: ValuationInputs,
    pub metrics: DerivedMetrics,
    pub result: ValuationResult,
    pub sensitivity: Vec<SensitivityPoint>,
    pub risk_flags: Vec<RiskFlag>,
    pub insights: Vec<Insight>,
    pub narrative: Narrative,
}

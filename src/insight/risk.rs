//! Rule-based risk flags.
//!
//! Pure predicate evaluation against fixed thresholds. Rules are
//! order-independent and multiple flags may co-occur; an empty set means no
//! rule fired.

use crate::domain::{RiskFlag, RiskFlagKind, Severity, ValuationInputs};

/// Monthly churn percentage above which churn is flagged.
const CHURN_LIMIT: f64 = 7.0;
/// CAC is flagged once it exceeds this share of lifetime value.
const CAC_LTV_RATIO_LIMIT: f64 = 0.3;
/// Technology score below which the platform is flagged.
const TECH_SCORE_FLOOR: f64 = 60.0;
/// Annual growth percentage below which growth is flagged.
const GROWTH_FLOOR: f64 = 15.0;

/// Evaluate every risk rule against the snapshot and its lifetime value.
pub fn evaluate_risk_flags(inputs: &ValuationInputs, ltv: f64) -> Vec<RiskFlag> {
    let mut flags = Vec::new();

    if inputs.churn_rate > CHURN_LIMIT {
        flags.push(RiskFlag {
            kind: RiskFlagKind::HighChurn,
            severity: Severity::High,
        });
    }
    if inputs.cac > ltv * CAC_LTV_RATIO_LIMIT {
        flags.push(RiskFlag {
            kind: RiskFlagKind::CacLtvImbalance,
            severity: Severity::Medium,
        });
    }
    if inputs.tech_score < TECH_SCORE_FLOOR {
        flags.push(RiskFlag {
            kind: RiskFlagKind::TechnologyRisk,
            severity: Severity::High,
        });
    }
    if inputs.growth_rate < GROWTH_FLOOR {
        flags.push(RiskFlag {
            kind: RiskFlagKind::LowGrowth,
            severity: Severity::Medium,
        });
    }

    flags
}

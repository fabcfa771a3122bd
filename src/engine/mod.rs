//! The valuation engine: a pure numeric core.
//!
//! Responsibilities:
//!
//! - validate an input snapshot up front (no NaN/Infinity propagation)
//! - derive annual figures and customer lifetime value
//! - project five years of discounted cash flow plus a terminal value
//! - combine income/market/cost methods under one technology-risk multiplier
//! - sweep churn for sensitivity
//!
//! Every function here is deterministic and side-effect-free: identical
//! inputs produce identical outputs.

use crate::domain::ValuationInputs;
use crate::error::ValuationError;

pub mod dcf;
pub mod metrics;
pub mod sensitivity;
pub mod valuator;

pub use dcf::*;
pub use metrics::*;
pub use sensitivity::*;
pub use valuator::*;

/// Validate an input snapshot before any arithmetic runs.
///
/// Each rejected condition would otherwise make a downstream division
/// mathematically undefined or silently produce nonsense, so validation is a
/// hard gate rather than a clamp.
pub fn validate(inputs: &ValuationInputs) -> Result<(), ValuationError> {
    let fields = [
        ("mrr", inputs.mrr),
        ("growth_rate", inputs.growth_rate),
        ("churn_rate", inputs.churn_rate),
        ("gross_margin", inputs.gross_margin),
        ("cac", inputs.cac),
        ("rd_expenses", inputs.rd_expenses),
        ("discount_rate", inputs.discount_rate),
        ("terminal_growth", inputs.terminal_growth),
        ("market_multiple", inputs.market_multiple),
        ("tech_score", inputs.tech_score),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(ValuationError::NonFiniteInput { field });
        }
    }

    if inputs.mrr <= 0.0 {
        return Err(ValuationError::ZeroMonthlyRevenue { value: inputs.mrr });
    }
    if inputs.churn_rate <= 0.0 {
        return Err(ValuationError::ZeroChurnRate {
            value: inputs.churn_rate,
        });
    }
    if inputs.discount_rate / 100.0 <= inputs.terminal_growth / 100.0 {
        return Err(ValuationError::InvalidDiscountSpread {
            discount_rate: inputs.discount_rate,
            terminal_growth: inputs.terminal_growth,
        });
    }
    if !(0.0..=100.0).contains(&inputs.tech_score) {
        return Err(ValuationError::TechScoreOutOfRange {
            value: inputs.tech_score,
        });
    }
    if inputs.cac < 0.0 {
        return Err(ValuationError::NegativeInput {
            field: "cac",
            value: inputs.cac,
        });
    }
    if inputs.rd_expenses < 0.0 {
        return Err(ValuationError::NegativeInput {
            field: "rd_expenses",
            value: inputs.rd_expenses,
        });
    }
    if inputs.market_multiple <= 0.0 {
        return Err(ValuationError::NonPositiveInput {
            field: "market_multiple",
            value: inputs.market_multiple,
        });
    }

    Ok(())
}

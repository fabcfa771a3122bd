//! Five-year discounted-cash-flow projection with a terminal value.
//!
//! Revenue compounds sequentially across the loop: each year's revenue is the
//! prior year's revenue grown by the growth rate. The loop variable carries
//! forward, so compounding is cumulative rather than recomputed from the base
//! each iteration.

use crate::domain::{ValuationInputs, YearProjection};
use crate::error::ValuationError;

/// Fixed free-cash-flow conversion applied to gross profit (EBITDA proxy).
pub const CASH_FLOW_RATIO: f64 = 0.70;

/// Number of explicit projection years. Cash flows beyond the horizon are
/// captured by the terminal value, not extra rows.
pub const PROJECTION_YEARS: u32 = 5;

/// Output of the projector: the explicit rows plus the discounted totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DcfOutcome {
    /// Exactly [`PROJECTION_YEARS`] rows, years ascending.
    pub projections: Vec<YearProjection>,
    /// Sum of the five explicit present values.
    pub explicit_pv: f64,
    /// Growing-perpetuity value of cash flows beyond the horizon.
    pub terminal_value: f64,
    /// Terminal value discounted back to present.
    pub terminal_pv: f64,
    /// `explicit_pv + terminal_pv`. This is the figure the income method
    /// scales; the terminal component is already included.
    pub dcf_value: f64,
}

/// Project five years of free cash flow from the annual run rate and
/// discount them, including the terminal term.
pub fn project(inputs: &ValuationInputs, arr: f64) -> Result<DcfOutcome, ValuationError> {
    let discount = inputs.discount_rate / 100.0;
    let terminal = inputs.terminal_growth / 100.0;
    if discount <= terminal {
        return Err(ValuationError::InvalidDiscountSpread {
            discount_rate: inputs.discount_rate,
            terminal_growth: inputs.terminal_growth,
        });
    }

    let growth = inputs.growth_rate / 100.0;
    let margin = inputs.gross_margin / 100.0;

    let mut revenue = arr;
    let mut explicit_pv = 0.0;
    let mut projections = Vec::with_capacity(PROJECTION_YEARS as usize);

    for year in 1..=PROJECTION_YEARS {
        revenue *= 1.0 + growth;
        let gross_profit = revenue * margin;
        let cash_flow = gross_profit * CASH_FLOW_RATIO;
        let discount_factor = (1.0 + discount).powi(year as i32);
        let present_value = cash_flow / discount_factor;
        explicit_pv += present_value;

        projections.push(YearProjection {
            year,
            revenue,
            gross_profit,
            cash_flow,
            discount_factor,
            present_value,
        });
    }

    // Growing perpetuity on the final explicit year's cash flow. The spread
    // check above keeps the denominator positive.
    let final_cash_flow = projections[projections.len() - 1].cash_flow;
    let terminal_value = final_cash_flow * (1.0 + terminal) / (discount - terminal);
    let terminal_pv = terminal_value / (1.0 + discount).powi(PROJECTION_YEARS as i32);
    let dcf_value = explicit_pv + terminal_pv;

    Ok(DcfOutcome {
        projections,
        explicit_pv,
        terminal_value,
        terminal_pv,
        dcf_value,
    })
}

//! Export run results to CSV and JSON.
//!
//! The CSV exports are meant to be easy to consume in spreadsheets or
//! downstream scripts; the JSON report is the portable representation of a
//! whole run (schema defined by `domain::ValuationFile`).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::app::pipeline::ValuationRun;
use crate::domain::{SensitivityPoint, SweepScaling, ValuationFile, ValuationInputs, YearProjection};
use crate::error::ValuationError;

/// Write the five-year projection table to a CSV file.
pub fn write_projections_csv(path: &Path, projections: &[YearProjection]) -> Result<(), ValuationError> {
    let mut file = File::create(path).map_err(|e| ValuationError::Io {
        context: format!("Failed to create export CSV '{}': {e}", path.display()),
    })?;

    writeln!(
        file,
        "year,revenue,gross_profit,cash_flow,discount_factor,present_value"
    )
    .map_err(|e| ValuationError::Io {
        context: format!("Failed to write export CSV header: {e}"),
    })?;

    for p in projections {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.10},{:.2}",
            p.year, p.revenue, p.gross_profit, p.cash_flow, p.discount_factor, p.present_value,
        )
        .map_err(|e| ValuationError::Io {
            context: format!("Failed to write export CSV row: {e}"),
        })?;
    }

    Ok(())
}

/// Write the churn sweep to a CSV file.
pub fn write_sweep_csv(path: &Path, points: &[SensitivityPoint]) -> Result<(), ValuationError> {
    let mut file = File::create(path).map_err(|e| ValuationError::Io {
        context: format!("Failed to create sweep CSV '{}': {e}", path.display()),
    })?;

    writeln!(file, "churn_rate,valuation_millions").map_err(|e| ValuationError::Io {
        context: format!("Failed to write sweep CSV header: {e}"),
    })?;
    for p in points {
        writeln!(file, "{},{}", p.churn_rate, p.valuation_millions).map_err(|e| {
            ValuationError::Io {
                context: format!("Failed to write sweep CSV row: {e}"),
            }
        })?;
    }

    Ok(())
}

/// Write the full run as a portable JSON report.
pub fn write_report_json(
    path: &Path,
    inputs: &ValuationInputs,
    run: &ValuationRun,
    scaling: SweepScaling,
    asof_date: NaiveDate,
) -> Result<(), ValuationError> {
    let file = File::create(path).map_err(|e| ValuationError::Io {
        context: format!("Failed to create report JSON '{}': {e}", path.display()),
    })?;

    let report = ValuationFile {
        tool: "sv".to_string(),
        asof_date,
        sweep_scaling: scaling,
        inputs: *inputs,
        metrics: run.metrics,
        result: run.result.clone(),
        sensitivity: run.sensitivity.clone(),
        risk_flags: run.risk_flags.clone(),
        insights: run.insights.clone(),
        narrative: run.narrative.clone(),
    };

    serde_json::to_writer_pretty(file, &report).map_err(|e| ValuationError::Json {
        context: format!("Failed to write report JSON: {e}"),
    })?;

    Ok(())
}

/// Read a previously exported report JSON.
pub fn read_report_json(path: &Path) -> Result<ValuationFile, ValuationError> {
    let file = File::open(path).map_err(|e| ValuationError::Io {
        context: format!("Failed to open report JSON '{}': {e}", path.display()),
    })?;
    let report: ValuationFile = serde_json::from_reader(file).map_err(|e| ValuationError::Json {
        context: format!("Invalid report JSON '{}': {e}", path.display()),
    })?;
    Ok(report)
}

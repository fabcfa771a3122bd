//! Command-line parsing for the SaaS valuation engine.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the valuation/rules code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::SweepScaling;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sv", version, about = "SaaS intangible-asset valuation engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full valuation: methods, projections, sweep, risks, commentary.
    Value(ValueArgs),
    /// Print the churn sensitivity table only (useful for scripting).
    Sweep(ValueArgs),
    /// Re-render a previously exported report JSON.
    Show(ShowArgs),
}

/// Common options for valuation runs.
///
/// Defaults reproduce the reference scenario, so a bare `sv` prints the
/// canonical demo report.
#[derive(Debug, Parser, Clone)]
pub struct ValueArgs {
    /// Monthly recurring revenue (currency units).
    #[arg(long, default_value_t = 416_667.0)]
    pub mrr: f64,

    /// Annual revenue growth rate (percent).
    #[arg(long, default_value_t = 25.0)]
    pub growth: f64,

    /// Monthly customer churn rate (percent).
    #[arg(long, default_value_t = 5.0)]
    pub churn: f64,

    /// Gross margin (percent).
    #[arg(long, default_value_t = 80.0)]
    pub gross_margin: f64,

    /// Customer acquisition cost (currency units).
    #[arg(long, default_value_t = 1_200.0)]
    pub cac: f64,

    /// Cumulative R&D investment (currency units).
    #[arg(long, default_value_t = 2_000_000.0)]
    pub rd_expenses: f64,

    /// Discount rate for the DCF (percent).
    #[arg(long, default_value_t = 12.0)]
    pub discount_rate: f64,

    /// Terminal growth rate (percent).
    #[arg(long, default_value_t = 3.0)]
    pub terminal_growth: f64,

    /// Revenue multiple for the market approach.
    #[arg(long, default_value_t = 8.0)]
    pub market_multiple: f64,

    /// Technology quality score (0-100).
    #[arg(long, default_value_t = 75.0)]
    pub tech_score: f64,

    /// Read the input snapshot from a JSON file instead of the flags above.
    #[arg(long, value_name = "JSON")]
    pub inputs: Option<PathBuf>,

    /// How the churn sweep scales the baseline DCF value.
    #[arg(long, value_enum, default_value_t = SweepScaling::Haircut)]
    pub sweep_scaling: SweepScaling,

    /// As-of date stamped on exports (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub asof: Option<NaiveDate>,

    /// Export the five-year projection table to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the churn sweep to CSV.
    #[arg(long = "export-sweep", value_name = "CSV")]
    pub export_sweep: Option<PathBuf>,

    /// Export the full valuation report to JSON.
    #[arg(long = "export-report", value_name = "JSON")]
    pub export_report: Option<PathBuf>,
}

/// Options for re-rendering a saved report.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Report JSON file produced by `sv value --export-report`.
    #[arg(long, value_name = "JSON")]
    pub report: PathBuf,
}

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the input snapshot (flags or JSON file)
//! - runs the valuation pipeline
//! - prints reports
//! - writes optional exports

use chrono::Local;
use clap::Parser;

use crate::cli::{Command, ShowArgs, ValueArgs};
use crate::domain::ValuationInputs;
use crate::error::ValuationError;

pub mod pipeline;

/// Entry point for the `sv` binary.
pub fn run() -> Result<(), ValuationError> {
    // We want `sv` and `sv --churn 8` to behave like `sv value ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Value(args) => handle_value(args, OutputMode::Full),
        Command::Sweep(args) => handle_value(args, OutputMode::SweepOnly),
        Command::Show(args) => handle_show(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    SweepOnly,
}

fn handle_value(args: ValueArgs, mode: OutputMode) -> Result<(), ValuationError> {
    let inputs = resolve_inputs(&args)?;
    let run = pipeline::run_valuation(&inputs, args.sweep_scaling)?;

    match mode {
        OutputMode::Full => {
            println!(
                "{}",
                crate::report::format_run_summary(&run, &inputs, args.sweep_scaling)
            );
            println!("{}", crate::report::format_projections(&run.result.projections));
            println!(
                "{}",
                crate::report::format_sensitivity(&run.sensitivity, args.sweep_scaling)
            );
            println!("{}", crate::report::format_risk_flags(&run.risk_flags));
            println!(
                "{}",
                crate::report::format_insights(&run.insights, &run.narrative)
            );
        }
        OutputMode::SweepOnly => {
            println!(
                "{}",
                crate::report::format_sensitivity(&run.sensitivity, args.sweep_scaling)
            );
        }
    }

    // Optional exports.
    let asof = args.asof.unwrap_or_else(|| Local::now().date_naive());
    if let Some(path) = &args.export {
        crate::io::export::write_projections_csv(path, &run.result.projections)?;
    }
    if let Some(path) = &args.export_sweep {
        crate::io::export::write_sweep_csv(path, &run.sensitivity)?;
    }
    if let Some(path) = &args.export_report {
        crate::io::export::write_report_json(path, &inputs, &run, args.sweep_scaling, asof)?;
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), ValuationError> {
    let report = crate::io::export::read_report_json(&args.report)?;

    let run = pipeline::ValuationRun {
        metrics: report.metrics,
        result: report.result,
        sensitivity: report.sensitivity,
        risk_flags: report.risk_flags,
        insights: report.insights,
        narrative: report.narrative,
    };

    println!(
        "{}",
        crate::report::format_run_summary(&run, &report.inputs, report.sweep_scaling)
    );
    println!("{}", crate::report::format_projections(&run.result.projections));
    println!(
        "{}",
        crate::report::format_sensitivity(&run.sensitivity, report.sweep_scaling)
    );
    println!("{}", crate::report::format_risk_flags(&run.risk_flags));
    println!(
        "{}",
        crate::report::format_insights(&run.insights, &run.narrative)
    );

    Ok(())
}

/// Build the input snapshot from CLI flags, or load it from `--inputs`.
pub fn resolve_inputs(args: &ValueArgs) -> Result<ValuationInputs, ValuationError> {
    if let Some(path) = &args.inputs {
        return crate::io::inputs::read_inputs_json(path);
    }

    Ok(ValuationInputs {
        mrr: args.mrr,
        growth_rate: args.growth,
        churn_rate: args.churn,
        gross_margin: args.gross_margin,
        cac: args.cac,
        rd_expenses: args.rd_expenses,
        discount_rate: args.discount_rate,
        terminal_growth: args.terminal_growth,
        market_multiple: args.market_multiple,
        tech_score: args.tech_score,
    })
}

/// Rewrite argv so `sv` defaults to `sv value`.
///
/// Rules:
/// - `sv`                      -> `sv value`
/// - `sv --churn 8 ...`        -> `sv value --churn 8 ...`
/// - `sv --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("value".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "value" | "sweep" | "show");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "value flags".
    if arg1.starts_with('-') {
        argv.insert(1, "value".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_value() {
        assert_eq!(rewrite_args(argv(&["sv"])), argv(&["sv", "value"]));
    }

    #[test]
    fn leading_flag_routes_to_value() {
        assert_eq!(
            rewrite_args(argv(&["sv", "--churn", "8"])),
            argv(&["sv", "value", "--churn", "8"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["sv", "sweep", "--churn", "8"])),
            argv(&["sv", "sweep", "--churn", "8"])
        );
        assert_eq!(rewrite_args(argv(&["sv", "--help"])), argv(&["sv", "--help"]));
        assert_eq!(rewrite_args(argv(&["sv", "help"])), argv(&["sv", "help"]));
    }

    #[test]
    fn flags_map_onto_the_snapshot() {
        let cli = crate::cli::Cli::parse_from([
            "sv",
            "value",
            "--mrr",
            "100000",
            "--churn",
            "4",
            "--tech-score",
            "90",
        ]);
        let Command::Value(args) = cli.command else {
            panic!("expected value subcommand");
        };
        let inputs = resolve_inputs(&args).unwrap();
        assert_eq!(inputs.mrr, 100_000.0);
        assert_eq!(inputs.churn_rate, 4.0);
        assert_eq!(inputs.tech_score, 90.0);
        // Untouched flags keep the reference defaults.
        assert_eq!(inputs.market_multiple, 8.0);
    }
}

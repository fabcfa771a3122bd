//! Reporting utilities: formatted terminal output for a valuation run.

pub mod format;

pub use format::*;

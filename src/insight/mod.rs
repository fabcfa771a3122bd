//! Qualitative annotations over a computed run.
//!
//! Two deliberately separate rule tables:
//!
//! - `risk`: threshold checks that produce severity-tagged flags
//! - `commentary`: a second table that produces rendered narrative items
//!   with fixed confidence annotations, plus the summary/recommendation pair
//!
//! The CAC-to-LTV inequality appears in both tables with different labels
//! and severities; the dual framing is intentional and the tables are not
//! merged.

pub mod commentary;
pub mod risk;

pub use commentary::*;
pub use risk::*;

//! Input/output helpers.
//!
//! - inputs JSON reading + validation (`inputs`)
//! - result exports (CSV/JSON) (`export`)

pub mod export;
pub mod inputs;

pub use export::*;
pub use inputs::*;

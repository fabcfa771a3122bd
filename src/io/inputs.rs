//! Read an input snapshot from JSON.
//!
//! The file is a flat object with the same field names as
//! [`ValuationInputs`]; parsing does not validate business rules, the
//! pipeline does that before any arithmetic runs.

use std::fs::File;
use std::path::Path;

use crate::domain::ValuationInputs;
use crate::error::ValuationError;

/// Read a `ValuationInputs` JSON file.
pub fn read_inputs_json(path: &Path) -> Result<ValuationInputs, ValuationError> {
    let file = File::open(path).map_err(|e| ValuationError::Io {
        context: format!("Failed to open inputs JSON '{}': {e}", path.display()),
    })?;
    let inputs: ValuationInputs = serde_json::from_reader(file).map_err(|e| ValuationError::Json {
        context: format!("Invalid inputs JSON '{}': {e}", path.display()),
    })?;
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_parse_from_flat_json() {
        let raw = r#"{
            "mrr": 416667.0,
            "growth_rate": 25.0,
            "churn_rate": 5.0,
            "gross_margin": 80.0,
            "cac": 1200.0,
            "rd_expenses": 2000000.0,
            "discount_rate": 12.0,
            "terminal_growth": 3.0,
            "market_multiple": 8.0,
            "tech_score": 75.0
        }"#;
        let inputs: ValuationInputs = serde_json::from_str(raw).unwrap();
        assert_eq!(inputs.mrr, 416_667.0);
        assert_eq!(inputs.tech_score, 75.0);
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let err = read_inputs_json(Path::new("/nonexistent/inputs.json")).unwrap_err();
        assert!(matches!(err, ValuationError::Io { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}

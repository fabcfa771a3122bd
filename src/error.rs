/// Crate-wide error type.
///
/// Every failure is deterministic given the same inputs: either the input
/// snapshot violates a validation rule, or an export could not be written.
/// Exit codes group the categories for scripting:
///
/// - `2` invalid input snapshot
/// - `4` io / serialization
#[derive(Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// Monthly recurring revenue must be positive; customer count and the
    /// revenue base are undefined otherwise.
    ZeroMonthlyRevenue { value: f64 },
    /// Churn must be positive; zero churn makes lifetime value unbounded
    /// (division by a zero monthly churn fraction).
    ZeroChurnRate { value: f64 },
    /// The discount rate (as a fraction) must exceed terminal growth,
    /// otherwise the terminal value denominator is non-positive.
    InvalidDiscountSpread {
        discount_rate: f64,
        terminal_growth: f64,
    },
    /// Technology score outside [0, 100]. Rejected rather than clamped so the
    /// engine contract stays explicit.
    TechScoreOutOfRange { value: f64 },
    /// A field that must be >= 0 was negative.
    NegativeInput { field: &'static str, value: f64 },
    /// A field that must be > 0 was zero or negative.
    NonPositiveInput { field: &'static str, value: f64 },
    /// A field was NaN or infinite.
    NonFiniteInput { field: &'static str },
    /// Filesystem failure while reading inputs or writing exports.
    Io { context: String },
    /// JSON (de)serialization failure.
    Json { context: String },
}

impl ValuationError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ValuationError::Io { .. } | ValuationError::Json { .. } => 4,
            _ => 2,
        }
    }
}

impl std::fmt::Display for ValuationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValuationError::ZeroMonthlyRevenue { value } => {
                write!(f, "Monthly recurring revenue must be > 0 (got {value}).")
            }
            ValuationError::ZeroChurnRate { value } => {
                write!(
                    f,
                    "Monthly churn rate must be > 0 (got {value}); lifetime value is undefined at zero churn."
                )
            }
            ValuationError::InvalidDiscountSpread {
                discount_rate,
                terminal_growth,
            } => {
                write!(
                    f,
                    "Discount rate ({discount_rate}%) must exceed terminal growth ({terminal_growth}%); the terminal value denominator is non-positive."
                )
            }
            ValuationError::TechScoreOutOfRange { value } => {
                write!(f, "Technology score must be within [0, 100] (got {value}).")
            }
            ValuationError::NegativeInput { field, value } => {
                write!(f, "Input '{field}' must be >= 0 (got {value}).")
            }
            ValuationError::NonPositiveInput { field, value } => {
                write!(f, "Input '{field}' must be > 0 (got {value}).")
            }
            ValuationError::NonFiniteInput { field } => {
                write!(f, "Input '{field}' must be a finite number.")
            }
            ValuationError::Io { context } => write!(f, "{context}"),
            ValuationError::Json { context } => write!(f, "{context}"),
        }
    }
}

impl std::error::Error for ValuationError {}

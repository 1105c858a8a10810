use serde::Serialize;

use crate::{error::CalcError, scientific};

/// Message used when a calculation request carries no expression.
pub const EXPRESSION_REQUIRED: &str = "Expression is required";
/// Message used when a memory store request carries no value.
pub const VALUE_REQUIRED: &str = "Value is required";

/// Outcome marker carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Body of a successful calculation:
/// `{"status":"success","result":14.0,"scientific":"1.400000e1"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub status:     Status,
    pub result:     f64,
    pub scientific: String,
}

/// Body of any failed request: `{"status":"error","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub status:  Status,
    pub message: String,
}

/// Body of a memory recall: `{"status":"success","value":null}` when the
/// memory is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryResponse {
    pub status: Status,
    pub value:  Option<f64>,
}

/// Body of a request that only acknowledges, such as a memory store or clear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageResponse {
    pub status:  Status,
    pub message: String,
}

impl CalculationResponse {
    /// Wraps `result` together with its scientific rendering.
    #[must_use]
    pub fn new(result: f64, precision: usize) -> Self {
        Self { status: Status::Success,
               result,
               scientific: scientific::format(result, precision) }
    }
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { status:  Status::Error,
               message: message.into(), }
    }
}

impl From<&CalcError> for ErrorResponse {
    fn from(err: &CalcError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<CalcError> for ErrorResponse {
    fn from(err: CalcError) -> Self {
        Self::from(&err)
    }
}

impl MemoryResponse {
    #[must_use]
    pub const fn new(value: Option<f64>) -> Self {
        Self { status: Status::Success,
               value }
    }
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { status:  Status::Success,
               message: message.into(), }
    }
}

/// Evaluates `expression` and builds the calculation response for it.
///
/// An empty expression is refused with [`EXPRESSION_REQUIRED`] before the
/// evaluator runs. Any evaluator failure becomes an error body carrying the
/// error message verbatim.
///
/// # Errors
/// Returns the [`ErrorResponse`] to send back when the expression is missing
/// or fails to evaluate.
///
/// # Example
/// ```
/// use exprcalc::response::calculate;
///
/// let ok = calculate("2+3*4", 6).unwrap();
/// assert_eq!(ok.result, 14.0);
/// assert_eq!(ok.scientific, "1.400000e1");
///
/// let err = calculate("", 6).unwrap_err();
/// assert_eq!(err.message, "Expression is required");
/// ```
pub fn calculate(expression: &str, precision: usize) -> Result<CalculationResponse, ErrorResponse> {
    if expression.is_empty() {
        return Err(ErrorResponse::new(EXPRESSION_REQUIRED));
    }
    let result = crate::evaluate(expression)?;
    Ok(CalculationResponse::new(result, precision))
}

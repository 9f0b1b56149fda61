use thiserror::Error;

use crate::expression::ExpressionError;
use crate::number::NumberError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("At least one seed value is required")]
    NoSeeds,
    #[error("{target} can't be reached within the search bounds ({closed} values expanded)")]
    SearchExhausted { target: String, closed: usize },
    #[error("Invalid operator set '{0}', expected a non-empty combination of + - * /")]
    InvalidOperators(String),
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Number error: {0}")]
    NumberError(#[from] NumberError),
}

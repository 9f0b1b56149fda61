use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer division with a remainder")]
    InexactDivision,
    #[error("Result does not fit the numeric domain")]
    Overflow,
    #[error("No node is known for value {0}")]
    UnknownValue(String),
}

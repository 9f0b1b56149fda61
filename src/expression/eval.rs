use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::number::Numeric;

impl<N: Numeric> Expression<N> {
    /// Recompute the value with the domain's arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error when a step divides by zero, divides integers
    /// inexactly, or leaves the representable range.
    pub fn evaluate(&self) -> Result<N, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                self.operator().apply(left, right)
            }
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }
        result
    }
}

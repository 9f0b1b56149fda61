use log::trace;

use crate::expression::errors::ExpressionError;
use crate::expression::node::{Node, Operator};
use crate::number::Numeric;

/// An expression tree over seed values
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<N> {
    Number(N),
    Add(Box<Expression<N>>, Box<Expression<N>>),
    Sub(Box<Expression<N>>, Box<Expression<N>>),
    Mul(Box<Expression<N>>, Box<Expression<N>>),
    Div(Box<Expression<N>>, Box<Expression<N>>),
}

impl<N: Numeric> Expression<N> {
    /// Rebuild the tree for `value` by repeatedly looking operand values up.
    ///
    /// Every non-seed node's operands are strictly cheaper than the node, so the
    /// walk always bottoms out at seeds.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnknownValue`] if some value on the way has no
    /// node.
    pub fn from_nodes<'a, F>(value: N, lookup: &F) -> Result<Self, ExpressionError>
    where
        F: Fn(N) -> Option<&'a Node<N>>,
        N: 'a,
    {
        let node = lookup(value).ok_or_else(|| ExpressionError::UnknownValue(value.to_string()))?;
        trace!("Rebuilding {} from {:?}", value, node);

        if node.is_seed() {
            return Ok(Expression::Number(node.value()));
        }

        let left = Box::new(Self::from_nodes(node.left(), lookup)?);
        let right = Box::new(Self::from_nodes(node.right(), lookup)?);
        Ok(match node.operator() {
            Operator::Plus => Expression::Add(left, right),
            Operator::Minus => Expression::Sub(left, right),
            Operator::Times => Expression::Mul(left, right),
            Operator::Divide => Expression::Div(left, right),
            Operator::Seed => Expression::Number(node.value()),
        })
    }

    /// Number of leaves, i.e. the term count
    pub fn term_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => l.term_count() + r.term_count(),
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            Expression::Number(_) => Operator::Seed,
            Expression::Add(_, _) => Operator::Plus,
            Expression::Sub(_, _) => Operator::Minus,
            Expression::Mul(_, _) => Operator::Times,
            Expression::Div(_, _) => Operator::Divide,
        }
    }
}

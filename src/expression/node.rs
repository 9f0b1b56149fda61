use std::fmt;

use crate::expression::errors::ExpressionError;
use crate::number::{Domain, Numeric};

/// How a node's value was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    /// Leaf: the value is one of the seeds
    Seed,
}

impl Operator {
    /// The four binary operators, in the order expansion tries them
    pub const BINARY: [Operator; 4] = [
        Operator::Divide,
        Operator::Minus,
        Operator::Times,
        Operator::Plus,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
            Operator::Seed => '=',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' | 'x' => Some(Operator::Times),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// `a op b == b op a`, so the mirrored candidate never needs generating
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Plus | Operator::Times)
    }

    /// Apply the operator with the domain's checked arithmetic.
    ///
    /// A seed "operator" returns its left operand unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero divisor, an integer division with a
    /// remainder, or a result the domain cannot represent.
    pub fn apply<N: Numeric>(self, lhs: N, rhs: N) -> Result<N, ExpressionError> {
        match self {
            Operator::Plus => lhs.checked_add(rhs).ok_or(ExpressionError::Overflow),
            Operator::Minus => lhs.checked_sub(rhs).ok_or(ExpressionError::Overflow),
            Operator::Times => lhs.checked_mul(rhs).ok_or(ExpressionError::Overflow),
            Operator::Divide => {
                if rhs.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                lhs.exact_div(rhs).ok_or(match N::DOMAIN {
                    Domain::Integer => ExpressionError::InexactDivision,
                    Domain::Float => ExpressionError::Overflow,
                })
            }
            Operator::Seed => Ok(lhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A discovered value together with the last step of its cheapest known
/// derivation.
///
/// Operands are referenced by value, not by pointer; the full expression is
/// recovered by looking the operand values up again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node<N> {
    value: N,
    left: N,
    right: N,
    cost: usize,
    op: Operator,
}

impl<N: Numeric> Node<N> {
    /// A cost-1 leaf
    pub fn seed(value: N) -> Self {
        Self {
            value,
            left: value,
            right: value,
            cost: 1,
            op: Operator::Seed,
        }
    }

    /// Combine two known nodes. The cost is the sum of the operand costs.
    ///
    /// # Errors
    ///
    /// See [`Operator::apply`].
    pub fn combine(op: Operator, left: &Node<N>, right: &Node<N>) -> Result<Self, ExpressionError> {
        let value = op.apply(left.value, right.value)?;
        Ok(Self {
            value,
            left: left.value,
            right: right.value,
            cost: left.cost + right.cost,
            op,
        })
    }

    pub fn value(&self) -> N {
        self.value
    }

    pub fn left(&self) -> N {
        self.left
    }

    pub fn right(&self) -> N {
        self.right
    }

    /// Number of seed occurrences in the expression
    pub fn cost(&self) -> usize {
        self.cost
    }

    pub fn operator(&self) -> Operator {
        self.op
    }

    pub fn is_seed(&self) -> bool {
        self.op == Operator::Seed
    }

    pub fn key(&self) -> N::Key {
        self.value.key()
    }
}

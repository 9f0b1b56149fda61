use std::fmt;

use crate::expression::ast::Expression;
use crate::number::Numeric;

/// Textual form of a rendered expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Fully parenthesized infix, `((69+420)*69)`
    #[default]
    Infix,
    /// Reverse Polish, `69 420 + 69 *`
    Postfix,
}

fn write_number<N: Numeric>(f: &mut impl fmt::Write, n: N) -> fmt::Result {
    if n < n.magnitude() {
        write!(f, "({})", n)
    } else {
        write!(f, "{}", n)
    }
}

/// Infix: every composite is wrapped in its own parentheses, so the text
/// re-evaluates to the same value in either domain regardless of precedence
/// or rounding order.
impl<N: Numeric> fmt::Display for Expression<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write_number(f, *n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                write!(f, "({}{}{})", l, self.operator(), r)
            }
        }
    }
}

impl<N: Numeric> Expression<N> {
    /// Space-separated postfix form
    pub fn to_rpn(&self) -> String {
        fn push_tokens<N: Numeric>(expr: &Expression<N>, tokens: &mut Vec<String>) {
            match expr {
                Expression::Number(n) => tokens.push(n.to_string()),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    push_tokens(l, tokens);
                    push_tokens(r, tokens);
                    tokens.push(expr.operator().to_string());
                }
            }
        }

        let mut tokens = Vec::new();
        push_tokens(self, &mut tokens);
        tokens.join(" ")
    }

    pub fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Infix => self.to_string(),
            Notation::Postfix => self.to_rpn(),
        }
    }
}

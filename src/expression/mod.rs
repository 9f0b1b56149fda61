//! Search nodes and the expression trees rebuilt from them

mod ast;
mod display;
mod errors;
mod eval;
mod node;

pub use ast::Expression;
pub use display::Notation;
pub use errors::ExpressionError;
pub use node::{Node, Operator};

#[cfg(test)]
mod tests;

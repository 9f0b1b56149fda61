//! Minterms - find the shortest arithmetic expression for a number
//!
//! Given a few seed constants and a target, a best-first search combines
//! already-known values pairwise with `+ - * /` until it finds an expression
//! for the target that uses the fewest seed occurrences ("terms").

pub mod expression;
pub mod number;
pub mod solver;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Node, Notation, Operator};
pub use number::{Domain, NumberError, Numeric, RelevanceWindow};
pub use solver::{
    ExpressionSolver, FrontierKind, OperatorSet, Search, SearchConfig, SearchState, Solution,
    SolverError, StopPolicy,
};

/// Find the shortest expression over `seeds` that evaluates to `target`
///
/// Uses the default configuration: all four operators, a relevance window
/// derived from the seeds, and a heap-backed frontier.
///
/// # Errors
///
/// This function will return an error if:
/// * `seeds` is empty
/// * the target can't be reached within the relevance window
///
/// # Examples
///
/// ```
/// use minterms::find_expression;
///
/// match find_expression(&[69, 420], 489) {
///     Ok(solution) => {
///         assert_eq!(solution.cost, 2);
///         println!("{}", solution);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression<N: Numeric>(seeds: &[N], target: N) -> Result<Solution<N>, SolverError> {
    ExpressionSolver::new(seeds.to_vec())?.solve(target)
}

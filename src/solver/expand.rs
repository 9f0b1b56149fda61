use log::{Level, info, log_enabled, trace};

use crate::expression::{Expression, Node, Operator};
use crate::number::{Numeric, RelevanceWindow};
use crate::solver::closed::ClosedSet;
use crate::solver::config::OperatorSet;
use crate::solver::frontier::Frontier;
use crate::solver::search::SearchStats;

/// What happened to a candidate offered to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The value is already closed
    Closed,
    /// Magnitude outside the relevance window
    OutsideWindow,
    /// Not cheaper than the best known expression for the target
    TooCostly,
    /// Offered to the frontier
    Admitted,
    /// Offered to the frontier, and it is a new best for the target
    Target,
}

/// Combines a freshly closed node with its peers and filters the results.
///
/// Borrows the pieces of a search session it needs so the closed set can be
/// iterated while the frontier is being fed.
pub(crate) struct Expansion<'s, N: Numeric, F> {
    pub closed: &'s ClosedSet<N>,
    pub frontier: &'s mut F,
    pub window: &'s RelevanceWindow<N>,
    pub operators: OperatorSet,
    pub target: N,
    pub best_cost: &'s mut Option<usize>,
    pub stats: &'s mut SearchStats,
}

impl<N: Numeric, F: Frontier<N>> Expansion<'_, N, F> {
    /// Offer every `a op b`, plus `b - a` and `b / a` when the operands
    /// differ. `b + a` and `b * a` equal their mirrors and are not generated.
    /// Nothing is generated when `a` and `b` together cost at least as much
    /// as the best known target expression.
    pub fn generate_against(&mut self, a: &Node<N>, b: &Node<N>) {
        debug_assert!(a.cost() + b.cost() >= 2);

        if self.best_cost.is_some_and(|best| a.cost() + b.cost() >= best) {
            return;
        }

        let operators = self.operators;
        for op in operators.iter() {
            self.offer(op, a, b);
        }

        if a.key() != b.key() {
            for op in operators.iter().filter(|op| !op.is_commutative()) {
                self.offer(op, b, a);
            }
        }
    }

    fn offer(&mut self, op: Operator, left: &Node<N>, right: &Node<N>) {
        match Node::combine(op, left, right) {
            Ok(node) => {
                self.stats.generated += 1;
                self.discover(node);
            }
            Err(e) => trace!(
                "Skipping {} {} {}: {}",
                left.value(),
                op,
                right.value(),
                e
            ),
        }
    }

    /// Admission check for one candidate.
    pub fn discover(&mut self, node: Node<N>) -> Admission {
        let value = node.value();
        if self.closed.contains(value) {
            return Admission::Closed;
        }
        if !self.window.contains(value) {
            return Admission::OutsideWindow;
        }
        if self.best_cost.is_some_and(|best| node.cost() >= best) {
            return Admission::TooCostly;
        }

        self.frontier.insert_or_improve(node);
        self.stats.admitted += 1;

        if value.key() != self.target.key() {
            return Admission::Admitted;
        }

        *self.best_cost = Some(node.cost());
        self.frontier.tighten(node.cost(), self.target);
        if log_enabled!(Level::Info) {
            let closed = self.closed;
            let frontier = &*self.frontier;
            let lookup = |v: N| closed.get(v).or_else(|| frontier.get(v));
            match Expression::from_nodes(value, &lookup) {
                Ok(expr) => info!("One way ({} terms) = {}", node.cost(), expr),
                Err(e) => info!("One way ({} terms), not renderable: {}", node.cost(), e),
            }
        }
        Admission::Target
    }
}

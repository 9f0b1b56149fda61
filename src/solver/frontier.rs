use crate::expression::Node;
use crate::number::Numeric;

/// The open set: discovered values that have not been expanded yet.
///
/// Holds at most one node per value, the cheapest seen so far, and hands
/// nodes out cheapest first. Callers must only insert nodes strictly more
/// expensive than [`Frontier::level`].
pub trait Frontier<N: Numeric> {
    /// Insert `node`, replace a strictly more expensive entry for the same
    /// value, or drop `node` if it is no cheaper than what is already there.
    fn insert_or_improve(&mut self, node: Node<N>);

    /// Remove and return some node of minimum cost. Ties are broken
    /// arbitrarily.
    fn extract_min(&mut self) -> Option<Node<N>>;

    fn get(&self, value: N) -> Option<&Node<N>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost of the most recently extracted node, 0 before the first one
    fn level(&self) -> usize;

    /// Only nodes cheaper than `bound`, or the node for `keep`, can still
    /// matter. Implementations may drop everything else.
    fn tighten(&mut self, bound: usize, keep: N);
}

/// Which [`Frontier`] implementation a search uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierKind {
    /// Binary heap with lazy deletion of stale entries
    #[default]
    Heap,
    /// Per-cost level cache, refilled by rescanning
    Level,
}

/// Build an integer node of exactly `cost` terms: `(v - c + 1) + 1 + 1 ...`
#[cfg(test)]
pub(crate) fn node_with_cost(value: i64, cost: usize) -> Node<i64> {
    use crate::expression::Operator;

    let one = Node::seed(1);
    let mut node = Node::seed(value - (cost as i64 - 1));
    for _ in 1..cost {
        node = match Node::combine(Operator::Plus, &node, &one) {
            Ok(next) => next,
            Err(_) => break,
        };
    }
    node
}

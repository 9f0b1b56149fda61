use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use log::trace;

use crate::expression::Node;
use crate::number::Numeric;
use crate::solver::frontier::Frontier;

/// Frontier backed by a min-heap of `(cost, key)` records plus a map holding
/// the authoritative node per value.
///
/// Improving a value pushes a second record instead of editing the first.
/// A record is live only while the map still holds a node of that exact cost
/// for its key; everything else is skipped on extraction.
#[derive(Debug)]
pub struct HeapFrontier<N: Numeric> {
    best: HashMap<N::Key, Node<N>>,
    heap: BinaryHeap<Reverse<(usize, N::Key)>>,
    level: usize,
    bound: Option<(usize, N::Key)>,
    stale: usize,
}

impl<N: Numeric> HeapFrontier<N> {
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
            heap: BinaryHeap::new(),
            level: 0,
            bound: None,
            stale: 0,
        }
    }

    /// Records in the heap, live or not
    pub fn queued(&self) -> usize {
        self.heap.len()
    }

    /// Dead records skipped so far
    pub fn stale(&self) -> usize {
        self.stale
    }

    fn is_irrelevant(&self, cost: usize, key: N::Key) -> bool {
        matches!(self.bound, Some((bound, keep)) if cost >= bound && key != keep)
    }
}

impl<N: Numeric> Default for HeapFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Frontier<N> for HeapFrontier<N> {
    fn insert_or_improve(&mut self, node: Node<N>) {
        debug_assert!(node.cost() >= 1, "node without terms: {:?}", node);
        debug_assert!(
            node.cost() > self.level,
            "cost {} inserted at level {}",
            node.cost(),
            self.level
        );

        let key = node.key();
        match self.best.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
            Entry::Occupied(mut slot) => {
                if slot.get().cost() <= node.cost() {
                    return;
                }
                slot.insert(node);
            }
        }
        self.heap.push(Reverse((node.cost(), key)));
    }

    fn extract_min(&mut self) -> Option<Node<N>> {
        while let Some(Reverse((cost, key))) = self.heap.pop() {
            let live = self.best.get(&key).is_some_and(|node| node.cost() == cost);
            if !live {
                self.stale += 1;
                continue;
            }
            if self.is_irrelevant(cost, key) {
                trace!("Dropping {:?} at cost {}, cannot beat the target", key, cost);
                self.best.remove(&key);
                continue;
            }
            if let Some(node) = self.best.remove(&key) {
                self.level = cost;
                return Some(node);
            }
        }
        None
    }

    fn get(&self, value: N) -> Option<&Node<N>> {
        self.best.get(&value.key())
    }

    fn len(&self) -> usize {
        self.best.len()
    }

    fn level(&self) -> usize {
        self.level
    }

    fn tighten(&mut self, bound: usize, keep: N) {
        self.bound = Some((bound, keep.key()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::frontier::node_with_cost;

    #[test]
    fn test_extracts_cheapest_first() {
        let mut frontier = HeapFrontier::new();
        frontier.insert_or_improve(node_with_cost(10, 3));
        frontier.insert_or_improve(node_with_cost(20, 1));
        frontier.insert_or_improve(node_with_cost(30, 2));
        assert_eq!(frontier.len(), 3);

        let costs: Vec<_> = std::iter::from_fn(|| frontier.extract_min())
            .map(|n| (n.value(), n.cost()))
            .collect();
        assert_eq!(costs, vec![(20, 1), (30, 2), (10, 3)]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.level(), 3);
    }

    #[test]
    fn test_improve_replaces_and_leaves_stale_record() {
        let mut frontier = HeapFrontier::new();
        frontier.insert_or_improve(node_with_cost(10, 4));
        frontier.insert_or_improve(node_with_cost(10, 2));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.queued(), 2);
        assert_eq!(frontier.get(10).map(|n| n.cost()), Some(2));

        let first = frontier.extract_min();
        assert_eq!(first.map(|n| n.cost()), Some(2));
        assert_eq!(frontier.extract_min(), None);
        assert_eq!(frontier.stale(), 1);
    }

    #[test]
    fn test_no_cheaper_insert_is_dropped() {
        let mut frontier = HeapFrontier::new();
        frontier.insert_or_improve(node_with_cost(10, 2));
        frontier.insert_or_improve(node_with_cost(10, 2));
        frontier.insert_or_improve(node_with_cost(10, 3));
        assert_eq!(frontier.queued(), 1);
        assert_eq!(frontier.get(10).map(|n| n.cost()), Some(2));
    }

    #[test]
    fn test_tighten_drops_hopeless_entries_but_keeps_target() {
        let mut frontier = HeapFrontier::new();
        frontier.insert_or_improve(node_with_cost(1, 1));
        frontier.insert_or_improve(node_with_cost(7, 3));
        frontier.insert_or_improve(node_with_cost(8, 3));
        frontier.insert_or_improve(node_with_cost(9, 4));
        frontier.tighten(3, 7);

        let values: Vec<_> = std::iter::from_fn(|| frontier.extract_min())
            .map(|n| n.value())
            .collect();
        assert_eq!(values, vec![1, 7]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_insert_after_extraction() {
        let mut frontier = HeapFrontier::new();
        frontier.insert_or_improve(node_with_cost(5, 1));
        assert_eq!(frontier.extract_min().map(|n| n.value()), Some(5));
        frontier.insert_or_improve(node_with_cost(10, 2));
        assert_eq!(frontier.extract_min().map(|n| n.value()), Some(10));
        assert_eq!(frontier.extract_min(), None);
    }
}

use std::collections::HashMap;

use crate::expression::Node;
use crate::number::Numeric;

/// Expanded values with their final, minimum-cost node
#[derive(Debug)]
pub struct ClosedSet<N: Numeric> {
    nodes: HashMap<N::Key, Node<N>>,
}

impl<N: Numeric> ClosedSet<N> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Close `node`. A value is closed at most once.
    pub fn insert(&mut self, node: Node<N>) {
        let previous = self.nodes.insert(node.key(), node);
        debug_assert!(previous.is_none(), "{:?} closed twice", node.value());
    }

    pub fn get(&self, value: N) -> Option<&Node<N>> {
        self.nodes.get(&value.key())
    }

    pub fn contains(&self, value: N) -> bool {
        self.nodes.contains_key(&value.key())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<N>> {
        self.nodes.values()
    }
}

impl<N: Numeric> Default for ClosedSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

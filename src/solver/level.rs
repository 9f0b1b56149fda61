use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, info};

use crate::expression::Node;
use crate::number::Numeric;
use crate::solver::frontier::Frontier;

/// Frontier that walks cost levels one at a time.
///
/// Keeps every open node in one map and a stack of the keys sitting exactly
/// on the current level. When that stack runs dry the level is advanced and
/// the whole map rescanned; the rescan also evicts entries that can no
/// longer beat the best known target cost.
#[derive(Debug)]
pub struct LevelFrontier<N: Numeric> {
    backing: HashMap<N::Key, Node<N>>,
    cached: Vec<N::Key>,
    level: usize,
    bound: Option<(usize, N::Key)>,
}

impl<N: Numeric> LevelFrontier<N> {
    pub fn new() -> Self {
        Self {
            backing: HashMap::new(),
            cached: Vec::new(),
            level: 0,
            bound: None,
        }
    }

    /// Entries left on the current level
    pub fn level_size(&self) -> usize {
        self.cached.len()
    }

    fn step_recache(&mut self) {
        self.level += 1;
        let level = self.level;
        let bound = self.bound;
        let mut cached = Vec::new();
        let before = self.backing.len();

        self.backing.retain(|key, node| {
            debug_assert!(node.cost() >= level, "{:?} below level {}", node, level);
            if node.cost() == level {
                cached.push(*key);
                return true;
            }
            !matches!(bound, Some((bound, keep)) if node.cost() >= bound && *key != keep)
        });

        let evicted = before - self.backing.len();
        if evicted > 0 {
            debug!("Evicted {} open entries at level {}", evicted, level);
        }
        self.cached = cached;
        info!(
            "Now at level {} ({} open, {} of that on current level)",
            self.level,
            self.backing.len(),
            self.cached.len()
        );
    }

    fn recache(&mut self) {
        while self.cached.is_empty() && !self.backing.is_empty() {
            self.step_recache();
        }
    }
}

impl<N: Numeric> Default for LevelFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> Frontier<N> for LevelFrontier<N> {
    fn insert_or_improve(&mut self, node: Node<N>) {
        debug_assert!(node.cost() >= 1, "node without terms: {:?}", node);
        debug_assert!(
            node.cost() > self.level,
            "cost {} inserted at level {}",
            node.cost(),
            self.level
        );

        match self.backing.entry(node.key()) {
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
            Entry::Occupied(mut slot) => {
                if slot.get().cost() > node.cost() {
                    slot.insert(node);
                }
            }
        }
    }

    fn extract_min(&mut self) -> Option<Node<N>> {
        if self.cached.is_empty() {
            self.recache();
        }
        let key = self.cached.pop()?;
        self.backing.remove(&key)
    }

    fn get(&self, value: N) -> Option<&Node<N>> {
        self.backing.get(&value.key())
    }

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn level(&self) -> usize {
        self.level
    }

    fn tighten(&mut self, bound: usize, keep: N) {
        self.bound = Some((bound, keep.key()));
    }
}

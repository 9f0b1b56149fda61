use log::debug;

use crate::number::{Numeric, RELEVANCE_FACTOR};

/// Exclusive bounds on the magnitude of values worth keeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceWindow<N> {
    pub min: Option<N>,
    pub max: Option<N>,
}

impl<N: Numeric> RelevanceWindow<N> {
    pub fn new(min: Option<N>, max: Option<N>) -> Self {
        Self { min, max }
    }

    /// A window that accepts every value
    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// The domain's default lower bound and `RELEVANCE_FACTOR` times the
    /// largest seed magnitude as the upper bound.
    pub fn for_seeds(seeds: &[N]) -> Self {
        let largest = seeds
            .iter()
            .map(|seed| seed.magnitude())
            .fold(None, |acc: Option<N>, m| match acc {
                Some(best) if best >= m => Some(best),
                _ => Some(m),
            });

        let max = largest.and_then(|m| m.scaled(RELEVANCE_FACTOR));
        let window = Self {
            min: N::default_min_relevant(),
            max,
        };
        debug!("Default relevance window for {:?}: {:?}", seeds, window);
        window
    }

    #[inline]
    pub fn contains(&self, value: N) -> bool {
        let magnitude = value.magnitude();
        if let Some(min) = self.min
            && magnitude <= min
        {
            return false;
        }
        if let Some(max) = self.max
            && magnitude >= max
        {
            return false;
        }
        true
    }
}

use log::info;
use rayon::prelude::*;

use crate::number::{Numeric, parse_values};
use crate::solver::config::SearchConfig;
use crate::solver::errors::SolverError;
use crate::solver::frontier::{Frontier, FrontierKind};
use crate::solver::heap::HeapFrontier;
use crate::solver::level::LevelFrontier;
use crate::solver::search::{Search, Solution};

/// Finds minimal-term expressions over a fixed set of seeds
#[derive(Debug, Clone)]
pub struct ExpressionSolver<N: Numeric> {
    seeds: Vec<N>,
    config: SearchConfig<N>,
}

impl<N: Numeric> ExpressionSolver<N> {
    /// Solver with the default configuration for `seeds`
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoSeeds`] if `seeds` is empty.
    pub fn new(seeds: Vec<N>) -> Result<Self, SolverError> {
        let config = SearchConfig::for_seeds(&seeds);
        Self::with_config(seeds, config)
    }

    /// # Errors
    ///
    /// Returns [`SolverError::NoSeeds`] if `seeds` is empty.
    pub fn with_config(seeds: Vec<N>, config: SearchConfig<N>) -> Result<Self, SolverError> {
        if seeds.is_empty() {
            return Err(SolverError::NoSeeds);
        }
        Ok(Self { seeds, config })
    }

    /// Parse seed values of domain `N` and use the default configuration
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NumberError`] for a value that is not a number
    /// of this domain, or [`SolverError::NoSeeds`] if `raw` is empty.
    pub fn parse(raw: &[String]) -> Result<Self, SolverError> {
        Self::new(parse_values(raw)?)
    }

    pub fn seeds(&self) -> &[N] {
        &self.seeds
    }

    pub fn config(&self) -> &SearchConfig<N> {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig<N> {
        &mut self.config
    }

    /// Search for the cheapest expression that evaluates to `target`
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::SearchExhausted`] if no expression exists within
    /// the configured bounds.
    pub fn solve(&self, target: N) -> Result<Solution<N>, SolverError> {
        info!(
            "Searching for {} from seeds {:?} ({} domain, operators {}, window {:?})",
            target,
            self.seeds,
            N::DOMAIN,
            self.config.operators,
            self.config.window
        );

        match self.config.frontier {
            FrontierKind::Heap => self.solve_with(HeapFrontier::new(), target),
            FrontierKind::Level => self.solve_with(LevelFrontier::new(), target),
        }
    }

    /// Run a search on a caller-supplied frontier
    ///
    /// # Errors
    ///
    /// See [`ExpressionSolver::solve`].
    pub fn solve_with<F: Frontier<N>>(
        &self,
        frontier: F,
        target: N,
    ) -> Result<Solution<N>, SolverError> {
        Search::new(&self.seeds, target, self.config.clone(), frontier)?.run()
    }

    /// Solve several targets, one independent search per target, in parallel.
    /// Results are in the order of `targets`.
    pub fn solve_all(&self, targets: &[N]) -> Vec<Result<Solution<N>, SolverError>> {
        targets.par_iter().map(|&target| self.solve(target)).collect()
    }
}

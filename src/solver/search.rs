use std::fmt;

use log::{debug, info, warn};

use crate::expression::{Expression, ExpressionError, Node, Notation};
use crate::number::Numeric;
use crate::solver::closed::ClosedSet;
use crate::solver::config::{SearchConfig, StopPolicy};
use crate::solver::errors::SolverError;
use crate::solver::expand::Expansion;
use crate::solver::frontier::Frontier;
use crate::solver::heap::HeapFrontier;

/// Where a search is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Target not seen yet
    Running,
    /// Target seen, cheaper expressions still possible
    Found,
    /// Frontier ran dry before the target was seen, or the target lies
    /// outside the relevance window
    Exhausted,
    /// Target known at minimum cost
    Done,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Exhausted | SearchState::Done)
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from the frontier to the closed set
    pub expanded: usize,
    /// Candidates with a value in the domain
    pub generated: usize,
    /// Candidates handed to the frontier
    pub admitted: usize,
    pub closed: usize,
    pub open: usize,
}

/// Snapshot handed to a progress callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: usize,
    pub open: usize,
    pub closed: usize,
    pub expanded: usize,
}

/// A minimal-cost expression for a target
#[derive(Debug, Clone)]
pub struct Solution<N> {
    pub target: N,
    pub cost: usize,
    pub expression: Expression<N>,
    pub stats: SearchStats,
}

impl<N: Numeric> Solution<N> {
    pub fn render(&self, notation: Notation) -> String {
        self.expression.render(notation)
    }
}

impl<N: Numeric> fmt::Display for Solution<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.expression)
    }
}

type ProgressFn<'a> = Box<dyn FnMut(&Progress) + 'a>;

/// One best-first search for one target.
///
/// Owns the open and closed sets and the best known target cost. Values move
/// from the frontier to the closed set exactly once, cheapest first; each
/// newly closed node is combined with every closed node, itself included.
pub struct Search<'a, N: Numeric, F: Frontier<N> = HeapFrontier<N>> {
    target: N,
    config: SearchConfig<N>,
    frontier: F,
    closed: ClosedSet<N>,
    best_cost: Option<usize>,
    state: SearchState,
    stats: SearchStats,
    next_report: usize,
    progress: Option<ProgressFn<'a>>,
}

impl<'a, N: Numeric, F: Frontier<N>> Search<'a, N, F> {
    /// Seed the frontier with cost-1 nodes. A target that is not a seed and
    /// lies outside the relevance window leaves the search `Exhausted`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoSeeds`] if `seeds` is empty.
    pub fn new(
        seeds: &[N],
        target: N,
        config: SearchConfig<N>,
        frontier: F,
    ) -> Result<Self, SolverError> {
        if seeds.is_empty() {
            return Err(SolverError::NoSeeds);
        }

        let next_report = config.progress_every.max(1);
        let mut search = Self {
            target,
            config,
            frontier,
            closed: ClosedSet::new(),
            best_cost: None,
            state: SearchState::Running,
            stats: SearchStats::default(),
            next_report,
            progress: None,
        };

        for &seed in seeds {
            search.provide(seed);
        }

        // Composites outside the window are never admitted
        if search.best_cost.is_none() && !search.config.window.contains(target) {
            warn!(
                "Goal {} is outside the relevance window {:?}, not searching",
                target, search.config.window
            );
            search.state = SearchState::Exhausted;
        }
        Ok(search)
    }

    /// Call `callback` on the progress cadence.
    ///
    /// The first report comes after `progress_every` expansions. Each later
    /// threshold is the previous one scaled by `progress_growth` (3/2 by
    /// default), so reports thin out as the search deepens. Use
    /// [`SearchConfig::with_progress_schedule`] to change either.
    pub fn with_progress(mut self, callback: impl FnMut(&Progress) + 'a) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    fn provide(&mut self, seed: N) {
        let node = Node::seed(seed);
        self.frontier.insert_or_improve(node);
        if seed.key() == self.target.key() && self.best_cost.is_none() {
            debug!("Target {} is a seed", seed);
            self.best_cost = Some(1);
            self.frontier.tighten(1, self.target);
            self.state = SearchState::Found;
        }
    }

    pub fn target(&self) -> N {
        self.target
    }

    pub fn config(&self) -> &SearchConfig<N> {
        &self.config
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cost of the cheapest expression for the target seen so far
    pub fn best_cost(&self) -> Option<usize> {
        self.best_cost
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    pub fn closed(&self) -> &ClosedSet<N> {
        &self.closed
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            closed: self.closed.len(),
            open: self.frontier.len(),
            ..self.stats
        }
    }

    /// The node for `value`, closed or still open
    pub fn lookup_best_known(&self, value: N) -> Option<&Node<N>> {
        self.closed.get(value).or_else(|| self.frontier.get(value))
    }

    /// Rebuild the best known expression for `value`
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnknownValue`] if `value` was never
    /// discovered.
    pub fn expression(&self, value: N) -> Result<Expression<N>, ExpressionError> {
        Expression::from_nodes(value, &|v| self.lookup_best_known(v))
    }

    /// # Errors
    ///
    /// See [`Search::expression`].
    pub fn render(&self, value: N, notation: Notation) -> Result<String, ExpressionError> {
        Ok(self.expression(value)?.render(notation))
    }

    /// Expand one node
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some(node) = self.frontier.extract_min() else {
            self.state = match self.best_cost {
                Some(_) => SearchState::Done,
                None => {
                    warn!(
                        "Goal {} can't be reached after expanding {} values",
                        self.target,
                        self.closed.len()
                    );
                    SearchState::Exhausted
                }
            };
            return self.state;
        };

        self.stats.expanded += 1;
        // Closed first, so it is combined with itself below
        self.closed.insert(node);
        self.report_progress(&node);

        if self.config.stop == StopPolicy::FirstClosed && node.key() == self.target.key() {
            self.state = SearchState::Done;
            return self.state;
        }

        // Every combination costs at least one more than `node`
        if self.best_cost.is_none_or(|best| best > node.cost() + 1) {
            self.expand(&node);
        }

        if let Some(best) = self.best_cost {
            self.state = match self.config.stop {
                StopPolicy::ProvenOptimal if best <= node.cost() + 1 => SearchState::Done,
                _ => SearchState::Found,
            };
        }
        self.state
    }

    fn expand(&mut self, node: &Node<N>) {
        let mut expansion = Expansion {
            closed: &self.closed,
            frontier: &mut self.frontier,
            window: &self.config.window,
            operators: self.config.operators,
            target: self.target,
            best_cost: &mut self.best_cost,
            stats: &mut self.stats,
        };
        for peer in self.closed.iter() {
            expansion.generate_against(node, peer);
        }
    }

    fn report_progress(&mut self, node: &Node<N>) {
        if self.stats.expanded != self.next_report {
            return;
        }
        let (num, den) = self.config.progress_growth;
        self.next_report = (self.next_report.saturating_mul(num) / den.max(1))
            .max(self.next_report + 1);

        let progress = Progress {
            level: node.cost(),
            open: self.frontier.len(),
            closed: self.closed.len(),
            expanded: self.stats.expanded,
        };
        info!(
            "Expanding {} at depth {}, {} open, {} closed",
            node.value(),
            progress.level,
            progress.open,
            progress.closed
        );
        if let Some(callback) = self.progress.as_mut() {
            callback(&progress);
        }
    }

    /// Step until the search stops.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::SearchExhausted`] if the target can't be reached
    /// within the configured bounds.
    pub fn run(&mut self) -> Result<Solution<N>, SolverError> {
        while !self.step().is_terminal() {}

        if self.state == SearchState::Exhausted {
            return Err(SolverError::SearchExhausted {
                target: self.target.to_string(),
                closed: self.closed.len(),
            });
        }

        let expression = self.expression(self.target)?;
        let cost = expression.term_count();
        let stats = self.stats();
        info!(
            "Done after {} steps. You need only {} terms to build {}",
            stats.expanded, cost, self.target
        );
        Ok(Solution {
            target: self.target,
            cost,
            expression,
            stats,
        })
    }
}

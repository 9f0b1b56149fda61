use std::fmt;
use std::str::FromStr;

use crate::expression::Operator;
use crate::number::{Numeric, RelevanceWindow};
use crate::solver::constants::{FIRST_PROGRESS_REPORT, PROGRESS_GROWTH_DEN, PROGRESS_GROWTH_NUM};
use crate::solver::errors::SolverError;
use crate::solver::frontier::FrontierKind;

/// The binary operators expansion is allowed to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSet {
    bits: u8,
}

impl OperatorSet {
    pub fn all() -> Self {
        Operator::BINARY.into_iter().collect()
    }

    fn bit(op: Operator) -> u8 {
        match op {
            Operator::Plus => 1,
            Operator::Minus => 2,
            Operator::Times => 4,
            Operator::Divide => 8,
            Operator::Seed => 0,
        }
    }

    pub fn contains(&self, op: Operator) -> bool {
        let bit = Self::bit(op);
        bit != 0 && self.bits & bit != 0
    }

    pub fn insert(&mut self, op: Operator) {
        self.bits |= Self::bit(op);
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Operator> + '_ {
        Operator::BINARY.into_iter().filter(|op| self.contains(*op))
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        let mut set = OperatorSet { bits: 0 };
        for op in iter {
            set.insert(op);
        }
        set
    }
}

impl FromStr for OperatorSet {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = OperatorSet { bits: 0 };
        for symbol in s.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            let op = Operator::from_symbol(symbol)
                .ok_or_else(|| SolverError::InvalidOperators(s.to_string()))?;
            set.insert(op);
        }
        if set.is_empty() {
            return Err(SolverError::InvalidOperators(s.to_string()));
        }
        Ok(set)
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for op in [
            Operator::Plus,
            Operator::Minus,
            Operator::Times,
            Operator::Divide,
        ] {
            if self.contains(op) {
                write!(f, "{}", op)?;
            }
        }
        Ok(())
    }
}

/// When the search may stop once the target is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopPolicy {
    /// Stop when the target itself is extracted from the frontier. Extraction
    /// order is non-decreasing in cost, so that node is minimal.
    #[default]
    FirstClosed,
    /// Keep expanding while some open node could still combine into a
    /// strictly shorter expression, i.e. while `best > level + 1`.
    ProvenOptimal,
}

/// Configuration for a search
#[derive(Debug, Clone)]
pub struct SearchConfig<N> {
    pub window: RelevanceWindow<N>,
    pub operators: OperatorSet,
    pub stop: StopPolicy,
    pub frontier: FrontierKind,
    /// Expansions before the first progress report
    pub progress_every: usize,
    /// Each later report threshold is the previous one times `.0 / .1`,
    /// and always at least one more
    pub progress_growth: (usize, usize),
}

impl<N: Numeric> SearchConfig<N> {
    /// Defaults, with the relevance window derived from the seeds
    pub fn for_seeds(seeds: &[N]) -> Self {
        Self {
            window: RelevanceWindow::for_seeds(seeds),
            operators: OperatorSet::all(),
            stop: StopPolicy::default(),
            frontier: FrontierKind::default(),
            progress_every: FIRST_PROGRESS_REPORT,
            progress_growth: (PROGRESS_GROWTH_NUM, PROGRESS_GROWTH_DEN),
        }
    }

    pub fn with_window(mut self, window: RelevanceWindow<N>) -> Self {
        self.window = window;
        self
    }

    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_stop(mut self, stop: StopPolicy) -> Self {
        self.stop = stop;
        self
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Report after `first` expansions, then after `first * num / den`, and
    /// so on. A zero denominator is treated as one.
    pub fn with_progress_schedule(mut self, first: usize, num: usize, den: usize) -> Self {
        self.progress_every = first;
        self.progress_growth = (num, den);
        self
    }
}

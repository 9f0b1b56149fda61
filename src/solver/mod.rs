pub mod constants;
mod closed;
mod config;
mod core;
mod errors;
mod expand;
mod frontier;
mod heap;
mod level;
mod search;

pub use closed::ClosedSet;
pub use config::{OperatorSet, SearchConfig, StopPolicy};
pub use self::core::ExpressionSolver;
pub use errors::SolverError;
pub use frontier::{Frontier, FrontierKind};
pub use heap::HeapFrontier;
pub use level::LevelFrontier;
pub use search::{Progress, Search, SearchState, SearchStats, Solution};

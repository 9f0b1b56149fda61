use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use minterms::number::{parse_value, parse_values};
use minterms::solver::constants::{DEFAULT_SEEDS, DEFAULT_TARGET};
use minterms::{
    ExpressionSolver, FrontierKind, Notation, Numeric, OperatorSet, SolverError, StopPolicy,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Arithmetic used by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DomainArg {
    /// 64-bit integers, exact division only
    Integer,
    /// Doubles, compared bit for bit
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrontierArg {
    Heap,
    Level,
}

impl From<FrontierArg> for FrontierKind {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::Heap => FrontierKind::Heap,
            FrontierArg::Level => FrontierKind::Level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StopArg {
    /// Stop when the target is expanded
    FirstClosed,
    /// Stop when no open value could still lead to a shorter expression
    ProvenOptimal,
}

impl From<StopArg> for StopPolicy {
    fn from(arg: StopArg) -> Self {
        match arg {
            StopArg::FirstClosed => StopPolicy::FirstClosed,
            StopArg::ProvenOptimal => StopPolicy::ProvenOptimal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotationArg {
    /// Fully parenthesized infix
    Infix,
    /// Reverse Polish notation
    Postfix,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Infix => Notation::Infix,
            NotationArg::Postfix => Notation::Postfix,
        }
    }
}

/// Minterms - find the expression with the fewest terms for a number
#[derive(Parser, Debug)]
#[command(name = "minterms")]
#[command(
    about = "Find the arithmetic expression with the fewest seed occurrences that evaluates to a target"
)]
#[command(version)]
pub struct CliArgs {
    /// Target values to build
    #[arg(default_value = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub targets: Vec<String>,

    /// Seed constant, repeat for several
    #[arg(short, long = "seed", default_values = DEFAULT_SEEDS, allow_hyphen_values = true)]
    pub seeds: Vec<String>,

    /// Numeric domain
    #[arg(short, long, value_enum, default_value = "integer")]
    pub domain: DomainArg,

    /// Drop values whose magnitude is not above this (exclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub min_relevant: Option<String>,

    /// Drop values whose magnitude is not below this (exclusive)
    #[arg(long)]
    pub max_relevant: Option<String>,

    /// Operators to combine values with
    #[arg(long, default_value = "+-*/")]
    pub ops: String,

    /// Open set implementation
    #[arg(long, value_enum, default_value = "heap")]
    pub frontier: FrontierArg,

    /// When to stop once the target has been seen
    #[arg(long, value_enum, default_value = "first-closed")]
    pub stop: StopArg,

    /// Output notation
    #[arg(short, long, value_enum, default_value = "infix")]
    pub notation: NotationArg,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Build a solver for domain `N` from the command line
pub fn build_solver<N: Numeric>(args: &CliArgs) -> Result<ExpressionSolver<N>> {
    let mut solver = ExpressionSolver::<N>::parse(&args.seeds).context("Invalid seed")?;
    let operators: OperatorSet = args.ops.parse().context("Invalid --ops")?;

    let config = solver.config_mut();
    config.operators = operators;
    config.frontier = args.frontier.into();
    config.stop = args.stop.into();

    if let Some(raw) = &args.min_relevant {
        config.window.min = Some(parse_value(raw).context("Invalid --min-relevant")?);
    }
    if let Some(raw) = &args.max_relevant {
        config.window.max = Some(parse_value(raw).context("Invalid --max-relevant")?);
    }

    Ok(solver)
}

fn solve_targets<N: Numeric>(args: &CliArgs) -> Result<()> {
    let solver = build_solver::<N>(args)?;
    let targets = parse_values::<N>(&args.targets).context("Invalid target")?;
    let notation = Notation::from(args.notation);

    info!(
        "Searching {} target(s) from seeds {:?}",
        targets.len(),
        solver.seeds()
    );

    let mut unsolved = Vec::new();
    for (target, result) in targets.iter().zip(solver.solve_all(&targets)) {
        match result {
            Ok(solution) => {
                println!(
                    "{} = {}  ({} terms)",
                    target,
                    solution.render(notation),
                    solution.cost
                );
            }
            Err(err @ SolverError::SearchExhausted { .. }) => {
                warn!("{}", err);
                println!("{} = unknown", target);
                unsolved.push(target.to_string());
            }
            Err(err) => return Err(err.into()),
        }
    }

    if !unsolved.is_empty() {
        bail!("No expression found for {}", unsolved.join(", "));
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    match args.domain {
        DomainArg::Integer => solve_targets::<i64>(&args),
        DomainArg::Float => solve_targets::<f64>(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        match CliArgs::try_parse_from(argv) {
            Ok(args) => args,
            Err(e) => panic!("{:?} rejected: {}", argv, e),
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["minterms"]);
        assert_eq!(args.targets, vec!["2017"]);
        assert_eq!(args.seeds, vec!["69", "420"]);
        assert_eq!(args.domain, DomainArg::Integer);
        assert_eq!(args.ops, "+-*/");
        assert_eq!(args.frontier, FrontierArg::Heap);
        assert_eq!(args.stop, StopArg::FirstClosed);
        assert_eq!(args.notation, NotationArg::Infix);
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_full_command_line() {
        let args = parse(&[
            "minterms",
            "14",
            "15",
            "-s",
            "2",
            "--seed",
            "-3",
            "--domain",
            "float",
            "--ops",
            "+-",
            "--frontier",
            "level",
            "--stop",
            "proven-optimal",
            "-n",
            "postfix",
        ]);
        assert_eq!(args.targets, vec!["14", "15"]);
        assert_eq!(args.seeds, vec!["2", "-3"]);
        assert_eq!(args.domain, DomainArg::Float);
        assert_eq!(FrontierKind::from(args.frontier), FrontierKind::Level);
        assert_eq!(StopPolicy::from(args.stop), StopPolicy::ProvenOptimal);
        assert_eq!(Notation::from(args.notation), Notation::Postfix);
    }

    #[test]
    fn test_build_solver_applies_window_overrides() {
        let args = parse(&[
            "minterms",
            "7",
            "-s",
            "2",
            "--min-relevant",
            "1",
            "--max-relevant",
            "10",
            "--ops",
            "+-*",
        ]);
        let solver = build_solver::<i64>(&args);
        assert!(solver.is_ok());
        if let Ok(solver) = solver {
            assert_eq!(solver.seeds(), &[2]);
            assert_eq!(solver.config().window.min, Some(1));
            assert_eq!(solver.config().window.max, Some(10));
            assert_eq!(solver.config().operators.to_string(), "+-*");
        }
    }

    #[test]
    fn test_build_solver_rejects_bad_input() {
        let args = parse(&["minterms", "-s", "abc"]);
        let result = build_solver::<i64>(&args);
        assert!(matches!(
            result.as_ref().err().and_then(|e| e.downcast_ref::<SolverError>()),
            Some(SolverError::NumberError(_))
        ));

        let args = parse(&["minterms", "-s", "1.5"]);
        assert!(build_solver::<i64>(&args).is_err());
        assert!(build_solver::<f64>(&args).is_ok());

        let args = parse(&["minterms", "--ops", "+^"]);
        assert!(build_solver::<i64>(&args).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}

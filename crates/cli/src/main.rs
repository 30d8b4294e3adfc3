mod commands;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use spinbench_eval::histogram::DEFAULT_BINS;
use spinbench_shared::config::{
    EvaluationConfig, InstanceLayout, SolverParams, BASELINE_BETA0, BASELINE_BETA1,
    BASELINE_INSTANCES, BASELINE_REPETITIONS, BASELINE_STEPS, DEFAULT_PREFIX, DEFAULT_ROOT,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spinbench", about = "Spin-glass solver success-probability benchmark")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the solver on every instance and write result files
    Solve {
        #[command(flatten)]
        solver: SolverArgs,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Compute per-instance success probabilities from existing result files
    Evaluate {
        #[command(flatten)]
        layout: LayoutArgs,
        #[command(flatten)]
        eval: EvalArgs,
    },
    /// Solve, then evaluate
    Run {
        #[command(flatten)]
        solver: SolverArgs,
        #[command(flatten)]
        layout: LayoutArgs,
        #[command(flatten)]
        eval: EvalArgs,
    },
}

#[derive(Args)]
struct SolverArgs {
    /// Path to the solver executable
    #[arg(long)]
    solver: PathBuf,
    /// Monte Carlo sweeps per repetition
    #[arg(long, default_value_t = BASELINE_STEPS)]
    steps: u64,
    /// Starting inverse temperature
    #[arg(long, default_value_t = BASELINE_BETA0)]
    beta0: f64,
    /// Ending inverse temperature
    #[arg(long, default_value_t = BASELINE_BETA1)]
    beta1: f64,
    /// Repetitions per instance
    #[arg(long, default_value_t = BASELINE_REPETITIONS)]
    repetitions: u64,
    /// Concurrent solver processes
    #[arg(long, default_value = "1")]
    solver_workers: usize,
}

impl SolverArgs {
    fn params(&self) -> SolverParams {
        SolverParams {
            steps: self.steps,
            beta0: self.beta0,
            beta1: self.beta1,
            repetitions: self.repetitions,
        }
    }
}

#[derive(Args)]
struct LayoutArgs {
    /// Test-set directory holding lattice/, results/ and the ground-truth file
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: PathBuf,
    /// File name prefix, followed by the instance index
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,
    /// Ground-truth file name inside the root (default: GroundStateEnergy128Spins.txt)
    #[arg(long)]
    ground_truth: Option<String>,
    /// Number of instances
    #[arg(long, default_value_t = BASELINE_INSTANCES)]
    instances: usize,
}

impl LayoutArgs {
    fn layout(&self) -> InstanceLayout {
        let mut layout = InstanceLayout::with_root(&self.root);
        layout.prefix = self.prefix.clone();
        if let Some(file) = &self.ground_truth {
            layout.ground_truth_file = file.clone();
        }
        layout
    }
}

#[derive(Args)]
struct EvalArgs {
    /// Denominator for every instance (default: repetitions in instance 0)
    #[arg(long)]
    repetition_count: Option<usize>,
    /// Number of parallel loaders (0 = auto)
    #[arg(long, default_value = "0")]
    workers: usize,
    /// Histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,
    /// Write probabilities, one per line in instance order, to this file
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl EvalArgs {
    fn config(&self, instances: usize) -> EvaluationConfig {
        EvaluationConfig {
            instances,
            repetition_count: self.repetition_count,
            workers: if self.workers == 0 { None } else { Some(self.workers) },
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Solve { solver, layout } => commands::solve::run(
            &solver.solver,
            solver.params(),
            &layout.layout(),
            layout.instances,
            solver.solver_workers,
        )
        .map(|_| ()),
        Commands::Evaluate { layout, eval } => commands::evaluate::run(
            &layout.layout(),
            &eval.config(layout.instances),
            eval.bins,
            eval.output.as_deref(),
        ),
        Commands::Run {
            solver,
            layout,
            eval,
        } => commands::run::run(
            &solver.solver,
            solver.params(),
            &layout.layout(),
            &eval.config(layout.instances),
            solver.solver_workers,
            eval.bins,
            eval.output.as_deref(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_takes_solver_workers() {
        let cli = Cli::try_parse_from([
            "spinbench",
            "solve",
            "--solver",
            "bin/main",
            "--solver-workers",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Solve { solver, layout } => {
                assert_eq!(solver.solver_workers, 3);
                assert_eq!(solver.params(), SolverParams::default());
                assert_eq!(layout.instances, BASELINE_INSTANCES);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn run_keeps_solver_and_loader_workers_apart() {
        let cli = Cli::try_parse_from([
            "spinbench",
            "run",
            "--solver",
            "bin/main",
            "--solver-workers",
            "2",
            "--workers",
            "6",
            "--instances",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                solver,
                layout,
                eval,
            } => {
                assert_eq!(solver.solver_workers, 2);
                let config = eval.config(layout.instances);
                assert_eq!(config.workers, Some(6));
                assert_eq!(config.instances, 5);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn zero_loader_workers_means_auto() {
        let cli = Cli::try_parse_from(["spinbench", "evaluate"]).unwrap();
        match cli.command {
            Commands::Evaluate { layout, eval } => {
                assert_eq!(eval.config(layout.instances).workers, None);
                assert_eq!(eval.bins, DEFAULT_BINS);
            }
            _ => panic!("expected evaluate"),
        }
    }
}

use std::path::Path;

use spinbench_eval::runner::{self, SolveSummary};
use spinbench_executor::{SolverBinary, SolverExecutor};
use spinbench_shared::config::{InstanceLayout, SolverParams};

use crate::output;

pub fn run(
    solver_path: &Path,
    params: SolverParams,
    layout: &InstanceLayout,
    instances: usize,
    workers: usize,
) -> anyhow::Result<SolveSummary> {
    let binary = SolverBinary::locate(solver_path)?;
    let executor = SolverExecutor::new(binary, params);

    println!(
        "Solving {} instances ({} sweeps, beta {} -> {}, {} repetitions)...",
        instances,
        executor.params().steps,
        executor.params().beta0,
        executor.params().beta1,
        executor.params().repetitions,
    );

    let workers = if workers == 0 { None } else { Some(workers) };
    let summary = runner::run_solver_batch(&executor, layout, instances, workers)?;
    output::print_solve_summary(&summary, &layout.results_dir());
    Ok(summary)
}

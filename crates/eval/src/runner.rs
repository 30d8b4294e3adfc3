use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use spinbench_executor::SolverExecutor;
use spinbench_shared::config::{EvaluationConfig, InstanceLayout};
use spinbench_shared::result::{RunResult, SuccessReport};

use crate::error::EvalError;
use crate::evaluator::{check_coverage, SuccessEvaluator};
use crate::ground_truth::load_ground_truth;
use crate::results::load_run_result;

fn build_pool(n_workers: Option<usize>) -> anyhow::Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?)
}

/// Loads result files in parallel. Output order is the order of `paths`.
///
/// Stops at the first failure. When several files are bad, the reported
/// error is whichever a worker hit first, not necessarily the lowest
/// instance index, so it can differ between runs.
pub fn load_results(paths: &[PathBuf], n_workers: Option<usize>) -> anyhow::Result<Vec<RunResult>> {
    let pool = build_pool(n_workers)?;
    let results: Result<Vec<RunResult>, EvalError> =
        pool.install(|| paths.par_iter().map(load_run_result).collect());
    Ok(results?)
}

/// Success probability of every instance whose result file is listed in
/// `result_paths` (instance `i` is `result_paths[i]`).
///
/// Ground truth is loaded and checked for coverage before any result file is read.
pub fn evaluate(
    ground_truth_path: &Path,
    result_paths: &[PathBuf],
    config: &EvaluationConfig,
) -> anyhow::Result<SuccessReport> {
    let ground_truth = load_ground_truth(ground_truth_path)?;
    check_coverage(ground_truth.len(), result_paths.len())?;

    let runs = load_results(result_paths, config.workers)?;
    let evaluator = match config.repetition_count {
        Some(n) => SuccessEvaluator::new(n),
        None => SuccessEvaluator::from_first_instance(&runs),
    };
    tracing::info!(
        instances = runs.len(),
        repetition_count = evaluator.repetition_count(),
        "evaluating success probabilities"
    );

    Ok(evaluator.evaluate(&ground_truth, &runs)?)
}

/// Evaluates instances `0..config.instances` of `layout`.
pub fn evaluate_layout(
    layout: &InstanceLayout,
    config: &EvaluationConfig,
) -> anyhow::Result<SuccessReport> {
    evaluate(
        &layout.ground_truth_path(),
        &layout.result_paths(config.instances),
        config,
    )
}

#[derive(Debug, Clone)]
pub struct SolveSummary {
    pub instances: usize,
    pub elapsed: Duration,
}

/// Runs the solver for instances `0..instances`, writing each result file
/// into the layout's results directory. Stops at the first failure.
pub fn run_solver_batch(
    executor: &SolverExecutor,
    layout: &InstanceLayout,
    instances: usize,
    n_workers: Option<usize>,
) -> anyhow::Result<SolveSummary> {
    let results_dir = layout.results_dir();
    std::fs::create_dir_all(&results_dir).map_err(|e| EvalError::io(&results_dir, e))?;

    let pool = build_pool(Some(n_workers.unwrap_or(1)))?;
    let start = Instant::now();
    let outcome: Result<(), _> = pool.install(|| {
        (0..instances).into_par_iter().try_for_each(|i| {
            tracing::info!(instance = i, "solving");
            executor.execute(&layout.lattice_path(i), &layout.result_path(i))
        })
    });
    outcome?;

    Ok(SolveSummary {
        instances,
        elapsed: start.elapsed(),
    })
}

use std::path::Path;

use spinbench_shared::config::{EvaluationConfig, InstanceLayout, SolverParams};

use super::{evaluate, solve};

pub fn run(
    solver_path: &Path,
    params: SolverParams,
    layout: &InstanceLayout,
    config: &EvaluationConfig,
    solver_workers: usize,
    bins: usize,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    solve::run(solver_path, params, layout, config.instances, solver_workers)?;
    evaluate::run(layout, config, bins, out)
}

use std::fs;
use std::path::Path;

use anyhow::Context;
use spinbench_eval::histogram::Histogram;
use spinbench_eval::runner;
use spinbench_shared::config::{EvaluationConfig, InstanceLayout};
use spinbench_shared::result::SuccessReport;

use crate::output;

pub fn run(
    layout: &InstanceLayout,
    config: &EvaluationConfig,
    bins: usize,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    println!(
        "Evaluating {} instances against {}...",
        config.instances,
        layout.ground_truth_path().display(),
    );

    let start = std::time::Instant::now();
    let report = runner::evaluate_layout(layout, config)?;
    let elapsed = start.elapsed();

    output::print_report(&report, elapsed);
    output::print_histogram(&Histogram::from_values(&report.probabilities, bins));

    if let Some(path) = out {
        write_probabilities(&report, path)?;
        println!("\nProbabilities written to {}", path.display());
    }
    Ok(())
}

/// One probability per line, in instance order.
pub fn write_probabilities(report: &SuccessReport, path: &Path) -> anyhow::Result<()> {
    let body: String = report
        .probabilities
        .iter()
        .map(|p| format!("{}\n", p))
        .collect();
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))
}

use std::path::Path;
use std::time::Duration;

use spinbench_eval::histogram::Histogram;
use spinbench_eval::runner::SolveSummary;
use spinbench_shared::result::SuccessReport;

const BAR_WIDTH: usize = 40;

pub fn print_solve_summary(summary: &SolveSummary, results_dir: &Path) {
    println!("\n========================================");
    println!("  Instances:   {}", summary.instances);
    println!("  Time:        {:.2}s", summary.elapsed.as_secs_f64());
    println!("  Results:     {}", results_dir.display());
    println!("========================================");
}

pub fn print_report(report: &SuccessReport, elapsed: Duration) {
    println!("\n========================================");
    println!("  Instances:      {}", report.n_instances());
    println!("  Repetitions:    {}", report.repetition_count);
    println!("  Time:           {:.2}s", elapsed.as_secs_f64());
    println!("  Mean P(ground): {:.4}", report.mean());
    if let (Some(min), Some(max)) = (report.min(), report.max()) {
        println!("  Min / max:      {:.4} / {:.4}", min, max);
    }
    println!("  Always solved:  {}", report.n_always_solved());
    println!("  Never solved:   {}", report.n_never_solved());
    println!("========================================");
}

/// Bars are scaled by log10(count + 1), matching a log y-axis.
pub fn print_histogram(hist: &Histogram) {
    println!("\nSuccess probability histogram (log count):");
    for line in histogram_lines(hist) {
        println!("{}", line);
    }
}

/// The last bin is closed on the right, every other bin is half-open.
fn histogram_lines(hist: &Histogram) -> Vec<String> {
    let scale = |c: usize| ((c + 1) as f64).log10();
    let peak = hist.counts.iter().copied().map(scale).fold(0.0, f64::max);
    let last = hist.bins().saturating_sub(1);

    hist.iter()
        .enumerate()
        .map(|(i, (lo, hi, count))| {
            let len = if peak > 0.0 {
                (scale(count) / peak * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let close = if i == last { ']' } else { ')' };
            format!(
                "  [{:.3}, {:.3}{} {:>6} {}",
                lo,
                hi,
                close,
                count,
                "#".repeat(len)
            )
        })
        .collect()
}

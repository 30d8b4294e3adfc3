use spinbench_shared::result::{RunResult, SuccessReport};

use crate::error::EvalError;

/// Turns per-instance run results into success probabilities.
///
/// Every instance is normalised by the same `repetition_count`, even when its
/// own result holds a different number of repetitions. A length mismatch is
/// logged but never changes the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessEvaluator {
    repetition_count: usize,
}

impl SuccessEvaluator {
    pub fn new(repetition_count: usize) -> Self {
        Self { repetition_count }
    }

    /// Captures the denominator from instance 0 (zero when there are no instances).
    pub fn from_first_instance(runs: &[RunResult]) -> Self {
        Self::new(runs.first().map_or(0, RunResult::len))
    }

    pub fn repetition_count(&self) -> usize {
        self.repetition_count
    }

    /// `successCount / repetition_count` as a float.
    pub fn success_probability(&self, ground_energy: i64, run: &RunResult) -> f64 {
        run.success_count(ground_energy) as f64 / self.repetition_count as f64
    }

    /// Evaluates instances `0..runs.len()`, aligned index-for-index with `ground_truth`.
    pub fn evaluate(
        &self,
        ground_truth: &[i64],
        runs: &[RunResult],
    ) -> Result<SuccessReport, EvalError> {
        check_coverage(ground_truth.len(), runs.len())?;
        if self.repetition_count == 0 && !runs.is_empty() {
            return Err(EvalError::NoRepetitions);
        }

        let probabilities = runs
            .iter()
            .zip(ground_truth)
            .enumerate()
            .map(|(instance, (run, &ground_energy))| {
                if run.len() != self.repetition_count {
                    tracing::warn!(
                        instance,
                        repetitions = run.len(),
                        repetition_count = self.repetition_count,
                        "repetitions differ from the shared repetition count"
                    );
                }
                self.success_probability(ground_energy, run)
            })
            .collect();

        Ok(SuccessReport {
            probabilities,
            repetition_count: self.repetition_count,
        })
    }
}

/// Fails with `IndexMismatch` when fewer ground energies than instances are available.
pub fn check_coverage(available: usize, requested: usize) -> Result<(), EvalError> {
    if available < requested {
        return Err(EvalError::IndexMismatch {
            requested,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(energies: &[&[i64]]) -> Vec<RunResult> {
        energies.iter().map(|e| RunResult::new(e.to_vec())).collect()
    }

    #[test]
    fn two_instance_scenario() {
        let ground_truth = [-10, -20];
        let runs = runs(&[&[-10, -10, -5, -10], &[-20, -20, -20, -20]]);
        let evaluator = SuccessEvaluator::from_first_instance(&runs);
        assert_eq!(evaluator.repetition_count(), 4);

        let report = evaluator.evaluate(&ground_truth, &runs).unwrap();
        assert_eq!(report.probabilities, vec![0.75, 1.0]);
        assert_eq!(report.repetition_count, 4);
    }

    #[test]
    fn shorter_instance_uses_shared_denominator() {
        let ground_truth = [-10, -20];
        let runs = runs(&[&[-10, -10, -5, -10], &[-20, -20]]);
        let report = SuccessEvaluator::from_first_instance(&runs)
            .evaluate(&ground_truth, &runs)
            .unwrap();
        assert_eq!(report.probabilities[1], 0.5);
    }

    #[test]
    fn longer_instance_is_not_clamped() {
        let ground_truth = [-1, -2];
        let runs = runs(&[&[-1, 0], &[-2, -2, -2]]);
        let report = SuccessEvaluator::from_first_instance(&runs)
            .evaluate(&ground_truth, &runs)
            .unwrap();
        assert_eq!(report.probabilities, vec![0.5, 1.5]);
    }

    #[test]
    fn explicit_repetition_count_overrides_capture() {
        let ground_truth = [-1];
        let runs = runs(&[&[-1, -1]]);
        let report = SuccessEvaluator::new(8)
            .evaluate(&ground_truth, &runs)
            .unwrap();
        assert_eq!(report.probabilities, vec![0.25]);
    }

    #[test]
    fn empty_later_instance_scores_zero() {
        let ground_truth = [-1, -2];
        let runs = runs(&[&[-1, -1], &[]]);
        let report = SuccessEvaluator::from_first_instance(&runs)
            .evaluate(&ground_truth, &runs)
            .unwrap();
        assert_eq!(report.probabilities, vec![1.0, 0.0]);
    }

    #[test]
    fn extra_ground_truth_entries_are_ignored() {
        let ground_truth = [-1, -2, -3];
        let runs = runs(&[&[-1, 0]]);
        let report = SuccessEvaluator::from_first_instance(&runs)
            .evaluate(&ground_truth, &runs)
            .unwrap();
        assert_eq!(report.probabilities, vec![0.5]);
    }

    #[test]
    fn short_ground_truth_is_index_mismatch() {
        let ground_truth = [-1];
        let runs = runs(&[&[-1], &[-2]]);
        let err = SuccessEvaluator::from_first_instance(&runs)
            .evaluate(&ground_truth, &runs)
            .unwrap_err();
        assert!(matches!(
            err,
            EvalError::IndexMismatch {
                requested: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn empty_first_instance_has_no_repetitions() {
        let ground_truth = [-1, -2];
        let runs = runs(&[&[], &[-2]]);
        let err = SuccessEvaluator::from_first_instance(&runs)
            .evaluate(&ground_truth, &runs)
            .unwrap_err();
        assert!(matches!(err, EvalError::NoRepetitions));
    }

    #[test]
    fn no_instances_is_an_empty_report() {
        let report = SuccessEvaluator::from_first_instance(&[])
            .evaluate(&[], &[])
            .unwrap();
        assert!(report.probabilities.is_empty());
    }
}

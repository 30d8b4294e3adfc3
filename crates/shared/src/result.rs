/// Run parameters the solver records in the first comment line of a result file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunHeader {
    pub infile: Option<String>,
    pub steps: Option<u64>,
    pub beta0: Option<f64>,
    pub beta1: Option<f64>,
    pub repetitions: Option<u64>,
}

/// Achieved energies of one instance, one per repetition, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    pub energies: Vec<i64>,
    pub header: Option<RunHeader>,
}

impl RunResult {
    pub fn new(energies: Vec<i64>) -> Self {
        Self {
            energies,
            header: None,
        }
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Repetitions that reached `ground_energy` exactly.
    pub fn success_count(&self, ground_energy: i64) -> usize {
        self.energies.iter().filter(|&&e| e == ground_energy).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuccessReport {
    /// One value per instance, in instance order.
    pub probabilities: Vec<f64>,
    /// Denominator shared by every instance.
    pub repetition_count: usize,
}

impl SuccessReport {
    pub fn n_instances(&self) -> usize {
        self.probabilities.len()
    }

    pub fn mean(&self) -> f64 {
        if self.probabilities.is_empty() {
            0.0
        } else {
            self.probabilities.iter().sum::<f64>() / self.probabilities.len() as f64
        }
    }

    pub fn min(&self) -> Option<f64> {
        self.probabilities.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.probabilities.iter().copied().reduce(f64::max)
    }

    pub fn n_always_solved(&self) -> usize {
        self.probabilities.iter().filter(|&&p| p == 1.0).count()
    }

    pub fn n_never_solved(&self) -> usize {
        self.probabilities.iter().filter(|&&p| p == 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_count_uses_exact_equality() {
        let run = RunResult::new(vec![-10, -10, -5, -10, -9]);
        assert_eq!(run.success_count(-10), 3);
        assert_eq!(run.success_count(-11), 0);
        assert_eq!(RunResult::default().success_count(-10), 0);
    }

    #[test]
    fn report_summaries() {
        let report = SuccessReport {
            probabilities: vec![0.75, 1.0, 0.0, 0.25],
            repetition_count: 4,
        };
        assert_eq!(report.n_instances(), 4);
        assert!((report.mean() - 0.5).abs() < 1e-12);
        assert_eq!(report.min(), Some(0.0));
        assert_eq!(report.max(), Some(1.0));
        assert_eq!(report.n_always_solved(), 1);
        assert_eq!(report.n_never_solved(), 1);
    }

    #[test]
    fn empty_report() {
        let report = SuccessReport {
            probabilities: Vec::new(),
            repetition_count: 0,
        };
        assert_eq!(report.mean(), 0.0);
        assert_eq!(report.min(), None);
    }
}

use std::path::{Path, PathBuf};

// Baseline solver parameters
pub const BASELINE_STEPS: u64 = 10_000;
pub const BASELINE_BETA0: f64 = 0.1; // starting inverse temperature
pub const BASELINE_BETA1: f64 = 3.0; // ending inverse temperature
pub const BASELINE_REPETITIONS: u64 = 100;
pub const BASELINE_INSTANCES: usize = 1_000;

// Default on-disk layout of the 128-spin test set
pub const DEFAULT_ROOT: &str = "testdata/Instances128Spins";
pub const DEFAULT_LATTICE_DIR: &str = "lattice";
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_PREFIX: &str = "128random";
pub const DEFAULT_LATTICE_EXTENSION: &str = "lat";
pub const DEFAULT_RESULT_EXTENSION: &str = "dat";
pub const DEFAULT_GROUND_TRUTH_FILE: &str = "GroundStateEnergy128Spins.txt";

/// Numeric run parameters handed to the solver, in its positional order.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParams {
    /// Monte Carlo sweeps per repetition.
    pub steps: u64,
    pub beta0: f64,
    pub beta1: f64,
    pub repetitions: u64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            steps: BASELINE_STEPS,
            beta0: BASELINE_BETA0,
            beta1: BASELINE_BETA1,
            repetitions: BASELINE_REPETITIONS,
        }
    }
}

impl SolverParams {
    /// Trailing positional arguments: steps, beta0, beta1, repetitions.
    pub fn to_args(&self) -> [String; 4] {
        [
            self.steps.to_string(),
            self.beta0.to_string(),
            self.beta1.to_string(),
            self.repetitions.to_string(),
        ]
    }
}

/// Naming convention for lattice, result and ground-truth files.
///
/// Instance `i` lives at `<root>/<lattice_dir>/<prefix><i>.<lattice_extension>`
/// and its results at `<root>/<results_dir>/<prefix><i>.<result_extension>`.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceLayout {
    pub root: PathBuf,
    pub lattice_dir: String,
    pub results_dir: String,
    pub prefix: String,
    pub lattice_extension: String,
    pub result_extension: String,
    pub ground_truth_file: String,
}

impl Default for InstanceLayout {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }
}

impl InstanceLayout {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lattice_dir: DEFAULT_LATTICE_DIR.to_string(),
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            lattice_extension: DEFAULT_LATTICE_EXTENSION.to_string(),
            result_extension: DEFAULT_RESULT_EXTENSION.to_string(),
            ground_truth_file: DEFAULT_GROUND_TRUTH_FILE.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn results_dir(&self) -> PathBuf {
        self.root.join(&self.results_dir)
    }

    pub fn lattice_path(&self, instance: usize) -> PathBuf {
        self.root.join(&self.lattice_dir).join(format!(
            "{}{}.{}",
            self.prefix, instance, self.lattice_extension
        ))
    }

    pub fn result_path(&self, instance: usize) -> PathBuf {
        self.results_dir().join(format!(
            "{}{}.{}",
            self.prefix, instance, self.result_extension
        ))
    }

    pub fn result_paths(&self, instances: usize) -> Vec<PathBuf> {
        (0..instances).map(|i| self.result_path(i)).collect()
    }

    pub fn ground_truth_path(&self) -> PathBuf {
        self.root.join(&self.ground_truth_file)
    }
}

/// Settings for one success-probability evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Number of instances to evaluate, `0..instances`.
    pub instances: usize,
    /// Denominator for every instance. `None` captures it from instance 0.
    pub repetition_count: Option<usize>,
    /// Loader threads (`None` = auto).
    pub workers: Option<usize>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            instances: BASELINE_INSTANCES,
            repetition_count: None,
            workers: None,
        }
    }
}

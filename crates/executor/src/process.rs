use std::path::Path;
use std::process::{Command, Stdio};

use spinbench_shared::config::SolverParams;

use crate::loader::{ExecutorError, SolverBinary};

/// Runs the external solver once per instance:
/// `<solver> <input> <output> <steps> <beta0> <beta1> <repetitions>`.
#[derive(Debug, Clone)]
pub struct SolverExecutor {
    binary: SolverBinary,
    params: SolverParams,
}

impl SolverExecutor {
    pub fn new(binary: SolverBinary, params: SolverParams) -> Self {
        Self { binary, params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(self.binary.path());
        cmd.arg(input).arg(output).args(self.params.to_args());
        cmd
    }

    /// Blocks until the solver exits. Solver stdout is discarded; stderr is inherited.
    pub fn execute(&self, input: &Path, output: &Path) -> Result<(), ExecutorError> {
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "invoking solver"
        );
        let status = self
            .command(input, output)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ExecutorError::Spawn {
                input: input.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(ExecutorError::Failed {
                input: input.to_path_buf(),
                status,
            });
        }
        Ok(())
    }
}

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("Solver executable not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Solver path is not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Failed to spawn solver for {}: {source}", .input.display())]
    Spawn {
        input: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Solver exited with {status} for {}", .input.display())]
    Failed { input: PathBuf, status: ExitStatus },
}

/// Path to an external solver executable that was present when located.
#[derive(Debug, Clone)]
pub struct SolverBinary {
    path: PathBuf,
}

impl SolverBinary {
    pub fn locate(path: impl AsRef<Path>) -> Result<Self, ExecutorError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExecutorError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(ExecutorError::NotAFile(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_missing_binary() {
        let err = SolverBinary::locate("/definitely/not/here/solver").unwrap_err();
        assert!(matches!(err, ExecutorError::NotFound(_)));
        assert!(err.to_string().contains("/definitely/not/here/solver"));
    }

    #[test]
    fn locate_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = SolverBinary::locate(dir.path()).unwrap_err();
        assert!(matches!(err, ExecutorError::NotAFile(_)));
    }

    #[test]
    fn locate_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver");
        std::fs::write(&path, "").unwrap();
        let binary = SolverBinary::locate(&path).unwrap();
        assert_eq!(binary.path(), path.as_path());
    }
}

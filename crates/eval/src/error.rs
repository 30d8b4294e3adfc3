use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("Parse error at {}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number within the file.
        line: usize,
        reason: String,
    },
    #[error("Ground truth has {available} entries but {requested} instances were requested")]
    IndexMismatch { requested: usize, available: usize },
    #[error("Repetition count is zero; no success probability can be formed")]
    NoRepetitions,
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EvalError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn parse(path: &Path, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

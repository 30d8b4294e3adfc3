pub mod loader;
pub mod process;

pub use loader::{ExecutorError, SolverBinary};
pub use process::SolverExecutor;

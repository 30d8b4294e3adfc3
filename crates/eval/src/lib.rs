pub mod error;
pub mod evaluator;
pub mod ground_truth;
pub mod histogram;
mod input;
pub mod results;
pub mod runner;

pub use error::EvalError;
pub use evaluator::SuccessEvaluator;
pub use ground_truth::load_ground_truth;
pub use results::load_run_result;

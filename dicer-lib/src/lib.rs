pub mod command;
mod constant;
pub mod error;
mod evaluator;
pub mod options;
mod parser;
pub mod roll;
pub mod solver;
pub mod throttle;

pub use constant::DEFAULT_COMMAND;

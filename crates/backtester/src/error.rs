// In crates/backtester/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] core_types::Error),

    #[error("Trade execution failed: {0}")]
    Execution(#[from] execution::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

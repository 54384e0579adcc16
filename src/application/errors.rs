//! Application layer errors

use thiserror::Error;
use crate::application::services::invoker::Slot;

/// General application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Command execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("No command assigned to slot {0}")]
    EmptySlot(Slot),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

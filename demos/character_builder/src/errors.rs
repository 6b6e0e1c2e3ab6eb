// demos/character_builder/src/errors.rs

use stepwise::StepwiseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Invalid command: {0}")]
  Command(String),

  #[error("Wizard Error: {source}")]
  Wizard {
    #[from]
    source: StepwiseError,
  },

  #[error("Console I/O Error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

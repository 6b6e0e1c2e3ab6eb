// stepwise/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors raised around the navigation engine.
///
/// Traversal itself never fails: an unresolved cursor or an exhausted scan is
/// represented as `None`. These variants cover registry construction and the
/// navigation side effect performed by a `WizardSession`.
#[derive(Debug, Error)]
pub enum StepwiseError {
  #[error("Step already registered: {step_name}")]
  DuplicateStep { step_name: String },

  #[error("Step names must not be empty")]
  EmptyStepName,

  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Step '{step_name}' cannot be routed: '{location}' does not map back to it")]
  UnroutableStep { step_name: String, location: String },

  #[error("Navigation to step '{step_name}' ({location}) failed. Source: {source}")]
  Navigation {
    step_name: String,
    location: String,
    #[source]
    source: AnyhowError,
  },
}

impl StepwiseError {
  /// Name of the step the error refers to, when there is one.
  pub fn step_name(&self) -> Option<&str> {
    match self {
      StepwiseError::DuplicateStep { step_name }
      | StepwiseError::StepNotFound { step_name }
      | StepwiseError::UnroutableStep { step_name, .. }
      | StepwiseError::Navigation { step_name, .. } => Some(step_name.as_str()),
      StepwiseError::EmptyStepName => None,
    }
  }
}

pub type StepwiseResult<T, E = StepwiseError> = std::result::Result<T, E>;

// stepwise/src/navigation/registry.rs

//! Contains the `StepRegistry<C>` struct and the builder used to assemble it
//! before a wizard session begins.

use crate::core::step::{StepDescriptor, StepPredicate};
use crate::error::{StepwiseError, StepwiseResult};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{event, Level};

/// The ordered list of step descriptors for one wizard session.
///
/// Order is fixed at construction and encodes the domain sequencing. Names
/// are unique. The registry holds no state beyond the descriptors; everything
/// the predicates need comes from the context passed to each query.
pub struct StepRegistry<C: 'static> {
  pub(crate) steps: Vec<StepDescriptor<C>>,
}

impl<C: 'static> StepRegistry<C> {
  /// Creates a registry from an ordered list of descriptors.
  pub fn new(steps: Vec<StepDescriptor<C>>) -> StepwiseResult<Self> {
    validate_names(&steps)?;
    event!(Level::DEBUG, num_steps = steps.len(), context_type = %std::any::type_name::<C>(), "Step registry created.");
    Ok(Self { steps })
  }

  pub fn builder() -> StepRegistryBuilder<C> {
    StepRegistryBuilder::new()
  }

  /// All descriptors in registry order, visible or not.
  pub fn steps(&self) -> &[StepDescriptor<C>] {
    &self.steps
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn get(&self, step_name: &str) -> Option<&StepDescriptor<C>> {
    self.steps.iter().find(|s| s.name == step_name)
  }

  pub fn contains(&self, step_name: &str) -> bool {
    self.get(step_name).is_some()
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.steps.iter().map(|s| s.name.as_str())
  }
}

impl<C: 'static> Clone for StepRegistry<C> {
  fn clone(&self) -> Self {
    Self {
      steps: self.steps.clone(),
    }
  }
}

impl<C: 'static> std::fmt::Debug for StepRegistry<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepRegistry").field("steps", &self.steps).finish()
  }
}

fn validate_names<C: 'static>(steps: &[StepDescriptor<C>]) -> StepwiseResult<()> {
  let mut seen = HashSet::with_capacity(steps.len());
  for step in steps {
    if step.name.trim().is_empty() {
      return Err(StepwiseError::EmptyStepName);
    }
    if !seen.insert(step.name.as_str()) {
      return Err(StepwiseError::DuplicateStep {
        step_name: step.name.clone(),
      });
    }
  }
  Ok(())
}

/// Mutable staging area for a `StepRegistry`.
///
/// Factories can start from a base list of steps and splice in or remove
/// steps before sealing the registry with [`StepRegistryBuilder::build`].
pub struct StepRegistryBuilder<C: 'static> {
  steps: Vec<StepDescriptor<C>>,
}

impl<C: 'static> Default for StepRegistryBuilder<C> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C: 'static> StepRegistryBuilder<C> {
  pub fn new() -> Self {
    Self { steps: Vec::new() }
  }

  /// Appends a step. Name conflicts are reported by `build`.
  pub fn step(&mut self, step: StepDescriptor<C>) -> &mut Self {
    self.steps.push(step);
    self
  }

  fn position(&self, step_name: &str) -> StepwiseResult<usize> {
    self
      .steps
      .iter()
      .position(|s| s.name == step_name)
      .ok_or_else(|| StepwiseError::StepNotFound {
        step_name: step_name.to_string(),
      })
  }

  fn ensure_step_not_exists(&self, step_name: &str) -> StepwiseResult<()> {
    if self.steps.iter().any(|s| s.name == step_name) {
      return Err(StepwiseError::DuplicateStep {
        step_name: step_name.to_string(),
      });
    }
    Ok(())
  }

  pub fn insert_before_step(&mut self, existing_step_name: &str, step: StepDescriptor<C>) -> StepwiseResult<&mut Self> {
    let idx = self.position(existing_step_name)?;
    self.ensure_step_not_exists(&step.name)?;
    self.steps.insert(idx, step);
    Ok(self)
  }

  pub fn insert_after_step(&mut self, existing_step_name: &str, step: StepDescriptor<C>) -> StepwiseResult<&mut Self> {
    let idx = self.position(existing_step_name)?;
    self.ensure_step_not_exists(&step.name)?;
    self.steps.insert(idx + 1, step);
    Ok(self)
  }

  /// Removes a step. Removing a step that isn't present is a no-op; returns
  /// whether anything was removed.
  pub fn remove_step(&mut self, step_name: &str) -> bool {
    match self.steps.iter().position(|s| s.name == step_name) {
      Some(idx) => {
        self.steps.remove(idx);
        true
      }
      None => false,
    }
  }

  /// Replaces the visibility predicate. `None` makes the step always visible.
  pub fn set_visibility(&mut self, step_name: &str, visible_if: Option<StepPredicate<C>>) -> StepwiseResult<&mut Self> {
    let idx = self.position(step_name)?;
    self.steps[idx].visible_if = visible_if;
    Ok(self)
  }

  /// Replaces the skip predicate. `None` means the step is never skipped.
  pub fn set_skip_condition(&mut self, step_name: &str, skip_if: Option<StepPredicate<C>>) -> StepwiseResult<&mut Self> {
    let idx = self.position(step_name)?;
    self.steps[idx].skip_if = skip_if;
    Ok(self)
  }

  pub fn build(self) -> StepwiseResult<StepRegistry<C>> {
    StepRegistry::new(self.steps)
  }
}

/// Shorthand for building a `StepPredicate` from a closure.
pub fn predicate<C: 'static>(f: impl Fn(&C) -> bool + Send + Sync + 'static) -> StepPredicate<C> {
  Arc::new(f)
}

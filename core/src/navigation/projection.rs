// stepwise/src/navigation/projection.rs

//! Derives the active steps of a registry and locates the cursor within them.

use crate::core::step::StepDescriptor;
use crate::navigation::registry::StepRegistry;
use tracing::{event, Level};

impl<C: 'static> StepRegistry<C> {
  /// Returns the steps whose visibility predicate currently holds, in
  /// registry order.
  ///
  /// Evaluated fresh on every call. Callers that need several answers to
  /// agree must evaluate them against the same context borrow, or take a
  /// `NavigationState` snapshot.
  pub fn active_steps<'r>(&'r self, ctx: &C) -> Vec<&'r StepDescriptor<C>> {
    let active: Vec<&StepDescriptor<C>> = self.steps.iter().filter(|s| s.is_visible(ctx)).collect();
    event!(
      Level::TRACE,
      registered = self.steps.len(),
      active = active.len(),
      "Projected active steps."
    );
    active
  }

  /// Index of `current_step_name` within the active steps, if it is active.
  pub fn current_step_index(&self, ctx: &C, current_step_name: &str) -> Option<usize> {
    resolve_cursor(&self.active_steps(ctx), current_step_name)
  }

  /// The active descriptor matching `current_step_name`.
  pub fn current_step<'r>(&'r self, ctx: &C, current_step_name: &str) -> Option<&'r StepDescriptor<C>> {
    let active = self.active_steps(ctx);
    resolve_cursor(&active, current_step_name).map(|idx| active[idx])
  }

  pub fn total_steps(&self, ctx: &C) -> usize {
    self.steps.iter().filter(|s| s.is_visible(ctx)).count()
  }
}

/// Linear search by name. `None` means the caller's notion of the current
/// step doesn't match any active step, which is expected mid-navigation or
/// after the current step became invisible.
pub fn resolve_cursor<C: 'static>(active_steps: &[&StepDescriptor<C>], current_step_name: &str) -> Option<usize> {
  let idx = active_steps.iter().position(|s| s.name == current_step_name);
  if idx.is_none() {
    event!(Level::DEBUG, current_step_name, "Current step is not among the active steps.");
  }
  idx
}

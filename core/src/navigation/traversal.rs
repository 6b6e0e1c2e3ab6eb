// stepwise/src/navigation/traversal.rs

//! Sequential and direct traversal over the active steps.
//!
//! Every operation re-derives the active steps and the cursor from the
//! caller-supplied current step name; nothing is remembered between calls.
//! The peek accessors and the target accessors share [`scan`], so a preview
//! always names the step a move would land on.

use crate::core::control::Direction;
use crate::core::step::StepDescriptor;
use crate::navigation::projection::resolve_cursor;
use crate::navigation::registry::StepRegistry;
use tracing::{event, instrument, Level};

/// Scans from the cursor in `direction` for the first step whose skip
/// predicate is false. An unresolved cursor has no neighbours.
pub fn scan<'r, C: 'static>(
  active_steps: &[&'r StepDescriptor<C>],
  cursor: Option<usize>,
  direction: Direction,
  ctx: &C,
) -> Option<&'r StepDescriptor<C>> {
  let cursor = cursor?;
  let lands_on = |step: &&&'r StepDescriptor<C>| {
    if step.should_skip(ctx) {
      event!(Level::TRACE, step_name = %step.name, ?direction, "Passing over skipped step.");
      return false;
    }
    true
  };

  let found = match direction {
    Direction::Forward => active_steps.iter().skip(cursor + 1).find(lands_on),
    Direction::Backward => active_steps.iter().take(cursor).rev().find(lands_on),
  };
  found.copied()
}

impl<C: 'static> StepRegistry<C> {
  /// The step a sequential move in `direction` would land on.
  #[instrument(
    name = "StepRegistry::step_in_direction",
    level = "debug",
    skip(self, ctx),
    fields(num_steps = self.steps.len())
  )]
  pub fn step_in_direction(&self, ctx: &C, current_step_name: &str, direction: Direction) -> Option<&StepDescriptor<C>> {
    let active = self.active_steps(ctx);
    let cursor = resolve_cursor(&active, current_step_name);
    let target = scan(&active, cursor, direction, ctx);
    match target {
      Some(step) => event!(Level::DEBUG, target = %step.name, "Resolved traversal target."),
      None => event!(Level::DEBUG, ?cursor, "No traversal target."),
    }
    target
  }

  /// Preview of `next`: the next active, non-skipped step after the current one.
  pub fn next_step_info(&self, ctx: &C, current_step_name: &str) -> Option<&StepDescriptor<C>> {
    self.step_in_direction(ctx, current_step_name, Direction::Forward)
  }

  /// Preview of `previous`: the nearest active, non-skipped step before the current one.
  pub fn previous_step_info(&self, ctx: &C, current_step_name: &str) -> Option<&StepDescriptor<C>> {
    self.step_in_direction(ctx, current_step_name, Direction::Backward)
  }

  /// Name of the step `next` navigates to, or `None` for a no-op.
  pub fn next_target(&self, ctx: &C, current_step_name: &str) -> Option<String> {
    self.next_step_info(ctx, current_step_name).map(|s| s.name.clone())
  }

  /// Name of the step `previous` navigates to, or `None` for a no-op.
  pub fn previous_target(&self, ctx: &C, current_step_name: &str) -> Option<String> {
    self.previous_step_info(ctx, current_step_name).map(|s| s.name.clone())
  }

  /// Validates a direct jump. The target must be active right now; the skip
  /// predicate is not consulted, since a jump expresses explicit intent.
  pub fn go_to_target(&self, ctx: &C, step_name: &str) -> Option<String> {
    let active = self.active_steps(ctx);
    match resolve_cursor(&active, step_name) {
      Some(idx) => Some(active[idx].name.clone()),
      None => {
        event!(
          Level::DEBUG,
          step_name,
          registered = self.contains(step_name),
          "Jump target is not active; ignoring."
        );
        None
      }
    }
  }
}

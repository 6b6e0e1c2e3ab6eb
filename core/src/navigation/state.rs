// stepwise/src/navigation/state.rs

//! Owned snapshots of the navigation state, for rendering progress bars,
//! sidebars and prev/next controls from a single consistent evaluation.

use crate::core::control::Direction;
use crate::core::step::StepDescriptor;
use crate::navigation::progress::{is_first_step, is_last_step, progress_percent};
use crate::navigation::projection::resolve_cursor;
use crate::navigation::registry::StepRegistry;
use crate::navigation::traversal::scan;

/// Display data for one active step, detached from its predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
  pub name: String,
  pub label: String,
  pub icon: String,
  /// Whether the skip predicate held when the snapshot was taken.
  pub skipped: bool,
}

impl StepSummary {
  pub fn from_descriptor<C: 'static>(step: &StepDescriptor<C>, ctx: &C) -> Self {
    Self {
      name: step.name.clone(),
      label: step.label.clone(),
      icon: step.icon.clone(),
      skipped: step.should_skip(ctx),
    }
  }
}

/// Where a step sits relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
  Completed,
  Current,
  Upcoming,
  Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOverview {
  pub step: StepSummary,
  pub status: StepStatus,
}

/// Everything a wizard UI reads, computed from one evaluation of the
/// predicates against one context borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
  pub active_steps: Vec<StepSummary>,
  pub current_step_index: Option<usize>,
  pub total_steps: usize,
  pub progress_percent: u8,
  pub is_first_step: bool,
  pub is_last_step: bool,
  pub next_step: Option<StepSummary>,
  pub previous_step: Option<StepSummary>,
}

impl NavigationState {
  pub fn current_step(&self) -> Option<&StepSummary> {
    self.current_step_index.and_then(|idx| self.active_steps.get(idx))
  }

  pub fn current_step_name(&self) -> Option<&str> {
    self.current_step().map(|s| s.name.as_str())
  }

  /// Sidebar view: each active step tagged with its status. With an
  /// unresolved cursor nothing is completed or current.
  pub fn overview(&self) -> Vec<StepOverview> {
    self
      .active_steps
      .iter()
      .enumerate()
      .map(|(idx, step)| {
        let status = match self.current_step_index {
          Some(cursor) if idx == cursor => StepStatus::Current,
          _ if step.skipped => StepStatus::Skipped,
          Some(cursor) if idx < cursor => StepStatus::Completed,
          _ => StepStatus::Upcoming,
        };
        StepOverview {
          step: step.clone(),
          status,
        }
      })
      .collect()
  }
}

impl<C: 'static> StepRegistry<C> {
  /// Snapshot of every derived value for `current_step_name`.
  pub fn navigation_state(&self, ctx: &C, current_step_name: &str) -> NavigationState {
    let active = self.active_steps(ctx);
    let cursor = resolve_cursor(&active, current_step_name);
    let total = active.len();

    NavigationState {
      active_steps: active.iter().map(|s| StepSummary::from_descriptor(s, ctx)).collect(),
      current_step_index: cursor,
      total_steps: total,
      progress_percent: progress_percent(cursor, total),
      is_first_step: is_first_step(cursor),
      is_last_step: is_last_step(cursor, total),
      next_step: scan(&active, cursor, Direction::Forward, ctx).map(|s| StepSummary::from_descriptor(s, ctx)),
      previous_step: scan(&active, cursor, Direction::Backward, ctx).map(|s| StepSummary::from_descriptor(s, ctx)),
    }
  }

  /// Progress for `current_step_name` against the current context.
  pub fn progress_percent(&self, ctx: &C, current_step_name: &str) -> u8 {
    let active = self.active_steps(ctx);
    progress_percent(resolve_cursor(&active, current_step_name), active.len())
  }
}

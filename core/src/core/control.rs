// stepwise/src/core/control.rs

//! Signals describing traversal direction and the outcome of a navigation request.

/// Direction of a sequential scan over the active steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Forward,
  Backward,
}

/// Outcome of a `WizardSession` navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
  /// A target was resolved and the navigator completed the route change.
  Navigated { step_name: String, location: String },
  /// No resolvable target: unresolved cursor, terminal step, or a `go_to`
  /// name that is not currently active. Callers should do nothing.
  NoTarget,
  /// Another navigation from this session is still pending.
  Busy,
}

impl NavigationOutcome {
  pub fn step_name(&self) -> Option<&str> {
    match self {
      NavigationOutcome::Navigated { step_name, .. } => Some(step_name),
      NavigationOutcome::NoTarget | NavigationOutcome::Busy => None,
    }
  }

  pub fn navigated(&self) -> bool {
    matches!(self, NavigationOutcome::Navigated { .. })
  }
}

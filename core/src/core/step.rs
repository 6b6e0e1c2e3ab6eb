// stepwise/src/core/step.rs

//! Defines a single wizard step: its identity, display metadata and the
//! predicates that decide whether it is shown and whether sequential traversal
//! passes over it.

use std::sync::Arc;

/// A predicate over the wizard context `C`.
///
/// Predicates receive the context explicitly instead of capturing a store, so
/// they can be evaluated against any state, including plain test fixtures.
pub type StepPredicate<C> = Arc<dyn Fn(&C) -> bool + Send + Sync + 'static>;

/// Definition of a wizard step.
///
/// A step with no visibility predicate is always visible. A step with no skip
/// predicate is never skipped.
pub struct StepDescriptor<C: 'static> {
  pub name: String,
  pub label: String,
  pub icon: String,
  pub(crate) visible_if: Option<StepPredicate<C>>,
  pub(crate) skip_if: Option<StepPredicate<C>>,
}

impl<C: 'static> StepDescriptor<C> {
  pub fn new(name: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      label: label.into(),
      icon: icon.into(),
      visible_if: None,
      skip_if: None,
    }
  }

  /// Shows the step only while `predicate` holds.
  pub fn visible_when(mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
    self.visible_if = Some(Arc::new(predicate));
    self
  }

  /// Keeps the step visible but lets `next`/`previous` pass over it while
  /// `predicate` holds.
  pub fn skip_when(mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
    self.skip_if = Some(Arc::new(predicate));
    self
  }

  pub fn is_visible(&self, ctx: &C) -> bool {
    self.visible_if.as_ref().map_or(true, |visible| visible(ctx))
  }

  pub fn should_skip(&self, ctx: &C) -> bool {
    self.skip_if.as_ref().map_or(false, |skip| skip(ctx))
  }
}

// Manual impl: predicates are shared through Arc, so C itself need not be Clone.
impl<C: 'static> Clone for StepDescriptor<C> {
  fn clone(&self) -> Self {
    Self {
      name: self.name.clone(),
      label: self.label.clone(),
      icon: self.icon.clone(),
      visible_if: self.visible_if.clone(),
      skip_if: self.skip_if.clone(),
    }
  }
}

// Closures don't implement Debug; report only whether they are present.
impl<C: 'static> std::fmt::Debug for StepDescriptor<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDescriptor")
      .field("name", &self.name)
      .field("label", &self.label)
      .field("icon", &self.icon)
      .field("visible_if_present", &self.visible_if.is_some())
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}

// stepwise/src/core/context_data.rs
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// The caller-owned wizard state that step predicates read from.
///
/// Cloning shares the same underlying data. The navigation engine only ever
/// takes a read guard, and holds it for exactly one synchronous operation so
/// that every predicate evaluated by that operation sees the same state.
///
/// IMPORTANT: guards obtained from this struct are blocking and MUST NOT be
/// held across `.await` suspension points.
#[derive(Debug)]
pub struct ContextData<C: Send + Sync + 'static>(Arc<RwLock<C>>);

impl<C: Send + Sync + 'static> ContextData<C> {
  pub fn new(data: C) -> Self {
    ContextData(Arc::new(RwLock::new(data)))
  }

  /// Acquires a read lock.
  pub fn read(&self) -> RwLockReadGuard<'_, C> {
    self.0.read()
  }

  /// Acquires a write lock. Used by the caller to record wizard choices.
  pub fn write(&self) -> RwLockWriteGuard<'_, C> {
    self.0.write()
  }

  /// Runs `f` against the context under a single read guard.
  pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
    let guard = self.0.read();
    f(&guard)
  }

  /// Applies a mutation under a write guard and returns its result.
  pub fn update<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
    let mut guard = self.0.write();
    f(&mut guard)
  }
}

impl<C: Send + Sync + 'static + Clone> ContextData<C> {
  /// Owned copy of the current state.
  pub fn snapshot(&self) -> C {
    self.0.read().clone()
  }
}

impl<C: Send + Sync + 'static> Clone for ContextData<C> {
  fn clone(&self) -> Self {
    ContextData(Arc::clone(&self.0))
  }
}

impl<C: Send + Sync + 'static + Default> Default for ContextData<C> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}

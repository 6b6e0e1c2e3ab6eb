// stepwise/src/session.rs

//! Defines `WizardSession<C, R, N>`, which ties a step registry to the
//! caller's context, a route map and the host router.
//!
//! The registry only ever computes target names. The session turns a target
//! into a location and awaits the `Navigator`, which owns the actual route
//! change and reports the current location back.

use crate::core::context_data::ContextData;
use crate::core::control::{Direction, NavigationOutcome};
use crate::error::{StepwiseError, StepwiseResult};
use crate::navigation::registry::StepRegistry;
use crate::navigation::state::{NavigationState, StepSummary};
use crate::routes::RouteMap;

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// The host environment's router.
#[async_trait]
pub trait Navigator: Send + Sync {
  /// Performs the route change. Completes once the new location is committed.
  async fn navigate(&self, location: &str) -> anyhow::Result<()>;

  /// The location the router currently reports. May lag behind a pending
  /// `navigate` call.
  fn current_location(&self) -> Option<String>;
}

#[async_trait]
impl<N: Navigator + ?Sized> Navigator for Arc<N> {
  async fn navigate(&self, location: &str) -> anyhow::Result<()> {
    (**self).navigate(location).await
  }

  fn current_location(&self) -> Option<String> {
    (**self).current_location()
  }
}

/// Releases the session's in-flight flag when dropped, including on error.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
  fn acquire(flag: &'a AtomicBool) -> Option<Self> {
    flag
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .ok()
      .map(|_| InFlight(flag))
  }
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

/// One wizard run: the registry built for it, the context its predicates
/// read, and the routing collaborators.
///
/// While a navigation is pending, further requests from the same session
/// return [`NavigationOutcome::Busy`] instead of computing a target from a
/// stale location.
pub struct WizardSession<C, R, N>
where
  C: Send + Sync + 'static,
  R: RouteMap,
  N: Navigator,
{
  registry: Arc<StepRegistry<C>>,
  context: ContextData<C>,
  routes: R,
  navigator: N,
  in_flight: AtomicBool,
}

impl<C, R, N> WizardSession<C, R, N>
where
  C: Send + Sync + 'static,
  R: RouteMap,
  N: Navigator,
{
  /// Fails with [`StepwiseError::UnroutableStep`] when `routes` cannot map a
  /// step's location back to its name, since the session could never resolve
  /// its cursor after navigating there.
  pub fn new(
    registry: impl Into<Arc<StepRegistry<C>>>,
    context: ContextData<C>,
    routes: R,
    navigator: N,
  ) -> StepwiseResult<Self> {
    let registry = registry.into();
    if let Some(step_name) = registry.names().find(|name| !routes.round_trips(name)) {
      let location = routes.name_to_location(step_name);
      event!(Level::ERROR, step_name = %step_name, location = %location, "Step name does not survive routing.");
      return Err(StepwiseError::UnroutableStep {
        step_name: step_name.to_string(),
        location,
      });
    }

    event!(
      Level::DEBUG,
      context_type = %std::any::type_name::<C>(),
      num_steps = registry.len(),
      "Wizard session started."
    );
    Ok(Self {
      registry,
      context,
      routes,
      navigator,
      in_flight: AtomicBool::new(false),
    })
  }

  pub fn registry(&self) -> &StepRegistry<C> {
    &self.registry
  }

  pub fn context(&self) -> &ContextData<C> {
    &self.context
  }

  pub fn routes(&self) -> &R {
    &self.routes
  }

  pub fn navigator(&self) -> &N {
    &self.navigator
  }

  pub fn is_navigating(&self) -> bool {
    self.in_flight.load(Ordering::Acquire)
  }

  /// The step name derived from the navigator's current location.
  pub fn current_step_name(&self) -> Option<String> {
    let location = self.navigator.current_location()?;
    self.routes.location_to_name(&location)
  }

  /// Snapshot of all derived values, evaluated under one read guard.
  pub fn state(&self) -> NavigationState {
    let current = self.current_step_name().unwrap_or_default();
    self.context.with(|ctx| self.registry.navigation_state(ctx, &current))
  }

  pub fn next_step_info(&self) -> Option<StepSummary> {
    self.peek(Direction::Forward)
  }

  pub fn previous_step_info(&self) -> Option<StepSummary> {
    self.peek(Direction::Backward)
  }

  fn peek(&self, direction: Direction) -> Option<StepSummary> {
    let current = self.current_step_name()?;
    self.context.with(|ctx| {
      self
        .registry
        .step_in_direction(ctx, &current, direction)
        .map(|s| StepSummary::from_descriptor(s, ctx))
    })
  }

  /// Moves to the next active, non-skipped step.
  #[instrument(name = "WizardSession::next", skip_all, err(Display))]
  pub async fn next(&self) -> StepwiseResult<NavigationOutcome> {
    self.sequential(Direction::Forward).await
  }

  /// Moves to the nearest earlier active, non-skipped step.
  #[instrument(name = "WizardSession::previous", skip_all, err(Display))]
  pub async fn previous(&self) -> StepwiseResult<NavigationOutcome> {
    self.sequential(Direction::Backward).await
  }

  /// Jumps to `step_name` if it is currently active, regardless of its skip
  /// predicate.
  #[instrument(name = "WizardSession::go_to", skip(self), err(Display))]
  pub async fn go_to(&self, step_name: &str) -> StepwiseResult<NavigationOutcome> {
    let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
      event!(Level::DEBUG, "Navigation already pending; ignoring jump.");
      return Ok(NavigationOutcome::Busy);
    };

    let target = self.context.with(|ctx| self.registry.go_to_target(ctx, step_name));
    self.navigate_to(target).await
  }

  async fn sequential(&self, direction: Direction) -> StepwiseResult<NavigationOutcome> {
    let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
      event!(Level::DEBUG, ?direction, "Navigation already pending; ignoring request.");
      return Ok(NavigationOutcome::Busy);
    };

    let Some(current) = self.current_step_name() else {
      event!(Level::DEBUG, ?direction, "Current location is not a step of this wizard.");
      return Ok(NavigationOutcome::NoTarget);
    };

    // The read guard is released before the navigator is awaited.
    let target = self.context.with(|ctx| {
      self
        .registry
        .step_in_direction(ctx, &current, direction)
        .map(|s| s.name.clone())
    });
    self.navigate_to(target).await
  }

  async fn navigate_to(&self, target: Option<String>) -> StepwiseResult<NavigationOutcome> {
    let Some(step_name) = target else {
      return Ok(NavigationOutcome::NoTarget);
    };

    let location = self.routes.name_to_location(&step_name);
    event!(Level::INFO, step_name = %step_name, location = %location, "Navigating.");

    match self.navigator.navigate(&location).await {
      Ok(()) => Ok(NavigationOutcome::Navigated { step_name, location }),
      Err(source) => {
        event!(Level::ERROR, step_name = %step_name, error = %source, "Navigator failed.");
        Err(StepwiseError::Navigation {
          step_name,
          location,
          source,
        })
      }
    }
  }
}

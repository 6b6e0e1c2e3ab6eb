// stepwise/src/routes.rs

//! Mapping between step names and navigable locations.

/// Translates step names to locations the host router understands, and back.
pub trait RouteMap: Send + Sync {
  fn name_to_location(&self, step_name: &str) -> String;

  /// The step named by `location`, or `None` when the location isn't a step
  /// route of this wizard.
  fn location_to_name(&self, location: &str) -> Option<String>;

  /// Whether `step_name` survives the trip to a location and back.
  fn round_trips(&self, step_name: &str) -> bool {
    self.location_to_name(&self.name_to_location(step_name)).as_deref() == Some(step_name)
  }
}

/// Routes of the form `{prefix}/{step_name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRoutes {
  prefix: String,
}

impl PathRoutes {
  pub fn new(prefix: impl Into<String>) -> Self {
    let prefix: String = prefix.into();
    Self {
      prefix: prefix.trim_end_matches('/').to_string(),
    }
  }

  pub fn prefix(&self) -> &str {
    &self.prefix
  }
}

impl RouteMap for PathRoutes {
  fn name_to_location(&self, step_name: &str) -> String {
    format!("{}/{}", self.prefix, step_name)
  }

  fn location_to_name(&self, location: &str) -> Option<String> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_end_matches('/');
    let rest = path.strip_prefix(self.prefix.as_str())?.strip_prefix('/')?;
    if rest.is_empty() || rest.contains('/') {
      return None;
    }
    Some(rest.to_string())
  }
}

impl<R: RouteMap + ?Sized> RouteMap for std::sync::Arc<R> {
  fn name_to_location(&self, step_name: &str) -> String {
    (**self).name_to_location(step_name)
  }

  fn location_to_name(&self, location: &str) -> Option<String> {
    (**self).location_to_name(location)
  }
}

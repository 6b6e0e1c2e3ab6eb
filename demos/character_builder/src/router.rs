// demos/character_builder/src/router.rs

use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;
use stepwise::Navigator;

/// Stand-in for a browser router: keeps the current location and history in
/// memory and commits each change after a fixed latency.
#[derive(Debug)]
pub struct InMemoryRouter {
  location: Mutex<String>,
  history: Mutex<Vec<String>>,
  latency: Duration,
}

impl InMemoryRouter {
  pub fn new(initial_location: String, latency: Duration) -> Self {
    Self {
      history: Mutex::new(vec![initial_location.clone()]),
      location: Mutex::new(initial_location),
      latency,
    }
  }

  pub fn history(&self) -> Vec<String> {
    self.history.lock().clone()
  }
}

#[async_trait]
impl Navigator for InMemoryRouter {
  async fn navigate(&self, location: &str) -> anyhow::Result<()> {
    if !location.starts_with('/') {
      anyhow::bail!("refusing relative location '{}'", location);
    }
    if !self.latency.is_zero() {
      tokio::time::sleep(self.latency).await;
    }
    *self.location.lock() = location.to_string();
    self.history.lock().push(location.to_string());
    tracing::debug!(%location, "Route committed.");
    Ok(())
  }

  fn current_location(&self) -> Option<String> {
    Some(self.location.lock().clone())
  }
}

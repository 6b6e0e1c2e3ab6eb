// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use stepwise::{Navigator, StepDescriptor, StepRegistry};
use std::sync::Mutex;
use std::time::Duration;
use tracing::Level;

// --- Scenario Context ---
// Defaults reproduce the reference registry:
// [A(visible), B(visible, skipped), C(hidden), D(visible), E(visible)]
#[derive(Clone, Debug)]
pub struct ScenarioContext {
  pub skip_b: bool,
  pub show_c: bool,
  pub skip_d: bool,
  pub hide_e: bool,
}

impl Default for ScenarioContext {
  fn default() -> Self {
    Self {
      skip_b: true,
      show_c: false,
      skip_d: false,
      hide_e: false,
    }
  }
}

pub fn scenario_registry() -> StepRegistry<ScenarioContext> {
  StepRegistry::new(vec![
    StepDescriptor::new("A", "Step A", "a"),
    StepDescriptor::new("B", "Step B", "b").skip_when(|c: &ScenarioContext| c.skip_b),
    StepDescriptor::new("C", "Step C", "c").visible_when(|c: &ScenarioContext| c.show_c),
    StepDescriptor::new("D", "Step D", "d").skip_when(|c: &ScenarioContext| c.skip_d),
    StepDescriptor::new("E", "Step E", "e").visible_when(|c: &ScenarioContext| !c.hide_e),
  ])
  .expect("scenario registry has unique names")
}

pub fn names<C: 'static>(steps: &[&StepDescriptor<C>]) -> Vec<String> {
  steps.iter().map(|s| s.name.clone()).collect()
}

// --- Recording Navigator ---
// Commits the new location after an optional delay, and can be told to fail
// for one specific location.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
  location: Mutex<Option<String>>,
  visited: Mutex<Vec<String>>,
  delay: Duration,
  fail_on: Option<String>,
}

impl RecordingNavigator {
  pub fn at(location: &str) -> Self {
    Self {
      location: Mutex::new(Some(location.to_string())),
      ..Default::default()
    }
  }

  pub fn with_delay(mut self, delay: Duration) -> Self {
    self.delay = delay;
    self
  }

  pub fn failing_on(mut self, location: &str) -> Self {
    self.fail_on = Some(location.to_string());
    self
  }

  pub fn set_location(&self, location: &str) {
    *self.location.lock().unwrap() = Some(location.to_string());
  }

  pub fn visited(&self) -> Vec<String> {
    self.visited.lock().unwrap().clone()
  }
}

#[async_trait]
impl Navigator for RecordingNavigator {
  async fn navigate(&self, location: &str) -> anyhow::Result<()> {
    if !self.delay.is_zero() {
      tokio::time::sleep(self.delay).await;
    }
    if self.fail_on.as_deref() == Some(location) {
      anyhow::bail!("router rejected {}", location);
    }
    self.visited.lock().unwrap().push(location.to_string());
    *self.location.lock().unwrap() = Some(location.to_string());
    Ok(())
  }

  fn current_location(&self) -> Option<String> {
    self.location.lock().unwrap().clone()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

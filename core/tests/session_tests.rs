// tests/session_tests.rs
mod common;

use common::*;
use std::sync::Arc;
use std::time::Duration;
use stepwise::{
  ContextData, NavigationOutcome, PathRoutes, StepDescriptor, StepRegistry, StepwiseError, WizardSession,
};

type ScenarioSession = WizardSession<ScenarioContext, PathRoutes, Arc<RecordingNavigator>>;

fn session_at(step: &str) -> (ScenarioSession, Arc<RecordingNavigator>) {
  let navigator = Arc::new(RecordingNavigator::at(&format!("/wizard/{}", step)));
  let session = WizardSession::new(
    scenario_registry(),
    ContextData::new(ScenarioContext::default()),
    PathRoutes::new("/wizard"),
    navigator.clone(),
  )
  .unwrap();
  (session, navigator)
}

#[tokio::test]
async fn test_next_navigates_past_skipped_step() {
  setup_tracing();
  let (session, navigator) = session_at("A");

  let outcome = session.next().await.unwrap();
  assert_eq!(
    outcome,
    NavigationOutcome::Navigated {
      step_name: "D".to_string(),
      location: "/wizard/D".to_string(),
    }
  );
  assert_eq!(navigator.visited(), vec!["/wizard/D"]);
  assert_eq!(session.current_step_name().as_deref(), Some("D"));
}

#[tokio::test]
async fn test_walks_forward_to_terminal_step_then_stops() {
  setup_tracing();
  let (session, navigator) = session_at("A");

  assert_eq!(session.next().await.unwrap().step_name(), Some("D"));
  assert_eq!(session.next().await.unwrap().step_name(), Some("E"));
  assert_eq!(session.next().await.unwrap(), NavigationOutcome::NoTarget);
  assert_eq!(session.next().await.unwrap(), NavigationOutcome::NoTarget);
  assert_eq!(navigator.visited(), vec!["/wizard/D", "/wizard/E"]);

  let state = session.state();
  assert!(state.is_last_step);
  assert_eq!(state.progress_percent, 100);
}

#[tokio::test]
async fn test_previous_navigates_backward() {
  setup_tracing();
  let (session, navigator) = session_at("D");

  assert_eq!(session.previous().await.unwrap().step_name(), Some("A"));
  assert_eq!(session.previous().await.unwrap(), NavigationOutcome::NoTarget);
  assert_eq!(navigator.visited(), vec!["/wizard/A"]);
}

#[tokio::test]
async fn test_go_to_validates_target() {
  setup_tracing();
  let (session, navigator) = session_at("A");

  assert_eq!(session.go_to("C").await.unwrap(), NavigationOutcome::NoTarget);
  assert!(navigator.visited().is_empty());

  // Skip-marked steps are still valid jump targets.
  assert_eq!(session.go_to("B").await.unwrap().step_name(), Some("B"));
  assert_eq!(session.state().current_step_index, Some(1));
}

#[tokio::test]
async fn test_go_to_follows_context_changes() {
  setup_tracing();
  let (session, _navigator) = session_at("A");

  session.context().update(|c| c.show_c = true);
  assert_eq!(session.go_to("C").await.unwrap().step_name(), Some("C"));
  assert_eq!(session.next_step_info().map(|s| s.name), Some("D".to_string()));
  assert_eq!(session.previous_step_info().map(|s| s.name), Some("A".to_string()));
}

#[tokio::test]
async fn test_foreign_location_has_no_target() {
  setup_tracing();
  let (session, navigator) = session_at("A");
  navigator.set_location("/somewhere/else");

  assert_eq!(session.current_step_name(), None);
  assert_eq!(session.next().await.unwrap(), NavigationOutcome::NoTarget);
  assert_eq!(session.previous().await.unwrap(), NavigationOutcome::NoTarget);
  assert_eq!(session.next_step_info(), None);
  assert_eq!(session.state().current_step_index, None);
}

#[test]
fn test_session_rejects_step_names_routes_cannot_recover() {
  setup_tracing();
  let registry: StepRegistry<ScenarioContext> = StepRegistry::new(vec![
    StepDescriptor::new("A", "Step A", "a"),
    StepDescriptor::new("b?x", "Step B", "b"),
    StepDescriptor::new("C", "Step C", "c"),
  ])
  .unwrap();

  let Err(err) = WizardSession::new(
    registry,
    ContextData::new(ScenarioContext::default()),
    PathRoutes::new("/w"),
    Arc::new(RecordingNavigator::at("/w/A")),
  ) else {
    panic!("Expected StepwiseError::UnroutableStep");
  };

  assert_eq!(err.step_name(), Some("b?x"));
  match err {
    StepwiseError::UnroutableStep { location, .. } => assert_eq!(location, "/w/b?x"),
    other => panic!("Expected StepwiseError::UnroutableStep, got {:?}", other),
  }
}

#[tokio::test]
async fn test_navigator_failure_is_reported() {
  setup_tracing();
  let navigator = Arc::new(RecordingNavigator::at("/wizard/A").failing_on("/wizard/D"));
  let session = WizardSession::new(
    scenario_registry(),
    ContextData::new(ScenarioContext::default()),
    PathRoutes::new("/wizard"),
    navigator.clone(),
  )
  .unwrap();

  match session.next().await {
    Err(StepwiseError::Navigation { step_name, location, source }) => {
      assert_eq!(step_name, "D");
      assert_eq!(location, "/wizard/D");
      assert!(source.to_string().contains("router rejected"));
    }
    other => panic!("Expected StepwiseError::Navigation, got {:?}", other),
  }

  // The failed attempt released the in-flight flag and left the location alone.
  assert!(!session.is_navigating());
  assert_eq!(session.current_step_name().as_deref(), Some("A"));
  assert_eq!(session.go_to("E").await.unwrap().step_name(), Some("E"));
}

#[tokio::test]
async fn test_concurrent_requests_report_busy() {
  setup_tracing();
  let navigator = Arc::new(RecordingNavigator::at("/wizard/A").with_delay(Duration::from_millis(50)));
  let session = WizardSession::new(
    scenario_registry(),
    ContextData::new(ScenarioContext::default()),
    PathRoutes::new("/wizard"),
    navigator.clone(),
  )
  .unwrap();

  let (first, second) = tokio::join!(session.next(), session.next());
  let outcomes = [first.unwrap(), second.unwrap()];

  assert_eq!(outcomes.iter().filter(|o| o.navigated()).count(), 1);
  assert_eq!(outcomes.iter().filter(|o| **o == NavigationOutcome::Busy).count(), 1);
  assert_eq!(navigator.visited(), vec!["/wizard/D"]);
  assert!(!session.is_navigating());

  // Sequential requests go through once the first one has committed.
  assert_eq!(session.next().await.unwrap().step_name(), Some("E"));
}

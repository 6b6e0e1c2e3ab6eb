// stepwise/examples/basic_wizard.rs

use stepwise::{ContextData, StepDescriptor, StepRegistry, StepwiseResult};
use tracing::info;

// 1. Define the context the step predicates read
#[derive(Clone, Debug, Default)]
struct SignupDraft {
  wants_newsletter: bool,
  has_company: bool,
}

fn main() -> StepwiseResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Wizard Example ---");

  // 2. Build the registry once per session
  let registry = StepRegistry::new(vec![
    StepDescriptor::new("account", "Account", "user"),
    StepDescriptor::new("company", "Company", "briefcase").visible_when(|d: &SignupDraft| d.has_company),
    StepDescriptor::new("newsletter", "Newsletter", "mail").skip_when(|d: &SignupDraft| !d.wants_newsletter),
    StepDescriptor::new("confirm", "Confirm", "check"),
  ])?;

  // 3. Wrap the draft so the "UI" can change it between queries
  let draft = ContextData::new(SignupDraft::default());
  let mut current = "account".to_string();

  // 4. Walk forward, letting the engine pick each target
  while let Some(target) = draft.with(|d| registry.next_target(d, &current)) {
    let progress = draft.with(|d| registry.progress_percent(d, &target));
    info!(from = %current, to = %target, progress, "Moving forward.");
    current = target;
  }
  info!(step = %current, "Reached the terminal step.");

  // 5. Change the draft: the company step appears, the newsletter step is no longer skipped
  draft.update(|d| {
    d.has_company = true;
    d.wants_newsletter = true;
  });
  let state = draft.with(|d| registry.navigation_state(d, &current));
  for entry in state.overview() {
    info!(step = %entry.step.name, status = ?entry.status, "Sidebar entry.");
  }
  let previous = state.previous_step.as_ref().map(|s| s.name.as_str());
  info!(?previous, progress = state.progress_percent, "After the draft changed.");

  Ok(())
}

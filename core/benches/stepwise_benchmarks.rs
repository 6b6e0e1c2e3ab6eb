use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use stepwise::wizards::creation::{self, ClassChoice, CreationDraft};
use stepwise::{ContextData, Navigator, PathRoutes, StepDescriptor, StepRegistry, WizardSession};
use tokio::runtime::Runtime;

// --- Common Benchmark Context ---
#[derive(Clone, Debug, Default)]
struct BenchContext {
  hidden_every: usize,
  skipped_every: usize,
}

// Step i is hidden when i % hidden_every == 0 and skipped when i % skipped_every == 0.
fn build_registry(num_steps: usize) -> StepRegistry<BenchContext> {
  let steps = (0..num_steps)
    .map(|i| {
      StepDescriptor::new(format!("step_{}", i), format!("Step {}", i), "")
        .visible_when(move |c: &BenchContext| c.hidden_every == 0 || i % c.hidden_every != 0)
        .skip_when(move |c: &BenchContext| c.skipped_every != 0 && i % c.skipped_every == 0)
    })
    .collect();
  StepRegistry::new(steps).unwrap()
}

struct NoopNavigator;

#[async_trait::async_trait]
impl Navigator for NoopNavigator {
  async fn navigate(&self, _location: &str) -> anyhow::Result<()> {
    Ok(())
  }

  fn current_location(&self) -> Option<String> {
    Some("/bench/class".to_string())
  }
}

// --- Benchmark Functions ---

fn bench_projection(c: &mut Criterion) {
  let mut group = c.benchmark_group("ActiveSteps");
  let ctx = BenchContext {
    hidden_every: 3,
    skipped_every: 0,
  };

  for num_steps in [10usize, 100, 1000].iter() {
    let registry = build_registry(*num_steps);
    group.throughput(Throughput::Elements(*num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), num_steps, |b, _| {
      b.iter(|| registry.active_steps(&ctx).len())
    });
  }
  group.finish();
}

fn bench_next_target(c: &mut Criterion) {
  let mut group = c.benchmark_group("NextTarget");

  for skipped_every in [0usize, 2, 1].iter() {
    let registry = build_registry(100);
    let ctx = BenchContext {
      hidden_every: 7,
      skipped_every: *skipped_every,
    };
    group.bench_with_input(
      BenchmarkId::new("skipped_every", skipped_every),
      skipped_every,
      |b, _| b.iter(|| registry.next_target(&ctx, "step_1")),
    );
  }
  group.finish();
}

fn bench_navigation_state(c: &mut Criterion) {
  let mut group = c.benchmark_group("NavigationState");
  let registry = creation::registry().unwrap();
  let draft = CreationDraft {
    class: Some(ClassChoice {
      slug: "cleric".to_string(),
      subclass_level: 1,
      is_spellcaster: true,
    }),
    ..Default::default()
  };

  group.bench_function("creation_wizard", |b| {
    b.iter(|| registry.navigation_state(&draft, creation::steps::CLASS))
  });
  group.finish();
}

fn bench_session_dispatch(c: &mut Criterion) {
  let mut group = c.benchmark_group("WizardSession");
  let rt = Runtime::new().unwrap();
  let session = Arc::new(WizardSession::new(
    creation::registry().unwrap(),
    ContextData::new(CreationDraft::default()),
    PathRoutes::new("/bench"),
    NoopNavigator,
  )
  .unwrap());

  group.bench_function("next", |b| {
    b.to_async(&rt).iter(|| {
      let session = session.clone();
      async move { session.next().await.unwrap() }
    });
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_projection,
  bench_next_target,
  bench_navigation_state,
  bench_session_dispatch
);
criterion_main!(benches);

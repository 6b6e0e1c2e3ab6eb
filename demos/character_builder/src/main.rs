// demos/character_builder/src/main.rs

// Declare modules for the application
mod commands;
mod config;
mod errors;
mod router;

use crate::commands::{Command, WizardKind, HELP};
use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::router::InMemoryRouter;

use std::sync::Arc;
use stepwise::wizards::{creation, level_up, CreationDraft, LevelUpDraft};
use stepwise::{ContextData, NavigationOutcome, PathRoutes, RouteMap, StepStatus, WizardSession};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

type Session<C> = WizardSession<C, PathRoutes, Arc<InMemoryRouter>>;

struct App {
  create: Session<CreationDraft>,
  level_up: Session<LevelUpDraft>,
  active: WizardKind,
}

impl App {
  fn new(config: &AppConfig) -> AppResult<Self> {
    let create_routes = PathRoutes::new(config.create_prefix.as_str());
    let create_router = Arc::new(InMemoryRouter::new(
      create_routes.name_to_location(creation::steps::SOURCES),
      config.route_latency,
    ));
    let create = WizardSession::new(
      creation::registry()?,
      ContextData::new(CreationDraft {
        starting_level: config.starting_level,
        ..Default::default()
      }),
      create_routes,
      create_router,
    )?;

    let level_up_routes = PathRoutes::new(config.level_up_prefix.as_str());
    let level_up_router = Arc::new(InMemoryRouter::new(
      level_up_routes.name_to_location(level_up::steps::CLASS),
      config.route_latency,
    ));
    let level_up = WizardSession::new(
      level_up::registry()?,
      ContextData::new(LevelUpDraft {
        current_class_level: config.starting_level,
        ..Default::default()
      }),
      level_up_routes,
      level_up_router,
    )?;

    Ok(Self {
      create,
      level_up,
      active: WizardKind::Create,
    })
  }

  async fn handle(&mut self, command: Command) -> AppResult<()> {
    match (command, self.active) {
      (Command::Switch(kind), _) => {
        self.active = kind;
        tracing::info!(wizard = ?kind, "Switched wizard.");
        Ok(())
      }
      (Command::Help, _) => {
        println!("{}", HELP);
        Ok(())
      }
      (Command::Quit, _) => Ok(()),
      (Command::Set { key, args }, WizardKind::Create) => {
        self.create.context().update(|d| commands::apply_creation(d, &key, &args))?;
        print_status(&self.create);
        Ok(())
      }
      (Command::Set { key, args }, WizardKind::LevelUp) => {
        self.level_up.context().update(|d| commands::apply_level_up(d, &key, &args))?;
        print_status(&self.level_up);
        Ok(())
      }
      (command, WizardKind::Create) => drive(&self.create, command).await,
      (command, WizardKind::LevelUp) => drive(&self.level_up, command).await,
    }
  }
}

async fn drive<C: Send + Sync + 'static>(session: &Session<C>, command: Command) -> AppResult<()> {
  let outcome = match command {
    Command::Next => session.next().await?,
    Command::Previous => session.previous().await?,
    Command::GoTo(step_name) => session.go_to(&step_name).await?,
    Command::Status => {
      print_status(session);
      return Ok(());
    }
    Command::History => {
      for location in session.navigator().history() {
        println!("  {}", location);
      }
      return Ok(());
    }
    _ => return Ok(()),
  };

  match outcome {
    NavigationOutcome::Navigated { .. } => print_status(session),
    NavigationOutcome::NoTarget => println!("(nowhere to go)"),
    NavigationOutcome::Busy => println!("(navigation in progress)"),
  }
  Ok(())
}

fn print_status<C: Send + Sync + 'static>(session: &Session<C>) {
  let state = session.state();
  let current = state.current_step().map_or("?", |s| s.label.as_str());
  println!(
    "[{:>3}%] {} ({} of {})",
    state.progress_percent,
    current,
    state.current_step_index.map_or(0, |idx| idx + 1),
    state.total_steps
  );
  for entry in state.overview() {
    let marker = match entry.status {
      StepStatus::Completed => "x",
      StepStatus::Current => ">",
      StepStatus::Upcoming => " ",
      StepStatus::Skipped => "-",
    };
    println!("  [{}] {:<28} {}", marker, entry.step.label, entry.step.name);
  }
}

async fn run(app: &mut App) -> AppResult<()> {
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  while let Some(line) = lines.next_line().await? {
    match commands::parse(&line) {
      Ok(None) => continue,
      Ok(Some(Command::Quit)) => break,
      Ok(Some(command)) => {
        if let Err(e) = app.handle(command).await {
          tracing::warn!(error = %e, "Command failed.");
          eprintln!("error: {}", e);
        }
      }
      Err(e) => eprintln!("error: {}", e),
    }
  }
  Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default level
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  tracing::info!("Starting character builder console...");

  let config = AppConfig::from_env()?;
  let mut app = App::new(&config)?;

  println!("{}", HELP);
  print_status(&app.create);

  run(&mut app).await?;

  tracing::info!("Character builder closed.");
  Ok(())
}

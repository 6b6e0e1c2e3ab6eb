// demos/character_builder/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Route prefix of the creation wizard, e.g. `/character/create`.
  pub create_prefix: String,
  /// Route prefix of the level-up wizard.
  pub level_up_prefix: String,
  /// Simulated time the router takes to commit a route change.
  pub route_latency: Duration,
  /// Level new characters start at.
  pub starting_level: u8,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str, default: &str| env::var(var_name).unwrap_or_else(|_| default.to_string());

    let create_prefix = get_env("BUILDER_CREATE_PREFIX", "/character/create");
    let level_up_prefix = get_env("BUILDER_LEVEL_UP_PREFIX", "/character/level-up");
    let route_latency_ms = get_env("BUILDER_ROUTE_LATENCY_MS", "0")
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid BUILDER_ROUTE_LATENCY_MS: {}", e)))?;
    let starting_level = get_env("BUILDER_STARTING_LEVEL", "1")
      .parse::<u8>()
      .map_err(|e| AppError::Config(format!("Invalid BUILDER_STARTING_LEVEL: {}", e)))?;

    if !(1..=20).contains(&starting_level) {
      return Err(AppError::Config(format!(
        "BUILDER_STARTING_LEVEL must be between 1 and 20, got {}",
        starting_level
      )));
    }
    if !create_prefix.starts_with('/') || !level_up_prefix.starts_with('/') {
      return Err(AppError::Config("Route prefixes must start with '/'".to_string()));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      create_prefix,
      level_up_prefix,
      route_latency: Duration::from_millis(route_latency_ms),
      starting_level,
    })
  }
}

// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{BacktestSettings, RunPlan, RunSpec, Settings};

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `config/base.toml` file (optional; every field has a default).
/// 2. Merges settings from an environment-specific file (e.g., `config/development.toml`).
/// 3. Merges settings from environment variables (e.g., `APP__BACKTEST__INITIAL_BUDGET=2500`).
pub fn load_settings() -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    load_settings_from(Path::new("config"), &environment)
}

/// Same layering as [`load_settings`], rooted at `dir`.
pub fn load_settings_from(dir: &Path, environment: &str) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(File::from(dir.join("base")).required(false))
        .add_source(File::from(dir.join(environment)).required(false))
        // The prefix is `APP`, separator is `__`.
        .add_source(Environment::with_prefix("APP").separator("__").try_parsing(true))
        .build()?;

    // Deserialize the configuration into our `Settings` struct.
    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

/// Loads a standalone list of runs, e.g. `config/runs.toml`.
pub fn load_run_plan(path: &Path) -> Result<RunPlan> {
    let content = std::fs::read_to_string(path)?;

    let plan: RunPlan = toml::from_str(&content)?;
    for run in &plan.runs {
        run.validate()?;
    }
    Ok(plan)
}

// ABOUTME: Shared helpers for loading configuration and building the orchestrator.
// ABOUTME: Eliminates duplication across deploy, verify and plan commands.

use crate::cli::ConfigArgs;
use stackpilot::config::Config;
use stackpilot::deploy::DeploymentOrchestrator;
use stackpilot::error::Result;
use stackpilot::exec::HostShell;
use stackpilot::log::{FileLog, Logger};
use stackpilot::output::Output;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration plus the directory relative paths resolve against.
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

pub fn load_config(args: &ConfigArgs) -> Result<LoadedConfig> {
    let cwd = env::current_dir()?;

    if args.defaults {
        return Ok(LoadedConfig {
            config: Config::default(),
            base_dir: cwd,
        });
    }

    let (config, path) = match &args.config {
        Some(path) => (Config::load(path)?, path.clone()),
        None => Config::discover(&cwd)?,
    };
    tracing::debug!(path = %path.display(), "loaded configuration");

    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or(cwd);

    Ok(LoadedConfig { config, base_dir })
}

/// Open the deployment log and wire up an orchestrator for `loaded`.
pub fn build_orchestrator(loaded: &LoadedConfig, output: &Output) -> Result<DeploymentOrchestrator> {
    let log_path = loaded.config.log_path(&loaded.base_dir);
    let sink = FileLog::open(&log_path, output.mirrors_log())?;
    tracing::debug!(path = %sink.path().display(), "deployment log opened");

    let log = Logger::new(Arc::new(sink));
    let shell = HostShell::with_env(loaded.config.resolved_env()?);

    DeploymentOrchestrator::new(loaded.config.plan(), shell, log)
}

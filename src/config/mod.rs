// ABOUTME: Configuration types and parsing for stackpilot.yml.
// ABOUTME: Handles YAML parsing, validation, env resolution and conversion into a deployment plan.

mod deserialize;
mod env_value;
mod init;
mod step;

pub use env_value::{EnvValue, resolve_env_map};
pub use init::{TEMPLATE, init_config};
pub use step::{CommandStep, VerifyConfig};

use crate::deploy::DeploymentPlan;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stackpilot.yml";
pub const CONFIG_FILENAME_ALT: &str = "stackpilot.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".stackpilot/config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    #[serde(default)]
    pub env: HashMap<String, EnvValue>,

    #[serde(default = "default_install")]
    pub install: Vec<CommandStep>,

    #[serde(default = "default_build")]
    pub build: CommandStep,

    #[serde(default = "default_start")]
    pub start: CommandStep,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default = "default_downstream")]
    pub downstream: CommandStep,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs").join("deployment_agent.log")
}

fn default_install() -> Vec<CommandStep> {
    vec![
        CommandStep::new("powershell ./scripts/install_deps.ps1"),
        CommandStep::new("wsl ./scripts/setup_wsl.sh"),
    ]
}

fn default_build() -> CommandStep {
    CommandStep::new("docker-compose build")
}

fn default_start() -> CommandStep {
    CommandStep::new("docker-compose up -d")
}

fn default_downstream() -> CommandStep {
    CommandStep::new("wsl python3 run_crewai.py")
}

/// Attempts used when a step does not set its own.
const INSTALL_ATTEMPTS: u32 = 1;
const BUILD_ATTEMPTS: u32 = 2;
const START_ATTEMPTS: u32 = 2;
const DOWNSTREAM_ATTEMPTS: u32 = 3;

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: default_log_file(),
            env: HashMap::new(),
            install: default_install(),
            build: default_build(),
            start: default_start(),
            verify: VerifyConfig::default(),
            downstream: default_downstream(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Find the config file in `dir`, returning it with its path.
    pub fn discover(dir: &Path) -> Result<(Self, PathBuf)> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in candidates {
            if path.exists() {
                return Ok((Self::load(&path)?, path));
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    pub fn validate(&self) -> Result<()> {
        let steps = self
            .install
            .iter()
            .map(|s| ("install", s))
            .chain([
                ("build", &self.build),
                ("start", &self.start),
                ("downstream", &self.downstream),
            ]);

        for (name, step) in steps {
            if step.command.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{name}: command cannot be empty")));
            }
            if step.attempts == Some(0) {
                return Err(Error::InvalidConfig(format!(
                    "{name}: attempts must be at least 1"
                )));
            }
        }

        if self.verify.attempts == 0 {
            return Err(Error::InvalidConfig(
                "verify: attempts must be at least 1".to_string(),
            ));
        }

        for url in self.verify.endpoints.iter() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::InvalidConfig(format!(
                    "verify: endpoint must be an http(s) URL: {url}"
                )));
            }
        }

        Ok(())
    }

    /// Log file location, relative paths resolved against `base`.
    pub fn log_path(&self, base: &Path) -> PathBuf {
        if self.log_file.is_absolute() {
            self.log_file.clone()
        } else {
            base.join(&self.log_file)
        }
    }

    /// Resolve the command environment against the host.
    pub fn resolved_env(&self) -> Result<HashMap<String, String>> {
        resolve_env_map(&self.env)
    }

    pub fn plan(&self) -> DeploymentPlan {
        DeploymentPlan {
            install: self
                .install
                .iter()
                .map(|s| s.to_spec(INSTALL_ATTEMPTS))
                .collect(),
            build: self.build.to_spec(BUILD_ATTEMPTS),
            start: self.start.to_spec(START_ATTEMPTS),
            verify: self.verify.to_specs(),
            downstream: self.downstream.to_spec(DOWNSTREAM_ATTEMPTS),
        }
    }
}

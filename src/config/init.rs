// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Writes a stackpilot.yml spelling out every default.

use std::path::Path;

use crate::error::{Error, Result};

use super::CONFIG_FILENAME;

pub const TEMPLATE: &str = r#"# Deployment log, relative to this file's directory.
log_file: logs/deployment_agent.log

# Extra environment for every command.
# Values may reference host variables: { env: NAME, default: value }
env: {}

install:
  - powershell ./scripts/install_deps.ps1
  - wsl ./scripts/setup_wsl.sh

build:
  command: docker-compose build
  attempts: 2
  delay: 5s

start:
  command: docker-compose up -d
  attempts: 2
  delay: 5s

verify:
  endpoints:
    - http://localhost:6333/health
    - http://localhost:11434
  attempts: 5
  wait: 3s
  timeout: 5s

downstream:
  command: wsl python3 run_crewai.py
  attempts: 3
  delay: 5s
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, TEMPLATE)?;
    Ok(())
}

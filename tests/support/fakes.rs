// ABOUTME: In-process fakes for the shell, HTTP client and delay seams.
// ABOUTME: Each fake records its calls so tests can assert on attempts and waits.

use async_trait::async_trait;
use parking_lot::Mutex;
use stackpilot::delay::Delay;
use stackpilot::exec::{ProcessOutput, Shell};
use stackpilot::probe::{HttpClient, TransportError};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// Shell whose exit codes are scripted per command.
///
/// Unscripted commands exit 0. Once a command's script runs out, its last
/// exit code repeats.
#[derive(Clone, Default)]
pub struct ScriptedShell {
    scripts: Arc<Mutex<HashMap<String, VecDeque<i32>>>>,
    spawn_failures: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the exit codes `command` returns on successive runs.
    pub fn on(self, command: &str, exits: &[i32]) -> Self {
        self.scripts
            .lock()
            .insert(command.to_string(), exits.iter().copied().collect());
        self
    }

    /// Make `command` fail to spawn.
    pub fn unspawnable(self, command: &str) -> Self {
        self.spawn_failures.lock().push(command.to_string());
        self
    }

    /// Every command run, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn runs_of(&self, command: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == command).count()
    }
}

#[async_trait]
impl Shell for ScriptedShell {
    async fn run(&self, command: &str) -> std::io::Result<ProcessOutput> {
        self.calls.lock().push(command.to_string());

        if self.spawn_failures.lock().iter().any(|c| c == command) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "shell not found",
            ));
        }

        let exit = {
            let mut scripts = self.scripts.lock();
            match scripts.get_mut(command) {
                Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(0),
                Some(queue) => queue.front().copied().unwrap_or(0),
                None => 0,
            }
        };

        Ok(ProcessOutput {
            stdout: format!("ran {command}"),
            stderr: if exit == 0 {
                String::new()
            } else {
                format!("{command} exited {exit}")
            },
            exit_code: Some(exit),
        })
    }
}

/// Records every requested wait without sleeping.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.waits.lock().len()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().push(duration);
    }
}

/// HTTP client answering from a per-URL script.
///
/// Unscripted URLs answer 200. Once a URL's script runs out, its last response repeats.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    scripts: Arc<Mutex<HashMap<String, VecDeque<Result<u16, TransportError>>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, url: &str, responses: Vec<Result<u16, TransportError>>) -> Self {
        self.scripts
            .lock()
            .insert(url.to_string(), responses.into_iter().collect());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn requests_to(&self, url: &str) -> usize {
        self.calls.lock().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn get_status(&self, url: &str, _timeout: Duration) -> Result<u16, TransportError> {
        self.calls.lock().push(url.to_string());

        let mut scripts = self.scripts.lock();
        match scripts.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Ok(200)),
            Some(queue) => queue.front().cloned().unwrap_or(Ok(200)),
            None => Ok(200),
        }
    }
}

pub fn refused() -> Result<u16, TransportError> {
    Err(TransportError::Connect("connection refused".to_string()))
}

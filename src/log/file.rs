// ABOUTME: Append-only deployment log file with console mirroring.
// ABOUTME: Each message becomes timestamped lines; appends are serialized by a mutex.

use super::LogSink;
use crate::error::{Error, Result};
use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Log sink writing to a file and, optionally, to stdout.
pub struct FileLog {
    path: PathBuf,
    file: Mutex<File>,
    mirror: bool,
}

impl FileLog {
    /// Open (or create) the log file and its parent directory in append mode.
    pub fn open(path: impl Into<PathBuf>, mirror: bool) -> Result<Self> {
        let path = path.into();
        let log_err = |source| Error::LogFile {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(log_err)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(log_err)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            mirror,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLog {
    fn append(&self, message: &str) {
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut text = String::new();
        for line in message.trim_end().lines() {
            text.push_str(&format!("[{stamp}] {line}\n"));
        }
        if text.is_empty() {
            text = format!("[{stamp}]\n");
        }

        if self.mirror {
            print!("{text}");
        }

        let mut file = self.file.lock();
        if let Err(e) = file.write_all(text.as_bytes()) {
            tracing::warn!("failed to append to {}: {}", self.path.display(), e);
        }
    }
}

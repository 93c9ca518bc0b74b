use crate::poll::Poll;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only access to a poll snapshot stored as TOML
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Poll> {
        let content = fs::read_to_string(&self.file_path).with_context(|| {
            format!("Failed to read poll snapshot {}", self.file_path.display())
        })?;
        let poll: Poll = toml::from_str(&content).with_context(|| {
            format!("Failed to parse poll snapshot {}", self.file_path.display())
        })?;
        info!(
            "Loaded poll '{}' with {} option(s), {} participant(s)",
            poll.id,
            poll.options.len(),
            poll.participants.len()
        );
        Ok(poll)
    }
}

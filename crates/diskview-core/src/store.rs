//! Last submitted link, persisted between runs.
//!
//! Only the input link is stored, never the resolved URL: direct links are
//! signed and expire.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Load/save of the most recently submitted link.
pub trait LinkStore {
    fn load_last(&self) -> Result<Option<String>>;
    fn save_last(&self, link: &str) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedLink {
    last_url: String,
}

/// JSON file store, by default `~/.local/state/diskview/last_link.json`.
#[derive(Debug, Clone)]
pub struct FileLinkStore {
    path: PathBuf,
}

impl FileLinkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default XDG state location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("diskview")?;
        Ok(xdg_dirs.get_state_home().join("last_link.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LinkStore for FileLinkStore {
    /// Missing file means nothing was saved yet.
    fn load_last(&self) -> Result<Option<String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read last link: {}", self.path.display()))
            }
        };
        let persisted: PersistedLink = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse last link: {}", self.path.display()))?;
        Ok(Some(persisted.last_url).filter(|s| !s.is_empty()))
    }

    fn save_last(&self, link: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let persisted = PersistedLink {
            last_url: link.to_string(),
        };
        let json = serde_json::to_string_pretty(&persisted).context("serialize last link")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write last link: {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    last: Mutex<Option<String>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            last: Mutex::new(Some(link.into())),
        }
    }
}

impl LinkStore for MemoryLinkStore {
    fn load_last(&self) -> Result<Option<String>> {
        let last = self
            .last
            .lock()
            .map_err(|_| anyhow::anyhow!("link store lock poisoned"))?;
        Ok(last.clone())
    }

    fn save_last(&self, link: &str) -> Result<()> {
        let mut last = self
            .last
            .lock()
            .map_err(|_| anyhow::anyhow!("link store lock poisoned"))?;
        *last = Some(link.to_string());
        Ok(())
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::lookup::{CurlTransport, DEFAULT_API_BASE};
use crate::provider::CANONICAL_ORIGIN;

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_canonical_origin() -> String {
    CANONICAL_ORIGIN.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

/// Global configuration loaded from `~/.config/diskview/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskviewConfig {
    /// Public-resource download-link endpoint.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Origin used for the canonical `/d/<key>` fallback attempts.
    #[serde(default = "default_canonical_origin")]
    pub canonical_origin: String,
    /// TCP/TLS connect timeout per lookup, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Optional overall deadline per lookup, in seconds (None = no limit).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Skip lookups whose query repeats an earlier one.
    #[serde(default)]
    pub dedupe_attempts: bool,
    /// Link opened by `play` when nothing has been saved yet.
    #[serde(default)]
    pub default_link: Option<String>,
    /// External player command, split with shell quoting rules; receives the
    /// direct URL as its last argument.
    #[serde(default)]
    pub player: Option<String>,
}

impl Default for DiskviewConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            canonical_origin: default_canonical_origin(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: None,
            dedupe_attempts: false,
            default_link: None,
            player: None,
        }
    }
}

impl From<&DiskviewConfig> for CurlTransport {
    fn from(cfg: &DiskviewConfig) -> Self {
        CurlTransport::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            cfg.request_timeout_secs.map(Duration::from_secs),
        )
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("diskview")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DiskviewConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DiskviewConfig> {
    if !path.exists() {
        let default_cfg = DiskviewConfig::default();
        let toml = toml::to_string_pretty(&default_cfg).context("serialize default config")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DiskviewConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = DiskviewConfig::default();
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.canonical_origin, "https://disk.yandex.ru");
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert!(cfg.request_timeout_secs.is_none());
        assert!(!cfg.dedupe_attempts);
        assert!(cfg.default_link.is_none());
        assert!(cfg.player.is_none());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: DiskviewConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, DiskviewConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            api_base = "http://127.0.0.1:8080/download"
            connect_timeout_secs = 3
            request_timeout_secs = 20
            dedupe_attempts = true
            default_link = "https://disk.yandex.ru/d/abc"
            player = "mpv --fs"
        "#;
        let cfg: DiskviewConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.api_base, "http://127.0.0.1:8080/download");
        assert_eq!(cfg.canonical_origin, "https://disk.yandex.ru");
        assert_eq!(cfg.connect_timeout_secs, 3);
        assert_eq!(cfg.request_timeout_secs, Some(20));
        assert!(cfg.dedupe_attempts);
        assert_eq!(cfg.default_link.as_deref(), Some("https://disk.yandex.ru/d/abc"));
        assert_eq!(cfg.player.as_deref(), Some("mpv --fs"));
    }

    #[test]
    fn load_or_init_writes_defaults_then_reads_them() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let first = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first, DiskviewConfig::default());

        fs::write(&path, "dedupe_attempts = true\n").unwrap();
        let second = load_or_init_at(&path).unwrap();
        assert!(second.dedupe_attempts);
        assert_eq!(second.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn load_or_init_reports_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "connect_timeout_secs = \"soon\"").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
}

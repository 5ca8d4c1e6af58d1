use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::AppConfig;

const SERVER_FILE: &str = "server.json";

/// Server selected with `leadsync server set`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub url: String,
    pub added_at: DateTime<Utc>,
}

impl ServerConfig {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let parsed =
            Url::parse(url.trim()).with_context(|| format!("invalid server URL '{}'", url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("server URL must use http or https, got '{}'", parsed.scheme());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            anyhow::bail!("server URL must not contain a query or fragment: '{}'", url);
        }

        Ok(Self {
            url: parsed.as_str().trim_end_matches('/').to_string(),
            added_at: Utc::now(),
        })
    }
}

/// Where the base URL for a command came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUrlSource {
    Flag,
    Saved,
    Environment,
}

impl BaseUrlSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseUrlSource::Flag => "flag",
            BaseUrlSource::Saved => "saved",
            BaseUrlSource::Environment => "environment",
        }
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("LEADSYNC_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME")
            .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("leadsync").join("cli")
    };

    Ok(config_dir)
}

pub fn load_server_config() -> anyhow::Result<Option<ServerConfig>> {
    load_server_config_from(&get_config_dir()?)
}

pub fn save_server_config(config: &ServerConfig) -> anyhow::Result<()> {
    save_server_config_to(&get_config_dir()?, config)
}

pub fn load_server_config_from(config_dir: &Path) -> anyhow::Result<Option<ServerConfig>> {
    let server_file = config_dir.join(SERVER_FILE);

    if !server_file.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&server_file)
        .with_context(|| format!("failed to read {}", server_file.display()))?;
    let config: ServerConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", server_file.display()))?;
    Ok(Some(config))
}

pub fn save_server_config_to(config_dir: &Path, config: &ServerConfig) -> anyhow::Result<()> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_dir.join(SERVER_FILE), content)?;
    Ok(())
}

/// Flag first, then the saved server, then the environment config
pub fn resolve_base_url(
    flag: Option<&str>,
    saved: Option<&ServerConfig>,
    app: &AppConfig,
) -> (String, BaseUrlSource) {
    if let Some(url) = flag.map(str::trim).filter(|url| !url.is_empty()) {
        return (url.to_string(), BaseUrlSource::Flag);
    }
    if let Some(saved) = saved {
        return (saved.url.clone(), BaseUrlSource::Saved);
    }
    (app.api.base_url.clone(), BaseUrlSource::Environment)
}

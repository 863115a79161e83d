//! Optional config file: `~/.notectl/config.toml`
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:5000"
//! static_dir = "/srv/notectl/client"
//!
//! [client]
//! endpoint = "http://127.0.0.1:5000"
//!
//! [draft]
//! path = "/home/me/.notectl/draft.json"
//! ```
//!
//! Resolution order everywhere: flag/env > config file > built-in default.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default API endpoint for client commands
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotectlConfig {
    pub server: Option<ServerSection>,
    pub client: Option<ClientSection>,
    pub draft: Option<DraftSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftSection {
    pub path: Option<PathBuf>,
}

impl NotectlConfig {
    /// Load the config file; a missing file is an empty config
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {:?}", config_path))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Config file path: `$NOTECTL_CONFIG` or `~/.notectl/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("NOTECTL_CONFIG") {
            return PathBuf::from(path);
        }
        notectl_home().join("config.toml")
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.client.as_ref()?.endpoint.as_deref()
    }

    pub fn bind(&self) -> Option<SocketAddr> {
        self.server.as_ref()?.bind
    }

    pub fn static_dir(&self) -> Option<PathBuf> {
        self.server.as_ref()?.static_dir.clone()
    }

    pub fn draft_path(&self) -> PathBuf {
        self.draft
            .as_ref()
            .and_then(|d| d.path.clone())
            .unwrap_or_else(|| notectl_home().join("draft.json"))
    }
}

/// `~/.notectl`
pub fn notectl_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".notectl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let config = NotectlConfig::parse(
            r#"
            [server]
            bind = "0.0.0.0:8080"

            [client]
            endpoint = "http://notes.local:8080"

            [draft]
            path = "/tmp/draft.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind().unwrap().port(), 8080);
        assert_eq!(config.endpoint(), Some("http://notes.local:8080"));
        assert_eq!(config.draft_path(), PathBuf::from("/tmp/draft.json"));
        assert!(config.static_dir().is_none());
    }

    #[test]
    fn empty_config_falls_back() {
        let config = NotectlConfig::parse("").unwrap();
        assert!(config.endpoint().is_none());
        assert!(config.bind().is_none());
        assert!(config.draft_path().ends_with(".notectl/draft.json"));
    }

    #[test]
    fn rejects_bad_bind() {
        assert!(NotectlConfig::parse("[server]\nbind = \"not an addr\"").is_err());
    }
}

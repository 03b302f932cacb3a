//! Server configuration.
//!
//! Loaded from a TOML file (explicit path, `HERALD_CONFIG`, or the platform
//! config directory) and then overridden by `HERALD_*` environment variables.
//! A missing file is not an error; defaults apply.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HERALD_CONFIG";

const ENV_PREFERRED_HOST: &str = "HERALD_SITE_PREFERRED_HOST";
const ENV_SERVER_HOST: &str = "HERALD_SERVER_HOST";
const ENV_SERVER_PORT: &str = "HERALD_SERVER_PORT";
const ENV_LOG_LEVEL: &str = "HERALD_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "HERALD_LOG_FORMAT";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeraldConfig {
    /// Site identity.
    pub site: SiteConfig,
    /// HTTP listener.
    pub server: ServerConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// `[site]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Host used in every canonical URL.
    pub preferred_host: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            preferred_host: herald_core::site::PREFERRED_HOST.to_string(),
        }
    }
}

/// `[server]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// `[logging]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Log line format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::config(format!(
                "unknown log format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

impl HeraldConfig {
    /// Project name, used for the config directory and CLI hints.
    pub fn project_name() -> &'static str {
        "herald"
    }

    /// `<platform config dir>/herald/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve which config file to use.
    ///
    /// Checks in order:
    /// 1. Explicit path (e.g. `--config`)
    /// 2. `HERALD_CONFIG` environment variable
    /// 3. Platform default path
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// Load the config file (if any) and apply environment overrides.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                Self::from_toml_str(&content)
                    .map_err(|e| Error::config(format!("{}: {e}", path.display())))?
            }
            _ => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply `HERALD_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_PREFERRED_HOST) {
            self.site.preferred_host = host;
        }
        if let Some(host) = lookup(ENV_SERVER_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_SERVER_PORT) {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::config(format!("{ENV_SERVER_PORT}: invalid port '{port}'")))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format.parse()?;
        }
        Ok(())
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        let host = self.site.preferred_host.trim();
        if host.is_empty() {
            return Err(Error::config("site.preferred_host must not be empty"));
        }
        if host.contains("://") || host.contains('/') {
            return Err(Error::config(format!(
                "site.preferred_host must be a bare host name, got '{host}'"
            )));
        }
        Ok(())
    }

    /// Export as `KEY=value` pairs using the override variable names.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let format = match self.logging.format {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        };
        Ok(vec![
            (
                ENV_PREFERRED_HOST.to_string(),
                self.site.preferred_host.clone(),
            ),
            (ENV_SERVER_HOST.to_string(), self.server.host.clone()),
            (ENV_SERVER_PORT.to_string(), self.server.port.to_string()),
            (ENV_LOG_LEVEL.to_string(), self.logging.level.clone()),
            (ENV_LOG_FORMAT.to_string(), format.to_string()),
        ])
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HeraldConfig::default();
        assert_eq!(config.site.preferred_host, "www.lumenhouse.org");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = HeraldConfig::from_toml_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.preferred_host, "www.lumenhouse.org");
    }

    #[test]
    fn test_toml_roundtrip_contains_sections() {
        let toml_str = HeraldConfig::default().to_toml_string().unwrap();
        assert!(toml_str.contains("[site]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[logging]"));
        assert_eq!(
            HeraldConfig::from_toml_str(&toml_str).unwrap(),
            HeraldConfig::default()
        );
    }

    #[test]
    fn test_env_overrides() {
        let mut config = HeraldConfig::default();
        config
            .apply_env_overrides(lookup_from(&[
                ("HERALD_SITE_PREFERRED_HOST", "staging.lumenhouse.org"),
                ("HERALD_SERVER_PORT", "9000"),
                ("HERALD_LOG_FORMAT", "JSON"),
            ]))
            .unwrap();
        assert_eq!(config.site.preferred_host, "staging.lumenhouse.org");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_override_bad_port() {
        let mut config = HeraldConfig::default();
        let result = config.apply_env_overrides(lookup_from(&[("HERALD_SERVER_PORT", "http")]));
        assert!(result.unwrap_err().to_string().contains("invalid port"));
    }

    #[test]
    fn test_validate_rejects_url_host() {
        let mut config = HeraldConfig::default();
        config.site.preferred_host = "https://www.lumenhouse.org".to_string();
        assert!(config.validate().is_err());
        config.site.preferred_host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site]\npreferred_host = \"lumenhouse.test\"\n").unwrap();

        let config = HeraldConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.site.preferred_host, "lumenhouse.test");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let config = HeraldConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
        assert!(HeraldConfig::load(Some(path.to_str().unwrap())).is_err());
    }

    #[test]
    fn test_to_env_vars() {
        let vars = HeraldConfig::default().to_env_vars().unwrap();
        assert!(vars.contains(&("HERALD_SERVER_PORT".to_string(), "3000".to_string())));
        assert!(vars.contains(&("HERALD_LOG_FORMAT".to_string(), "text".to_string())));
    }
}

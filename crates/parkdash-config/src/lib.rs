//! Configuration for the parkdash CLI.
//!
//! TOML file under the platform config directory, overridable via
//! `PARKDASH_*` environment variables, and translation to
//! `parkdash_core::SessionConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use parkdash_core::SessionConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Backend base URL, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Background refresh cadence in seconds. `0` disables it.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    /// Presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: default_timeout(),
            refresh_interval: default_refresh_interval(),
            defaults: Defaults::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:8090/api".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_refresh_interval() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "parkdash", "parkdash").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("parkdash");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config: built-in defaults, then the TOML file, then
/// `PARKDASH_*` environment variables. Nested keys use a double
/// underscore, e.g. `PARKDASH_DEFAULTS__OUTPUT`.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("PARKDASH_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to SessionConfig ────────────────────────────────────

/// Build a `SessionConfig` from loaded config, validating the URL.
pub fn session_config(cfg: &Config) -> Result<SessionConfig, ConfigError> {
    let _: url::Url = cfg.api_url.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {}", cfg.api_url),
    })?;

    Ok(SessionConfig {
        api_url: cfg.api_url.clone(),
        timeout: Duration::from_secs(cfg.timeout),
        refresh_interval: Duration::from_secs(cfg.refresh_interval),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_backend() {
        let cfg = Config::default();
        assert_eq!(cfg.api_url, "http://localhost:8090/api");
        assert_eq!(cfg.timeout, 30);
        assert_eq!(cfg.refresh_interval, 30);
        assert_eq!(cfg.defaults.output, "table");
    }

    #[test]
    fn env_overrides_the_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "parkdash.toml",
                r#"
                    api_url = "http://file.example/api"
                    timeout = 10
                "#,
            )?;
            jail.set_env("PARKDASH_TIMEOUT", "5");

            let figment = Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file("parkdash.toml"))
                .merge(Env::prefixed("PARKDASH_").split("__"));
            let cfg: Config = figment.extract()?;

            assert_eq!(cfg.api_url, "http://file.example/api");
            assert_eq!(cfg.timeout, 5);
            // untouched keys fall through to the defaults
            assert_eq!(cfg.refresh_interval, 30);
            Ok(())
        });
    }

    #[test]
    fn nested_env_keys_use_double_underscores() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PARKDASH_DEFAULTS__OUTPUT", "json");

            let figment = Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Env::prefixed("PARKDASH_").split("__"));
            let cfg: Config = figment.extract()?;

            assert_eq!(cfg.defaults.output, "json");
            Ok(())
        });
    }

    #[test]
    fn session_config_rejects_malformed_urls() {
        let cfg = Config {
            api_url: "not a url".into(),
            ..Config::default()
        };
        let err = session_config(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "api_url"));
    }

    #[test]
    fn session_config_carries_durations_through() {
        let cfg = Config {
            timeout: 5,
            refresh_interval: 0,
            ..Config::default()
        };
        let sc = session_config(&cfg).unwrap();
        assert_eq!(sc.timeout, Duration::from_secs(5));
        assert_eq!(sc.refresh_interval, Duration::ZERO);
    }
}

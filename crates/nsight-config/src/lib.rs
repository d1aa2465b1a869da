//! Shared configuration for the nsight CLI and proxy.
//!
//! TOML profiles, `.env` support, and credential resolution
//! (env var + keyring + plaintext). Both binaries depend on this crate;
//! the canonical environment variables are `NSIGHT_SERVER` and
//! `NSIGHT_API_KEY`, matching the dashboard documentation.

use std::collections::HashMap;
use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error(
        "no dashboard server configured -- set NSIGHT_SERVER or add one to {path}"
    )]
    NoServer { path: String },

    #[error(
        "no API key configured for profile '{profile}' -- set NSIGHT_API_KEY or run with a config file"
    )]
    NoCredentials { profile: String },

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

/// Top-level TOML configuration shared by the CLI and the proxy.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Named dashboard profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// A named dashboard profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Dashboard server host (e.g. "www.systemmonitor.eu").
    pub server: String,

    /// API key (plaintext -- prefer keyring or env var).
    pub api_key: Option<String>,

    /// Environment variable name holding the API key.
    pub api_key_env: Option<String>,

    /// Override request timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "fraziersystems", "nsight").map_or_else(
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
    p.push("nsight");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full `Config` from `.env`, file, and environment.
pub fn load_config() -> Result<Config, ConfigError> {
    // A missing .env file is fine; environment variables still apply.
    if let Err(e) = dotenvy::dotenv() {
        debug!(error = %e, "no .env file loaded");
    }

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

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

// ── Credential resolution ───────────────────────────────────────────

/// Fully resolved connection settings for one dashboard.
pub struct Credentials {
    pub server: String,
    pub api_key: SecretString,
    pub timeout_secs: u64,
}

/// Resolve the dashboard server address: `NSIGHT_SERVER` wins, then the
/// active profile.
pub fn resolve_server(profile: Option<&Profile>) -> Result<String, ConfigError> {
    if let Ok(server) = std::env::var("NSIGHT_SERVER") {
        if !server.is_empty() {
            return Ok(server);
        }
    }
    match profile {
        Some(p) if !p.server.is_empty() => Ok(p.server.clone()),
        _ => Err(ConfigError::NoServer {
            path: config_path().display().to_string(),
        }),
    }
}

/// Resolve an API key from the credential chain.
pub fn resolve_api_key(
    profile: Option<&Profile>,
    profile_name: &str,
) -> Result<SecretString, ConfigError> {
    // 1. Canonical env var
    if let Ok(val) = std::env::var("NSIGHT_API_KEY") {
        if !val.is_empty() {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Profile's api_key_env → env var lookup
    if let Some(env_name) = profile.and_then(|p| p.api_key_env.as_ref()) {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new("nsight", &format!("{profile_name}/api-key")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(key) = profile.and_then(|p| p.api_key.as_ref()) {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve full credentials for the given (or default) profile.
pub fn resolve_credentials(profile_override: Option<&str>) -> Result<Credentials, ConfigError> {
    let cfg = load_config_or_default();
    let profile_name = profile_override
        .map(str::to_owned)
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    let profile = cfg.profiles.get(&profile_name);

    let server = resolve_server(profile)?;
    let api_key = resolve_api_key(profile, &profile_name)?;
    let timeout_secs = profile.and_then(|p| p.timeout).unwrap_or(30);

    Ok(Credentials {
        server,
        api_key,
        timeout_secs,
    })
}

/// Resolve only the server address (the proxy takes per-request keys).
pub fn resolve_server_only(profile_override: Option<&str>) -> Result<String, ConfigError> {
    let cfg = load_config_or_default();
    let profile_name = profile_override
        .map(str::to_owned)
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    resolve_server(cfg.profiles.get(&profile_name))
}

//! CLI error types with miette diagnostics.
//!
//! Maps API, core, and config errors into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use nsight_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the dashboard")]
    #[diagnostic(
        code(nsight::connection_failed),
        help("Check NSIGHT_SERVER and your network connection.")
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(nsight::timeout),
        help("Increase the timeout with --timeout or check dashboard responsiveness.")
    )]
    Timeout,

    // ── Authentication / configuration ───────────────────────────────
    #[error("The dashboard rejected the request (HTTP {status})")]
    #[diagnostic(
        code(nsight::auth_failed),
        help("Verify the API key. It is configured under Settings > General Settings > API on the dashboard.")
    )]
    ApiRejected { status: u16, body: String },

    #[error("No API key configured for profile '{profile}'")]
    #[diagnostic(
        code(nsight::no_credentials),
        help("Set NSIGHT_API_KEY (optionally in a .env file) or add api_key to the profile.")
    )]
    NoCredentials { profile: String },

    #[error("No dashboard server configured")]
    #[diagnostic(
        code(nsight::no_server),
        help("Set NSIGHT_SERVER (e.g. www.systemmonitor.eu) or add server to the profile.")
    )]
    NoServer,

    #[error("Configuration error: {message}")]
    #[diagnostic(code(nsight::config))]
    Config { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(nsight::not_found),
        help("Name matching is exact and case-sensitive. Run: nsight {list_command}")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Cache ────────────────────────────────────────────────────────
    #[error("Cache table '{table}' is missing")]
    #[diagnostic(
        code(nsight::cache_missing),
        help("Run `nsight export` without --cache first to populate the cache.")
    )]
    CacheMissing { table: String },

    // ── API data ─────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(nsight::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(nsight::validation))]
    Validation { field: String, reason: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(nsight::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::ApiRejected { .. } | Self::NoCredentials { .. } | Self::NoServer => {
                exit_code::AUTH
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Error mappings ───────────────────────────────────────────────────

impl From<nsight_api::Error> for CliError {
    fn from(err: nsight_api::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        match err {
            nsight_api::Error::Status { status, body, .. } if status == 401 || status == 403 => {
                Self::ApiRejected { status, body }
            }
            nsight_api::Error::Transport(e) => Self::ConnectionFailed { source: e.into() },
            nsight_api::Error::InvalidServer { .. } | nsight_api::Error::InvalidUrl(_) => {
                Self::NoServer
            }
            other => Self::ApiError {
                message: other.to_string(),
            },
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(api) => api.into(),
            CoreError::CacheTableMissing { table, .. } => Self::CacheMissing {
                table: table.into(),
            },
            CoreError::Serialize(e) => Self::Json(e),
            other => Self::ApiError {
                message: other.to_string(),
            },
        }
    }
}

impl From<nsight_config::ConfigError> for CliError {
    fn from(err: nsight_config::ConfigError) -> Self {
        match err {
            nsight_config::ConfigError::NoCredentials { profile } => {
                Self::NoCredentials { profile }
            }
            nsight_config::ConfigError::NoServer { .. } => Self::NoServer,
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

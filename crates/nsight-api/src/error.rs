use thiserror::Error;

/// Top-level error type for the `nsight-api` crate.
///
/// Covers every failure mode of a single remote call: configuration,
/// transport, non-2xx responses, and XML decoding. `nsight-core` maps
/// these into its partial-failure policy; the dispatchers surface them
/// directly.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// The server address could not be turned into a base URL.
    #[error("invalid server address '{server}': {reason}")]
    InvalidServer { server: String, reason: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API answered with a non-2xx status for this service call.
    #[error("service '{service}' returned HTTP {status}")]
    Status {
        service: String,
        status: u16,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// XML deserialization failed. Carries the raw body for diagnosis.
    #[error("failed to decode XML response from '{service}': {message}")]
    Decode {
        service: String,
        message: String,
        body: String,
    },
}

impl Error {
    /// Returns `true` if this call failed on a timed-out round trip.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// The HTTP status of a rejected call, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

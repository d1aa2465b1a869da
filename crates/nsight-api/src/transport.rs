// Shared transport configuration for building reqwest::Client instances.
//
// Every remote call goes through one client built here, so the bounded
// per-request timeout applies uniformly: a hung call surfaces as a
// per-call transport error rather than stalling a whole export walk.

use std::time::Duration;

/// Transport settings for the N-sight HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. A timed-out call is treated like any other
    /// failed call by the layers above.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("nsight-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?)
    }
}

// N-sight API HTTP client
//
// Wraps `reqwest::Client` with N-sight URL construction and XML payload
// decoding. All endpoint modules (inventory, checks, assets, etc.) are
// implemented as inherent methods via separate files to keep this module
// focused on transport mechanics.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the N-sight data-extraction API.
///
/// Every service is a GET against `{base}/api/` with `apikey`, `service`,
/// and the service's own parameters as query-string entries. Responses are
/// XML; endpoint methods decode them into the types in [`crate::models`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl ApiClient {
    /// Create a client for the given dashboard server (e.g.
    /// `www.systemmonitor.eu`) and API key.
    pub fn new(
        server: &str,
        api_key: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        if server.is_empty() {
            return Err(Error::InvalidServer {
                server: server.into(),
                reason: "server address is empty".into(),
            });
        }

        // Accept either a bare host or a full URL; a bare host gets the
        // canonical https://{server}/api/ form.
        let base = if server.contains("://") {
            server.trim_end_matches('/').to_owned()
        } else {
            format!("https://{server}")
        };
        let base_url = Url::parse(&format!("{base}/api/")).map_err(|e| Error::InvalidServer {
            server: server.into(),
            reason: e.to_string(),
        })?;

        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// The API base URL (without credentials).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Perform one service call and return the raw response body.
    ///
    /// A non-2xx response is a hard error for the call; the body is
    /// carried in the error for diagnosis.
    pub(crate) async fn call(
        &self,
        service: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, Error> {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apikey", self.api_key.expose_secret());
            query.append_pair("service", service);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        debug!(service, "GET {}", self.base_url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Status {
                service: service.into(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Perform a service call and decode the XML body into `T`.
    ///
    /// An empty (or whitespace-only) body decodes as `T::default()` --
    /// the API answers some list services with no payload at all when
    /// there is nothing to report.
    pub(crate) async fn call_decoded<T>(
        &self,
        service: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        let body = self.call(service, params).await?;
        decode_xml(service, &body)
    }
}

/// Decode an XML body into `T`, treating an empty body as `T::default()`.
pub(crate) fn decode_xml<T>(service: &str, body: &str) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    quick_xml::de::from_str(body).map_err(|e| Error::Decode {
        service: service.into(),
        message: e.to_string(),
        body: body.into(),
    })
}

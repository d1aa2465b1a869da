//! Router and request handlers.
//!
//! `/api` is the single dispatch endpoint: `service` selects the
//! upstream call, `apikey` is translated into a per-request client, and
//! the decoded result is re-published as JSON. `/health` is
//! unauthenticated. Unknown services and missing/invalid parameters are
//! 400s with a JSON error envelope; upstream failures are 502s.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::json;
use tracing::{info, warn};

use nsight_api::requests::{
    AddClientRequest, AddSiteRequest, DriveSpaceHistoryQuery, InstallationPackageRequest,
    OutagesQuery, PatchSelection, PerformanceHistoryQuery,
};
use nsight_api::{ApiClient, TransportConfig};

// ── State ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    server: String,
    transport: TransportConfig,
}

impl AppState {
    pub fn new(server: String) -> Self {
        Self {
            inner: Arc::new(Inner {
                server,
                transport: TransportConfig::default(),
            }),
        }
    }
}

// ── Errors ──────────────────────────────────────────────────────────

enum ProxyError {
    MissingParam(&'static str),
    InvalidParam(&'static str),
    UnknownService(String),
    ClientSetup(nsight_api::Error),
    Upstream(nsight_api::Error),
    Internal(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingParam(name) => {
                (StatusCode::BAD_REQUEST, format!("Missing {name} parameter"))
            }
            Self::InvalidParam(name) => {
                (StatusCode::BAD_REQUEST, format!("Invalid {name} parameter"))
            }
            Self::UnknownService(service) => (
                StatusCode::BAD_REQUEST,
                format!("Unsupported service: {service}"),
            ),
            Self::ClientSetup(e) => {
                warn!(error = %e, "failed to create upstream client");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to create API client".to_owned(),
                )
            }
            Self::Upstream(e) => {
                warn!(error = %e, "upstream call failed");
                (StatusCode::BAD_GATEWAY, format!("API call failed: {e}"))
            }
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// ── Router ──────────────────────────────────────────────────────────

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api", get(api))
        .route("/api/", get(api))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "service": "N-Sight JSON Proxy",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/api", "/health"],
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "nsight-proxy" }))
}

// ── Dispatch ────────────────────────────────────────────────────────

type Params = HashMap<String, String>;

fn require<'a>(params: &'a Params, name: &'static str) -> Result<&'a str, ProxyError> {
    match params.get(name).map(String::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ProxyError::MissingParam(name)),
    }
}

fn require_i64(params: &Params, name: &'static str) -> Result<i64, ProxyError> {
    require(params, name)?
        .parse()
        .map_err(|_| ProxyError::InvalidParam(name))
}

fn optional_i64(params: &Params, name: &'static str) -> Result<Option<i64>, ProxyError> {
    match params.get(name) {
        Some(raw) if !raw.is_empty() => raw
            .parse()
            .map(Some)
            .map_err(|_| ProxyError::InvalidParam(name)),
        _ => Ok(None),
    }
}

async fn api(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let service = require(&params, "service")?.to_owned();
    let api_key = require(&params, "apikey")?.to_owned();

    info!(service, "handling proxy request");

    let client = ApiClient::new(
        &state.inner.server,
        SecretString::from(api_key),
        &state.inner.transport,
    )
    .map_err(ProxyError::ClientSetup)?;

    let result = dispatch(&client, &service, &params).await?;
    Ok(Json(result))
}

/// The flat service table. Each arm validates its fixed parameter set,
/// makes exactly one upstream call, and serializes the decoded records.
async fn dispatch(
    client: &ApiClient,
    service: &str,
    params: &Params,
) -> Result<serde_json::Value, ProxyError> {
    let value = match service {
        "list_clients" => to_value(client.list_clients().await)?,
        "list_sites" => {
            let client_id = require_i64(params, "clientid")?;
            to_value(client.list_sites(client_id).await)?
        }
        "list_servers" => {
            let site_id = require_i64(params, "siteid")?;
            to_value(client.list_servers(site_id).await)?
        }
        "list_workstations" => {
            let site_id = require_i64(params, "siteid")?;
            to_value(client.list_workstations(site_id).await)?
        }
        "list_devices" => {
            let site_id = require_i64(params, "siteid")?;
            to_value(client.list_devices(site_id).await)?
        }
        "list_devices_at_client" => {
            let client_id = require_i64(params, "clientid")?;
            to_value(client.list_devices_at_client(client_id).await)?
        }
        "list_device_asset_details" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.device_asset_details(device_id).await)?
        }
        "list_failing_checks" => to_value(client.list_failing_checks().await)?,
        "list_checks" => {
            // Accepts either a device or a site scope.
            if let Some(device_id) = optional_i64(params, "deviceid")? {
                to_value(client.list_checks(device_id).await)?
            } else if let Some(site_id) = optional_i64(params, "siteid")? {
                to_value(client.list_checks_by_site(site_id).await)?
            } else {
                return Err(ProxyError::MissingParam("deviceid or siteid"));
            }
        }
        "list_device_monitoring_details" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_device_monitoring_details(device_id).await)?
        }
        "list_check_configuration" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_check_configuration(device_id, None).await)?
        }
        "list_check_configuration_windows" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(
                client
                    .list_check_configuration(device_id, Some("windows"))
                    .await,
            )?
        }
        "list_check_configuration_mac" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_check_configuration(device_id, Some("mac")).await)?
        }
        "list_check_configuration_linux" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(
                client
                    .list_check_configuration(device_id, Some("linux"))
                    .await,
            )?
        }
        "list_outages" => {
            let query = OutagesQuery {
                site_id: require_i64(params, "siteid")?,
                start_date: params.get("startdate").cloned().unwrap_or_default(),
                end_date: params.get("enddate").cloned().unwrap_or_default(),
            };
            to_value(client.list_outages(&query).await)?
        }
        "clear_check" => {
            let check_id = require_i64(params, "checkid")?;
            client
                .clear_check(check_id)
                .await
                .map_err(ProxyError::Upstream)?;
            success("Check cleared")
        }
        "add_check_note" => {
            let check_id = require_i64(params, "checkid")?;
            let note = require(params, "note")?;
            client
                .add_check_note(check_id, note)
                .await
                .map_err(ProxyError::Upstream)?;
            success("Note added to check")
        }
        "list_agentless_assets" => {
            let site_id = require_i64(params, "siteid")?;
            to_value(client.list_agentless_assets(site_id).await)?
        }
        "list_hardware" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_hardware(device_id).await)?
        }
        "list_software" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_software(device_id).await)?
        }
        "list_license_groups" => to_value(client.list_license_groups().await)?,
        "list_patches" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_patches(device_id).await)?
        }
        "approve_patch" | "ignore_patch" => {
            let selection = PatchSelection {
                device_id: require_i64(params, "deviceid")?,
                patch_ids: parse_patch_ids(require(params, "patchids")?)?,
            };
            if service == "approve_patch" {
                client
                    .approve_patches(&selection)
                    .await
                    .map_err(ProxyError::Upstream)?;
                success("Patches approved")
            } else {
                client
                    .ignore_patches(&selection)
                    .await
                    .map_err(ProxyError::Upstream)?;
                success("Patches ignored")
            }
        }
        "list_antivirus_products" => to_value(client.list_antivirus_products().await)?,
        "list_antivirus_definitions" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_antivirus_definitions(device_id).await)?
        }
        "list_quarantine" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_quarantine(device_id).await)?
        }
        "start_scan" => {
            let device_id = require_i64(params, "deviceid")?;
            let scan_type = require(params, "scantype")?;
            client
                .start_scan(device_id, scan_type)
                .await
                .map_err(ProxyError::Upstream)?;
            success("Antivirus scan started")
        }
        "list_performance_history" => {
            let query = PerformanceHistoryQuery {
                device_id: require_i64(params, "deviceid")?,
                check_id: require_i64(params, "checkid")?,
                start_date: params.get("startdate").cloned().unwrap_or_default(),
                end_date: params.get("enddate").cloned().unwrap_or_default(),
            };
            to_value(client.list_performance_history(&query).await)?
        }
        "list_drive_space_history" => {
            let query = DriveSpaceHistoryQuery {
                device_id: require_i64(params, "deviceid")?,
                start_date: params.get("startdate").cloned().unwrap_or_default(),
                end_date: params.get("enddate").cloned().unwrap_or_default(),
            };
            to_value(client.list_drive_space_history(&query).await)?
        }
        "list_templates" => to_value(client.list_templates().await)?,
        "list_backup_sessions" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_backup_sessions(device_id).await)?
        }
        "list_wall_chart_settings" => to_value(client.list_wall_chart_settings().await)?,
        "list_general_settings" => to_value(client.list_general_settings().await)?,
        "list_active_directory_users" => {
            let device_id = require_i64(params, "deviceid")?;
            to_value(client.list_active_directory_users(device_id).await)?
        }
        "run_task_now" => {
            let task_id = require_i64(params, "taskid")?;
            client
                .run_task_now(task_id)
                .await
                .map_err(ProxyError::Upstream)?;
            success("Task started")
        }
        "add_client" => {
            let request = AddClientRequest {
                name: require(params, "name")?.to_owned(),
                contact_name: params.get("contactname").cloned().unwrap_or_default(),
                contact_email: params.get("contactemail").cloned().unwrap_or_default(),
            };
            client
                .add_client(&request)
                .await
                .map_err(ProxyError::Upstream)?;
            success("Client added")
        }
        "add_site" => {
            let request = AddSiteRequest {
                client_id: require_i64(params, "clientid")?,
                name: require(params, "name")?.to_owned(),
                contact_name: params.get("contactname").cloned().unwrap_or_default(),
                contact_email: params.get("contactemail").cloned().unwrap_or_default(),
            };
            client
                .add_site(&request)
                .await
                .map_err(ProxyError::Upstream)?;
            success("Site added")
        }
        "get_site_installation_package" => {
            let request = InstallationPackageRequest {
                site_id: require_i64(params, "siteid")?,
                package_type: require(params, "packagetype")?.to_owned(),
            };
            let package = client
                .site_installation_package(&request)
                .await
                .map_err(ProxyError::Upstream)?;
            json!({ "status": "success", "package_size": package.len() })
        }
        other => return Err(ProxyError::UnknownService(other.to_owned())),
    };
    Ok(value)
}

fn success(message: &str) -> serde_json::Value {
    json!({ "status": "success", "message": message })
}

fn parse_patch_ids(raw: &str) -> Result<Vec<i64>, ProxyError> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse()
                .map_err(|_| ProxyError::InvalidParam("patchids"))
        })
        .collect()
}

fn to_value<T: serde::Serialize>(
    result: Result<T, nsight_api::Error>,
) -> Result<serde_json::Value, ProxyError> {
    let data = result.map_err(ProxyError::Upstream)?;
    serde_json::to_value(data).map_err(|e| ProxyError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    /// Spawn the proxy against a mock dashboard; returns the proxy's
    /// base URL.
    async fn spawn_proxy(dashboard: &MockServer) -> String {
        let router = build_router(AppState::new(dashboard.uri()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn health_is_unauthenticated() {
        let dashboard = MockServer::start().await;
        let base = spawn_proxy(&dashboard).await;

        let resp = reqwest::get(format!("{base}/health")).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn translates_xml_listing_to_json() {
        let dashboard = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/"))
            .and(query_param("service", "list_clients"))
            .and(query_param("apikey", "caller-key"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<result><items>\
                   <client><clientid>1</clientid><name>Acme</name></client>\
                 </items></result>",
                "text/xml",
            ))
            .mount(&dashboard)
            .await;

        let base = spawn_proxy(&dashboard).await;
        let resp = reqwest::get(format!(
            "{base}/api?service=list_clients&apikey=caller-key"
        ))
        .await
        .unwrap();

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body[0]["client_id"], 1);
        assert_eq!(body[0]["name"], "Acme");
    }

    #[tokio::test]
    async fn missing_apikey_is_bad_request() {
        let dashboard = MockServer::start().await;
        let base = spawn_proxy(&dashboard).await;

        let resp = reqwest::get(format!("{base}/api?service=list_clients"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("apikey"));
    }

    #[tokio::test]
    async fn unknown_service_is_bad_request() {
        let dashboard = MockServer::start().await;
        let base = spawn_proxy(&dashboard).await;

        let resp = reqwest::get(format!("{base}/api?service=drop_tables&apikey=k"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("drop_tables"));
    }

    #[tokio::test]
    async fn invalid_numeric_param_is_bad_request() {
        let dashboard = MockServer::start().await;
        let base = spawn_proxy(&dashboard).await;

        let resp = reqwest::get(format!(
            "{base}/api?service=list_sites&apikey=k&clientid=acme"
        ))
        .await
        .unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn upstream_failure_is_bad_gateway() {
        let dashboard = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&dashboard)
            .await;

        let base = spawn_proxy(&dashboard).await;
        let resp = reqwest::get(format!("{base}/api?service=list_clients&apikey=k"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 502);
    }
}

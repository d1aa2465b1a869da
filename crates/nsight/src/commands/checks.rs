//! Check and monitoring command handlers.

use nsight_api::ApiClient;
use nsight_api::requests::OutagesQuery;

use crate::error::CliError;
use crate::output;

pub async fn list_failing(api: &ApiClient) -> Result<(), CliError> {
    let checks = api.list_failing_checks().await?;
    output::print_json(&checks)
}

/// One positional id, tried as a device first and then as a site --
/// the service accepts either and the CLI can't tell which was meant.
pub async fn list(api: &ApiClient, id: i64) -> Result<(), CliError> {
    let checks = match api.list_checks(id).await {
        Ok(checks) => checks,
        Err(_) => api.list_checks_by_site(id).await?,
    };
    output::print_json(&checks)
}

pub async fn monitoring_details(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let details = api.list_device_monitoring_details(device_id).await?;
    output::print_json(&details)
}

pub async fn configuration(
    api: &ApiClient,
    device_id: i64,
    os: Option<&str>,
) -> Result<(), CliError> {
    let config = api.list_check_configuration(device_id, os).await?;
    output::print_json(&config)
}

pub async fn outages(
    api: &ApiClient,
    site_id: i64,
    start_date: String,
    end_date: String,
) -> Result<(), CliError> {
    let outages = api
        .list_outages(&OutagesQuery {
            site_id,
            start_date,
            end_date,
        })
        .await?;
    output::print_json(&outages)
}

pub async fn clear(api: &ApiClient, check_id: i64) -> Result<(), CliError> {
    api.clear_check(check_id).await?;
    output::print_success("Check cleared")
}

pub async fn add_note(api: &ApiClient, check_id: i64, note: &str) -> Result<(), CliError> {
    api.add_check_note(check_id, note).await?;
    output::print_success("Note added to check")
}

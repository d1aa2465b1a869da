//! Entity-listing command handlers.

use nsight_api::ApiClient;

use crate::error::CliError;
use crate::output;

use super::util;

pub async fn list_clients(api: &ApiClient) -> Result<(), CliError> {
    let clients = api.list_clients().await?;
    output::print_json(&clients)
}

pub async fn list_sites(api: &ApiClient, client: &str) -> Result<(), CliError> {
    let client_id = util::resolve_client_id(api, client).await?;
    let sites = api.list_sites(client_id).await?;
    output::print_json(&sites)
}

pub async fn list_servers(api: &ApiClient, site: &str) -> Result<(), CliError> {
    let site_id = util::resolve_site_id(api, site).await?;
    let servers = api.list_servers(site_id).await?;
    output::print_json(&servers)
}

pub async fn list_workstations(api: &ApiClient, site: &str) -> Result<(), CliError> {
    let site_id = util::resolve_site_id(api, site).await?;
    let workstations = api.list_workstations(site_id).await?;
    output::print_json(&workstations)
}

pub async fn list_devices(api: &ApiClient, site_id: i64) -> Result<(), CliError> {
    let devices = api.list_devices(site_id).await?;
    output::print_json(&devices)
}

pub async fn list_devices_at_client(api: &ApiClient, client_id: i64) -> Result<(), CliError> {
    let devices = api.list_devices_at_client(client_id).await?;
    output::print_json(&devices)
}

pub async fn list_agentless_assets(api: &ApiClient, site_id: i64) -> Result<(), CliError> {
    let assets = api.list_agentless_assets(site_id).await?;
    output::print_json(&assets)
}
